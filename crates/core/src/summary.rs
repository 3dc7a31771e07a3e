// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Portfolio-level tallies and the portfolio report.

use crate::assessment::{MatterAssessment, assess_matter, sort_by_urgency};
use crate::config::SlaConfigSet;
use crate::error::CoreError;
use casetrack_domain::{DeadlineBucket, Matter, SlaTier, iso_date};
use serde::{Deserialize, Serialize};
use time::Date;
use tracing::{info, warn};

/// Counts for the deadline counter card.
///
/// Closed matters are not in any bucket; they are counted in `excluded`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeadlineSummary {
    pub overdue: usize,
    pub this_week: usize,
    pub upcoming: usize,
    pub no_deadline: usize,
    pub excluded: usize,
}

impl DeadlineSummary {
    /// Adds one matter's bucket to the tally.
    pub const fn record(&mut self, bucket: Option<DeadlineBucket>) {
        match bucket {
            Some(DeadlineBucket::Overdue) => self.overdue += 1,
            Some(DeadlineBucket::ThisWeek) => self.this_week += 1,
            Some(DeadlineBucket::Upcoming) => self.upcoming += 1,
            Some(DeadlineBucket::NoDeadline) => self.no_deadline += 1,
            None => self.excluded += 1,
        }
    }

    /// Tallies a set of assessments.
    #[must_use]
    pub fn from_assessments(assessments: &[MatterAssessment]) -> Self {
        let mut summary = Self::default();
        for assessment in assessments {
            summary.record(assessment.deadline_bucket);
        }
        summary
    }

    /// Returns the number of open matters counted.
    #[must_use]
    pub const fn open_total(&self) -> usize {
        self.overdue + self.this_week + self.upcoming + self.no_deadline
    }
}

/// Counts of matters per SLA tier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlaSummary {
    pub within_sla: usize,
    pub at_risk: usize,
    pub critical: usize,
    pub overdue: usize,
    pub completed: usize,
    /// Matters whose stored tier disagrees with the computed one.
    pub stale: usize,
}

impl SlaSummary {
    /// Adds one assessment to the tally.
    pub const fn record(&mut self, assessment: &MatterAssessment) {
        match assessment.sla_tier {
            SlaTier::WithinSla => self.within_sla += 1,
            SlaTier::AtRisk => self.at_risk += 1,
            SlaTier::Critical => self.critical += 1,
            SlaTier::Overdue => self.overdue += 1,
            SlaTier::Completed => self.completed += 1,
        }
        if assessment.stale_stored_tier.is_some() {
            self.stale += 1;
        }
    }

    /// Tallies a set of assessments.
    #[must_use]
    pub fn from_assessments(assessments: &[MatterAssessment]) -> Self {
        let mut summary = Self::default();
        for assessment in assessments {
            summary.record(assessment);
        }
        summary
    }
}

/// A matter that could not be assessed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentFailure {
    pub case_id: String,
    pub error: String,
}

/// The dashboard's view of a set of matters on one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortfolioReport {
    #[serde(with = "iso_date")]
    pub today: Date,
    /// Assessed matters, worst first.
    pub assessments: Vec<MatterAssessment>,
    pub deadlines: DeadlineSummary,
    pub sla: SlaSummary,
    /// Matters left out of every count because they could not be assessed.
    pub failures: Vec<AssessmentFailure>,
}

/// Assesses every matter and builds the portfolio report.
///
/// A matter that fails assessment is reported in `failures` and excluded
/// from the tallies; it does not stop the rest from being assessed.
#[must_use]
pub fn assess_portfolio(matters: &[Matter], configs: &SlaConfigSet, today: Date) -> PortfolioReport {
    let mut assessments: Vec<MatterAssessment> = Vec::with_capacity(matters.len());
    let mut failures: Vec<AssessmentFailure> = Vec::new();

    for matter in matters {
        match assess_matter(matter, configs, today) {
            Ok(assessment) => assessments.push(assessment),
            Err(e) => {
                warn!(case_id = %matter.case_id, "{e}");
                failures.push(failure_for(matter, &e));
            }
        }
    }

    sort_by_urgency(&mut assessments);

    let deadlines = DeadlineSummary::from_assessments(&assessments);
    let sla = SlaSummary::from_assessments(&assessments);

    info!(
        %today,
        assessed = assessments.len(),
        failed = failures.len(),
        overdue_deadlines = deadlines.overdue,
        overdue_sla = sla.overdue,
        "Portfolio assessed"
    );

    PortfolioReport {
        today,
        assessments,
        deadlines,
        sla,
        failures,
    }
}

fn failure_for(matter: &Matter, error: &CoreError) -> AssessmentFailure {
    AssessmentFailure {
        case_id: error.case_id().unwrap_or(&matter.case_id).to_string(),
        error: error.to_string(),
    }
}
