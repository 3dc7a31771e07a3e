// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Per-matter assessment.
//!
//! Combines the domain derivations into the values a dashboard row, the
//! deadline counter card, and the timeline view all need, computed once from
//! one snapshot and one `today`.

use crate::config::{ResolvedSla, SlaConfigSet, SlaConfigSource};
use crate::error::CoreError;
use casetrack_domain::{
    DeadlineBucket, Matter, MatterStatus, QueryPendingDays, SlaTier, TimelineEvent,
    build_timeline, classify_deadline, classify_with_config, days_between_stages,
    days_in_process, days_since_last_event, days_until_deadline, query_pending_days,
};
use serde::{Deserialize, Serialize};
use time::Date;
use tracing::{debug, warn};

/// Days spent between consecutive pipeline stages.
///
/// A stage pair that has not completed reads 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageIntervals {
    pub submission_to_review: i64,
    pub review_to_authority: i64,
    pub first_query_turnaround: i64,
    pub second_query_turnaround: i64,
    /// From the latest submission to the authority until the decision.
    pub authority_to_decision: i64,
}

impl StageIntervals {
    /// Computes the intervals from a matter's stage dates.
    #[must_use]
    pub fn from_matter(matter: &Matter) -> Self {
        let stages = &matter.stages;
        let last_authority_submission: Option<Date> = stages
            .second_submitted_to_authority_date
            .or(stages.submitted_to_authority_date);

        Self {
            submission_to_review: days_between_stages(
                stages.submission_date,
                stages.review_received_date,
            ),
            review_to_authority: days_between_stages(
                stages.review_received_date,
                stages.submitted_to_authority_date,
            ),
            first_query_turnaround: days_between_stages(
                stages.first_query_issued_date,
                stages.first_query_response_date,
            ),
            second_query_turnaround: days_between_stages(
                stages.second_query_issued_date,
                stages.second_query_response_date,
            ),
            authority_to_decision: days_between_stages(
                last_authority_submission,
                stages.signed_date,
            ),
        }
    }
}

/// Everything derived from one matter snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatterAssessment {
    pub case_id: String,
    pub title: String,
    pub case_type: String,
    pub status: MatterStatus,
    pub days_in_process: i64,
    pub sla_tier: SlaTier,
    pub sla_source: SlaConfigSource,
    /// The tier persisted with the record, when it disagrees with `sla_tier`.
    pub stale_stored_tier: Option<SlaTier>,
    /// `None` for closed matters, which are not deadline-tracked.
    pub deadline_bucket: Option<DeadlineBucket>,
    pub days_until_deadline: Option<i64>,
    pub intervals: StageIntervals,
    pub first_query_pending: QueryPendingDays,
    pub second_query_pending: QueryPendingDays,
    pub timeline: Vec<TimelineEvent>,
    pub days_since_last_event: Option<i64>,
}

impl MatterAssessment {
    /// Returns true if the matter is closed.
    #[must_use]
    pub const fn is_closed(&self) -> bool {
        self.status.is_terminal()
    }

    /// Returns the total query-pending days across both queries.
    ///
    /// Only the latest open query accrues, so the two counters never overlap.
    #[must_use]
    pub const fn query_pending_total(&self) -> i64 {
        self.first_query_pending.total() + self.second_query_pending.total()
    }
}

/// Assesses one matter as of `today`.
///
/// # Arguments
///
/// * `matter` - The matter snapshot
/// * `configs` - SLA configuration by case type
/// * `today` - The reference date; never read from a clock here
///
/// # Errors
///
/// Returns an error if:
/// - The matter has no submission date
/// - The deadline window cannot be computed for `today`
/// - No SLA thresholds are available for the matter
pub fn assess_matter(
    matter: &Matter,
    configs: &SlaConfigSet,
    today: Date,
) -> Result<MatterAssessment, CoreError> {
    let resolved: ResolvedSla = configs.resolve(matter)?;
    let is_terminal: bool = matter.is_closed();
    let stages = &matter.stages;

    let terminal_date: Option<Date> = if is_terminal {
        stages.signed_date
    } else {
        None
    };
    let days_in_process: i64 = days_in_process(stages.submission_date, terminal_date, today)
        .map_err(|source| CoreError::Matter {
            case_id: matter.case_id.clone(),
            source,
        })?;

    let sla_tier: SlaTier = classify_with_config(days_in_process, &resolved.config, is_terminal);
    let stale_stored_tier: Option<SlaTier> = matter.sla_status.filter(|stored| *stored != sla_tier);
    if let Some(stored) = stale_stored_tier {
        warn!(
            case_id = %matter.case_id,
            stored = %stored,
            computed = %sla_tier,
            "Stored SLA status differs from computed tier"
        );
    }

    let deadline_bucket: Option<DeadlineBucket> =
        classify_deadline(matter.deadline, matter.status, today).map_err(|source| {
            CoreError::Matter {
                case_id: matter.case_id.clone(),
                source,
            }
        })?;

    // A second query supersedes the first; the status only speaks to the latest one.
    let first_query_pending: QueryPendingDays = if stages.second_query_issued_date.is_some() {
        QueryPendingDays::default()
    } else {
        query_pending_days(
            stages.first_query_issued_date,
            stages.first_query_response_date,
            matter.status,
            today,
        )
    };

    let timeline: Vec<TimelineEvent> = build_timeline(&matter.stage_entries());
    let days_since_last_event: Option<i64> = days_since_last_event(&timeline, today);

    let assessment = MatterAssessment {
        case_id: matter.case_id.clone(),
        title: matter.title.clone(),
        case_type: matter.case_type.clone(),
        status: matter.status,
        days_in_process,
        sla_tier,
        sla_source: resolved.source,
        stale_stored_tier,
        deadline_bucket,
        days_until_deadline: days_until_deadline(matter.deadline, today),
        intervals: StageIntervals::from_matter(matter),
        first_query_pending,
        second_query_pending: query_pending_days(
            stages.second_query_issued_date,
            stages.second_query_response_date,
            matter.status,
            today,
        ),
        timeline,
        days_since_last_event,
    };

    debug!(
        case_id = %assessment.case_id,
        days_in_process = assessment.days_in_process,
        sla_tier = %assessment.sla_tier,
        deadline = ?assessment.deadline_bucket,
        "Assessed matter"
    );

    Ok(assessment)
}

/// Orders assessments worst first: by tier severity, then longest in process,
/// then case id. Closed matters sort last.
pub fn sort_by_urgency(assessments: &mut [MatterAssessment]) {
    assessments.sort_by(|a, b| {
        let rank = |x: &MatterAssessment| x.sla_tier.severity().map_or(-1, i16::from);
        rank(b)
            .cmp(&rank(a))
            .then_with(|| b.days_in_process.cmp(&a.days_in_process))
            .then_with(|| a.case_id.cmp(&b.case_id))
    });
}
