// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::dates::iso_date;
use crate::error::DomainError;
use crate::sla::SlaTier;
use crate::timeline::StageEntry;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use time::Date;

/// Pipeline stage a matter currently sits in.
///
/// The set is closed: adding a stage forces every `match` over it to be revisited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatterStatus {
    /// Department is preparing the matter.
    #[serde(rename = "In Process")]
    InProcess,
    /// SUT HE is reviewing the submission.
    #[serde(rename = "Under Review – SUT HE")]
    UnderReview,
    /// SUT HE raised a query; the department must answer.
    #[serde(rename = "Dept to Respond – SUT HE Query")]
    DeptToRespondSutHeQuery,
    /// Forwarded to the approving authority.
    #[serde(rename = "Submitted to Authority")]
    SubmittedToAuthority,
    /// The authority raised a query; SUT HE must answer.
    #[serde(rename = "SUT HE to Respond – Authority Query")]
    SutHeToRespondAuthorityQuery,
    /// Approved and signed off. Terminal.
    #[serde(rename = "Approved & Signed")]
    ApprovedAndSigned,
    /// Rejected. Terminal.
    #[serde(rename = "Not Approved")]
    NotApproved,
}

/// The party currently holding an open query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QueryParty {
    /// The originating department.
    Department,
    /// The reviewing body (SUT HE).
    Reviewer,
}

impl MatterStatus {
    /// All statuses in pipeline order.
    pub const ALL: [Self; 7] = [
        Self::InProcess,
        Self::UnderReview,
        Self::DeptToRespondSutHeQuery,
        Self::SubmittedToAuthority,
        Self::SutHeToRespondAuthorityQuery,
        Self::ApprovedAndSigned,
        Self::NotApproved,
    ];

    /// Returns the display string, which is also the stored representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::InProcess => "In Process",
            Self::UnderReview => "Under Review – SUT HE",
            Self::DeptToRespondSutHeQuery => "Dept to Respond – SUT HE Query",
            Self::SubmittedToAuthority => "Submitted to Authority",
            Self::SutHeToRespondAuthorityQuery => "SUT HE to Respond – Authority Query",
            Self::ApprovedAndSigned => "Approved & Signed",
            Self::NotApproved => "Not Approved",
        }
    }

    /// Returns true if the matter is closed and will not progress further.
    ///
    /// This is the only definition of the terminal set.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::ApprovedAndSigned | Self::NotApproved)
    }

    /// Returns the party an open query is waiting on, if this status names one.
    #[must_use]
    pub const fn awaiting_party(&self) -> Option<QueryParty> {
        match self {
            Self::DeptToRespondSutHeQuery => Some(QueryParty::Department),
            Self::SutHeToRespondAuthorityQuery => Some(QueryParty::Reviewer),
            Self::InProcess
            | Self::UnderReview
            | Self::SubmittedToAuthority
            | Self::ApprovedAndSigned
            | Self::NotApproved => None,
        }
    }
}

impl FromStr for MatterStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed: &str = s.trim();
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == trimmed)
            .ok_or_else(|| DomainError::InvalidStatus {
                status: s.to_string(),
            })
    }
}

impl std::fmt::Display for MatterStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The dated milestones of a matter's pipeline.
///
/// Every field is absent until its stage happens. Dates are expected to be
/// non-decreasing in field order, but nothing here enforces that.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageDates {
    #[serde(default, with = "iso_date::option")]
    pub submission_date: Option<Date>,
    #[serde(default, with = "iso_date::option")]
    pub review_received_date: Option<Date>,
    #[serde(default, with = "iso_date::option")]
    pub submitted_to_authority_date: Option<Date>,
    #[serde(default, with = "iso_date::option")]
    pub first_query_issued_date: Option<Date>,
    #[serde(default, with = "iso_date::option")]
    pub first_query_response_date: Option<Date>,
    #[serde(default, with = "iso_date::option")]
    pub second_query_issued_date: Option<Date>,
    #[serde(default, with = "iso_date::option")]
    pub second_query_response_date: Option<Date>,
    #[serde(default, with = "iso_date::option")]
    pub second_submitted_to_authority_date: Option<Date>,
    /// Final signature or decision date.
    #[serde(default, with = "iso_date::option")]
    pub signed_date: Option<Date>,
}

impl StageDates {
    /// Returns the nine stages as labelled entries, in pipeline order.
    #[must_use]
    pub fn entries(&self) -> Vec<StageEntry> {
        vec![
            StageEntry::new("Submitted", self.submission_date),
            StageEntry::new("Review Received", self.review_received_date),
            StageEntry::new("Submitted to Authority", self.submitted_to_authority_date),
            StageEntry::new("Query 1 Issued", self.first_query_issued_date),
            StageEntry::new("Query 1 Responded", self.first_query_response_date),
            StageEntry::new("Query 2 Issued", self.second_query_issued_date),
            StageEntry::new("Query 2 Responded", self.second_query_response_date),
            StageEntry::new(
                "Resubmitted to Authority",
                self.second_submitted_to_authority_date,
            ),
            StageEntry::new("Signed / Decided", self.signed_date),
        ]
    }
}

/// A case tracked through the approval pipeline.
///
/// This is a read-only snapshot. Identity fields are carried for reporting
/// and never interpreted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Matter {
    pub case_id: String,
    pub title: String,
    pub case_type: String,
    #[serde(default)]
    pub priority: Option<String>,
    #[serde(flatten)]
    pub stages: StageDates,
    pub status: MatterStatus,
    #[serde(default, with = "iso_date::option")]
    pub deadline: Option<Date>,
    /// Thresholds joined onto the record by the store, if any.
    #[serde(default)]
    pub sla_target_days: Option<u16>,
    #[serde(default)]
    pub at_risk_days: Option<u16>,
    #[serde(default)]
    pub critical_days: Option<u16>,
    /// The tier persisted alongside the record when it was last saved.
    #[serde(default)]
    pub sla_status: Option<SlaTier>,
}

impl Matter {
    /// Creates an open matter with no stage dates recorded.
    #[must_use]
    pub fn new(case_id: &str, title: &str, case_type: &str) -> Self {
        Self {
            case_id: case_id.to_string(),
            title: title.to_string(),
            case_type: case_type.to_string(),
            priority: None,
            stages: StageDates::default(),
            status: MatterStatus::InProcess,
            deadline: None,
            sla_target_days: None,
            at_risk_days: None,
            critical_days: None,
            sla_status: None,
        }
    }

    /// Returns true if the matter has reached a terminal status.
    #[must_use]
    pub const fn is_closed(&self) -> bool {
        self.status.is_terminal()
    }

    /// Returns the stage dates as labelled timeline entries.
    #[must_use]
    pub fn stage_entries(&self) -> Vec<StageEntry> {
        self.stages.entries()
    }

    /// Returns the thresholds embedded on the record, if all three are present.
    #[must_use]
    pub fn embedded_sla_config(&self) -> Option<SlaConfig> {
        Some(SlaConfig {
            case_type: self.case_type.clone(),
            sla_target_days: self.sla_target_days?,
            at_risk_days: self.at_risk_days?,
            critical_days: self.critical_days?,
        })
    }
}

/// SLA thresholds for one case type.
///
/// Deserialization performs no validation so that records already in the
/// store load unchanged. Use [`SlaConfig::new`] when accepting an edit.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SlaConfig {
    pub case_type: String,
    /// Expected end-to-end duration in days.
    pub sla_target_days: u16,
    /// Elapsed days at which a matter becomes at risk.
    pub at_risk_days: u16,
    /// Elapsed days at which a matter becomes critical.
    pub critical_days: u16,
}

impl SlaConfig {
    /// Creates a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidSlaConfig` if any value is outside
    /// `1..=365` or the thresholds are not ordered
    /// `at_risk_days < critical_days <= sla_target_days`.
    pub fn new(
        case_type: &str,
        sla_target_days: u16,
        at_risk_days: u16,
        critical_days: u16,
    ) -> Result<Self, DomainError> {
        let config = Self {
            case_type: case_type.to_string(),
            sla_target_days,
            at_risk_days,
            critical_days,
        };
        crate::validation::validate_sla_config(&config)?;
        Ok(config)
    }
}
