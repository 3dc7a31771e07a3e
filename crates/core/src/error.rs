// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use casetrack_domain::DomainError;
use thiserror::Error;

/// Errors that can occur while assessing matters.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CoreError {
    /// A domain rule was violated outside the context of a single matter.
    #[error("Domain violation: {0}")]
    DomainViolation(#[from] DomainError),

    /// A specific matter could not be assessed.
    #[error("Matter '{case_id}': {source}")]
    Matter {
        /// The matter's case id.
        case_id: String,
        /// The underlying domain failure.
        source: DomainError,
    },

    /// Neither the case type table nor the matter itself provides SLA thresholds.
    #[error("Matter '{case_id}': no SLA configuration for case type '{case_type}'")]
    MissingSlaConfig {
        /// The matter's case id.
        case_id: String,
        /// The case type that has no configuration.
        case_type: String,
    },
}

impl CoreError {
    /// Returns the case id the error relates to, if any.
    #[must_use]
    pub fn case_id(&self) -> Option<&str> {
        match self {
            Self::DomainViolation(_) => None,
            Self::Matter { case_id, .. } | Self::MissingSlaConfig { case_id, .. } => {
                Some(case_id)
            }
        }
    }
}
