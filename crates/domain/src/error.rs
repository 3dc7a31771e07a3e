// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use thiserror::Error;

/// Errors that can occur while deriving values from a matter snapshot.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DomainError {
    /// A date string could not be parsed into a calendar date.
    #[error("Invalid date '{input}': {reason}")]
    InvalidDate {
        /// The offending input.
        input: String,
        /// The parser's explanation.
        reason: String,
    },

    /// A field required by the derivation was absent.
    #[error("Missing required field: {field}")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },

    /// A status string is not one of the known pipeline stages.
    #[error("Invalid matter status: '{status}'")]
    InvalidStatus {
        /// The unrecognized status string.
        status: String,
    },

    /// An SLA configuration record failed validation.
    #[error("Invalid SLA configuration for case type '{case_type}': {reason}")]
    InvalidSlaConfig {
        /// The case type the configuration belongs to.
        case_type: String,
        /// Description of the violated rule.
        reason: String,
    },

    /// Date arithmetic overflowed the representable range.
    #[error("Date arithmetic overflow while {operation}")]
    DateArithmeticOverflow {
        /// Description of the operation that failed.
        operation: String,
    },
}
