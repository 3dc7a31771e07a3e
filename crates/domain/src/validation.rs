// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::types::SlaConfig;
use std::collections::HashSet;

/// Smallest permitted value for any SLA configuration field.
pub const MIN_SLA_DAYS: u16 = 1;
/// Largest permitted value for any SLA configuration field.
pub const MAX_SLA_DAYS: u16 = 365;

/// Validates that every SLA configuration value lies within `1..=365`.
///
/// # Errors
///
/// Returns `DomainError::InvalidSlaConfig` naming the first field out of range.
pub fn validate_sla_range(config: &SlaConfig) -> Result<(), DomainError> {
    let fields: [(&str, u16); 3] = [
        ("sla_target_days", config.sla_target_days),
        ("at_risk_days", config.at_risk_days),
        ("critical_days", config.critical_days),
    ];

    for (name, value) in fields {
        if !(MIN_SLA_DAYS..=MAX_SLA_DAYS).contains(&value) {
            return Err(DomainError::InvalidSlaConfig {
                case_type: config.case_type.clone(),
                reason: format!(
                    "{name} must be between {MIN_SLA_DAYS} and {MAX_SLA_DAYS}, got {value}"
                ),
            });
        }
    }

    Ok(())
}

/// Validates that thresholds escalate in order: at risk, then critical, then overdue.
///
/// Classification does not depend on this holding; a misordered record is
/// still classified by the fixed branch order. This check exists so that
/// edits can be rejected before they are saved.
///
/// # Errors
///
/// Returns `DomainError::InvalidSlaConfig` unless
/// `at_risk_days < critical_days <= sla_target_days`.
pub fn validate_sla_ordering(config: &SlaConfig) -> Result<(), DomainError> {
    if config.at_risk_days >= config.critical_days {
        return Err(DomainError::InvalidSlaConfig {
            case_type: config.case_type.clone(),
            reason: format!(
                "at_risk_days ({}) must be less than critical_days ({})",
                config.at_risk_days, config.critical_days
            ),
        });
    }

    if config.critical_days > config.sla_target_days {
        return Err(DomainError::InvalidSlaConfig {
            case_type: config.case_type.clone(),
            reason: format!(
                "critical_days ({}) must not exceed sla_target_days ({})",
                config.critical_days, config.sla_target_days
            ),
        });
    }

    Ok(())
}

/// Validates an SLA configuration at the point it is created or edited.
///
/// # Errors
///
/// Returns the first range or ordering violation found.
pub fn validate_sla_config(config: &SlaConfig) -> Result<(), DomainError> {
    if config.case_type.trim().is_empty() {
        return Err(DomainError::InvalidSlaConfig {
            case_type: config.case_type.clone(),
            reason: String::from("case type cannot be empty"),
        });
    }
    validate_sla_range(config)?;
    validate_sla_ordering(config)
}

/// Validates that no case type is configured twice.
///
/// # Errors
///
/// Returns `DomainError::InvalidSlaConfig` for the first repeated case type.
pub fn validate_case_types_unique(configs: &[SlaConfig]) -> Result<(), DomainError> {
    let mut seen: HashSet<&str> = HashSet::new();
    for config in configs {
        if !seen.insert(config.case_type.as_str()) {
            return Err(DomainError::InvalidSlaConfig {
                case_type: config.case_type.clone(),
                reason: String::from("case type is configured more than once"),
            });
        }
    }
    Ok(())
}
