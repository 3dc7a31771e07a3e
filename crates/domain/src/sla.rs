// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! SLA risk tier classification.
//!
//! A matter's tier is derived from elapsed days and its case type's
//! thresholds. The rules are evaluated top to bottom and the first match wins:
//!
//! 1. terminal status → `Completed`
//! 2. elapsed > target → `Overdue`
//! 3. elapsed ≥ critical → `Critical`
//! 4. elapsed ≥ at risk → `AtRisk`
//! 5. otherwise → `WithinSla`
//!
//! The order is authoritative even when thresholds are misconfigured
//! relative to each other.

use crate::error::DomainError;
use crate::types::SlaConfig;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Risk tier of a matter relative to its SLA target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SlaTier {
    #[serde(rename = "Within SLA")]
    WithinSla,
    #[serde(rename = "At Risk")]
    AtRisk,
    #[serde(rename = "Critical")]
    Critical,
    #[serde(rename = "Overdue")]
    Overdue,
    /// The matter is closed; SLA tracking no longer applies.
    #[serde(rename = "Completed")]
    Completed,
}

impl SlaTier {
    /// Returns the display string used in reports and exports.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::WithinSla => "Within SLA",
            Self::AtRisk => "At Risk",
            Self::Critical => "Critical",
            Self::Overdue => "Overdue",
            Self::Completed => "Completed",
        }
    }

    /// Returns the severity rank of an open-matter tier.
    ///
    /// `WithinSla` < `AtRisk` < `Critical` < `Overdue`. `Completed` has no rank.
    #[must_use]
    pub const fn severity(&self) -> Option<u8> {
        match self {
            Self::WithinSla => Some(0),
            Self::AtRisk => Some(1),
            Self::Critical => Some(2),
            Self::Overdue => Some(3),
            Self::Completed => None,
        }
    }
}

impl FromStr for SlaTier {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Within SLA" => Ok(Self::WithinSla),
            "At Risk" => Ok(Self::AtRisk),
            "Critical" => Ok(Self::Critical),
            "Overdue" => Ok(Self::Overdue),
            "Completed" => Ok(Self::Completed),
            _ => Err(DomainError::InvalidStatus {
                status: s.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for SlaTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classifies elapsed days into an SLA tier.
///
/// # Arguments
///
/// * `elapsed_days` - Days the matter has been in process
/// * `sla_target_days` - Days allowed end-to-end
/// * `at_risk_days` - Elapsed days at which the matter becomes at risk
/// * `critical_days` - Elapsed days at which the matter becomes critical
/// * `is_terminal` - Whether the matter has reached a closing status
///
/// Overdue takes precedence over critical: with target 30 and critical 25,
/// 31 elapsed days is `Overdue`.
#[must_use]
pub fn classify_sla(
    elapsed_days: i64,
    sla_target_days: u16,
    at_risk_days: u16,
    critical_days: u16,
    is_terminal: bool,
) -> SlaTier {
    if is_terminal {
        SlaTier::Completed
    } else if elapsed_days > i64::from(sla_target_days) {
        SlaTier::Overdue
    } else if elapsed_days >= i64::from(critical_days) {
        SlaTier::Critical
    } else if elapsed_days >= i64::from(at_risk_days) {
        SlaTier::AtRisk
    } else {
        SlaTier::WithinSla
    }
}

/// Classifies elapsed days using a case type's configuration record.
#[must_use]
pub fn classify_with_config(elapsed_days: i64, config: &SlaConfig, is_terminal: bool) -> SlaTier {
    classify_sla(
        elapsed_days,
        config.sla_target_days,
        config.at_risk_days,
        config.critical_days,
        is_terminal,
    )
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_scenario_at_risk_critical_overdue() {
        assert_eq!(classify_sla(22, 30, 20, 25, false), SlaTier::AtRisk);
        assert_eq!(classify_sla(26, 30, 20, 25, false), SlaTier::Critical);
        assert_eq!(classify_sla(31, 30, 20, 25, false), SlaTier::Overdue);
    }

    #[test]
    fn test_threshold_boundaries() {
        assert_eq!(classify_sla(19, 30, 20, 25, false), SlaTier::WithinSla);
        assert_eq!(classify_sla(20, 30, 20, 25, false), SlaTier::AtRisk);
        assert_eq!(classify_sla(25, 30, 20, 25, false), SlaTier::Critical);
        // Reaching the target exactly is not yet overdue.
        assert_eq!(classify_sla(30, 30, 20, 25, false), SlaTier::Critical);
    }

    #[test]
    fn test_terminal_always_completed() {
        for elapsed in [-5, 0, 10, 22, 26, 31, 1000] {
            assert_eq!(classify_sla(elapsed, 30, 20, 25, true), SlaTier::Completed);
        }
    }

    #[test]
    fn test_severity_monotonic_in_elapsed_days() {
        let configs: [(u16, u16, u16); 4] = [(30, 20, 25), (10, 3, 7), (60, 60, 60), (5, 9, 2)];

        for (target, at_risk, critical) in configs {
            let mut previous: u8 = 0;
            for elapsed in 0..=120 {
                let severity: u8 = classify_sla(elapsed, target, at_risk, critical, false)
                    .severity()
                    .unwrap();
                assert!(
                    severity >= previous,
                    "severity dropped at {elapsed} for ({target}, {at_risk}, {critical})"
                );
                previous = severity;
            }
        }
    }

    #[test]
    fn test_misordered_thresholds_follow_branch_order() {
        // at_risk=25, critical=20: critical is checked first and wins.
        assert_eq!(classify_sla(19, 30, 25, 20, false), SlaTier::WithinSla);
        assert_eq!(classify_sla(22, 30, 25, 20, false), SlaTier::Critical);
        assert_eq!(classify_sla(26, 30, 25, 20, false), SlaTier::Critical);
    }

    #[test]
    fn test_classify_with_config() {
        let config = SlaConfig {
            case_type: String::from("Policy Paper"),
            sla_target_days: 30,
            at_risk_days: 20,
            critical_days: 25,
        };
        assert_eq!(classify_with_config(26, &config, false), SlaTier::Critical);
        assert_eq!(classify_with_config(26, &config, true), SlaTier::Completed);
    }

    #[test]
    fn test_display_strings() {
        assert_eq!(SlaTier::WithinSla.to_string(), "Within SLA");
        assert_eq!(SlaTier::AtRisk.to_string(), "At Risk");
        assert_eq!(SlaTier::Critical.to_string(), "Critical");
        assert_eq!(SlaTier::Overdue.to_string(), "Overdue");
        assert_eq!(SlaTier::Completed.to_string(), "Completed");
    }

    #[test]
    fn test_parse_display_strings() {
        assert_eq!("At Risk".parse::<SlaTier>().unwrap(), SlaTier::AtRisk);
        assert!("at_risk".parse::<SlaTier>().is_err());
    }

    #[test]
    fn test_serde_uses_display_strings() {
        let json: String = serde_json::to_string(&SlaTier::WithinSla).unwrap();
        assert_eq!(json, "\"Within SLA\"");
        let tier: SlaTier = serde_json::from_str("\"Overdue\"").unwrap();
        assert_eq!(tier, SlaTier::Overdue);
    }
}
