// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    DomainError, SlaConfig, validate_case_types_unique, validate_sla_config,
    validate_sla_ordering, validate_sla_range,
};

fn config(target: u16, at_risk: u16, critical: u16) -> SlaConfig {
    SlaConfig {
        case_type: String::from("Policy Paper"),
        sla_target_days: target,
        at_risk_days: at_risk,
        critical_days: critical,
    }
}

#[test]
fn test_valid_config_accepted() {
    assert!(validate_sla_config(&config(30, 20, 25)).is_ok());
    assert!(validate_sla_config(&config(365, 1, 365)).is_ok());
    assert!(SlaConfig::new("Policy Paper", 30, 20, 25).is_ok());
}

#[test]
fn test_range_rejects_zero_and_above_a_year() {
    assert!(validate_sla_range(&config(0, 20, 25)).is_err());
    assert!(validate_sla_range(&config(30, 0, 25)).is_err());
    assert!(validate_sla_range(&config(30, 20, 366)).is_err());
    assert!(validate_sla_range(&config(1, 1, 1)).is_ok());
}

#[test]
fn test_range_error_names_the_field() {
    let err: DomainError = validate_sla_range(&config(400, 20, 25)).unwrap_err();
    assert_eq!(
        err,
        DomainError::InvalidSlaConfig {
            case_type: String::from("Policy Paper"),
            reason: String::from("sla_target_days must be between 1 and 365, got 400"),
        }
    );
}

#[test]
fn test_ordering_rejects_inverted_thresholds() {
    assert!(validate_sla_ordering(&config(30, 25, 20)).is_err());
    assert!(validate_sla_ordering(&config(30, 25, 25)).is_err());
    assert!(validate_sla_ordering(&config(30, 20, 31)).is_err());
    assert!(validate_sla_ordering(&config(30, 20, 30)).is_ok());
}

#[test]
fn test_new_rejects_misordered_edit() {
    let result: Result<SlaConfig, DomainError> = SlaConfig::new("Policy Paper", 30, 25, 20);
    assert!(matches!(
        result,
        Err(DomainError::InvalidSlaConfig { .. })
    ));
}

#[test]
fn test_empty_case_type_rejected() {
    let result: Result<SlaConfig, DomainError> = SlaConfig::new("  ", 30, 20, 25);
    assert!(result.is_err());
}

#[test]
fn test_case_types_unique() {
    let mut other: SlaConfig = config(60, 40, 50);
    other.case_type = String::from("Funding");

    assert!(validate_case_types_unique(&[config(30, 20, 25), other.clone()]).is_ok());
    assert!(validate_case_types_unique(&[config(30, 20, 25), other, config(10, 5, 8)]).is_err());
}
