// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Tests for SLA configuration lookup.

use crate::{CoreError, ResolvedSla, SlaConfigSet, SlaConfigSource};
use casetrack_domain::{DomainError, Matter, SlaConfig};
use time::macros::date;

use super::helpers::{POLICY_PAPER, create_open_matter, create_test_config, create_test_config_set};

#[test]
fn test_resolve_prefers_case_type_table() {
    let configs: SlaConfigSet = create_test_config_set();
    let mut matter: Matter = create_open_matter("M-001", date!(2025 - 01 - 01));
    matter.sla_target_days = Some(90);
    matter.at_risk_days = Some(60);
    matter.critical_days = Some(80);

    let resolved: ResolvedSla = configs.resolve(&matter).unwrap();

    assert_eq!(resolved.source, SlaConfigSource::CaseType);
    assert_eq!(resolved.config, create_test_config());
}

#[test]
fn test_resolve_falls_back_to_embedded_thresholds() {
    let configs: SlaConfigSet = create_test_config_set();
    let mut matter: Matter = Matter::new("M-002", "Ad hoc", "Ministerial Brief");
    matter.sla_target_days = Some(14);
    matter.at_risk_days = Some(7);
    matter.critical_days = Some(10);

    let resolved: ResolvedSla = configs.resolve(&matter).unwrap();

    assert_eq!(resolved.source, SlaConfigSource::Embedded);
    assert_eq!(resolved.config.sla_target_days, 14);
    assert_eq!(resolved.config.case_type, "Ministerial Brief");
}

#[test]
fn test_resolve_without_any_thresholds_fails() {
    let configs: SlaConfigSet = SlaConfigSet::new();
    let matter: Matter = create_open_matter("M-003", date!(2025 - 01 - 01));

    let result = configs.resolve(&matter);

    assert_eq!(
        result,
        Err(CoreError::MissingSlaConfig {
            case_id: String::from("M-003"),
            case_type: String::from(POLICY_PAPER),
        })
    );
}

#[test]
fn test_duplicate_case_types_rejected() {
    let result = SlaConfigSet::from_configs(vec![create_test_config(), create_test_config()]);

    assert!(matches!(
        result,
        Err(CoreError::DomainViolation(DomainError::InvalidSlaConfig { .. }))
    ));
}

#[test]
fn test_misconfigured_records_still_load() {
    // Stored records are not re-validated on load.
    let inverted = SlaConfig {
        case_type: String::from("Legacy"),
        sla_target_days: 30,
        at_risk_days: 25,
        critical_days: 20,
    };
    let out_of_range = SlaConfig {
        case_type: String::from("Long Haul"),
        sla_target_days: 500,
        at_risk_days: 100,
        critical_days: 200,
    };

    let configs: SlaConfigSet = SlaConfigSet::from_configs(vec![inverted.clone(), out_of_range])
        .unwrap();

    assert_eq!(configs.len(), 2);
    assert_eq!(configs.get("Legacy"), Some(&inverted));
    assert!(configs.get("Unknown").is_none());
}

#[test]
fn test_empty_set() {
    let configs: SlaConfigSet = SlaConfigSet::from_configs(Vec::new()).unwrap();
    assert!(configs.is_empty());
}
