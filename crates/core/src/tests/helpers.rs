// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::SlaConfigSet;
use casetrack_domain::{Matter, MatterStatus, SlaConfig};
use time::Date;

pub const POLICY_PAPER: &str = "Policy Paper";

pub fn create_test_config() -> SlaConfig {
    SlaConfig::new(POLICY_PAPER, 30, 20, 25).unwrap()
}

pub fn create_test_config_set() -> SlaConfigSet {
    SlaConfigSet::from_configs(vec![
        create_test_config(),
        SlaConfig::new("Funding", 60, 40, 50).unwrap(),
    ])
    .unwrap()
}

pub fn create_open_matter(case_id: &str, submitted: Date) -> Matter {
    let mut matter: Matter = Matter::new(case_id, "Test matter", POLICY_PAPER);
    matter.stages.submission_date = Some(submitted);
    matter
}

pub fn create_closed_matter(case_id: &str, submitted: Date, signed: Option<Date>) -> Matter {
    let mut matter: Matter = create_open_matter(case_id, submitted);
    matter.status = MatterStatus::ApprovedAndSigned;
    matter.stages.signed_date = signed;
    matter
}
