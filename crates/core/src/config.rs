// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! SLA threshold lookup by case type.

use crate::error::CoreError;
use casetrack_domain::{
    Matter, SlaConfig, validate_case_types_unique, validate_sla_ordering, validate_sla_range,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::warn;

/// Where a matter's thresholds came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlaConfigSource {
    /// The per-case-type configuration table.
    CaseType,
    /// Thresholds stored on the matter record itself.
    Embedded,
}

/// Thresholds chosen for one matter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedSla {
    pub config: SlaConfig,
    pub source: SlaConfigSource,
}

/// The SLA configuration table, keyed by case type.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SlaConfigSet {
    configs: BTreeMap<String, SlaConfig>,
}

impl SlaConfigSet {
    /// Creates an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            configs: BTreeMap::new(),
        }
    }

    /// Builds the table from stored configuration records.
    ///
    /// Records outside `1..=365` or with misordered thresholds are kept as-is
    /// and logged; they classify by the fixed rule order.
    ///
    /// # Errors
    ///
    /// Returns an error if a case type appears more than once, since the
    /// lookup would be ambiguous.
    pub fn from_configs(configs: Vec<SlaConfig>) -> Result<Self, CoreError> {
        validate_case_types_unique(&configs)?;

        for config in &configs {
            if let Err(e) = validate_sla_range(config).and_then(|()| validate_sla_ordering(config))
            {
                warn!(case_type = %config.case_type, "{e}");
            }
        }

        Ok(Self {
            configs: configs
                .into_iter()
                .map(|config| (config.case_type.clone(), config))
                .collect(),
        })
    }

    /// Returns the configuration for a case type.
    #[must_use]
    pub fn get(&self, case_type: &str) -> Option<&SlaConfig> {
        self.configs.get(case_type)
    }

    /// Returns the number of configured case types.
    #[must_use]
    pub fn len(&self) -> usize {
        self.configs.len()
    }

    /// Returns true if no case types are configured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.configs.is_empty()
    }

    /// Picks the thresholds for a matter.
    ///
    /// The case type table wins; thresholds embedded on the record are the
    /// fallback.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::MissingSlaConfig` if neither source has thresholds.
    pub fn resolve(&self, matter: &Matter) -> Result<ResolvedSla, CoreError> {
        if let Some(config) = self.get(&matter.case_type) {
            return Ok(ResolvedSla {
                config: config.clone(),
                source: SlaConfigSource::CaseType,
            });
        }

        matter
            .embedded_sla_config()
            .map(|config| ResolvedSla {
                config,
                source: SlaConfigSource::Embedded,
            })
            .ok_or_else(|| CoreError::MissingSlaConfig {
                case_id: matter.case_id.clone(),
                case_type: matter.case_type.clone(),
            })
    }
}
