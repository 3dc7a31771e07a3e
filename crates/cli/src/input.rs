// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Loading of matter snapshots exported from the store.

use casetrack_domain::{Matter, SlaConfig};
use color_eyre::eyre::{Result, WrapErr};
use serde::Deserialize;
use std::io::Read;
use std::path::Path;
use tracing::debug;

/// A point-in-time export of matters and the SLA configuration table.
#[derive(Debug, Clone, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub sla_configs: Vec<SlaConfig>,
    pub matters: Vec<Matter>,
}

impl Snapshot {
    /// Parses a snapshot from JSON text.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed, a date does not parse, or a
    /// status is not a known pipeline stage.
    pub fn from_json(raw: &str) -> Result<Self> {
        serde_json::from_str(raw).wrap_err("Failed to parse matter snapshot")
    }
}

/// Reads a snapshot from a file, or from stdin when the path is `-`.
///
/// # Errors
///
/// Returns an error if the source cannot be read or does not parse.
pub fn load_snapshot(path: &Path) -> Result<Snapshot> {
    let raw: String = if path == Path::new("-") {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .wrap_err("Failed to read snapshot from stdin")?;
        buffer
    } else {
        std::fs::read_to_string(path)
            .wrap_err_with(|| format!("Failed to read snapshot {}", path.display()))?
    };

    let snapshot: Snapshot = Snapshot::from_json(&raw)?;
    debug!(
        matters = snapshot.matters.len(),
        sla_configs = snapshot.sla_configs.len(),
        "Loaded snapshot"
    );
    Ok(snapshot)
}
