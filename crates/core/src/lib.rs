// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod assessment;
mod config;
mod error;
mod summary;

#[cfg(test)]
mod tests;

// Re-export public types and functions
pub use assessment::{MatterAssessment, StageIntervals, assess_matter, sort_by_urgency};
pub use config::{ResolvedSla, SlaConfigSet, SlaConfigSource};
pub use error::CoreError;
pub use summary::{
    AssessmentFailure, DeadlineSummary, PortfolioReport, SlaSummary, assess_portfolio,
};
