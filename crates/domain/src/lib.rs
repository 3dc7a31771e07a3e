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

mod counters;
mod dates;
mod deadline;
mod error;
mod sla;
mod timeline;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use counters::{QueryPendingDays, days_between_stages, days_in_process, query_pending_days};
pub use dates::{add_days, days_between, iso_date, parse_date};
pub use deadline::{DeadlineBucket, THIS_WEEK_DAYS, classify_deadline, days_until_deadline};
pub use sla::{SlaTier, classify_sla, classify_with_config};
pub use timeline::{StageEntry, TimelineEvent, build_timeline, days_since_last_event};

// Re-export public types
pub use error::DomainError;
pub use types::{Matter, MatterStatus, QueryParty, SlaConfig, StageDates};
pub use validation::{
    MAX_SLA_DAYS, MIN_SLA_DAYS, validate_case_types_unique, validate_sla_config,
    validate_sla_ordering, validate_sla_range,
};
