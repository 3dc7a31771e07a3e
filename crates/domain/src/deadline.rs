// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Deadline urgency buckets.
//!
//! Closed matters are not tracked: they land in no bucket at all, which is
//! distinct from `NoDeadline`.

use crate::dates::{add_days, days_between};
use crate::error::DomainError;
use crate::types::MatterStatus;
use serde::{Deserialize, Serialize};
use time::Date;

/// Width of the "this week" window, inclusive of its last day.
pub const THIS_WEEK_DAYS: i64 = 7;

/// How urgent an open matter's deadline is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeadlineBucket {
    #[serde(rename = "Overdue")]
    Overdue,
    #[serde(rename = "This Week")]
    ThisWeek,
    #[serde(rename = "Upcoming")]
    Upcoming,
    #[serde(rename = "No Deadline")]
    NoDeadline,
}

impl DeadlineBucket {
    /// Returns the display string used in reports and exports.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Overdue => "Overdue",
            Self::ThisWeek => "This Week",
            Self::Upcoming => "Upcoming",
            Self::NoDeadline => "No Deadline",
        }
    }
}

impl std::fmt::Display for DeadlineBucket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Buckets a matter's deadline relative to `today`.
///
/// Returns `None` for terminal statuses. Otherwise:
///
/// - no deadline → `NoDeadline`
/// - deadline before today → `Overdue`
/// - deadline within the next 7 days, today included → `ThisWeek`
/// - later → `Upcoming`
///
/// # Errors
///
/// Returns `DomainError::DateArithmeticOverflow` if the end of the week
/// window cannot be represented, which only happens for a `today` at the
/// very end of the supported date range.
pub fn classify_deadline(
    deadline: Option<Date>,
    status: MatterStatus,
    today: Date,
) -> Result<Option<DeadlineBucket>, DomainError> {
    if status.is_terminal() {
        return Ok(None);
    }
    let Some(deadline) = deadline else {
        return Ok(Some(DeadlineBucket::NoDeadline));
    };

    let week_end: Date = add_days(today, THIS_WEEK_DAYS)?;
    let bucket: DeadlineBucket = if deadline < today {
        DeadlineBucket::Overdue
    } else if deadline <= week_end {
        DeadlineBucket::ThisWeek
    } else {
        DeadlineBucket::Upcoming
    };

    Ok(Some(bucket))
}

/// Days from `today` until the deadline; negative once it has passed.
#[must_use]
pub fn days_until_deadline(deadline: Option<Date>, today: Date) -> Option<i64> {
    deadline.map(|deadline| days_between(today, deadline))
}
