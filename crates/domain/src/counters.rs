// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Day counters over pipeline stage dates.

use crate::dates::days_between;
use crate::error::DomainError;
use crate::types::{MatterStatus, QueryParty};
use serde::{Deserialize, Serialize};
use time::Date;

/// Days an open query has been waiting, attributed to the party holding it.
///
/// At most one of the two counters is non-zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryPendingDays {
    /// Days waiting on the department.
    pub department_days: i64,
    /// Days waiting on the reviewer.
    pub reviewer_days: i64,
}

impl QueryPendingDays {
    /// Returns the pending count regardless of which party holds it.
    #[must_use]
    pub const fn total(&self) -> i64 {
        self.department_days + self.reviewer_days
    }

    /// Returns the party the clock is running against, if any.
    #[must_use]
    pub const fn pending_party(&self) -> Option<QueryParty> {
        if self.department_days > 0 {
            Some(QueryParty::Department)
        } else if self.reviewer_days > 0 {
            Some(QueryParty::Reviewer)
        } else {
            None
        }
    }
}

/// Days from submission to the terminal date, or to `today` while open.
///
/// Negative results (a submission date in the future) are clamped to 0.
///
/// # Errors
///
/// Returns `DomainError::MissingRequiredField` if there is no submission date.
pub fn days_in_process(
    submitted: Option<Date>,
    terminal: Option<Date>,
    today: Date,
) -> Result<i64, DomainError> {
    let submitted: Date = submitted.ok_or(DomainError::MissingRequiredField {
        field: "submission_date",
    })?;
    let end: Date = terminal.unwrap_or(today);

    Ok(days_between(submitted, end).max(0))
}

/// Days between two stages, or 0 while either has not happened.
#[must_use]
pub fn days_between_stages(stage_a: Option<Date>, stage_b: Option<Date>) -> i64 {
    match (stage_a, stage_b) {
        (Some(a), Some(b)) => days_between(a, b),
        _ => 0,
    }
}

/// Days an unanswered query has been pending, attributed by current status.
///
/// The clock has not started if no query was issued and has stopped once a
/// response is recorded; both yield zeros. While running, the count goes to
/// the party `status` says is holding the query. A status that names neither
/// party attributes nothing.
#[must_use]
pub fn query_pending_days(
    issued: Option<Date>,
    response: Option<Date>,
    status: MatterStatus,
    today: Date,
) -> QueryPendingDays {
    let Some(issued) = issued else {
        return QueryPendingDays::default();
    };
    if response.is_some() {
        return QueryPendingDays::default();
    }

    let pending: i64 = days_between(issued, today).max(0);

    match status.awaiting_party() {
        Some(QueryParty::Department) => QueryPendingDays {
            department_days: pending,
            reviewer_days: 0,
        },
        Some(QueryParty::Reviewer) => QueryPendingDays {
            department_days: 0,
            reviewer_days: pending,
        },
        None => QueryPendingDays::default(),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use time::macros::date;

    #[test]
    fn test_days_in_process_open_matter_counts_to_today() {
        let days: i64 =
            days_in_process(Some(date!(2025 - 01 - 01)), None, date!(2025 - 01 - 31)).unwrap();
        assert_eq!(days, 30);
    }

    #[test]
    fn test_days_in_process_uses_terminal_date() {
        let days: i64 = days_in_process(
            Some(date!(2025 - 01 - 01)),
            Some(date!(2025 - 01 - 11)),
            date!(2025 - 06 - 30),
        )
        .unwrap();
        assert_eq!(days, 10);
    }

    #[test]
    fn test_days_in_process_clamps_future_submission() {
        let days: i64 =
            days_in_process(Some(date!(2025 - 02 - 01)), None, date!(2025 - 01 - 15)).unwrap();
        assert_eq!(days, 0);
    }

    #[test]
    fn test_days_in_process_requires_submission_date() {
        let result = days_in_process(None, None, date!(2025 - 01 - 15));
        assert_eq!(
            result,
            Err(DomainError::MissingRequiredField {
                field: "submission_date"
            })
        );
    }

    #[test]
    fn test_days_between_stages() {
        assert_eq!(
            days_between_stages(Some(date!(2025 - 03 - 01)), Some(date!(2025 - 03 - 15))),
            14
        );
        assert_eq!(days_between_stages(Some(date!(2025 - 03 - 01)), None), 0);
        assert_eq!(days_between_stages(None, Some(date!(2025 - 03 - 15))), 0);
        assert_eq!(days_between_stages(None, None), 0);
    }

    #[test]
    fn test_days_between_stages_reports_out_of_order_dates() {
        assert_eq!(
            days_between_stages(Some(date!(2025 - 03 - 15)), Some(date!(2025 - 03 - 01))),
            -14
        );
    }

    #[test]
    fn test_query_pending_attributed_to_department() {
        let pending = query_pending_days(
            Some(date!(2025 - 04 - 01)),
            None,
            MatterStatus::DeptToRespondSutHeQuery,
            date!(2025 - 04 - 11),
        );
        assert_eq!(pending.department_days, 10);
        assert_eq!(pending.reviewer_days, 0);
        assert_eq!(pending.pending_party(), Some(QueryParty::Department));
    }

    #[test]
    fn test_query_pending_attributed_to_reviewer() {
        let pending = query_pending_days(
            Some(date!(2025 - 04 - 01)),
            None,
            MatterStatus::SutHeToRespondAuthorityQuery,
            date!(2025 - 04 - 04),
        );
        assert_eq!(pending.department_days, 0);
        assert_eq!(pending.reviewer_days, 3);
        assert_eq!(pending.total(), 3);
    }

    #[test]
    fn test_query_pending_stops_after_response() {
        let pending = query_pending_days(
            Some(date!(2025 - 04 - 01)),
            Some(date!(2025 - 04 - 03)),
            MatterStatus::DeptToRespondSutHeQuery,
            date!(2025 - 04 - 30),
        );
        assert_eq!(pending, QueryPendingDays::default());
    }

    #[test]
    fn test_query_pending_not_started_without_query() {
        let pending = query_pending_days(
            None,
            None,
            MatterStatus::DeptToRespondSutHeQuery,
            date!(2025 - 04 - 30),
        );
        assert_eq!(pending, QueryPendingDays::default());
        assert_eq!(pending.pending_party(), None);
    }

    #[test]
    fn test_query_pending_never_both_non_zero() {
        let issued: Date = date!(2025 - 01 - 01);
        for status in MatterStatus::ALL {
            for response in [None, Some(date!(2025 - 01 - 05))] {
                for today in [date!(2024 - 12 - 01), date!(2025 - 01 - 01), date!(2025 - 02 - 01)]
                {
                    let pending = query_pending_days(Some(issued), response, status, today);
                    assert!(
                        pending.department_days == 0 || pending.reviewer_days == 0,
                        "both buckets set for {status} on {today}"
                    );
                    assert!(pending.department_days >= 0 && pending.reviewer_days >= 0);
                }
            }
        }
    }
}
