// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Chronological timeline of a matter's stages.
//!
//! ## Invariants
//!
//! - One event per stage that has a date; undated stages are dropped
//! - Events are in non-decreasing date order
//! - Stages sharing a date keep the order the caller supplied them in
//! - The first event has a gap of 0; the gaps sum to the span of the timeline

use crate::dates::{days_between, iso_date};
use serde::{Deserialize, Serialize};
use time::Date;

/// A labelled stage date as supplied by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageEntry {
    pub label: String,
    pub date: Option<Date>,
}

impl StageEntry {
    /// Creates a new `StageEntry`.
    #[must_use]
    pub fn new(label: &str, date: Option<Date>) -> Self {
        Self {
            label: label.to_string(),
            date,
        }
    }
}

/// A stage that has happened, positioned on the timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineEvent {
    pub label: String,
    #[serde(with = "iso_date")]
    pub date: Date,
    /// Days since the preceding event; 0 for the first.
    pub days_since_previous: i64,
}

/// Builds the timeline from labelled stage dates.
///
/// # Example
///
/// ```text
/// A = 2025-02-10, B = 2025-02-01, C = 2025-02-15
///
/// B  2025-02-01  +0
/// A  2025-02-10  +9
/// C  2025-02-15  +5
/// ```
#[must_use]
pub fn build_timeline(entries: &[StageEntry]) -> Vec<TimelineEvent> {
    let mut dated: Vec<(&str, Date)> = entries
        .iter()
        .filter_map(|entry| entry.date.map(|date| (entry.label.as_str(), date)))
        .collect();

    // sort_by_key is stable, so ties keep caller order
    dated.sort_by_key(|(_, date)| *date);

    let mut previous: Option<Date> = None;
    dated
        .into_iter()
        .map(|(label, date)| {
            let days_since_previous: i64 = previous.map_or(0, |prev| days_between(prev, date));
            previous = Some(date);
            TimelineEvent {
                label: label.to_string(),
                date,
                days_since_previous,
            }
        })
        .collect()
}

/// Days from the most recent event to `today`, or `None` for an empty timeline.
#[must_use]
pub fn days_since_last_event(events: &[TimelineEvent], today: Date) -> Option<i64> {
    events.last().map(|event| days_between(event.date, today))
}
