// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Calendar-day arithmetic.
//!
//! All day counts in this crate are whole calendar days. Inputs are
//! `time::Date` values, so a time-of-day component can never leak into a
//! difference. Timestamps are normalized to their calendar date first.

use crate::error::DomainError;
use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{Date, OffsetDateTime};

/// Returns the whole-day difference `b - a`.
///
/// The result is negative when `b` precedes `a` and zero for equal dates.
#[must_use]
pub fn days_between(a: Date, b: Date) -> i64 {
    (b - a).whole_days()
}

/// Adds a signed number of days to a date.
///
/// # Errors
///
/// Returns `DomainError::DateArithmeticOverflow` if the result falls outside
/// the range `time::Date` can represent.
pub fn add_days(date: Date, days: i64) -> Result<Date, DomainError> {
    let overflow = || DomainError::DateArithmeticOverflow {
        operation: format!("adding {days} days to {date}"),
    };

    // Day offsets beyond i32 are far outside the representable date range.
    let offset: i32 = i32::try_from(days).map_err(|_| overflow())?;
    date.to_julian_day()
        .checked_add(offset)
        .and_then(|julian_day| Date::from_julian_day(julian_day).ok())
        .ok_or_else(overflow)
}

/// Parses a calendar date.
///
/// Accepts `YYYY-MM-DD`, or an RFC 3339 timestamp whose calendar date (in the
/// timestamp's own offset) is taken. Surrounding whitespace is ignored.
///
/// # Errors
///
/// Returns `DomainError::InvalidDate` if the input matches neither form.
pub fn parse_date(input: &str) -> Result<Date, DomainError> {
    let trimmed: &str = input.trim();

    if let Ok(date) = Date::parse(trimmed, &format_description!("[year]-[month]-[day]")) {
        return Ok(date);
    }

    OffsetDateTime::parse(trimmed, &Rfc3339)
        .map(OffsetDateTime::date)
        .map_err(|e| DomainError::InvalidDate {
            input: input.to_string(),
            reason: e.to_string(),
        })
}

/// Serde adapter for dates stored as `YYYY-MM-DD` strings.
///
/// Deserialization goes through [`parse_date`], so timestamps are accepted and
/// reduced to their calendar date.
pub mod iso_date {
    use super::parse_date;
    use serde::{Deserialize, Deserializer, Serializer};
    use time::Date;

    /// Serializes a date as `YYYY-MM-DD`.
    ///
    /// # Errors
    ///
    /// Propagates serializer errors.
    pub fn serialize<S: Serializer>(date: &Date, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(date)
    }

    /// Deserializes a date string.
    ///
    /// # Errors
    ///
    /// Fails if the string is not a valid date.
    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Date, D::Error> {
        let raw: String = String::deserialize(deserializer)?;
        parse_date(&raw).map_err(serde::de::Error::custom)
    }

    /// Optional variant. `null` and blank strings both mean "not yet happened".
    pub mod option {
        use super::parse_date;
        use serde::{Deserialize, Deserializer, Serializer};
        use time::Date;

        /// Serializes an optional date as `YYYY-MM-DD` or `null`.
        ///
        /// # Errors
        ///
        /// Propagates serializer errors.
        #[allow(clippy::ref_option)]
        pub fn serialize<S: Serializer>(
            date: &Option<Date>,
            serializer: S,
        ) -> Result<S::Ok, S::Error> {
            match date {
                Some(date) => serializer.serialize_some(&date.to_string()),
                None => serializer.serialize_none(),
            }
        }

        /// Deserializes an optional date string.
        ///
        /// # Errors
        ///
        /// Fails if a non-blank string is not a valid date.
        pub fn deserialize<'de, D: Deserializer<'de>>(
            deserializer: D,
        ) -> Result<Option<Date>, D::Error> {
            let raw: Option<String> = Option::deserialize(deserializer)?;
            match raw {
                Some(s) if !s.trim().is_empty() => parse_date(&s)
                    .map(Some)
                    .map_err(serde::de::Error::custom),
                _ => Ok(None),
            }
        }
    }
}
