// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Resolution of "today" at the process boundary.
//!
//! This is the only place the system clock is read. Everything below it
//! receives the date as a parameter.

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use chrono_tz::Tz;
use color_eyre::eyre::{Result, eyre};
use time::{Date, Month};

/// Returns the calendar date in `timezone` right now.
///
/// # Errors
///
/// Returns an error if the timezone name is not a known IANA zone.
pub fn today_in(timezone: &str) -> Result<Date> {
    today_at(Utc::now(), timezone)
}

/// Returns the calendar date in `timezone` at the given instant.
///
/// # Errors
///
/// Returns an error if the timezone name is not a known IANA zone.
pub fn today_at(instant: DateTime<Utc>, timezone: &str) -> Result<Date> {
    let tz: Tz = timezone
        .parse()
        .map_err(|_| eyre!("Unknown timezone '{timezone}'"))?;

    to_time_date(instant.with_timezone(&tz).date_naive())
}

/// Converts a `chrono::NaiveDate` to a `time::Date`.
fn to_time_date(date: NaiveDate) -> Result<Date> {
    let month: Month = u8::try_from(date.month())
        .ok()
        .and_then(|m| Month::try_from(m).ok())
        .ok_or_else(|| eyre!("Invalid month in {date}"))?;
    let day: u8 = u8::try_from(date.day()).map_err(|_| eyre!("Invalid day in {date}"))?;

    Ok(Date::from_calendar_date(date.year(), month, day)?)
}
