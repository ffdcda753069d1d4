//! Date-only helpers on top of `chrono::NaiveDate`.
//!
//! All holiday arithmetic is proleptic Gregorian with no time-of-day or
//! timezone component.

use chrono::{Duration, NaiveDate};

/// Build a date from components the caller knows to be valid.
///
/// # Panics
/// Panics on an impossible month/day or a year outside chrono's range. Every
/// caller in this crate passes literal month/day pairs or computus output.
pub(crate) fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day)
        .unwrap_or_else(|| panic!("invalid calendar date {year:04}-{month:02}-{day:02}"))
}

/// Shift a date by a signed number of days.
pub fn add_days(date: NaiveDate, days: i64) -> NaiveDate {
    date + Duration::days(days)
}

/// Basic-format iCalendar DATE (`YYYYMMDD`).
pub fn ical_date(date: NaiveDate) -> String {
    date.format("%Y%m%d").to_string()
}
