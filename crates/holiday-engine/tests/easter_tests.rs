//! Tests for the Gregorian computus against published Easter dates.

use chrono::{Datelike, NaiveDate};
use holiday_engine::easter::easter_month_day;
use holiday_engine::easter_sunday;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

// ---------------------------------------------------------------------------
// Reference table
// ---------------------------------------------------------------------------

const REFERENCE: &[(i32, u32, u32)] = &[
    (2000, 4, 23),
    (2001, 4, 15),
    (2002, 3, 31),
    (2005, 3, 27),
    (2008, 3, 23),
    (2011, 4, 24),
    (2016, 3, 27),
    (2018, 4, 1),
    (2019, 4, 21),
    (2020, 4, 12),
    (2021, 4, 4),
    (2022, 4, 17),
    (2023, 4, 9),
    (2024, 3, 31),
    (2025, 4, 20),
    (2026, 4, 5),
    (2027, 3, 28),
    (2028, 4, 16),
    (2029, 4, 1),
    (2030, 4, 21),
];

#[test]
fn matches_reference_table() {
    for &(year, month, day) in REFERENCE {
        assert_eq!(
            easter_sunday(year),
            date(year, month, day),
            "Easter {year} should be {year}-{month:02}-{day:02}"
        );
    }
}

#[test]
fn handles_gauss_exception_years() {
    // The naive Gauss formula gets these two wrong; the corrected one must not.
    assert_eq!(easter_sunday(1954), date(1954, 4, 18));
    assert_eq!(easter_sunday(1981), date(1981, 4, 19));
}

#[test]
fn first_gregorian_year() {
    assert_eq!(easter_sunday(1583), date(1583, 4, 10));
}

// ---------------------------------------------------------------------------
// Bounds
// ---------------------------------------------------------------------------

#[test]
fn twentieth_and_twenty_first_century_within_bounds() {
    for year in 1900..=2100 {
        let easter = easter_sunday(year);
        let earliest = date(year, 3, 22);
        let latest = date(year, 4, 25);
        assert!(
            easter >= earliest && easter <= latest,
            "Easter {year} = {easter} is outside March 22 - April 25"
        );
        assert_eq!(easter.year(), year);
    }
}

#[test]
fn month_day_agrees_with_date() {
    for year in 1990..=2040 {
        let (month, day) = easter_month_day(year);
        let easter = easter_sunday(year);
        assert_eq!((easter.month(), easter.day()), (month, day));
    }
}
