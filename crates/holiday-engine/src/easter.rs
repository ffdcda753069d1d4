//! Easter Sunday via the Gauss/Anonymous Gregorian computus.
//!
//! The arithmetic is total over any integer year; only years from 1583 on are
//! historically meaningful for the Gregorian calendar.

use chrono::NaiveDate;

/// Month and day of Easter Sunday in `year`, as `(month, day)`.
///
/// Always returns March (3) or April (4).
pub fn easter_month_day(year: i32) -> (u32, u32) {
    let a = year.rem_euclid(19);
    let b = year.div_euclid(100);
    let c = year.rem_euclid(100);
    let d = b.div_euclid(4);
    let e = b.rem_euclid(4);
    let f = (b + 8).div_euclid(25);
    let g = (b - f + 1).div_euclid(3);
    let h = (19 * a + b - d - g + 15).rem_euclid(30);
    let i = c.div_euclid(4);
    let k = c.rem_euclid(4);
    let l = (32 + 2 * e + 2 * i - h - k).rem_euclid(7);
    let m = (a + 11 * h + 22 * l).div_euclid(451);

    let n = h + l - 7 * m + 114;
    // n is in 114..=157 for every input, so both casts are lossless.
    ((n / 31) as u32, (n % 31 + 1) as u32)
}

/// Gregorian date of Easter Sunday in `year`.
///
/// # Panics
/// Panics if `year` lies outside the range `chrono::NaiveDate` can represent.
pub fn easter_sunday(year: i32) -> NaiveDate {
    let (month, day) = easter_month_day(year);
    crate::date::ymd(year, month, day)
}
