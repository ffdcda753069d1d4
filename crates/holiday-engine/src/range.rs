//! Expand the holiday rules over a rolling window of years.
//!
//! The window is `current_year - 1 ..= current_year + 5`. The current year
//! comes from a [`Clock`] so the output can be pinned in tests.

use crate::rules::{holidays_for_year, HolidayRecord};
use chrono::{Datelike, Local, NaiveDate};

/// Years before the current year included in the window.
pub const YEARS_BEFORE: i32 = 1;
/// Years after the current year included in the window.
pub const YEARS_AFTER: i32 = 5;

/// Source of "today" for range generation.
pub trait Clock {
    fn today(&self) -> NaiveDate;

    fn current_year(&self) -> i32 {
        self.today().year()
    }
}

/// Reads the local wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Always reports the same date.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedClock(pub NaiveDate);

impl FixedClock {
    /// Clock pinned to January 1st of `year`.
    ///
    /// Returns `None` when chrono cannot represent that date.
    pub fn for_year(year: i32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, 1, 1).map(Self)
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

/// Inclusive range of years covered by a generated calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearWindow {
    pub start: i32,
    pub end: i32,
}

impl YearWindow {
    /// Window around `current_year`, clamped to the years `NaiveDate` can hold.
    pub fn around(current_year: i32) -> Self {
        Self {
            start: current_year
                .saturating_sub(YEARS_BEFORE)
                .max(NaiveDate::MIN.year()),
            end: current_year
                .saturating_add(YEARS_AFTER)
                .min(NaiveDate::MAX.year()),
        }
    }

    pub fn years(&self) -> impl Iterator<Item = i32> {
        self.start..=self.end
    }

    pub fn len(&self) -> usize {
        (self.end - self.start + 1).max(0) as usize
    }

    pub fn is_empty(&self) -> bool {
        self.end < self.start
    }
}

/// Holiday records for every year in `window`, in chronological order.
///
/// Records on the same date keep their rule order (the sort is stable).
pub fn build_window(window: YearWindow) -> Vec<HolidayRecord> {
    let mut records: Vec<HolidayRecord> = window.years().flat_map(holidays_for_year).collect();
    records.sort_by_key(|r| r.date);
    records
}

/// Holiday records for the window around the clock's current year.
pub fn build_range(clock: &impl Clock) -> Vec<HolidayRecord> {
    let window = YearWindow::around(clock.current_year());
    tracing::debug!(start = window.start, end = window.end, "building holiday range");
    build_window(window)
}
