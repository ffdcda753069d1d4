//! Estonian holiday rules: one year number in, that year's holiday records out.
//!
//! Fixed-date rules come from the Holidays and Days of National Importance Act;
//! the movable feasts are offsets from Easter Sunday.

use crate::date::{add_days, ymd};
use crate::easter::easter_sunday;
use chrono::NaiveDate;
use serde::Serialize;

/// Annotation shared by every day off.
pub const DAY_OFF_NOTE: &str = "Puhkepäev";

/// Category of a holiday record.
///
/// The discriminants are the numeric kind ids used by the riigipühad.ee data
/// source. `Memorable` is never produced by [`holidays_for_year`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DayKind {
    NationalHoliday = 1,
    NationalCelebration = 2,
    Memorable = 3,
    ShortenedWorkday = 4,
}

impl DayKind {
    pub fn id(self) -> u8 {
        self as u8
    }

    pub fn from_id(id: u8) -> Option<Self> {
        match id {
            1 => Some(Self::NationalHoliday),
            2 => Some(Self::NationalCelebration),
            3 => Some(Self::Memorable),
            4 => Some(Self::ShortenedWorkday),
            _ => None,
        }
    }

    /// Estonian category name.
    pub fn label(self) -> &'static str {
        match self {
            Self::NationalHoliday => "Riigipüha",
            Self::NationalCelebration => "Rahvuspüha",
            Self::Memorable => "Riiklik tähtpäev",
            Self::ShortenedWorkday => "Lühendatud tööpäev",
        }
    }

    /// Whether the day is a non-working day.
    pub fn is_day_off(self) -> bool {
        matches!(self, Self::NationalHoliday | Self::NationalCelebration)
    }
}

/// One dated entry of the holiday calendar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HolidayRecord {
    pub date: NaiveDate,
    pub title: String,
    pub kind_label: String,
    pub kind: DayKind,
    pub notes: Option<String>,
}

impl HolidayRecord {
    /// Record labelled with the kind's own category name.
    pub fn new(date: NaiveDate, title: &str, kind: DayKind, notes: Option<&str>) -> Self {
        Self {
            date,
            title: title.to_string(),
            kind_label: kind.label().to_string(),
            kind,
            notes: notes.map(str::to_string),
        }
    }
}

const FIXED_HOLIDAYS: [(u32, u32, &str); 8] = [
    (1, 1, "uusaasta"),
    (5, 1, "kevadpüha"),
    (6, 23, "võidupüha"),
    (6, 24, "jaanipäev"),
    (8, 20, "taasiseseisvumispäev"),
    (12, 24, "jõululaupäev"),
    (12, 25, "esimene jõulupüha"),
    (12, 26, "teine jõulupüha"),
];

const INDEPENDENCE_DAY: (u32, u32, &str) = (2, 24, "iseseisvuspäev, Eesti Vabariigi aastapäev");

/// Offsets in days from Easter Sunday.
const EASTER_HOLIDAYS: [(i64, &str); 3] = [
    (-2, "suur reede"),
    (0, "ülestõusmispühade 1. püha"),
    (49, "nelipühade 1. püha"),
];

const SHORTENED_WORKDAYS: [(u32, u32, &str); 4] = [
    (2, 23, "iseseisvuspäevale eelnev tööpäev"),
    (6, 22, "võidupühale eelnev tööpäev"),
    (12, 23, "jõululaupäevale eelnev tööpäev"),
    (12, 31, "uusaastale eelnev tööpäev"),
];

/// Number of records [`holidays_for_year`] returns for any year.
pub const RECORDS_PER_YEAR: usize =
    FIXED_HOLIDAYS.len() + 1 + EASTER_HOLIDAYS.len() + SHORTENED_WORKDAYS.len();

/// All holiday records of `year`, unfiltered and in rule order: fixed national
/// holidays, independence day, Easter-relative holidays, shortened workdays.
///
/// # Panics
/// Panics if `year` lies outside the range `chrono::NaiveDate` can represent.
pub fn holidays_for_year(year: i32) -> Vec<HolidayRecord> {
    let mut records = Vec::with_capacity(RECORDS_PER_YEAR);

    for (month, day, title) in FIXED_HOLIDAYS {
        records.push(HolidayRecord::new(
            ymd(year, month, day),
            title,
            DayKind::NationalHoliday,
            Some(DAY_OFF_NOTE),
        ));
    }

    let (month, day, title) = INDEPENDENCE_DAY;
    records.push(HolidayRecord::new(
        ymd(year, month, day),
        title,
        DayKind::NationalCelebration,
        Some(DAY_OFF_NOTE),
    ));

    let easter = easter_sunday(year);
    for (offset, title) in EASTER_HOLIDAYS {
        records.push(HolidayRecord::new(
            add_days(easter, offset),
            title,
            DayKind::NationalHoliday,
            Some(DAY_OFF_NOTE),
        ));
    }

    for (month, day, title) in SHORTENED_WORKDAYS {
        records.push(HolidayRecord::new(
            ymd(year, month, day),
            title,
            DayKind::ShortenedWorkday,
            None,
        ));
    }

    tracing::debug!(year, %easter, count = records.len(), "generated holiday rules");
    records
}
