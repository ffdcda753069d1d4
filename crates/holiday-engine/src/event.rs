//! Project holiday records into all-day calendar events.

use crate::rules::{DayKind, HolidayRecord};
use chrono::NaiveDate;
use serde::Serialize;

/// Title prefix for days off.
pub const DAY_OFF_PREFIX: &str = "🎉 ";
/// Title prefix for shortened workdays.
pub const SHORTENED_PREFIX: &str = "⏰ ";
/// Last description line of a shortened workday.
pub const SHORTENED_NOTE: &str = "⏰ Shortened work day (workday ends earlier)";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventStatus {
    Confirmed,
}

impl EventStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Confirmed => "CONFIRMED",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BusyStatus {
    Free,
    Busy,
}

impl BusyStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Free => "FREE",
            Self::Busy => "BUSY",
        }
    }
}

/// iCalendar `TRANSP` value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Transparency {
    Transparent,
    Opaque,
}

impl Transparency {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Transparent => "TRANSPARENT",
            Self::Opaque => "OPAQUE",
        }
    }
}

/// An all-day event, one day long, ready for the iCalendar emitter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalendarEvent {
    pub start: NaiveDate,
    pub kind: DayKind,
    pub title: String,
    pub description: String,
    pub status: EventStatus,
    pub busy_status: BusyStatus,
    pub transparency: Transparency,
    pub duration_days: u32,
}

impl CalendarEvent {
    pub fn is_day_off(&self) -> bool {
        self.kind.is_day_off()
    }
}

/// Map one record to its event.
pub fn to_event(record: &HolidayRecord) -> CalendarEvent {
    let day_off = record.kind.is_day_off();
    let shortened = record.kind == DayKind::ShortenedWorkday;

    let prefix = if day_off { DAY_OFF_PREFIX } else { SHORTENED_PREFIX };

    let mut description = record.kind_label.clone();
    if let Some(notes) = &record.notes {
        description.push('\n');
        description.push_str(notes);
    }
    if shortened {
        description.push('\n');
        description.push_str(SHORTENED_NOTE);
    }

    CalendarEvent {
        start: record.date,
        kind: record.kind,
        title: format!("{prefix}{}", record.title),
        description,
        status: EventStatus::Confirmed,
        busy_status: if day_off { BusyStatus::Free } else { BusyStatus::Busy },
        transparency: if day_off {
            Transparency::Transparent
        } else {
            Transparency::Opaque
        },
        duration_days: 1,
    }
}

/// Map records in order.
pub fn to_events(records: &[HolidayRecord]) -> Vec<CalendarEvent> {
    records.iter().map(to_event).collect()
}
