//! The full generation pass: rules → range → events → iCalendar → file.

use crate::error::{FeedError, Result};
use crate::event::{to_events, CalendarEvent};
use crate::ical::{encode, FeedMetadata};
use crate::range::{build_range, build_window, Clock, YearWindow};
use crate::rules::{DayKind, HolidayRecord};
use chrono::Datelike;
use serde::Serialize;
use std::fs;
use std::path::Path;

pub const DEFAULT_OUTPUT_DIR: &str = "docs";
pub const DEFAULT_OUTPUT_FILE: &str = "estonian-holidays.ics";

/// Drop categories that are not published in the feed (memorable days).
pub fn publishable(records: Vec<HolidayRecord>) -> Vec<HolidayRecord> {
    records
        .into_iter()
        .filter(|r| r.kind != DayKind::Memorable)
        .collect()
}

/// Counts reported after a successful run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct FeedSummary {
    pub total: usize,
    pub day_offs: usize,
    pub shortened: usize,
    pub first_year: Option<i32>,
    pub last_year: Option<i32>,
}

impl FeedSummary {
    pub fn from_events(events: &[CalendarEvent]) -> Self {
        let years = events.iter().map(|e| e.start.year());
        Self {
            total: events.len(),
            day_offs: events.iter().filter(|e| e.is_day_off()).count(),
            shortened: events
                .iter()
                .filter(|e| e.kind == DayKind::ShortenedWorkday)
                .count(),
            first_year: years.clone().min(),
            last_year: years.max(),
        }
    }
}

/// An encoded feed, held in memory until written.
#[derive(Debug, Clone)]
pub struct Feed {
    pub events: Vec<CalendarEvent>,
    pub document: String,
    pub summary: FeedSummary,
}

/// Events for the window around the clock's current year, chronological.
pub fn events_for(clock: &impl Clock) -> Vec<CalendarEvent> {
    to_events(&publishable(build_range(clock)))
}

/// Generate the feed for the window around the clock's current year.
///
/// # Errors
/// Returns `FeedError::Encoding` if the emitter rejects an event.
pub fn generate(clock: &impl Clock, metadata: &FeedMetadata) -> Result<Feed> {
    assemble(events_for(clock), metadata)
}

/// Generate the feed for an explicit window of years.
///
/// # Errors
/// Returns `FeedError::Encoding` if the emitter rejects an event.
pub fn generate_window(window: YearWindow, metadata: &FeedMetadata) -> Result<Feed> {
    assemble(to_events(&publishable(build_window(window))), metadata)
}

fn assemble(events: Vec<CalendarEvent>, metadata: &FeedMetadata) -> Result<Feed> {
    let document = encode(&events, metadata)?;
    let summary = FeedSummary::from_events(&events);
    Ok(Feed {
        events,
        document,
        summary,
    })
}

/// Write `document` to `path`, creating parent directories and replacing any
/// existing file.
///
/// # Errors
/// Returns `FeedError::Persistence` if a directory or the file cannot be written.
pub fn write_feed(path: &Path, document: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| FeedError::Persistence {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    fs::write(path, document).map_err(|source| FeedError::Persistence {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::info!(path = %path.display(), bytes = document.len(), "calendar feed written");
    Ok(())
}
