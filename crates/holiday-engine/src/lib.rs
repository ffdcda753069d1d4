//! # holiday-engine
//!
//! Estonian public holidays and shortened work days, computed locally and
//! published as an iCalendar feed.
//!
//! Every holiday is derived from a closed rule set: fixed calendar dates plus
//! three feasts anchored on Gregorian Easter. No remote data source is needed.
//!
//! ## Quick start
//!
//! ```rust
//! use holiday_engine::{generate, FeedMetadata, FixedClock};
//!
//! let clock = FixedClock::for_year(2025).unwrap();
//! let feed = generate(&clock, &FeedMetadata::default()).unwrap();
//! assert_eq!(feed.summary.total, 112);
//! assert!(feed.document.starts_with("BEGIN:VCALENDAR\r\nNAME:Estonian Holidays\r\n"));
//! ```
//!
//! ## Modules
//!
//! - [`easter`] -- Gregorian computus
//! - [`date`] -- date-only helpers
//! - [`rules`] -- year → holiday records
//! - [`range`] -- multi-year window and the injectable [`Clock`]
//! - [`event`] -- holiday record → calendar event
//! - [`ical`] -- iCalendar emitter
//! - [`feed`] -- end-to-end generation and persistence
//! - [`error`] -- Error types

pub mod date;
pub mod easter;
pub mod error;
pub mod event;
pub mod feed;
pub mod ical;
pub mod range;
pub mod rules;

pub use easter::easter_sunday;
pub use error::FeedError;
pub use event::{to_event, to_events, BusyStatus, CalendarEvent, EventStatus, Transparency};
pub use feed::{generate, generate_window, publishable, write_feed, Feed, FeedSummary};
pub use ical::FeedMetadata;
pub use range::{build_range, build_window, Clock, FixedClock, SystemClock, YearWindow};
pub use rules::{holidays_for_year, DayKind, HolidayRecord};
