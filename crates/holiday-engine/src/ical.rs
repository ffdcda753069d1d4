//! iCalendar (RFC 5545) emitter for holiday events.
//!
//! Produces a `VCALENDAR` whose feed metadata lines immediately follow
//! `BEGIN:VCALENDAR`, then one all-day `VEVENT` per event in input order.
//! Output is deterministic: UIDs and DTSTAMPs derive from the event date.

use crate::date::ical_date;
use crate::error::{FeedError, Result};
use crate::event::CalendarEvent;
use chrono::Datelike;

/// Maximum content line length in octets, excluding CRLF.
const MAX_LINE_OCTETS: usize = 75;

pub const PRODID: &str = "-//estonian-holidays//holiday-engine//EN";
const UID_DOMAIN: &str = "estonian-holidays";

/// Calendar-level properties injected after `BEGIN:VCALENDAR`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedMetadata {
    pub name: String,
    pub description: String,
    pub timezone: String,
}

impl Default for FeedMetadata {
    fn default() -> Self {
        Self {
            name: "Estonian Holidays".to_string(),
            description: "Estonian public holidays and shortened work days".to_string(),
            timezone: "Europe/Tallinn".to_string(),
        }
    }
}

/// Serialize `events` into a complete iCalendar document.
///
/// # Errors
/// Returns `FeedError::Encoding` if an event has an empty title or a date
/// outside years 1..=9999.
pub fn encode(events: &[CalendarEvent], metadata: &FeedMetadata) -> Result<String> {
    let mut out = String::new();

    push_line(&mut out, "BEGIN:VCALENDAR");
    push_line(&mut out, &format!("NAME:{}", escape_text(&metadata.name)));
    push_line(&mut out, &format!("X-WR-CALNAME:{}", escape_text(&metadata.name)));
    push_line(
        &mut out,
        &format!("X-WR-CALDESC:{}", escape_text(&metadata.description)),
    );
    push_line(&mut out, &format!("X-WR-TIMEZONE:{}", metadata.timezone));
    push_line(&mut out, "VERSION:2.0");
    push_line(&mut out, &format!("PRODID:{PRODID}"));
    push_line(&mut out, "CALSCALE:GREGORIAN");
    push_line(&mut out, "METHOD:PUBLISH");

    for event in events {
        encode_event(&mut out, event)?;
    }

    push_line(&mut out, "END:VCALENDAR");
    Ok(out)
}

fn encode_event(out: &mut String, event: &CalendarEvent) -> Result<()> {
    let year = event.start.year();
    if !(1..=9999).contains(&year) {
        return Err(FeedError::Encoding(format!(
            "event '{}' has year {year}, outside the iCalendar DATE range",
            event.title
        )));
    }
    if event.title.trim().is_empty() {
        return Err(FeedError::Encoding(format!(
            "event on {} has an empty title",
            event.start
        )));
    }

    let date = ical_date(event.start);
    push_line(out, "BEGIN:VEVENT");
    push_line(out, &format!("UID:{date}-{}@{UID_DOMAIN}", event.kind.id()));
    push_line(out, &format!("DTSTAMP:{date}T000000Z"));
    push_line(out, &format!("DTSTART;VALUE=DATE:{date}"));
    push_line(out, &format!("DURATION:P{}D", event.duration_days));
    push_line(out, &format!("SUMMARY:{}", escape_text(&event.title)));
    push_line(
        out,
        &format!("DESCRIPTION:{}", escape_text(&event.description)),
    );
    push_line(out, &format!("STATUS:{}", event.status.as_str()));
    push_line(out, &format!("TRANSP:{}", event.transparency.as_str()));
    push_line(
        out,
        &format!("X-MICROSOFT-CDO-BUSYSTATUS:{}", event.busy_status.as_str()),
    );
    push_line(out, "END:VEVENT");
    Ok(())
}

fn push_line(out: &mut String, line: &str) {
    out.push_str(&fold_line(line));
}

/// Escape a TEXT value: backslash, comma, semicolon and newline.
pub fn escape_text(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len() + 8);
    for c in s.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            ',' => escaped.push_str("\\,"),
            ';' => escaped.push_str("\\;"),
            '\n' => escaped.push_str("\\n"),
            '\r' => {}
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Fold a content line at 75 octets and terminate it with CRLF.
///
/// Continuation lines start with a single space. Splits never fall inside a
/// UTF-8 sequence.
pub fn fold_line(line: &str) -> String {
    if line.len() <= MAX_LINE_OCTETS {
        return format!("{line}\r\n");
    }

    let mut folded = String::with_capacity(line.len() + line.len() / MAX_LINE_OCTETS * 3 + 2);
    let mut rest = line;
    let mut limit = MAX_LINE_OCTETS;

    while rest.len() > limit {
        let mut cut = limit;
        while !rest.is_char_boundary(cut) {
            cut -= 1;
        }
        let (head, tail) = rest.split_at(cut);
        folded.push_str(head);
        folded.push_str("\r\n ");
        rest = tail;
        // The leading space counts towards the next line's length.
        limit = MAX_LINE_OCTETS - 1;
    }
    folded.push_str(rest);
    folded.push_str("\r\n");
    folded
}
