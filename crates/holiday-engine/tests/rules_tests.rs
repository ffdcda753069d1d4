//! Tests for the per-year holiday rule set.

use chrono::NaiveDate;
use holiday_engine::rules::{DAY_OFF_NOTE, RECORDS_PER_YEAR};
use holiday_engine::{holidays_for_year, DayKind, HolidayRecord};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn count(records: &[HolidayRecord], kind: DayKind) -> usize {
    records.iter().filter(|r| r.kind == kind).count()
}

fn find<'a>(records: &'a [HolidayRecord], title: &str) -> &'a HolidayRecord {
    records
        .iter()
        .find(|r| r.title == title)
        .unwrap_or_else(|| panic!("no record titled '{title}'"))
}

// ---------------------------------------------------------------------------
// Shape
// ---------------------------------------------------------------------------

#[test]
fn sixteen_records_every_year() {
    assert_eq!(RECORDS_PER_YEAR, 16);
    for year in [1584, 1900, 2000, 2024, 2025, 2100, 9999] {
        assert_eq!(holidays_for_year(year).len(), 16, "year {year}");
    }
}

#[test]
fn kind_breakdown() {
    let records = holidays_for_year(2025);
    assert_eq!(count(&records, DayKind::NationalHoliday), 11);
    assert_eq!(count(&records, DayKind::NationalCelebration), 1);
    assert_eq!(count(&records, DayKind::ShortenedWorkday), 4);
    assert_eq!(count(&records, DayKind::Memorable), 0);
}

#[test]
fn insertion_order_is_rule_order() {
    let records = holidays_for_year(2025);
    let kinds: Vec<DayKind> = records.iter().map(|r| r.kind).collect();

    assert!(kinds[..8].iter().all(|&k| k == DayKind::NationalHoliday));
    assert_eq!(kinds[8], DayKind::NationalCelebration);
    assert!(kinds[9..12].iter().all(|&k| k == DayKind::NationalHoliday));
    assert!(kinds[12..].iter().all(|&k| k == DayKind::ShortenedWorkday));

    // Fixed holidays are listed by date; the list as a whole is not sorted.
    assert_eq!(records[0].date, date(2025, 1, 1));
    assert_eq!(records[7].date, date(2025, 12, 26));
    assert_eq!(records[8].date, date(2025, 2, 24));
}

#[test]
fn every_record_belongs_to_its_year() {
    for year in [1999, 2025, 2038] {
        for record in holidays_for_year(year) {
            assert_eq!(chrono::Datelike::year(&record.date), year);
        }
    }
}

#[test]
fn date_and_kind_pairs_are_unique_within_a_year() {
    let records = holidays_for_year(2025);
    let mut keys: Vec<(NaiveDate, DayKind)> = records.iter().map(|r| (r.date, r.kind)).collect();
    keys.sort();
    keys.dedup();
    assert_eq!(keys.len(), records.len());
}

// ---------------------------------------------------------------------------
// Fixed dates
// ---------------------------------------------------------------------------

#[test]
fn fixed_national_holidays() {
    let records = holidays_for_year(2026);
    let fixed: Vec<NaiveDate> = records
        .iter()
        .filter(|r| r.kind == DayKind::NationalHoliday)
        .map(|r| r.date)
        .take(8)
        .collect();
    assert_eq!(
        fixed,
        vec![
            date(2026, 1, 1),
            date(2026, 5, 1),
            date(2026, 6, 23),
            date(2026, 6, 24),
            date(2026, 8, 20),
            date(2026, 12, 24),
            date(2026, 12, 25),
            date(2026, 12, 26),
        ]
    );
}

#[test]
fn independence_day_is_the_national_celebration() {
    let records = holidays_for_year(2026);
    let celebration: Vec<&HolidayRecord> = records
        .iter()
        .filter(|r| r.kind == DayKind::NationalCelebration)
        .collect();
    assert_eq!(celebration.len(), 1);
    assert_eq!(celebration[0].date, date(2026, 2, 24));
    assert_eq!(celebration[0].kind_label, "Rahvuspüha");
}

#[test]
fn shortened_workdays() {
    let records = holidays_for_year(2026);
    let shortened: Vec<&HolidayRecord> = records
        .iter()
        .filter(|r| r.kind == DayKind::ShortenedWorkday)
        .collect();
    let dates: Vec<NaiveDate> = shortened.iter().map(|r| r.date).collect();
    assert_eq!(
        dates,
        vec![
            date(2026, 2, 23),
            date(2026, 6, 22),
            date(2026, 12, 23),
            date(2026, 12, 31),
        ]
    );
    for record in shortened {
        assert!(record.notes.is_none(), "{} should carry no notes", record.title);
        assert_eq!(record.kind_label, "Lühendatud tööpäev");
    }
}

#[test]
fn days_off_share_the_day_off_note() {
    for record in holidays_for_year(2025) {
        if record.kind.is_day_off() {
            assert_eq!(record.notes.as_deref(), Some(DAY_OFF_NOTE));
        }
    }
}

// ---------------------------------------------------------------------------
// Easter-relative holidays
// ---------------------------------------------------------------------------

#[test]
fn easter_holidays_2025() {
    let records = holidays_for_year(2025);
    assert_eq!(find(&records, "suur reede").date, date(2025, 4, 18));
    assert_eq!(
        find(&records, "ülestõusmispühade 1. püha").date,
        date(2025, 4, 20)
    );
    assert_eq!(find(&records, "nelipühade 1. püha").date, date(2025, 6, 8));
}

#[test]
fn easter_holidays_2024_cross_into_march() {
    let records = holidays_for_year(2024);
    assert_eq!(find(&records, "suur reede").date, date(2024, 3, 29));
    assert_eq!(
        find(&records, "ülestõusmispühade 1. püha").date,
        date(2024, 3, 31)
    );
    assert_eq!(find(&records, "nelipühade 1. püha").date, date(2024, 5, 19));
}

#[test]
fn movable_titles_are_distinct() {
    let records = holidays_for_year(2025);
    let movable = &records[9..12];
    assert_ne!(movable[0].title, movable[1].title);
    assert_ne!(movable[1].title, movable[2].title);
    assert_ne!(movable[0].title, movable[2].title);
}

// ---------------------------------------------------------------------------
// DayKind
// ---------------------------------------------------------------------------

#[test]
fn kind_ids_roundtrip() {
    for kind in [
        DayKind::NationalHoliday,
        DayKind::NationalCelebration,
        DayKind::Memorable,
        DayKind::ShortenedWorkday,
    ] {
        assert_eq!(DayKind::from_id(kind.id()), Some(kind));
    }
    assert_eq!(DayKind::NationalHoliday.id(), 1);
    assert_eq!(DayKind::ShortenedWorkday.id(), 4);
    assert_eq!(DayKind::from_id(0), None);
    assert_eq!(DayKind::from_id(5), None);
}

#[test]
fn only_holidays_and_celebrations_are_days_off() {
    assert!(DayKind::NationalHoliday.is_day_off());
    assert!(DayKind::NationalCelebration.is_day_off());
    assert!(!DayKind::Memorable.is_day_off());
    assert!(!DayKind::ShortenedWorkday.is_day_off());
}
