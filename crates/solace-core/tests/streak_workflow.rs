//! Integration tests for the journal streak workflow.
//!
//! Tests the full path from entry persistence to streak statistics,
//! including per-user isolation and same-day de-duplication.

use chrono::{TimeZone, Utc};
use solace_core::journal::{compute_streak, JournalEntry};
use solace_core::{Database, MoodType};

fn entry(user: &str, year: i32, month: u32, day: u32, hour: u32) -> JournalEntry {
    let at = Utc.with_ymd_and_hms(year, month, day, hour, 30, 0).unwrap();
    JournalEntry::new(user, MoodType::Happy, "entry", at)
}

#[test]
fn test_full_streak_workflow() {
    let db = Database::open_memory().unwrap();

    // Jan 1-3 run, Jan 4 missed, Jan 5 entry
    for day in [1, 2, 3, 5] {
        db.insert_journal(&entry("user-1", 2024, 1, day, 9)).unwrap();
    }
    // Another user's Jan 4 entry must not patch the gap
    db.insert_journal(&entry("user-2", 2024, 1, 4, 9)).unwrap();

    let as_of = Utc.with_ymd_and_hms(2024, 1, 5, 18, 0, 0).unwrap();
    let entries = db.journals_for_user("user-1").unwrap();
    let data = compute_streak(&entries, as_of).unwrap();

    assert_eq!(data.current_streak, 1);
    assert_eq!(data.longest_streak, 3);
    assert_eq!(
        data.last_entry_date,
        Some(as_of.date_naive())
    );
    assert_eq!(data.total_entries, 4);
}

#[test]
fn test_multiple_entries_per_day_counted_once() {
    let db = Database::open_memory().unwrap();

    db.insert_journal(&entry("user-1", 2024, 2, 1, 8)).unwrap();
    db.insert_journal(&entry("user-1", 2024, 2, 1, 21)).unwrap();
    db.insert_journal(&entry("user-1", 2024, 2, 2, 12)).unwrap();

    let as_of = Utc.with_ymd_and_hms(2024, 2, 2, 23, 0, 0).unwrap();
    let entries = db.journals_for_user("user-1").unwrap();
    let data = compute_streak(&entries, as_of).unwrap();

    assert_eq!(data.current_streak, 2);
    assert_eq!(data.longest_streak, 2);
    assert_eq!(data.total_entries, 3);
}

#[test]
fn test_no_entries_yields_zeroes() {
    let db = Database::open_memory().unwrap();
    let as_of = Utc.with_ymd_and_hms(2024, 2, 2, 23, 0, 0).unwrap();

    let entries = db.journals_for_user("nobody").unwrap();
    let data = compute_streak(&entries, as_of).unwrap();

    assert_eq!(data.current_streak, 0);
    assert_eq!(data.longest_streak, 0);
    assert_eq!(data.last_entry_date, None);
    assert_eq!(data.total_entries, 0);
}
