//! Journal streak calculator.
//!
//! Reduces a user's entry timestamps to streak statistics: the current
//! consecutive-day run, the longest run ever, and the most recent entry
//! day. Day continuity is judged on UTC calendar days so results are
//! deterministic regardless of device timezone.
//!
//! The computation is pure: "now" is an explicit `as_of` argument, never
//! read from the system clock, and malformed timestamps are rejected
//! instead of being coerced to the current time.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::error::ValidationError;

use super::JournalEntry;

/// Convert epoch milliseconds to an instant, if representable.
pub fn instant_from_millis(millis: i64) -> Option<DateTime<Utc>> {
    Utc.timestamp_millis_opt(millis).single()
}

/// UTC calendar-day bucket for a timestamp, if representable.
pub fn day_key(millis: i64) -> Option<NaiveDate> {
    instant_from_millis(millis).map(|at| at.date_naive())
}

/// Streak statistics for one user's journal history.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreakData {
    /// Consecutive days with an entry, ending today or yesterday
    pub current_streak: u32,
    /// Longest consecutive-day run anywhere in the history
    pub longest_streak: u32,
    /// UTC day of the most recent entry
    pub last_entry_date: Option<NaiveDate>,
    /// Raw entry count, not de-duplicated by day
    pub total_entries: u32,
}

/// Compute streak statistics from a user's entries as of a given instant.
///
/// Entries may be unordered and may share calendar days; duplicates on
/// the same day count once toward continuity. The current streak is only
/// alive if the most recent entry day is `as_of`'s day or the day before.
///
/// # Errors
/// Returns [`ValidationError::InvalidTimestamp`] naming the first entry
/// whose `created_at` is not a representable instant. An empty slice is
/// not an error.
pub fn compute_streak(
    entries: &[JournalEntry],
    as_of: DateTime<Utc>,
) -> Result<StreakData, ValidationError> {
    let mut days: BTreeSet<NaiveDate> = BTreeSet::new();
    for (index, entry) in entries.iter().enumerate() {
        let day = day_key(entry.created_at).ok_or(ValidationError::InvalidTimestamp {
            index,
            millis: entry.created_at,
        })?;
        days.insert(day);
    }

    let most_recent = match days.iter().next_back() {
        Some(day) => *day,
        None => return Ok(StreakData::default()),
    };

    let today = as_of.date_naive();
    let gap_from_today = (today - most_recent).num_days();

    // The streak survives a missing entry today, but not a full missed day.
    let mut current_streak = 0;
    if gap_from_today == 0 || gap_from_today == 1 {
        current_streak = 1;
        let mut expected = most_recent;
        for day in days.iter().rev().skip(1) {
            if (expected - *day).num_days() == 1 {
                current_streak += 1;
                expected = *day;
            } else {
                break;
            }
        }
    }

    let mut longest_streak = 1;
    let mut run = 1;
    let mut prev: Option<NaiveDate> = None;
    for day in &days {
        if let Some(prev_day) = prev {
            if (*day - prev_day).num_days() == 1 {
                run += 1;
            } else {
                run = 1;
            }
            longest_streak = longest_streak.max(run);
        }
        prev = Some(*day);
    }

    Ok(StreakData {
        current_streak,
        longest_streak,
        last_entry_date: Some(most_recent),
        total_entries: entries.len() as u32,
    })
}
