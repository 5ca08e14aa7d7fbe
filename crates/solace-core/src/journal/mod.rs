//! Journal entries, streak statistics, and streak-warning windows.

mod entry;
mod reminder;
mod streak;

pub use entry::JournalEntry;
pub use reminder::{ReminderCheck, ReminderPreferences, StreakWarning};
pub use streak::{compute_streak, day_key, instant_from_millis, StreakData};
