//! Streak-warning window detection.
//!
//! A user who journaled yesterday but not yet today is about to lose
//! their streak. The warning window opens 20 hours after the last entry
//! and closes at 24 hours, when the streak day has already passed.
//! Scheduling the actual notification is the caller's concern.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// User notification preferences relevant to streak warnings.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ReminderPreferences {
    /// Master switch for notifications
    pub enabled: bool,
    /// Whether streak warnings specifically are wanted
    pub streak_warnings: bool,
}

/// A due streak warning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StreakWarning {
    /// Instant of the most recent journal entry
    pub last_entry_at: DateTime<Utc>,
    /// Hours elapsed since the last entry, at check time
    pub hours_since_last_entry: f64,
    /// When the window closes and the streak is considered lost
    pub expires_at: DateTime<Utc>,
}

/// Decides whether a streak warning is due.
#[derive(Debug, Clone)]
pub struct ReminderCheck {
    /// Hours after the last entry before a warning is due
    pub warn_after_hours: i64,
    /// Hours after the last entry when the window closes
    pub window_closes_hours: i64,
}

impl Default for ReminderCheck {
    fn default() -> Self {
        Self {
            warn_after_hours: 20,
            window_closes_hours: 24,
        }
    }
}

impl ReminderCheck {
    /// Create a check with the default 20-24h window.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a check with custom window bounds.
    pub fn with_window(warn_after_hours: i64, window_closes_hours: i64) -> Self {
        Self {
            warn_after_hours,
            window_closes_hours,
        }
    }

    /// Return the warning to raise, if one is due at `now`.
    ///
    /// Nothing is due when preferences opt out, when there is no last
    /// entry, or when `now` falls outside the `[warn_after,
    /// window_closes)` interval since the last entry.
    pub fn check(
        &self,
        prefs: &ReminderPreferences,
        last_entry_at: Option<DateTime<Utc>>,
        now: DateTime<Utc>,
    ) -> Option<StreakWarning> {
        if !prefs.enabled || !prefs.streak_warnings {
            return None;
        }
        let last_entry_at = last_entry_at?;

        let elapsed = now - last_entry_at;
        let hours = elapsed.num_milliseconds() as f64 / (1000.0 * 60.0 * 60.0);

        if elapsed < Duration::hours(self.warn_after_hours)
            || elapsed >= Duration::hours(self.window_closes_hours)
        {
            return None;
        }

        Some(StreakWarning {
            last_entry_at,
            hours_since_last_entry: hours,
            expires_at: last_entry_at + Duration::hours(self.window_closes_hours),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    const PREFS_ON: ReminderPreferences = ReminderPreferences {
        enabled: true,
        streak_warnings: true,
    };

    fn at(hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 10, hour, 0, 0).unwrap()
    }

    #[test]
    fn test_warning_inside_window() {
        let last = at(0);
        let warning = ReminderCheck::new()
            .check(&PREFS_ON, Some(last), at(21))
            .expect("warning should be due at 21h");
        assert_eq!(warning.last_entry_at, last);
        assert_eq!(warning.expires_at, last + Duration::hours(24));
        assert!((warning.hours_since_last_entry - 21.0).abs() < 1e-9);
    }

    #[test]
    fn test_window_boundaries() {
        let check = ReminderCheck::new();
        let last = at(0);
        // 19h59m: too early
        assert!(check
            .check(&PREFS_ON, Some(last), at(19) + Duration::minutes(59))
            .is_none());
        // exactly 20h: due
        assert!(check.check(&PREFS_ON, Some(last), at(20)).is_some());
        // exactly 24h: window closed, streak already lost
        assert!(check
            .check(&PREFS_ON, Some(last), last + Duration::hours(24))
            .is_none());
    }

    #[test]
    fn test_disabled_preferences() {
        let check = ReminderCheck::new();
        let last = at(0);
        let off = ReminderPreferences {
            enabled: false,
            streak_warnings: true,
        };
        assert!(check.check(&off, Some(last), at(21)).is_none());
        let no_warnings = ReminderPreferences {
            enabled: true,
            streak_warnings: false,
        };
        assert!(check.check(&no_warnings, Some(last), at(21)).is_none());
    }

    #[test]
    fn test_no_entries_yet() {
        assert!(ReminderCheck::new().check(&PREFS_ON, None, at(12)).is_none());
    }

    #[test]
    fn test_custom_window() {
        let check = ReminderCheck::with_window(1, 2);
        let last = at(0);
        assert!(check.check(&PREFS_ON, Some(last), at(1)).is_some());
        assert!(check.check(&PREFS_ON, Some(last), at(3)).is_none());
    }
}
