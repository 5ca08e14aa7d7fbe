//! Message retention tiers and expiry decisions.
//!
//! Each chat carries one retention tier; messages older than the tier's
//! window are eligible for deletion. Expiry is a pure function of
//! `(tier, created_at, now)` with millisecond arithmetic, so a sweep can
//! be retried or re-run at any time and reach the same decisions.

use serde::{Deserialize, Serialize};

use super::Message;

const HOUR_MS: i64 = 60 * 60 * 1000;
const DAY_MS: i64 = 24 * HOUR_MS;

/// How long a chat keeps its messages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RetentionPeriod {
    #[serde(rename = "24h")]
    TwentyFourHours,
    #[serde(rename = "1week")]
    OneWeek,
    #[serde(rename = "1month")]
    OneMonth,
    #[default]
    #[serde(rename = "forever")]
    Forever,
}

impl RetentionPeriod {
    /// All tiers, shortest window first.
    pub const ALL: [RetentionPeriod; 4] = [
        RetentionPeriod::TwentyFourHours,
        RetentionPeriod::OneWeek,
        RetentionPeriod::OneMonth,
        RetentionPeriod::Forever,
    ];

    /// Retention window in milliseconds; `None` means keep forever.
    pub fn duration_ms(&self) -> Option<i64> {
        match self {
            RetentionPeriod::TwentyFourHours => Some(24 * HOUR_MS),
            RetentionPeriod::OneWeek => Some(7 * DAY_MS),
            RetentionPeriod::OneMonth => Some(30 * DAY_MS),
            RetentionPeriod::Forever => None,
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            RetentionPeriod::TwentyFourHours => "24 Hours",
            RetentionPeriod::OneWeek => "1 Week",
            RetentionPeriod::OneMonth => "1 Month",
            RetentionPeriod::Forever => "Keep Forever",
        }
    }

    /// One-line description for settings surfaces.
    pub fn description(&self) -> &'static str {
        match self {
            RetentionPeriod::TwentyFourHours => "Messages disappear after 1 day",
            RetentionPeriod::OneWeek => "Messages disappear after 7 days",
            RetentionPeriod::OneMonth => "Messages disappear after 30 days",
            RetentionPeriod::Forever => "Messages never disappear",
        }
    }

    /// Display icon token (UI concern, opaque to the core).
    pub fn icon(&self) -> &'static str {
        match self {
            RetentionPeriod::TwentyFourHours => "clock-fast",
            RetentionPeriod::OneWeek => "clock-outline",
            RetentionPeriod::OneMonth => "calendar-clock",
            RetentionPeriod::Forever => "infinity",
        }
    }

    /// Stable wire name, as stored in chat settings.
    pub fn as_str(&self) -> &'static str {
        match self {
            RetentionPeriod::TwentyFourHours => "24h",
            RetentionPeriod::OneWeek => "1week",
            RetentionPeriod::OneMonth => "1month",
            RetentionPeriod::Forever => "forever",
        }
    }

    /// Whether a message created at `created_at_ms` has expired at `now_ms`.
    ///
    /// The boundary is inclusive: a message exactly one window old is
    /// expired. Clock skew (`now` before `created_at`) yields a negative
    /// elapsed time and therefore never expires anything.
    pub fn is_expired(&self, created_at_ms: i64, now_ms: i64) -> bool {
        match self.duration_ms() {
            None => false,
            Some(window) => now_ms.saturating_sub(created_at_ms) >= window,
        }
    }
}

impl std::str::FromStr for RetentionPeriod {
    type Err = crate::error::ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "24h" => Ok(RetentionPeriod::TwentyFourHours),
            "1week" => Ok(RetentionPeriod::OneWeek),
            "1month" => Ok(RetentionPeriod::OneMonth),
            "forever" => Ok(RetentionPeriod::Forever),
            other => Err(crate::error::ValidationError::InvalidValue {
                field: "message_retention".into(),
                message: format!("unknown retention period '{other}'"),
            }),
        }
    }
}

/// Ids of the messages that have expired under `period` as of `now_ms`.
///
/// Pure decision function: returns exactly the expired subset and
/// deletes nothing. Order follows the input.
pub fn expired_message_ids(messages: &[Message], period: RetentionPeriod, now_ms: i64) -> Vec<String> {
    messages
        .iter()
        .filter(|m| period.is_expired(m.created_at, now_ms))
        .map(|m| m.id.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::MessageAuthor;
    use chrono::{TimeZone, Utc};

    fn author() -> MessageAuthor {
        MessageAuthor {
            id: "user-1".into(),
            name: "Ada".into(),
            avatar: None,
        }
    }

    fn message_at(id: &str, created_at_ms: i64) -> Message {
        Message {
            id: id.into(),
            text: "hi".into(),
            created_at: created_at_ms,
            user: author(),
            image: None,
            video: None,
            system: false,
        }
    }

    #[test]
    fn test_duration_table() {
        assert_eq!(
            RetentionPeriod::TwentyFourHours.duration_ms(),
            Some(24 * 60 * 60 * 1000)
        );
        assert_eq!(
            RetentionPeriod::OneWeek.duration_ms(),
            Some(7 * 24 * 60 * 60 * 1000)
        );
        assert_eq!(
            RetentionPeriod::OneMonth.duration_ms(),
            Some(30 * 24 * 60 * 60 * 1000)
        );
        assert_eq!(RetentionPeriod::Forever.duration_ms(), None);
    }

    #[test]
    fn test_boundary_is_inclusive() {
        let now = Utc
            .with_ymd_and_hms(2024, 1, 10, 12, 0, 0)
            .unwrap()
            .timestamp_millis();
        let window = 24 * 60 * 60 * 1000;

        // Exactly 24h old: expired
        assert!(RetentionPeriod::TwentyFourHours.is_expired(now - window, now));
        // 1ms younger than the window: kept
        assert!(!RetentionPeriod::TwentyFourHours.is_expired(now - window + 1, now));
        // 1ms older: expired
        assert!(RetentionPeriod::TwentyFourHours.is_expired(now - window - 1, now));
    }

    #[test]
    fn test_forever_never_expires() {
        // Far in the past, even epoch zero
        assert!(!RetentionPeriod::Forever.is_expired(0, i64::MAX));
    }

    #[test]
    fn test_clock_skew_is_not_expired() {
        // Message from the "future" under a finite tier
        let now = 1_700_000_000_000;
        assert!(!RetentionPeriod::TwentyFourHours.is_expired(now + 5_000, now));
    }

    #[test]
    fn test_expired_subset_exact() {
        let now = 1_700_000_000_000;
        let day = 24 * 60 * 60 * 1000;
        let messages = vec![
            message_at("old-1", now - 2 * day),
            message_at("fresh", now - day / 2),
            message_at("old-2", now - day),
            message_at("future", now + 1000),
        ];

        let expired = expired_message_ids(&messages, RetentionPeriod::TwentyFourHours, now);
        assert_eq!(expired, vec!["old-1".to_string(), "old-2".to_string()]);

        let kept = expired_message_ids(&messages, RetentionPeriod::Forever, now);
        assert!(kept.is_empty());
    }

    #[test]
    fn test_wire_names() {
        assert_eq!(
            serde_json::to_string(&RetentionPeriod::TwentyFourHours).unwrap(),
            "\"24h\""
        );
        assert_eq!(
            serde_json::to_string(&RetentionPeriod::OneWeek).unwrap(),
            "\"1week\""
        );
        let period: RetentionPeriod = serde_json::from_str("\"forever\"").unwrap();
        assert_eq!(period, RetentionPeriod::Forever);
    }
}
