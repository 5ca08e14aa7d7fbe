//! Journal entry document type.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::mood::MoodType;

/// A single journal entry.
///
/// Timestamps are epoch milliseconds, matching the wire format of the
/// backing store. `date_string` is the UTC calendar day (`YYYY-MM-DD`)
/// used by calendar views.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JournalEntry {
    pub id: String,
    pub user_id: String,
    pub mood: MoodType,
    pub note: String,
    /// Voice-note URL, if one was recorded
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio_url: Option<String>,
    /// Voice-note length in seconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio_duration_secs: Option<u32>,
    /// Creation instant, epoch milliseconds
    pub created_at: i64,
    pub date_string: String,
    pub is_anonymous: bool,
    #[serde(default)]
    pub pinned: bool,
}

impl JournalEntry {
    /// Create a new entry with a fresh id, stamped at `created_at`.
    pub fn new(
        user_id: impl Into<String>,
        mood: MoodType,
        note: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.into(),
            mood,
            note: note.into(),
            audio_url: None,
            audio_duration_secs: None,
            created_at: created_at.timestamp_millis(),
            date_string: created_at.format("%Y-%m-%d").to_string(),
            is_anonymous: false,
            pinned: false,
        }
    }
}
