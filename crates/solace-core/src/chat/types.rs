//! Chat and message document types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

use super::RetentionPeriod;

/// Message sender, denormalized onto each message for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageAuthor {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

/// A single chat message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub text: String,
    /// Creation instant, epoch milliseconds
    pub created_at: i64,
    pub user: MessageAuthor,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video: Option<String>,
    /// System notice (joined, retention changed, ...) rather than user text
    #[serde(default)]
    pub system: bool,
}

impl Message {
    /// Create a user message with a fresh id, stamped at `created_at`.
    pub fn new(user: MessageAuthor, text: impl Into<String>, created_at: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            text: text.into(),
            created_at: created_at.timestamp_millis(),
            user,
            image: None,
            video: None,
            system: false,
        }
    }
}

/// Preview of the latest message, denormalized onto the chat.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LastMessage {
    pub text: String,
    pub created_at: i64,
    pub user_id: String,
}

/// A conversation between two or more participants.
///
/// `message_retention` is the conversation's retention setting; it
/// defaults to [`RetentionPeriod::Forever`] when never configured and
/// only affects future cleanup sweeps when changed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chat {
    pub id: String,
    /// Participant user ids
    pub participants: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_message: Option<LastMessage>,
    /// Unread message count per participant
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub unread_count: HashMap<String, u32>,
    pub created_at: i64,
    pub updated_at: i64,
    #[serde(default)]
    pub is_group: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_avatar: Option<String>,
    #[serde(default)]
    pub message_retention: RetentionPeriod,
}

impl Chat {
    /// Create a direct chat between participants, stamped at `created_at`.
    pub fn new(participants: Vec<String>, created_at: DateTime<Utc>) -> Self {
        let millis = created_at.timestamp_millis();
        Self {
            id: Uuid::new_v4().to_string(),
            participants,
            last_message: None,
            unread_count: HashMap::new(),
            created_at: millis,
            updated_at: millis,
            is_group: false,
            group_name: None,
            group_avatar: None,
            message_retention: RetentionPeriod::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_new_chat_defaults_to_forever() {
        let at = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let chat = Chat::new(vec!["a".into(), "b".into()], at);
        assert_eq!(chat.message_retention, RetentionPeriod::Forever);
        assert_eq!(chat.created_at, chat.updated_at);
    }

    #[test]
    fn test_chat_missing_retention_deserializes_to_forever() {
        // Documents written before the retention feature have no field
        let json = r#"{
            "id": "c1",
            "participants": ["a", "b"],
            "created_at": 1704067200000,
            "updated_at": 1704067200000
        }"#;
        let chat: Chat = serde_json::from_str(json).unwrap();
        assert_eq!(chat.message_retention, RetentionPeriod::Forever);
    }
}
