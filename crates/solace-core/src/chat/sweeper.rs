//! Background cleanup of expired chat messages.
//!
//! The sweeper walks every chat, evaluates its messages against the
//! chat's retention period, and asks the store to delete the expired
//! ones. Chats are independent, so they are swept as separate tasks
//! with no shared state. `now` is captured once per sweep so every
//! message in the run is judged against the same instant.
//!
//! Deletion is idempotent: a failed or interrupted sweep leaves nothing
//! to repair, because the next sweep re-evaluates the same pure policy
//! and finishes the job.

use async_trait::async_trait;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, warn};

use crate::error::Result;

use super::{expired_message_ids, Message, RetentionPeriod};

/// Storage collaborator the sweeper reads from and deletes through.
#[async_trait]
pub trait ChatStore: Send + Sync {
    /// Ids of all chats to consider for cleanup.
    async fn chat_ids(&self) -> Result<Vec<String>>;

    /// A chat's configured retention period (`Forever` when unset).
    async fn retention_of(&self, chat_id: &str) -> Result<RetentionPeriod>;

    /// All messages currently stored for a chat.
    async fn messages(&self, chat_id: &str) -> Result<Vec<Message>>;

    /// Delete one message. Deleting an already-deleted message is a
    /// no-op, not an error.
    async fn delete_message(&self, chat_id: &str, message_id: &str) -> Result<()>;
}

/// Outcome of a full cleanup pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CleanupReport {
    /// Chats visited (including ones with nothing to delete)
    pub processed_chats: usize,
    /// Messages successfully deleted
    pub deleted_messages: usize,
}

/// Sweeps expired messages out of chats.
#[derive(Debug, Clone, Default)]
pub struct RetentionSweeper;

impl RetentionSweeper {
    pub fn new() -> Self {
        Self
    }

    /// Sweep a single chat, judging expiry against `now_ms`.
    ///
    /// Returns the number of messages deleted. Individual delete
    /// failures are logged and skipped; they will be retried by the
    /// next sweep.
    ///
    /// # Errors
    /// Returns an error if the chat's retention setting or message list
    /// cannot be loaded.
    pub async fn sweep_chat<S: ChatStore + ?Sized>(
        &self,
        store: &S,
        chat_id: &str,
        now_ms: i64,
    ) -> Result<usize> {
        let retention = store.retention_of(chat_id).await?;
        if retention == RetentionPeriod::Forever {
            return Ok(0);
        }

        let messages = store.messages(chat_id).await?;
        let expired = expired_message_ids(&messages, retention, now_ms);
        debug!(
            chat_id,
            retention = retention.label(),
            expired = expired.len(),
            total = messages.len(),
            "sweeping chat"
        );

        let mut deleted = 0;
        for message_id in &expired {
            match store.delete_message(chat_id, message_id).await {
                Ok(()) => deleted += 1,
                Err(e) => {
                    warn!(chat_id, message_id = %message_id, error = %e, "failed to delete expired message");
                }
            }
        }
        Ok(deleted)
    }

    /// Sweep every chat in the store, one task per chat.
    ///
    /// `now` is captured once at the start of the pass. Chats that fail
    /// to load are logged and skipped; the rest of the pass is
    /// unaffected.
    ///
    /// # Errors
    /// Returns an error only if the chat listing itself cannot be loaded.
    pub async fn sweep_all<S: ChatStore + ?Sized + 'static>(
        &self,
        store: Arc<S>,
    ) -> Result<CleanupReport> {
        let now_ms = Utc::now().timestamp_millis();
        let chat_ids = store.chat_ids().await?;

        let mut join_set = tokio::task::JoinSet::new();
        for chat_id in chat_ids {
            let store = Arc::clone(&store);
            let sweeper = self.clone();
            join_set.spawn(async move {
                let deleted = sweeper.sweep_chat(store.as_ref(), &chat_id, now_ms).await;
                (chat_id, deleted)
            });
        }

        let mut report = CleanupReport::default();
        while let Some(joined) = join_set.join_next().await {
            match joined {
                Ok((_, Ok(deleted))) => {
                    report.processed_chats += 1;
                    report.deleted_messages += deleted;
                }
                Ok((chat_id, Err(e))) => {
                    report.processed_chats += 1;
                    warn!(chat_id = %chat_id, error = %e, "failed to sweep chat");
                }
                Err(e) => {
                    warn!(error = %e, "sweep task panicked");
                }
            }
        }
        Ok(report)
    }
}
