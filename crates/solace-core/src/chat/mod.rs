//! Conversations, messages, and the message retention policy.

mod retention;
mod sweeper;
mod types;

pub use retention::{expired_message_ids, RetentionPeriod};
pub use sweeper::{ChatStore, CleanupReport, RetentionSweeper};
pub use types::{Chat, LastMessage, Message, MessageAuthor};
