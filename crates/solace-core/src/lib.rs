//! # Solace Core Library
//!
//! This library provides the core business logic for Solace, a mood-journal
//! and social app. It implements a CLI-first philosophy where all operations
//! are available via a standalone CLI binary, with any GUI shell being a thin
//! layer over the same core library.
//!
//! ## Architecture
//!
//! - **Journal**: Entry types and the streak calculator -- a pure function
//!   over a user's entry timestamps that never reads the system clock
//! - **Chat**: Conversation types, the message retention policy, and the
//!   background cleanup sweeper
//! - **Mood**: Mood metadata, rolling averages, and compatibility matching
//! - **Feed**: Post types and the emotion-reaction board
//! - **Storage**: SQLite-based journal/chat storage and TOML-based
//!   configuration
//!
//! ## Key Components
//!
//! - [`compute_streak`]: Streak statistics from raw entry timestamps
//! - [`RetentionPeriod`]: Per-chat message retention tiers
//! - [`RetentionSweeper`]: Concurrent expired-message cleanup
//! - [`Database`]: Journal, chat, and message persistence
//! - [`Config`]: Application configuration management

pub mod chat;
pub mod error;
pub mod feed;
pub mod journal;
pub mod mood;
pub mod storage;

pub use chat::{
    Chat, ChatStore, CleanupReport, Message, MessageAuthor, RetentionPeriod, RetentionSweeper,
};
pub use error::{ConfigError, CoreError, DatabaseError, ValidationError};
pub use feed::{Comment, EmotionType, Post, PostType, ReactionBoard, ReactionChange};
pub use journal::{compute_streak, JournalEntry, ReminderCheck, StreakData, StreakWarning};
pub use mood::{average_mood, compatibility_score, match_reason, MoodSummary, MoodType};
pub use storage::{Config, Database};
