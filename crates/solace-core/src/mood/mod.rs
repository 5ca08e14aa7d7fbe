//! Mood metadata, rolling statistics, and compatibility matching.

mod matching;
mod stats;
mod types;

pub use matching::{compatibility_score, match_reason};
pub use stats::{average_mood, MoodSummary};
pub use types::MoodType;
