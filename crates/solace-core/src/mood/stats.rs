//! Rolling mood statistics.
//!
//! Averages are computed over the mood scores (1-5). An empty history
//! averages to 0.0, which is outside the valid score range and therefore
//! distinguishable from any real average.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::MoodType;

/// Average mood score over a slice of moods (0.0 for an empty slice).
pub fn average_mood(moods: &[MoodType]) -> f64 {
    if moods.is_empty() {
        return 0.0;
    }
    let sum: u32 = moods.iter().map(|m| m.score() as u32).sum();
    sum as f64 / moods.len() as f64
}

/// Per-mood breakdown of a user's journal history.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MoodSummary {
    /// Number of entries per mood (wire name keyed, e.g. "happy")
    pub counts: BTreeMap<MoodType, u32>,
    /// Total number of entries summarized
    pub total: u32,
    /// Average mood score (0.0 when there are no entries)
    pub average: f64,
    /// Most frequent mood, ties broken by higher score
    pub dominant: Option<MoodType>,
}

impl MoodSummary {
    /// Summarize a slice of moods.
    pub fn from_moods(moods: &[MoodType]) -> Self {
        let mut counts: BTreeMap<MoodType, u32> = BTreeMap::new();
        for mood in moods {
            *counts.entry(*mood).or_insert(0) += 1;
        }

        let dominant = MoodType::ALL
            .iter()
            .filter_map(|m| counts.get(m).map(|c| (*m, *c)))
            .max_by_key(|(m, c)| (*c, m.score()))
            .map(|(m, _)| m);

        Self {
            counts,
            total: moods.len() as u32,
            average: average_mood(moods),
            dominant,
        }
    }
}
