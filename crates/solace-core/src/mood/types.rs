//! The fixed set of moods a journal entry can carry.

use serde::{Deserialize, Serialize};

/// Mood attached to a journal entry, ordered from highest score down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoodType {
    Happy,
    Excited,
    Neutral,
    Sad,
    Stressed,
}

impl MoodType {
    /// All moods, ordered from highest to lowest score.
    pub const ALL: [MoodType; 5] = [
        MoodType::Happy,
        MoodType::Excited,
        MoodType::Neutral,
        MoodType::Sad,
        MoodType::Stressed,
    ];

    /// Numeric score used for averages and matching (5 = best).
    pub fn score(&self) -> u8 {
        match self {
            MoodType::Happy => 5,
            MoodType::Excited => 4,
            MoodType::Neutral => 3,
            MoodType::Sad => 2,
            MoodType::Stressed => 1,
        }
    }

    /// Stable wire name, as stored in journal documents.
    pub fn as_str(&self) -> &'static str {
        match self {
            MoodType::Happy => "happy",
            MoodType::Excited => "excited",
            MoodType::Neutral => "neutral",
            MoodType::Sad => "sad",
            MoodType::Stressed => "stressed",
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            MoodType::Happy => "Happy",
            MoodType::Excited => "Excited",
            MoodType::Neutral => "Neutral",
            MoodType::Sad => "Sad",
            MoodType::Stressed => "Stressed",
        }
    }

    /// Display icon token (UI concern, opaque to the core).
    pub fn icon(&self) -> &'static str {
        match self {
            MoodType::Happy => "emoticon-happy-outline",
            MoodType::Excited => "emoticon-excited-outline",
            MoodType::Neutral => "emoticon-neutral-outline",
            MoodType::Sad => "emoticon-sad-outline",
            MoodType::Stressed => "emoticon-dead-outline",
        }
    }

    /// Display color as a hex string.
    pub fn color(&self) -> &'static str {
        match self {
            MoodType::Happy => "#FFD700",
            MoodType::Excited => "#FF8C00",
            MoodType::Neutral => "#A9A9A9",
            MoodType::Sad => "#4682B4",
            MoodType::Stressed => "#DC143C",
        }
    }
}

impl std::str::FromStr for MoodType {
    type Err = crate::error::ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "happy" => Ok(MoodType::Happy),
            "excited" => Ok(MoodType::Excited),
            "neutral" => Ok(MoodType::Neutral),
            "sad" => Ok(MoodType::Sad),
            "stressed" => Ok(MoodType::Stressed),
            other => Err(crate::error::ValidationError::InvalidValue {
                field: "mood".into(),
                message: format!("unknown mood '{other}'"),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mood_scores() {
        assert_eq!(MoodType::Happy.score(), 5);
        assert_eq!(MoodType::Excited.score(), 4);
        assert_eq!(MoodType::Neutral.score(), 3);
        assert_eq!(MoodType::Sad.score(), 2);
        assert_eq!(MoodType::Stressed.score(), 1);
    }

    #[test]
    fn test_serde_wire_names() {
        assert_eq!(serde_json::to_string(&MoodType::Happy).unwrap(), "\"happy\"");
        let mood: MoodType = serde_json::from_str("\"stressed\"").unwrap();
        assert_eq!(mood, MoodType::Stressed);
    }

    #[test]
    fn test_all_is_exhaustive() {
        assert_eq!(MoodType::ALL.len(), 5);
        for (a, b) in MoodType::ALL.iter().zip(MoodType::ALL.iter().skip(1)) {
            assert!(a.score() > b.score());
        }
    }
}
