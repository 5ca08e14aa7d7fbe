//! Emotion reactions on feed posts.
//!
//! A user holds at most one emotion per post. Tapping the emotion they
//! already hold clears it; tapping a different one moves them. Each
//! toggle yields a [`ReactionChange`] describing the removals and the
//! addition, so a storage collaborator can mirror the update without
//! re-deriving the decision.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// The fixed set of emotion reactions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmotionType {
    Love,
    Celebrate,
    Support,
    Insightful,
    Curious,
}

impl EmotionType {
    /// All emotions, in display order.
    pub const ALL: [EmotionType; 5] = [
        EmotionType::Love,
        EmotionType::Celebrate,
        EmotionType::Support,
        EmotionType::Insightful,
        EmotionType::Curious,
    ];

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            EmotionType::Love => "Love",
            EmotionType::Celebrate => "Celebrate",
            EmotionType::Support => "Support",
            EmotionType::Insightful => "Insightful",
            EmotionType::Curious => "Curious",
        }
    }

    /// Display icon token (UI concern, opaque to the core).
    pub fn icon(&self) -> &'static str {
        match self {
            EmotionType::Love => "heart",
            EmotionType::Celebrate => "party-popper",
            EmotionType::Support => "hands-pray",
            EmotionType::Insightful => "lightbulb-on",
            EmotionType::Curious => "help-circle",
        }
    }

    /// Display color as a hex string.
    pub fn color(&self) -> &'static str {
        match self {
            EmotionType::Love => "#FF6B9D",
            EmotionType::Celebrate => "#FFD700",
            EmotionType::Support => "#4CAF50",
            EmotionType::Insightful => "#FF9800",
            EmotionType::Curious => "#2196F3",
        }
    }
}

/// What a toggle changed, phrased as a storage update plan.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReactionChange {
    /// Emotions the user was removed from
    pub removed: Vec<EmotionType>,
    /// Emotion the user was added to, if any
    pub added: Option<EmotionType>,
}

/// Per-post reaction bookkeeping.
///
/// Invariant: a user id appears under at most one emotion.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReactionBoard {
    reactions: BTreeMap<EmotionType, BTreeSet<String>>,
}

impl ReactionBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// The emotion a user currently holds, if any.
    pub fn reaction_of(&self, user_id: &str) -> Option<EmotionType> {
        self.reactions
            .iter()
            .find(|(_, users)| users.contains(user_id))
            .map(|(emotion, _)| *emotion)
    }

    /// Number of users holding an emotion.
    pub fn count(&self, emotion: EmotionType) -> usize {
        self.reactions.get(&emotion).map_or(0, BTreeSet::len)
    }

    /// Total reactions across all emotions.
    pub fn total(&self) -> usize {
        self.reactions.values().map(BTreeSet::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// Toggle a user's reaction.
    ///
    /// Tapping the held emotion clears it. Tapping another emotion
    /// removes the user from every other emotion first, then adds the
    /// new one, preserving the one-emotion-per-user invariant.
    pub fn toggle(&mut self, user_id: &str, emotion: EmotionType) -> ReactionChange {
        let mut change = ReactionChange::default();

        if self.reaction_of(user_id) == Some(emotion) {
            self.remove_user(user_id, emotion);
            change.removed.push(emotion);
            return change;
        }

        for other in EmotionType::ALL {
            if other != emotion && self.holds(user_id, other) {
                self.remove_user(user_id, other);
                change.removed.push(other);
            }
        }

        self.reactions
            .entry(emotion)
            .or_default()
            .insert(user_id.to_string());
        change.added = Some(emotion);
        change
    }

    fn holds(&self, user_id: &str, emotion: EmotionType) -> bool {
        self.reactions
            .get(&emotion)
            .is_some_and(|users| users.contains(user_id))
    }

    fn remove_user(&mut self, user_id: &str, emotion: EmotionType) {
        if let Some(users) = self.reactions.get_mut(&emotion) {
            users.remove(user_id);
            if users.is_empty() {
                self.reactions.remove(&emotion);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_reaction() {
        let mut board = ReactionBoard::new();
        let change = board.toggle("user-1", EmotionType::Love);

        assert_eq!(change.added, Some(EmotionType::Love));
        assert!(change.removed.is_empty());
        assert_eq!(board.reaction_of("user-1"), Some(EmotionType::Love));
        assert_eq!(board.count(EmotionType::Love), 1);
    }

    #[test]
    fn test_toggle_same_emotion_clears() {
        let mut board = ReactionBoard::new();
        board.toggle("user-1", EmotionType::Support);
        let change = board.toggle("user-1", EmotionType::Support);

        assert_eq!(change.added, None);
        assert_eq!(change.removed, vec![EmotionType::Support]);
        assert_eq!(board.reaction_of("user-1"), None);
        assert!(board.is_empty());
    }

    #[test]
    fn test_switching_emotion_moves_user() {
        let mut board = ReactionBoard::new();
        board.toggle("user-1", EmotionType::Love);
        let change = board.toggle("user-1", EmotionType::Curious);

        assert_eq!(change.removed, vec![EmotionType::Love]);
        assert_eq!(change.added, Some(EmotionType::Curious));
        assert_eq!(board.reaction_of("user-1"), Some(EmotionType::Curious));
        assert_eq!(board.count(EmotionType::Love), 0);
        assert_eq!(board.total(), 1);
    }

    #[test]
    fn test_at_most_one_emotion_per_user() {
        let mut board = ReactionBoard::new();
        for emotion in EmotionType::ALL {
            board.toggle("user-1", emotion);
            assert_eq!(board.reaction_of("user-1"), Some(emotion));
            assert_eq!(board.total(), 1);
        }
    }

    #[test]
    fn test_users_are_independent() {
        let mut board = ReactionBoard::new();
        board.toggle("user-1", EmotionType::Love);
        board.toggle("user-2", EmotionType::Love);
        board.toggle("user-3", EmotionType::Celebrate);

        assert_eq!(board.count(EmotionType::Love), 2);
        assert_eq!(board.count(EmotionType::Celebrate), 1);
        assert_eq!(board.total(), 3);

        board.toggle("user-2", EmotionType::Love);
        assert_eq!(board.count(EmotionType::Love), 1);
        assert_eq!(board.reaction_of("user-1"), Some(EmotionType::Love));
    }

    #[test]
    fn test_serde_round_trip() {
        let mut board = ReactionBoard::new();
        board.toggle("user-1", EmotionType::Insightful);
        board.toggle("user-2", EmotionType::Love);

        let json = serde_json::to_string(&board).unwrap();
        assert!(json.contains("insightful"));
        let back: ReactionBoard = serde_json::from_str(&json).unwrap();
        assert_eq!(back, board);
    }
}
