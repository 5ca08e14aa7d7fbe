//! Feed post and comment document types.

use serde::{Deserialize, Serialize};

use crate::mood::MoodType;

use super::ReactionBoard;

/// Kind of media a post carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PostType {
    Text,
    Image,
    Video,
}

/// A post on the social wall.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: String,
    /// Author id, or an anonymous alias id
    pub user_id: String,
    /// Text content or media caption
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media_url: Option<String>,
    pub media_type: PostType,
    /// Mood context the author attached, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mood: Option<MoodType>,
    /// User ids who liked the post
    #[serde(default)]
    pub liked_by: Vec<String>,
    /// Emotion reactions, at most one per user
    #[serde(default)]
    pub emotion_reactions: ReactionBoard,
    pub comment_count: u32,
    /// Creation instant, epoch milliseconds
    pub created_at: i64,
    pub is_anonymous: bool,
}

/// A comment under a post.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub id: String,
    pub user_id: String,
    /// Alias shown instead of the user's name
    pub anonymous_alias: String,
    pub text: String,
    /// Creation instant, epoch milliseconds
    pub created_at: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_post_round_trips_with_defaults() {
        let json = r#"{
            "id": "p1",
            "user_id": "anonymous",
            "content": "hello",
            "media_type": "text",
            "comment_count": 0,
            "created_at": 1704067200000,
            "is_anonymous": true
        }"#;
        let post: Post = serde_json::from_str(json).unwrap();
        assert!(post.liked_by.is_empty());
        assert!(post.emotion_reactions.is_empty());
        assert_eq!(post.media_type, PostType::Text);
        assert_eq!(post.mood, None);
    }
}
