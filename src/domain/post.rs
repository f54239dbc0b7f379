use serde::{Deserialize, Serialize};

use crate::domain::Comment;

/// A post as returned by the posts endpoint, before comments are attached.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostRecord {
    pub user_id: i64,
    pub id: i64,
    pub title: String,
    pub body: String,
}

/// A post with its comments joined on, as held by the feed view.
///
/// Comments keep the order their fetch call returned them in; a post is
/// never mutated after assembly attaches them.
#[derive(Debug, Clone)]
pub struct Post {
    pub user_id: i64,
    pub id: i64,
    pub title: String,
    pub body: String,
    pub comments: Vec<Comment>,
}

impl Post {
    pub fn from_record(record: PostRecord) -> Self {
        Self {
            user_id: record.user_id,
            id: record.id,
            title: record.title,
            body: record.body,
            comments: Vec::new(),
        }
    }

    pub fn has_comments(&self) -> bool {
        !self.comments.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_record_starts_with_no_comments() {
        let record = PostRecord {
            user_id: 7,
            id: 1,
            title: "hello".into(),
            body: "world".into(),
        };
        let post = Post::from_record(record);
        assert_eq!(post.id, 1);
        assert_eq!(post.user_id, 7);
        assert!(!post.has_comments());
    }

    #[test]
    fn test_wire_shape_is_camel_case() {
        let json = r#"{"userId":3,"id":12,"title":"t","body":"b"}"#;
        let record: PostRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.user_id, 3);
        assert_eq!(record.id, 12);
    }
}
