use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Comment entity - either top-level or a reply to a top-level comment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub id: Uuid,
    pub article_id: Uuid,
    pub author_id: Uuid,
    pub body: String,
    pub parent_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

impl Comment {
    /// A comment attached directly to the article.
    pub fn top_level(article_id: Uuid, author_id: Uuid, body: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            article_id,
            author_id,
            body,
            parent_id: None,
            created_at: Utc::now(),
        }
    }

    /// A reply to `parent`, on the same article.
    pub fn reply_to(parent: &Comment, author_id: Uuid, body: String) -> Self {
        Self {
            parent_id: Some(parent.id),
            ..Self::top_level(parent.article_id, author_id, body)
        }
    }

    pub fn is_reply(&self) -> bool {
        self.parent_id.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reply_inherits_article() {
        let article_id = Uuid::new_v4();
        let parent = Comment::top_level(article_id, Uuid::new_v4(), "first".into());
        let reply = Comment::reply_to(&parent, Uuid::new_v4(), "second".into());

        assert!(!parent.is_reply());
        assert!(reply.is_reply());
        assert_eq!(reply.parent_id, Some(parent.id));
        assert_eq!(reply.article_id, article_id);
        assert_ne!(reply.id, parent.id);
    }
}
