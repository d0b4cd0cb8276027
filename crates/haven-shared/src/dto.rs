//! Data Transfer Objects - request/response types for the API.
//!
//! Request bodies nest their payload under a resource key, e.g.
//! `{"article": {...}}`. A missing key behaves like an empty payload so that
//! field validation reports what is absent.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Body of the form `{"article": {...}}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ArticleBody<T> {
    #[serde(default)]
    pub article: T,
}

/// Body of the form `{"comment": {...}}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CommentBody<T> {
    #[serde(default)]
    pub comment: T,
}

/// Request to create an article.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewArticleRequest {
    pub title: Option<String>,
    pub body: Option<String>,
    pub description: Option<String>,
}

/// Request to rate an article.
///
/// `rating` is kept as raw JSON so that strings and fractions are reported
/// with the same range message as out-of-range integers.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RatingRequest {
    pub rating: Option<serde_json::Value>,
    pub review: Option<String>,
}

impl RatingRequest {
    /// The rating when it is a JSON integer.
    pub fn rating_value(&self) -> Option<i64> {
        self.rating.as_ref().and_then(serde_json::Value::as_i64)
    }
}

/// Request to comment on an article, or reply when `parent_id` is set.
///
/// `parent_id` is kept as raw JSON: a value that is not a comment id names
/// no comment, which is a lookup failure rather than a malformed body.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewCommentRequest {
    pub body: Option<String>,
    pub parent_id: Option<serde_json::Value>,
}

impl NewCommentRequest {
    /// `Ok(None)` when absent or null, `Err(raw)` when it cannot be a comment id.
    pub fn parent_id(&self) -> Result<Option<Uuid>, String> {
        match &self.parent_id {
            None | Some(serde_json::Value::Null) => Ok(None),
            Some(serde_json::Value::String(raw)) => {
                Uuid::parse_str(raw).map(Some).map_err(|_| raw.clone())
            }
            Some(other) => Err(other.to_string()),
        }
    }
}

/// Request to create or update a like/favourite.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReactionRequest {
    #[serde(alias = "like", alias = "favourite")]
    pub value: Option<bool>,
}

/// An article as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArticleResponse {
    pub id: Uuid,
    pub title: String,
    pub body: String,
    pub description: String,
    pub slug: String,
    pub author_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// An article together with its current average rating.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArticleDetailResponse {
    #[serde(flatten)]
    pub article: ArticleResponse,
    pub average_rating: Option<f64>,
}

/// A stored rating plus the article's updated average.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RatingResponse {
    pub id: Uuid,
    pub article_id: Uuid,
    pub user_id: Uuid,
    pub rating: i32,
    pub review: String,
    pub created_at: DateTime<Utc>,
    pub average_rating: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentResponse {
    pub id: Uuid,
    pub article_id: Uuid,
    pub author_id: Uuid,
    pub body: String,
    pub parent_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReactionResponse {
    pub id: Uuid,
    pub article_id: Uuid,
    pub user_id: Uuid,
    pub kind: String,
    pub value: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Confirmation that a reaction was removed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReactionDeletedResponse {
    pub article_id: Uuid,
    pub kind: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_payload_key_is_empty() {
        let body: ArticleBody<NewArticleRequest> = serde_json::from_str("{}").unwrap();
        assert!(body.article.title.is_none());
    }

    #[test]
    fn test_rating_value_only_accepts_integers() {
        let parse = |json: &str| -> Option<i64> {
            serde_json::from_str::<RatingRequest>(json)
                .unwrap()
                .rating_value()
        };

        assert_eq!(parse(r#"{"rating": 4}"#), Some(4));
        assert_eq!(parse(r#"{"rating": 0}"#), Some(0));
        assert_eq!(parse(r#"{"rating": 2.5}"#), None);
        assert_eq!(parse(r#"{"rating": "3"}"#), None);
        assert_eq!(parse(r#"{}"#), None);
    }

    #[test]
    fn test_reaction_value_aliases() {
        let like: ReactionRequest = serde_json::from_str(r#"{"like": false}"#).unwrap();
        let fav: ReactionRequest = serde_json::from_str(r#"{"favourite": true}"#).unwrap();
        let empty: ReactionRequest = serde_json::from_str("{}").unwrap();

        assert_eq!(like.value, Some(false));
        assert_eq!(fav.value, Some(true));
        assert_eq!(empty.value, None);
    }

    #[test]
    fn test_parent_id_keeps_unusable_values() {
        let parent = |json: &str| {
            serde_json::from_str::<NewCommentRequest>(json)
                .unwrap()
                .parent_id()
        };
        let id = Uuid::new_v4();

        assert_eq!(parent(r#"{"body": "hi"}"#), Ok(None));
        assert_eq!(parent(r#"{"parent_id": null}"#), Ok(None));
        assert_eq!(parent(&format!(r#"{{"parent_id": "{}"}}"#, id)), Ok(Some(id)));
        assert_eq!(parent(r#"{"parent_id": 9999}"#), Err("9999".to_string()));
        assert_eq!(parent(r#"{"parent_id": "abc"}"#), Err("abc".to_string()));
    }
}
