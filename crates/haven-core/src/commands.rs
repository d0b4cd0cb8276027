//! Typed commands handed to the engines.
//!
//! Each command is assembled from a request payload, the resolved identity
//! and any path parameters before any business logic runs. Constructors that
//! can reject input do so here, so the engines only see well-formed values.

use uuid::Uuid;

use crate::domain::{MAX_RATING, MIN_RATING, ReactionKind, Score, generate_slug};
use crate::error::{DomainError, FieldErrors};

pub const REQUIRED_FIELD: &str = "This field is required.";
pub const BLANK_FIELD: &str = "This field may not be blank.";

/// Record a problem for `field` unless `value` holds non-whitespace text.
fn require_text(errors: &mut FieldErrors, field: &str, value: Option<String>) -> String {
    match value {
        None => {
            errors.add(field, REQUIRED_FIELD);
            String::new()
        }
        Some(v) if v.trim().is_empty() => {
            errors.add(field, BLANK_FIELD);
            String::new()
        }
        Some(v) => v,
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CreateArticle {
    pub author_id: Uuid,
    pub title: String,
    pub body: String,
    pub description: String,
    pub slug: String,
}

impl CreateArticle {
    /// Validate every field at once and derive the slug from the title.
    pub fn new(
        author_id: Uuid,
        title: Option<String>,
        body: Option<String>,
        description: Option<String>,
    ) -> Result<Self, DomainError> {
        let mut errors = FieldErrors::new();
        let title = require_text(&mut errors, "title", title);
        let body = require_text(&mut errors, "body", body);
        let description = require_text(&mut errors, "description", description);
        errors.into_result()?;

        let slug =
            generate_slug(&title).map_err(|e| DomainError::invalid("title", e.to_string()))?;

        Ok(Self {
            author_id,
            title,
            body,
            description,
            slug,
        })
    }
}

/// Message returned for any rating that is not an integer in range.
pub fn rating_range_message() -> String {
    format!(
        "Rating should be in range of {} to {}.",
        MIN_RATING, MAX_RATING
    )
}

#[derive(Debug, Clone, PartialEq)]
pub struct RateArticle {
    pub article_id: Uuid,
    pub user_id: Uuid,
    pub score: Score,
    pub review: String,
}

impl RateArticle {
    /// `rating` is `None` when the payload carried no integer at all.
    pub fn new(
        article_id: Uuid,
        user_id: Uuid,
        rating: Option<i64>,
        review: Option<String>,
    ) -> Result<Self, DomainError> {
        let score = rating
            .and_then(|r| Score::try_from(r).ok())
            .ok_or_else(|| DomainError::invalid("rating", rating_range_message()))?;

        Ok(Self {
            article_id,
            user_id,
            score,
            review: review.unwrap_or_default(),
        })
    }
}

/// What a comment payload named as its parent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParentRef {
    Comment(Uuid),
    /// A value that cannot be a comment id, kept verbatim for the error.
    Unknown(String),
}

impl From<Uuid> for ParentRef {
    fn from(id: Uuid) -> Self {
        ParentRef::Comment(id)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CreateComment {
    pub article_id: Uuid,
    pub author_id: Uuid,
    pub body: String,
    pub parent: Option<ParentRef>,
}

impl CreateComment {
    pub fn new(
        article_id: Uuid,
        author_id: Uuid,
        body: Option<String>,
        parent: Option<ParentRef>,
    ) -> Self {
        Self {
            article_id,
            author_id,
            body: body.unwrap_or_default(),
            parent,
        }
    }
}

/// Key of a single reaction record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReactionKey {
    pub article_id: Uuid,
    pub user_id: Uuid,
    pub kind: ReactionKind,
}

impl ReactionKey {
    pub fn new(kind: ReactionKind, article_id: Uuid, user_id: Uuid) -> Self {
        Self {
            article_id,
            user_id,
            kind,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> Option<String> {
        Some(s.to_string())
    }

    #[test]
    fn test_create_article_builds_slug() {
        let cmd = CreateArticle::new(
            Uuid::new_v4(),
            text("My First Article"),
            text("<p>body</p>"),
            text("about things"),
        )
        .unwrap();

        assert!(cmd.slug.starts_with("my-first-article-"));
    }

    #[test]
    fn test_create_article_reports_every_field() {
        let err = CreateArticle::new(Uuid::new_v4(), None, text("  "), text("ok")).unwrap_err();

        let DomainError::Validation(errors) = err else {
            panic!("expected validation error");
        };
        assert_eq!(errors.get("title"), Some(&[REQUIRED_FIELD.to_string()][..]));
        assert_eq!(errors.get("body"), Some(&[BLANK_FIELD.to_string()][..]));
        assert!(errors.get("description").is_none());
    }

    #[test]
    fn test_rate_article_range() {
        let (article, user) = (Uuid::new_v4(), Uuid::new_v4());

        for r in 1..=5 {
            assert!(RateArticle::new(article, user, Some(r), None).is_ok());
        }
        for r in [Some(0), Some(6), Some(-3), None] {
            let err = RateArticle::new(article, user, r, text("review")).unwrap_err();
            let DomainError::Validation(errors) = err else {
                panic!("expected validation error");
            };
            assert_eq!(
                errors.get("rating"),
                Some(&["Rating should be in range of 1 to 5.".to_string()][..])
            );
        }
    }

    #[test]
    fn test_rate_article_defaults_review() {
        let cmd = RateArticle::new(Uuid::new_v4(), Uuid::new_v4(), Some(3), None).unwrap();
        assert_eq!(cmd.review, "");
        assert_eq!(cmd.score.value(), 3);
    }
}
