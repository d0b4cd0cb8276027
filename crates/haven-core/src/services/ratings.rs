use std::sync::Arc;

use crate::commands::RateArticle;
use crate::domain::{Rating, average_rating};
use crate::error::{ConflictReason, DomainError, RepoError};
use crate::ports::{ArticleRepository, BaseRepository, RatingRepository};

/// A freshly stored rating and the article's updated average.
#[derive(Debug, Clone)]
pub struct RatedArticle {
    pub rating: Rating,
    pub average_rating: f64,
}

/// Rating engine.
///
/// Checks run in a fixed order and the first failure is returned: score
/// range (enforced when the command is built), article existence, self
/// rating, then duplicate rating.
#[derive(Clone)]
pub struct RatingService {
    articles: Arc<dyn ArticleRepository>,
    ratings: Arc<dyn RatingRepository>,
}

impl RatingService {
    pub fn new(articles: Arc<dyn ArticleRepository>, ratings: Arc<dyn RatingRepository>) -> Self {
        Self { articles, ratings }
    }

    pub async fn rate(&self, cmd: RateArticle) -> Result<RatedArticle, DomainError> {
        let article = self
            .articles
            .find_by_id(cmd.article_id)
            .await?
            .ok_or_else(|| DomainError::not_found("article", cmd.article_id))?;

        if article.is_authored_by(cmd.user_id) {
            tracing::warn!(article_id = %article.id, user_id = %cmd.user_id, "Rejected self rating");
            return Err(DomainError::Conflict(ConflictReason::SelfRating));
        }

        if self
            .ratings
            .find_by_article_and_user(article.id, cmd.user_id)
            .await?
            .is_some()
        {
            tracing::warn!(article_id = %article.id, user_id = %cmd.user_id, "Rejected duplicate rating");
            return Err(DomainError::Conflict(ConflictReason::DuplicateRating));
        }

        // The unique (article_id, user_id) index catches a concurrent insert
        // that slipped past the lookup above.
        let rating = Rating::new(article.id, cmd.user_id, cmd.score, cmd.review);
        let rating = self.ratings.insert(rating).await.map_err(|e| match e {
            RepoError::Constraint(_) => DomainError::Conflict(ConflictReason::DuplicateRating),
            other => other.into(),
        })?;

        let scores = self.ratings.scores_for_article(article.id).await?;
        let average_rating = average_rating(&scores).ok_or_else(|| {
            DomainError::Internal(format!("no ratings found for article {}", article.id))
        })?;

        tracing::info!(
            article_id = %article.id,
            rating = rating.score.value(),
            average_rating,
            "Article rated"
        );

        Ok(RatedArticle {
            rating,
            average_rating,
        })
    }
}
