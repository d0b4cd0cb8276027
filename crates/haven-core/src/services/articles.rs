use std::sync::Arc;

use uuid::Uuid;

use crate::commands::CreateArticle;
use crate::domain::{Article, average_rating};
use crate::error::{ConflictReason, DomainError, RepoError};
use crate::ports::{ArticleRepository, BaseRepository, RatingRepository};

/// Article store: creation and lookup.
#[derive(Clone)]
pub struct ArticleService {
    articles: Arc<dyn ArticleRepository>,
    ratings: Arc<dyn RatingRepository>,
}

impl ArticleService {
    pub fn new(articles: Arc<dyn ArticleRepository>, ratings: Arc<dyn RatingRepository>) -> Self {
        Self { articles, ratings }
    }

    pub async fn create(&self, cmd: CreateArticle) -> Result<Article, DomainError> {
        let article = Article::new(
            cmd.author_id,
            cmd.title,
            cmd.body,
            cmd.description,
            cmd.slug,
        );

        let article = self.articles.insert(article).await.map_err(|e| match e {
            RepoError::Constraint(_) => DomainError::Conflict(ConflictReason::DuplicateSlug),
            other => other.into(),
        })?;

        tracing::info!(article_id = %article.id, slug = %article.slug, "Article created");
        Ok(article)
    }

    pub async fn get(&self, id: Uuid) -> Result<Article, DomainError> {
        self.articles
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("article", id))
    }

    pub async fn get_by_slug(&self, slug: &str) -> Result<Option<Article>, DomainError> {
        Ok(self.articles.find_by_slug(slug).await?)
    }

    /// Mean of all ratings on the article, `None` while unrated.
    pub async fn average_rating(&self, article_id: Uuid) -> Result<Option<f64>, DomainError> {
        let scores = self.ratings.scores_for_article(article_id).await?;
        Ok(average_rating(&scores))
    }
}
