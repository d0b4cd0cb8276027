use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Article, Comment, Rating, Reaction, ReactionKind};
use crate::error::RepoError;

/// Generic repository trait for entities that are created once and read back.
#[async_trait]
pub trait BaseRepository<T, ID>: Send + Sync {
    /// Find an entity by its unique ID.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// Insert a new entity. Unique-key violations surface as `RepoError::Constraint`.
    async fn insert(&self, entity: T) -> Result<T, RepoError>;
}

/// Article repository.
#[async_trait]
pub trait ArticleRepository: BaseRepository<Article, Uuid> {
    async fn find_by_slug(&self, slug: &str) -> Result<Option<Article>, RepoError>;
}

/// Rating repository. Storage must enforce one rating per (article, user).
#[async_trait]
pub trait RatingRepository: BaseRepository<Rating, Uuid> {
    async fn find_by_article_and_user(
        &self,
        article_id: Uuid,
        user_id: Uuid,
    ) -> Result<Option<Rating>, RepoError>;

    /// Every score recorded against an article.
    async fn scores_for_article(&self, article_id: Uuid) -> Result<Vec<i32>, RepoError>;
}

/// Comment repository.
pub trait CommentRepository: BaseRepository<Comment, Uuid> {}

/// Reaction repository. Storage must enforce one record per (article, user, kind).
#[async_trait]
pub trait ReactionRepository: Send + Sync {
    async fn find(
        &self,
        article_id: Uuid,
        user_id: Uuid,
        kind: ReactionKind,
    ) -> Result<Option<Reaction>, RepoError>;

    async fn insert(&self, reaction: Reaction) -> Result<Reaction, RepoError>;

    /// Overwrite an existing record; `RepoError::NotFound` if it is gone.
    async fn update(&self, reaction: Reaction) -> Result<Reaction, RepoError>;

    /// Remove a record; `RepoError::NotFound` if nothing matched.
    async fn delete(
        &self,
        article_id: Uuid,
        user_id: Uuid,
        kind: ReactionKind,
    ) -> Result<(), RepoError>;
}
