//! PostgreSQL repository implementations.

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, ColumnTrait, DbConn, DbErr, EntityTrait, QueryFilter};
use uuid::Uuid;

use haven_core::domain::{Article, Rating, Reaction, ReactionKind};
use haven_core::error::RepoError;
use haven_core::ports::{
    ArticleRepository, CommentRepository, RatingRepository, ReactionRepository,
};

use super::entity::article::{self, Entity as ArticleEntity};
use super::entity::comment::Entity as CommentEntity;
use super::entity::rating::{self, Entity as RatingEntity};
use super::entity::reaction::{self, Entity as ReactionEntity};
use super::postgres_base::{PostgresBaseRepository, from_row, map_db_err};

/// PostgreSQL article repository.
pub type PostgresArticleRepository = PostgresBaseRepository<ArticleEntity>;

/// PostgreSQL rating repository.
pub type PostgresRatingRepository = PostgresBaseRepository<RatingEntity>;

/// PostgreSQL comment repository.
pub type PostgresCommentRepository = PostgresBaseRepository<CommentEntity>;

#[async_trait]
impl ArticleRepository for PostgresArticleRepository {
    async fn find_by_slug(&self, slug: &str) -> Result<Option<Article>, RepoError> {
        tracing::debug!(slug, "Finding article by slug");

        let result = ArticleEntity::find()
            .filter(article::Column::Slug.eq(slug))
            .one(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.map(Into::into))
    }
}

#[async_trait]
impl RatingRepository for PostgresRatingRepository {
    async fn find_by_article_and_user(
        &self,
        article_id: Uuid,
        user_id: Uuid,
    ) -> Result<Option<Rating>, RepoError> {
        let result = RatingEntity::find()
            .filter(rating::Column::ArticleId.eq(article_id))
            .filter(rating::Column::UserId.eq(user_id))
            .one(&self.db)
            .await
            .map_err(map_db_err)?;

        result.map(from_row).transpose()
    }

    async fn scores_for_article(&self, article_id: Uuid) -> Result<Vec<i32>, RepoError> {
        let rows = RatingEntity::find()
            .filter(rating::Column::ArticleId.eq(article_id))
            .all(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(rows.into_iter().map(|row| row.rating).collect())
    }
}

impl CommentRepository for PostgresCommentRepository {}

/// PostgreSQL reaction repository, keyed by (article, user, kind).
pub struct PostgresReactionRepository {
    db: DbConn,
}

impl PostgresReactionRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ReactionRepository for PostgresReactionRepository {
    async fn find(
        &self,
        article_id: Uuid,
        user_id: Uuid,
        kind: ReactionKind,
    ) -> Result<Option<Reaction>, RepoError> {
        let result = ReactionEntity::find()
            .filter(reaction::Column::ArticleId.eq(article_id))
            .filter(reaction::Column::UserId.eq(user_id))
            .filter(reaction::Column::Kind.eq(kind.as_str()))
            .one(&self.db)
            .await
            .map_err(map_db_err)?;

        result.map(from_row).transpose()
    }

    async fn insert(&self, reaction: Reaction) -> Result<Reaction, RepoError> {
        let active_model: reaction::ActiveModel = reaction.into();
        let model = active_model.insert(&self.db).await.map_err(map_db_err)?;

        from_row(model)
    }

    async fn update(&self, reaction: Reaction) -> Result<Reaction, RepoError> {
        let active_model: reaction::ActiveModel = reaction.into();
        let model = active_model.update(&self.db).await.map_err(|e| match e {
            DbErr::RecordNotUpdated => RepoError::NotFound,
            other => map_db_err(other),
        })?;

        from_row(model)
    }

    async fn delete(
        &self,
        article_id: Uuid,
        user_id: Uuid,
        kind: ReactionKind,
    ) -> Result<(), RepoError> {
        let result = ReactionEntity::delete_many()
            .filter(reaction::Column::ArticleId.eq(article_id))
            .filter(reaction::Column::UserId.eq(user_id))
            .filter(reaction::Column::Kind.eq(kind.as_str()))
            .exec(&self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(RepoError::NotFound);
        }

        Ok(())
    }
}
