use std::sync::Arc;

use crate::commands::ReactionKey;
use crate::domain::{Reaction, ReactionKind};
use crate::error::{ConflictReason, DomainError, RepoError};
use crate::ports::{ArticleRepository, BaseRepository, ReactionRepository};

/// Reaction engine for likes and favourites.
#[derive(Clone)]
pub struct ReactionService {
    articles: Arc<dyn ArticleRepository>,
    reactions: Arc<dyn ReactionRepository>,
}

fn missing(key: &ReactionKey) -> DomainError {
    let entity_type = match key.kind {
        ReactionKind::Like => "like on article",
        ReactionKind::Favourite => "favourite on article",
    };
    DomainError::not_found(entity_type, key.article_id)
}

impl ReactionService {
    pub fn new(
        articles: Arc<dyn ArticleRepository>,
        reactions: Arc<dyn ReactionRepository>,
    ) -> Self {
        Self {
            articles,
            reactions,
        }
    }

    pub async fn create(&self, key: ReactionKey, value: bool) -> Result<Reaction, DomainError> {
        self.articles
            .find_by_id(key.article_id)
            .await?
            .ok_or_else(|| DomainError::not_found("article", key.article_id))?;

        let duplicate = DomainError::Conflict(ConflictReason::DuplicateReaction(key.kind));

        if self
            .reactions
            .find(key.article_id, key.user_id, key.kind)
            .await?
            .is_some()
        {
            return Err(duplicate);
        }

        let reaction = Reaction::new(key.article_id, key.user_id, key.kind, value);
        let reaction = self.reactions.insert(reaction).await.map_err(|e| match e {
            RepoError::Constraint(_) => duplicate,
            other => other.into(),
        })?;

        tracing::info!(article_id = %key.article_id, kind = %key.kind, "Reaction created");
        Ok(reaction)
    }

    pub async fn update(&self, key: ReactionKey, value: bool) -> Result<Reaction, DomainError> {
        let mut reaction = self
            .reactions
            .find(key.article_id, key.user_id, key.kind)
            .await?
            .ok_or_else(|| missing(&key))?;

        reaction.set_value(value);
        self.reactions.update(reaction).await.map_err(|e| match e {
            RepoError::NotFound => missing(&key),
            other => other.into(),
        })
    }

    pub async fn delete(&self, key: ReactionKey) -> Result<(), DomainError> {
        self.reactions
            .delete(key.article_id, key.user_id, key.kind)
            .await
            .map_err(|e| match e {
                RepoError::NotFound => missing(&key),
                other => other.into(),
            })?;

        tracing::info!(article_id = %key.article_id, kind = %key.kind, "Reaction removed");
        Ok(())
    }
}
