//! In-memory repositories - used when no database is configured and in tests.
//!
//! Uniqueness rules are checked while holding the write lock, so concurrent
//! inserts behave like the unique indexes of the PostgreSQL schema.
//! Note: Data is lost on process restart.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use haven_core::domain::{Article, Comment, Rating, Reaction, ReactionKind};
use haven_core::error::RepoError;
use haven_core::ports::{
    ArticleRepository, BaseRepository, CommentRepository, RatingRepository, ReactionRepository,
};

fn duplicate(what: &str) -> RepoError {
    RepoError::Constraint(format!("duplicate key value violates unique constraint on {}", what))
}

/// In-memory article store. Slugs are unique.
#[derive(Default)]
pub struct InMemoryArticleRepository {
    store: RwLock<HashMap<Uuid, Article>>,
}

impl InMemoryArticleRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BaseRepository<Article, Uuid> for InMemoryArticleRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Article>, RepoError> {
        Ok(self.store.read().await.get(&id).cloned())
    }

    async fn insert(&self, article: Article) -> Result<Article, RepoError> {
        let mut store = self.store.write().await;

        if store.contains_key(&article.id) {
            return Err(duplicate("articles.id"));
        }
        if store.values().any(|a| a.slug == article.slug) {
            return Err(duplicate("articles.slug"));
        }

        store.insert(article.id, article.clone());
        Ok(article)
    }
}

#[async_trait]
impl ArticleRepository for InMemoryArticleRepository {
    async fn find_by_slug(&self, slug: &str) -> Result<Option<Article>, RepoError> {
        let store = self.store.read().await;
        Ok(store.values().find(|a| a.slug == slug).cloned())
    }
}

/// In-memory rating store. One rating per (article, user).
#[derive(Default)]
pub struct InMemoryRatingRepository {
    store: RwLock<HashMap<Uuid, Rating>>,
}

impl InMemoryRatingRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BaseRepository<Rating, Uuid> for InMemoryRatingRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Rating>, RepoError> {
        Ok(self.store.read().await.get(&id).cloned())
    }

    async fn insert(&self, rating: Rating) -> Result<Rating, RepoError> {
        let mut store = self.store.write().await;

        if store.contains_key(&rating.id) {
            return Err(duplicate("ratings.id"));
        }
        if store
            .values()
            .any(|r| r.article_id == rating.article_id && r.user_id == rating.user_id)
        {
            return Err(duplicate("ratings (article_id, user_id)"));
        }

        store.insert(rating.id, rating.clone());
        Ok(rating)
    }
}

#[async_trait]
impl RatingRepository for InMemoryRatingRepository {
    async fn find_by_article_and_user(
        &self,
        article_id: Uuid,
        user_id: Uuid,
    ) -> Result<Option<Rating>, RepoError> {
        let store = self.store.read().await;
        Ok(store
            .values()
            .find(|r| r.article_id == article_id && r.user_id == user_id)
            .cloned())
    }

    async fn scores_for_article(&self, article_id: Uuid) -> Result<Vec<i32>, RepoError> {
        let store = self.store.read().await;
        Ok(store
            .values()
            .filter(|r| r.article_id == article_id)
            .map(|r| r.score.value())
            .collect())
    }
}

/// In-memory comment store.
#[derive(Default)]
pub struct InMemoryCommentRepository {
    store: RwLock<HashMap<Uuid, Comment>>,
}

impl InMemoryCommentRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BaseRepository<Comment, Uuid> for InMemoryCommentRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Comment>, RepoError> {
        Ok(self.store.read().await.get(&id).cloned())
    }

    async fn insert(&self, comment: Comment) -> Result<Comment, RepoError> {
        let mut store = self.store.write().await;

        if store.contains_key(&comment.id) {
            return Err(duplicate("comments.id"));
        }

        store.insert(comment.id, comment.clone());
        Ok(comment)
    }
}

impl CommentRepository for InMemoryCommentRepository {}

type ReactionKey = (Uuid, Uuid, ReactionKind);

/// In-memory reaction store keyed by (article, user, kind).
#[derive(Default)]
pub struct InMemoryReactionRepository {
    store: RwLock<HashMap<ReactionKey, Reaction>>,
}

impl InMemoryReactionRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ReactionRepository for InMemoryReactionRepository {
    async fn find(
        &self,
        article_id: Uuid,
        user_id: Uuid,
        kind: ReactionKind,
    ) -> Result<Option<Reaction>, RepoError> {
        let store = self.store.read().await;
        Ok(store.get(&(article_id, user_id, kind)).cloned())
    }

    async fn insert(&self, reaction: Reaction) -> Result<Reaction, RepoError> {
        let mut store = self.store.write().await;
        let key = (reaction.article_id, reaction.user_id, reaction.kind);

        if store.contains_key(&key) {
            return Err(duplicate("reactions (article_id, user_id, kind)"));
        }

        store.insert(key, reaction.clone());
        Ok(reaction)
    }

    async fn update(&self, reaction: Reaction) -> Result<Reaction, RepoError> {
        let mut store = self.store.write().await;
        let key = (reaction.article_id, reaction.user_id, reaction.kind);

        match store.get_mut(&key) {
            Some(existing) if existing.id == reaction.id => {
                *existing = reaction.clone();
                Ok(reaction)
            }
            _ => Err(RepoError::NotFound),
        }
    }

    async fn delete(
        &self,
        article_id: Uuid,
        user_id: Uuid,
        kind: ReactionKind,
    ) -> Result<(), RepoError> {
        let mut store = self.store.write().await;
        store
            .remove(&(article_id, user_id, kind))
            .map(|_| ())
            .ok_or(RepoError::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use haven_core::domain::Score;

    fn score(value: i64) -> Score {
        Score::try_from(value).unwrap()
    }

    #[tokio::test]
    async fn test_article_slug_is_unique() {
        let repo = InMemoryArticleRepository::new();
        let author = Uuid::new_v4();
        let first = Article::new(author, "t".into(), "b".into(), "d".into(), "same-slug".into());
        let second = Article::new(author, "t".into(), "b".into(), "d".into(), "same-slug".into());

        repo.insert(first.clone()).await.unwrap();

        assert!(matches!(
            repo.insert(second).await,
            Err(RepoError::Constraint(_))
        ));
        assert_eq!(repo.find_by_slug("same-slug").await.unwrap(), Some(first));
    }

    #[tokio::test]
    async fn test_rating_pair_is_unique() {
        let repo = InMemoryRatingRepository::new();
        let (article, user) = (Uuid::new_v4(), Uuid::new_v4());

        repo.insert(Rating::new(article, user, score(2), String::new()))
            .await
            .unwrap();
        let again = repo
            .insert(Rating::new(article, user, score(4), String::new()))
            .await;

        assert!(matches!(again, Err(RepoError::Constraint(_))));
        assert_eq!(repo.scores_for_article(article).await.unwrap(), vec![2]);
    }

    #[tokio::test]
    async fn test_reaction_lifecycle() {
        let repo = InMemoryReactionRepository::new();
        let (article, user) = (Uuid::new_v4(), Uuid::new_v4());

        let mut like = repo
            .insert(Reaction::new(article, user, ReactionKind::Like, true))
            .await
            .unwrap();
        // A favourite by the same user is a separate record.
        repo.insert(Reaction::new(article, user, ReactionKind::Favourite, true))
            .await
            .unwrap();

        like.set_value(false);
        repo.update(like).await.unwrap();
        let stored = repo.find(article, user, ReactionKind::Like).await.unwrap();
        assert_eq!(stored.map(|r| r.value), Some(false));

        repo.delete(article, user, ReactionKind::Like).await.unwrap();
        assert!(matches!(
            repo.delete(article, user, ReactionKind::Like).await,
            Err(RepoError::NotFound)
        ));
        assert!(
            repo.find(article, user, ReactionKind::Favourite)
                .await
                .unwrap()
                .is_some()
        );
    }
}
