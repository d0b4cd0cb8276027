//! Application state - shared across all handlers.

use std::sync::Arc;

use haven_core::ports::{
    ArticleRepository, CommentRepository, RatingRepository, ReactionRepository,
};
use haven_core::services::{ArticleService, CommentService, RatingService, ReactionService};
use haven_infra::DatabaseConfig;
use haven_infra::database::{
    InMemoryArticleRepository, InMemoryCommentRepository, InMemoryRatingRepository,
    InMemoryReactionRepository,
};

#[cfg(feature = "postgres")]
use haven_infra::database::{
    DatabaseConnections, PostgresArticleRepository, PostgresCommentRepository,
    PostgresRatingRepository, PostgresReactionRepository,
};

/// Where the repositories keep their data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Storage {
    Postgres,
    Memory,
}

impl Storage {
    pub fn as_str(self) -> &'static str {
        match self {
            Storage::Postgres => "postgres",
            Storage::Memory => "memory",
        }
    }
}

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub articles: ArticleService,
    pub ratings: RatingService,
    pub comments: CommentService,
    pub reactions: ReactionService,
    pub storage: Storage,
}

struct Repositories {
    articles: Arc<dyn ArticleRepository>,
    ratings: Arc<dyn RatingRepository>,
    comments: Arc<dyn CommentRepository>,
    reactions: Arc<dyn ReactionRepository>,
}

impl Repositories {
    fn in_memory() -> Self {
        Self {
            articles: Arc::new(InMemoryArticleRepository::new()),
            ratings: Arc::new(InMemoryRatingRepository::new()),
            comments: Arc::new(InMemoryCommentRepository::new()),
            reactions: Arc::new(InMemoryReactionRepository::new()),
        }
    }

    #[cfg(feature = "postgres")]
    fn postgres(connections: &DatabaseConnections) -> Self {
        let db = &connections.main;
        Self {
            articles: Arc::new(PostgresArticleRepository::new(db.clone())),
            ratings: Arc::new(PostgresRatingRepository::new(db.clone())),
            comments: Arc::new(PostgresCommentRepository::new(db.clone())),
            reactions: Arc::new(PostgresReactionRepository::new(db.clone())),
        }
    }
}

impl AppState {
    /// Build the application state with appropriate implementations.
    pub async fn new(db_config: Option<&DatabaseConfig>) -> Self {
        #[cfg(feature = "postgres")]
        let (repos, storage) = match db_config {
            Some(config) => match DatabaseConnections::init(config).await {
                Ok(connections) => (Repositories::postgres(&connections), Storage::Postgres),
                Err(e) => {
                    tracing::error!(
                        "Failed to connect to database: {}. Using in-memory fallback.",
                        e
                    );
                    (Repositories::in_memory(), Storage::Memory)
                }
            },
            None => {
                tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
                (Repositories::in_memory(), Storage::Memory)
            }
        };

        #[cfg(not(feature = "postgres"))]
        let (repos, storage) = {
            let _ = db_config;
            tracing::info!("Running without postgres feature - using in-memory repositories");
            (Repositories::in_memory(), Storage::Memory)
        };

        tracing::info!(storage = storage.as_str(), "Application state initialized");
        Self::from_repositories(repos, storage)
    }

    /// State backed entirely by memory.
    #[cfg(test)]
    pub fn in_memory() -> Self {
        Self::from_repositories(Repositories::in_memory(), Storage::Memory)
    }

    fn from_repositories(repos: Repositories, storage: Storage) -> Self {
        Self {
            articles: ArticleService::new(repos.articles.clone(), repos.ratings.clone()),
            ratings: RatingService::new(repos.articles.clone(), repos.ratings),
            comments: CommentService::new(repos.articles.clone(), repos.comments),
            reactions: ReactionService::new(repos.articles, repos.reactions),
            storage,
        }
    }
}
