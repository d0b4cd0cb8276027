//! Persistence: PostgreSQL via SeaORM, with an in-memory fallback.

mod connections;
pub mod memory;

#[cfg(feature = "postgres")]
mod postgres_base;
#[cfg(feature = "postgres")]
pub mod postgres_repo;

#[cfg(feature = "postgres")]
pub mod entity;

pub use connections::DatabaseConfig;
pub use memory::{
    InMemoryArticleRepository, InMemoryCommentRepository, InMemoryRatingRepository,
    InMemoryReactionRepository,
};

#[cfg(feature = "postgres")]
pub use connections::DatabaseConnections;

#[cfg(feature = "postgres")]
pub use postgres_repo::{
    PostgresArticleRepository, PostgresCommentRepository, PostgresRatingRepository,
    PostgresReactionRepository,
};
