//! # Haven Infrastructure
//!
//! Concrete implementations of the ports defined in `haven-core`.
//!
//! ## Feature Flags
//!
//! - `full` (default) - All features enabled
//! - `minimal` - No external database, in-memory repositories only
//! - `postgres` - PostgreSQL persistence via SeaORM

pub mod auth;
pub mod database;

pub use auth::{JwtConfig, JwtTokenService};
pub use database::{
    DatabaseConfig, InMemoryArticleRepository, InMemoryCommentRepository,
    InMemoryRatingRepository, InMemoryReactionRepository,
};

#[cfg(feature = "postgres")]
pub use database::DatabaseConnections;
