//! Engines - business rules over the repository ports.
//!
//! Each engine takes a typed command, checks it against stored state and
//! returns the persisted result. Engines hold their repositories behind
//! `Arc<dyn ...>` so the same code runs over PostgreSQL or memory.

mod articles;
mod comments;
mod ratings;
mod reactions;

pub use articles::ArticleService;
pub use comments::CommentService;
pub use ratings::{RatedArticle, RatingService};
pub use reactions::ReactionService;
