//! Domain entities - the core business objects.

mod article;
mod comment;
mod rating;
mod reaction;
mod slug;

pub use article::Article;
pub use comment::Comment;
pub use rating::{MAX_RATING, MIN_RATING, Rating, Score, average_rating};
pub use reaction::{Reaction, ReactionKind};
pub use slug::{SLUG_SUFFIX_LEN, SlugError, generate_slug};
