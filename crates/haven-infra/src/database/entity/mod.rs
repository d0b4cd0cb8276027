//! SeaORM entities.

pub mod article;
pub mod comment;
pub mod rating;
pub mod reaction;
