//! # Haven Core
//!
//! The domain layer of the Haven backend: articles, ratings, comments and
//! reactions. This crate contains pure business logic with zero
//! infrastructure dependencies.

pub mod commands;
pub mod domain;
pub mod error;
pub mod ports;
pub mod services;

pub use error::{DomainError, FieldErrors};
