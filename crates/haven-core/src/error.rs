//! Domain-level error types.

use std::collections::BTreeMap;
use std::fmt;

use thiserror::Error;

use crate::domain::ReactionKind;

/// Field name to list of problems, reported back to the caller as-is.
///
/// Non-field problems are recorded under [`FieldErrors::GENERAL`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    /// Key used for problems that do not belong to a single field.
    pub const GENERAL: &'static str = "error";

    pub fn new() -> Self {
        Self::default()
    }

    /// A single problem on a single field.
    pub fn single(field: impl Into<String>, message: impl Into<String>) -> Self {
        let mut errors = Self::new();
        errors.add(field, message);
        errors
    }

    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.entry(field.into()).or_default().push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }

    /// `Ok(())` when nothing was recorded, otherwise a validation error.
    pub fn into_result(self) -> Result<(), DomainError> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(DomainError::Validation(self))
        }
    }

    pub fn into_inner(self) -> BTreeMap<String, Vec<String>> {
        self.0
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, messages) in &self.0 {
            if !first {
                f.write_str("; ")?;
            }
            first = false;
            write!(f, "{}: {}", field, messages.join(", "))?;
        }
        Ok(())
    }
}

/// Business rule that a request ran into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConflictReason {
    SelfRating,
    DuplicateRating,
    DuplicateReaction(ReactionKind),
    DuplicateSlug,
}

impl fmt::Display for ConflictReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConflictReason::SelfRating => f.write_str("You cannot rate your own article"),
            ConflictReason::DuplicateRating => f.write_str("You cannot rate an article twice."),
            ConflictReason::DuplicateReaction(ReactionKind::Like) => {
                f.write_str("You have already liked this article.")
            }
            ConflictReason::DuplicateReaction(ReactionKind::Favourite) => {
                f.write_str("You have already favourited this article.")
            }
            ConflictReason::DuplicateSlug => {
                f.write_str("An article with this slug already exists.")
            }
        }
    }
}

/// Domain errors - business logic failures.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Entity not found: {entity_type} with id {id}")]
    NotFound { entity_type: &'static str, id: String },

    #[error("Validation failed: {0}")]
    Validation(FieldErrors),

    #[error("Conflict: {0}")]
    Conflict(ConflictReason),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl DomainError {
    pub fn not_found(entity_type: &'static str, id: impl fmt::Display) -> Self {
        DomainError::NotFound {
            entity_type,
            id: id.to_string(),
        }
    }

    pub fn invalid(field: impl Into<String>, message: impl Into<String>) -> Self {
        DomainError::Validation(FieldErrors::single(field, message))
    }
}

/// Repository-level errors.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Database connection failed: {0}")]
    Connection(String),

    #[error("Query execution failed: {0}")]
    Query(String),

    #[error("Entity not found")]
    NotFound,

    #[error("Constraint violation: {0}")]
    Constraint(String),
}

impl From<RepoError> for DomainError {
    fn from(err: RepoError) -> Self {
        DomainError::Internal(err.to_string())
    }
}
