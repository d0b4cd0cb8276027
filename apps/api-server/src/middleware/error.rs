//! Error handling - maps failures to `{"errors": {...}}` responses.

use std::collections::BTreeMap;
use std::fmt;

use actix_web::{HttpRequest, HttpResponse, ResponseError, error, http::StatusCode, web};
use haven_core::error::DomainError;
use haven_shared::ErrorResponse;

/// Application-level error type.
#[derive(Debug)]
pub enum AppError {
    NotFound(String),
    BadRequest(String),
    /// A broken business rule. Reported as 400 alongside validation errors.
    Conflict(String),
    MethodNotAllowed(String),
    Internal(String),
    Validation(BTreeMap<String, Vec<String>>),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::NotFound(msg) => write!(f, "Not found: {}", msg),
            AppError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            AppError::Conflict(msg) => write!(f, "Conflict: {}", msg),
            AppError::MethodNotAllowed(msg) => write!(f, "Method not allowed: {}", msg),
            AppError::Internal(msg) => write!(f, "Internal error: {}", msg),
            AppError::Validation(errors) => write!(f, "Validation errors: {:?}", errors),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Conflict(_) => StatusCode::BAD_REQUEST,
            AppError::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let error = match self {
            AppError::NotFound(detail)
            | AppError::BadRequest(detail)
            | AppError::Conflict(detail)
            | AppError::MethodNotAllowed(detail) => ErrorResponse::general(detail.clone()),
            AppError::Internal(detail) => {
                tracing::error!("Internal error: {}", detail);
                ErrorResponse::internal_error()
            }
            AppError::Validation(errors) => ErrorResponse::new(errors.clone()),
        };

        HttpResponse::build(self.status_code()).json(error)
    }
}

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::NotFound { entity_type, id } => {
                AppError::NotFound(format!("{} with id {} not found", entity_type, id))
            }
            DomainError::Validation(errors) => AppError::Validation(errors.into_inner()),
            DomainError::Conflict(reason) => AppError::Conflict(reason.to_string()),
            DomainError::Internal(msg) => AppError::Internal(msg),
        }
    }
}

/// Malformed JSON bodies get the same error envelope as everything else.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .error_handler(|err: error::JsonPayloadError, _req: &HttpRequest| {
            AppError::BadRequest(err.to_string()).into()
        })
}

/// Unparseable path ids are reported as missing resources.
pub fn path_config() -> web::PathConfig {
    web::PathConfig::default().error_handler(|err: error::PathError, _req: &HttpRequest| {
        AppError::NotFound(err.to_string()).into()
    })
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;
