//! Error handling middleware - RFC 7807 compliant responses.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use blog_shared::ErrorResponse;
use std::fmt;

use blog_core::DomainError;

/// Application-level error type that converts to RFC 7807 responses.
#[derive(Debug)]
pub enum AppError {
    NotFound(String),
    BadRequest(String),
    /// Persistence failure. Carries only the generic per-operation message;
    /// the cause is logged when the domain error is converted.
    Storage(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::NotFound(msg) => write!(f, "Not found: {}", msg),
            AppError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            AppError::Storage(msg) => write!(f, "Storage fault: {}", msg),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            // Storage faults surface as 400 with the generic message, the
            // same way the invalid-input path does.
            AppError::BadRequest(_) | AppError::Storage(_) => StatusCode::BAD_REQUEST,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let error = match self {
            AppError::NotFound(detail) => ErrorResponse::not_found(detail.as_str()),
            AppError::BadRequest(detail) => ErrorResponse::bad_request(detail.as_str()),
            AppError::Storage(detail) => ErrorResponse::bad_request(detail.as_str()),
        };

        HttpResponse::build(self.status_code()).json(error)
    }
}

// Conversion from domain errors
impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::NotFound { id } => {
                AppError::NotFound(format!("Blog post with ID {} not found", id))
            }
            DomainError::Validation(msg) => AppError::BadRequest(msg),
            DomainError::Storage { message, source } => {
                tracing::error!("Storage fault: {}", source);
                AppError::Storage(message)
            }
        }
    }
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;
