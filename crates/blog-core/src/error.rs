//! Domain-level error types.

use thiserror::Error;

/// Domain errors - business rule failures surfaced to the caller.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Blog post with ID {id} not found")]
    NotFound { id: i32 },

    #[error("{0}")]
    Validation(String),

    /// Underlying persistence failure. The caller only ever sees the generic
    /// message; the source is logged at the HTTP boundary.
    #[error("{message}")]
    Storage {
        message: String,
        #[source]
        source: RepoError,
    },
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
