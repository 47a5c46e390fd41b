//! Domain-level error types.

use thiserror::Error;

use crate::validation::ValidationErrors;

/// Domain errors - business logic failures surfaced to the API layer.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("post with id {id} not found")]
    NotFound { id: i32 },

    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),

    /// Malformed caller arguments (pagination bounds). The message is the
    /// violated rule verbatim; callers assert on these phrases.
    #[error("{0}")]
    InvalidArgument(String),

    /// Underlying store failure. Deliberately generic: store-specific error
    /// strings are not part of the contract.
    #[error("{0}")]
    Store(String),
}

/// Repository-level errors.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("database connection failed: {0}")]
    Connection(String),

    #[error("query execution failed: {0}")]
    Query(String),

    #[error("entity not found")]
    NotFound,

    #[error("constraint violation: {0}")]
    Constraint(String),
}
