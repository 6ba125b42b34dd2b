//! Unified error handling
//!
//! [`AppError`] is the flat application error the service layer exposes
//! to its callers (the out-of-scope API layer). Domain errors
//! ([`crate::cart::CartError`], [`crate::stock::StockError`],
//! [`crate::db::repository::RepoError`]) convert into it at the service
//! boundary. No failure is retried or compensated here; everything
//! surfaces synchronously to the immediate caller.

use crate::db::repository::RepoError;

/// Application error
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Resource not found
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Resource conflict (e.g. contended stock update)
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Validation failed
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Database error
    #[error("Database error: {0}")]
    Database(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Create a not found error
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    /// Create a conflict error
    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a database error
    pub fn database(msg: impl Into<String>) -> Self {
        Self::Database(msg.into())
    }

    /// Create an internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound(msg) => AppError::NotFound(msg),
            RepoError::Duplicate(msg) => AppError::Conflict(msg),
            RepoError::Validation(msg) => AppError::Validation(msg),
            RepoError::Database(msg) => AppError::Database(msg),
        }
    }
}

/// Result type for application operations
pub type AppResult<T> = Result<T, AppError>;
