//! # AppError
//!
//! Centralized error handling for Post-Board.
//! Maps domain-specific failures to actionable error types.

use thiserror::Error;

/// The primary error type for all pb-core operations.
#[derive(Error, Debug)]
pub enum AppError {
    /// Resource not found (e.g., a Post id with no record)
    #[error("{0} not found with ID {1}")]
    NotFound(String, String),

    /// Validation failure (e.g., missing required field on create)
    #[error("validation error: {0}")]
    ValidationError(String),

    /// Backend failure (e.g., connection loss, constraint violation).
    /// Carried through unmodified from the storage port.
    #[error("storage failure: {0}")]
    Storage(#[from] anyhow::Error),
}

impl AppError {
    pub fn post_not_found(id: crate::models::PostId) -> Self {
        AppError::NotFound("Post".to_string(), id.to_string())
    }
}

/// A specialized Result type for Post-Board logic.
pub type Result<T> = std::result::Result<T, AppError>;
