//! Error types for the surfsup application.
//!
//! This module defines the error enum shared by the store, the configuration
//! layer and the HTTP handlers.

use thiserror::Error;

/// The main error type for surfsup operations.
#[derive(Error, Debug)]
pub enum SurfsUpError {
    /// Measurement store errors
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// A date path segment that is not a valid `YYYY-MM-DD` calendar date
    #[error("Invalid date: {message}")]
    InvalidDate { message: String },

    /// Data not found errors
    #[error("Data not found: {message}")]
    DataNotFound { message: String },

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Server errors
    #[error("Server error: {message}")]
    Server { message: String },
}

/// Convenience type alias for Results with SurfsUpError
pub type Result<T> = std::result::Result<T, SurfsUpError>;
