// src/error.rs

//! Error types for the recipe book

use thiserror::Error;

/// Result type used throughout the crate
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by the store, the recipe service and the server
#[derive(Error, Debug)]
pub enum Error {
    /// The requested record does not exist
    #[error("{0} not found")]
    NotFound(String),

    /// Payload is missing a required field or carries an empty one
    #[error("invalid payload: {0}")]
    Validation(String),

    /// Database operation failed
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// IO error while preparing the database location
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration could not be used
    #[error("configuration error: {0}")]
    Config(String),

    /// Blocking task failed to complete
    #[error("task failed: {0}")]
    Task(String),
}

impl Error {
    /// Create a validation error for a missing or empty field
    pub fn missing_field(field: &str) -> Self {
        Self::Validation(format!("field '{}' is required and must not be empty", field))
    }

    /// True when the error means the requested record is absent
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}
