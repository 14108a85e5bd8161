//! Centralized error types for the board.

use thiserror::Error;

/// Main error type for board operations.
#[derive(Error, Debug)]
pub enum BoardError {
    #[error("List not found: {0}")]
    ListNotFound(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("board context must be used within a board provider")]
    MissingProvider,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Result type for board operations.
pub type BoardResult<T> = Result<T, BoardError>;

impl BoardError {
    /// Create a validation error.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::ValidationError(msg.into())
    }

    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
