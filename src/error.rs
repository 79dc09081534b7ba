//! Error types for the flashcards quiz service.

use thiserror::Error;

/// Storage-related errors (graded result persistence)
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization failed: {0}")]
    Serialization(String),
}

/// Errors surfaced by quiz issuance and grading
#[derive(Debug, Error)]
pub enum QuizError {
    /// Malformed caller input. Never retried.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Unknown quiz name, unknown or expired quiz id, or a name mismatch at grading.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Configuration absent or malformed when it is first needed.
    #[error("Invalid state: {0}")]
    InvalidState(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

impl QuizError {
    /// True for conditions a caller can translate into a "not found" response.
    pub fn is_not_found(&self) -> bool {
        matches!(self, QuizError::NotFound(_))
    }
}

impl From<config::ConfigError> for QuizError {
    fn from(err: config::ConfigError) -> Self {
        QuizError::Config(err.to_string())
    }
}

impl From<serde_json::Error> for StorageError {
    fn from(err: serde_json::Error) -> Self {
        StorageError::Serialization(err.to_string())
    }
}
