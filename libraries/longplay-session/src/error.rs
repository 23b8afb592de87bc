//! Error types for the player session

use longplay_core::LongplayError;
use thiserror::Error;

/// Session errors
#[derive(Debug, Error)]
pub enum SessionError {
    /// Persisting state failed
    #[error("Storage error: {0}")]
    Storage(String),

    /// The audio element rejected a request
    #[error("Audio error: {0}")]
    Audio(String),

    /// Invalid configuration or argument
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Encoding state for storage failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<LongplayError> for SessionError {
    fn from(err: LongplayError) -> Self {
        match err {
            LongplayError::Audio(msg) => Self::Audio(msg),
            LongplayError::InvalidInput(msg) => Self::InvalidInput(msg),
            LongplayError::Serialization(e) => Self::Serialization(e),
            LongplayError::Storage(msg) => Self::Storage(msg),
            LongplayError::Io(e) => Self::Storage(e.to_string()),
        }
    }
}

/// Result type for session operations
pub type Result<T> = std::result::Result<T, SessionError>;
