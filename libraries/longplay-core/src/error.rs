/// Core error types for Longplay
use thiserror::Error;

/// Result type alias using `LongplayError`
pub type Result<T> = std::result::Result<T, LongplayError>;

/// Core error type for Longplay
#[derive(Error, Debug)]
pub enum LongplayError {
    /// Key-value storage errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Audio element errors (play rejected, seek failed)
    #[error("Audio error: {0}")]
    Audio(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// I/O errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
}

impl LongplayError {
    /// Create a storage error
    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }

    /// Create an audio error
    pub fn audio(msg: impl Into<String>) -> Self {
        Self::Audio(msg.into())
    }

    /// Create an invalid input error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}
