//! Error types for hash-diffusion

use thiserror::Error;

/// Main error type for hash-diffusion operations
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid analyzer parameters, unknown names, or a bad config file
    #[error("Configuration error: {0}")]
    Config(String),

    /// Two sequences (or two outputs of one hash function) differ in length
    #[error("Length mismatch: expected length {expected}, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    /// The entropy source failed; never retried
    #[error("Random source error: {0}")]
    RandomSource(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for hash-diffusion operations
pub type Result<T> = std::result::Result<T, Error>;
