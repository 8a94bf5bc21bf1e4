//! Error types for seismic coefficient calculations

use thiserror::Error;

/// Main error type for seismic calculation operations
#[derive(Error, Debug)]
pub enum SeismicError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Domain error: {0}")]
    Domain(String),

    #[error("Computation error: {0}")]
    Computation(String),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

/// Result type for seismic calculation operations
pub type SeismicResult<T> = Result<T, SeismicError>;
