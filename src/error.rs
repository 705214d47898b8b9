//! Unified SDK error types.

use serde::Deserialize;
use thiserror::Error;

/// Top-level SDK error.
#[derive(Error, Debug)]
pub enum SdkError {
    /// Bad configuration or request input. Raised before any network call.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[cfg(feature = "http")]
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("API error: {0}")]
    Api(#[from] ApiError),

    #[error("Decode error (status {status}): {reason}")]
    Decode { status: u16, reason: String },
}

impl SdkError {
    /// The server-provided error code, if this is an [`ApiError`].
    pub fn api_code(&self) -> Option<&str> {
        match self {
            SdkError::Api(e) => Some(e.code.as_str()),
            _ => None,
        }
    }
}

/// Result type alias for SDK operations.
pub type SdkResult<T> = Result<T, SdkError>;

/// Error object carried in the `error` field of a response envelope.
#[derive(Error, Debug, Clone, PartialEq, Eq, Deserialize)]
#[error("{code}: {message}")]
pub struct ApiError {
    pub code: String,
    pub message: String,
}
