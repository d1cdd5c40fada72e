//! # Error Types
//!
//! Typed error handling for storytime.
//! Story operations return `Result<T, StoryError>`, cart operations
//! return `Result<T, CartError>`.

use thiserror::Error;

/// Fallback message for errors that carry no text of their own
pub const GENERIC_SERVER_ERROR: &str = "Server error.";

/// Error type for the story request handler.
///
/// The `Display` output of each variant is the exact message returned to
/// the caller in the `{ "error": ... }` body.
#[derive(Debug, Error)]
pub enum StoryError {
    /// Any method other than POST or OPTIONS
    #[error("Use POST.")]
    MethodNotAllowed,

    /// Server is missing required configuration (API key)
    #[error("{0}")]
    Configuration(String),

    /// Request body was not valid JSON
    #[error("Invalid JSON.")]
    InvalidJson,

    /// Upstream API answered with a non-success status
    #[error("{0}")]
    Upstream(String),

    /// Upstream API succeeded but produced no usable text
    #[error("No story text returned from model.")]
    EmptyStory,

    /// Transport failure talking to the upstream API
    #[error("{0}")]
    Network(String),

    /// Anything else that went wrong while handling the response
    #[error("{0}")]
    Internal(String),
}

impl StoryError {
    /// Returns the HTTP status code appropriate for this error
    pub fn status_code(&self) -> u16 {
        match self {
            StoryError::MethodNotAllowed => 405,
            StoryError::Configuration(_) => 500,
            StoryError::InvalidJson => 400,
            StoryError::Upstream(_) => 502,
            StoryError::EmptyStory => 502,
            StoryError::Network(_) => 500,
            StoryError::Internal(_) => 500,
        }
    }

    /// Message for the response body, never empty
    pub fn public_message(&self) -> String {
        let message = self.to_string();
        if message.trim().is_empty() {
            GENERIC_SERVER_ERROR.to_string()
        } else {
            message
        }
    }
}

/// Result type alias for story operations
pub type StoryResult<T> = Result<T, StoryError>;

/// Error type for client-side cart operations
#[derive(Debug, Error)]
pub enum CartError {
    /// The key-value store rejected a write (quota, disabled storage)
    #[error("Storage error: {0}")]
    Storage(String),

    /// The cart could not be encoded
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type alias for cart operations
pub type CartResult<T> = Result<T, CartError>;
