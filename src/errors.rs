/*!
 * Error types for the note-english service.
 *
 * This module contains custom error types for the different layers of the
 * service, using the thiserror crate for ergonomic error definitions:
 * - `ProviderError`: the LLM call itself failed
 * - `UpstreamError`: the call succeeded but the content could not be used
 * - `AppError`: what a request handler returns, mapped to an HTTP status
 */

use thiserror::Error;

/// Maximum number of characters of raw provider output carried in errors
pub const PREVIEW_CHARS: usize = 300;

/// Errors that can occur when working with provider APIs
#[derive(Error, Debug)]
pub enum ProviderError {
    /// Error when making an API request fails (including timeouts)
    #[error("API request failed: {0}")]
    RequestFailed(String),

    /// Error when parsing the provider's response envelope fails
    #[error("Failed to parse API response: {0}")]
    ParseError(String),

    /// Error returned by the API itself
    #[error("API responded with error: {status_code} - {message}")]
    ApiError {
        /// HTTP status code
        status_code: u16,
        /// Error message from the API
        message: String,
    },

    /// Error establishing or maintaining a connection
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// Error related to rate limiting
    #[error("Rate limit exceeded: {0}")]
    RateLimitExceeded(String),

    /// Error with authentication
    #[error("Authentication error: {0}")]
    AuthenticationError(String),
}

impl ProviderError {
    /// Classify a non-success HTTP status from a provider
    pub fn from_status(status_code: u16, message: impl Into<String>) -> Self {
        let message = message.into();
        match status_code {
            401 | 403 => Self::AuthenticationError(message),
            429 => Self::RateLimitExceeded(message),
            _ => Self::ApiError { status_code, message },
        }
    }
}

impl From<reqwest::Error> for ProviderError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_connect() {
            Self::ConnectionError(error.to_string())
        } else if error.is_decode() {
            Self::ParseError(error.to_string())
        } else {
            Self::RequestFailed(error.to_string())
        }
    }
}

/// Errors produced when talking to the LLM upstream on behalf of a request
#[derive(Error, Debug)]
pub enum UpstreamError {
    /// The provider call itself failed (network, auth, quota)
    #[error("LLM request failed: {0}")]
    Request(#[from] ProviderError),

    /// The provider returned content that is not valid JSON
    #[error("Failed to parse LLM output as JSON. Error: {message}. Output preview: {preview}")]
    Parse {
        /// Parser error message
        message: String,
        /// Raw output, truncated to `PREVIEW_CHARS` characters
        preview: String,
    },

    /// The provider returned valid JSON of the wrong shape
    #[error("LLM output has unexpected shape: {0}")]
    Shape(String),
}

impl UpstreamError {
    /// Build a parse error from the raw output, keeping only a bounded preview
    pub fn parse(message: impl std::fmt::Display, raw: &str) -> Self {
        Self::Parse {
            message: message.to_string(),
            preview: preview(raw),
        }
    }
}

/// Errors surfaced at the request boundary
#[derive(Error, Debug)]
pub enum AppError {
    /// The request was well-formed JSON but semantically invalid
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The LLM upstream failed
    #[error(transparent)]
    Upstream(#[from] UpstreamError),

    /// Any other error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Internal(error.to_string())
    }
}

/// First `PREVIEW_CHARS` characters of `raw`, on a char boundary
pub fn preview(raw: &str) -> String {
    raw.chars().take(PREVIEW_CHARS).collect()
}
