//! Error Types
//!
//! `ApiError` describes what went wrong talking to the remote collection.
//! `CartError` is what the cart reports: one fixed message per operation kind,
//! regardless of the underlying cause.

use thiserror::Error;

/// Failure of a single remote call
#[derive(Debug, Error)]
pub enum ApiError {
    /// Network, connection or transport-level failure
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Remote answered with a non-2xx status
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// Response body was not the expected JSON
    #[error("malformed response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// Entry id could not be appended to the base URL
    #[error("cannot address entry {0:?} under the configured base URL")]
    InvalidUrl(String),
}

/// Cart operation failure, classified by which operation triggered it
#[derive(Debug, Error)]
pub enum CartError {
    #[error("Error fetching cart items.")]
    FetchFailure(#[source] ApiError),

    #[error("Error adding item to cart.")]
    AddFailure(#[source] ApiError),

    #[error("Error removing item from cart.")]
    RemoveFailure(#[source] ApiError),
}

impl CartError {
    /// The underlying remote failure
    pub fn cause(&self) -> &ApiError {
        match self {
            CartError::FetchFailure(e) | CartError::AddFailure(e) | CartError::RemoveFailure(e) => e,
        }
    }
}

/// Invalid cart configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid API base URL {url:?}: {source}")]
    InvalidBaseUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("API base URL must use http or https, got {0:?}")]
    UnsupportedScheme(String),
}
