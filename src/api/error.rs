//! API client error types.

use thiserror::Error;

/// Drinks API client errors.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("invalid api server url {url}: {source}")]
    InvalidBaseUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("request error: {0}")]
    Request(#[from] reqwest::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("api server returned {status}: {message}")]
    Server { status: u16, message: String },
}

/// Result type for client operations.
pub type Result<T> = std::result::Result<T, ApiError>;
