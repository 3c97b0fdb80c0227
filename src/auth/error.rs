//! Authentication error types.

use thiserror::Error;

/// Errors raised while accepting an access token.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("malformed access token: {0}")]
    MalformedToken(&'static str),
    #[error("invalid token encoding: {0}")]
    Decode(#[from] base64::DecodeError),
    #[error("invalid token claims: {0}")]
    Claims(#[from] serde_json::Error),
    #[error("token audience does not include {expected}")]
    AudienceMismatch { expected: String },
}
