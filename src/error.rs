//! Error types for API key extraction and JSON responses
//!
//! Provides a closed set of error kinds using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::response::{JsonResponder, TracingSink};

// == Auth Error Enum ==
/// Failure to extract an API key from request headers.
///
/// Callers match on the variant to tell "not authenticated" apart from
/// "malformed credentials".
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthError {
    /// The Authorization header is absent or empty
    #[error("no authorization header included")]
    NoAuthHeader,

    /// The Authorization header is not of the form `ApiKey <key>`
    #[error("malformed authorization header")]
    MalformedHeader,
}

impl AuthError {
    /// Status code used when this error is turned into a response.
    pub fn status(&self) -> StatusCode {
        StatusCode::UNAUTHORIZED
    }
}

// == IntoResponse Implementation ==
/// Rejections are always `401`, so nothing reaches the sink; handlers that
/// want their own sink call [`JsonResponder::respond_with_error`] directly.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        JsonResponder::new(TracingSink).respond_with_error(self.status(), self.to_string())
    }
}

// == Response Error Enum ==
/// Failure while building a JSON response.
///
/// Never escapes the responder: it is logged and replaced by a fallback body.
#[derive(Error, Debug)]
pub enum ResponseError {
    /// The payload could not be encoded as JSON
    #[error("failed to encode JSON payload: {0}")]
    Serialization(#[from] serde_json::Error),
}

// == Result Type Alias ==
/// Convenience Result type for API key extraction.
pub type Result<T> = std::result::Result<T, AuthError>;
