//! API key parsing
//!
//! Pulls the key out of an `Authorization: ApiKey <key>` header.

use axum::http::{header, HeaderMap};

use crate::error::{AuthError, Result};

/// Scheme token that must prefix the key, compared case-sensitively.
pub const API_KEY_SCHEME: &str = "ApiKey";

/// Extracts the API key from the request headers.
///
/// Only the first `Authorization` value is consulted. The value is split on
/// single spaces; the first segment must be exactly [`API_KEY_SCHEME`] and the
/// second segment is returned verbatim. Further segments are ignored.
///
/// # Errors
/// - [`AuthError::NoAuthHeader`] if the header is missing or empty
/// - [`AuthError::MalformedHeader`] if the header is not `ApiKey <key>`
pub fn get_api_key(headers: &HeaderMap) -> Result<String> {
    let value = match headers.get(header::AUTHORIZATION) {
        Some(value) if !value.is_empty() => value,
        _ => return Err(AuthError::NoAuthHeader),
    };

    // Any UTF-8 is accepted; only undecodable bytes are rejected
    let value = std::str::from_utf8(value.as_bytes()).map_err(|_| AuthError::MalformedHeader)?;

    let mut segments = value.split(' ');
    match (segments.next(), segments.next()) {
        (Some(API_KEY_SCHEME), Some(key)) => Ok(key.to_string()),
        _ => Err(AuthError::MalformedHeader),
    }
}
