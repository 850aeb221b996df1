//! API key extractor
//!
//! Exposes [`get_api_key`] as an axum extractor so handlers can take the key
//! as an argument.

use axum::{async_trait, extract::FromRequestParts, http::request::Parts};

use super::api_key::get_api_key;
use crate::error::AuthError;

/// API key taken from the `Authorization: ApiKey <key>` header.
///
/// Rejects with [`AuthError`], which renders as a `401` JSON error body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiKey(pub String);

impl ApiKey {
    /// Returns the key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for ApiKey
where
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        get_api_key(&parts.headers).map(ApiKey)
    }
}
