//! Auth Module
//!
//! Extraction of API keys from the `Authorization` header.
//!
//! The expected header shape is `Authorization: ApiKey <key>`.

pub mod api_key;
pub mod extractor;

#[cfg(test)]
mod property_tests;

pub use api_key::{get_api_key, API_KEY_SCHEME};
pub use extractor::ApiKey;
