//! apikey_json - API key extraction and JSON responses for axum services
//!
//! Parses `Authorization: ApiKey <key>` headers and writes
//! `application/json` responses, reporting server errors to an injected
//! diagnostic sink.

pub mod auth;
pub mod config;
pub mod error;
pub mod models;
pub mod response;
pub mod telemetry;

pub use auth::{get_api_key, ApiKey};
pub use config::Config;
pub use error::{AuthError, ResponseError};
pub use models::ErrorResponse;
pub use response::{DiagnosticSink, JsonResponder, RecordingSink, TracingSink};
pub use telemetry::init_tracing;
