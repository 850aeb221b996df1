//! Response Module
//!
//! JSON response helpers and the diagnostic sink they report through.

pub mod json;
pub mod sink;

pub use json::{JsonResponder, FALLBACK_ERROR_BODY};
pub use sink::{DiagnosticSink, RecordingSink, TracingSink};
