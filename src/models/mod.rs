//! Response models
//!
//! DTOs serialized into JSON response bodies.

pub mod responses;

pub use responses::ErrorResponse;
