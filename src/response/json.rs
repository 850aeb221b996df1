//! JSON Responder
//!
//! Builds `application/json` responses from serializable payloads.

use axum::{
    body::Body,
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use serde::Serialize;

use super::sink::{DiagnosticSink, TracingSink};
use crate::error::ResponseError;
use crate::models::ErrorResponse;

/// Body sent when the payload itself cannot be encoded.
pub const FALLBACK_ERROR_BODY: &str = r#"{"error": "Internal Server Error"}"#;

/// Writes JSON payloads with a status code, reporting server errors and
/// encoding failures to a [`DiagnosticSink`].
#[derive(Debug, Clone, Default)]
pub struct JsonResponder<S = TracingSink> {
    sink: S,
}

impl<S: DiagnosticSink> JsonResponder<S> {
    /// Creates a responder reporting to the given sink.
    pub fn new(sink: S) -> Self {
        Self { sink }
    }

    /// Returns the sink this responder reports to.
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Responds with `payload` encoded as JSON and the given status code.
    ///
    /// The content type is set before the status. If the payload fails to
    /// encode, the failure is recorded and a `500` with
    /// [`FALLBACK_ERROR_BODY`] is returned instead.
    pub fn respond_with_json<T>(&self, code: StatusCode, payload: &T) -> Response
    where
        T: Serialize + ?Sized,
    {
        match encode(payload) {
            Ok(bytes) => json_response(code, Body::from(bytes)),
            Err(err) => {
                self.sink.record(&format!("Error encoding JSON: {}", err));
                json_response(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Body::from(FALLBACK_ERROR_BODY),
                )
            }
        }
    }

    /// Responds with `{"error": <message>}` and the given status code.
    ///
    /// Codes of 500 and above are recorded before the response is built.
    pub fn respond_with_error(&self, code: StatusCode, message: impl Into<String>) -> Response {
        let message = message.into();
        if code.as_u16() >= 500 {
            self.sink
                .record(&format!("Responding with 5XX error: {}", message));
        }
        self.respond_with_json(code, &ErrorResponse::new(message))
    }
}

fn encode<T: Serialize + ?Sized>(payload: &T) -> Result<Vec<u8>, ResponseError> {
    Ok(serde_json::to_vec(payload)?)
}

fn json_response(code: StatusCode, body: Body) -> Response {
    let mut response = body.into_response();
    response
        .headers_mut()
        .insert(header::CONTENT_TYPE, HeaderValue::from_static("application/json"));
    *response.status_mut() = code;
    response
}
