//! Unified server error type.
//!
//! Every handler returns `Result<T, ServerError>`, which implements
//! [`axum::response::IntoResponse`] so failures are automatically converted
//! into the uniform `{"status":"error","message":...}` envelope. No error
//! escapes to a framework-level handler, and none is fatal to the process.
//!
//! Status policy: client-caused malformed input (missing fields, bad Base64,
//! unparsable XML/JSON, unreadable uploads) is 400; a failing TOON service
//! is 502.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use converter_core::ConvertError;
use thiserror::Error;
use tracing::warn;

use crate::envelope::Envelope;

/// All errors that can occur in a conversion request's lifecycle.
#[derive(Debug, Error)]
pub enum ServerError {
    /// A required field was absent from the request payload. The display
    /// string is part of the wire contract.
    #[error("Missing '{0}' in body")]
    MissingField(&'static str),

    /// A codec rejected the input (bad Base64, malformed XML/JSON, or a
    /// JSON shape with no XML mapping).
    #[error(transparent)]
    Convert(#[from] ConvertError),

    /// The uploaded multipart stream could not be read.
    #[error("failed to read uploaded file: {0}")]
    Upload(String),

    /// The TOON service could not be reached, timed out, answered non-2xx,
    /// or returned an unusable body.
    #[error("TOON conversion failed: {0}")]
    Remote(String),
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = match &self {
            ServerError::MissingField(_)
            | ServerError::Convert(_)
            | ServerError::Upload(_) => StatusCode::BAD_REQUEST,
            ServerError::Remote(cause) => {
                warn!(cause = %cause, "TOON service failure");
                StatusCode::BAD_GATEWAY
            }
        };
        (status, Json(Envelope::error(self.to_string()))).into_response()
    }
}
