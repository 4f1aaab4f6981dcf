//! The uniform response envelope.
//!
//! # Design
//! The source of this API shape built responses as untyped maps. Here the
//! envelope is a tagged union serialized to the same wire contract:
//! `{"status":"success", "message":..., "data":..., "filename"?:...}` on
//! success, `{"status":"error", "message":...}` on failure. Handlers carry
//! typed payloads until the HTTP boundary.

use serde::Serialize;
use serde_json::Value;

/// Response envelope shared by every JSON-producing conversion endpoint.
#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum Envelope {
    Success {
        message: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        filename: Option<String>,
        data: Value,
    },
    Error {
        message: String,
    },
}

impl Envelope {
    pub fn success(message: impl Into<String>, data: Value) -> Self {
        Envelope::Success {
            message: message.into(),
            filename: None,
            data,
        }
    }

    /// Success carrying the name of the uploaded file (file-encode path).
    pub fn success_file(message: impl Into<String>, filename: String, data: Value) -> Self {
        Envelope::Success {
            message: message.into(),
            filename: Some(filename),
            data,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Envelope::Error {
            message: message.into(),
        }
    }
}
