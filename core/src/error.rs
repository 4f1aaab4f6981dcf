//! Error types for the conversion core.
//!
//! # Design
//! Codec failures and remote-API failures are separate enums because they
//! belong to different boundaries: `ConvertError` comes out of pure codec
//! functions, `ToonApiError` out of the TOON client's parse methods. The
//! server crate maps both onto HTTP status codes at its own edge.

use thiserror::Error;

/// Failures produced by the pure codecs (Base64, XML/JSON).
#[derive(Debug, Error)]
pub enum ConvertError {
    /// The input was not valid Base64, or the decoded bytes were not UTF-8
    /// on the text-decode path.
    #[error("decode failed: {0}")]
    Decode(String),

    /// The input XML or JSON could not be parsed.
    #[error("parse failed: {0}")]
    Parse(String),

    /// The input parsed but its shape cannot map to the target format,
    /// e.g. a top-level JSON array has no natural XML root element.
    #[error("structural mismatch: {0}")]
    Structural(String),
}

/// Errors returned by `ToonClient` parse methods.
#[derive(Debug, Error)]
pub enum ToonApiError {
    /// The TOON service returned a non-2xx status. Carries the raw status
    /// and body for debugging.
    #[error("TOON service returned HTTP {status}: {body}")]
    Http { status: u16, body: String },

    /// The response body could not be interpreted as the expected shape.
    #[error("TOON response unusable: {0}")]
    Deserialization(String),
}
