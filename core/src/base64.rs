//! Base64 codec: standard alphabet with padding.
//!
//! All four operations are pure and synchronous. The encode paths are total;
//! the decode paths fail with [`ConvertError::Decode`] on malformed input.

// `::base64` disambiguates the crate from this module.
use ::base64::engine::general_purpose::STANDARD;
use ::base64::Engine;

use crate::error::ConvertError;

/// Encode the UTF-8 bytes of `text` as Base64. Never fails.
pub fn encode_text(text: &str) -> String {
    STANDARD.encode(text.as_bytes())
}

/// Decode Base64 and interpret the bytes as UTF-8 text.
///
/// Fails when the input is not valid Base64, or when the decoded bytes are
/// not valid UTF-8 (binary payloads belong on the file-decode path).
pub fn decode_to_text(b64: &str) -> Result<String, ConvertError> {
    let bytes = STANDARD
        .decode(b64)
        .map_err(|e| ConvertError::Decode(format!("invalid Base64: {e}")))?;
    String::from_utf8(bytes)
        .map_err(|e| ConvertError::Decode(format!("decoded bytes are not UTF-8 text: {e}")))
}

/// Encode an arbitrary byte sequence as Base64. Never fails.
pub fn encode_file(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}

/// Decode Base64 into raw bytes with no text interpretation.
pub fn decode_file(b64: &str) -> Result<Vec<u8>, ConvertError> {
    STANDARD
        .decode(b64)
        .map_err(|e| ConvertError::Decode(format!("invalid Base64: {e}")))
}
