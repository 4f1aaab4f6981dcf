//! Base64 conversion routes.

use std::sync::Arc;

use axum::extract::Multipart;
use axum::http::header;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::envelope::Envelope;
use crate::error::ServerError;
use crate::AppState;

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/base64/encode-text", post(encode_text))
        .route("/base64/decode-text", post(decode_text))
        .route("/base64/encode-file", post(encode_file))
        .route("/base64/decode-file", post(decode_file))
}

#[derive(Deserialize)]
struct EncodeTextRequest {
    text: Option<String>,
}

#[derive(Deserialize)]
struct DecodeTextRequest {
    base64: Option<String>,
}

#[derive(Deserialize)]
struct DecodeFileRequest {
    base64: Option<String>,
    filename: Option<String>,
}

async fn encode_text(
    Json(body): Json<EncodeTextRequest>,
) -> Result<Json<Envelope>, ServerError> {
    let text = body.text.ok_or(ServerError::MissingField("text"))?;
    let b64 = converter_core::base64::encode_text(&text);
    Ok(Json(Envelope::success(
        "Encoded text to Base64",
        Value::String(b64),
    )))
}

async fn decode_text(
    Json(body): Json<DecodeTextRequest>,
) -> Result<Json<Envelope>, ServerError> {
    let b64 = body.base64.ok_or(ServerError::MissingField("base64"))?;
    let text = converter_core::base64::decode_to_text(&b64)?;
    Ok(Json(Envelope::success(
        "Decoded Base64 to text",
        Value::String(text),
    )))
}

/// Multipart upload: reads the `file` field fully into memory and returns
/// its Base64 encoding together with the original filename.
async fn encode_file(mut multipart: Multipart) -> Result<Json<Envelope>, ServerError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ServerError::Upload(e.to_string()))?
    {
        if field.name() != Some("file") {
            continue;
        }
        let filename = field.file_name().unwrap_or("upload").to_string();
        let bytes = field
            .bytes()
            .await
            .map_err(|e| ServerError::Upload(e.to_string()))?;
        debug!(filename = %filename, size = bytes.len(), "encoding uploaded file");

        let b64 = converter_core::base64::encode_file(&bytes);
        return Ok(Json(Envelope::success_file(
            "Encoded file to Base64",
            filename,
            Value::String(b64),
        )));
    }
    Err(ServerError::MissingField("file"))
}

/// Decodes Base64 to raw bytes and returns them as an attachment download.
async fn decode_file(Json(body): Json<DecodeFileRequest>) -> Result<Response, ServerError> {
    let b64 = body.base64.ok_or(ServerError::MissingField("base64"))?;
    let filename = body.filename.unwrap_or_else(|| "decoded.bin".to_string());
    let bytes = converter_core::base64::decode_file(&b64)?;

    let disposition = format!("attachment; filename=\"{}\"", sanitize_filename(&filename));
    Ok((
        [
            (header::CONTENT_TYPE, "application/octet-stream".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        bytes,
    )
        .into_response())
}

/// Keep the Content-Disposition header well-formed whatever the client sent.
fn sanitize_filename(filename: &str) -> String {
    filename
        .chars()
        .filter(|c| !c.is_control() && *c != '"' && *c != '\\')
        .collect()
}
