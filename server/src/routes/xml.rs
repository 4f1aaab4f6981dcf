//! XML ↔ JSON conversion routes. Both consume a raw document body.

use std::sync::Arc;

use axum::routing::post;
use axum::{Json, Router};
use converter_core::ConvertError;
use serde_json::Value;

use crate::envelope::Envelope;
use crate::error::ServerError;
use crate::AppState;

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/xml/convert-to-json", post(convert_to_json))
        .route("/xml/convert-to-xml", post(convert_to_xml))
}

/// Raw XML body in, parsed JSON tree out (as a real tree, not a string).
async fn convert_to_json(xml: String) -> Result<Json<Envelope>, ServerError> {
    let json = converter_core::xml::xml_to_json(&xml)?;
    let tree: Value = serde_json::from_str(&json)
        .map_err(|e| ServerError::Convert(ConvertError::Parse(e.to_string())))?;
    Ok(Json(Envelope::success("Converted XML to JSON", tree)))
}

/// Raw JSON body in, XML document out (as a string payload).
async fn convert_to_xml(json: String) -> Result<Json<Envelope>, ServerError> {
    let xml = converter_core::xml::json_to_xml(&json)?;
    Ok(Json(Envelope::success(
        "Converted JSON to XML",
        Value::String(xml),
    )))
}
