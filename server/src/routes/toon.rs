//! TOON conversion routes.
//!
//! TOON encode/decode is not implemented here: both handlers build a request
//! with the core's `ToonClient`, execute it through the shared
//! `RemoteExecutor`, and interpret the remote's answer. Any failure at that
//! boundary becomes a 502 error envelope, never a raw transport error.

use std::sync::Arc;

use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ServerError;
use crate::AppState;

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/toon/json-to-toon", post(json_to_toon))
        .route("/toon/toon-to-json", post(toon_to_json))
}

#[derive(Deserialize)]
struct ToonToJsonRequest {
    toon: Option<String>,
}

#[derive(Serialize)]
struct JsonToToonResponse {
    status: &'static str,
    toon: String,
}

#[derive(Serialize)]
struct ToonToJsonResponse {
    status: &'static str,
    json: Value,
}

/// Forwards an arbitrary JSON body to the TOON service and returns the
/// TOON text it answers with, verbatim.
async fn json_to_toon(
    State(state): State<Arc<AppState>>,
    Json(body): Json<Value>,
) -> Result<Json<JsonToToonResponse>, ServerError> {
    let request = state.toon.build_json_to_toon(&body.to_string());
    let response = state.remote.execute(request).await?;
    let toon = state
        .toon
        .parse_conversion(response)
        .map_err(|e| ServerError::Remote(e.to_string()))?;
    Ok(Json(JsonToToonResponse {
        status: "success",
        toon,
    }))
}

/// Forwards TOON text to the remote service and returns its JSON answer as
/// a parsed tree.
async fn toon_to_json(
    State(state): State<Arc<AppState>>,
    Json(body): Json<ToonToJsonRequest>,
) -> Result<Json<ToonToJsonResponse>, ServerError> {
    let toon = body.toon.ok_or(ServerError::MissingField("toon"))?;
    let request = state.toon.build_toon_to_json(&toon);
    let response = state.remote.execute(request).await?;
    let json = state
        .toon
        .parse_json_conversion(response)
        .map_err(|e| ServerError::Remote(e.to_string()))?;
    Ok(Json(ToonToJsonResponse {
        status: "success",
        json,
    }))
}
