//! Route registration, one module per endpoint family.

use std::sync::Arc;

use axum::Router;

use crate::AppState;

pub mod base64;
pub mod health;
pub mod toon;
pub mod xml;

/// Every route that lives under `/api/v1`.
pub fn api_router() -> Router<Arc<AppState>> {
    Router::new()
        .merge(base64::router())
        .merge(xml::router())
        .merge(toon::router())
        .merge(health::router())
}
