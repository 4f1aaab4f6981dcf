//! Stateless data-format conversion API.
//!
//! # Overview
//! An axum HTTP surface over the pure codecs in `converter-core`: Base64
//! text/file encode-decode, XML↔JSON transcoding, and JSON↔TOON conversion
//! proxied to a separately-running service. Every endpoint produces the
//! uniform `{status, message?, data?}` envelope (or a binary attachment on
//! the file-decode path). No conversion result is ever persisted.
//!
//! # Design
//! The shared state is constructed once at startup and never mutated:
//! config, the sans-IO `ToonClient`, and the `RemoteExecutor` wrapping a
//! concurrency-safe `reqwest::Client`. Requests share nothing else, so no
//! locking exists anywhere.

use std::sync::Arc;

use axum::Router;
use converter_core::ToonClient;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

pub mod config;
pub mod envelope;
pub mod error;
pub mod remote;
pub mod routes;

pub use config::Config;
pub use envelope::Envelope;
pub use error::ServerError;
pub use remote::RemoteExecutor;

/// Shared, immutable application state.
pub struct AppState {
    pub config: Config,
    pub toon: ToonClient,
    pub remote: RemoteExecutor,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self, reqwest::Error> {
        let toon = ToonClient::new(&config.toon_base_url);
        let remote = RemoteExecutor::new(config.toon_timeout)?;
        Ok(Self {
            config,
            toon,
            remote,
        })
    }
}

/// Build the application router with request/response tracing attached.
pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .nest("/api/v1", routes::api_router())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn run(listener: TcpListener, state: Arc<AppState>) -> Result<(), std::io::Error> {
    axum::serve(listener, app(state)).await
}
