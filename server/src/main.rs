use std::sync::Arc;

use converter_server::{AppState, Config};
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::from_env();

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    info!(
        version = env!("CARGO_PKG_VERSION"),
        port = config.port,
        toon_service = %config.toon_base_url,
        "converter-server starting"
    );

    let addr = format!("0.0.0.0:{}", config.port);
    let state = Arc::new(AppState::new(config)?);
    let listener = TcpListener::bind(&addr).await?;
    info!(%addr, "listening");
    converter_server::run(listener, state).await?;
    Ok(())
}
