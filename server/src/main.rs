use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use log::{error, info};
use minehost_server::{ServerConfig, SessionRegistry, router};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServerConfig::parse();

    env_logger::Builder::new()
        .filter_level(config.verbosity.log_level_filter())
        .parse_default_env()
        .init();

    let registry = Arc::new(SessionRegistry::with_max_games(config.max_games));
    let app = router(registry);

    let addr = config.socket_addr();
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    info!("Listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {err}");
        std::future::pending::<()>().await;
    }
    info!("Shutting down");
}
