use anyhow::Result;
use metrics_registry::domain::Registry;
use metrics_registry::{create_router, AppConfig};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing subscriber to log to stdout
    tracing_subscriber::fmt::init();

    // Load all configuration from environment
    let config = AppConfig::from_env()?;

    // One explicit registry for the life of the process. The owning
    // application registers its instruments against this instance; the
    // router only reads it.
    let registry = Registry::shared();

    let app = create_router(registry);

    info!("Starting at endpoint:{}", config.server.bind_addr);
    info!(
        "Starting Metrics Registry server v{}...",
        env!("CARGO_PKG_VERSION")
    );

    let listener = tokio::net::TcpListener::bind(&config.server.bind_addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Resolves on Ctrl-C so in-flight scrapes finish before exit. The registry
/// itself is memory-only and needs no teardown.
async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {err:?}");
    }
}
