// src/lib.rs
use app_state::AppState;
use axum::{routing::get, Router};

use domain::SharedRegistry;
use handlers::{health_check, metrics_handler, root_handler};

// Public exports (visible outside this module)
pub mod domain;

// Internal-only exports (sibling access within this module)
mod app_state;
mod config;
mod handlers;
mod infrastructure;

pub use config::*;

// Publicly expose the exposition renderer for hosts with their own transport
pub use infrastructure::exposition::render as render_exposition;

/// Build the HTTP router around an explicit metrics registry.
///
/// The caller owns the registry: it registers instruments through it, records
/// measurements into it, and hands it here so `/metrics` can snapshot it on
/// each scrape. There is no hidden global registry.
pub fn create_router(registry: SharedRegistry) -> Router {
    // ---
    tracing_subscriber::fmt::try_init().ok(); // ✅ Ignores if already initialized

    // Build application state with the shared registry
    let app_state = AppState::new(registry);

    Router::new()
        .route("/", get(root_handler))
        .route("/health", get(health_check))
        .route("/metrics", get(metrics_handler))
        .with_state(app_state)
}
