//! Application state management.
//!
//! This module defines the shared state structure that gets passed to all
//! Axum handlers via the `State` extractor. The `AppState` holds the shared
//! metrics registry, the single application-wide dependency of this service.
//!
//! The state is designed to be cheaply cloneable (the registry is behind an
//! `Arc`) so it can be passed efficiently to each request handler without
//! copying any instrument state.

use crate::domain::SharedRegistry;

/// Shared application state passed to all Axum handlers.
///
/// Built once at startup around an explicit [`crate::domain::Registry`]
/// instance and cloned automatically by Axum for each incoming request.
/// Handlers extract it via `State(state): State<AppState>`. The registry is
/// never torn down; it lives until process exit.
#[derive(Clone)]
pub(crate) struct AppState {
    /// The process-wide metrics registry.
    ///
    /// The same instance the owning application records measurements into;
    /// the `/metrics` handler snapshots it on every scrape.
    registry: SharedRegistry,
}

impl AppState {
    // ---

    pub fn new(registry: SharedRegistry) -> Self {
        // ---
        AppState { registry }
    }

    /// Get a reference to the shared metrics registry.
    pub(crate) fn registry(&self) -> &SharedRegistry {
        // ---
        &self.registry
    }
}
