// src/config.rs

//! Application configuration loaded from environment variables.
//!
//! This module defines all startup-time configuration for the service.
//! Every setting has a sensible default; overrides are read eagerly at
//! startup rather than re-checked at runtime.

use anyhow::Result;

// ============================================================
// Local macros (config-only, intentionally explicit)
// ============================================================

/// Reads an optional environment variable, falling back to a default.
///
/// The registry is memory-only with no external backends, so no setting is
/// a deployment-critical secret; fallback behavior is always acceptable.
macro_rules! optional_env {
    // ---
    ($key:literal, $default:expr) => {
        std::env::var($key).unwrap_or_else(|_| $default.to_string())
    };
}

// ============================================================
// Public configuration facade
// ============================================================

/// Aggregated application configuration.
///
/// This is the single source of truth for startup configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server: server::ServerConfig,
}

impl AppConfig {
    /// Loads application configuration from the environment.
    ///
    /// # Errors
    /// Currently infallible (every setting has a default), but kept fallible
    /// so adding a required setting later does not ripple through `main`.
    /// This function is intended to be called exactly once at startup.
    pub fn from_env() -> Result<Self> {
        // ---
        Ok(Self {
            server: server::ServerConfig::from_env()?,
        })
    }
}

// ============================================================
// Server configuration
// ============================================================

mod server {
    // ---
    use super::*;

    /// HTTP server configuration derived from environment variables.
    #[derive(Debug, Clone)]
    pub struct ServerConfig {
        /// Socket address the exposition endpoint binds to. Defaults to 127.0.0.1:8080.
        pub bind_addr: String,
    }

    impl ServerConfig {
        /// Builds a [`ServerConfig`] from environment variables.
        pub fn from_env() -> Result<Self> {
            // ---
            let bind_addr = optional_env!("METRICS_BIND_ADDR", "127.0.0.1:8080");

            Ok(Self { bind_addr })
        }
    }
}
pub use server::ServerConfig;

// ============================================================
// Tests
// ============================================================
