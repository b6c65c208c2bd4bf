// Test helpers are intentionally partially used
#![allow(dead_code)]

use metrics_registry::create_router;
use metrics_registry::domain::{Registry, SharedRegistry};
use reqwest::Client;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::time::sleep;

pub struct TestServer {
    pub addr: std::net::SocketAddr,
    pub client: Client,
    pub registry: SharedRegistry,
}

impl TestServer {
    // ---

    /// Spawns a server around a fresh registry.
    ///
    /// Each test owns its registry instance, so tests never share instrument
    /// state and need no serialization between them.
    pub async fn new() -> Self {
        // ---
        Self::with_registry(Registry::shared()).await
    }

    pub async fn with_registry(registry: SharedRegistry) -> Self {
        // ---
        let app = create_router(registry.clone());
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        // Spawn the server in the background
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        // Give the server a moment to start
        sleep(Duration::from_millis(100)).await;

        let client = Client::new();

        Self {
            addr,
            client,
            registry,
        }
    }

    pub fn url(&self, path: &str) -> String {
        // ---
        format!("http://{}{}", self.addr, path)
    }
}
