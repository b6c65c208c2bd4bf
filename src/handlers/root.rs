use axum::response::IntoResponse;

pub async fn root_handler() -> impl IntoResponse {
    let version = env!("CARGO_PKG_VERSION");
    format!(
        r#"Welcome to the Metrics Registry 👋
Version: {version}

Available endpoints:
  - GET /metrics - Prometheus text exposition of all registered instruments
  - GET /health  - Light health check

Instruments (counters, histograms) are registered and updated in-process by
the owning application; this service exposes them for pull-based scraping.
"#
    )
}
