use crate::app_state::AppState;
use crate::infrastructure::exposition;
use axum::{extract::State, http::StatusCode, response::IntoResponse};

/// Handler for the `/metrics` endpoint.
///
/// Takes a snapshot of the shared registry and returns it in Prometheus
/// text format for scraping. The snapshot is taken fresh on every request;
/// nothing is cached between scrapes.
pub async fn metrics_handler(State(app_state): State<AppState>) -> impl IntoResponse {
    // ---

    let snapshot = app_state.registry().snapshot();
    let metrics_text = exposition::render(&snapshot);

    (
        StatusCode::OK,
        [("content-type", "text/plain; version=0.0.4; charset=utf-8")],
        metrics_text,
    )
}
