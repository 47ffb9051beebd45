//! Prometheus scrape endpoint

use crate::telemetry;
use axum::http::header;
use axum::response::IntoResponse;

/// GET /metrics
pub async fn metrics_handler() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        telemetry::render(),
    )
}
