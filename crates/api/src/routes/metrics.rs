//! Prometheus metrics endpoint for the order service.
//!
//! The order lifecycle counters (`orders_created_total`,
//! `orders_completed_total`, `orders_deleted_total`) are recorded by the
//! domain service; this handler renders whatever the installed recorder
//! has accumulated.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use metrics_exporter_prometheus::PrometheusHandle;

/// GET /metrics — renders the recorded counters in the Prometheus text format.
pub async fn get(State(handle): State<PrometheusHandle>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(
            axum::http::header::CONTENT_TYPE,
            "text/plain; version=0.0.4; charset=utf-8",
        )],
        handle.render(),
    )
}
