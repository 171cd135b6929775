//! HTTP API server for the order management service.
//!
//! Decodes requests into the plain shapes the `OrderService` accepts,
//! forwards the returned confirmation strings or records, and maps domain
//! errors to 400 responses and everything else to 500, with structured
//! logging (tracing) and Prometheus metrics.

pub mod config;
pub mod error;
pub mod routes;

use std::sync::Arc;

use axum::Router;
use axum::routing::{delete, get, post, put};
use domain::{OrderRepository, OrderService};
use metrics_exporter_prometheus::PrometheusHandle;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use routes::orders::AppState;

/// Creates the Axum application router with all routes and shared state.
pub fn create_app<R: OrderRepository + 'static>(
    state: Arc<AppState<R>>,
    metrics_handle: PrometheusHandle,
) -> Router {
    let metrics_router = Router::new()
        .route("/metrics", get(routes::metrics::get))
        .with_state(metrics_handle);

    Router::new()
        .route("/", get(routes::health::check))
        .route("/orders", post(routes::orders::create::<R>))
        .route("/orders", get(routes::orders::list::<R>))
        .route("/orders/{id}", put(routes::orders::update::<R>))
        .route("/orders/{id}", delete(routes::orders::remove::<R>))
        .route("/orders/{id}/complete", post(routes::orders::complete::<R>))
        .with_state(state)
        .merge(metrics_router)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
}

/// Creates the shared application state around a repository.
///
/// The repository is constructed once at startup and injected here; no
/// component holds a process-wide handle.
pub fn create_state<R: OrderRepository>(repository: R) -> Arc<AppState<R>> {
    Arc::new(AppState {
        orders: OrderService::new(repository),
    })
}
