//! Order endpoints.
//!
//! Handlers only decode requests, call one use-case method, and forward
//! the result; all business rules live behind `OrderService`.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use domain::{CreateOrderRequest, OrderRecord, OrderRepository, OrderService, UpdateOrderRequest};

use crate::error::ApiError;

/// Shared application state accessible from all handlers.
pub struct AppState<R: OrderRepository> {
    pub orders: OrderService<R>,
}

/// POST /orders — create a new order.
#[tracing::instrument(skip(state, req))]
pub async fn create<R: OrderRepository>(
    State(state): State<Arc<AppState<R>>>,
    Json(req): Json<CreateOrderRequest>,
) -> Result<String, ApiError> {
    Ok(state.orders.create_order(req).await?)
}

/// GET /orders — list all orders in their flat representation.
#[tracing::instrument(skip(state))]
pub async fn list<R: OrderRepository>(
    State(state): State<Arc<AppState<R>>>,
) -> Result<Json<Vec<OrderRecord>>, ApiError> {
    Ok(Json(state.orders.get_all_orders().await?))
}

/// PUT /orders/:id — replace the supplied fields of an order.
#[tracing::instrument(skip(state, req))]
pub async fn update<R: OrderRepository>(
    State(state): State<Arc<AppState<R>>>,
    Path(id): Path<String>,
    Json(req): Json<UpdateOrderRequest>,
) -> Result<String, ApiError> {
    Ok(state.orders.update_order(&id, req).await?)
}

/// POST /orders/:id/complete — run the guarded completion transition.
#[tracing::instrument(skip(state))]
pub async fn complete<R: OrderRepository>(
    State(state): State<Arc<AppState<R>>>,
    Path(id): Path<String>,
) -> Result<String, ApiError> {
    Ok(state.orders.complete_order(&id).await?)
}

/// DELETE /orders/:id — delete an order.
#[tracing::instrument(skip(state))]
pub async fn remove<R: OrderRepository>(
    State(state): State<Arc<AppState<R>>>,
    Path(id): Path<String>,
) -> Result<String, ApiError> {
    Ok(state.orders.delete_order(&id).await?)
}
