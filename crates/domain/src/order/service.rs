//! Application service implementing the order business operations.
//!
//! One method per operation, each taking plain request data and talking to
//! the repository port. This is the entire surface the HTTP layer may call.

use serde::Deserialize;

use crate::error::{DomainError, ServiceError};
use crate::repository::OrderRepository;

use super::aggregate::Order;
use super::record::OrderRecord;
use super::status::OrderStatus;
use super::value_objects::{Amount, DiscountCode, Id, OrderLine, ShippingAddress};

/// Request data for creating an order.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    pub items: Vec<OrderLineRequest>,
    pub shipping_address: String,
    #[serde(default)]
    pub discount_code: Option<String>,
}

/// One input line of a create request.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderLineRequest {
    pub product_id: String,
    pub quantity: f64,
    pub price: f64,
}

/// Request data for updating an order.
///
/// `None` means the field was not supplied and is left untouched; `Some`
/// always applies, so a supplied empty shipping address fails validation
/// instead of being silently skipped.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateOrderRequest {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub shipping_address: Option<String>,
    #[serde(default)]
    pub discount_code: Option<String>,
}

/// Service for managing orders.
///
/// Orchestrates the repository port and the aggregate to implement each
/// business operation. The repository is injected at construction; there
/// is no process-wide handle.
pub struct OrderService<R: OrderRepository> {
    repo: R,
}

impl<R: OrderRepository> OrderService<R> {
    /// Creates a new order service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Creates an order from raw request data and persists it.
    #[tracing::instrument(skip(self, request))]
    pub async fn create_order(&self, request: CreateOrderRequest) -> Result<String, ServiceError> {
        let lines = request
            .items
            .into_iter()
            .map(|item| {
                Ok(OrderLine::new(
                    Id::parse(item.product_id)?,
                    Amount::new(item.quantity)?,
                    Amount::new(item.price)?,
                ))
            })
            .collect::<Result<Vec<_>, DomainError>>()?;

        let order = Order::create(
            lines,
            ShippingAddress::new(request.shipping_address)?,
            request.discount_code.map(DiscountCode::new),
        )?;
        let total = order.total()?;

        self.repo.save(&order).await?;

        metrics::counter!("orders_created_total").increment(1);
        tracing::info!(order_id = %order.id(), %total, "order created");

        Ok(format!("Order created with total: {total}"))
    }

    /// Applies each supplied field of an update request to an existing
    /// order and persists it.
    #[tracing::instrument(skip(self, request))]
    pub async fn update_order(
        &self,
        id: &str,
        request: UpdateOrderRequest,
    ) -> Result<String, ServiceError> {
        let id = Id::parse(id)?;
        let mut order = self
            .repo
            .find_by_id(&id)
            .await?
            .ok_or(DomainError::OrderNotFound)?;

        if let Some(address) = request.shipping_address {
            order.update_shipping_address(ShippingAddress::new(address)?);
        }
        if let Some(status) = request.status {
            order.force_status(OrderStatus::new(status));
        }
        if let Some(code) = request.discount_code {
            order.update_discount_code(DiscountCode::new(code));
        }

        self.repo.save(&order).await?;

        tracing::info!(order_id = %order.id(), status = %order.status(), "order updated");

        Ok(format!("Order updated. New status: {}", order.status()))
    }

    /// Returns the flat representation of every stored order.
    #[tracing::instrument(skip(self))]
    pub async fn get_all_orders(&self) -> Result<Vec<OrderRecord>, ServiceError> {
        let orders = self.repo.find_all().await?;
        Ok(orders.iter().map(Order::to_record).collect())
    }

    /// Runs the guarded `Created -> Completed` transition and persists it.
    #[tracing::instrument(skip(self))]
    pub async fn complete_order(&self, id: &str) -> Result<String, ServiceError> {
        let id = Id::parse(id)?;
        let mut order = self
            .repo
            .find_by_id(&id)
            .await?
            .ok_or(DomainError::OrderNotFoundForCompletion)?;

        order.complete()?;
        self.repo.save(&order).await?;

        metrics::counter!("orders_completed_total").increment(1);
        tracing::info!(order_id = %order.id(), "order completed");

        Ok(format!("Order with id {} completed", order.id()))
    }

    /// Deletes an existing order.
    #[tracing::instrument(skip(self))]
    pub async fn delete_order(&self, id: &str) -> Result<String, ServiceError> {
        let id = Id::parse(id)?;
        if self.repo.find_by_id(&id).await?.is_none() {
            return Err(DomainError::OrderNotFound.into());
        }

        self.repo.delete(&id).await?;

        metrics::counter!("orders_deleted_total").increment(1);
        tracing::info!(order_id = %id, "order deleted");

        Ok("Order deleted".to_string())
    }
}
