//! Domain layer for the order management service.
//!
//! This crate provides the core of the system:
//! - Self-validating value objects (`Id`, `Amount`, `ShippingAddress`, `OrderLine`)
//! - The `Order` aggregate enforcing creation and transition invariants
//! - The `OrderRepository` persistence port
//! - The `OrderService` application service implementing each business operation
//!
//! It knows nothing about HTTP or any storage engine; those live in the
//! `api` and `store` crates and talk to this one exclusively through
//! `OrderService` and `OrderRepository`.

pub mod error;
pub mod order;
pub mod repository;

pub use error::{DomainError, ServiceError};
pub use order::{
    Amount, CreateOrderRequest, DiscountCode, Id, Order, OrderLine, OrderLineRecord,
    OrderLineRequest, OrderRecord, OrderService, OrderStatus, ShippingAddress, UpdateOrderRequest,
};
pub use repository::{OrderRepository, RepositoryError};
