//! Domain and service error types.

use thiserror::Error;

use crate::order::OrderStatus;
use crate::repository::RepositoryError;

/// A business-rule violation.
///
/// The HTTP boundary surfaces these messages verbatim in 400 responses,
/// so the `#[error]` strings are part of the public contract.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DomainError {
    /// An order was created with no lines.
    #[error("order must have at least one item")]
    EmptyOrder,

    /// `complete` was called on an order that is not in `Created` status.
    #[error("cannot complete an order with status: {status}")]
    CompletionNotAllowed { status: OrderStatus },

    /// The requested order does not exist.
    #[error("order not found")]
    OrderNotFound,

    /// The order targeted by a complete request does not exist.
    #[error("order not found to complete")]
    OrderNotFoundForCompletion,

    /// A negative value was given for a price, quantity, or total.
    #[error("amount cannot be negative: {value}")]
    NegativeAmount { value: f64 },

    /// A NaN or infinite value was given where a number is required.
    #[error("amount must be a finite number")]
    NonFiniteAmount { value: f64 },

    /// An empty or whitespace-only shipping address.
    #[error("shipping address cannot be empty")]
    EmptyShippingAddress,

    /// An empty identifier string.
    #[error("identifier cannot be empty")]
    EmptyIdentifier,
}

/// Error returned by `OrderService` operations.
///
/// Business-rule violations pass through unchanged so the boundary can map
/// them to client errors; storage faults are kept separate so they map to
/// opaque server errors instead.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
