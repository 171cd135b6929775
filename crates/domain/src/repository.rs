//! Persistence port for order aggregates.

use async_trait::async_trait;
use thiserror::Error;

use crate::error::DomainError;
use crate::order::{Id, Order};

/// Errors raised by repository implementations.
///
/// These are infrastructure failures, not business-rule violations; the
/// HTTP boundary maps them to opaque 500 responses.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The storage backend failed (connection, query, serialization).
    #[error("storage backend failure: {0}")]
    Backend(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// A persisted record could not be rehydrated into an aggregate.
    #[error("stored order {id} is corrupted: {source}")]
    CorruptedRecord {
        id: String,
        #[source]
        source: DomainError,
    },
}

impl RepositoryError {
    /// Wraps an arbitrary backend error.
    pub fn backend(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Backend(Box::new(err))
    }
}

/// Abstract persistence contract the use-case layer depends on.
///
/// Concrete adapters live outside the domain crate. All implementations
/// must be thread-safe (Send + Sync).
#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Returns every stored order. Result ordering is implementation-defined.
    async fn find_all(&self) -> Result<Vec<Order>, RepositoryError>;

    /// Returns the order with the given id, or `None` if no record matches.
    ///
    /// Absence is not an error; existence checks belong to the caller.
    async fn find_by_id(&self, id: &Id) -> Result<Option<Order>, RepositoryError>;

    /// Upserts an order keyed by its id: creates if absent, fully
    /// overwrites if present.
    async fn save(&self, order: &Order) -> Result<(), RepositoryError>;

    /// Removes the matching record. Silent success if absent.
    async fn delete(&self, id: &Id) -> Result<(), RepositoryError>;
}
