use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use domain::{Id, Order, OrderRecord, OrderRepository, RepositoryError};

use crate::rehydrate;

/// In-memory order repository for tests and local development.
///
/// Stores the flat record form keyed by order id, the same shape the
/// PostgreSQL implementation persists.
#[derive(Clone, Default)]
pub struct InMemoryOrderRepository {
    orders: Arc<RwLock<HashMap<String, OrderRecord>>>,
}

impl InMemoryOrderRepository {
    /// Creates a new empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored orders.
    pub async fn order_count(&self) -> usize {
        self.orders.read().await.len()
    }

    /// Removes all stored orders.
    pub async fn clear(&self) {
        self.orders.write().await.clear();
    }
}

#[async_trait]
impl OrderRepository for InMemoryOrderRepository {
    async fn find_all(&self) -> Result<Vec<Order>, RepositoryError> {
        let orders = self.orders.read().await;
        orders.values().cloned().map(rehydrate).collect()
    }

    async fn find_by_id(&self, id: &Id) -> Result<Option<Order>, RepositoryError> {
        let orders = self.orders.read().await;
        orders.get(id.as_str()).cloned().map(rehydrate).transpose()
    }

    async fn save(&self, order: &Order) -> Result<(), RepositoryError> {
        let record = order.to_record();
        self.orders
            .write()
            .await
            .insert(record.id.clone(), record);
        Ok(())
    }

    async fn delete(&self, id: &Id) -> Result<(), RepositoryError> {
        self.orders.write().await.remove(id.as_str());
        Ok(())
    }
}
