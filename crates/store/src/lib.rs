//! Persistence adapters for the `OrderRepository` port.
//!
//! Two implementations are provided:
//! - [`InMemoryOrderRepository`] for tests and local development
//! - [`PostgresOrderRepository`] storing one JSONB document per order

mod memory;
mod postgres;

pub use memory::InMemoryOrderRepository;
pub use postgres::PostgresOrderRepository;

use domain::{Order, OrderRecord, RepositoryError};

/// Rebuilds an aggregate from a stored record, mapping domain-level
/// rehydration failures to a corrupted-record error.
pub(crate) fn rehydrate(record: OrderRecord) -> Result<Order, RepositoryError> {
    let id = record.id.clone();
    Order::from_record(record).map_err(|source| RepositoryError::CorruptedRecord { id, source })
}

#[cfg(test)]
mod tests {
    use super::rehydrate;
    use domain::{DomainError, OrderLineRecord, OrderRecord, RepositoryError};

    fn record(price: f64) -> OrderRecord {
        OrderRecord {
            id: "order-1".to_string(),
            items: vec![OrderLineRecord {
                product_id: "product-1".to_string(),
                quantity: 1.0,
                price,
            }],
            shipping_address: "123 Main St".to_string(),
            status: "Created".to_string(),
            discount_code: None,
        }
    }

    #[test]
    fn rehydrates_a_valid_record() {
        let order = rehydrate(record(10.0)).unwrap();
        assert_eq!(order.id().as_str(), "order-1");
        assert_eq!(order.total().unwrap().value(), 10.0);
    }

    #[test]
    fn maps_value_object_failures_to_a_corrupted_record_error() {
        let err = rehydrate(record(-5.0)).unwrap_err();

        match err {
            RepositoryError::CorruptedRecord { id, source } => {
                assert_eq!(id, "order-1");
                assert_eq!(source, DomainError::NegativeAmount { value: -5.0 });
            }
            other => panic!("expected a corrupted-record error, got {other:?}"),
        }
    }
}
