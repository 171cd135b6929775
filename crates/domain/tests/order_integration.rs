//! Integration tests for the order use cases.
//!
//! These run the full path through the service and the repository port
//! using the in-memory adapter.

use domain::{
    CreateOrderRequest, DomainError, Order, OrderLineRequest, OrderRepository, OrderService,
    ServiceError, UpdateOrderRequest,
};
use store::InMemoryOrderRepository;

fn request(items: Vec<(f64, f64)>, discount_code: Option<&str>) -> CreateOrderRequest {
    CreateOrderRequest {
        items: items
            .into_iter()
            .enumerate()
            .map(|(i, (quantity, price))| OrderLineRequest {
                product_id: format!("product-{i}"),
                quantity,
                price,
            })
            .collect(),
        shipping_address: "123 Main St".to_string(),
        discount_code: discount_code.map(String::from),
    }
}

#[tokio::test]
async fn full_order_lifecycle() {
    let repo = InMemoryOrderRepository::new();
    let service = OrderService::new(repo.clone());

    // Create
    let confirmation = service
        .create_order(request(vec![(1.0, 100.0)], None))
        .await
        .unwrap();
    assert_eq!(confirmation, "Order created with total: 100");

    let records = service.get_all_orders().await.unwrap();
    assert_eq!(records.len(), 1);
    let id = records[0].id.clone();
    assert_eq!(records[0].status, "Created");

    // Update the address and discount code
    let confirmation = service
        .update_order(
            &id,
            UpdateOrderRequest {
                shipping_address: Some("New Street 456".to_string()),
                discount_code: Some("DISCOUNT20".to_string()),
                status: None,
            },
        )
        .await
        .unwrap();
    assert_eq!(confirmation, "Order updated. New status: Created");

    // Complete
    let confirmation = service.complete_order(&id).await.unwrap();
    assert_eq!(confirmation, format!("Order with id {id} completed"));

    // Delete
    let confirmation = service.delete_order(&id).await.unwrap();
    assert_eq!(confirmation, "Order deleted");
    assert!(service.get_all_orders().await.unwrap().is_empty());
}

#[tokio::test]
async fn updates_survive_a_save_and_reload_through_the_port() {
    let repo = InMemoryOrderRepository::new();
    let service = OrderService::new(repo.clone());

    service
        .create_order(request(vec![(2.0, 10.0), (1.0, 20.0)], Some("DISCOUNT20")))
        .await
        .unwrap();

    let records = service.get_all_orders().await.unwrap();
    let id = domain::Id::parse(records[0].id.clone()).unwrap();

    // Reload through the port directly and verify the aggregate state
    let order: Order = repo.find_by_id(&id).await.unwrap().unwrap();
    assert_eq!(order.total().unwrap().value(), 32.0);
    assert_eq!(order.discount_code().unwrap().as_str(), "DISCOUNT20");
}

#[tokio::test]
async fn repository_ownership_is_last_write_wins() {
    let repo = InMemoryOrderRepository::new();
    let service = OrderService::new(repo.clone());

    service
        .create_order(request(vec![(1.0, 10.0)], None))
        .await
        .unwrap();
    let id = service.get_all_orders().await.unwrap()[0].id.clone();

    // Two successive whole-record updates; the second fully overwrites
    service
        .update_order(
            &id,
            UpdateOrderRequest {
                shipping_address: Some("First Street".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    service
        .update_order(
            &id,
            UpdateOrderRequest {
                shipping_address: Some("Second Street".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    let records = service.get_all_orders().await.unwrap();
    assert_eq!(records[0].shipping_address, "Second Street");
}

#[tokio::test]
async fn domain_errors_pass_through_the_service_unchanged() {
    let service = OrderService::new(InMemoryOrderRepository::new());

    let err = service
        .create_order(request(vec![], None))
        .await
        .unwrap_err();

    match err {
        ServiceError::Domain(domain_err) => assert_eq!(domain_err, DomainError::EmptyOrder),
        other => panic!("expected a domain error, got {other:?}"),
    }
}
