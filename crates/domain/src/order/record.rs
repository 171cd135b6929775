//! Flat representation of an order.
//!
//! This is the only shape exchanged with the repository port and the HTTP
//! layer: plain values, no value-object types. Field names follow the
//! persisted document format.

use serde::{Deserialize, Serialize};

/// Persisted/transport form of an order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRecord {
    pub id: String,
    pub items: Vec<OrderLineRecord>,
    pub shipping_address: String,
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount_code: Option<String>,
}

/// Persisted/transport form of a single order line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderLineRecord {
    pub product_id: String,
    pub quantity: f64,
    pub price: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_camel_case_keys() {
        let record = OrderRecord {
            id: "order-1".to_string(),
            items: vec![OrderLineRecord {
                product_id: "product-1".to_string(),
                quantity: 2.0,
                price: 10.0,
            }],
            shipping_address: "123 Main St".to_string(),
            status: "Created".to_string(),
            discount_code: None,
        };

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["shippingAddress"], "123 Main St");
        assert_eq!(json["items"][0]["productId"], "product-1");
        assert!(json.get("discountCode").is_none());
    }

    #[test]
    fn deserializes_without_discount_code() {
        let json = r#"{
            "id": "order-1",
            "items": [{"productId": "p", "quantity": 1, "price": 5}],
            "shippingAddress": "somewhere",
            "status": "Created"
        }"#;

        let record: OrderRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.discount_code, None);
        assert_eq!(record.items[0].price, 5.0);
    }
}
