//! Order aggregate and related types.

mod aggregate;
mod record;
mod service;
mod status;
mod value_objects;

pub use aggregate::Order;
pub use record::{OrderLineRecord, OrderRecord};
pub use service::{CreateOrderRequest, OrderLineRequest, OrderService, UpdateOrderRequest};
pub use status::OrderStatus;
pub use value_objects::{Amount, DiscountCode, Id, OrderLine, ShippingAddress};
