//! Order status and its lifecycle rules.

use serde::{Deserialize, Serialize};

/// The status of an order in its lifecycle.
///
/// Only the `Created -> Completed` transition is enforced by the
/// aggregate's `complete` operation. Statuses set externally through the
/// direct overwrite path are stored verbatim as `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(from = "String", into = "String")]
pub enum OrderStatus {
    /// Freshly created, the only status from which completion is allowed.
    #[default]
    Created,

    /// Terminal: a completed order can never be completed again.
    Completed,

    /// An externally-set status with no enforced semantics.
    Other(String),
}

impl OrderStatus {
    /// Parses a raw status string.
    pub fn new(status: impl Into<String>) -> Self {
        let status = status.into();
        match status.as_str() {
            "Created" => OrderStatus::Created,
            "Completed" => OrderStatus::Completed,
            _ => OrderStatus::Other(status),
        }
    }

    /// Returns true if the guarded `complete` transition is allowed.
    pub fn can_complete(&self) -> bool {
        matches!(self, OrderStatus::Created)
    }

    /// Returns the status as a string slice.
    pub fn as_str(&self) -> &str {
        match self {
            OrderStatus::Created => "Created",
            OrderStatus::Completed => "Completed",
            OrderStatus::Other(status) => status,
        }
    }
}

impl From<String> for OrderStatus {
    fn from(status: String) -> Self {
        OrderStatus::new(status)
    }
}

impl From<OrderStatus> for String {
    fn from(status: OrderStatus) -> Self {
        status.as_str().to_string()
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
