//! Value objects for the order domain.
//!
//! All constructors are side-effect-free; two instances built from equal
//! inputs are interchangeable.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DomainError;

/// Opaque identifier for an order or a product line.
///
/// Identifiers compare by underlying value, not instance identity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Id(String);

impl Id {
    /// Generates a fresh random identifier.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Parses an identifier from an external string.
    ///
    /// Any non-empty string is accepted.
    pub fn parse(value: impl Into<String>) -> Result<Self, DomainError> {
        let value = value.into();
        if value.is_empty() {
            return Err(DomainError::EmptyIdentifier);
        }
        Ok(Self(value))
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Id {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A numeric quantity that must be finite and >= 0.
///
/// Used for prices, quantities, and totals. Arithmetic re-validates the
/// result as a safety contract even though non-negative operands cannot
/// produce a negative result.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Amount(f64);

impl Amount {
    /// Validates and wraps a raw number.
    pub fn new(value: f64) -> Result<Self, DomainError> {
        if !value.is_finite() {
            return Err(DomainError::NonFiniteAmount { value });
        }
        if value < 0.0 {
            return Err(DomainError::NegativeAmount { value });
        }
        Ok(Self(value))
    }

    /// Returns zero.
    pub fn zero() -> Self {
        Self(0.0)
    }

    /// Returns the underlying number.
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Adds another amount, re-validating the result.
    pub fn add(&self, other: Amount) -> Result<Amount, DomainError> {
        Amount::new(self.0 + other.0)
    }

    /// Multiplies by another amount, re-validating the result.
    pub fn multiply(&self, other: Amount) -> Result<Amount, DomainError> {
        Amount::new(self.0 * other.0)
    }
}

impl std::fmt::Display for Amount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A non-empty, non-whitespace-only shipping address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShippingAddress(String);

impl ShippingAddress {
    /// Validates and wraps an address string.
    pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::EmptyShippingAddress);
        }
        Ok(Self(value))
    }

    /// Returns the address as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ShippingAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single line of an order. Immutable once constructed; owned
/// exclusively by the `Order` that contains it.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderLine {
    /// The product this line refers to.
    pub product_id: Id,

    /// Units ordered.
    pub quantity: Amount,

    /// Price per unit.
    pub price: Amount,
}

impl OrderLine {
    /// Creates a new order line.
    pub fn new(product_id: Id, quantity: Amount, price: Amount) -> Self {
        Self {
            product_id,
            quantity,
            price,
        }
    }

    /// Returns the line subtotal (price * quantity).
    pub fn subtotal(&self) -> Result<Amount, DomainError> {
        self.price.multiply(self.quantity)
    }
}

/// Discount code attached to an order.
///
/// `Discount20` is the only value with a computational effect (20%
/// reduction of the order total). Any other non-empty code is stored
/// verbatim and ignored by the total calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DiscountCode {
    Discount20,
    Other(String),
}

impl DiscountCode {
    /// Parses a raw code string. `"DISCOUNT20"` is the only recognized
    /// value; everything else passes through.
    pub fn new(code: impl Into<String>) -> Self {
        let code = code.into();
        if code == "DISCOUNT20" {
            DiscountCode::Discount20
        } else {
            DiscountCode::Other(code)
        }
    }

    /// Returns the code as a string slice.
    pub fn as_str(&self) -> &str {
        match self {
            DiscountCode::Discount20 => "DISCOUNT20",
            DiscountCode::Other(code) => code,
        }
    }
}

impl From<String> for DiscountCode {
    fn from(code: String) -> Self {
        DiscountCode::new(code)
    }
}

impl From<DiscountCode> for String {
    fn from(code: DiscountCode) -> Self {
        code.as_str().to_string()
    }
}

impl std::fmt::Display for DiscountCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
