use serde::{Deserialize, Serialize};

use orderdesk_core::{DomainError, DomainResult, Entity, OrderId};

/// Name of the product an order was placed for. Never blank.
///
/// Deserialization goes through [`ProductName::new`], so a blank name in
/// stored data is an error rather than a value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ProductName(String);

impl ProductName {
    /// Validate and wrap a product name. Surrounding whitespace is dropped.
    pub fn new(name: impl Into<String>) -> DomainResult<Self> {
        let name = name.into();
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(DomainError::validation("product name must not be empty"));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ProductName {
    type Error = DomainError;

    fn try_from(value: String) -> DomainResult<Self> {
        Self::new(value)
    }
}

impl From<ProductName> for String {
    fn from(name: ProductName) -> Self {
        name.0
    }
}

impl core::fmt::Display for ProductName {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Unit price of an order. Always finite and strictly positive.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Price(f64);

impl Price {
    pub fn new(value: f64) -> DomainResult<Self> {
        if !value.is_finite() {
            return Err(DomainError::validation("price must be a finite number"));
        }
        if value <= 0.0 {
            return Err(DomainError::validation("price must be greater than zero"));
        }
        Ok(Self(value))
    }

    /// Parse user input such as `"3.50"`.
    pub fn parse(input: &str) -> DomainResult<Self> {
        let value = input
            .trim()
            .parse::<f64>()
            .map_err(|e| DomainError::validation(format!("price is not a number: {e}")))?;
        Self::new(value)
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for Price {
    type Error = DomainError;

    fn try_from(value: f64) -> DomainResult<Self> {
        Self::new(value)
    }
}

impl From<Price> for f64 {
    fn from(price: Price) -> Self {
        price.0
    }
}

impl core::fmt::Display for Price {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// A single product purchase.
///
/// Orders are immutable: every field is fixed at construction and there are
/// no setters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    id: OrderId,
    product_name: ProductName,
    price: Price,
}

impl Order {
    pub fn new(id: OrderId, product_name: ProductName, price: Price) -> Self {
        Self {
            id,
            product_name,
            price,
        }
    }

    pub fn product_name(&self) -> &ProductName {
        &self.product_name
    }

    pub fn price(&self) -> Price {
        self.price
    }
}

impl Entity for Order {
    type Id = OrderId;

    fn id(&self) -> OrderId {
        self.id
    }
}

/// History line format: `Order 2: Gadget - $19.99`.
impl core::fmt::Display for Order {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "Order {}: {} - ${}",
            self.id, self.product_name, self.price
        )
    }
}
