//! Strongly-typed identifiers used across the domain.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Identifier of an order.
///
/// Sequential within a run (1, 2, 3, ...) and never reused, even after the
/// order it named has been deleted.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(u64);

impl OrderId {
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl core::fmt::Display for OrderId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl From<u64> for OrderId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl From<OrderId> for u64 {
    fn from(value: OrderId) -> Self {
        value.0
    }
}

impl FromStr for OrderId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s
            .trim()
            .parse::<u64>()
            .map_err(|e| DomainError::invalid_id(format!("OrderId: {e}")))?;
        Ok(Self(value))
    }
}

/// Hands out order identifiers, starting at 1.
///
/// Owned by whoever creates orders; there is no process-wide counter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderIdGenerator {
    next: u64,
}

impl OrderIdGenerator {
    pub const FIRST: u64 = 1;

    pub fn new() -> Self {
        Self { next: Self::FIRST }
    }

    /// The id the next call to [`Self::next_id`] will return.
    pub fn peek(&self) -> OrderId {
        OrderId(self.next)
    }

    /// Take the next id and advance the counter.
    pub fn next_id(&mut self) -> OrderId {
        let id = OrderId(self.next);
        self.next += 1;
        id
    }
}

impl Default for OrderIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}
