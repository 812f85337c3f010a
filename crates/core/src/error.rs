//! Domain error model.

use thiserror::Error;

use crate::id::OrderId;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic, business/domain failures (validation,
/// invariants). Terminal and notification failures belong elsewhere.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. a blank product name or a non-positive price).
    #[error("validation failed: {0}")]
    Validation(String),

    /// An identifier could not be parsed.
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// An order with this identifier is already held by the store.
    ///
    /// Ids come from a monotonic generator, so this is an invariant violation
    /// rather than a user error.
    #[error("duplicate order id: {0}")]
    DuplicateId(OrderId),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn duplicate_id(id: OrderId) -> Self {
        Self::DuplicateId(id)
    }

    /// Whether the error signals a broken program invariant rather than bad input.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::DuplicateId(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_duplicate_id_is_fatal() {
        assert!(DomainError::duplicate_id(OrderId::new(3)).is_fatal());
        assert!(!DomainError::validation("price must be positive").is_fatal());
        assert!(!DomainError::invalid_id("abc").is_fatal());
    }

    #[test]
    fn messages_carry_context() {
        assert_eq!(
            DomainError::duplicate_id(OrderId::new(7)).to_string(),
            "duplicate order id: 7"
        );
        assert_eq!(
            DomainError::validation("empty name").to_string(),
            "validation failed: empty name"
        );
    }
}
