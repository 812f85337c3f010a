//! In-memory order store.

use orderdesk_core::{DomainError, DomainResult, Entity, OrderId};

use crate::order::Order;

/// Ordered, in-memory collection of orders.
///
/// Insertion order is preserved and no two held orders share an id. Not
/// synchronized; a single owner drives it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderStore {
    orders: Vec<Order>,
}

impl OrderStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an order at the end.
    ///
    /// Fails with [`DomainError::DuplicateId`] if an order with the same id is
    /// already held; the store is left untouched in that case.
    pub fn append(&mut self, order: Order) -> DomainResult<()> {
        let id = order.id();
        if self.contains(id) {
            return Err(DomainError::duplicate_id(id));
        }
        self.orders.push(order);
        Ok(())
    }

    /// Remove the order with `id`. Returns whether anything was removed.
    pub fn remove_by_id(&mut self, id: OrderId) -> bool {
        match self.orders.iter().position(|o| o.id() == id) {
            Some(idx) => {
                // `remove` (not `swap_remove`) keeps the remaining orders in place.
                self.orders.remove(idx);
                true
            }
            None => false,
        }
    }

    /// Snapshot of every order, oldest first.
    pub fn list_all(&self) -> &[Order] {
        &self.orders
    }

    pub fn contains(&self, id: OrderId) -> bool {
        self.orders.iter().any(|o| o.id() == id)
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }
}
