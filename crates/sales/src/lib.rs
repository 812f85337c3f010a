//! Sales orders domain module.
//!
//! Order entities and the in-memory store that holds them, implemented purely
//! as deterministic domain logic (no terminal, no notifications).

pub mod order;
pub mod store;

pub use order::{Order, Price, ProductName};
pub use store::OrderStore;
