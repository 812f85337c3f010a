//! Fulfillment services (invoicing, payment, shipping) and the orchestrator
//! that runs them for a placed order.
//!
//! The services here are simulations: each one writes a notice describing what
//! a real integration would have done.

pub mod invoicing;
pub mod notifier;
pub mod orchestrator;
pub mod payment;
pub mod shipping;

pub use invoicing::InvoiceNotifier;
pub use notifier::{NotificationError, NotificationStep, OrderNotifier};
pub use orchestrator::OrderOrchestrator;
pub use payment::{BankTransferPaymentNotifier, CreditCardPaymentNotifier};
pub use shipping::ShippingNotifier;
