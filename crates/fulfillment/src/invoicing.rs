//! Simulated invoicing.

use std::io::Write;

use orderdesk_sales::Order;

use crate::notifier::{NotificationError, NotificationStep, OrderNotifier, emit};

/// Announces an invoice for every order.
#[derive(Debug, Default, Clone, Copy)]
pub struct InvoiceNotifier;

impl InvoiceNotifier {
    pub fn new() -> Self {
        Self
    }
}

impl OrderNotifier for InvoiceNotifier {
    fn notify(&self, order: &Order, out: &mut dyn Write) -> Result<(), NotificationError> {
        emit(
            out,
            NotificationStep::Invoicing,
            format_args!("Invoice generated for {}", order.product_name()),
        )
    }
}
