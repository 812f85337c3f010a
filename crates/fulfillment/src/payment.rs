//! Simulated payment methods.
//!
//! Both notifiers fill the payment step; which one runs is decided when the
//! orchestrator is wired up.

use std::io::Write;

use orderdesk_sales::Order;

use crate::notifier::{NotificationError, NotificationStep, OrderNotifier, emit};

/// Charges the order to a credit card.
#[derive(Debug, Default, Clone, Copy)]
pub struct CreditCardPaymentNotifier;

impl CreditCardPaymentNotifier {
    pub fn new() -> Self {
        Self
    }
}

impl OrderNotifier for CreditCardPaymentNotifier {
    fn notify(&self, order: &Order, out: &mut dyn Write) -> Result<(), NotificationError> {
        emit(
            out,
            NotificationStep::Payment,
            format_args!(
                "Payment of ${} processed for {}",
                order.price(),
                order.product_name()
            ),
        )
    }
}

/// Requests a bank transfer for the order amount.
#[derive(Debug, Default, Clone, Copy)]
pub struct BankTransferPaymentNotifier;

impl BankTransferPaymentNotifier {
    pub fn new() -> Self {
        Self
    }
}

impl OrderNotifier for BankTransferPaymentNotifier {
    fn notify(&self, order: &Order, out: &mut dyn Write) -> Result<(), NotificationError> {
        emit(
            out,
            NotificationStep::Payment,
            format_args!(
                "Bank transfer of ${} requested for {}",
                order.price(),
                order.product_name()
            ),
        )
    }
}
