//! Wiring of the fulfillment services.

use orderdesk_fulfillment::{
    BankTransferPaymentNotifier, CreditCardPaymentNotifier, InvoiceNotifier, OrderNotifier,
    OrderOrchestrator, ShippingNotifier,
};

use crate::config::PaymentMethod;

pub fn payment_notifier(method: PaymentMethod) -> Box<dyn OrderNotifier> {
    match method {
        PaymentMethod::CreditCard => Box::new(CreditCardPaymentNotifier::new()),
        PaymentMethod::BankTransfer => Box::new(BankTransferPaymentNotifier::new()),
    }
}

/// Build the orchestrator with the simulated services and the chosen payment method.
pub fn build_orchestrator(method: PaymentMethod) -> OrderOrchestrator {
    OrderOrchestrator::new(
        Box::new(InvoiceNotifier::new()),
        payment_notifier(method),
        Box::new(ShippingNotifier::new()),
    )
}
