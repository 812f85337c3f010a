//! Simulated shipping.

use std::io::Write;

use orderdesk_sales::Order;

use crate::notifier::{NotificationError, NotificationStep, OrderNotifier, emit};

#[derive(Debug, Default, Clone, Copy)]
pub struct ShippingNotifier;

impl ShippingNotifier {
    pub fn new() -> Self {
        Self
    }
}

impl OrderNotifier for ShippingNotifier {
    fn notify(&self, order: &Order, out: &mut dyn Write) -> Result<(), NotificationError> {
        emit(
            out,
            NotificationStep::Shipping,
            format_args!("{} has been shipped.", order.product_name()),
        )
    }
}
