//! Order placement: runs the notification steps for one order.

use std::io::Write;

use orderdesk_core::Entity;
use orderdesk_sales::Order;

use crate::notifier::{NotificationError, NotificationStep, OrderNotifier};

/// Sequences invoicing, payment and shipping for an order.
///
/// All three notifiers are supplied by the caller; the orchestrator never
/// builds its own, so any of them can be swapped (another payment method, a
/// recording double in tests) without touching this type.
pub struct OrderOrchestrator {
    invoicing: Box<dyn OrderNotifier>,
    payment: Box<dyn OrderNotifier>,
    shipping: Box<dyn OrderNotifier>,
}

impl OrderOrchestrator {
    pub const COMPLETION_NOTICE: &'static str = "Order placed successfully!";

    pub fn new(
        invoicing: Box<dyn OrderNotifier>,
        payment: Box<dyn OrderNotifier>,
        shipping: Box<dyn OrderNotifier>,
    ) -> Self {
        Self {
            invoicing,
            payment,
            shipping,
        }
    }

    /// Place `order`: invoice, then payment, then shipping, then the completion
    /// notice, all written to `out`.
    ///
    /// The first failing step aborts the rest (no shipment without payment) and
    /// its error is returned as-is. There is no retry or compensation here.
    pub fn place_order(&self, order: &Order, out: &mut dyn Write) -> Result<(), NotificationError> {
        let span = tracing::info_span!("place_order", order_id = %order.id());
        let _guard = span.enter();

        for step in NotificationStep::SEQUENCE {
            if let Err(err) = self.notifier(step).notify(order, out) {
                tracing::error!(step = %step, error = %err, "notification failed, aborting placement");
                return Err(err);
            }
            tracing::info!(step = %step, "notification sent");
        }

        writeln!(out, "{}", Self::COMPLETION_NOTICE).map_err(NotificationError::Acknowledgment)?;
        tracing::info!("order placed");
        Ok(())
    }

    fn notifier(&self, step: NotificationStep) -> &dyn OrderNotifier {
        match step {
            NotificationStep::Invoicing => self.invoicing.as_ref(),
            NotificationStep::Payment => self.payment.as_ref(),
            NotificationStep::Shipping => self.shipping.as_ref(),
        }
    }
}

impl core::fmt::Debug for OrderOrchestrator {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("OrderOrchestrator").finish_non_exhaustive()
    }
}
