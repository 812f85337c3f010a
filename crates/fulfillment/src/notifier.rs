//! The notification capability shared by invoicing, payment and shipping.

use std::io::{self, Write};

use orderdesk_core::OrderId;
use orderdesk_sales::Order;

/// Which stage of order placement a notifier fills.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum NotificationStep {
    Invoicing,
    Payment,
    Shipping,
}

impl NotificationStep {
    /// Placement order: invoice before payment, payment before shipment.
    pub const SEQUENCE: [NotificationStep; 3] = [
        NotificationStep::Invoicing,
        NotificationStep::Payment,
        NotificationStep::Shipping,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationStep::Invoicing => "invoicing",
            NotificationStep::Payment => "payment",
            NotificationStep::Shipping => "shipping",
        }
    }
}

impl core::fmt::Display for NotificationStep {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A substitutable side effect run for every placed order.
///
/// Implementations report what they did by writing one or more lines to `out`.
/// They hold no per-order state.
pub trait OrderNotifier {
    fn notify(&self, order: &Order, out: &mut dyn Write) -> Result<(), NotificationError>;
}

/// Failure of a notification step.
#[derive(Debug, thiserror::Error)]
pub enum NotificationError {
    /// The downstream system refused the order.
    #[error("{step} rejected order {order_id}: {reason}")]
    Rejected {
        step: NotificationStep,
        order_id: OrderId,
        reason: String,
    },

    /// The notice could not be written.
    #[error("{step} notice could not be written: {source}")]
    Output {
        step: NotificationStep,
        #[source]
        source: io::Error,
    },

    /// The completion line could not be written after every step succeeded.
    #[error("completion notice could not be written: {0}")]
    Acknowledgment(#[source] io::Error),
}

impl NotificationError {
    pub fn rejected(step: NotificationStep, order_id: OrderId, reason: impl Into<String>) -> Self {
        Self::Rejected {
            step,
            order_id,
            reason: reason.into(),
        }
    }

    pub fn output(step: NotificationStep, source: io::Error) -> Self {
        Self::Output { step, source }
    }

    /// The step that failed, if the failure belongs to one.
    pub fn step(&self) -> Option<NotificationStep> {
        match self {
            Self::Rejected { step, .. } | Self::Output { step, .. } => Some(*step),
            Self::Acknowledgment(_) => None,
        }
    }
}

/// Write a single notice line on behalf of `step`.
pub(crate) fn emit(
    out: &mut dyn Write,
    step: NotificationStep,
    line: core::fmt::Arguments<'_>,
) -> Result<(), NotificationError> {
    writeln!(out, "{line}").map_err(|e| NotificationError::output(step, e))
}
