use std::io;

use orderdesk_core::DomainError;

/// Failures that end an order session.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),

    /// Only invariant violations reach this far; bad input is handled in the loop.
    #[error(transparent)]
    Domain(#[from] DomainError),
}
