//! `orderdesk-cli` — the interactive order desk.
//!
//! Wires the sales store and the fulfillment services into a text menu
//! session. The binary in `main.rs` only reads configuration, sets up logging
//! and hands stdin/stdout to [`App::run`].

pub mod app;
pub mod config;
pub mod console;
pub mod error;
pub mod menu;
pub mod services;

pub use app::App;
pub use config::{AppConfig, ConfigError, PaymentMethod};
pub use console::Console;
pub use error::CliError;
