//! Runtime configuration, read from `ORDERDESK_*` environment variables.

use core::str::FromStr;

use orderdesk_observability::LogFormat;

pub const LOG_FORMAT_VAR: &str = "ORDERDESK_LOG_FORMAT";
pub const PAYMENT_METHOD_VAR: &str = "ORDERDESK_PAYMENT_METHOD";
pub const PAUSE_ON_EXIT_VAR: &str = "ORDERDESK_PAUSE_ON_EXIT";

/// Which payment service is wired into the orchestrator.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum PaymentMethod {
    #[default]
    CreditCard,
    BankTransfer,
}

impl PaymentMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::CreditCard => "credit_card",
            PaymentMethod::BankTransfer => "bank_transfer",
        }
    }
}

impl core::fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaymentMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "credit_card" | "card" => Ok(PaymentMethod::CreditCard),
            "bank_transfer" | "bank" => Ok(PaymentMethod::BankTransfer),
            other => Err(format!(
                "unknown payment method '{other}' (expected credit_card or bank_transfer)"
            )),
        }
    }
}

#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var}: {message}")]
    Invalid { var: &'static str, message: String },
}

impl ConfigError {
    fn invalid(var: &'static str, message: impl Into<String>) -> Self {
        Self::Invalid {
            var,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub log_format: LogFormat,
    pub payment_method: PaymentMethod,
    /// Wait for one more line after the farewell before exiting.
    pub pause_on_exit: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_format: LogFormat::Pretty,
            payment_method: PaymentMethod::CreditCard,
            pause_on_exit: true,
        }
    }
}

impl AppConfig {
    /// Read configuration from the process environment. Unset variables keep
    /// their defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through `lookup` (a variable name to value mapping).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(raw) = lookup(LOG_FORMAT_VAR) {
            config.log_format = raw
                .parse()
                .map_err(|msg: String| ConfigError::invalid(LOG_FORMAT_VAR, msg))?;
        }
        if let Some(raw) = lookup(PAYMENT_METHOD_VAR) {
            config.payment_method = raw
                .parse()
                .map_err(|msg: String| ConfigError::invalid(PAYMENT_METHOD_VAR, msg))?;
        }
        if let Some(raw) = lookup(PAUSE_ON_EXIT_VAR) {
            config.pause_on_exit = parse_flag(&raw)
                .ok_or_else(|| ConfigError::invalid(PAUSE_ON_EXIT_VAR, format!("not a boolean: '{raw}'")))?;
        }

        Ok(config)
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
