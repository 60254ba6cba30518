//! # Configuration State
//!
//! Stores application configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`INVOICE_*`)
//! 2. Defaults (this file)
//!
//! ## Thread Safety
//! Configuration is read-only after initialization, so no mutex needed.

use invoice_core::StatusFilter;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ConfigState {
    /// Currency code (ISO 4217)
    pub currency_code: String,

    /// Currency symbol rendered in front of every amount
    pub currency_symbol: String,

    /// Filter the board opens with
    pub default_filter: StatusFilter,
}

impl Default for ConfigState {
    /// USD, `$`, all invoices.
    fn default() -> Self {
        ConfigState {
            currency_code: "USD".to_string(),
            currency_symbol: "$".to_string(),
            default_filter: StatusFilter::All,
        }
    }
}

impl ConfigState {
    /// Creates a new ConfigState from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `INVOICE_CURRENCY_CODE`: Override currency code
    /// - `INVOICE_CURRENCY_SYMBOL`: Override currency symbol
    /// - `INVOICE_DEFAULT_FILTER`: `all`, `paid`, `pending` or `overdue`
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ConfigState::from_env`] with an injectable variable source.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = ConfigState::default();

        if let Some(code) = lookup("INVOICE_CURRENCY_CODE") {
            config.currency_code = code;
        }

        if let Some(symbol) = lookup("INVOICE_CURRENCY_SYMBOL") {
            config.currency_symbol = symbol;
        }

        if let Some(raw) = lookup("INVOICE_DEFAULT_FILTER") {
            match raw.trim().parse::<StatusFilter>() {
                Ok(filter) => config.default_filter = filter,
                Err(e) => warn!(value = %raw, error = %e, "Ignoring INVOICE_DEFAULT_FILTER"),
            }
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ConfigState::from_lookup(|_| None);
        assert_eq!(config, ConfigState::default());
        assert_eq!(config.currency_symbol, "$");
        assert_eq!(config.default_filter, StatusFilter::All);
    }

    #[test]
    fn test_overrides() {
        let config = ConfigState::from_lookup(lookup_from(&[
            ("INVOICE_CURRENCY_CODE", "EUR"),
            ("INVOICE_CURRENCY_SYMBOL", "€"),
            ("INVOICE_DEFAULT_FILTER", "overdue"),
        ]));
        assert_eq!(config.currency_code, "EUR");
        assert_eq!(config.currency_symbol, "€");
        assert_eq!(config.default_filter, StatusFilter::Overdue);
    }

    #[test]
    fn test_unknown_default_filter_is_ignored() {
        let config = ConfigState::from_lookup(lookup_from(&[("INVOICE_DEFAULT_FILTER", "void")]));
        assert_eq!(config.default_filter, StatusFilter::All);
    }
}
