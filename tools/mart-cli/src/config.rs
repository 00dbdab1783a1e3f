//! CLI configuration.

use std::path::PathBuf;

use anyhow::{Context, Result};
use mart_commerce::Currency;
use serde::{Deserialize, Serialize};

/// CLI configuration file (`mart.toml`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MartConfig {
    /// Path of the store document holding the persisted cart and orders.
    #[serde(default = "default_store_path")]
    pub store_path: PathBuf,

    /// Catalog currency code.
    #[serde(default = "default_currency")]
    pub currency: String,

    /// Products shown per listing page.
    #[serde(default = "default_page_size")]
    pub page_size: i64,
}

impl MartConfig {
    /// Load config from a TOML file.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;
        toml::from_str(&content).with_context(|| format!("Failed to parse config: {}", path))
    }

    /// The configured currency, defaulting to INR on an unknown code.
    pub fn currency(&self) -> Currency {
        Currency::from_code(&self.currency).unwrap_or(Currency::INR)
    }
}

impl Default for MartConfig {
    fn default() -> Self {
        Self {
            store_path: default_store_path(),
            currency: default_currency(),
            page_size: default_page_size(),
        }
    }
}

fn default_store_path() -> PathBuf {
    if let Some(home) = std::env::var_os("HOME") {
        PathBuf::from(home).join(".quickmart").join("store.json")
    } else {
        PathBuf::from(".quickmart").join("store.json")
    }
}

fn default_currency() -> String {
    "INR".to_string()
}

fn default_page_size() -> i64 {
    12
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_fill_missing_fields() {
        let config: MartConfig = toml::from_str("").unwrap();
        assert_eq!(config.currency(), Currency::INR);
        assert_eq!(config.page_size, 12);
    }

    #[test]
    fn partial_config_overrides_only_what_it_names() {
        let config: MartConfig = toml::from_str("page_size = 6").unwrap();
        assert_eq!(config.page_size, 6);
        assert_eq!(config.currency, "INR");
    }

    #[test]
    fn unknown_currency_code_falls_back_to_inr() {
        let config: MartConfig = toml::from_str("currency = \"XYZ\"").unwrap();
        assert_eq!(config.currency(), Currency::INR);
    }

    #[test]
    fn load_missing_file_is_an_error() {
        let err = MartConfig::load("/no/such/mart.toml").unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }
}
