//! # Configuration State
//!
//! Storefront configuration loaded once at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`PETSHOP_*`)
//! 2. Config file (TOML, path from `PETSHOP_CONFIG`)
//! 3. Defaults (this file)
//!
//! ## Thread Safety
//! Configuration is read-only after initialization, so no mutex needed.

use std::path::{Path, PathBuf};
use std::time::Duration;

use petshop_core::{Money, DEFAULT_PAGE_SIZE, DEFAULT_SEARCH_DEBOUNCE_MS};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, warn};

/// Errors while loading the config file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Storefront configuration.
///
/// Every field has a default, so a config file only needs the keys it
/// changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StorefrontConfig {
    /// Shown in the shell banner and the thank-you message
    pub store_name: String,

    /// Currency symbol (for display)
    pub currency_symbol: String,

    /// Number of decimal places for currency
    pub currency_decimals: u8,

    /// Quiescence window for search boxes, in milliseconds
    pub search_debounce_ms: u64,

    /// Rows per page in the admin table
    pub page_size: usize,

    /// How long toast notices stay up, in milliseconds
    pub notice_lifetime_ms: u64,

    /// JSON catalog to load instead of the built-in demo data
    pub seed_path: Option<PathBuf>,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        StorefrontConfig {
            store_name: "Petshop".to_string(),
            currency_symbol: "$".to_string(),
            currency_decimals: 2,
            search_debounce_ms: DEFAULT_SEARCH_DEBOUNCE_MS,
            page_size: DEFAULT_PAGE_SIZE,
            notice_lifetime_ms: 2000,
            seed_path: None,
        }
    }
}

impl StorefrontConfig {
    /// Loads defaults, then `path` if given, then the environment.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => StorefrontConfig::default(),
        };
        config.apply_env(|key| std::env::var(key).ok());
        Ok(config)
    }

    /// Reads a TOML config file on top of the defaults.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        info!(path = %path.display(), "Loaded config file");
        Ok(config)
    }

    pub fn from_toml(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// Overlays `PETSHOP_*` variables using `lookup`.
    ///
    /// ## Environment Variables
    /// - `PETSHOP_STORE_NAME`
    /// - `PETSHOP_CURRENCY_SYMBOL`
    /// - `PETSHOP_SEARCH_DEBOUNCE_MS`
    /// - `PETSHOP_PAGE_SIZE`
    /// - `PETSHOP_SEED_PATH`
    ///
    /// Numbers that don't parse are ignored.
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(name) = lookup("PETSHOP_STORE_NAME") {
            self.store_name = name;
        }

        if let Some(symbol) = lookup("PETSHOP_CURRENCY_SYMBOL") {
            self.currency_symbol = symbol;
        }

        if let Some(raw) = lookup("PETSHOP_SEARCH_DEBOUNCE_MS") {
            match raw.parse() {
                Ok(ms) => self.search_debounce_ms = ms,
                Err(_) => warn!(value = %raw, "Ignoring PETSHOP_SEARCH_DEBOUNCE_MS"),
            }
        }

        if let Some(raw) = lookup("PETSHOP_PAGE_SIZE") {
            match raw.parse::<usize>() {
                Ok(size) if size > 0 => self.page_size = size,
                _ => warn!(value = %raw, "Ignoring PETSHOP_PAGE_SIZE"),
            }
        }

        if let Some(path) = lookup("PETSHOP_SEED_PATH") {
            self.seed_path = Some(PathBuf::from(path));
        }
    }

    pub fn search_debounce(&self) -> Duration {
        Duration::from_millis(self.search_debounce_ms)
    }

    /// Formats an amount with the configured symbol and decimals.
    ///
    /// ## Example
    /// ```rust,ignore
    /// let config = StorefrontConfig::default();
    /// assert_eq!(config.format_currency(Money::from_cents(1234)), "$12.34");
    /// ```
    pub fn format_currency(&self, amount: Money) -> String {
        let cents = amount.cents();
        let sign = if cents < 0 { "-" } else { "" };
        let cents = cents.unsigned_abs();

        // Money is stored in hundredths; rescale for other precisions
        let text = match self.currency_decimals {
            0 => ((cents + 50) / 100).to_string(),
            1 => {
                let tenths = (cents + 5) / 10;
                format!("{}.{}", tenths / 10, tenths % 10)
            }
            d => {
                let extra = "0".repeat(d as usize - 2);
                format!("{}.{:02}{}", cents / 100, cents % 100, extra)
            }
        };

        format!("{}{}{}", sign, self.currency_symbol, text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = StorefrontConfig::default();
        assert_eq!(config.search_debounce(), Duration::from_millis(300));
        assert_eq!(config.page_size, 5);
        assert_eq!(config.notice_lifetime_ms, 2000);
        assert!(config.seed_path.is_none());
    }

    #[test]
    fn test_format_currency() {
        let config = StorefrontConfig::default();
        assert_eq!(config.format_currency(Money::from_cents(1234)), "$12.34");
        assert_eq!(config.format_currency(Money::from_cents(5)), "$0.05");
        assert_eq!(config.format_currency(Money::from_cents(-1234)), "-$12.34");
        assert_eq!(config.format_currency(Money::zero()), "$0.00");
    }

    #[test]
    fn test_format_currency_other_precision() {
        let mut config = StorefrontConfig {
            currency_symbol: "€".to_string(),
            currency_decimals: 0,
            ..Default::default()
        };
        assert_eq!(config.format_currency(Money::from_cents(1250)), "€13");

        config.currency_decimals = 3;
        assert_eq!(config.format_currency(Money::from_cents(1250)), "€12.500");
    }

    #[test]
    fn test_toml_overrides_only_given_keys() {
        let config = StorefrontConfig::from_toml(
            r#"
            storeName = "Paws & Claws"
            pageSize = 10
            "#,
        )
        .unwrap();
        assert_eq!(config.store_name, "Paws & Claws");
        assert_eq!(config.page_size, 10);
        assert_eq!(config.currency_symbol, "$");
    }

    #[test]
    fn test_invalid_toml_is_error() {
        assert!(StorefrontConfig::from_toml("pageSize = \"lots\"").is_err());
    }

    #[test]
    fn test_env_overlay() {
        let mut config = StorefrontConfig::default();
        config.apply_env(env(&[
            ("PETSHOP_STORE_NAME", "Night Owl Pets"),
            ("PETSHOP_SEARCH_DEBOUNCE_MS", "0"),
            ("PETSHOP_PAGE_SIZE", "zero"),
            ("PETSHOP_SEED_PATH", "/srv/seed.json"),
        ]));

        assert_eq!(config.store_name, "Night Owl Pets");
        assert_eq!(config.search_debounce_ms, 0);
        assert_eq!(config.page_size, 5);
        assert_eq!(config.seed_path, Some(PathBuf::from("/srv/seed.json")));
    }

    #[test]
    fn test_missing_file_is_read_error() {
        assert!(matches!(
            StorefrontConfig::from_file(Path::new("/no/such/petshop.toml")),
            Err(ConfigError::Read { .. })
        ));
    }
}
