//! # CLI Configuration
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     FAWRY_SHIPPING_FEE_CENTS=3000                                      │
//! │     FAWRY_LOG=debug                                                    │
//! │                                                                         │
//! │  2. TOML Config File (--config path)                                   │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     flat shipping fee 30.00, log level "info"                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! [checkout]
//! shipping_fee = 3000  # cents
//!
//! [logging]
//! level = "info"       # any tracing EnvFilter directive
//! ```

use std::env;
use std::path::Path;

use fawry_core::{CheckoutPolicy, Money, ValidationError};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

pub const ENV_SHIPPING_FEE_CENTS: &str = "FAWRY_SHIPPING_FEE_CENTS";
pub const ENV_LOG: &str = "FAWRY_LOG";

/// Logging section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default filter when `RUST_LOG` is unset.
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            level: "info".to_string(),
        }
    }
}

/// Full application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub checkout: CheckoutPolicy,
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Loads config: file (if given), then environment overrides, then
    /// validation.
    pub fn load(config_path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match config_path {
            Some(path) => {
                let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
                    path: path.display().to_string(),
                    source,
                })?;
                Self::from_toml(&contents)?
            }
            None => Self::default(),
        };

        config.apply_overrides(|key| env::var(key).ok())?;
        config.validate()?;

        Ok(config)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }

    /// Applies `FAWRY_*` overrides. `lookup` is `env::var` in production.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(raw) = lookup(ENV_SHIPPING_FEE_CENTS) {
            let cents: i64 = raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidValue(ENV_SHIPPING_FEE_CENTS.to_string()))?;
            debug!(cents, "Shipping fee overridden from environment");
            self.checkout.shipping_fee = Money::from_cents(cents);
        }

        if let Some(level) = lookup(ENV_LOG) {
            self.logging.level = level;
        }

        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.checkout.validate()?;

        self.log_filter()?;

        Ok(())
    }

    /// Parses `logging.level` as a tracing filter directive.
    pub fn log_filter(&self) -> Result<EnvFilter, ConfigError> {
        let level = self.logging.level.trim();
        if level.is_empty() {
            return Err(ConfigError::InvalidValue("logging.level".to_string()));
        }

        EnvFilter::try_new(level)
            .map_err(|_| ConfigError::InvalidValue("logging.level".to_string()))
    }

    pub fn log_summary(&self) {
        info!(
            shipping_fee = %self.checkout.shipping_fee,
            log_level = %self.logging.level,
            "Configuration loaded"
        );
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid value for {0}")]
    InvalidValue(String),

    #[error("Invalid configuration: {0}")]
    Validation(#[from] ValidationError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.checkout.shipping_fee, Money::from_units(30));
        assert_eq!(config.logging.level, "info");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_toml() {
        let config = AppConfig::from_toml(
            r#"
            [checkout]
            shipping_fee = 4500

            [logging]
            level = "debug"
            "#,
        )
        .unwrap();
        assert_eq!(config.checkout.shipping_fee, Money::from_cents(4500));
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = AppConfig::from_toml("[logging]\nlevel = \"warn\"\n").unwrap();
        assert_eq!(config.checkout.shipping_fee, Money::from_units(30));
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn test_bad_toml() {
        let err = AppConfig::from_toml("[checkout]\nshipping_fee = \"lots\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_env_overrides() {
        let mut config = AppConfig::default();
        config
            .apply_overrides(lookup(&[(ENV_SHIPPING_FEE_CENTS, "1000"), (ENV_LOG, "trace")]))
            .unwrap();
        assert_eq!(config.checkout.shipping_fee, Money::from_units(10));
        assert_eq!(config.logging.level, "trace");
    }

    #[test]
    fn test_env_override_must_parse() {
        let mut config = AppConfig::default();
        let err = config
            .apply_overrides(lookup(&[(ENV_SHIPPING_FEE_CENTS, "thirty")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue(_)));
    }

    #[test]
    fn test_negative_fee_rejected() {
        let mut config = AppConfig::default();
        config
            .apply_overrides(lookup(&[(ENV_SHIPPING_FEE_CENTS, "-1")]))
            .unwrap();
        assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
    }

    #[test]
    fn test_log_directive_must_parse() {
        let mut config = AppConfig::default();
        config.apply_overrides(lookup(&[(ENV_LOG, "???")])).unwrap();

        let err = config.validate().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue(ref field) if field == "logging.level"));

        config.logging.level = "  ".to_string();
        assert!(matches!(config.validate(), Err(ConfigError::InvalidValue(_))));
    }

    #[test]
    fn test_log_directive_with_targets() {
        let mut config = AppConfig::default();
        config
            .apply_overrides(lookup(&[(ENV_LOG, "warn,fawry_core=debug")]))
            .unwrap();
        assert!(config.validate().is_ok());
        assert!(config.log_filter().is_ok());
    }

    #[test]
    fn test_missing_file() {
        let err = AppConfig::load(Some(Path::new("/nonexistent/fawry.toml"))).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}
