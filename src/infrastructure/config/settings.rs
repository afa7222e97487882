//! Application configuration loading and validation.
//!
//! Provides the main [`Config`] struct that aggregates all application settings.
//! Configuration is loaded from a TOML file; every section is optional.
//!
//! # Example
//!
//! ```no_run
//! use evetrade::infrastructure::config::settings::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("config.toml")?;
//!     config.init_logging();
//!     Ok(())
//! }
//! ```

use std::path::Path;

use serde::Deserialize;

use super::logging::LoggingConfig;
use super::market::{MarketConfig, STANDING_LIMIT};
use super::names::NamesConfig;
use crate::error::{ConfigError, Result};

/// Main application configuration.
///
/// Load from a TOML file using [`Config::load`] or parse directly with
/// [`Config::parse_toml`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Logging and tracing configuration.
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Market snapshot and fill settings.
    #[serde(default)]
    pub market: MarketConfig,

    /// Generic name cache settings.
    #[serde(default)]
    pub names: NamesConfig,
}

impl Config {
    /// Parse configuration from TOML content.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML content is malformed or validation fails.
    pub fn parse_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be read
    /// - The TOML content is malformed
    /// - Validation fails
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_toml(&content)
    }

    /// Initialize logging from the `[logging]` section.
    pub fn init_logging(&self) {
        self.logging.init();
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<()> {
        if self.market.snapshot.as_os_str().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "snapshot",
                reason: "must not be empty".to_string(),
            }
            .into());
        }
        if !self.market.corp_standing.is_finite()
            || self.market.corp_standing.abs() > STANDING_LIMIT
        {
            return Err(ConfigError::InvalidValue {
                field: "corp_standing",
                reason: format!("must be between -{STANDING_LIMIT} and {STANDING_LIMIT}"),
            }
            .into());
        }
        if self.logging.level.trim().is_empty() {
            return Err(ConfigError::MissingField { field: "level" }.into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn empty_file_uses_defaults() {
        let config = Config::parse_toml("").unwrap();

        assert_eq!(config.logging.level, "warn");
        assert_eq!(config.market.snapshot, Path::new("market.json"));
        assert!(config.market.require_volume);
        assert!(!config.market.ignore_min_volume);
        assert!(config.names.cache_file.is_none());
    }

    #[test]
    fn reads_market_section() {
        let config = Config::parse_toml(
            r#"
            [market]
            snapshot = "data/jita.json"
            corp_standing = 4.5
            require_volume = false
            ignore_min_volume = true
            "#,
        )
        .unwrap();

        assert_eq!(config.market.snapshot, Path::new("data/jita.json"));
        assert_eq!(config.market.corp_standing, 4.5);
        let options = config.market.fill_options();
        assert!(!options.require_volume);
        assert!(options.ignore_min_volume);
    }

    #[test]
    fn rejects_out_of_range_standing() {
        let result = Config::parse_toml("[market]\ncorp_standing = 10.5\n");
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::InvalidValue {
                field: "corp_standing",
                ..
            }))
        ));
    }

    #[test]
    fn rejects_malformed_toml() {
        let result = Config::parse_toml("[market\n");
        assert!(matches!(result, Err(Error::Config(ConfigError::Parse(_)))));
    }
}
