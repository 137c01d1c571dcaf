use std::fs;
use std::net::IpAddr;
use std::path::Path;

use serde::Deserialize;

use crate::error_handling::types::ConfigError;

/// Application configuration.
///
/// Loaded from a TOML file, or built from defaults when no file is given.
///
/// # Fields Overview
///
/// - `base_url`: scheme + host of the Redmine instance to scrape
/// - `bind_address`: IP address the web interface listens on
/// - `web_ui_port`: port for the web interface
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    pub base_url: String,
    pub bind_address: String,
    pub web_ui_port: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: "https://redmine-pa.mxnavi.com".to_string(),
            bind_address: "0.0.0.0".to_string(),
            web_ui_port: 8000,
        }
    }
}

impl Config {
    /// Reads and validates a configuration file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path)?;
        let config: Config =
            toml::from_str(&raw).map_err(|e| ConfigError::TomlError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.base_url.trim().is_empty() {
            return Err(ConfigError::EmptyBaseUrl(
                "base_url must not be empty".to_string(),
            ));
        }
        if self.bind_address.parse::<IpAddr>().is_err() {
            return Err(ConfigError::BadIPFormatting(format!(
                "cannot parse bind address '{}'",
                self.bind_address
            )));
        }
        if self.web_ui_port < 1024 {
            return Err(ConfigError::NotInRange(format!(
                "web_ui_port {} is reserved, use 1024-65535",
                self.web_ui_port
            )));
        }
        Ok(())
    }

    /// Base URL with any trailing slash stripped, so endpoint paths can be
    /// appended uniformly.
    pub fn base_url(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }
}
