//! API configuration module.
//!
//! Configuration is loaded from environment variables with fallback to defaults.

use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;

/// Default HTTP port.
pub const DEFAULT_PORT: u16 = 8080;

/// Default request body limit (64 KiB).
pub const DEFAULT_MAX_BODY_BYTES: usize = 64 * 1024;

/// API configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Bind address (default: 0.0.0.0)
    pub bind_addr: String,

    /// HTTP port
    pub port: u16,

    /// Largest accepted request body in bytes
    pub max_body_bytes: usize,

    /// `tracing` filter directive, e.g. `info` or `tally_api=debug`
    pub log_filter: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfig {
            bind_addr: "0.0.0.0".to_string(),
            port: DEFAULT_PORT,
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
            log_filter: "info".to_string(),
        }
    }
}

impl ApiConfig {
    /// Load configuration from environment variables.
    ///
    /// | Variable | Default |
    /// |---|---|
    /// | `TALLY_BIND_ADDR` | `0.0.0.0` |
    /// | `TALLY_PORT` | `8080` |
    /// | `TALLY_MAX_BODY_BYTES` | `65536` |
    /// | `TALLY_LOG`, then `RUST_LOG` | `info` |
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = ApiConfig::default();

        let config = ApiConfig {
            bind_addr: lookup("TALLY_BIND_ADDR").unwrap_or(defaults.bind_addr),

            port: parse_or(&lookup, "TALLY_PORT", defaults.port)?,

            max_body_bytes: parse_or(&lookup, "TALLY_MAX_BODY_BYTES", defaults.max_body_bytes)?,

            log_filter: lookup("TALLY_LOG")
                .or_else(|| lookup("RUST_LOG"))
                .unwrap_or(defaults.log_filter),
        };

        if config.max_body_bytes == 0 {
            return Err(ConfigError::InvalidValue("TALLY_MAX_BODY_BYTES".to_string()));
        }
        if config.bind_addr.trim().is_empty() {
            return Err(ConfigError::InvalidValue("TALLY_BIND_ADDR".to_string()));
        }

        Ok(config)
    }

    /// Returns the full bind address.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.bind_addr, self.port)
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue(key.to_string())),
        None => Ok(default),
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}
