//! services/docgen/src/config.rs
//!
//! Defines the application's configuration structure and loading logic.
//!
//! All configuration is loaded from environment variables at startup. The `.env`
//! file is used for local development.

use docgen_core::Theme;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;
use tracing::Level;

/// A custom error type for configuration loading failures.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for the environment variable {0}: {1}")]
    InvalidValue(String, String),
}

/// Where the saved draft lives.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DraftStoreKind {
    File(PathBuf),
    Memory,
}

/// Holds all configuration loaded from the environment at startup.
#[derive(Clone, Debug)]
pub struct Config {
    pub bind_address: SocketAddr,
    pub log_level: Level,
    /// The remote generator. `None` switches to the simulated generator.
    pub generator_endpoint: Option<String>,
    pub request_timeout: Duration,
    pub simulated_delay: Duration,
    pub draft_store: DraftStoreKind,
    pub theme: Theme,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_address: SocketAddr::from(([127, 0, 0, 1], 3000)),
            log_level: Level::INFO,
            generator_endpoint: None,
            request_timeout: Duration::from_secs(60),
            simulated_delay: Duration::from_millis(6000),
            draft_store: DraftStoreKind::File(PathBuf::from("./docgen_store.json")),
            theme: Theme::Light,
        }
    }
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// It will look for a `.env` file in the current directory for development,
    /// but this is skipped in test environments to ensure tests are hermetic.
    pub fn from_env() -> Result<Self, ConfigError> {
        if !cfg!(test) {
            dotenvy::dotenv().ok();
        }
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from any variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        // --- Server Settings ---
        let bind_address = match lookup("BIND_ADDRESS") {
            Some(value) => value.parse::<SocketAddr>().map_err(|e| {
                ConfigError::InvalidValue("BIND_ADDRESS".to_string(), e.to_string())
            })?,
            None => defaults.bind_address,
        };

        let log_level_str = lookup("RUST_LOG").unwrap_or_else(|| "INFO".to_string());
        let log_level = log_level_str.parse::<Level>().map_err(|_| {
            ConfigError::InvalidValue(
                "RUST_LOG".to_string(),
                format!("'{}' is not a valid log level", log_level_str),
            )
        })?;

        // --- Generator Settings ---
        let generator_endpoint = lookup("GENERATOR_ENDPOINT")
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty());

        let request_timeout = match lookup("REQUEST_TIMEOUT_SECS") {
            Some(value) => Duration::from_secs(parse_number("REQUEST_TIMEOUT_SECS", &value)?),
            None => defaults.request_timeout,
        };
        let simulated_delay = match lookup("SIMULATED_DELAY_MS") {
            Some(value) => Duration::from_millis(parse_number("SIMULATED_DELAY_MS", &value)?),
            None => defaults.simulated_delay,
        };

        // --- Draft Storage ---
        let draft_store = match lookup("DRAFT_STORE").as_deref().map(str::trim) {
            None | Some("file") => {
                let path = lookup("DRAFT_STORE_PATH")
                    .map(PathBuf::from)
                    .unwrap_or_else(|| PathBuf::from("./docgen_store.json"));
                DraftStoreKind::File(path)
            }
            Some("memory") => DraftStoreKind::Memory,
            Some(other) => {
                return Err(ConfigError::InvalidValue(
                    "DRAFT_STORE".to_string(),
                    format!("'{}' is not one of 'file' or 'memory'", other),
                ))
            }
        };

        let theme = match lookup("THEME") {
            Some(value) => value
                .parse::<Theme>()
                .map_err(|e| ConfigError::InvalidValue("THEME".to_string(), e))?,
            None => defaults.theme,
        };

        Ok(Self {
            bind_address,
            log_level,
            generator_endpoint,
            request_timeout,
            simulated_delay,
            draft_store,
            theme,
        })
    }
}

fn parse_number(name: &str, value: &str) -> Result<u64, ConfigError> {
    value
        .trim()
        .parse::<u64>()
        .map_err(|e| ConfigError::InvalidValue(name.to_string(), e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| map.get(name).cloned()
    }

    #[test]
    fn empty_environment_yields_defaults() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.bind_address, "127.0.0.1:3000".parse().unwrap());
        assert_eq!(config.log_level, Level::INFO);
        assert!(config.generator_endpoint.is_none());
        assert_eq!(config.request_timeout, Duration::from_secs(60));
        assert_eq!(config.simulated_delay, Duration::from_millis(6000));
        assert_eq!(
            config.draft_store,
            DraftStoreKind::File(PathBuf::from("./docgen_store.json"))
        );
        assert_eq!(config.theme, Theme::Light);
    }

    #[test]
    fn reads_every_variable() {
        let config = Config::from_lookup(lookup_from(&[
            ("BIND_ADDRESS", "0.0.0.0:8080"),
            ("RUST_LOG", "debug"),
            ("GENERATOR_ENDPOINT", " https://example.com/exec "),
            ("REQUEST_TIMEOUT_SECS", "5"),
            ("SIMULATED_DELAY_MS", "10"),
            ("DRAFT_STORE", "memory"),
            ("THEME", "dark"),
        ]))
        .unwrap();
        assert_eq!(config.bind_address.port(), 8080);
        assert_eq!(config.log_level, Level::DEBUG);
        assert_eq!(
            config.generator_endpoint.as_deref(),
            Some("https://example.com/exec")
        );
        assert_eq!(config.request_timeout, Duration::from_secs(5));
        assert_eq!(config.simulated_delay, Duration::from_millis(10));
        assert_eq!(config.draft_store, DraftStoreKind::Memory);
        assert_eq!(config.theme, Theme::Dark);
    }

    #[test]
    fn blank_endpoint_means_simulated() {
        let config = Config::from_lookup(lookup_from(&[("GENERATOR_ENDPOINT", "  ")])).unwrap();
        assert!(config.generator_endpoint.is_none());
    }

    #[test]
    fn rejects_bad_values() {
        for (name, value) in [
            ("BIND_ADDRESS", "nope"),
            ("RUST_LOG", "loud"),
            ("REQUEST_TIMEOUT_SECS", "-1"),
            ("DRAFT_STORE", "redis"),
            ("THEME", "purple"),
        ] {
            let err = Config::from_lookup(lookup_from(&[(name, value)])).unwrap_err();
            assert!(
                matches!(&err, ConfigError::InvalidValue(var, _) if var == name),
                "unexpected error for {}: {:?}",
                name,
                err
            );
        }
    }
}
