//! # Application State
//!
//! Shared state for the Axum application, passed to the gate and the
//! handlers via the `State` extractor, plus the environment-driven
//! configuration the binary starts from.
//!
//! The store is shared read-only behind an `Arc<dyn AccountStore>`; cloning
//! the state per request never copies data or takes a lock.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use coins_store::AccountStore;
use thiserror::Error;

use crate::middleware::metrics::ApiMetrics;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8000;
const DEFAULT_STORE_LATENCY_MS: u64 = 1000;

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Pretty,
    /// One JSON object per event.
    Json,
}

/// Configuration errors raised while reading the environment.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value '{value}' for {var}: {reason}")]
    Invalid {
        var: &'static str,
        value: String,
        reason: String,
    },
}

/// Service configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Listen host (`COINS_HOST`). Default: `127.0.0.1`.
    pub host: String,
    /// Listen port (`COINS_PORT`). Default: `8000`.
    pub port: u16,
    /// Seed file selecting the seed-file store (`COINS_SEED_FILE`).
    /// `None` selects the in-memory reference store.
    pub seed_file: Option<PathBuf>,
    /// Simulated latency of the in-memory store (`COINS_STORE_LATENCY_MS`).
    pub store_latency: Duration,
    /// Log format (`COINS_LOG_FORMAT`).
    pub log_format: LogFormat,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            seed_file: None,
            store_latency: Duration::from_millis(DEFAULT_STORE_LATENCY_MS),
            log_format: LogFormat::Pretty,
        }
    }
}

impl AppConfig {
    /// Build configuration from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    ///
    /// Unset or empty variables fall back to defaults. Malformed values are
    /// errors rather than silently defaulted.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |var: &str| lookup(var).filter(|v| !v.trim().is_empty());
        let mut config = Self::default();

        if let Some(host) = get("COINS_HOST") {
            config.host = host;
        }

        if let Some(port) = get("COINS_PORT") {
            config.port = port.parse().map_err(|e: std::num::ParseIntError| {
                ConfigError::Invalid {
                    var: "COINS_PORT",
                    value: port.clone(),
                    reason: e.to_string(),
                }
            })?;
        }

        config.seed_file = get("COINS_SEED_FILE").map(PathBuf::from);

        if let Some(ms) = get("COINS_STORE_LATENCY_MS") {
            let ms: u64 = ms.parse().map_err(|e: std::num::ParseIntError| {
                ConfigError::Invalid {
                    var: "COINS_STORE_LATENCY_MS",
                    value: ms.clone(),
                    reason: e.to_string(),
                }
            })?;
            config.store_latency = Duration::from_millis(ms);
        }

        if let Some(format) = get("COINS_LOG_FORMAT") {
            config.log_format = match format.to_lowercase().as_str() {
                "json" => LogFormat::Json,
                "pretty" | "text" => LogFormat::Pretty,
                _ => {
                    return Err(ConfigError::Invalid {
                        var: "COINS_LOG_FORMAT",
                        value: format,
                        reason: "expected 'json' or 'pretty'".into(),
                    })
                }
            };
        }

        Ok(config)
    }
}

/// Shared application state passed to the gate and the handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Credential and balance lookups. Read-only after bootstrap.
    pub store: Arc<dyn AccountStore>,
    /// In-process request counters.
    pub metrics: ApiMetrics,
}

impl AppState {
    /// Create application state over an initialized store.
    pub fn new(store: Arc<dyn AccountStore>) -> Self {
        Self {
            store,
            metrics: ApiMetrics::new(),
        }
    }
}
