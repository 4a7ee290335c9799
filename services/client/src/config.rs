//! services/client/src/config.rs
//!
//! Defines the application's configuration structure and loading logic.
//!
//! The analysis endpoint is a compiled-in constant; only ambient settings
//! such as the log level come from the environment. The `.env` file is used
//! for local development.

use tracing::Level;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// The compiled-in base URL of the remote analysis service.
pub const DEFAULT_SERVICE_URL: &str = "http://127.0.0.1:5000";

/// A custom error type for configuration loading failures.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for the environment variable {0}: {1}")]
    InvalidValue(String, String),
}

/// Holds all configuration resolved at startup.
#[derive(Clone, Debug)]
pub struct Config {
    pub service_url: String,
    pub log_level: Level,
}

impl Config {
    /// Loads configuration.
    ///
    /// It will look for a `.env` file in the current directory for development,
    /// but this is skipped in test environments to ensure tests are hermetic.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Only load from .env in non-test mode to avoid contamination.
        if !cfg!(test) {
            dotenvy::dotenv().ok();
        }

        let log_level_str = std::env::var("RUST_LOG").unwrap_or_else(|_| "INFO".to_string());
        let log_level = log_level_str.parse::<Level>().map_err(|_| {
            ConfigError::InvalidValue(
                "RUST_LOG".to_string(),
                format!("'{}' is not a valid log level", log_level_str),
            )
        })?;

        Ok(Self {
            service_url: DEFAULT_SERVICE_URL.to_string(),
            log_level,
        })
    }
}

/// Installs the global tracing subscriber. The embedding shell calls this
/// once at startup.
pub fn init_tracing(config: &Config) {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(config.log_level.to_string()))
        .with(tracing_subscriber::fmt::layer())
        .init();
}
