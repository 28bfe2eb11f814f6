//! services/app/src/config.rs
//!
//! Defines the application's configuration structure and loading logic.
//!
//! All configuration is loaded from environment variables at startup. The
//! `.env` file is used for local development.

use std::time::Duration;
use tracing::Level;

/// A custom error type for configuration loading failures.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing the environment variable {0}")]
    MissingVar(String),
    #[error("Invalid value for the environment variable {0}: {1}")]
    InvalidValue(String, String),
}

/// Holds all configuration loaded from the environment at startup.
#[derive(Clone, Debug)]
pub struct Config {
    /// Connection string for the settings database (SQLite).
    pub database_url: String,
    pub log_level: Level,
    /// Simulated round-trip for the mock auth and weather backends.
    pub simulated_latency: Duration,
    /// Simulated upload-and-analysis time for the clothing pipeline.
    pub upload_latency: Duration,
    /// The single credential pair the mock backend accepts.
    pub demo_email: String,
    pub demo_password: String,
    pub demo_name: String,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// It will look for a `.env` file in the current directory for
    /// development, but this is skipped in test environments to ensure tests
    /// are hermetic.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Only load from .env in non-test mode to avoid contamination.
        if !cfg!(test) {
            dotenvy::dotenv().ok();
        }

        let database_url = std::env::var("DATABASE_URL")
            .unwrap_or_else(|_| "sqlite:wardrobe.db?mode=rwc".to_string());

        let log_level_str = std::env::var("RUST_LOG").unwrap_or_else(|_| "INFO".to_string());
        let log_level = log_level_str.parse::<Level>().map_err(|_| {
            ConfigError::InvalidValue(
                "RUST_LOG".to_string(),
                format!("'{}' is not a valid log level", log_level_str),
            )
        })?;

        let simulated_latency = duration_from_env("SIMULATED_LATENCY_MS", 1000)?;
        let upload_latency = duration_from_env("UPLOAD_LATENCY_MS", 1500)?;

        let demo_email =
            std::env::var("DEMO_EMAIL").unwrap_or_else(|_| "demo@example.com".to_string());
        let demo_password =
            std::env::var("DEMO_PASSWORD").unwrap_or_else(|_| "password".to_string());
        let demo_name = std::env::var("DEMO_NAME").unwrap_or_else(|_| "Demo User".to_string());

        Ok(Self {
            database_url,
            log_level,
            simulated_latency,
            upload_latency,
            demo_email,
            demo_password,
            demo_name,
        })
    }

    /// A configuration suitable for tests: zero latency, in-memory settings.
    pub fn for_tests() -> Self {
        Self {
            database_url: "sqlite::memory:".to_string(),
            log_level: Level::DEBUG,
            simulated_latency: Duration::ZERO,
            upload_latency: Duration::ZERO,
            demo_email: "demo@example.com".to_string(),
            demo_password: "password".to_string(),
            demo_name: "Demo User".to_string(),
        }
    }
}

fn duration_from_env(var: &str, default_ms: u64) -> Result<Duration, ConfigError> {
    let ms = match std::env::var(var) {
        Ok(raw) => raw
            .parse::<u64>()
            .map_err(|e| ConfigError::InvalidValue(var.to_string(), e.to_string()))?,
        Err(_) => default_ms,
    };
    Ok(Duration::from_millis(ms))
}
