//! services/app/src/error.rs
//!
//! Defines the primary error type for the entire application service.

use crate::config::ConfigError;
use wardrobe_core::ports::PortError;

/// The primary error type for the `app` service.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Represents an error that occurred during configuration loading.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Represents an error that propagated up from one of the core service ports.
    #[error("Service Port Error: {0}")]
    Port(#[from] PortError),

    /// Represents an error from the underlying settings database.
    #[error("Database Error: {0}")]
    Database(#[from] sqlx::Error),

    /// Represents a standard Input/Output error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Represents a serialization failure when rendering report output.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
