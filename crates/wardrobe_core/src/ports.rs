//! crates/wardrobe_core/src/ports.rs
//!
//! Defines the service contracts (traits) for the application's core logic.
//! These traits form the boundary of the hexagonal architecture, allowing the
//! core to stay independent of the concrete backends behind them. In the demo
//! build those backends are mocks with simulated latency, but the seams are
//! the ones a real deployment would swap implementations at.

use async_trait::async_trait;

use crate::domain::{ImageUpload, ItemMetadata, WeatherReport};

//=========================================================================================
// Generic Port Error and Result Types
//=========================================================================================

/// A generic error type for all port operations.
/// This abstracts away the specific errors from external services
/// (e.g., database, network).
#[derive(Debug, thiserror::Error)]
pub enum PortError {
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("An unexpected error occurred: {0}")]
    Unexpected(String),
}

/// A convenience type alias for `Result<T, PortError>`.
pub type PortResult<T> = Result<T, PortError>;

//=========================================================================================
// Service Ports (Traits)
//=========================================================================================

#[async_trait]
pub trait WeatherProvider: Send + Sync {
    /// Fetches current conditions and a short forecast for a location.
    async fn fetch(&self, location: &str) -> PortResult<WeatherReport>;
}

/// Durable string key → string value storage. The application uses exactly
/// one key (the theme flag); the value must survive process restarts.
#[async_trait]
pub trait SettingsStore: Send + Sync {
    async fn get(&self, key: &str) -> PortResult<Option<String>>;
    async fn put(&self, key: &str, value: &str) -> PortResult<()>;
}

#[async_trait]
pub trait ImageAnalysisService: Send + Sync {
    /// Inspects an uploaded photo and suggests item metadata.
    async fn analyze(&self, upload: &ImageUpload) -> PortResult<ItemMetadata>;
}
