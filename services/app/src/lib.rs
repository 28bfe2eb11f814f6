pub mod adapters;
pub mod config;
pub mod error;
pub mod state;
pub mod stats;
pub mod stores;

pub use config::Config;
pub use error::AppError;
pub use state::AppState;
