pub mod domain;
pub mod ports;

pub use domain::{
    Category, ClothingItem, ImageUpload, ItemMetadata, Occasion, Outfit, OutfitPlan, Season,
    Theme, User, WeatherCondition, WeatherReport, WeatherSnapshot,
};
pub use ports::{ImageAnalysisService, PortError, PortResult, SettingsStore, WeatherProvider};
