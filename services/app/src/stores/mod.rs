pub mod auth;
pub mod clothing;
pub mod outfit;
pub mod theme;
pub mod weather;

pub use auth::AuthStore;
pub use clothing::{ClothingStore, ItemUpdate};
pub use outfit::{OutfitDraft, OutfitStore, OutfitUpdate, PlanDraft, PlanUpdate};
pub use theme::ThemeStore;
pub use weather::WeatherStore;
