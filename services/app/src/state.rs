//! services/app/src/state.rs
//!
//! Defines the application's state object: every store behind one explicit
//! value that the presentation layer is handed at startup. Mutation happens
//! only through the store methods, never through shared globals.

use std::sync::Arc;

use uuid::Uuid;
use wardrobe_core::ports::{
    ImageAnalysisService, PortResult, SettingsStore, WeatherProvider,
};

use crate::adapters::weather_mock::canned_report;
use crate::config::Config;
use crate::stores::{AuthStore, ClothingStore, OutfitStore, ThemeStore, WeatherStore};

/// The whole data layer. Each store owns its collection exclusively; there
/// are no cross-store transition rules, and references between stores (outfit
/// item ids, plan outfit ids) are weak by design.
pub struct AppState {
    pub config: Arc<Config>,
    pub auth: AuthStore,
    pub clothing: ClothingStore,
    pub outfits: OutfitStore,
    pub weather: WeatherStore,
    pub theme: ThemeStore,
}

impl AppState {
    /// Builds the state with the demo wardrobe seeded for the demo user.
    /// The theme flag is loaded from durable settings; everything else,
    /// weather included, starts from the canned in-memory data.
    pub async fn new(
        config: Arc<Config>,
        weather_provider: Arc<dyn WeatherProvider>,
        settings: Arc<dyn SettingsStore>,
        vision: Arc<dyn ImageAnalysisService>,
    ) -> PortResult<Self> {
        let demo_user_id = Uuid::new_v4();

        let clothing = ClothingStore::with_demo_items(demo_user_id, vision);
        let item_ids: Vec<Uuid> = clothing.items().iter().map(|item| item.id).collect();
        let outfits = OutfitStore::with_demo_data(demo_user_id, &item_ids);
        let theme = ThemeStore::load(settings).await?;

        Ok(Self {
            auth: AuthStore::new(demo_user_id, &config),
            clothing,
            outfits,
            weather: WeatherStore::with_report(weather_provider, canned_report()),
            theme,
            config,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{DbSettingsAdapter, MockVisionAdapter, MockWeatherAdapter};
    use sqlx::sqlite::SqlitePoolOptions;
    use std::time::Duration;

    #[tokio::test]
    async fn seeded_state_is_internally_consistent() {
        let config = Arc::new(Config::for_tests());
        // One connection only: each in-memory SQLite connection is its own db.
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();
        let settings = Arc::new(DbSettingsAdapter::new(pool));
        settings.init().await.unwrap();

        let state = AppState::new(
            config,
            Arc::new(MockWeatherAdapter::new(Duration::ZERO)),
            settings,
            Arc::new(MockVisionAdapter::new(Duration::ZERO)),
        )
        .await
        .unwrap();

        assert_eq!(state.clothing.items().len(), 5);
        assert_eq!(state.outfits.outfits().len(), 3);
        assert_eq!(state.outfits.plans().len(), 3);

        // Weather is readable before any fetch, like the rest of the seed data.
        assert!(state.weather.current().is_some());
        assert_eq!(state.weather.forecast().len(), 5);

        // Every seeded outfit reference resolves against the seeded closet.
        for outfit in state.outfits.outfits() {
            let resolved = state.clothing.resolve_items(&outfit.items);
            assert_eq!(resolved.len(), outfit.items.len());
        }

        // Seeded entities all belong to the demo user the auth store knows.
        assert!(!state.auth.is_authenticated());
    }
}
