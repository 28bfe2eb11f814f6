//! services/app/src/stores/theme.rs
//!
//! The light/dark presentation flag, the only durable state in the system.
//! Writes go straight through to the `SettingsStore` port under a fixed key.

use std::sync::Arc;

use tracing::info;
use wardrobe_core::domain::Theme;
use wardrobe_core::ports::{PortResult, SettingsStore};

/// The settings key the flag lives under.
pub const THEME_KEY: &str = "theme-storage";

pub struct ThemeStore {
    theme: Theme,
    settings: Arc<dyn SettingsStore>,
}

impl ThemeStore {
    /// Loads the persisted flag, defaulting to light when the key is absent
    /// or holds an unrecognized value.
    pub async fn load(settings: Arc<dyn SettingsStore>) -> PortResult<Self> {
        let theme = settings
            .get(THEME_KEY)
            .await?
            .and_then(|value| Theme::parse(&value))
            .unwrap_or_default();
        Ok(Self { theme, settings })
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub async fn toggle(&mut self) -> PortResult<Theme> {
        let next = self.theme.toggled();
        self.set(next).await?;
        Ok(next)
    }

    pub async fn set(&mut self, theme: Theme) -> PortResult<()> {
        self.settings.put(THEME_KEY, theme.as_str()).await?;
        info!(theme = theme.as_str(), "theme updated");
        self.theme = theme;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::DbSettingsAdapter;
    use sqlx::sqlite::SqlitePoolOptions;

    async fn settings() -> Arc<DbSettingsAdapter> {
        // One connection only: each in-memory SQLite connection is its own db.
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();
        let adapter = DbSettingsAdapter::new(pool);
        adapter.init().await.unwrap();
        Arc::new(adapter)
    }

    #[tokio::test]
    async fn defaults_to_light_when_nothing_is_stored() {
        let store = ThemeStore::load(settings().await).await.unwrap();
        assert_eq!(store.theme(), Theme::Light);
    }

    #[tokio::test]
    async fn toggle_flips_and_survives_a_reload() {
        let settings = settings().await;

        let mut store = ThemeStore::load(settings.clone()).await.unwrap();
        assert_eq!(store.toggle().await.unwrap(), Theme::Dark);
        assert_eq!(store.theme(), Theme::Dark);

        // A fresh store over the same backing storage sees the flip.
        let reloaded = ThemeStore::load(settings).await.unwrap();
        assert_eq!(reloaded.theme(), Theme::Dark);
    }

    #[tokio::test]
    async fn garbage_in_storage_falls_back_to_default() {
        let settings = settings().await;
        settings.put(THEME_KEY, "mauve").await.unwrap();

        let store = ThemeStore::load(settings).await.unwrap();
        assert_eq!(store.theme(), Theme::Light);
    }
}
