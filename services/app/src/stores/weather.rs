//! services/app/src/stores/weather.rs
//!
//! Holds the latest weather report. `fetch_weather` delegates to the
//! `WeatherProvider` port; with the mock adapter the payload is always the
//! same fixed snapshot, so the error branch only fires for a real provider.

use std::sync::Arc;

use tracing::{info, warn};
use wardrobe_core::domain::{WeatherReport, WeatherSnapshot};
use wardrobe_core::ports::WeatherProvider;

pub struct WeatherStore {
    current: Option<WeatherSnapshot>,
    forecast: Vec<WeatherSnapshot>,
    loading: bool,
    error: Option<String>,
    provider: Arc<dyn WeatherProvider>,
}

impl WeatherStore {
    pub fn new(provider: Arc<dyn WeatherProvider>) -> Self {
        Self {
            current: None,
            forecast: Vec::new(),
            loading: false,
            error: None,
            provider,
        }
    }

    /// A store already holding `report`. The demo app starts this way, so
    /// consumers see weather before the first fetch.
    pub fn with_report(provider: Arc<dyn WeatherProvider>, report: WeatherReport) -> Self {
        Self {
            current: Some(report.current),
            forecast: report.forecast,
            loading: false,
            error: None,
            provider,
        }
    }

    /// Replaces the held report wholesale. On provider failure the previous
    /// report is kept and a user-visible message is set.
    pub async fn fetch_weather(&mut self, location: &str) {
        self.loading = true;
        self.error = None;

        match self.provider.fetch(location).await {
            Ok(report) => {
                info!(%location, condition = ?report.current.condition, "weather updated");
                self.current = Some(report.current);
                self.forecast = report.forecast;
            }
            Err(e) => {
                warn!(%location, error = %e, "weather fetch failed");
                self.error = Some("Failed to fetch weather data".to_string());
            }
        }
        self.loading = false;
    }

    pub fn current(&self) -> Option<&WeatherSnapshot> {
        self.current.as_ref()
    }

    pub fn forecast(&self) -> &[WeatherSnapshot] {
        &self.forecast
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::weather_mock::canned_report;
    use crate::adapters::MockWeatherAdapter;
    use async_trait::async_trait;
    use std::time::Duration;
    use wardrobe_core::domain::WeatherCondition;
    use wardrobe_core::ports::{PortError, PortResult};

    struct FailingProvider;

    #[async_trait]
    impl WeatherProvider for FailingProvider {
        async fn fetch(&self, _location: &str) -> PortResult<WeatherReport> {
            Err(PortError::Unexpected("upstream down".to_string()))
        }
    }

    #[tokio::test]
    async fn seeded_store_reports_weather_before_any_fetch() {
        let store = WeatherStore::with_report(
            Arc::new(MockWeatherAdapter::new(Duration::ZERO)),
            canned_report(),
        );

        let current = store.current().unwrap();
        assert_eq!(current.temperature, 22.0);
        assert_eq!(current.condition, WeatherCondition::PartlyCloudy);
        assert_eq!(store.forecast().len(), 5);
        assert!(!store.is_loading());
        assert!(store.error().is_none());
    }

    #[tokio::test]
    async fn fetch_ignores_location_and_yields_fixed_report() {
        let mut store = WeatherStore::new(Arc::new(MockWeatherAdapter::new(Duration::ZERO)));

        store.fetch_weather("Reykjavik").await;
        let first = store.current().unwrap().clone();

        store.fetch_weather("Cairo").await;
        let second = store.current().unwrap();

        assert_eq!(&first, second);
        assert_eq!(second.temperature, 22.0);
        assert_eq!(second.condition, WeatherCondition::PartlyCloudy);
        assert_eq!(store.forecast().len(), 5);
        assert!(!store.is_loading());
        assert!(store.error().is_none());
    }

    #[tokio::test]
    async fn provider_failure_sets_message_and_keeps_old_report() {
        let mut store = WeatherStore::new(Arc::new(MockWeatherAdapter::new(Duration::ZERO)));
        store.fetch_weather("anywhere").await;
        assert!(store.current().is_some());

        let mut failing = WeatherStore {
            provider: Arc::new(FailingProvider),
            ..store
        };
        failing.fetch_weather("anywhere").await;

        assert_eq!(failing.error(), Some("Failed to fetch weather data"));
        assert!(failing.current().is_some());
        assert!(!failing.is_loading());
    }
}
