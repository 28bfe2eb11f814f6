//! services/app/src/adapters/weather_mock.rs
//!
//! The mock weather backend. Implements the `WeatherProvider` port with a
//! fixed payload behind a simulated network delay; the location argument is
//! accepted and ignored. A real deployment would swap in an adapter over an
//! actual forecast API at the same seam.

use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;
use wardrobe_core::domain::{WeatherCondition, WeatherReport, WeatherSnapshot};
use wardrobe_core::ports::{PortResult, WeatherProvider};

/// An adapter that resolves every fetch to the same canned report.
#[derive(Clone)]
pub struct MockWeatherAdapter {
    latency: Duration,
}

impl MockWeatherAdapter {
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }
}

#[async_trait]
impl WeatherProvider for MockWeatherAdapter {
    async fn fetch(&self, location: &str) -> PortResult<WeatherReport> {
        debug!(%location, "serving canned weather report");
        tokio::time::sleep(self.latency).await;
        Ok(canned_report())
    }
}

/// The fixed report every fetch resolves to. The demo state also seeds its
/// weather store with this, so consumers see weather before the first fetch.
pub fn canned_report() -> WeatherReport {
    let snapshot = |temperature: f64, condition: WeatherCondition, precipitation: u8, humidity: u8, wind_speed: f64| {
        WeatherSnapshot {
            temperature,
            condition,
            precipitation,
            humidity,
            wind_speed,
        }
    };

    WeatherReport {
        current: snapshot(22.0, WeatherCondition::PartlyCloudy, 10, 65, 12.0),
        forecast: vec![
            snapshot(24.0, WeatherCondition::Sunny, 0, 60, 10.0),
            snapshot(20.0, WeatherCondition::Rainy, 70, 80, 15.0),
            snapshot(18.0, WeatherCondition::Cloudy, 30, 75, 12.0),
            snapshot(21.0, WeatherCondition::PartlyCloudy, 20, 65, 8.0),
            snapshot(23.0, WeatherCondition::Sunny, 0, 55, 5.0),
        ],
    }
}
