pub mod settings_db;
pub mod vision_mock;
pub mod weather_mock;

pub use settings_db::DbSettingsAdapter;
pub use vision_mock::MockVisionAdapter;
pub use weather_mock::MockWeatherAdapter;
