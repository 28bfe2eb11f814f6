//! services/app/src/bin/app.rs
//!
//! A scripted walk through the data layer, standing in for the presentation
//! layer that would normally drive it: sign in, check the weather, upload a
//! photo, build an outfit, plan it, flip the theme, and print the wardrobe
//! statistics.

use app_lib::{
    adapters::{DbSettingsAdapter, MockVisionAdapter, MockWeatherAdapter},
    config::Config,
    error::AppError,
    state::AppState,
    stats::wardrobe_stats,
    stores::{OutfitDraft, PlanDraft},
};
use chrono::{Duration, Utc};
use sqlx::sqlite::SqlitePoolOptions;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use wardrobe_core::domain::{Category, ImageUpload, ItemMetadata, Occasion, Season};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    // --- 1. Load Configuration & Set Up Logging ---
    let config = Arc::new(Config::from_env()?);
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(config.log_level.to_string()))
        .with(tracing_subscriber::fmt::layer())
        .init();
    info!("Configuration loaded. Starting wardrobe demo...");

    // --- 2. Open the Settings Database ---
    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect(&config.database_url)
        .await?;
    let settings = Arc::new(DbSettingsAdapter::new(pool));
    settings.init().await?;

    // --- 3. Wire the Mock Backends & Build the AppState ---
    let weather_provider = Arc::new(MockWeatherAdapter::new(config.simulated_latency));
    let vision = Arc::new(MockVisionAdapter::new(config.upload_latency));
    let mut state = AppState::new(config.clone(), weather_provider, settings, vision).await?;

    // --- 4. Sign In ---
    state
        .auth
        .login(&config.demo_email, &config.demo_password)
        .await;
    match state.auth.user() {
        Some(user) => info!(name = %user.name, "signed in"),
        None => {
            info!(error = ?state.auth.error(), "demo login failed, exiting");
            return Ok(());
        }
    }

    // --- 5. Check the Weather ---
    state.weather.fetch_weather("home").await;
    if let Some(current) = state.weather.current() {
        info!(
            temperature = current.temperature,
            condition = ?current.condition,
            forecast_days = state.weather.forecast().len(),
            "weather ready"
        );
    }

    // --- 6. Upload a New Item ---
    let coat_id = state
        .clothing
        .upload_item(
            ImageUpload {
                file_name: "navy-raincoat.jpg".to_string(),
                content: Vec::new(),
            },
            ItemMetadata {
                category: Some(Category::Outerwear),
                sub_category: Some("Raincoat".to_string()),
                color: Some("navy".to_string()),
                season: Some(vec![Season::Fall, Season::Winter]),
                tags: Some(vec!["waterproof".to_string()]),
                ..ItemMetadata::default()
            },
        )
        .await?;
    info!(items = state.clothing.items().len(), "closet after upload");

    // --- 7. Build & Plan an Outfit ---
    let jeans = state
        .clothing
        .items_by_category(Category::Bottoms)
        .first()
        .map(|item| item.id);
    let outfit_id = state.outfits.create_outfit(OutfitDraft {
        name: Some("Rainy Commute".to_string()),
        items: Some(jeans.into_iter().chain([coat_id]).collect()),
        occasion: Some(vec![Occasion::Office]),
        season: Some(vec![Season::Fall]),
        ..OutfitDraft::default()
    });
    state.outfits.add_plan(PlanDraft {
        date: Some(Utc::now().date_naive() + Duration::days(3)),
        outfit_id,
        weather: state.weather.current().cloned(),
    });

    let today = Utc::now().date_naive();
    let this_week = state
        .outfits
        .plans_for_date_range(today, today + Duration::days(6));
    info!(planned = this_week.len(), "plans for the coming week");

    // --- 8. Flip the Theme (persisted across runs) ---
    let theme = state.theme.toggle().await?;
    info!(theme = theme.as_str(), "theme toggled");

    // --- 9. Print the Statistics Report ---
    let stats = wardrobe_stats(&state.clothing, &state.outfits);
    println!("{}", serde_json::to_string_pretty(&stats)?);

    Ok(())
}
