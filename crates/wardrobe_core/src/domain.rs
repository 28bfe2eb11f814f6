//! crates/wardrobe_core/src/domain.rs
//!
//! Defines the pure, core data structures for the application.
//! These structs are independent of any storage or presentation layer.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

//=========================================================================================
// Closed Enumerations
//=========================================================================================

/// Top-level clothing category. Closed set, no dynamic extensibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Tops,
    Bottoms,
    Dresses,
    Outerwear,
    Shoes,
    Accessories,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Tops,
        Category::Bottoms,
        Category::Dresses,
        Category::Outerwear,
        Category::Shoes,
        Category::Accessories,
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Season {
    Spring,
    Summer,
    Fall,
    Winter,
}

impl Season {
    pub const ALL: [Season; 4] = [Season::Spring, Season::Summer, Season::Fall, Season::Winter];
}

/// Wire form is kebab-case, so `WorkFromHome` serializes as `work-from-home`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Occasion {
    Casual,
    WorkFromHome,
    Office,
    Formal,
    SemiFormal,
    Athletic,
    Special,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WeatherCondition {
    Sunny,
    PartlyCloudy,
    Cloudy,
    Rainy,
    Stormy,
    Snowy,
    Foggy,
}

/// Global presentation mode. The only durably persisted value in the system.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Parses the persisted settings value. Unknown strings map to `None`
    /// so callers can fall back to the default.
    pub fn parse(value: &str) -> Option<Theme> {
        match value {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

//=========================================================================================
// Entities
//=========================================================================================

/// Represents the signed-in user. Session-scoped, never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub profile_picture: Option<String>,
}

/// A single garment in the closet.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClothingItem {
    pub id: Uuid,
    pub user_id: Uuid,
    pub image_url: String,
    pub category: Category,
    pub sub_category: Option<String>,
    pub color: String,
    pub season: Vec<Season>,
    pub occasion: Vec<Occasion>,
    pub tags: Vec<String>,
    pub favorite: bool,
    pub last_worn: Option<DateTime<Utc>>,
    pub times_worn: u32,
    pub date_added: DateTime<Utc>,
}

/// A named combination of clothing items.
///
/// `items` holds weak references into the clothing collection: deleting a
/// clothing item does not cascade here, so an id may no longer resolve.
/// Consumers must treat missing lookups as "item unavailable".
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Outfit {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub items: Vec<Uuid>,
    pub occasion: Vec<Occasion>,
    pub season: Vec<Season>,
    pub favorite: bool,
    pub last_worn: Option<DateTime<Utc>>,
    pub times_worn: u32,
    pub date_added: DateTime<Utc>,
}

/// An outfit scheduled on a calendar date. Nothing enforces one plan per
/// date; multiple plans on the same day are allowed silently.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutfitPlan {
    pub id: Uuid,
    pub user_id: Uuid,
    pub date: NaiveDate,
    pub outfit_id: Uuid,
    pub weather: Option<WeatherSnapshot>,
}

/// An immutable weather reading, replaced wholesale on each fetch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    pub temperature: f64,
    pub condition: WeatherCondition,
    /// Chance of precipitation, percent.
    pub precipitation: u8,
    pub humidity: u8,
    pub wind_speed: f64,
}

/// Current conditions plus a short daily forecast, as returned by a
/// `WeatherProvider` in one shot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherReport {
    pub current: WeatherSnapshot,
    pub forecast: Vec<WeatherSnapshot>,
}

//=========================================================================================
// Upload Inputs
//=========================================================================================

/// A photo handed to the upload pipeline. Only the name matters to the mock
/// backend; the bytes are carried for a future real analysis service.
#[derive(Debug, Clone)]
pub struct ImageUpload {
    pub file_name: String,
    pub content: Vec<u8>,
}

/// Partial item metadata: what the analysis service suggests, and what the
/// caller supplies to override those suggestions. `None` means "no opinion".
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ItemMetadata {
    /// Overrides the URL the upload pipeline would otherwise derive from the
    /// photo itself.
    pub image_url: Option<String>,
    pub category: Option<Category>,
    pub sub_category: Option<String>,
    pub color: Option<String>,
    pub season: Option<Vec<Season>>,
    pub occasion: Option<Vec<Occasion>>,
    pub tags: Option<Vec<String>>,
    pub favorite: Option<bool>,
}

impl ItemMetadata {
    /// Overlays `self` on top of `base`: any field set here wins.
    pub fn merged_over(self, base: ItemMetadata) -> ItemMetadata {
        ItemMetadata {
            image_url: self.image_url.or(base.image_url),
            category: self.category.or(base.category),
            sub_category: self.sub_category.or(base.sub_category),
            color: self.color.or(base.color),
            season: self.season.or(base.season),
            occasion: self.occasion.or(base.occasion),
            tags: self.tags.or(base.tags),
            favorite: self.favorite.or(base.favorite),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enums_use_kebab_case_wire_form() {
        assert_eq!(
            serde_json::to_string(&Occasion::WorkFromHome).unwrap(),
            "\"work-from-home\""
        );
        assert_eq!(
            serde_json::to_string(&WeatherCondition::PartlyCloudy).unwrap(),
            "\"partly-cloudy\""
        );
        assert_eq!(serde_json::to_string(&Category::Tops).unwrap(), "\"tops\"");

        let parsed: Season = serde_json::from_str("\"fall\"").unwrap();
        assert_eq!(parsed, Season::Fall);
    }

    #[test]
    fn theme_round_trips_through_settings_string() {
        assert_eq!(Theme::parse(Theme::Dark.as_str()), Some(Theme::Dark));
        assert_eq!(Theme::parse(Theme::Light.as_str()), Some(Theme::Light));
        assert_eq!(Theme::parse("solarized"), None);
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
    }

    #[test]
    fn metadata_overlay_prefers_caller_fields() {
        let suggested = ItemMetadata {
            category: Some(Category::Tops),
            color: Some("unknown".to_string()),
            season: Some(vec![Season::Spring]),
            ..ItemMetadata::default()
        };
        let caller = ItemMetadata {
            category: Some(Category::Bottoms),
            tags: Some(vec!["denim".to_string()]),
            ..ItemMetadata::default()
        };

        let merged = caller.merged_over(suggested);
        assert_eq!(merged.category, Some(Category::Bottoms));
        assert_eq!(merged.color.as_deref(), Some("unknown"));
        assert_eq!(merged.season, Some(vec![Season::Spring]));
        assert_eq!(merged.tags, Some(vec!["denim".to_string()]));
    }
}
