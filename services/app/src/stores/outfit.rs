//! services/app/src/stores/outfit.rs
//!
//! Outfits and their calendar plans. Both collections are plain in-memory
//! lists; outfit item lists are weak references into the clothing store, and
//! plan→outfit references are equally unenforced. Multiple plans may land on
//! the same date, since nothing checks for collisions.

use chrono::{Duration, NaiveDate, Utc};
use tracing::{debug, info};
use uuid::Uuid;
use wardrobe_core::domain::{
    Occasion, Outfit, OutfitPlan, Season, WeatherCondition, WeatherSnapshot,
};

/// Input for `create_outfit`. Unset fields take the standard defaults.
#[derive(Debug, Clone, Default)]
pub struct OutfitDraft {
    pub name: Option<String>,
    pub items: Option<Vec<Uuid>>,
    pub occasion: Option<Vec<Occasion>>,
    pub season: Option<Vec<Season>>,
    pub favorite: Option<bool>,
}

/// A partial update merged into an existing outfit.
#[derive(Debug, Clone, Default)]
pub struct OutfitUpdate {
    pub name: Option<String>,
    pub items: Option<Vec<Uuid>>,
    pub occasion: Option<Vec<Occasion>>,
    pub season: Option<Vec<Season>>,
    pub favorite: Option<bool>,
    pub last_worn: Option<chrono::DateTime<Utc>>,
    pub times_worn: Option<u32>,
}

/// Input for `add_plan`. The outfit reference is required; like all outfit
/// references it is weak and may dangle later.
#[derive(Debug, Clone)]
pub struct PlanDraft {
    pub date: Option<NaiveDate>,
    pub outfit_id: Uuid,
    pub weather: Option<WeatherSnapshot>,
}

#[derive(Debug, Clone, Default)]
pub struct PlanUpdate {
    pub date: Option<NaiveDate>,
    pub outfit_id: Option<Uuid>,
    pub weather: Option<WeatherSnapshot>,
}

pub struct OutfitStore {
    owner_id: Uuid,
    outfits: Vec<Outfit>,
    plans: Vec<OutfitPlan>,
}

impl OutfitStore {
    pub fn new(owner_id: Uuid) -> Self {
        Self {
            owner_id,
            outfits: Vec::new(),
            plans: Vec::new(),
        }
    }

    /// A store pre-filled with the demo outfits and this week's plans.
    /// `item_ids` is the seeded closet in its original order.
    pub fn with_demo_data(owner_id: Uuid, item_ids: &[Uuid]) -> Self {
        let mut store = Self::new(owner_id);
        store.outfits = demo_outfits(owner_id, item_ids);
        store.plans = demo_plans(owner_id, &store.outfits);
        store
    }

    /// Appends a new outfit. A missing name becomes "Outfit N" where N is the
    /// current count plus one. Returns the new outfit's id.
    pub fn create_outfit(&mut self, draft: OutfitDraft) -> Uuid {
        let outfit = Outfit {
            id: Uuid::new_v4(),
            user_id: self.owner_id,
            name: draft
                .name
                .unwrap_or_else(|| format!("Outfit {}", self.outfits.len() + 1)),
            items: draft.items.unwrap_or_default(),
            occasion: draft.occasion.unwrap_or_else(|| vec![Occasion::Casual]),
            season: draft.season.unwrap_or_else(|| vec![Season::Spring]),
            favorite: draft.favorite.unwrap_or(false),
            last_worn: None,
            times_worn: 0,
            date_added: Utc::now(),
        };
        info!(outfit_id = %outfit.id, name = %outfit.name, "outfit created");

        let id = outfit.id;
        self.outfits.push(outfit);
        id
    }

    pub fn update_outfit(&mut self, id: Uuid, update: OutfitUpdate) {
        let Some(outfit) = self.outfits.iter_mut().find(|outfit| outfit.id == id) else {
            debug!(%id, "update for unknown outfit ignored");
            return;
        };
        if let Some(name) = update.name {
            outfit.name = name;
        }
        if let Some(items) = update.items {
            outfit.items = items;
        }
        if let Some(occasion) = update.occasion {
            outfit.occasion = occasion;
        }
        if let Some(season) = update.season {
            outfit.season = season;
        }
        if let Some(favorite) = update.favorite {
            outfit.favorite = favorite;
        }
        if let Some(last_worn) = update.last_worn {
            outfit.last_worn = Some(last_worn);
        }
        if let Some(times_worn) = update.times_worn {
            outfit.times_worn = times_worn;
        }
    }

    /// Removes the matching outfit. Plans referencing it keep their dangling
    /// outfit id.
    pub fn delete_outfit(&mut self, id: Uuid) {
        self.outfits.retain(|outfit| outfit.id != id);
    }

    /// Appends a plan. A missing date defaults to today.
    pub fn add_plan(&mut self, draft: PlanDraft) -> Uuid {
        let plan = OutfitPlan {
            id: Uuid::new_v4(),
            user_id: self.owner_id,
            date: draft.date.unwrap_or_else(|| Utc::now().date_naive()),
            outfit_id: draft.outfit_id,
            weather: draft.weather,
        };
        info!(plan_id = %plan.id, date = %plan.date, "outfit planned");

        let id = plan.id;
        self.plans.push(plan);
        id
    }

    pub fn update_plan(&mut self, id: Uuid, update: PlanUpdate) {
        let Some(plan) = self.plans.iter_mut().find(|plan| plan.id == id) else {
            debug!(%id, "update for unknown plan ignored");
            return;
        };
        if let Some(date) = update.date {
            plan.date = date;
        }
        if let Some(outfit_id) = update.outfit_id {
            plan.outfit_id = outfit_id;
        }
        if let Some(weather) = update.weather {
            plan.weather = Some(weather);
        }
    }

    pub fn delete_plan(&mut self, id: Uuid) {
        self.plans.retain(|plan| plan.id != id);
    }

    pub fn outfits(&self) -> &[Outfit] {
        &self.outfits
    }

    pub fn outfit(&self, id: Uuid) -> Option<&Outfit> {
        self.outfits.iter().find(|outfit| outfit.id == id)
    }

    pub fn plans(&self) -> &[OutfitPlan] {
        &self.plans
    }

    pub fn outfits_by_occasion(&self, occasion: Occasion) -> Vec<&Outfit> {
        self.outfits
            .iter()
            .filter(|outfit| outfit.occasion.contains(&occasion))
            .collect()
    }

    pub fn outfits_by_season(&self, season: Season) -> Vec<&Outfit> {
        self.outfits
            .iter()
            .filter(|outfit| outfit.season.contains(&season))
            .collect()
    }

    /// Plans whose date falls in the closed interval `[start, end]`.
    pub fn plans_for_date_range(&self, start: NaiveDate, end: NaiveDate) -> Vec<&OutfitPlan> {
        self.plans
            .iter()
            .filter(|plan| start <= plan.date && plan.date <= end)
            .collect()
    }

    pub fn favorite_outfits(&self) -> Vec<&Outfit> {
        self.outfits.iter().filter(|outfit| outfit.favorite).collect()
    }

    /// The `n` newest outfits, most recently added first.
    pub fn recently_added(&self, n: usize) -> Vec<&Outfit> {
        let mut sorted: Vec<&Outfit> = self.outfits.iter().collect();
        sorted.sort_by(|a, b| b.date_added.cmp(&a.date_added));
        sorted.truncate(n);
        sorted
    }
}

fn demo_outfits(owner_id: Uuid, item_ids: &[Uuid]) -> Vec<Outfit> {
    let now = Utc::now();
    let pick = |indices: &[usize]| -> Vec<Uuid> {
        indices
            .iter()
            .filter_map(|&i| item_ids.get(i).copied())
            .collect()
    };
    let entry = |days_ago: i64,
                 name: &str,
                 items: Vec<Uuid>,
                 occasion: Vec<Occasion>,
                 season: Vec<Season>,
                 favorite: bool,
                 times_worn: u32| Outfit {
        id: Uuid::new_v4(),
        user_id: owner_id,
        name: name.to_string(),
        items,
        occasion,
        season,
        favorite,
        last_worn: None,
        times_worn,
        date_added: now - Duration::days(days_ago),
    };

    vec![
        entry(
            90,
            "Casual Summer Day",
            pick(&[0, 1, 4]),
            vec![Occasion::Casual],
            vec![Season::Summer],
            true,
            3,
        ),
        entry(
            30,
            "Office Meeting",
            pick(&[0, 3, 4]),
            vec![Occasion::Office, Occasion::SemiFormal],
            vec![Season::Fall],
            false,
            1,
        ),
        entry(
            60,
            "Weekend Brunch",
            pick(&[2, 4]),
            vec![Occasion::Casual, Occasion::SemiFormal],
            vec![Season::Summer],
            true,
            2,
        ),
    ]
}

fn demo_plans(owner_id: Uuid, outfits: &[Outfit]) -> Vec<OutfitPlan> {
    let today = Utc::now().date_naive();
    let snapshot = |temperature: f64, condition: WeatherCondition, precipitation: u8, humidity: u8, wind_speed: f64| {
        WeatherSnapshot {
            temperature,
            condition,
            precipitation,
            humidity,
            wind_speed,
        }
    };

    outfits
        .iter()
        .take(3)
        .zip([
            (0i64, snapshot(28.0, WeatherCondition::Sunny, 0, 65, 10.0)),
            (1, snapshot(22.0, WeatherCondition::PartlyCloudy, 20, 70, 15.0)),
            (2, snapshot(26.0, WeatherCondition::Sunny, 0, 60, 8.0)),
        ])
        .map(|(outfit, (offset, weather))| OutfitPlan {
            id: Uuid::new_v4(),
            user_id: owner_id,
            date: today + Duration::days(offset),
            outfit_id: outfit.id,
            weather: Some(weather),
        })
        .collect()
}
