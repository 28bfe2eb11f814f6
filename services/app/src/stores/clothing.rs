//! services/app/src/stores/clothing.rs
//!
//! The closet: an in-memory collection of clothing items owned by one user.
//! Uploads run through the `ImageAnalysisService` port (the simulated
//! AI categorization step); everything else is synchronous list surgery.

use std::sync::Arc;

use chrono::{Duration, Utc};
use tracing::{debug, info};
use uuid::Uuid;
use wardrobe_core::domain::{
    Category, ClothingItem, ImageUpload, ItemMetadata, Occasion, Season,
};
use wardrobe_core::ports::{ImageAnalysisService, PortResult};

/// A partial update merged into an existing item. `None` fields are left
/// untouched. Wear tracking happens through here as well: there is no
/// dedicated "wore this" mutator, callers bump `times_worn` themselves.
#[derive(Debug, Clone, Default)]
pub struct ItemUpdate {
    pub image_url: Option<String>,
    pub category: Option<Category>,
    pub sub_category: Option<String>,
    pub color: Option<String>,
    pub season: Option<Vec<Season>>,
    pub occasion: Option<Vec<Occasion>>,
    pub tags: Option<Vec<String>>,
    pub favorite: Option<bool>,
    pub last_worn: Option<chrono::DateTime<Utc>>,
    pub times_worn: Option<u32>,
}

pub struct ClothingStore {
    owner_id: Uuid,
    items: Vec<ClothingItem>,
    loading: bool,
    vision: Arc<dyn ImageAnalysisService>,
}

impl ClothingStore {
    pub fn new(owner_id: Uuid, vision: Arc<dyn ImageAnalysisService>) -> Self {
        Self {
            owner_id,
            items: Vec::new(),
            loading: false,
            vision,
        }
    }

    /// A store pre-filled with the demo closet.
    pub fn with_demo_items(owner_id: Uuid, vision: Arc<dyn ImageAnalysisService>) -> Self {
        let mut store = Self::new(owner_id, vision);
        store.items = demo_items(owner_id);
        store
    }

    /// Uploads a photo and appends the resulting item. The analysis service
    /// supplies suggested metadata after its simulated processing delay;
    /// caller-supplied fields override it, and anything still unset falls
    /// back to the standard defaults. Returns the new item's id.
    pub async fn upload_item(
        &mut self,
        upload: ImageUpload,
        overrides: ItemMetadata,
    ) -> PortResult<Uuid> {
        self.loading = true;
        let suggested = match self.vision.analyze(&upload).await {
            Ok(metadata) => metadata,
            Err(e) => {
                self.loading = false;
                return Err(e);
            }
        };
        let merged = overrides.merged_over(suggested);

        let item = ClothingItem {
            id: Uuid::new_v4(),
            user_id: self.owner_id,
            image_url: merged
                .image_url
                .unwrap_or_else(|| format!("mock://uploads/{}", upload.file_name)),
            category: merged.category.unwrap_or(Category::Tops),
            sub_category: merged.sub_category,
            color: merged.color.unwrap_or_else(|| "unknown".to_string()),
            season: merged.season.unwrap_or_else(|| vec![Season::Spring]),
            occasion: merged.occasion.unwrap_or_else(|| vec![Occasion::Casual]),
            tags: merged.tags.unwrap_or_default(),
            favorite: merged.favorite.unwrap_or(false),
            last_worn: None,
            times_worn: 0,
            date_added: Utc::now(),
        };
        info!(item_id = %item.id, category = ?item.category, "clothing item added");

        let id = item.id;
        self.items.push(item);
        self.loading = false;
        Ok(id)
    }

    /// Merges `update` into the matching item. Unknown ids are a silent no-op.
    pub fn update_item(&mut self, id: Uuid, update: ItemUpdate) {
        let Some(item) = self.items.iter_mut().find(|item| item.id == id) else {
            debug!(%id, "update for unknown clothing item ignored");
            return;
        };
        if let Some(image_url) = update.image_url {
            item.image_url = image_url;
        }
        if let Some(category) = update.category {
            item.category = category;
        }
        if let Some(sub_category) = update.sub_category {
            item.sub_category = Some(sub_category);
        }
        if let Some(color) = update.color {
            item.color = color;
        }
        if let Some(season) = update.season {
            item.season = season;
        }
        if let Some(occasion) = update.occasion {
            item.occasion = occasion;
        }
        if let Some(tags) = update.tags {
            item.tags = tags;
        }
        if let Some(favorite) = update.favorite {
            item.favorite = favorite;
        }
        if let Some(last_worn) = update.last_worn {
            item.last_worn = Some(last_worn);
        }
        if let Some(times_worn) = update.times_worn {
            item.times_worn = times_worn;
        }
    }

    /// Removes the matching item. Unknown ids are a silent no-op. Outfits
    /// referencing the removed item keep their dangling ids.
    pub fn delete_item(&mut self, id: Uuid) {
        self.items.retain(|item| item.id != id);
    }

    pub fn items(&self) -> &[ClothingItem] {
        &self.items
    }

    pub fn item(&self, id: Uuid) -> Option<&ClothingItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn items_by_category(&self, category: Category) -> Vec<&ClothingItem> {
        self.items
            .iter()
            .filter(|item| item.category == category)
            .collect()
    }

    pub fn items_by_season(&self, season: Season) -> Vec<&ClothingItem> {
        self.items
            .iter()
            .filter(|item| item.season.contains(&season))
            .collect()
    }

    pub fn items_by_occasion(&self, occasion: Occasion) -> Vec<&ClothingItem> {
        self.items
            .iter()
            .filter(|item| item.occasion.contains(&occasion))
            .collect()
    }

    pub fn favorites(&self) -> Vec<&ClothingItem> {
        self.items.iter().filter(|item| item.favorite).collect()
    }

    /// Looks up a list of item ids, silently skipping any that no longer
    /// resolve. This is the one sanctioned way to follow outfit references.
    pub fn resolve_items(&self, ids: &[Uuid]) -> Vec<&ClothingItem> {
        ids.iter().filter_map(|id| self.item(*id)).collect()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }
}

/// The five items every demo closet starts with.
fn demo_items(owner_id: Uuid) -> Vec<ClothingItem> {
    let now = Utc::now();
    let entry = |days_ago: i64,
                 image_url: &str,
                 category: Category,
                 sub_category: &str,
                 color: &str,
                 season: Vec<Season>,
                 occasion: Vec<Occasion>,
                 tags: &[&str],
                 favorite: bool,
                 times_worn: u32| ClothingItem {
        id: Uuid::new_v4(),
        user_id: owner_id,
        image_url: image_url.to_string(),
        category,
        sub_category: Some(sub_category.to_string()),
        color: color.to_string(),
        season,
        occasion,
        tags: tags.iter().map(|t| t.to_string()).collect(),
        favorite,
        last_worn: None,
        times_worn,
        date_added: now - Duration::days(days_ago),
    };

    vec![
        entry(
            120,
            "https://images.pexels.com/photos/6069552/pexels-photo-6069552.jpeg",
            Category::Tops,
            "T-Shirt",
            "blue",
            vec![Season::Spring, Season::Summer],
            vec![Occasion::Casual],
            &["cotton", "favorite"],
            true,
            5,
        ),
        entry(
            200,
            "https://images.pexels.com/photos/5693889/pexels-photo-5693889.jpeg",
            Category::Bottoms,
            "Jeans",
            "blue",
            vec![Season::Fall, Season::Winter, Season::Spring],
            vec![Occasion::Casual, Occasion::WorkFromHome],
            &["denim", "everyday"],
            false,
            12,
        ),
        entry(
            80,
            "https://images.pexels.com/photos/6208684/pexels-photo-6208684.jpeg",
            Category::Dresses,
            "Casual Dress",
            "green",
            vec![Season::Summer],
            vec![Occasion::Casual, Occasion::SemiFormal],
            &["floral", "summer"],
            true,
            3,
        ),
        entry(
            240,
            "https://images.pexels.com/photos/6046183/pexels-photo-6046183.jpeg",
            Category::Outerwear,
            "Jacket",
            "black",
            vec![Season::Fall, Season::Winter],
            vec![Occasion::Casual, Occasion::Office],
            &["leather", "warm"],
            false,
            8,
        ),
        entry(
            170,
            "https://images.pexels.com/photos/1456706/pexels-photo-1456706.jpeg",
            Category::Shoes,
            "Sneakers",
            "white",
            vec![Season::Spring, Season::Summer, Season::Fall],
            vec![Occasion::Casual, Occasion::Athletic],
            &["comfortable", "everyday"],
            true,
            20,
        ),
    ]
}
