//! services/app/src/stats.rs
//!
//! Read-only wardrobe statistics computed over the current store contents.
//! Nothing here mutates state; the presentation layer calls this on demand.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;
use wardrobe_core::domain::{Category, Season};

use crate::stores::{ClothingStore, OutfitStore};

const TOP_N: usize = 5;
const RECENT_N: usize = 3;

#[derive(Debug, Clone, Serialize)]
pub struct CategoryBreakdown {
    pub category: Category,
    pub count: usize,
    pub percentage: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct SeasonBreakdown {
    pub season: Season,
    pub count: usize,
    pub percentage: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct ColorBreakdown {
    pub color: String,
    pub count: usize,
}

/// One row of a most-worn ranking, for items and outfits alike.
#[derive(Debug, Clone, Serialize)]
pub struct WornEntry {
    pub id: Uuid,
    pub label: String,
    pub times_worn: u32,
}

/// One row of the newest-outfits list.
#[derive(Debug, Clone, Serialize)]
pub struct RecentEntry {
    pub id: Uuid,
    pub name: String,
    pub date_added: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct WardrobeStats {
    pub total_items: usize,
    pub total_outfits: usize,
    pub favorite_items: usize,
    pub favorite_outfits: usize,
    pub categories: Vec<CategoryBreakdown>,
    pub seasons: Vec<SeasonBreakdown>,
    pub top_colors: Vec<ColorBreakdown>,
    pub most_worn_items: Vec<WornEntry>,
    pub most_worn_outfits: Vec<WornEntry>,
    pub recently_added: Vec<RecentEntry>,
}

/// Computes the full statistics view over both collections.
pub fn wardrobe_stats(clothing: &ClothingStore, outfits: &OutfitStore) -> WardrobeStats {
    let items = clothing.items();
    let total_items = items.len();

    let categories = Category::ALL
        .iter()
        .map(|&category| {
            let count = items.iter().filter(|item| item.category == category).count();
            CategoryBreakdown {
                category,
                count,
                percentage: percentage(count, total_items),
            }
        })
        .collect();

    let seasons = Season::ALL
        .iter()
        .map(|&season| {
            let count = items
                .iter()
                .filter(|item| item.season.contains(&season))
                .count();
            SeasonBreakdown {
                season,
                count,
                percentage: percentage(count, total_items),
            }
        })
        .collect();

    let mut color_counts: HashMap<&str, usize> = HashMap::new();
    for item in items {
        *color_counts.entry(item.color.as_str()).or_insert(0) += 1;
    }
    let mut top_colors: Vec<ColorBreakdown> = color_counts
        .into_iter()
        .map(|(color, count)| ColorBreakdown {
            color: color.to_string(),
            count,
        })
        .collect();
    // Count descending, color name as the deterministic tie-break.
    top_colors.sort_by(|a, b| b.count.cmp(&a.count).then(a.color.cmp(&b.color)));
    top_colors.truncate(TOP_N);

    let mut most_worn_items: Vec<WornEntry> = items
        .iter()
        .map(|item| WornEntry {
            id: item.id,
            label: item
                .sub_category
                .clone()
                .unwrap_or_else(|| item.color.clone()),
            times_worn: item.times_worn,
        })
        .collect();
    most_worn_items.sort_by(|a, b| b.times_worn.cmp(&a.times_worn));
    most_worn_items.truncate(TOP_N);

    let mut most_worn_outfits: Vec<WornEntry> = outfits
        .outfits()
        .iter()
        .map(|outfit| WornEntry {
            id: outfit.id,
            label: outfit.name.clone(),
            times_worn: outfit.times_worn,
        })
        .collect();
    most_worn_outfits.sort_by(|a, b| b.times_worn.cmp(&a.times_worn));
    most_worn_outfits.truncate(TOP_N);

    let recently_added = outfits
        .recently_added(RECENT_N)
        .into_iter()
        .map(|outfit| RecentEntry {
            id: outfit.id,
            name: outfit.name.clone(),
            date_added: outfit.date_added,
        })
        .collect();

    WardrobeStats {
        total_items,
        total_outfits: outfits.outfits().len(),
        favorite_items: clothing.favorites().len(),
        favorite_outfits: outfits.favorite_outfits().len(),
        categories,
        seasons,
        top_colors,
        most_worn_items,
        most_worn_outfits,
        recently_added,
    }
}

fn percentage(count: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    ((count as f64 / total as f64) * 100.0).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::MockVisionAdapter;
    use std::sync::Arc;
    use std::time::Duration;

    fn seeded() -> (ClothingStore, OutfitStore) {
        let owner = Uuid::new_v4();
        let clothing = ClothingStore::with_demo_items(
            owner,
            Arc::new(MockVisionAdapter::new(Duration::ZERO)),
        );
        let item_ids: Vec<Uuid> = clothing.items().iter().map(|i| i.id).collect();
        let outfits = OutfitStore::with_demo_data(owner, &item_ids);
        (clothing, outfits)
    }

    #[test]
    fn totals_and_favorites_over_the_demo_wardrobe() {
        let (clothing, outfits) = seeded();
        let stats = wardrobe_stats(&clothing, &outfits);

        assert_eq!(stats.total_items, 5);
        assert_eq!(stats.total_outfits, 3);
        assert_eq!(stats.favorite_items, 3);
        assert_eq!(stats.favorite_outfits, 2);
    }

    #[test]
    fn category_breakdown_covers_every_category_with_rounded_percentages() {
        let (clothing, outfits) = seeded();
        let stats = wardrobe_stats(&clothing, &outfits);

        assert_eq!(stats.categories.len(), Category::ALL.len());
        // Demo closet has exactly one item per non-accessory category.
        for row in &stats.categories {
            match row.category {
                Category::Accessories => {
                    assert_eq!(row.count, 0);
                    assert_eq!(row.percentage, 0);
                }
                _ => {
                    assert_eq!(row.count, 1);
                    assert_eq!(row.percentage, 20);
                }
            }
        }
    }

    #[test]
    fn most_worn_rankings_are_descending() {
        let (clothing, outfits) = seeded();
        let stats = wardrobe_stats(&clothing, &outfits);

        assert_eq!(stats.most_worn_items[0].label, "Sneakers");
        assert_eq!(stats.most_worn_items[0].times_worn, 20);
        assert!(stats
            .most_worn_items
            .windows(2)
            .all(|w| w[0].times_worn >= w[1].times_worn));

        assert_eq!(stats.most_worn_outfits[0].label, "Casual Summer Day");
    }

    #[test]
    fn recently_added_lists_the_three_newest_outfits_first() {
        let (clothing, outfits) = seeded();
        let stats = wardrobe_stats(&clothing, &outfits);

        let names: Vec<&str> = stats
            .recently_added
            .iter()
            .map(|entry| entry.name.as_str())
            .collect();
        assert_eq!(names, vec!["Office Meeting", "Weekend Brunch", "Casual Summer Day"]);
        assert!(stats
            .recently_added
            .windows(2)
            .all(|w| w[0].date_added >= w[1].date_added));
    }

    #[test]
    fn top_colors_rank_by_count() {
        let (clothing, outfits) = seeded();
        let stats = wardrobe_stats(&clothing, &outfits);

        // blue appears twice, every other color once.
        assert_eq!(stats.top_colors[0].color, "blue");
        assert_eq!(stats.top_colors[0].count, 2);
        assert_eq!(stats.top_colors.len(), 4);
    }

    #[test]
    fn empty_stores_produce_all_zeroes() {
        let clothing = ClothingStore::new(
            Uuid::new_v4(),
            Arc::new(MockVisionAdapter::new(Duration::ZERO)),
        );
        let outfits = OutfitStore::new(Uuid::new_v4());
        let stats = wardrobe_stats(&clothing, &outfits);

        assert_eq!(stats.total_items, 0);
        assert!(stats.categories.iter().all(|row| row.percentage == 0));
        assert!(stats.top_colors.is_empty());
        assert!(stats.most_worn_items.is_empty());
        assert!(stats.recently_added.is_empty());
    }
}
