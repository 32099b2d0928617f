// Essen-Check Dish Matcher
// Known-dish fallback for unrecognized ingredient text

use crate::database::{Database, DishEntry};
use rustc_hash::FxHashSet;

/// Shorter side of a containment check must have at least this many
/// characters, so single/double-letter input never matches a dish.
const MIN_MATCH_LEN: usize = 3;

/// Substring matcher over the known-dish table
///
/// Free text that resembles a known composite dish should not silently
/// resolve to SAFE, so the engine unions in the allergens of every dish
/// whose name contains the item (or vice versa). Over-flagging is
/// preferred to under-flagging.
#[derive(Debug, Clone)]
pub struct DishMatcher {
    dishes: Vec<DishEntry>,
    lowered_names: Vec<String>,
}

impl DishMatcher {
    /// Create a matcher over the database's dish table
    pub fn new(db: &Database) -> Self {
        let dishes = db.dishes().to_vec();
        let lowered_names = dishes.iter().map(|d| d.name.to_lowercase()).collect();
        Self {
            dishes,
            lowered_names,
        }
    }

    /// Collect the allergen ids of every dish matching the item
    ///
    /// Containment is bidirectional and case-insensitive: "Vanille"
    /// matches "Pudding / Vanillesoße", and a fully typed-out dish name
    /// matches its entry even with trailing words.
    pub fn match_item(&self, item: &str) -> Vec<String> {
        let lowered = item.to_lowercase();

        let mut seen = FxHashSet::default();
        let mut allergens = Vec::new();

        for (dish, name) in self.dishes.iter().zip(&self.lowered_names) {
            if !contains_either(&lowered, name) {
                continue;
            }
            for id in &dish.allergens {
                if seen.insert(id.clone()) {
                    allergens.push(id.clone());
                }
            }
        }

        allergens
    }

    /// All known dishes in definition order
    pub fn all(&self) -> &[DishEntry] {
        &self.dishes
    }

    /// Case-insensitive substring filter over dish names
    ///
    /// Backs the dish-browsing interface; an empty query returns every
    /// dish.
    pub fn find(&self, query: &str) -> Vec<&DishEntry> {
        let lowered = query.trim().to_lowercase();
        self.dishes
            .iter()
            .zip(&self.lowered_names)
            .filter(|(_, name)| name.contains(&lowered))
            .map(|(dish, _)| dish)
            .collect()
    }
}

/// Bidirectional containment with the minimum-length guard applied to
/// the shorter string
fn contains_either(item: &str, dish_name: &str) -> bool {
    let shorter = item.chars().count().min(dish_name.chars().count());
    if shorter < MIN_MATCH_LEN {
        return false;
    }
    dish_name.contains(item) || item.contains(dish_name)
}
