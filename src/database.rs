// Essen-Check Database
// Embedded allergen and dish configuration, loaded and validated once at startup

use crate::types::{ConfigError, RiskLevel};
use rustc_hash::FxHashMap;
use serde::Deserialize;

/// Embedded allergen category table (JSON)
pub const ALLERGEN_DATA: &str = include_str!("../data/allergens.json");

/// Embedded known-dish table (JSON)
pub const DISH_DATA: &str = include_str!("../data/dishes.json");

/// One allergen category from the curated database
///
/// Severity is a static property of the category, never derived from the
/// matched text. Trigger and exception keywords are stored lowercased.
#[derive(Debug, Clone, Deserialize)]
pub struct AllergenCategory {
    /// Stable identifier, e.g. "eggs"
    pub id: String,

    /// Display name, e.g. "Eier / Eggs"
    pub name: String,

    /// Fixed severity (caution, dangerous or deadly)
    pub severity: RiskLevel,

    /// Keywords whose boundary-aware presence marks the category as matched
    pub triggers: Vec<String>,

    /// Keywords that suppress the category even when a trigger also hit
    pub exceptions: Vec<String>,
}

/// A known composite dish and the allergen categories it contains
#[derive(Debug, Clone, Deserialize)]
pub struct DishEntry {
    /// Dish name as displayed, e.g. "Pudding / Vanillesoße"
    pub name: String,

    /// Category ids this dish is known to contain
    pub allergens: Vec<String>,
}

/// Immutable configuration handle for the whole engine
///
/// Loaded once at startup; validation is fail-fast so that no
/// classification call can ever be served from partial data.
#[derive(Debug, Clone)]
pub struct Database {
    categories: Vec<AllergenCategory>,
    dishes: Vec<DishEntry>,
    index: FxHashMap<String, usize>,
}

impl Database {
    /// Load and validate the embedded databases
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_json(ALLERGEN_DATA, DISH_DATA)
    }

    /// Load a database from JSON strings (embedded data in production,
    /// handcrafted fixtures in tests)
    pub fn from_json(allergens: &str, dishes: &str) -> Result<Self, ConfigError> {
        let categories: Vec<AllergenCategory> =
            serde_json::from_str(allergens).map_err(ConfigError::InvalidAllergenData)?;
        let dishes: Vec<DishEntry> =
            serde_json::from_str(dishes).map_err(ConfigError::InvalidDishData)?;
        Self::new(categories, dishes)
    }

    /// Build a database from already-parsed entries, validating invariants
    pub fn new(
        mut categories: Vec<AllergenCategory>,
        dishes: Vec<DishEntry>,
    ) -> Result<Self, ConfigError> {
        let mut index = FxHashMap::default();

        for (pos, category) in categories.iter_mut().enumerate() {
            if category.id.is_empty() {
                return Err(ConfigError::EmptyCategoryId);
            }
            if category.severity == RiskLevel::Safe {
                return Err(ConfigError::SafeSeverity {
                    id: category.id.clone(),
                });
            }
            if category.triggers.is_empty() {
                return Err(ConfigError::EmptyTriggers {
                    id: category.id.clone(),
                });
            }

            // Matching is case-insensitive; keep the keywords lowercase so
            // the matcher only has to fold the input text.
            for keyword in category.triggers.iter_mut().chain(&mut category.exceptions) {
                if keyword.is_empty() {
                    return Err(ConfigError::EmptyKeyword {
                        id: category.id.clone(),
                    });
                }
                *keyword = keyword.to_lowercase();
            }

            if index.insert(category.id.clone(), pos).is_some() {
                return Err(ConfigError::DuplicateCategory {
                    id: category.id.clone(),
                });
            }
        }

        for dish in &dishes {
            if dish.name.trim().is_empty() {
                return Err(ConfigError::EmptyDishName);
            }
            if dish.allergens.is_empty() {
                return Err(ConfigError::EmptyDishAllergens {
                    dish: dish.name.clone(),
                });
            }
            for id in &dish.allergens {
                if !index.contains_key(id) {
                    return Err(ConfigError::UnknownDishCategory {
                        dish: dish.name.clone(),
                        id: id.clone(),
                    });
                }
            }
        }

        Ok(Self {
            categories,
            dishes,
            index,
        })
    }

    /// All allergen categories in definition order
    pub fn categories(&self) -> &[AllergenCategory] {
        &self.categories
    }

    /// All known dishes in definition order
    pub fn dishes(&self) -> &[DishEntry] {
        &self.dishes
    }

    /// Definition-order position of a category id
    pub fn position(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }

    /// Severity of a category id
    pub fn severity(&self, id: &str) -> Option<RiskLevel> {
        self.index.get(id).map(|&pos| self.categories[pos].severity)
    }
}
