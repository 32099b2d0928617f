// Essen-Check Classification Engine
// Main API that orchestrates all components

use crate::database::{Database, DishEntry};
use crate::dishes::DishMatcher;
use crate::matcher::AllergenMatcher;
use crate::normalizer::Normalizer;
use crate::resolver::RiskResolver;
use crate::types::{Classification, ConfigError};

/// Main allergen classification engine
///
/// Combines all components:
/// - Normalizer (multi-item parsing and deduplication)
/// - Allergen matcher (compound-word-safe keyword matching)
/// - Dish matcher (known-dish fallback for unrecognized text)
/// - Risk resolver (severity precedence and labels)
///
/// Classification is a pure function of the immutable configuration and
/// the input text; a loaded checker can be shared freely across threads.
pub struct FoodChecker {
    normalizer: Normalizer,
    matcher: AllergenMatcher,
    dishes: DishMatcher,
    resolver: RiskResolver,
}

impl FoodChecker {
    /// Create a checker from the embedded databases
    ///
    /// Fails fast on any configuration problem; no classification call
    /// is ever served from partially loaded data.
    pub fn new() -> Result<Self, ConfigError> {
        Self::with_database(Database::load()?)
    }

    /// Create a checker from an explicit database handle
    pub fn with_database(db: Database) -> Result<Self, ConfigError> {
        Ok(Self {
            normalizer: Normalizer::new()?,
            matcher: AllergenMatcher::new(&db),
            dishes: DishMatcher::new(&db),
            resolver: RiskResolver::new(&db),
        })
    }

    /// Classify every item in a raw text blob
    ///
    /// One result per unique parsed item, in first-seen order.
    ///
    /// # Example
    /// ```
    /// # use essen_check::FoodChecker;
    /// let checker = FoodChecker::new()?;
    /// let results = checker.classify_all("Mehl, Zucker, Eier");
    /// assert_eq!(results.len(), 3);
    /// assert_eq!(results[2].label(), "Lebensgefahr");
    /// # Ok::<(), essen_check::ConfigError>(())
    /// ```
    pub fn classify_all(&self, raw_text: &str) -> Vec<Classification> {
        self.normalizer
            .parse_items(raw_text)
            .into_iter()
            .map(|item| self.classify_item(&item))
            .collect()
    }

    /// Classify a single-item input
    ///
    /// Returns `None` for empty or whitespace-only text. If the line
    /// contains delimiters, the first parsed item wins.
    pub fn classify_single(&self, text: &str) -> Option<Classification> {
        self.classify_all(text).into_iter().next()
    }

    fn classify_item(&self, item: &str) -> Classification {
        let keyword_matches = self.matcher.match_item(item);

        // The dish table is a fallback for unrecognized text only; an
        // item the keyword pass already decided (matched or explicitly
        // safe) must not inherit extra allergens from dish names.
        let dish_matches = if keyword_matches.is_empty() {
            self.dishes.match_item(item)
        } else {
            Vec::new()
        };

        self.resolver.resolve(item, keyword_matches, dish_matches)
    }

    /// All known dishes, for the dish-browsing interface
    pub fn dishes(&self) -> &[DishEntry] {
        self.dishes.all()
    }

    /// Case-insensitive substring filter over dish names
    pub fn search_dishes(&self, query: &str) -> Vec<&DishEntry> {
        self.dishes.find(query)
    }

    /// Counts of (allergen categories, known dishes)
    pub fn stats(&self) -> (usize, usize) {
        (self.resolver.category_count(), self.dishes.all().len())
    }
}
