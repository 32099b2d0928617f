// Essen-Check Risk Resolver
// Combines keyword and dish matches into one classification per item

use crate::database::Database;
use crate::types::{Classification, KeywordMatches, RiskLevel};
use rustc_hash::FxHashMap;

/// Resolves match sets into a [`Classification`]
///
/// Severity precedence is `Deadly > Dangerous > Caution > Safe`; each
/// category carries its own fixed severity, looked up from the
/// definition table, never inferred from the matched text.
#[derive(Debug, Clone)]
pub struct RiskResolver {
    severities: FxHashMap<String, RiskLevel>,
    order: FxHashMap<String, usize>,
}

impl RiskResolver {
    /// Create a resolver over the database's category table
    pub fn new(db: &Database) -> Self {
        let mut severities = FxHashMap::default();
        let mut order = FxHashMap::default();

        for (pos, category) in db.categories().iter().enumerate() {
            severities.insert(category.id.clone(), category.severity);
            order.insert(category.id.clone(), pos);
        }

        Self { severities, order }
    }

    /// Number of configured allergen categories
    pub fn category_count(&self) -> usize {
        self.severities.len()
    }

    /// Resolve one item's matches into a classification
    ///
    /// The combined set is the union of direct keyword matches and
    /// dish-derived matches, deduplicated and ordered by category
    /// definition order. The level is the maximum severity in the
    /// combined set, or SAFE when it is empty.
    pub fn resolve(
        &self,
        text: &str,
        keyword_matches: KeywordMatches,
        dish_matches: Vec<String>,
    ) -> Classification {
        let mut combined: Vec<String> = keyword_matches.matched.clone();
        for id in &dish_matches {
            if !combined.contains(id) {
                combined.push(id.clone());
            }
        }
        combined.sort_by_key(|id| self.order.get(id).copied().unwrap_or(usize::MAX));

        let level = combined
            .iter()
            .filter_map(|id| self.severities.get(id).copied())
            .max()
            .unwrap_or(RiskLevel::Safe);

        Classification {
            text: text.to_string(),
            level,
            matched: combined,
            direct: keyword_matches.matched,
            via_dishes: dish_matches,
            suppressed: keyword_matches.suppressed,
        }
    }
}
