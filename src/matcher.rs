// Essen-Check Allergen Matcher
// Compound-word-safe keyword matching with safe-exception suppression

use crate::database::{AllergenCategory, Database};
use crate::types::KeywordMatches;

/// Keyword matcher over the allergen category table
///
/// The boundary rule is the correctness-critical part: German compounds
/// concatenate freely, so a naive substring search would flag "Ei"
/// inside "Rindfleisch". An occurrence only counts when it sits at a
/// compound boundary (see [`keyword_hits`]).
#[derive(Debug, Clone)]
pub struct AllergenMatcher {
    categories: Vec<AllergenCategory>,
}

impl AllergenMatcher {
    /// Create a matcher over the database's category table
    pub fn new(db: &Database) -> Self {
        Self {
            categories: db.categories().to_vec(),
        }
    }

    /// Match one ingredient against every category
    ///
    /// Returns the matched category ids plus the ids whose trigger hit
    /// was cancelled by a safe-exception keyword. Exceptions always win
    /// over triggers; the two passes are kept separate so that the
    /// precedence stays structurally obvious.
    ///
    /// # Example
    /// ```
    /// # use essen_check::database::Database;
    /// # use essen_check::matcher::AllergenMatcher;
    /// let matcher = AllergenMatcher::new(&Database::load().unwrap());
    /// let hits = matcher.match_item("Spiegelei");
    /// assert_eq!(hits.matched, vec!["eggs"]);
    /// ```
    pub fn match_item(&self, item: &str) -> KeywordMatches {
        let lowered = item.to_lowercase();
        let mut result = KeywordMatches::default();

        for category in &self.categories {
            let triggered = category
                .triggers
                .iter()
                .any(|keyword| keyword_hits(&lowered, keyword));
            if !triggered {
                continue;
            }

            let excepted = category
                .exceptions
                .iter()
                .any(|keyword| keyword_hits(&lowered, keyword));

            if excepted {
                result.suppressed.push(category.id.clone());
            } else {
                result.matched.push(category.id.clone());
            }
        }

        result
    }
}

/// Boundary-aware keyword test against an already-lowercased item
///
/// An occurrence is accepted when it starts at a word boundary (start of
/// the text or preceded by a non-letter) or ends at one (end of the text
/// or followed by a non-letter). That accepts whole words ("Ei"),
/// compound prefixes ("Eierkuchen") and compound suffixes ("Spiegelei",
/// "Walnuss"), and rejects infix occurrences ("Rindfleisch",
/// "Schweinefilet").
pub fn keyword_hits(text: &str, keyword: &str) -> bool {
    if keyword.is_empty() {
        return false;
    }

    for (start, _) in text.match_indices(keyword) {
        let before = text[..start].chars().next_back();
        let after = text[start + keyword.len()..].chars().next();

        let starts_word = before.map_or(true, |c| !c.is_alphabetic());
        let ends_word = after.map_or(true, |c| !c.is_alphabetic());

        if starts_word || ends_word {
            return true;
        }
    }

    false
}
