// Essen-Check Type Definitions
// Core types for risk levels and classification results

use serde::Deserialize;
use thiserror::Error;

/// Risk level of an ingredient or allergen category
///
/// Ordered ascending so that `max()` picks the most severe level:
/// `Safe < Caution < Dangerous < Deadly`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    /// No non-suppressed allergen matched
    Safe,
    /// Tolerated in small amounts (e.g. aged cheese)
    Caution,
    /// Causes a reaction, medical attention may be needed
    Dangerous,
    /// Anaphylaxis risk, emergency
    Deadly,
}

impl RiskLevel {
    /// German badge text shown for this level when at least one
    /// category matched (the SAFE sub-cases are handled by
    /// [`Classification::label`])
    pub fn badge(&self) -> &'static str {
        match self {
            RiskLevel::Deadly => "Lebensgefahr",
            RiskLevel::Dangerous => "Gefährlich",
            RiskLevel::Caution => "Vorsicht",
            RiskLevel::Safe => "Sicher",
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RiskLevel::Safe => write!(f, "safe"),
            RiskLevel::Caution => write!(f, "caution"),
            RiskLevel::Dangerous => write!(f, "dangerous"),
            RiskLevel::Deadly => write!(f, "deadly"),
        }
    }
}

/// Outcome of the keyword pass for a single ingredient
///
/// `matched` holds category ids whose trigger keywords hit; `suppressed`
/// holds ids that triggered but were overridden by a safe-exception
/// keyword. The two are disjoint.
#[derive(Debug, Clone, Default)]
pub struct KeywordMatches {
    /// Category ids with an accepted, non-suppressed trigger hit
    pub matched: Vec<String>,

    /// Category ids whose trigger hit was cancelled by a safe exception
    pub suppressed: Vec<String>,
}

impl KeywordMatches {
    /// True if neither a match nor a suppression occurred
    pub fn is_empty(&self) -> bool {
        self.matched.is_empty() && self.suppressed.is_empty()
    }
}

/// Classification result for one ingredient
#[derive(Debug, Clone)]
pub struct Classification {
    /// The ingredient text as entered (first-seen casing)
    pub text: String,

    /// Resolved risk level (maximum severity among matched categories)
    pub level: RiskLevel,

    /// All matched category ids, direct and dish-derived, in category
    /// definition order
    pub matched: Vec<String>,

    /// Category ids matched directly via trigger keywords
    pub direct: Vec<String>,

    /// Category ids inherited from matching dish entries
    pub via_dishes: Vec<String>,

    /// Category ids suppressed by safe-exception keywords
    pub suppressed: Vec<String>,
}

impl Classification {
    /// German badge text for this result
    ///
    /// Distinguishes the two SAFE sub-cases: "Sicher" when a category
    /// triggered but every hit was suppressed by a safe exception,
    /// "Nicht erkannt" when nothing matched at all.
    pub fn label(&self) -> &'static str {
        if self.level == RiskLevel::Safe {
            if self.suppressed.is_empty() {
                "Nicht erkannt"
            } else {
                "Sicher"
            }
        } else {
            self.level.badge()
        }
    }

    /// True if the item only resolved to SAFE because safe-exception
    /// keywords overrode every trigger hit
    pub fn is_safe_exception(&self) -> bool {
        self.level == RiskLevel::Safe && !self.suppressed.is_empty()
    }
}

/// Configuration loading and validation errors
///
/// Any of these is fatal at startup: the engine refuses to classify
/// from a partially loaded allergen database.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid allergen database: {0}")]
    InvalidAllergenData(#[source] serde_json::Error),

    #[error("Invalid dish database: {0}")]
    InvalidDishData(#[source] serde_json::Error),

    #[error("Duplicate category id '{id}'")]
    DuplicateCategory { id: String },

    #[error("Category '{id}' has no trigger keywords")]
    EmptyTriggers { id: String },

    #[error("Category '{id}' contains an empty keyword")]
    EmptyKeyword { id: String },

    #[error("Category id must not be empty")]
    EmptyCategoryId,

    #[error("Category '{id}' declares severity 'safe'; severity must be caution, dangerous or deadly")]
    SafeSeverity { id: String },

    #[error("Dish entry has an empty name")]
    EmptyDishName,

    #[error("Dish '{dish}' has no allergens")]
    EmptyDishAllergens { dish: String },

    #[error("Dish '{dish}' references unknown category '{id}'")]
    UnknownDishCategory { dish: String, id: String },

    #[error("Splitter regex failed to compile: {0}")]
    RegexError(String),
}
