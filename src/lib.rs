//! # Essen-Check: Allergen Classification Engine
//!
//! Classifies free-text food and ingredient names written in German into an
//! allergen risk level, using a curated allergen keyword database, a curated
//! known-dish database and explicit safe-exception overrides.
//!
//! ## Why not plain substring search
//!
//! German compounds concatenate freely, so a naive substring search flags
//! "Ei" inside "Rindfleisch". The matcher only accepts a keyword occurrence
//! at a compound boundary: whole words ("Ei"), compound prefixes
//! ("Eierkuchen") and compound suffixes ("Spiegelei") count, infixes do not.
//!
//! ## Risk levels
//!
//! Each allergen category carries a fixed severity; an item's level is the
//! maximum severity among its matched categories:
//!
//! - `Deadly` → "Lebensgefahr"
//! - `Dangerous` → "Gefährlich"
//! - `Caution` → "Vorsicht"
//! - `Safe` → "Sicher" (safe exception) or "Nicht erkannt" (no match)
//!
//! ## Example Usage
//!
//! ```
//! use essen_check::{FoodChecker, RiskLevel};
//!
//! let checker = FoodChecker::new()?;
//!
//! // Single item
//! let result = checker.classify_single("Spiegelei").unwrap();
//! assert_eq!(result.level, RiskLevel::Deadly);
//!
//! // Multi-item text with mixed separators and deduplication
//! let results = checker.classify_all("Mehl, Zucker und Eier\nmehl");
//! assert_eq!(results.len(), 3);
//!
//! // Safe exception: peanuts are explicitly tolerated
//! let result = checker.classify_single("Erdnussbutter").unwrap();
//! assert_eq!(result.label(), "Sicher");
//! # Ok::<(), essen_check::ConfigError>(())
//! ```
//!
//! ## Architecture
//!
//! - **Normalizer** - Splits raw text into unique candidate items
//! - **Allergen Matcher** - Compound-word-safe keyword matching with
//!   safe-exception suppression
//! - **Dish Matcher** - Known-dish fallback for unrecognized text
//! - **Risk Resolver** - Severity precedence and labels
//! - **FoodChecker** - Main entry point combining all components

pub mod checker;
pub mod database;
pub mod dishes;
pub mod matcher;
pub mod normalizer;
pub mod resolver;
pub mod types;

// Re-export main types and functions for convenience
pub use checker::FoodChecker;
pub use database::{AllergenCategory, Database, DishEntry};
pub use dishes::DishMatcher;
pub use matcher::{keyword_hits, AllergenMatcher};
pub use normalizer::Normalizer;
pub use resolver::RiskResolver;
pub use types::{Classification, ConfigError, KeywordMatches, RiskLevel};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
