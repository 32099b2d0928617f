// Essen-Check Normalizer
// Splits raw ingredient text into unique, trimmed candidate items

use crate::types::ConfigError;
use regex::Regex;
use rustc_hash::FxHashSet;

/// Splits a raw text blob into individual candidate ingredient strings
///
/// Delimiters are comma, semicolon, newline and the standalone German
/// word "und". Leading enumeration markers ("1. ", "2) ") are stripped,
/// pieces are trimmed, and duplicates are dropped case-insensitively
/// while keeping the first-seen casing and order.
#[derive(Debug, Clone)]
pub struct Normalizer {
    splitter: Regex,
    enumeration: Regex,
}

impl Normalizer {
    /// Compile the splitting patterns
    ///
    /// The word boundary around "und" is Unicode-aware, so compounds
    /// like "Pudding", "Hunde" or "Gesundheit" never split.
    pub fn new() -> Result<Self, ConfigError> {
        let splitter = Regex::new(r"(?i)[,;\r\n]|\bund\b")
            .map_err(|e| ConfigError::RegexError(e.to_string()))?;
        let enumeration = Regex::new(r"^\d+[.)]\s+")
            .map_err(|e| ConfigError::RegexError(e.to_string()))?;

        Ok(Self {
            splitter,
            enumeration,
        })
    }

    /// Parse a raw text blob into an ordered list of unique items
    ///
    /// # Example
    /// ```
    /// # use essen_check::normalizer::Normalizer;
    /// let normalizer = Normalizer::new().unwrap();
    /// let items = normalizer.parse_items("Mehl, Zucker und Eier");
    /// assert_eq!(items, vec!["Mehl", "Zucker", "Eier"]);
    /// ```
    pub fn parse_items(&self, raw_text: &str) -> Vec<String> {
        let mut seen = FxHashSet::default();
        let mut items = Vec::new();

        for piece in self.splitter.split(raw_text) {
            let trimmed = piece.trim();
            // Numbered-list support: "1. Mehl" → "Mehl"
            let item = self.enumeration.replace(trimmed, "");
            let item = item.trim();

            if item.is_empty() {
                continue;
            }

            if seen.insert(item.to_lowercase()) {
                items.push(item.to_string());
            }
        }

        items
    }
}
