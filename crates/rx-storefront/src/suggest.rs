//! Mock search suggestions.
//!
//! The catalog is injected configuration with an embedded default list, so
//! tests (and a future backend feed) can supply their own fixtures.

use serde::Deserialize;
use thiserror::Error;

/// Product names suggested while typing, in display order.
pub const DEFAULT_SUGGESTIONS: [&str; 8] = [
    "Air Jordan 1",
    "Nike Air Max",
    "Adidas Yeezy",
    "Supreme Box Logo",
    "Off-White",
    "Travis Scott",
    "Dior Jordan",
    "Fragment Design",
];

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("invalid suggestion catalog: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Ordered list of suggestible product names.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct SuggestionCatalog {
    names: Vec<String>,
}

impl Default for SuggestionCatalog {
    fn default() -> Self {
        Self::new(DEFAULT_SUGGESTIONS.iter().map(|s| s.to_string()).collect())
    }
}

impl SuggestionCatalog {
    pub fn new(names: Vec<String>) -> Self {
        Self { names }
    }

    /// Deserialize from a JSON array of names.
    pub fn from_json(raw: &str) -> Result<Self, CatalogError> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Case-insensitive substring match, catalog order preserved.
    pub fn filter(&self, query: &str) -> Vec<String> {
        let needle = query.to_lowercase();
        self.names
            .iter()
            .filter(|name| name.to_lowercase().contains(&needle))
            .cloned()
            .collect()
    }
}

/// The panel only opens once the trimmed query is longer than two characters.
pub fn should_suggest(query: &str) -> bool {
    query.trim().chars().count() > 2
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_is_case_insensitive_substring() {
        let catalog = SuggestionCatalog::default();
        assert_eq!(catalog.filter("jor"), vec!["Air Jordan 1", "Dior Jordan"]);
        assert_eq!(catalog.filter("YEEZY"), vec!["Adidas Yeezy"]);
        assert!(catalog.filter("zzz").is_empty());
    }

    #[test]
    fn empty_query_matches_everything() {
        let catalog = SuggestionCatalog::default();
        assert_eq!(catalog.filter("").len(), 8);
    }

    #[test]
    fn short_queries_are_gated() {
        assert!(!should_suggest(""));
        assert!(!should_suggest("jo"));
        assert!(!should_suggest("  jo  "));
        assert!(should_suggest("jor"));
        // Character count, not byte count: two Cyrillic letters stay gated.
        assert!(!should_suggest("ай"));
    }

    #[test]
    fn catalog_deserializes_from_json_array() {
        let catalog = SuggestionCatalog::from_json(r#"["Nike Dunk", "New Balance 550"]"#).unwrap();
        assert_eq!(catalog.names().len(), 2);
        assert_eq!(catalog.filter("dunk"), vec!["Nike Dunk"]);
        assert!(SuggestionCatalog::from_json("{not json").is_err());
    }
}
