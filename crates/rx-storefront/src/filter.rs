//! Category filter for product cards.

/// Parsed `data-filter` value. Exactly one filter button is active at a time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CategoryFilter {
    All,
    Category(String),
}

impl CategoryFilter {
    pub fn from_value(value: &str) -> Self {
        if value == "all" {
            Self::All
        } else {
            Self::Category(value.to_string())
        }
    }

    /// A card shows when the filter is `All` or equals its `data-category`.
    pub fn matches(&self, card_category: Option<&str>) -> bool {
        match self {
            Self::All => true,
            Self::Category(category) => card_category == Some(category.as_str()),
        }
    }
}
