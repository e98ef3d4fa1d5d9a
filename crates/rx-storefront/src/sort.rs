//! Product sort order.

use std::cmp::Ordering;

/// Parsed value of the `select[name="sort"]` control.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortKey {
    PriceLow,
    PriceHigh,
    /// Cards arrive newest-first from the server; keep their order.
    Newest,
    Unspecified,
}

impl SortKey {
    pub fn from_value(value: &str) -> Self {
        match value {
            "price_low" => Self::PriceLow,
            "price_high" => Self::PriceHigh,
            "newest" => Self::Newest,
            _ => Self::Unspecified,
        }
    }

    /// Comparator over card prices. Ties and non-price keys compare equal so
    /// a stable sort preserves the incoming order.
    pub fn compare(self, a: f64, b: f64) -> Ordering {
        match self {
            Self::PriceLow => a.total_cmp(&b),
            Self::PriceHigh => b.total_cmp(&a),
            Self::Newest | Self::Unspecified => Ordering::Equal,
        }
    }
}

/// Indices of `prices` in render order for the given key.
pub fn sorted_order(key: SortKey, prices: &[f64]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..prices.len()).collect();
    order.sort_by(|&a, &b| key.compare(prices[a], prices[b]));
    order
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_select_values() {
        assert_eq!(SortKey::from_value("price_low"), SortKey::PriceLow);
        assert_eq!(SortKey::from_value("price_high"), SortKey::PriceHigh);
        assert_eq!(SortKey::from_value("newest"), SortKey::Newest);
        assert_eq!(SortKey::from_value("rating"), SortKey::Unspecified);
    }

    #[test]
    fn price_low_is_non_decreasing() {
        assert_eq!(sorted_order(SortKey::PriceLow, &[50.0, 10.0, 99.99]), vec![1, 0, 2]);
    }

    #[test]
    fn price_high_is_non_increasing() {
        assert_eq!(sorted_order(SortKey::PriceHigh, &[50.0, 10.0, 99.99]), vec![2, 0, 1]);
    }

    #[test]
    fn newest_and_unknown_preserve_order() {
        assert_eq!(sorted_order(SortKey::Newest, &[50.0, 10.0, 99.99]), vec![0, 1, 2]);
        assert_eq!(sorted_order(SortKey::Unspecified, &[3.0, 2.0, 1.0]), vec![0, 1, 2]);
    }

    #[test]
    fn equal_prices_keep_incoming_order() {
        assert_eq!(sorted_order(SortKey::PriceLow, &[5.0, 5.0, 1.0]), vec![2, 0, 1]);
    }
}
