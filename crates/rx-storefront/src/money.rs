//! Price text parsing and USD formatting.
//!
//! Price nodes carry plain decimal text ("12.5") or a labelled form
//! ("$19.99"). Unparseable text is reported as `None` so callers can leave
//! the node untouched.

/// Parse a bare price. The whole trimmed string must be a finite number.
pub fn parse_price(text: &str) -> Option<f64> {
    let value: f64 = text.trim().parse().ok()?;
    value.is_finite().then_some(value)
}

/// Parse a price that may carry a leading dollar sign ("$19.99").
pub fn parse_labeled_price(text: &str) -> Option<f64> {
    parse_price(text.trim().trim_start_matches('$'))
}

/// Format as USD with exactly two decimals.
pub fn format_usd(amount: f64) -> String {
    format!("${amount:.2}")
}

/// Per-row total for the quantity stepper.
pub fn line_total(quantity: u32, unit_price: f64) -> f64 {
    f64::from(quantity) * unit_price
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_decimals() {
        assert_eq!(parse_price("12.5"), Some(12.5));
        assert_eq!(parse_price("3.00"), Some(3.0));
        assert_eq!(parse_price(" 100 "), Some(100.0));
    }

    #[test]
    fn rejects_non_numeric_text() {
        assert_eq!(parse_price("abc"), None);
        assert_eq!(parse_price(""), None);
        assert_eq!(parse_price("NaN"), None);
        assert_eq!(parse_price("inf"), None);
    }

    #[test]
    fn strips_leading_dollar_sign() {
        assert_eq!(parse_labeled_price("$19.99"), Some(19.99));
        assert_eq!(parse_labeled_price("50"), Some(50.0));
        assert_eq!(parse_labeled_price("$"), None);
    }

    #[test]
    fn formats_with_two_decimals() {
        assert_eq!(format_usd(12.5), "$12.50");
        assert_eq!(format_usd(3.0), "$3.00");
        assert_eq!(format_usd(100.0), "$100.00");
    }

    #[test]
    fn line_total_matches_quantity_times_price() {
        assert_eq!(format_usd(line_total(4, 19.99)), "$79.96");
        assert_eq!(format_usd(line_total(1, 0.0)), "$0.00");
    }
}
