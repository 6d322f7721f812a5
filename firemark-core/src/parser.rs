//! Numeric input parsing for user-entered form fields
//!
//! Global invariants enforced:
//! - Lexical normalization only: no rounding, no range validation
//! - Never panics; unparseable input maps to `None`

/// Parse a user-typed numeric string into a nullable float.
///
/// Trims whitespace, treats empty input as "not provided", strips
/// thousands-separator commas, and parses the remainder as a float.
pub fn parse_numeric_input(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    let cleaned = trimmed.replace(',', "");
    cleaned.parse::<f64>().ok().filter(|value| !value.is_nan())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_plain_numbers() {
        assert_eq!(parse_numeric_input("12.5"), Some(12.5));
        assert_eq!(parse_numeric_input("0"), Some(0.0));
        assert_eq!(parse_numeric_input("-3"), Some(-3.0));
    }

    #[test]
    fn test_strips_thousands_separators() {
        assert_eq!(parse_numeric_input("1,250"), Some(1250.0));
        assert_eq!(parse_numeric_input("1,250,000.75"), Some(1_250_000.75));
    }

    #[test]
    fn test_trims_whitespace() {
        assert_eq!(parse_numeric_input("  42 "), Some(42.0));
        assert_eq!(parse_numeric_input("\t1,000\n"), Some(1000.0));
    }

    #[test]
    fn test_blank_input_is_none() {
        assert_eq!(parse_numeric_input(""), None);
        assert_eq!(parse_numeric_input("   "), None);
    }

    #[test]
    fn test_non_numeric_input_is_none() {
        assert_eq!(parse_numeric_input("abc"), None);
        assert_eq!(parse_numeric_input("12abc"), None);
        assert_eq!(parse_numeric_input("NaN"), None);
        assert_eq!(parse_numeric_input(","), None);
    }

    #[test]
    fn test_no_rounding_or_clamping() {
        assert_eq!(parse_numeric_input("123.456789"), Some(123.456789));
        assert_eq!(parse_numeric_input("-1000000"), Some(-1_000_000.0));
    }
}
