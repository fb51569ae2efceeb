//! Percentage formatting.

use super::num::to_fixed_exact;

/// One decimal place followed by `%`. Missing or NaN input renders `"0.0%"`.
///
/// Rounds the exact binary value, so `1.45` (stored just below the midpoint)
/// renders `"1.4%"`, and small negatives keep their sign (`"-0.0%"`).
pub fn format_percentage(change: Option<f64>) -> String {
    match change {
        Some(c) if !c.is_nan() => format!("{}%", to_fixed_exact(c, 1)),
        _ => "0.0%".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_and_nan() {
        assert_eq!(format_percentage(None), "0.0%");
        assert_eq!(format_percentage(Some(f64::NAN)), "0.0%");
    }

    #[test]
    fn test_one_decimal() {
        assert_eq!(format_percentage(Some(-3.14)), "-3.1%");
        assert_eq!(format_percentage(Some(5.0)), "5.0%");
        assert_eq!(format_percentage(Some(12.345)), "12.3%");
        assert_eq!(format_percentage(Some(0.05)), "0.1%");
    }

    #[test]
    fn test_rounds_stored_value_not_decimal_literal() {
        assert_eq!(format_percentage(Some(1.45)), "1.4%");
        assert_eq!(format_percentage(Some(0.15)), "0.1%");
        assert_eq!(format_percentage(Some(-1.45)), "-1.4%");
        assert_eq!(format_percentage(Some(0.25)), "0.3%");
    }

    #[test]
    fn test_negative_rounding_to_zero_keeps_sign() {
        assert_eq!(format_percentage(Some(-0.01)), "-0.0%");
        assert_eq!(format_percentage(Some(0.01)), "0.0%");
    }

    #[test]
    fn test_no_grouping() {
        assert_eq!(format_percentage(Some(12345.67)), "12345.7%");
    }
}
