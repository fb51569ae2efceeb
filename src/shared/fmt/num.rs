//! Number formatting utilities for human-readable display.
//!
//! Two rounding modes:
//! - [`to_fixed`] rounds the shortest decimal form of the float half away from
//!   zero, matching locale number formatting (`1.005` → `1.01`).
//! - [`to_fixed_exact`] rounds the exact binary value, matching a plain
//!   fixed-point conversion (`1.45` → `1.4`, `-0.01` → `-0.0`).

use rust_decimal::prelude::*;

/// Upper bound on fraction digits accepted by the formatters.
pub const MAX_FRACTION_DIGITS: u32 = 20;

/// Format `value` with exactly `digits` fraction digits, no grouping.
///
/// Infinities render as `Infinity` / `-Infinity`, NaN as `NaN`.
pub fn to_fixed(value: f64, digits: u32) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    let digits = digits.min(MAX_FRACTION_DIGITS);
    match Decimal::from_f64(value) {
        Some(d) => {
            let rounded = d.round_dp_with_strategy(digits, RoundingStrategy::MidpointAwayFromZero);
            format!("{:.1$}", rounded, digits as usize)
        }
        // Outside Decimal's range.
        None => format!("{:.1$}", value, digits as usize),
    }
}

/// Format `value` with exactly `digits` fraction digits by rounding its exact
/// binary value, no grouping.
///
/// Ties (only possible for exactly representable values) round away from
/// zero. Negative inputs keep their `-` even when they round to zero.
pub fn to_fixed_exact(value: f64, digits: u32) -> String {
    if value.is_nan() || value.is_infinite() {
        return to_fixed(value, digits);
    }

    let digits = digits.min(MAX_FRACTION_DIGITS);
    let sign = if value < 0.0 { "-" } else { "" };
    let magnitude = value.abs();
    let unsigned = match Decimal::from_f64_retain(magnitude) {
        Some(d) => {
            let rounded = d.round_dp_with_strategy(digits, RoundingStrategy::MidpointAwayFromZero);
            format!("{:.1$}", rounded, digits as usize)
        }
        None => format!("{:.1$}", magnitude, digits as usize),
    };
    format!("{}{}", sign, unsigned)
}

/// Adds thousands separators to the integer part of a plain decimal string.
pub fn group_thousands(formatted: &str) -> String {
    let (sign, unsigned) = match formatted.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", formatted),
    };
    let (integer, fraction) = match unsigned.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (unsigned, None),
    };

    let grouped = integer
        .chars()
        .rev()
        .collect::<String>()
        .as_bytes()
        .chunks(3)
        .map(|c| std::str::from_utf8(c).unwrap_or_default())
        .collect::<Vec<_>>()
        .join(",")
        .chars()
        .rev()
        .collect::<String>();

    match fraction {
        Some(f) => format!("{}{}.{}", sign, grouped, f),
        None => format!("{}{}", sign, grouped),
    }
}

/// `to_fixed` followed by `group_thousands`, e.g. `1,234.57`.
pub fn display_with_decimals(amount: f64, decimals: u32) -> String {
    group_thousands(&to_fixed(amount, decimals))
}
