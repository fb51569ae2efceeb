//! Currency formatting (en-US conventions).

use super::num::display_with_decimals;

const DEFAULT_CURRENCY: &str = "USD";
const DEFAULT_DIGITS: u32 = 2;

/// Display symbol for an ISO currency code, as en-US renders it.
fn currency_symbol(code: &str) -> Option<&'static str> {
    let symbol = match code {
        "USD" => "$",
        "EUR" => "€",
        "GBP" => "£",
        "JPY" => "¥",
        "CNY" => "CN¥",
        "INR" => "₹",
        "KRW" => "₩",
        "ILS" => "₪",
        "VND" => "₫",
        "PHP" => "₱",
        "NGN" => "₦",
        "CAD" => "CA$",
        "AUD" => "A$",
        "NZD" => "NZ$",
        "HKD" => "HK$",
        "MXN" => "MX$",
        "TWD" => "NT$",
        "BRL" => "R$",
        _ => return None,
    };
    Some(symbol)
}

/// Format a value as currency.
///
/// - `digits`: fraction digits, default 2.
/// - `currency`: ISO code, default `USD`, case-insensitive.
/// - `show_symbol`: default `true`. When `false` only the grouped number is
///   returned.
///
/// A missing or NaN value renders as `"$0.00"`, or `"0.00"` without symbol.
pub fn format_currency(
    value: Option<f64>,
    digits: Option<u32>,
    currency: Option<&str>,
    show_symbol: Option<bool>,
) -> String {
    let show_symbol = show_symbol.unwrap_or(true);

    let value = match value {
        Some(v) if !v.is_nan() => v,
        _ => {
            return if show_symbol { "$0.00" } else { "0.00" }.to_string();
        }
    };

    let digits = digits.unwrap_or(DEFAULT_DIGITS);
    let sign = if value < 0.0 { "-" } else { "" };
    let number = if value.is_infinite() {
        "∞".to_string()
    } else {
        display_with_decimals(value.abs(), digits)
    };

    if !show_symbol {
        return format!("{}{}", sign, number);
    }

    let code = currency
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .map(str::to_uppercase)
        .unwrap_or_else(|| DEFAULT_CURRENCY.to_string());

    match currency_symbol(&code) {
        Some(symbol) => format!("{}{}{}", sign, symbol, number),
        None => format!("{}{}\u{a0}{}", sign, code, number),
    }
}
