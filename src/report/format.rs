//! Number formatting for reports: INR currency, percentages, ratios
//!
//! Output must stay byte-compatible with reports produced by the web
//! calculator, so rounding follows browser rules rather than Rust's defaults.

/// Currency symbol for the single supported locale (en-IN, INR)
pub const CURRENCY_SYMBOL: &str = "₹";

/// Format a currency amount as whole rupees with Indian digit grouping
///
/// `2400000.0` -> `₹24,00,000`; `-5000.0` -> `-₹5,000`. Halves round away
/// from zero.
pub fn format_currency(amount: f64) -> String {
    if amount.is_nan() {
        return format!("{}NaN", CURRENCY_SYMBOL);
    }
    if amount.is_infinite() {
        let sign = if amount < 0.0 { "-" } else { "" };
        return format!("{}{}∞", sign, CURRENCY_SYMBOL);
    }

    let rounded = amount.round();
    let sign = if rounded.is_sign_negative() { "-" } else { "" };
    let digits = format!("{:.0}", rounded.abs());

    format!("{}{}{}", sign, CURRENCY_SYMBOL, group_indian(&digits))
}

/// Insert en-IN group separators: last three digits, then pairs
fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();

    format!("{},{}", groups.join(","), tail)
}

/// Magnitude at which browsers switch plain numbers to exponent notation
const EXPONENT_THRESHOLD: f64 = 1e21;

/// Shortest round-trip rendering with browser `Number.toString` rules
///
/// `15.0` -> `15`, `1e21` -> `1e+21`, `1e-7` -> `1e-7`, -0 -> `0`.
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let abs = value.abs();
    if abs >= EXPONENT_THRESHOLD || abs < 1e-6 {
        let exp = format!("{:e}", value);
        return match exp.split_once('e') {
            Some((mantissa, power)) if !power.starts_with('-') => format!("{}e+{}", mantissa, power),
            _ => exp,
        };
    }
    value.to_string()
}

/// Two-decimal fixed notation with browser `toFixed(2)` semantics
///
/// Exact ties round away from zero (0.125 -> "0.13"), non-finite values print
/// as `Infinity`, `-Infinity` or `NaN`, and -0 prints as `0.00`. Magnitudes of
/// 1e21 and above fall back to `format_number`.
pub fn to_fixed_2(value: f64) -> String {
    if !value.is_finite() || value.abs() >= EXPONENT_THRESHOLD {
        return format_number(value);
    }

    let sign = if value < 0.0 { "-" } else { "" };
    let abs = value.abs();

    // Only odd multiples of 1/8 sit exactly between two cents
    let eighths = abs * 8.0;
    if eighths.fract() == 0.0 && eighths < 9.0e15 && (eighths as u64) % 2 == 1 {
        let cents = (eighths as u128 * 25 + 1) / 2;
        return format!("{}{}.{:02}", sign, cents / 100, cents % 100);
    }

    format!("{}{:.2}", sign, abs)
}

/// `5.0` -> `5.00%`
pub fn format_percent(rate: f64) -> String {
    format!("{}%", to_fixed_2(rate))
}

/// Plain two-decimal ratio, e.g. LTV:CAC `8.00`
pub fn format_ratio(ratio: f64) -> String {
    to_fixed_2(ratio)
}

/// `2.5` -> `2.50 months`
pub fn format_months(months: f64) -> String {
    format!("{} months", to_fixed_2(months))
}

/// `10.0` -> `10.00x ARR`
pub fn format_multiple(multiple: f64) -> String {
    format!("{}x ARR", to_fixed_2(multiple))
}

/// Customer counts print as plain numbers without grouping
pub fn format_count(count: f64) -> String {
    format_number(count)
}
