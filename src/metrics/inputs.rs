//! Calculator inputs and form-field coercion

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// The six scalars a user enters into the calculator
///
/// Values are kept as entered; the engine does not validate sign or range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricInputs {
    /// Monthly recurring revenue
    pub monthly_revenue: f64,

    /// Customers currently paying
    pub customer_count: f64,

    /// Annual churn, in percent (5.0 = 5%)
    pub churn_rate: f64,

    /// Annual growth, in percent
    pub growth_rate: f64,

    /// Customer acquisition cost
    pub cac: f64,

    /// Multiple applied to ARR for valuation
    pub valuation_multiple: f64,
}

impl Default for MetricInputs {
    /// Form defaults shown before the first calculation
    fn default() -> Self {
        Self {
            monthly_revenue: 200_000.0,
            customer_count: 100.0,
            churn_rate: 5.0,
            growth_rate: 15.0,
            cac: 5_000.0,
            valuation_multiple: 10.0,
        }
    }
}

impl MetricInputs {
    pub fn new(
        monthly_revenue: f64,
        customer_count: f64,
        churn_rate: f64,
        growth_rate: f64,
        cac: f64,
        valuation_multiple: f64,
    ) -> Self {
        Self {
            monthly_revenue,
            customer_count,
            churn_rate,
            growth_rate,
            cac,
            valuation_multiple,
        }
    }

    /// Coerce raw form entries into inputs; unparsable fields become 0
    pub fn from_form(fields: &FormFields) -> Self {
        Self {
            monthly_revenue: coerce_field(&fields.monthly_revenue),
            customer_count: coerce_field(&fields.customer_count),
            churn_rate: coerce_field(&fields.churn_rate),
            growth_rate: coerce_field(&fields.growth_rate),
            cac: coerce_field(&fields.cac),
            valuation_multiple: coerce_field(&fields.valuation_multiple),
        }
    }
}

/// Raw text of the six form fields, as typed
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormFields {
    pub monthly_revenue: String,
    pub customer_count: String,
    pub churn_rate: String,
    pub growth_rate: String,
    pub cac: String,
    pub valuation_multiple: String,
}

/// Leading numeric prefix accepted by a browser number field
///
/// Digits are ASCII only and the skipped whitespace is the JavaScript set,
/// not Unicode `\s`.
static NUMERIC_PREFIX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[\t\n\x0B\x0C\r\x{FEFF}\x{2028}\x{2029}\p{Zs}]*([+-]?(?:Infinity|(?:[0-9]+\.?[0-9]*|\.[0-9]+)(?:[eE][+-]?[0-9]+)?))",
    )
        .expect("numeric prefix pattern is valid")
});

/// Parse the longest numeric prefix of `raw`, collapsing anything else to 0
///
/// "12abc" -> 12, "  .5" -> 0.5, "abc" -> 0, "" -> 0.
pub fn coerce_field(raw: &str) -> f64 {
    let Some(caps) = NUMERIC_PREFIX.captures(raw) else {
        return 0.0;
    };
    let token = &caps[1];

    let value = match token {
        "Infinity" | "+Infinity" => f64::INFINITY,
        "-Infinity" => f64::NEG_INFINITY,
        _ => token.parse::<f64>().unwrap_or(0.0),
    };

    // NaN and -0 are falsy in the form boundary and both collapse to 0
    if value.is_nan() || value == 0.0 {
        0.0
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_form() {
        let inputs = MetricInputs::default();
        assert_eq!(inputs.monthly_revenue, 200_000.0);
        assert_eq!(inputs.customer_count, 100.0);
        assert_eq!(inputs.churn_rate, 5.0);
        assert_eq!(inputs.growth_rate, 15.0);
        assert_eq!(inputs.cac, 5_000.0);
        assert_eq!(inputs.valuation_multiple, 10.0);
    }

    #[test]
    fn test_coerce_plain_numbers() {
        assert_eq!(coerce_field("200000"), 200_000.0);
        assert_eq!(coerce_field("2.5"), 2.5);
        assert_eq!(coerce_field("-3"), -3.0);
        assert_eq!(coerce_field("1e3"), 1000.0);
        assert_eq!(coerce_field(".5"), 0.5);
    }

    #[test]
    fn test_coerce_numeric_prefix() {
        assert_eq!(coerce_field("  42 customers"), 42.0);
        assert_eq!(coerce_field("12abc"), 12.0);
        assert_eq!(coerce_field("7."), 7.0);
        assert_eq!(coerce_field("1e"), 1.0);
    }

    #[test]
    fn test_coerce_ascii_digits_only() {
        // Arabic-Indic three ends the prefix instead of extending it
        assert_eq!(coerce_field("5\u{0663}"), 5.0);
        assert_eq!(coerce_field("\u{0663}5"), 0.0);
        assert_eq!(coerce_field("1\u{FF10}"), 1.0);
    }

    #[test]
    fn test_coerce_skips_browser_whitespace() {
        assert_eq!(coerce_field("\u{00A0}7"), 7.0);
        assert_eq!(coerce_field("\u{FEFF}\u{2028}\t8"), 8.0);
        assert_eq!(coerce_field("\u{3000}9"), 9.0);
        // U+0085 is Unicode whitespace but not a browser one
        assert_eq!(coerce_field("\u{0085}9"), 0.0);
    }

    #[test]
    fn test_coerce_invalid_collapses_to_zero() {
        assert_eq!(coerce_field(""), 0.0);
        assert_eq!(coerce_field("abc"), 0.0);
        assert_eq!(coerce_field("-"), 0.0);
        assert_eq!(coerce_field("NaN"), 0.0);
        // -0 is falsy at the form boundary
        assert!(coerce_field("-0").is_sign_positive());
    }

    #[test]
    fn test_coerce_infinity() {
        assert_eq!(coerce_field("Infinity"), f64::INFINITY);
        assert_eq!(coerce_field("-Infinity"), f64::NEG_INFINITY);
    }

    #[test]
    fn test_from_form() {
        let fields = FormFields {
            monthly_revenue: "150000".into(),
            customer_count: "75".into(),
            churn_rate: "oops".into(),
            growth_rate: "20".into(),
            cac: "".into(),
            valuation_multiple: "8.5".into(),
        };
        let inputs = MetricInputs::from_form(&fields);
        assert_eq!(inputs, MetricInputs::new(150_000.0, 75.0, 0.0, 20.0, 0.0, 8.5));
    }

    #[test]
    fn test_inputs_json_names() {
        let json = serde_json::to_value(MetricInputs::default()).unwrap();
        assert_eq!(json["monthlyRevenue"], 200_000.0);
        assert_eq!(json["valuationMultiple"], 10.0);

        let parsed: MetricInputs = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, MetricInputs::default());
    }
}
