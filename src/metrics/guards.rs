//! Zero-denominator policy for derived ratios
//!
//! Every ratio in the snapshot has exactly one fallback, listed in
//! [`ZERO_DENOMINATOR_POLICY`]. The snapshot computation routes all of its
//! divisions through [`guarded_div`] so the table is the single source of truth.

use serde::{Deserialize, Serialize};

/// Months of ARPU counted as lifetime value when churn is zero (5 years)
pub const LIFETIME_CAP_MONTHS: f64 = 60.0;

/// Derived fields computed by division
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GuardedField {
    /// monthly revenue / customer count
    Arpu,
    /// arpu / (churn rate / 100)
    Ltv,
    /// cac / arpu
    PaybackPeriod,
}

/// Value substituted when a denominator is zero
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Fallback {
    /// Result is 0
    Zero,
    /// Result is numerator * months
    LifetimeCap { months: f64 },
}

impl Fallback {
    /// Apply the fallback to the numerator of the guarded division
    pub fn apply(self, numerator: f64) -> f64 {
        match self {
            Fallback::Zero => 0.0,
            Fallback::LifetimeCap { months } => numerator * months,
        }
    }
}

/// Field -> fallback, applied whenever the field's denominator is zero
pub const ZERO_DENOMINATOR_POLICY: [(GuardedField, Fallback); 3] = [
    (GuardedField::Arpu, Fallback::Zero),
    (
        GuardedField::Ltv,
        Fallback::LifetimeCap {
            months: LIFETIME_CAP_MONTHS,
        },
    ),
    (GuardedField::PaybackPeriod, Fallback::Zero),
];

impl GuardedField {
    /// Look up this field's entry in the policy table
    pub fn fallback(self) -> Fallback {
        ZERO_DENOMINATOR_POLICY
            .iter()
            .find(|(field, _)| *field == self)
            .map(|(_, fallback)| *fallback)
            .unwrap_or(Fallback::Zero)
    }
}

/// Divide, substituting the field's fallback when `denominator` is zero
///
/// Only an exact zero (including -0.0) triggers the fallback; tiny or negative
/// denominators divide normally.
pub fn guarded_div(field: GuardedField, numerator: f64, denominator: f64) -> f64 {
    guarded_div_on(field, numerator, denominator, denominator)
}

/// Like [`guarded_div`], but the fallback is keyed on `guard` rather than on
/// the denominator derived from it
pub fn guarded_div_on(field: GuardedField, numerator: f64, guard: f64, denominator: f64) -> f64 {
    if guard == 0.0 {
        field.fallback().apply(numerator)
    } else {
        numerator / denominator
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_field_has_a_policy() {
        for field in [GuardedField::Arpu, GuardedField::Ltv, GuardedField::PaybackPeriod] {
            assert!(
                ZERO_DENOMINATOR_POLICY.iter().any(|(f, _)| *f == field),
                "{:?} missing from policy table",
                field
            );
        }
    }

    #[test]
    fn test_zero_fallbacks() {
        assert_eq!(guarded_div(GuardedField::Arpu, 200_000.0, 0.0), 0.0);
        assert_eq!(guarded_div(GuardedField::PaybackPeriod, 5_000.0, 0.0), 0.0);
    }

    #[test]
    fn test_lifetime_cap() {
        assert_eq!(guarded_div(GuardedField::Ltv, 1_000.0, 0.0), 60_000.0);
        assert_eq!(guarded_div(GuardedField::Ltv, 1_000.0, -0.0), 60_000.0);
    }

    #[test]
    fn test_guard_value_decides_fallback() {
        assert_eq!(guarded_div_on(GuardedField::Ltv, 1_000.0, 0.0, 0.0), 60_000.0);
        assert_eq!(guarded_div_on(GuardedField::Ltv, 1_000.0, 1e-322, 0.0), f64::INFINITY);
    }

    #[test]
    fn test_nonzero_divides() {
        assert_eq!(guarded_div(GuardedField::Arpu, 200_000.0, 100.0), 2_000.0);
        assert_eq!(guarded_div(GuardedField::Ltv, 2_000.0, -0.05), -40_000.0);
    }
}
