//! Metrics snapshot: inputs, zero-denominator policy and derived metrics

mod inputs;
mod snapshot;
pub mod guards;

pub use inputs::{MetricInputs, FormFields, coerce_field};
pub use snapshot::{
    MetricsSnapshot, annual_revenue, arpu, lifetime_value, payback_period, valuation,
    MONTHS_PER_YEAR,
};
pub use guards::{GuardedField, Fallback, guarded_div, guarded_div_on, ZERO_DENOMINATOR_POLICY, LIFETIME_CAP_MONTHS};
