//! Derived SaaS metrics computed from one set of inputs

use serde::{Deserialize, Serialize};

use super::guards::{guarded_div, guarded_div_on, GuardedField};
use super::inputs::MetricInputs;

/// Months per year used to annualize revenue
pub const MONTHS_PER_YEAR: f64 = 12.0;

/// Inputs plus every metric derived from them
///
/// Produced once per calculation and never mutated; a new calculation
/// replaces it wholesale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsSnapshot {
    pub monthly_revenue: f64,
    pub annual_revenue: f64,
    pub customer_count: f64,
    pub churn_rate: f64,
    pub growth_rate: f64,
    pub arpu: f64,
    pub ltv: f64,
    pub cac: f64,
    pub payback_period: f64,
    pub valuation_multiple: f64,
    pub estimated_valuation: f64,
}

impl MetricsSnapshot {
    /// Compute the snapshot. Never fails for any numeric input.
    pub fn compute(inputs: &MetricInputs) -> Self {
        let annual_revenue = annual_revenue(inputs.monthly_revenue);
        let arpu = arpu(inputs.monthly_revenue, inputs.customer_count);
        let ltv = lifetime_value(arpu, inputs.churn_rate);
        let payback_period = payback_period(inputs.cac, arpu);
        let estimated_valuation = valuation(annual_revenue, inputs.valuation_multiple);

        Self {
            monthly_revenue: inputs.monthly_revenue,
            annual_revenue,
            customer_count: inputs.customer_count,
            churn_rate: inputs.churn_rate,
            growth_rate: inputs.growth_rate,
            arpu,
            ltv,
            cac: inputs.cac,
            payback_period,
            valuation_multiple: inputs.valuation_multiple,
            estimated_valuation,
        }
    }

    /// The inputs this snapshot was computed from
    pub fn inputs(&self) -> MetricInputs {
        MetricInputs {
            monthly_revenue: self.monthly_revenue,
            customer_count: self.customer_count,
            churn_rate: self.churn_rate,
            growth_rate: self.growth_rate,
            cac: self.cac,
            valuation_multiple: self.valuation_multiple,
        }
    }
}

/// ARR = MRR * 12
pub fn annual_revenue(monthly_revenue: f64) -> f64 {
    monthly_revenue * MONTHS_PER_YEAR
}

/// Revenue per customer; 0 with no customers
pub fn arpu(revenue: f64, customers: f64) -> f64 {
    guarded_div(GuardedField::Arpu, revenue, customers)
}

/// ARPU over churn expressed as a fraction; capped at 60 months when churn is 0
///
/// The guard is on the entered rate, not the derived fraction, so a tiny
/// nonzero rate whose fraction underflows still divides.
pub fn lifetime_value(arpu: f64, churn_rate: f64) -> f64 {
    guarded_div_on(GuardedField::Ltv, arpu, churn_rate, churn_rate / 100.0)
}

/// Months of ARPU needed to recover CAC; 0 when ARPU is 0
pub fn payback_period(cac: f64, arpu: f64) -> f64 {
    guarded_div(GuardedField::PaybackPeriod, cac, arpu)
}

pub fn valuation(annual_revenue: f64, multiple: f64) -> f64 {
    annual_revenue * multiple
}
