//! Presentation-side assessment of a metrics snapshot
//!
//! Nothing here is stored in the snapshot; the LTV:CAC ratio and all bands are
//! recomputed from it whenever a view or report needs them.

mod bands;
mod recommendations;

pub use bands::{UnitEconomicsBand, PaybackBand, GrowthBand, ChurnBand, ArpuBand};
pub use recommendations::{
    Recommendation, dashboard_recommendations, report_recommendations, STRONG_METRICS_NOTE,
};

use serde::{Deserialize, Serialize};

use crate::metrics::MetricsSnapshot;
use crate::report::format::{format_currency, format_number, format_ratio};

/// LTV divided by CAC; infinite or NaN when CAC is zero
pub fn ltv_cac_ratio(ltv: f64, cac: f64) -> f64 {
    ltv / cac
}

/// Bands and the figures they were derived from
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Assessment {
    pub ltv_cac_ratio: f64,
    pub payback_period: f64,
    pub growth_rate: f64,
    pub churn_rate: f64,
    pub arpu: f64,
    pub unit_economics: UnitEconomicsBand,
    pub payback: PaybackBand,
    pub growth: GrowthBand,
    pub churn: ChurnBand,
    pub arpu_band: ArpuBand,
}

impl Assessment {
    pub fn from_snapshot(snapshot: &MetricsSnapshot) -> Self {
        let ratio = ltv_cac_ratio(snapshot.ltv, snapshot.cac);
        Self {
            ltv_cac_ratio: ratio,
            payback_period: snapshot.payback_period,
            growth_rate: snapshot.growth_rate,
            churn_rate: snapshot.churn_rate,
            arpu: snapshot.arpu,
            unit_economics: UnitEconomicsBand::from_ratio(ratio),
            payback: PaybackBand::from_months(snapshot.payback_period),
            growth: GrowthBand::from_rate(snapshot.growth_rate),
            churn: ChurnBand::from_rate(snapshot.churn_rate),
            arpu_band: ArpuBand::from_arpu(snapshot.arpu),
        }
    }

    /// Unit economics paragraph for the dashboard
    pub fn unit_economics_summary(&self) -> String {
        let tail = match self.unit_economics {
            UnitEconomicsBand::Excellent => "your business has excellent unit economics. You're generating significantly more value from customers than it costs to acquire them.",
            UnitEconomicsBand::Good => "your business has positive unit economics but there's room for improvement. Aim for a ratio of 3 or higher for optimal SaaS metrics.",
            UnitEconomicsBand::NeedsImprovement => "your business is spending more to acquire customers than they generate in lifetime value. This is unsustainable and needs immediate attention.",
        };
        format!(
            "Your CAC to LTV ratio is {}, which means {}",
            format_ratio(self.ltv_cac_ratio),
            tail
        )
    }

    /// Payback sentence for the dashboard
    pub fn payback_summary(&self) -> String {
        let tail = match self.payback {
            PaybackBand::Healthy => "You're recovering your customer acquisition cost in under a year, which is excellent.",
            PaybackBand::Long => "It takes over a year to recover your acquisition costs, which may limit your growth potential.",
        };
        format!(
            "CAC Payback Period: {} months - {}",
            format_ratio(self.payback_period),
            tail
        )
    }

    /// Growth, churn and ARPU insights, in display order
    pub fn insights(&self) -> Vec<(&'static str, String)> {
        let growth = match self.growth {
            GrowthBand::Exceptional => "exceptional and positions you as a high-growth SaaS company.",
            GrowthBand::Healthy => "healthy and typical of successful SaaS businesses.",
            GrowthBand::BelowAverage => "below the industry average for high-value SaaS companies.",
        };
        let churn = match self.churn {
            ChurnBand::Excellent => "excellent, indicating strong product-market fit and customer satisfaction.",
            ChurnBand::Acceptable => "acceptable but could be improved to increase customer lifetime value.",
            ChurnBand::High => "high and should be addressed to improve retention and overall valuation.",
        };
        let arpu = match self.arpu_band {
            ArpuBand::Strong => "strong, suggesting you're targeting enterprise or mid-market customers.",
            ArpuBand::MidRange => "in the mid-range, typical of SMB-focused SaaS products.",
            ArpuBand::Low => "on the lower end, which might limit your revenue potential without significant scale.",
        };

        vec![
            (
                "Growth Rate",
                format!("Your annual growth rate of {}% is {}", format_number(self.growth_rate), growth),
            ),
            (
                "Churn Rate",
                format!("Your annual churn rate of {}% is {}", format_number(self.churn_rate), churn),
            ),
            (
                "ARPU",
                format!("Your Average Revenue Per User of {} is {}", format_currency(self.arpu), arpu),
            ),
        ]
    }
}
