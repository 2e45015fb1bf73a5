//! Improvement recommendations for the dashboard and the exported report

use serde::{Deserialize, Serialize};

use super::Assessment;

/// One actionable recommendation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Recommendation {
    ReduceChurn,
    AccelerateGrowth,
    IncreaseArpu,
    ImproveUnitEconomics,
    ShortenPayback,
    Documentation,
}

impl Recommendation {
    /// Short heading shown on the dashboard
    pub fn title(&self) -> &'static str {
        match self {
            Recommendation::ReduceChurn => "Reduce Churn",
            Recommendation::AccelerateGrowth => "Accelerate Growth",
            Recommendation::IncreaseArpu => "Increase ARPU",
            Recommendation::ImproveUnitEconomics => "Improve Unit Economics",
            Recommendation::ShortenPayback => "Shorten Payback",
            Recommendation::Documentation => "Documentation",
        }
    }

    /// Dashboard wording
    pub fn detail(&self) -> &'static str {
        match self {
            Recommendation::ReduceChurn => {
                "Implement stronger customer success programs and product improvements to reduce your churn rate to below 5%."
            }
            Recommendation::AccelerateGrowth => {
                "Invest in scalable customer acquisition channels and consider expansion revenue opportunities to boost your growth rate."
            }
            Recommendation::IncreaseArpu => {
                "Consider pricing strategies, upsell opportunities, and moving upmarket to increase your average revenue per user."
            }
            Recommendation::ImproveUnitEconomics => {
                "Work on reducing your CAC through more efficient marketing or increasing your LTV through better retention and pricing."
            }
            Recommendation::ShortenPayback => {
                "Work on reducing your CAC payback period through more efficient marketing or increased pricing."
            }
            Recommendation::Documentation => {
                "Maintain clean financial records and clear growth metrics to support your valuation during investor discussions."
            }
        }
    }

    /// Report wording (PDF/email)
    pub fn report_text(&self) -> &'static str {
        match self {
            Recommendation::ImproveUnitEconomics => {
                "Improve your LTV:CAC ratio by reducing customer acquisition costs or increasing customer lifetime value."
            }
            Recommendation::ShortenPayback => {
                "Work on reducing your CAC payback period through more efficient marketing or increased pricing."
            }
            Recommendation::ReduceChurn => {
                "Focus on reducing churn through improved onboarding, customer success initiatives, and product improvements."
            }
            Recommendation::AccelerateGrowth => {
                "Consider strategies to accelerate growth through new customer acquisition channels or expansion revenue."
            }
            other => other.detail(),
        }
    }
}

/// Shown in the report when no recommendation applies
pub const STRONG_METRICS_NOTE: &str = "Your SaaS metrics are very strong. Continue with your current strategy and consider raising growth capital to accelerate expansion.";

/// Recommendations listed on the results dashboard; always ends with Documentation
pub fn dashboard_recommendations(assessment: &Assessment) -> Vec<Recommendation> {
    let mut recs = Vec::new();

    if assessment.churn_rate > 5.0 {
        recs.push(Recommendation::ReduceChurn);
    }
    if assessment.growth_rate < 20.0 {
        recs.push(Recommendation::AccelerateGrowth);
    }
    if assessment.arpu < 5_000.0 {
        recs.push(Recommendation::IncreaseArpu);
    }
    if assessment.ltv_cac_ratio < 3.0 {
        recs.push(Recommendation::ImproveUnitEconomics);
    }
    recs.push(Recommendation::Documentation);

    recs
}

/// Recommendations included in the exported report; may be empty
pub fn report_recommendations(assessment: &Assessment) -> Vec<Recommendation> {
    let mut recs = Vec::new();

    if assessment.ltv_cac_ratio < 3.0 {
        recs.push(Recommendation::ImproveUnitEconomics);
    }
    if assessment.payback_period > 12.0 {
        recs.push(Recommendation::ShortenPayback);
    }
    if assessment.churn_rate > 5.0 {
        recs.push(Recommendation::ReduceChurn);
    }
    if assessment.growth_rate < 20.0 {
        recs.push(Recommendation::AccelerateGrowth);
    }

    recs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::{MetricInputs, MetricsSnapshot};

    fn assess(inputs: MetricInputs) -> Assessment {
        Assessment::from_snapshot(&MetricsSnapshot::compute(&inputs))
    }

    #[test]
    fn test_default_dashboard_recommendations() {
        // ratio 8, churn 5, growth 15, arpu 2000
        let recs = dashboard_recommendations(&assess(MetricInputs::default()));
        assert_eq!(
            recs,
            vec![Recommendation::AccelerateGrowth, Recommendation::IncreaseArpu, Recommendation::Documentation]
        );
    }

    #[test]
    fn test_default_report_recommendations() {
        let recs = report_recommendations(&assess(MetricInputs::default()));
        assert_eq!(recs, vec![Recommendation::AccelerateGrowth]);
    }

    #[test]
    fn test_weak_metrics_report_everything() {
        let inputs = MetricInputs::new(10_000.0, 100.0, 25.0, 5.0, 5_000.0, 4.0);
        let recs = report_recommendations(&assess(inputs));
        assert_eq!(
            recs,
            vec![
                Recommendation::ImproveUnitEconomics,
                Recommendation::ShortenPayback,
                Recommendation::ReduceChurn,
                Recommendation::AccelerateGrowth,
            ]
        );
    }

    #[test]
    fn test_strong_metrics_report_nothing() {
        let inputs = MetricInputs::new(2_000_000.0, 100.0, 3.0, 50.0, 20_000.0, 15.0);
        assert!(report_recommendations(&assess(inputs)).is_empty());
        assert_eq!(
            dashboard_recommendations(&assess(inputs)),
            vec![Recommendation::Documentation]
        );
    }

    #[test]
    fn test_report_text_falls_back_to_detail() {
        assert_eq!(
            Recommendation::IncreaseArpu.report_text(),
            Recommendation::IncreaseArpu.detail()
        );
    }
}
