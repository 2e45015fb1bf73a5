//! Valuation report document model
//!
//! The document is layout-free: PDF, email and file writers all render the
//! same rows and paragraphs.

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::assessment::{
    report_recommendations, Assessment, ChurnBand, PaybackBand, UnitEconomicsBand,
    STRONG_METRICS_NOTE,
};
use crate::metrics::MetricsSnapshot;

use super::format::{
    format_count, format_currency, format_months, format_multiple, format_percent, format_ratio,
};

/// Branding and date stamped onto a report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportConfig {
    pub product_name: String,
    pub title: String,
    pub subtitle: String,
    pub generated_on: NaiveDate,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            product_name: "ARR Insights Pro".to_string(),
            title: "SaaS ARR Valuation Report".to_string(),
            subtitle: "SaaS Valuation Report".to_string(),
            generated_on: Local::now().date_naive(),
        }
    }
}

/// One line of the key metrics table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportRow {
    pub metric: String,
    pub value: String,
}

impl ReportRow {
    fn new(metric: &str, value: String) -> Self {
        Self {
            metric: metric.to_string(),
            value,
        }
    }
}

/// A fully formatted valuation report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValuationReport {
    pub product_name: String,
    pub title: String,
    pub subtitle: String,
    pub generated_on: NaiveDate,
    pub executive_summary: String,
    pub metrics: Vec<ReportRow>,
    pub analysis: Vec<String>,
    pub recommendations: Vec<String>,
}

impl ValuationReport {
    pub fn build(snapshot: &MetricsSnapshot, config: &ReportConfig) -> Self {
        let assessment = Assessment::from_snapshot(snapshot);

        let recommendations = {
            let recs = report_recommendations(&assessment);
            if recs.is_empty() {
                vec![STRONG_METRICS_NOTE.to_string()]
            } else {
                recs.iter().map(|r| r.report_text().to_string()).collect()
            }
        };

        Self {
            product_name: config.product_name.clone(),
            title: config.title.clone(),
            subtitle: config.subtitle.clone(),
            generated_on: config.generated_on,
            executive_summary: executive_summary(snapshot),
            metrics: metric_rows(snapshot, assessment.ltv_cac_ratio),
            analysis: analysis(&assessment),
            recommendations,
        }
    }

    /// Value for a metric label, if present
    pub fn value_of(&self, metric: &str) -> Option<&str> {
        self.metrics
            .iter()
            .find(|row| row.metric == metric)
            .map(|row| row.value.as_str())
    }
}

fn executive_summary(snapshot: &MetricsSnapshot) -> String {
    format!(
        "This report provides a comprehensive analysis of your SaaS business metrics based on the data provided. \
         With an Annual Recurring Revenue (ARR) of {}, your estimated company valuation is {} at a multiple of {}.",
        format_currency(snapshot.annual_revenue),
        format_currency(snapshot.estimated_valuation),
        format_multiple(snapshot.valuation_multiple),
    )
}

/// The twelve table rows, in report order
pub fn metric_rows(snapshot: &MetricsSnapshot, ltv_cac_ratio: f64) -> Vec<ReportRow> {
    vec![
        ReportRow::new("Monthly Recurring Revenue", format_currency(snapshot.monthly_revenue)),
        ReportRow::new("Annual Recurring Revenue", format_currency(snapshot.annual_revenue)),
        ReportRow::new("Total Customers", format_count(snapshot.customer_count)),
        ReportRow::new("Average Revenue Per User (ARPU)", format_currency(snapshot.arpu)),
        ReportRow::new("Customer Lifetime Value (LTV)", format_currency(snapshot.ltv)),
        ReportRow::new("Customer Acquisition Cost (CAC)", format_currency(snapshot.cac)),
        ReportRow::new("LTV:CAC Ratio", format_ratio(ltv_cac_ratio)),
        ReportRow::new("CAC Payback Period", format_months(snapshot.payback_period)),
        ReportRow::new("Annual Growth Rate", format_percent(snapshot.growth_rate)),
        ReportRow::new("Annual Churn Rate", format_percent(snapshot.churn_rate)),
        ReportRow::new("Valuation Multiple", format_multiple(snapshot.valuation_multiple)),
        ReportRow::new("Estimated Company Valuation", format_currency(snapshot.estimated_valuation)),
    ]
}

fn analysis(assessment: &Assessment) -> Vec<String> {
    let ratio = format_ratio(assessment.ltv_cac_ratio);
    let unit_economics = match assessment.unit_economics {
        UnitEconomicsBand::Excellent => format!(
            "Your LTV:CAC ratio of {} is excellent. This indicates strong unit economics and a very profitable customer acquisition strategy.",
            ratio
        ),
        UnitEconomicsBand::Good => format!(
            "Your LTV:CAC ratio of {} is positive but could be improved. Aim for a ratio of 3 or higher for optimal unit economics.",
            ratio
        ),
        UnitEconomicsBand::NeedsImprovement => format!(
            "Your LTV:CAC ratio of {} is concerning. You're spending more to acquire customers than they generate in lifetime value.",
            ratio
        ),
    };

    let months = format_months(assessment.payback_period);
    let payback = match assessment.payback {
        PaybackBand::Healthy => format!(
            "Your CAC payback period of {} is healthy, allowing for rapid reinvestment of capital.",
            months
        ),
        PaybackBand::Long => format!(
            "Your CAC payback period of {} is long. Consider strategies to reduce CAC or increase ARPU.",
            months
        ),
    };

    let churn_rate = format_percent(assessment.churn_rate);
    let churn = match assessment.churn {
        ChurnBand::Excellent => format!(
            "Your annual churn rate of {} is excellent, indicating strong product-market fit and customer satisfaction.",
            churn_rate
        ),
        ChurnBand::Acceptable => format!(
            "Your annual churn rate of {} is reasonable but could be improved with better retention strategies.",
            churn_rate
        ),
        ChurnBand::High => format!(
            "Your annual churn rate of {} is high and should be addressed as a priority to improve valuation.",
            churn_rate
        ),
    };

    vec![unit_economics, payback, churn]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::MetricInputs;

    fn config() -> ReportConfig {
        ReportConfig {
            generated_on: NaiveDate::from_ymd_opt(2026, 10, 15).unwrap(),
            ..ReportConfig::default()
        }
    }

    fn default_report() -> ValuationReport {
        ValuationReport::build(&MetricsSnapshot::compute(&MetricInputs::default()), &config())
    }

    #[test]
    fn test_metric_table() {
        let report = default_report();
        let expected = [
            ("Monthly Recurring Revenue", "₹2,00,000"),
            ("Annual Recurring Revenue", "₹24,00,000"),
            ("Total Customers", "100"),
            ("Average Revenue Per User (ARPU)", "₹2,000"),
            ("Customer Lifetime Value (LTV)", "₹40,000"),
            ("Customer Acquisition Cost (CAC)", "₹5,000"),
            ("LTV:CAC Ratio", "8.00"),
            ("CAC Payback Period", "2.50 months"),
            ("Annual Growth Rate", "15.00%"),
            ("Annual Churn Rate", "5.00%"),
            ("Valuation Multiple", "10.00x ARR"),
            ("Estimated Company Valuation", "₹2,40,00,000"),
        ];

        assert_eq!(report.metrics.len(), expected.len());
        for (row, (metric, value)) in report.metrics.iter().zip(expected) {
            assert_eq!(row.metric, metric);
            assert_eq!(row.value, value, "value for {}", metric);
        }
    }

    #[test]
    fn test_executive_summary() {
        let report = default_report();
        assert!(report.executive_summary.contains("Annual Recurring Revenue (ARR) of ₹24,00,000"));
        assert!(report.executive_summary.contains("valuation is ₹2,40,00,000 at a multiple of 10.00x ARR."));
    }

    #[test]
    fn test_analysis_paragraphs() {
        let report = default_report();
        assert_eq!(report.analysis.len(), 3);
        assert!(report.analysis[0].starts_with("Your LTV:CAC ratio of 8.00 is excellent."));
        assert!(report.analysis[1].starts_with("Your CAC payback period of 2.50 months is healthy"));
        assert!(report.analysis[2].starts_with("Your annual churn rate of 5.00% is excellent"));
    }

    #[test]
    fn test_recommendations_or_strong_note() {
        let report = default_report();
        assert_eq!(report.recommendations.len(), 1);
        assert!(report.recommendations[0].starts_with("Consider strategies to accelerate growth"));

        let strong = MetricInputs::new(2_000_000.0, 100.0, 3.0, 50.0, 20_000.0, 15.0);
        let report = ValuationReport::build(&MetricsSnapshot::compute(&strong), &config());
        assert_eq!(report.recommendations, vec![STRONG_METRICS_NOTE.to_string()]);
    }

    #[test]
    fn test_zero_cac_renders_infinity() {
        let inputs = MetricInputs { cac: 0.0, ..MetricInputs::default() };
        let report = ValuationReport::build(&MetricsSnapshot::compute(&inputs), &config());
        assert_eq!(report.value_of("LTV:CAC Ratio"), Some("Infinity"));
        assert_eq!(report.value_of("Customer Acquisition Cost (CAC)"), Some("₹0"));
    }
}
