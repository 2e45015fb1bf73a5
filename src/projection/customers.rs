//! Customer cohort trajectory under constant churn and growth

use serde::{Deserialize, Serialize};

use super::config::ProjectionConfig;
use super::rounding::round_half_up;

/// Cohort state at the end of one projected year
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerPoint {
    pub year: i64,
    /// Cohort size after this year's churn and growth
    pub customers: i64,
    /// Gross adds this year
    pub new_customers: i64,
    /// Gross losses this year
    pub churned_customers: i64,
}

/// Project the customer cohort from `initial_customers`
///
/// Churn and growth are both applied to the count at the start of the year.
/// Unlike the revenue series, point 0 already reflects one year of churn and
/// growth; it equals `initial_customers` only when both rates are zero.
pub fn project_customers(
    initial_customers: f64,
    churn_rate: f64,
    growth_rate: f64,
    config: &ProjectionConfig,
) -> Vec<CustomerPoint> {
    let mut points = Vec::with_capacity(config.point_count());
    let mut customers = initial_customers;

    for i in 0..=config.years {
        let churned = round_half_up(customers * (churn_rate / 100.0));
        let added = round_half_up(customers * (growth_rate / 100.0));
        customers = customers - churned + added;

        points.push(CustomerPoint {
            year: config.year_at(i),
            customers: round_half_up(customers) as i64,
            new_customers: added as i64,
            churned_customers: churned as i64,
        });
    }

    points
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> ProjectionConfig {
        ProjectionConfig::new(5, 2026)
    }

    #[test]
    fn test_default_scenario() {
        let points = project_customers(100.0, 5.0, 15.0, &config());
        assert_eq!(points.len(), 6);
        assert_eq!(
            points[0],
            CustomerPoint { year: 2026, customers: 110, new_customers: 15, churned_customers: 5 }
        );
        // 110: churn 5.5 -> 6, growth 16.5 -> 17
        assert_eq!(
            points[1],
            CustomerPoint { year: 2027, customers: 121, new_customers: 17, churned_customers: 6 }
        );
    }

    #[test]
    fn test_point_zero_applies_a_year() {
        let points = project_customers(200.0, 10.0, 10.0, &config());
        assert_eq!(points[0].churned_customers, 20);
        assert_eq!(points[0].new_customers, 20);
        assert_eq!(points[0].customers, 200);

        let points = project_customers(200.0, 0.0, 50.0, &config());
        assert_eq!(points[0].customers, 300);
    }

    #[test]
    fn test_zero_rates_hold_initial() {
        let points = project_customers(42.0, 0.0, 0.0, &config());
        assert!(points.iter().all(|p| p.customers == 42
            && p.new_customers == 0
            && p.churned_customers == 0));
    }

    #[test]
    fn test_cohort_balance() {
        let points = project_customers(1_000.0, 7.5, 23.0, &ProjectionConfig::new(10, 2026));
        let mut prior = 1_000;
        for p in &points {
            assert_eq!(p.customers, prior - p.churned_customers + p.new_customers);
            prior = p.customers;
        }
    }

    #[test]
    fn test_length_and_years() {
        for years in [0, 3, 5, 20] {
            let points = project_customers(10.0, 5.0, 5.0, &ProjectionConfig::new(years, 2024));
            assert_eq!(points.len(), years as usize + 1);
            assert_eq!(points.first().map(|p| p.year), Some(2024));
            assert_eq!(points.last().map(|p| p.year), Some(2024 + i64::from(years)));
        }
    }

    #[test]
    fn test_extreme_churn_goes_negative() {
        let points = project_customers(100.0, 250.0, 0.0, &ProjectionConfig::new(1, 2026));
        assert_eq!(points[0].customers, -150);
        assert_eq!(points[0].churned_customers, 250);
    }

    #[test]
    fn test_last_representable_reference_year() {
        let points = project_customers(100.0, 5.0, 15.0, &ProjectionConfig::new(2, i32::MAX));
        let years: Vec<i64> = points.iter().map(|p| p.year).collect();
        let base = i64::from(i32::MAX);
        assert_eq!(years, vec![base, base + 1, base + 2]);
    }

    #[test]
    fn test_no_customers() {
        let points = project_customers(0.0, 5.0, 15.0, &config());
        assert!(points.iter().all(|p| p.customers == 0));
    }
}
