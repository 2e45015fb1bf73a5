//! The "Calculate" action: one snapshot plus both projections
//!
//! A [`Calculation`] is immutable. [`Session`] holds the latest one and
//! replaces it on every recalculation, so report and email actions can be
//! retried against the last result after a downstream failure.

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::metrics::{MetricInputs, MetricsSnapshot};
use crate::projection::{
    project_customers, project_revenue, CustomerPoint, ProjectionConfig, RevenuePoint,
};

/// Everything produced by a single calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Calculation {
    pub snapshot: MetricsSnapshot,
    pub revenue_projection: Vec<RevenuePoint>,
    pub customer_projection: Vec<CustomerPoint>,
    pub config: ProjectionConfig,
}

impl Calculation {
    /// Compute the snapshot and both series against one reference year
    pub fn run(inputs: &MetricInputs, config: ProjectionConfig) -> Self {
        let snapshot = MetricsSnapshot::compute(inputs);

        let revenue_projection =
            project_revenue(snapshot.annual_revenue, inputs.growth_rate, &config);
        let customer_projection = project_customers(
            inputs.customer_count,
            inputs.churn_rate,
            inputs.growth_rate,
            &config,
        );

        debug!(
            "Calculated ARR {:.2}, ARPU {:.2}, LTV {:.2} over {} years from {}",
            snapshot.annual_revenue,
            snapshot.arpu,
            snapshot.ltv,
            config.years,
            config.reference_year
        );

        Self {
            snapshot,
            revenue_projection,
            customer_projection,
            config,
        }
    }
}

/// Holds the current calculation for an interactive session
#[derive(Debug, Clone, Default)]
pub struct Session {
    current: Option<Calculation>,
    calculations: u64,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run a calculation and make it current, replacing any prior result
    pub fn calculate(&mut self, inputs: &MetricInputs, config: ProjectionConfig) -> &Calculation {
        self.calculations += 1;
        info!("Calculation #{} complete", self.calculations);
        self.current.insert(Calculation::run(inputs, config))
    }

    /// Latest calculation, if any
    pub fn current(&self) -> Option<&Calculation> {
        self.current.as_ref()
    }

    /// Drop the current result (navigation away)
    pub fn clear(&mut self) {
        self.current = None;
    }

    pub fn calculation_count(&self) -> u64 {
        self.calculations
    }
}
