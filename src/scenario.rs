//! Scenario runner for batch calculations
//!
//! Loads many named input sets from CSV and calculates them in parallel
//! against one shared projection config.

use std::io;
use std::path::Path;

use log::info;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::assessment::ltv_cac_ratio;
use crate::calculator::Calculation;
use crate::error::Result;
use crate::metrics::MetricInputs;
use crate::projection::ProjectionConfig;

/// A named set of calculator inputs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scenario {
    pub name: String,
    #[serde(flatten)]
    pub inputs: MetricInputs,
}

/// Result of one scenario
#[derive(Debug, Clone, PartialEq)]
pub struct ScenarioResult {
    pub name: String,
    pub calculation: Calculation,
}

/// Flat summary row written by the batch tools
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioSummary {
    pub name: String,
    pub annual_revenue: f64,
    pub arpu: f64,
    pub ltv: f64,
    pub ltv_cac_ratio: f64,
    pub payback_period: f64,
    pub estimated_valuation: f64,
    pub final_year: i64,
    pub final_arr: f64,
    pub final_customers: i64,
}

impl ScenarioResult {
    pub fn summary(&self) -> ScenarioSummary {
        let snapshot = &self.calculation.snapshot;
        let last_revenue = self.calculation.revenue_projection.last();
        let last_cohort = self.calculation.customer_projection.last();

        ScenarioSummary {
            name: self.name.clone(),
            annual_revenue: snapshot.annual_revenue,
            arpu: snapshot.arpu,
            ltv: snapshot.ltv,
            ltv_cac_ratio: ltv_cac_ratio(snapshot.ltv, snapshot.cac),
            payback_period: snapshot.payback_period,
            estimated_valuation: snapshot.estimated_valuation,
            final_year: last_revenue.map(|p| p.year).unwrap_or_else(|| self.calculation.config.year_at(0)),
            final_arr: last_revenue.map(|p| p.arr).unwrap_or(0.0),
            final_customers: last_cohort.map(|p| p.customers).unwrap_or(0),
        }
    }
}

/// Load scenarios from a CSV file with a `name` column plus the six inputs
pub fn load_scenarios<P: AsRef<Path>>(path: P) -> Result<Vec<Scenario>> {
    let reader = csv::Reader::from_path(path)?;
    read_scenarios(reader)
}

/// Parse scenarios from any CSV source
pub fn read_scenarios_from<R: io::Read>(source: R) -> Result<Vec<Scenario>> {
    read_scenarios(csv::Reader::from_reader(source))
}

fn read_scenarios<R: io::Read>(mut reader: csv::Reader<R>) -> Result<Vec<Scenario>> {
    let mut scenarios = Vec::new();
    for result in reader.deserialize() {
        let row: ScenarioRow = result?;
        scenarios.push(row.into());
    }
    Ok(scenarios)
}

/// csv cannot deserialize through `#[serde(flatten)]`, so rows are read flat
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ScenarioRow {
    name: String,
    monthly_revenue: f64,
    customer_count: f64,
    churn_rate: f64,
    growth_rate: f64,
    cac: f64,
    valuation_multiple: f64,
}

impl From<ScenarioRow> for Scenario {
    fn from(row: ScenarioRow) -> Self {
        Scenario {
            name: row.name,
            inputs: MetricInputs::new(
                row.monthly_revenue,
                row.customer_count,
                row.churn_rate,
                row.growth_rate,
                row.cac,
                row.valuation_multiple,
            ),
        }
    }
}

/// Write scenario summaries as CSV
pub fn write_summaries<W: io::Write>(results: &[ScenarioResult], writer: W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    for result in results {
        wtr.serialize(result.summary())?;
    }
    wtr.flush()?;
    Ok(())
}

/// Batch runner sharing one projection config across scenarios
///
/// # Example
/// ```ignore
/// let runner = ScenarioRunner::new(ProjectionConfig::current());
/// let scenarios = load_scenarios("data/scenarios.csv")?;
/// for result in runner.run_batch(&scenarios) {
///     println!("{}: {}", result.name, result.calculation.snapshot.estimated_valuation);
/// }
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ScenarioRunner {
    config: ProjectionConfig,
}

impl ScenarioRunner {
    pub fn new(config: ProjectionConfig) -> Self {
        Self { config }
    }

    /// Run a single scenario
    pub fn run(&self, scenario: &Scenario) -> ScenarioResult {
        ScenarioResult {
            name: scenario.name.clone(),
            calculation: Calculation::run(&scenario.inputs, self.config),
        }
    }

    /// Run all scenarios in parallel; output order matches input order
    pub fn run_batch(&self, scenarios: &[Scenario]) -> Vec<ScenarioResult> {
        info!(
            "Running {} scenarios over {} years from {}",
            scenarios.len(),
            self.config.years,
            self.config.reference_year
        );
        scenarios.par_iter().map(|s| self.run(s)).collect()
    }

    /// Run one input set under several horizons
    pub fn run_horizons(&self, scenario: &Scenario, horizons: &[u32]) -> Vec<ScenarioResult> {
        horizons
            .iter()
            .map(|&years| {
                let runner = ScenarioRunner::new(self.config.with_years(years));
                runner.run(scenario)
            })
            .collect()
    }

    pub fn config(&self) -> &ProjectionConfig {
        &self.config
    }
}

impl Default for ScenarioRunner {
    fn default() -> Self {
        Self::new(ProjectionConfig::current())
    }
}
