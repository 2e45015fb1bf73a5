//! ARR Calculator - SaaS metrics, projections and valuation reports
//!
//! This library provides:
//! - Metrics snapshot (ARR, ARPU, LTV, CAC payback, valuation) from six inputs
//! - Five-year ARR and customer cohort projections
//! - Unit economics assessment and recommendations
//! - INR-formatted valuation reports (text, HTML, CSV, JSON)
//! - Email delivery of reports
//! - Parallel batch runs over many scenarios

pub mod error;
pub mod metrics;
pub mod projection;
pub mod calculator;
pub mod assessment;
pub mod report;
pub mod delivery;
pub mod scenario;

// Re-export commonly used types
pub use error::{Error, Result};
pub use metrics::{MetricInputs, MetricsSnapshot};
pub use projection::{ProjectionConfig, RevenuePoint, CustomerPoint};
pub use calculator::{Calculation, Session};
pub use assessment::Assessment;
pub use report::{ValuationReport, ReportConfig, ReportFormat};
pub use scenario::ScenarioRunner;
