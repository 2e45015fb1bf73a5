//! Multi-year revenue and customer projections

mod config;
mod revenue;
mod customers;
mod rounding;

pub use config::{ProjectionConfig, DEFAULT_PROJECTION_YEARS};
pub use revenue::{RevenuePoint, project_revenue};
pub use customers::{CustomerPoint, project_customers};
pub use rounding::round_half_up;
