//! ARR trajectory under constant annual growth

use serde::{Deserialize, Serialize};

use super::config::ProjectionConfig;
use super::rounding::round_half_up;

/// ARR for one projected year
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RevenuePoint {
    pub year: i64,
    /// Rounded to the nearest whole currency unit
    pub arr: f64,
}

/// Project ARR from `current_arr` compounding at `growth_rate` percent per year
///
/// Point 0 is `current_arr` itself. Compounding runs on the unrounded value;
/// only the emitted `arr` is rounded.
pub fn project_revenue(
    current_arr: f64,
    growth_rate: f64,
    config: &ProjectionConfig,
) -> Vec<RevenuePoint> {
    let growth_factor = 1.0 + growth_rate / 100.0;
    let mut points = Vec::with_capacity(config.point_count());
    let mut year_arr = current_arr;

    for i in 0..=config.years {
        points.push(RevenuePoint {
            year: config.year_at(i),
            arr: round_half_up(year_arr),
        });
        year_arr *= growth_factor;
    }

    points
}
