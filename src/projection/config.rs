//! Projection horizon and reference year

use chrono::{Datelike, Local};
use serde::{Deserialize, Serialize};

/// Default projection horizon in years
pub const DEFAULT_PROJECTION_YEARS: u32 = 5;

/// Configuration shared by the revenue and customer projections
///
/// Both series are generated against the same `reference_year` so they
/// agree on year 0 even when produced at slightly different instants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectionConfig {
    /// Horizon N; each series has N + 1 points
    pub years: u32,

    /// Calendar year of point 0
    pub reference_year: i32,
}

impl ProjectionConfig {
    pub fn new(years: u32, reference_year: i32) -> Self {
        Self { years, reference_year }
    }

    /// Default horizon anchored at the current local calendar year
    pub fn current() -> Self {
        Self::new(DEFAULT_PROJECTION_YEARS, Local::now().year())
    }

    /// Same reference year, different horizon
    pub fn with_years(self, years: u32) -> Self {
        Self { years, ..self }
    }

    /// Number of points each series will contain
    pub fn point_count(&self) -> usize {
        self.years as usize + 1
    }

    /// Calendar year for offset `i` from the reference year
    ///
    /// Widened to i64 so every (i32 year, u32 offset) pair is representable.
    pub fn year_at(&self, i: u32) -> i64 {
        i64::from(self.reference_year) + i64::from(i)
    }
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self::current()
    }
}
