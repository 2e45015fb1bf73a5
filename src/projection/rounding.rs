//! Rounding used when emitting projection points

/// Round to the nearest integer with ties toward positive infinity
///
/// Matches browser `Math.round`: 2.5 -> 3, -2.5 -> -2. `f64::round` would send
/// -2.5 to -3, which shifts cohort counts for negative rates.
pub fn round_half_up(value: f64) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let floor = value.floor();
    // exact for every finite f64
    if value - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}
