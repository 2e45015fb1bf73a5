//! Qualitative bands for the headline metrics
//!
//! Thresholds are fixed. A NaN metric fails every `>=`/`<=` comparison and so
//! falls into the last band of each ladder.

use serde::{Deserialize, Serialize};

/// LTV:CAC ratio band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnitEconomicsBand {
    Excellent,
    Good,
    NeedsImprovement,
}

impl UnitEconomicsBand {
    pub fn from_ratio(ratio: f64) -> Self {
        if ratio >= 3.0 {
            UnitEconomicsBand::Excellent
        } else if ratio >= 1.0 {
            UnitEconomicsBand::Good
        } else {
            UnitEconomicsBand::NeedsImprovement
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            UnitEconomicsBand::Excellent => "Excellent",
            UnitEconomicsBand::Good => "Good",
            UnitEconomicsBand::NeedsImprovement => "Needs Improvement",
        }
    }
}

/// CAC payback band (months)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaybackBand {
    /// Recovered within a year
    Healthy,
    Long,
}

impl PaybackBand {
    pub fn from_months(months: f64) -> Self {
        if months <= 12.0 {
            PaybackBand::Healthy
        } else {
            PaybackBand::Long
        }
    }
}

/// Annual growth band (percent)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GrowthBand {
    Exceptional,
    Healthy,
    BelowAverage,
}

impl GrowthBand {
    pub fn from_rate(rate: f64) -> Self {
        if rate >= 40.0 {
            GrowthBand::Exceptional
        } else if rate >= 20.0 {
            GrowthBand::Healthy
        } else {
            GrowthBand::BelowAverage
        }
    }
}

/// Annual churn band (percent)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChurnBand {
    Excellent,
    Acceptable,
    High,
}

impl ChurnBand {
    pub fn from_rate(rate: f64) -> Self {
        if rate <= 5.0 {
            ChurnBand::Excellent
        } else if rate <= 10.0 {
            ChurnBand::Acceptable
        } else {
            ChurnBand::High
        }
    }
}

/// ARPU band (currency per customer per month)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ArpuBand {
    /// Enterprise or mid-market pricing
    Strong,
    /// Typical SMB pricing
    MidRange,
    Low,
}

impl ArpuBand {
    pub fn from_arpu(arpu: f64) -> Self {
        if arpu >= 10_000.0 {
            ArpuBand::Strong
        } else if arpu >= 1_000.0 {
            ArpuBand::MidRange
        } else {
            ArpuBand::Low
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_economics_thresholds() {
        assert_eq!(UnitEconomicsBand::from_ratio(8.0), UnitEconomicsBand::Excellent);
        assert_eq!(UnitEconomicsBand::from_ratio(3.0), UnitEconomicsBand::Excellent);
        assert_eq!(UnitEconomicsBand::from_ratio(2.99), UnitEconomicsBand::Good);
        assert_eq!(UnitEconomicsBand::from_ratio(1.0), UnitEconomicsBand::Good);
        assert_eq!(UnitEconomicsBand::from_ratio(0.4), UnitEconomicsBand::NeedsImprovement);
        assert_eq!(UnitEconomicsBand::from_ratio(f64::INFINITY), UnitEconomicsBand::Excellent);
        assert_eq!(UnitEconomicsBand::from_ratio(f64::NAN), UnitEconomicsBand::NeedsImprovement);
        assert_eq!(UnitEconomicsBand::NeedsImprovement.label(), "Needs Improvement");
    }

    #[test]
    fn test_payback_thresholds() {
        assert_eq!(PaybackBand::from_months(12.0), PaybackBand::Healthy);
        assert_eq!(PaybackBand::from_months(12.01), PaybackBand::Long);
    }

    #[test]
    fn test_growth_thresholds() {
        assert_eq!(GrowthBand::from_rate(40.0), GrowthBand::Exceptional);
        assert_eq!(GrowthBand::from_rate(20.0), GrowthBand::Healthy);
        assert_eq!(GrowthBand::from_rate(15.0), GrowthBand::BelowAverage);
    }

    #[test]
    fn test_churn_thresholds() {
        assert_eq!(ChurnBand::from_rate(5.0), ChurnBand::Excellent);
        assert_eq!(ChurnBand::from_rate(10.0), ChurnBand::Acceptable);
        assert_eq!(ChurnBand::from_rate(10.5), ChurnBand::High);
        assert_eq!(ChurnBand::from_rate(f64::NAN), ChurnBand::High);
    }

    #[test]
    fn test_arpu_thresholds() {
        assert_eq!(ArpuBand::from_arpu(10_000.0), ArpuBand::Strong);
        assert_eq!(ArpuBand::from_arpu(2_000.0), ArpuBand::MidRange);
        assert_eq!(ArpuBand::from_arpu(999.0), ArpuBand::Low);
    }
}
