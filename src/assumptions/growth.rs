//! Year-over-year growth and drift rates for projections

use serde::{Deserialize, Serialize};

use crate::error::{CompError, CompResult};

/// Default number of years to project
pub const DEFAULT_PROJECTION_YEARS: u32 = 5;

/// Annual compounding rates applied before each projected year
///
/// Negative values are legitimate (shrinking bonus pool, weakening dollar).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GrowthConfig {
    pub base_growth: f64,
    pub bonus_growth: f64,
    pub rsu_growth: f64,
    pub exchange_rate_drift: f64,
    pub cost_of_living_drift: f64,
}

impl GrowthConfig {
    /// No growth and no drift
    pub fn flat() -> Self {
        Self {
            base_growth: 0.0,
            bonus_growth: 0.0,
            rsu_growth: 0.0,
            exchange_rate_drift: 0.0,
            cost_of_living_drift: 0.0,
        }
    }

    /// Only finiteness is checked; sign is unrestricted
    pub fn validate(&self) -> CompResult<()> {
        let fields = [
            ("base_growth", self.base_growth),
            ("bonus_growth", self.bonus_growth),
            ("rsu_growth", self.rsu_growth),
            ("exchange_rate_drift", self.exchange_rate_drift),
            ("cost_of_living_drift", self.cost_of_living_drift),
        ];
        match fields.iter().find(|(_, v)| !v.is_finite()) {
            Some(&(field, value)) => Err(CompError::invalid(field, value)),
            None => Ok(()),
        }
    }
}

impl Default for GrowthConfig {
    fn default() -> Self {
        Self {
            base_growth: 0.03,
            bonus_growth: 0.03,
            rsu_growth: 0.05,
            exchange_rate_drift: 0.0,
            cost_of_living_drift: 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negative_growth_accepted() {
        let growth = GrowthConfig {
            bonus_growth: -0.25,
            exchange_rate_drift: -0.05,
            ..GrowthConfig::flat()
        };
        assert!(growth.validate().is_ok());
    }

    #[test]
    fn test_non_finite_growth_rejected() {
        let growth = GrowthConfig {
            rsu_growth: f64::NAN,
            ..Default::default()
        };
        assert_eq!(growth.validate().unwrap_err().field(), "rsu_growth");
    }
}
