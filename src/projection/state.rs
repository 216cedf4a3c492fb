//! Working values carried from one projection year to the next

use crate::assumptions::{GrowthConfig, RateConfig};
use crate::conversion::CompensationInput;
use crate::error::YearInputs;

/// Compensation and rate factors in effect for one projection year
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectionState {
    /// Year index, 0 = present
    pub year: u32,
    pub base_salary: f64,
    pub bonus: f64,
    pub rsus: f64,
    pub exchange_rate: f64,
    pub cost_of_living_factor: f64,
}

impl ProjectionState {
    /// Year 0: the inputs as given, no growth applied
    pub fn seed(input: &CompensationInput, rates: &RateConfig) -> Self {
        Self {
            year: 0,
            base_salary: input.base_salary,
            bonus: input.bonus,
            rsus: input.rsus,
            exchange_rate: rates.exchange_rate,
            cost_of_living_factor: rates.cost_of_living_factor,
        }
    }

    /// Compound one year of growth and drift
    pub fn advance_year(&self, growth: &GrowthConfig) -> Self {
        Self {
            year: self.year + 1,
            base_salary: self.base_salary * (1.0 + growth.base_growth),
            bonus: self.bonus * (1.0 + growth.bonus_growth),
            rsus: self.rsus * (1.0 + growth.rsu_growth),
            exchange_rate: self.exchange_rate * (1.0 + growth.exchange_rate_drift),
            cost_of_living_factor: self.cost_of_living_factor * (1.0 + growth.cost_of_living_drift),
        }
    }

    pub fn input(&self) -> CompensationInput {
        CompensationInput::new(self.base_salary, self.bonus, self.rsus)
    }

    /// Base rates with this year's exchange rate and cost-of-living factor
    pub fn rates(&self, base: &RateConfig) -> RateConfig {
        base.with_factors(self.exchange_rate, self.cost_of_living_factor)
    }

    pub fn year_inputs(&self) -> YearInputs {
        YearInputs {
            year: self.year,
            base_salary: self.base_salary,
            bonus: self.bonus,
            rsus: self.rsus,
            exchange_rate: self.exchange_rate,
            cost_of_living_factor: self.cost_of_living_factor,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_advance_year_compounds() {
        let input = CompensationInput::new(100_000.0, 20_000.0, 30_000.0);
        let growth = GrowthConfig {
            exchange_rate_drift: 0.01,
            cost_of_living_drift: -0.02,
            ..Default::default()
        };

        let year2 = ProjectionState::seed(&input, &RateConfig::default())
            .advance_year(&growth)
            .advance_year(&growth);

        assert_eq!(year2.year, 2);
        assert_relative_eq!(year2.base_salary, 100_000.0 * 1.03 * 1.03, max_relative = 1e-12);
        assert_relative_eq!(year2.rsus, 30_000.0 * 1.05 * 1.05, max_relative = 1e-12);
        assert_relative_eq!(year2.exchange_rate, 1.09 * 1.01 * 1.01, max_relative = 1e-12);
        assert_relative_eq!(year2.cost_of_living_factor, 0.60 * 0.98 * 0.98, max_relative = 1e-12);
    }

    #[test]
    fn test_rates_keep_tax_rates() {
        let state = ProjectionState {
            year: 1,
            base_salary: 0.0,
            bonus: 0.0,
            rsus: 0.0,
            exchange_rate: 1.2,
            cost_of_living_factor: 0.7,
        };
        let rates = state.rates(&RateConfig::default());
        assert_eq!(rates.source_tax_rate, 0.30);
        assert_eq!(rates.exchange_rate, 1.2);
        assert_eq!(rates.cost_of_living_factor, 0.7);
    }
}
