//! Year-over-year projection built on repeated conversion

use log::{debug, warn};

use super::series::ProjectionResult;
use super::state::ProjectionState;
use crate::assumptions::{GrowthConfig, RateConfig};
use crate::conversion::{convert, CompensationInput};
use crate::error::{CompError, CompResult};
use crate::locale::Direction;

/// Projects a compensation package forward under fixed tax rates and
/// compounding growth/drift
#[derive(Debug, Clone)]
pub struct ProjectionEngine {
    rates: RateConfig,
    growth: GrowthConfig,
}

impl ProjectionEngine {
    pub fn new(rates: RateConfig, growth: GrowthConfig) -> Self {
        Self { rates, growth }
    }

    pub fn rates(&self) -> &RateConfig {
        &self.rates
    }

    pub fn growth(&self) -> &GrowthConfig {
        &self.growth
    }

    /// Run years 0..=num_years
    ///
    /// Year 0 converts the inputs as given. Each later year first compounds
    /// growth and drift onto the previous year's working values, then
    /// converts. Any failing year aborts the run and reports that year's
    /// working values.
    pub fn project(
        &self,
        direction: Direction,
        input: &CompensationInput,
        num_years: u32,
    ) -> CompResult<ProjectionResult> {
        if num_years < 1 {
            return Err(CompError::invalid("num_years", num_years as f64));
        }
        self.growth.validate()?;

        let seed = ProjectionState::seed(input, &self.rates);
        let mut years = std::iter::successors(Some(seed), |state| Some(state.advance_year(&self.growth)))
            .take(num_years as usize + 1);

        years.try_fold(ProjectionResult::new(direction, num_years), |mut result, state| -> CompResult<ProjectionResult> {
            self.record_year(direction, &state, &mut result)?;
            Ok(result)
        })
    }

    /// Convert one year's working values and append both sides
    fn record_year(
        &self,
        direction: Direction,
        state: &ProjectionState,
        result: &mut ProjectionResult,
    ) -> CompResult<()> {
        let input = state.input();
        let conversion = convert(direction, &input, &state.rates(&self.rates)).map_err(|e| {
            warn!("projection aborted in year {}: {}", state.year, e);
            e.in_year(state.year_inputs())
        })?;

        result.source.push_year(
            state.year,
            input.base_salary,
            input.bonus,
            input.rsus,
            conversion.source_total,
            None,
        );
        result.target.push_year(
            state.year,
            conversion.target_base,
            conversion.target_bonus,
            conversion.target_rsus,
            conversion.target_total,
            Some((state.exchange_rate, state.cost_of_living_factor)),
        );

        debug!(
            "year {}: source_total={:.2} target_total={:.2}",
            state.year, conversion.source_total, conversion.target_total
        );
        Ok(())
    }
}

/// Project without constructing an engine
pub fn project(
    direction: Direction,
    input: &CompensationInput,
    rates: &RateConfig,
    growth: &GrowthConfig,
    num_years: u32,
) -> CompResult<ProjectionResult> {
    ProjectionEngine::new(*rates, *growth).project(direction, input, num_years)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn reference_input() -> CompensationInput {
        CompensationInput::new(100_000.0, 20_000.0, 30_000.0)
    }

    #[test]
    fn test_projection_runs() {
        let engine = ProjectionEngine::new(RateConfig::default(), GrowthConfig::default());
        let result = engine.project(Direction::SeattleIsSource, &reference_input(), 5).unwrap();

        assert_eq!(result.source.len(), 6);
        assert_eq!(result.target.len(), 6);
        let years: Vec<u32> = result.target.points.iter().map(|p| p.year).collect();
        assert_eq!(years, vec![0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_year_one_growth() {
        let growth = GrowthConfig {
            base_growth: 0.03,
            bonus_growth: 0.03,
            rsu_growth: 0.05,
            ..GrowthConfig::flat()
        };
        let result = project(Direction::SeattleIsSource, &reference_input(), &RateConfig::default(), &growth, 1).unwrap();

        let year1 = &result.source.points[1];
        assert_relative_eq!(year1.base, 103_000.0, max_relative = 1e-12);
        assert_relative_eq!(year1.bonus, 20_600.0, max_relative = 1e-12);
        assert_relative_eq!(year1.rsus, 31_500.0, max_relative = 1e-12);

        let expected = convert(
            Direction::SeattleIsSource,
            &CompensationInput::new(103_000.0, 20_600.0, 31_500.0),
            &RateConfig::default(),
        )
        .unwrap();
        assert_relative_eq!(result.target.points[1].total, expected.target_total, max_relative = 1e-12);
    }

    #[test]
    fn test_target_points_carry_factors() {
        let growth = GrowthConfig {
            exchange_rate_drift: 0.02,
            ..GrowthConfig::flat()
        };
        let result = project(Direction::MadridIsSource, &reference_input(), &RateConfig::default().swapped(), &growth, 2).unwrap();

        assert_eq!(result.source.points[0].exchange_rate, None);
        assert_eq!(result.target.points[0].exchange_rate, Some(1.09));
        assert_relative_eq!(result.target.points[2].exchange_rate.unwrap(), 1.09 * 1.02 * 1.02, max_relative = 1e-12);
        assert_eq!(result.target.points[2].cost_of_living_factor, Some(0.60));
    }

    #[test]
    fn test_zero_years_rejected() {
        let err = project(Direction::SeattleIsSource, &reference_input(), &RateConfig::default(), &GrowthConfig::flat(), 0)
            .unwrap_err();
        assert_eq!(err.field(), "num_years");
    }

    #[test]
    fn test_failing_year_reports_its_inputs() {
        // Exchange rate collapses to 0 in year 1
        let growth = GrowthConfig {
            exchange_rate_drift: -1.0,
            ..GrowthConfig::flat()
        };
        let err = project(Direction::SeattleIsSource, &reference_input(), &RateConfig::default(), &growth, 3).unwrap_err();

        assert_eq!(err.field(), "exchange_rate");
        let year = err.year_inputs().expect("year context");
        assert_eq!(year.year, 1);
        assert_eq!(year.exchange_rate, 0.0);
        assert_eq!(year.base_salary, 100_000.0);
    }

    #[test]
    fn test_negative_growth_allowed() {
        let growth = GrowthConfig {
            bonus_growth: -0.5,
            ..GrowthConfig::flat()
        };
        let result = project(Direction::SeattleIsSource, &reference_input(), &RateConfig::default(), &growth, 2).unwrap();
        assert_relative_eq!(result.source.points[2].bonus, 5_000.0, max_relative = 1e-12);
    }
}
