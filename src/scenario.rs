//! Saved scenarios and batch evaluation
//!
//! `ScenarioBook` is caller-owned bookkeeping for side-by-side comparison;
//! the engines never read or write it. `ScenarioRunner` evaluates many
//! packages against one set of settings.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::assumptions::Settings;
use crate::conversion::{convert, CompensationInput, ConversionResult};
use crate::error::CompResult;
use crate::locale::{Currency, Direction, Locale};
use crate::projection::{ProjectionEngine, ProjectionResult};

/// Snapshot of one conversion kept for later comparison
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub id: u32,
    pub source_locale: Locale,
    pub target_locale: Locale,
    pub base: f64,
    pub bonus: f64,
    pub rsus: f64,
    pub source_total: f64,
    pub target_total: f64,
    pub source_currency: Currency,
    pub target_currency: Currency,
}

/// Append-only list of saved scenarios, cleared wholesale
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScenarioBook {
    scenarios: Vec<Scenario>,
}

impl ScenarioBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Save a conversion; ids count up from 1 since the last clear
    pub fn save(&mut self, input: &CompensationInput, result: &ConversionResult) -> &Scenario {
        let scenario = Scenario {
            id: self.scenarios.len() as u32 + 1,
            source_locale: result.source_locale,
            target_locale: result.target_locale,
            base: input.base_salary,
            bonus: input.bonus,
            rsus: input.rsus,
            source_total: input.total(),
            target_total: result.target_total,
            source_currency: result.source_currency,
            target_currency: result.target_currency,
        };
        self.scenarios.push(scenario);
        &self.scenarios[self.scenarios.len() - 1]
    }

    pub fn clear(&mut self) {
        self.scenarios.clear();
    }

    pub fn scenarios(&self) -> &[Scenario] {
        &self.scenarios
    }

    pub fn len(&self) -> usize {
        self.scenarios.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scenarios.is_empty()
    }
}

/// One package to evaluate in a batch
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioCase {
    pub label: String,
    pub direction: Direction,
    pub input: CompensationInput,
}

/// Settings shared across a batch of conversions and projections
///
/// # Example
/// ```ignore
/// let runner = ScenarioRunner::from_csv()?;
/// let results = runner.run_batch(&cases)?;
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScenarioRunner {
    settings: Settings,
}

impl ScenarioRunner {
    /// Create runner with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Create runner by loading settings from the default CSV file
    pub fn from_csv() -> crate::assumptions::loader::LoadResult<Self> {
        Ok(Self {
            settings: Settings::from_csv()?,
        })
    }

    pub fn with_settings(settings: Settings) -> Self {
        Self { settings }
    }

    /// Convert a single case
    pub fn run(&self, case: &ScenarioCase) -> CompResult<ConversionResult> {
        convert(case.direction, &case.input, &self.settings.rates(case.direction))
    }

    /// Convert every case in parallel; results keep input order and the
    /// first failing case (by position) is reported
    pub fn run_batch(&self, cases: &[ScenarioCase]) -> CompResult<Vec<ConversionResult>> {
        let results: Vec<CompResult<ConversionResult>> = cases.par_iter().map(|case| self.run(case)).collect();
        results.into_iter().collect()
    }

    /// Project a single case with the runner's growth and horizon
    pub fn project(&self, case: &ScenarioCase) -> CompResult<ProjectionResult> {
        let engine = ProjectionEngine::new(self.settings.rates(case.direction), self.settings.growth);
        engine.project(case.direction, &case.input, self.settings.projection_years)
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assumptions::RateConfig;

    fn case(label: &str, direction: Direction, base: f64) -> ScenarioCase {
        ScenarioCase {
            label: label.to_string(),
            direction,
            input: CompensationInput::new(base, 20_000.0, 30_000.0),
        }
    }

    #[test]
    fn test_book_ids_and_clear() {
        let mut book = ScenarioBook::new();
        let input = CompensationInput::new(100_000.0, 20_000.0, 30_000.0);
        let result = convert(Direction::SeattleIsSource, &input, &RateConfig::default()).unwrap();

        assert_eq!(book.save(&input, &result).id, 1);
        let second = book.save(&input, &result);
        assert_eq!(second.id, 2);
        assert_eq!(second.source_total, 150_000.0);
        assert_eq!(second.target_locale, Locale::Madrid);

        book.clear();
        assert!(book.is_empty());
        assert_eq!(book.save(&input, &result).id, 1);
    }

    #[test]
    fn test_run_batch_keeps_order() {
        let runner = ScenarioRunner::new();
        let cases: Vec<_> = (1..=20)
            .map(|i| case(&format!("c{}", i), Direction::SeattleIsSource, i as f64 * 10_000.0))
            .collect();

        let results = runner.run_batch(&cases).unwrap();
        assert_eq!(results.len(), 20);
        for (case, result) in cases.iter().zip(&results) {
            assert_eq!(result.source_base, case.input.base_salary);
        }
        // Higher base salary should convert to a higher target total
        assert!(results[19].target_total > results[0].target_total);
    }

    #[test]
    fn test_run_batch_reports_first_invalid_case() {
        let runner = ScenarioRunner::new();
        let cases = vec![
            case("ok", Direction::SeattleIsSource, 1.0),
            case("bad-base", Direction::MadridIsSource, -1.0),
            ScenarioCase {
                label: "bad-rsus".to_string(),
                direction: Direction::SeattleIsSource,
                input: CompensationInput::new(1.0, 1.0, -5.0),
            },
        ];

        let err = runner.run_batch(&cases).unwrap_err();
        assert_eq!(err.field(), "base_salary");
    }

    #[test]
    fn test_runner_uses_locale_tax_rates() {
        let runner = ScenarioRunner::new();
        let result = runner.run(&case("m", Direction::MadridIsSource, 100_000.0)).unwrap();
        assert_eq!(result.source_tax_rate, 0.24);
        assert_eq!(result.target_tax_rate, 0.30);

        let projection = runner.project(&case("m", Direction::MadridIsSource, 100_000.0)).unwrap();
        assert_eq!(projection.target.len(), runner.settings().projection_years as usize + 1);
    }
}
