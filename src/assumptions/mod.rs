//! Rates, growth assumptions, and settings loading

mod rates;
mod growth;
pub mod bounds;
pub mod loader;

pub use rates::{
    LocaleTaxRates, RateConfig, DEFAULT_COST_OF_LIVING_FACTOR, DEFAULT_EXCHANGE_RATE,
    DEFAULT_MADRID_TAX_RATE, DEFAULT_SEATTLE_TAX_RATE,
};
pub(crate) use rates::check_amount;
pub use growth::{GrowthConfig, DEFAULT_PROJECTION_YEARS};
pub use loader::LoadedSettings;

use crate::locale::Direction;
use loader::LoadResult;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Container for everything a caller configures besides the compensation itself
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    pub taxes: LocaleTaxRates,
    pub exchange_rate: f64,
    pub cost_of_living_factor: f64,
    pub growth: GrowthConfig,
    pub projection_years: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            taxes: LocaleTaxRates::default(),
            exchange_rate: DEFAULT_EXCHANGE_RATE,
            cost_of_living_factor: DEFAULT_COST_OF_LIVING_FACTOR,
            growth: GrowthConfig::default(),
            projection_years: DEFAULT_PROJECTION_YEARS,
        }
    }
}

impl Settings {
    /// Load settings from the default location (data/settings.csv)
    pub fn from_csv() -> LoadResult<Self> {
        Self::from_csv_path(Path::new(loader::DEFAULT_SETTINGS_PATH))
    }

    /// Load settings from a specific file, layered over the defaults
    pub fn from_csv_path(path: &Path) -> LoadResult<Self> {
        let loaded = LoadedSettings::load_from(path)?;
        Self::from_loaded(&loaded)
    }

    pub fn from_loaded(loaded: &LoadedSettings) -> LoadResult<Self> {
        let defaults = Self::default();
        let growth = GrowthConfig {
            base_growth: loaded.get("base_growth").unwrap_or(defaults.growth.base_growth),
            bonus_growth: loaded.get("bonus_growth").unwrap_or(defaults.growth.bonus_growth),
            rsu_growth: loaded.get("rsu_growth").unwrap_or(defaults.growth.rsu_growth),
            exchange_rate_drift: loaded
                .get("exchange_rate_drift")
                .unwrap_or(defaults.growth.exchange_rate_drift),
            cost_of_living_drift: loaded
                .get("cost_of_living_drift")
                .unwrap_or(defaults.growth.cost_of_living_drift),
        };

        let settings = Self {
            taxes: LocaleTaxRates {
                seattle: loaded.get("seattle_tax_rate").unwrap_or(defaults.taxes.seattle),
                madrid: loaded.get("madrid_tax_rate").unwrap_or(defaults.taxes.madrid),
            },
            exchange_rate: loaded.get("exchange_rate").unwrap_or(defaults.exchange_rate),
            cost_of_living_factor: loaded
                .get("cost_of_living_factor")
                .unwrap_or(defaults.cost_of_living_factor),
            growth,
            projection_years: loaded
                .get_count("projection_years")?
                .unwrap_or(defaults.projection_years),
        };

        settings.rates(Direction::SeattleIsSource).validate()?;
        settings.growth.validate()?;
        Ok(settings)
    }

    /// Copy with every knob pulled into the presentation ranges in `bounds`
    pub fn clamped(&self) -> Self {
        let g = &self.growth;
        Self {
            taxes: LocaleTaxRates {
                seattle: bounds::clamp(self.taxes.seattle, &bounds::TAX_RATE),
                madrid: bounds::clamp(self.taxes.madrid, &bounds::TAX_RATE),
            },
            exchange_rate: bounds::clamp(self.exchange_rate, &bounds::EXCHANGE_RATE),
            cost_of_living_factor: bounds::clamp(self.cost_of_living_factor, &bounds::COST_OF_LIVING_FACTOR),
            growth: GrowthConfig {
                base_growth: bounds::clamp(g.base_growth, &bounds::SALARY_GROWTH),
                bonus_growth: bounds::clamp(g.bonus_growth, &bounds::SALARY_GROWTH),
                rsu_growth: bounds::clamp(g.rsu_growth, &bounds::RSU_GROWTH),
                exchange_rate_drift: bounds::clamp(g.exchange_rate_drift, &bounds::EXCHANGE_RATE_DRIFT),
                cost_of_living_drift: bounds::clamp(g.cost_of_living_drift, &bounds::COST_OF_LIVING_DRIFT),
            },
            projection_years: self
                .projection_years
                .clamp(*bounds::PROJECTION_YEARS.start(), *bounds::PROJECTION_YEARS.end()),
        }
    }

    /// Role-based rates for a conversion in the given direction
    pub fn rates(&self, direction: Direction) -> RateConfig {
        RateConfig::for_direction(direction, &self.taxes, self.exchange_rate, self.cost_of_living_factor)
    }
}
