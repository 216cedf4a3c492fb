//! Tax, exchange, and cost-of-living rates for a single conversion

use serde::{Deserialize, Serialize};

use crate::error::{CompError, CompResult};
use crate::locale::{Direction, Locale};

/// Default Seattle effective tax rate
pub const DEFAULT_SEATTLE_TAX_RATE: f64 = 0.30;

/// Default Madrid effective tax rate (Beckham Law flat regime)
pub const DEFAULT_MADRID_TAX_RATE: f64 = 0.24;

/// Default exchange rate, 1 EUR = 1.09 USD (six-month average)
pub const DEFAULT_EXCHANGE_RATE: f64 = 1.09;

/// Default Madrid cost level as a fraction of Seattle's
pub const DEFAULT_COST_OF_LIVING_FACTOR: f64 = 0.60;

/// Effective tax rates anchored to each locale
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LocaleTaxRates {
    pub seattle: f64,
    pub madrid: f64,
}

impl LocaleTaxRates {
    pub fn rate_for(&self, locale: Locale) -> f64 {
        match locale {
            Locale::Seattle => self.seattle,
            Locale::Madrid => self.madrid,
        }
    }
}

impl Default for LocaleTaxRates {
    fn default() -> Self {
        Self {
            seattle: DEFAULT_SEATTLE_TAX_RATE,
            madrid: DEFAULT_MADRID_TAX_RATE,
        }
    }
}

/// Rates consumed by one conversion call
///
/// Tax rates are per role (source/target). The exchange rate and the
/// cost-of-living factor keep their locale-anchored meaning whichever
/// locale is the source.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RateConfig {
    /// Effective tax rate in the source locale, in [0, 1)
    pub source_tax_rate: f64,
    /// Effective tax rate in the target locale, in [0, 1)
    pub target_tax_rate: f64,
    /// 1 EUR = `exchange_rate` USD
    pub exchange_rate: f64,
    /// Madrid cost level as a fraction of Seattle's
    pub cost_of_living_factor: f64,
}

impl RateConfig {
    /// Resolve role-based tax rates from locale-anchored ones
    pub fn for_direction(
        direction: Direction,
        taxes: &LocaleTaxRates,
        exchange_rate: f64,
        cost_of_living_factor: f64,
    ) -> Self {
        Self {
            source_tax_rate: taxes.rate_for(direction.source()),
            target_tax_rate: taxes.rate_for(direction.target()),
            exchange_rate,
            cost_of_living_factor,
        }
    }

    /// Rates for the reverse conversion: tax rates trade places, the
    /// locale-anchored factors stay as they are
    pub fn swapped(&self) -> Self {
        Self {
            source_tax_rate: self.target_tax_rate,
            target_tax_rate: self.source_tax_rate,
            ..*self
        }
    }

    /// Same rates with a different exchange rate and cost-of-living factor
    pub fn with_factors(&self, exchange_rate: f64, cost_of_living_factor: f64) -> Self {
        Self {
            exchange_rate,
            cost_of_living_factor,
            ..*self
        }
    }

    /// Check every field, in declaration order
    pub fn validate(&self) -> CompResult<()> {
        check_tax_rate("source_tax_rate", self.source_tax_rate)?;
        check_tax_rate("target_tax_rate", self.target_tax_rate)?;
        check_positive("exchange_rate", self.exchange_rate)?;
        check_positive("cost_of_living_factor", self.cost_of_living_factor)?;
        Ok(())
    }
}

impl Default for RateConfig {
    fn default() -> Self {
        Self::for_direction(
            Direction::SeattleIsSource,
            &LocaleTaxRates::default(),
            DEFAULT_EXCHANGE_RATE,
            DEFAULT_COST_OF_LIVING_FACTOR,
        )
    }
}

fn check_tax_rate(field: &'static str, rate: f64) -> CompResult<()> {
    if rate.is_finite() && (0.0..1.0).contains(&rate) {
        Ok(())
    } else {
        Err(CompError::invalid(field, rate))
    }
}

fn check_positive(field: &'static str, value: f64) -> CompResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(CompError::invalid(field, value))
    }
}

/// Amounts must be finite and non-negative
pub(crate) fn check_amount(field: &'static str, amount: f64) -> CompResult<()> {
    if amount.is_finite() && amount >= 0.0 {
        Ok(())
    } else {
        Err(CompError::invalid(field, amount))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_rates() {
        let rates = RateConfig::default();
        assert_eq!(rates.source_tax_rate, 0.30);
        assert_eq!(rates.target_tax_rate, 0.24);
        assert_eq!(rates.exchange_rate, 1.09);
        assert_eq!(rates.cost_of_living_factor, 0.60);
        assert!(rates.validate().is_ok());
    }

    #[test]
    fn test_for_direction_resolves_roles() {
        let taxes = LocaleTaxRates { seattle: 0.35, madrid: 0.20 };
        let rates = RateConfig::for_direction(Direction::MadridIsSource, &taxes, 1.1, 0.7);

        assert_eq!(rates.source_tax_rate, 0.20);
        assert_eq!(rates.target_tax_rate, 0.35);
        assert_eq!(rates.swapped(), RateConfig::for_direction(Direction::SeattleIsSource, &taxes, 1.1, 0.7));
    }

    #[test]
    fn test_tax_rate_of_one_rejected() {
        let rates = RateConfig { target_tax_rate: 1.0, ..Default::default() };
        let err = rates.validate().unwrap_err();
        assert_eq!(err.field(), "target_tax_rate");
        assert_eq!(err.value(), 1.0);
    }

    #[test]
    fn test_first_failing_field_reported() {
        let rates = RateConfig {
            source_tax_rate: -0.1,
            exchange_rate: 0.0,
            ..Default::default()
        };
        assert_eq!(rates.validate().unwrap_err().field(), "source_tax_rate");
    }

    #[test]
    fn test_non_positive_factors_rejected() {
        let zero_fx = RateConfig { exchange_rate: 0.0, ..Default::default() };
        assert_eq!(zero_fx.validate().unwrap_err().field(), "exchange_rate");

        let nan_col = RateConfig { cost_of_living_factor: f64::NAN, ..Default::default() };
        assert_eq!(nan_col.validate().unwrap_err().field(), "cost_of_living_factor");
    }

    #[test]
    fn test_check_amount() {
        assert!(check_amount("rsus", 0.0).is_ok());
        assert!(check_amount("rsus", -0.01).is_err());
        assert!(check_amount("rsus", f64::INFINITY).is_err());
    }
}
