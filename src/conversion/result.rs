//! Conversion output structures

use serde::{Deserialize, Serialize};

use crate::locale::{Currency, Direction, Locale};

pub const MONTHS_PER_YEAR: f64 = 12.0;

/// Amounts per compensation component
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ComponentAmounts {
    pub base: f64,
    pub bonus: f64,
    pub rsus: f64,
    pub total: f64,
}

/// Monthly gross and net figures for one locale
///
/// RSUs are untaxed in this model, so net RSUs equal gross RSUs.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct MonthlyBreakdown {
    pub gross: ComponentAmounts,
    pub net: ComponentAmounts,
}

impl MonthlyBreakdown {
    /// Build from annual gross amounts and the locale's effective tax rate
    pub fn from_annual(base: f64, bonus: f64, rsus: f64, tax_rate: f64) -> Self {
        let keep = 1.0 - tax_rate;

        let gross = ComponentAmounts {
            base: base / MONTHS_PER_YEAR,
            bonus: bonus / MONTHS_PER_YEAR,
            rsus: rsus / MONTHS_PER_YEAR,
            total: (base + bonus + rsus) / MONTHS_PER_YEAR,
        };

        let net_base = base * keep / MONTHS_PER_YEAR;
        let net_bonus = bonus * keep / MONTHS_PER_YEAR;
        let net = ComponentAmounts {
            base: net_base,
            bonus: net_bonus,
            rsus: gross.rsus,
            total: net_base + net_bonus + gross.rsus,
        };

        Self { gross, net }
    }
}

/// Complete result of one conversion
///
/// Built fresh by every call and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionResult {
    pub direction: Direction,
    pub source_locale: Locale,
    pub target_locale: Locale,
    pub source_currency: Currency,
    pub target_currency: Currency,

    // Rates in effect
    pub source_tax_rate: f64,
    pub target_tax_rate: f64,
    pub exchange_rate: f64,
    pub cost_of_living_factor: f64,

    // Source side (echoed)
    pub source_base: f64,
    pub source_bonus: f64,
    pub source_base_plus_bonus: f64,
    pub source_rsus: f64,
    pub source_total: f64,

    // Intermediate steps
    pub source_net: f64,
    pub target_net_before_col: f64,
    pub target_net: f64,

    // Target side
    pub target_base: f64,
    pub target_bonus: f64,
    pub target_gross: f64,
    pub target_rsus: f64,
    pub target_total: f64,

    // Monthly breakdowns
    pub source_monthly: MonthlyBreakdown,
    pub target_monthly: MonthlyBreakdown,
}
