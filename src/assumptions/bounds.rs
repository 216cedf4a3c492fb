//! Input ranges offered by interactive front ends
//!
//! The engines never clamp; `Settings::clamped` applies these for callers that opt in.

use std::ops::RangeInclusive;

pub const TAX_RATE: RangeInclusive<f64> = 0.10..=0.50;
pub const EXCHANGE_RATE: RangeInclusive<f64> = 0.5..=2.0;
pub const COST_OF_LIVING_FACTOR: RangeInclusive<f64> = 0.30..=1.00;
pub const SALARY_GROWTH: RangeInclusive<f64> = 0.0..=0.15;
pub const RSU_GROWTH: RangeInclusive<f64> = 0.0..=0.20;
pub const EXCHANGE_RATE_DRIFT: RangeInclusive<f64> = -0.05..=0.05;
pub const COST_OF_LIVING_DRIFT: RangeInclusive<f64> = -0.02..=0.02;
pub const PROJECTION_YEARS: RangeInclusive<u32> = 1..=10;

/// Clamp a value into a presentation range
pub fn clamp(value: f64, range: &RangeInclusive<f64>) -> f64 {
    value.clamp(*range.start(), *range.end())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp() {
        assert_eq!(clamp(0.9, &TAX_RATE), 0.50);
        assert_eq!(clamp(0.01, &COST_OF_LIVING_FACTOR), 0.30);
        assert_eq!(clamp(1.09, &EXCHANGE_RATE), 1.09);
    }
}
