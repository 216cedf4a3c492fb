//! Conversion arithmetic
//!
//! Steps, for base+bonus:
//! 1. net down with the source tax rate
//! 2. convert currency (direction from the lookup table)
//! 3. adjust for cost of living (direction from the lookup table)
//! 4. gross up with the target tax rate
//!
//! RSUs only go through the currency step and are never taxed.

use log::debug;

use super::input::CompensationInput;
use super::result::{ConversionResult, MonthlyBreakdown};
use crate::assumptions::RateConfig;
use crate::error::{CompError, CompResult};
use crate::locale::Direction;

/// Convert one year of compensation from the direction's source locale to its target
///
/// Fails with `InvalidInput` on the first out-of-domain field; no partial result.
/// Finite inputs large enough to overflow f64 are rejected on the total that overflowed.
pub fn convert(
    direction: Direction,
    input: &CompensationInput,
    rates: &RateConfig,
) -> CompResult<ConversionResult> {
    input.validate()?;
    rates.validate()?;

    let ops = direction.ops();
    let source = direction.source();
    let target = direction.target();

    let base_plus_bonus = input.base_plus_bonus();
    let source_net = base_plus_bonus * (1.0 - rates.source_tax_rate);
    let target_net_before_col = ops.currency.apply(source_net, rates.exchange_rate);
    let target_net = ops
        .cost_of_living
        .apply(target_net_before_col, rates.cost_of_living_factor);
    let target_gross = target_net / (1.0 - rates.target_tax_rate);

    let target_rsus = ops.currency.apply(input.rsus, rates.exchange_rate);

    // Split the grossed-up amount with the source proportions; 0 when there is nothing to split
    let (base_ratio, bonus_ratio) = if base_plus_bonus > 0.0 {
        (input.base_salary / base_plus_bonus, input.bonus / base_plus_bonus)
    } else {
        (0.0, 0.0)
    };
    let target_base = target_gross * base_ratio;
    let target_bonus = target_gross * bonus_ratio;

    let target_total = target_gross + target_rsus;

    let source_total = input.total();
    if !source_total.is_finite() {
        return Err(CompError::invalid("source_total", source_total));
    }
    if !target_total.is_finite() {
        return Err(CompError::invalid("target_total", target_total));
    }

    debug!(
        "convert {} -> {}: source_net={:.2} target_net={:.2} target_total={:.2}",
        source, target, source_net, target_net, target_total
    );

    Ok(ConversionResult {
        direction,
        source_locale: source,
        target_locale: target,
        source_currency: source.currency(),
        target_currency: target.currency(),
        source_tax_rate: rates.source_tax_rate,
        target_tax_rate: rates.target_tax_rate,
        exchange_rate: rates.exchange_rate,
        cost_of_living_factor: rates.cost_of_living_factor,
        source_base: input.base_salary,
        source_bonus: input.bonus,
        source_base_plus_bonus: base_plus_bonus,
        source_rsus: input.rsus,
        source_total,
        source_net,
        target_net_before_col,
        target_net,
        target_base,
        target_bonus,
        target_gross,
        target_rsus,
        target_total,
        source_monthly: MonthlyBreakdown::from_annual(
            input.base_salary,
            input.bonus,
            input.rsus,
            rates.source_tax_rate,
        ),
        target_monthly: MonthlyBreakdown::from_annual(
            target_base,
            target_bonus,
            target_rsus,
            rates.target_tax_rate,
        ),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::{Currency, Locale};
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    fn reference_input() -> CompensationInput {
        CompensationInput::new(100_000.0, 20_000.0, 30_000.0)
    }

    #[test]
    fn test_seattle_to_madrid_reference_case() {
        let result = convert(Direction::SeattleIsSource, &reference_input(), &RateConfig::default()).unwrap();

        assert_eq!(result.target_locale, Locale::Madrid);
        assert_eq!(result.target_currency, Currency::Eur);
        assert_relative_eq!(result.source_net, 84_000.0, max_relative = 1e-12);
        assert_relative_eq!(result.target_net_before_col, 84_000.0 / 1.09, max_relative = 1e-12);
        assert_relative_eq!(result.target_net, 84_000.0 / 1.09 * 0.60, max_relative = 1e-12);
        assert_relative_eq!(result.target_gross, 84_000.0 / 1.09 * 0.60 / 0.76, max_relative = 1e-12);
        assert_relative_eq!(result.target_rsus, 30_000.0 / 1.09, max_relative = 1e-12);
        assert_abs_diff_eq!(result.target_total, 88_363.11, epsilon = 0.01);
    }

    #[test]
    fn test_madrid_to_seattle_multiplies_and_divides() {
        let rates = RateConfig::default().swapped();
        let result = convert(Direction::MadridIsSource, &reference_input(), &rates).unwrap();

        let net = 120_000.0 * (1.0 - 0.24);
        assert_eq!(result.source_currency, Currency::Eur);
        assert_relative_eq!(result.source_net, net, max_relative = 1e-12);
        assert_relative_eq!(result.target_net_before_col, net * 1.09, max_relative = 1e-12);
        assert_relative_eq!(result.target_net, net * 1.09 / 0.60, max_relative = 1e-12);
        assert_relative_eq!(result.target_gross, net * 1.09 / 0.60 / 0.70, max_relative = 1e-12);
        assert_relative_eq!(result.target_rsus, 30_000.0 * 1.09, max_relative = 1e-12);
    }

    #[test]
    fn test_split_uses_source_proportions() {
        let result = convert(Direction::SeattleIsSource, &reference_input(), &RateConfig::default()).unwrap();

        assert_relative_eq!(result.target_base, result.target_gross * 100.0 / 120.0, max_relative = 1e-12);
        assert_relative_eq!(result.target_bonus, result.target_gross * 20.0 / 120.0, max_relative = 1e-12);
        assert_relative_eq!(result.target_base + result.target_bonus, result.target_gross, max_relative = 1e-12);
    }

    #[test]
    fn test_rsus_only_input() {
        let input = CompensationInput::new(0.0, 0.0, 10_900.0);
        let result = convert(Direction::SeattleIsSource, &input, &RateConfig::default()).unwrap();

        assert_eq!(result.target_gross, 0.0);
        assert_eq!(result.target_base, 0.0);
        assert_eq!(result.target_bonus, 0.0);
        assert_relative_eq!(result.target_total, 10_000.0, max_relative = 1e-12);
    }

    #[test]
    fn test_invalid_input_rejected_before_rates() {
        let input = CompensationInput::new(-1.0, 0.0, 0.0);
        let rates = RateConfig { exchange_rate: 0.0, ..Default::default() };
        let err = convert(Direction::SeattleIsSource, &input, &rates).unwrap_err();
        assert_eq!(err.field(), "base_salary");
    }

    #[test]
    fn test_overflowing_totals_rejected() {
        let huge = CompensationInput::new(f64::MAX, f64::MAX, 0.0);
        let err = convert(Direction::SeattleIsSource, &huge, &RateConfig::default()).unwrap_err();
        assert_eq!(err.field(), "source_total");
        assert!(err.value().is_infinite());

        // Source side fits, but Madrid -> Seattle scales it up past f64::MAX
        let input = CompensationInput::new(f64::MAX * 0.9, 0.0, 0.0);
        let err = convert(Direction::MadridIsSource, &input, &RateConfig::default().swapped()).unwrap_err();
        assert_eq!(err.field(), "target_total");
    }

    #[test]
    fn test_monthly_net_rsus_equal_gross() {
        let result = convert(Direction::SeattleIsSource, &reference_input(), &RateConfig::default()).unwrap();

        assert_eq!(result.source_monthly.net.rsus, result.source_monthly.gross.rsus);
        assert_eq!(result.target_monthly.net.rsus, result.target_monthly.gross.rsus);
        assert_relative_eq!(result.source_monthly.net.base, 100_000.0 * 0.70 / 12.0, max_relative = 1e-12);
    }
}
