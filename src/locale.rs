//! Locales, currencies, and conversion direction
//!
//! The exchange rate is always quoted as "1 EUR = x USD" and the cost-of-living
//! factor as "Madrid cost level as a fraction of Seattle's". Both conventions
//! are anchored to the locales themselves, so whether a factor multiplies or
//! divides depends on which locale is the source, never on a generic
//! forward/backward flag.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Currency used by a locale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Currency {
    Usd,
    Eur,
}

impl Currency {
    /// ISO 4217 code
    pub fn code(&self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Eur => "EUR",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::Usd => "$",
            Currency::Eur => "€",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// One of the two fixed locales
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Locale {
    /// USD-anchored locale
    Seattle,
    /// EUR-anchored locale
    Madrid,
}

impl Locale {
    pub fn currency(&self) -> Currency {
        match self {
            Locale::Seattle => Currency::Usd,
            Locale::Madrid => Currency::Eur,
        }
    }

    pub fn other(&self) -> Locale {
        match self {
            Locale::Seattle => Locale::Madrid,
            Locale::Madrid => Locale::Seattle,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Locale::Seattle => "Seattle",
            Locale::Madrid => "Madrid",
        }
    }

    /// Parse a locale name, case-insensitively
    pub fn parse(name: &str) -> Option<Locale> {
        match name.trim().to_ascii_lowercase().as_str() {
            "seattle" => Some(Locale::Seattle),
            "madrid" => Some(Locale::Madrid),
            _ => None,
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Whether a factor is applied by multiplying or dividing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Op {
    Multiply,
    Divide,
}

impl Op {
    #[inline]
    pub fn apply(self, amount: f64, factor: f64) -> f64 {
        match self {
            Op::Multiply => amount * factor,
            Op::Divide => amount / factor,
        }
    }

    pub fn inverse(self) -> Op {
        match self {
            Op::Multiply => Op::Divide,
            Op::Divide => Op::Multiply,
        }
    }
}

/// Resolved operations for one conversion direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DirectionOps {
    /// How the exchange rate is applied to source-currency amounts
    pub currency: Op,
    /// How the cost-of-living factor is applied to the converted net
    pub cost_of_living: Op,
}

/// Which of the two fixed locales is the source of a conversion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    SeattleIsSource,
    MadridIsSource,
}

impl Direction {
    /// USD -> EUR divides by the rate; landing in Madrid scales by the factor.
    const SEATTLE_TO_MADRID: DirectionOps = DirectionOps {
        currency: Op::Divide,
        cost_of_living: Op::Multiply,
    };

    /// EUR -> USD multiplies by the rate; landing in Seattle divides by the factor.
    const MADRID_TO_SEATTLE: DirectionOps = DirectionOps {
        currency: Op::Multiply,
        cost_of_living: Op::Divide,
    };

    pub fn from_source(source: Locale) -> Self {
        match source {
            Locale::Seattle => Direction::SeattleIsSource,
            Locale::Madrid => Direction::MadridIsSource,
        }
    }

    /// Locale A is Seattle
    pub fn from_source_is_a(source_is_a: bool) -> Self {
        if source_is_a {
            Direction::SeattleIsSource
        } else {
            Direction::MadridIsSource
        }
    }

    pub fn source(&self) -> Locale {
        match self {
            Direction::SeattleIsSource => Locale::Seattle,
            Direction::MadridIsSource => Locale::Madrid,
        }
    }

    pub fn target(&self) -> Locale {
        self.source().other()
    }

    pub fn swapped(&self) -> Self {
        Direction::from_source(self.target())
    }

    pub fn ops(&self) -> DirectionOps {
        match self {
            Direction::SeattleIsSource => Self::SEATTLE_TO_MADRID,
            Direction::MadridIsSource => Self::MADRID_TO_SEATTLE,
        }
    }
}

/// Format an amount as e.g. `$1,234.56` or `-€1,000.00`
pub fn format_currency(amount: f64, currency: Currency) -> String {
    let fixed = format!("{:.2}", amount.abs());
    let sign = if amount < 0.0 && fixed != "0.00" { "-" } else { "" };
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    format!("{}{}{}.{}", sign, currency.symbol(), grouped, cents)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locale_currencies_are_fixed() {
        assert_eq!(Locale::Seattle.currency(), Currency::Usd);
        assert_eq!(Locale::Madrid.currency(), Currency::Eur);
        assert_eq!(Locale::Seattle.other(), Locale::Madrid);
    }

    #[test]
    fn test_direction_ops_are_inverse() {
        let forward = Direction::SeattleIsSource.ops();
        let backward = Direction::MadridIsSource.ops();

        assert_eq!(forward.currency, Op::Divide);
        assert_eq!(forward.cost_of_living, Op::Multiply);
        assert_eq!(backward.currency, forward.currency.inverse());
        assert_eq!(backward.cost_of_living, forward.cost_of_living.inverse());
    }

    #[test]
    fn test_direction_roles() {
        let dir = Direction::from_source_is_a(false);
        assert_eq!(dir, Direction::MadridIsSource);
        assert_eq!(dir.source(), Locale::Madrid);
        assert_eq!(dir.target(), Locale::Seattle);
        assert_eq!(dir.swapped(), Direction::SeattleIsSource);
    }

    #[test]
    fn test_parse_locale() {
        assert_eq!(Locale::parse(" Seattle "), Some(Locale::Seattle));
        assert_eq!(Locale::parse("MADRID"), Some(Locale::Madrid));
        assert_eq!(Locale::parse("Lisbon"), None);
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(1234567.891, Currency::Usd), "$1,234,567.89");
        assert_eq!(format_currency(999.5, Currency::Eur), "€999.50");
        assert_eq!(format_currency(0.0, Currency::Usd), "$0.00");
        assert_eq!(format_currency(-1000.0, Currency::Eur), "-€1,000.00");
    }
}
