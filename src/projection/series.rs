//! Projection output structures

use serde::{Deserialize, Serialize};

use crate::locale::{Currency, Direction, Locale};

/// Cumulative differences inside this band (in percent) count as equivalent
pub const EQUIVALENCE_BAND_PCT: f64 = 5.0;

/// One year of one locale's projection
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionPoint {
    pub year: u32,
    pub base: f64,
    pub bonus: f64,
    pub rsus: f64,
    pub total: f64,
    /// Running sum of `total` over years 0..=year
    pub cumulative: f64,
    pub currency: Currency,
    /// Exchange rate in effect (target side only)
    pub exchange_rate: Option<f64>,
    /// Cost-of-living factor in effect (target side only)
    pub cost_of_living_factor: Option<f64>,
}

/// Year-ordered points for one locale
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionSeries {
    pub locale: Locale,
    pub currency: Currency,
    pub points: Vec<ProjectionPoint>,
}

impl ProjectionSeries {
    pub fn new(locale: Locale) -> Self {
        Self {
            locale,
            currency: locale.currency(),
            points: Vec::new(),
        }
    }

    /// Append the next year; years must arrive in ascending order from 0
    pub fn push_year(&mut self, year: u32, base: f64, bonus: f64, rsus: f64, total: f64, factors: Option<(f64, f64)>) {
        debug_assert_eq!(year as usize, self.points.len(), "projection years must be appended in order");

        let cumulative = self.final_cumulative() + total;
        self.points.push(ProjectionPoint {
            year,
            base,
            bonus,
            rsus,
            total,
            cumulative,
            currency: self.currency,
            exchange_rate: factors.map(|(fx, _)| fx),
            cost_of_living_factor: factors.map(|(_, col)| col),
        });
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Cumulative total through the last year, 0 when empty
    pub fn final_cumulative(&self) -> f64 {
        self.points.last().map(|p| p.cumulative).unwrap_or(0.0)
    }
}

/// Percentage by which `target` exceeds `source`, when both are positive
pub fn percent_difference(source: f64, target: f64) -> Option<f64> {
    if source > 0.0 && target > 0.0 {
        Some((target / source - 1.0) * 100.0)
    } else {
        None
    }
}

/// Target-versus-source differences for one year
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YearComparison {
    pub year: u32,
    pub annual_diff_pct: Option<f64>,
    pub cumulative_diff_pct: Option<f64>,
}

/// Overall reading of the final cumulative difference
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Verdict {
    /// Target locale ahead by this many percent
    TargetAhead(f64),
    /// Target locale behind by this many percent
    SourceAhead(f64),
    RoughlyEquivalent,
}

/// Complete projection: both locales over years 0..=num_years
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionResult {
    pub direction: Direction,
    pub num_years: u32,
    pub source: ProjectionSeries,
    pub target: ProjectionSeries,
}

impl ProjectionResult {
    pub fn new(direction: Direction, num_years: u32) -> Self {
        Self {
            direction,
            num_years,
            source: ProjectionSeries::new(direction.source()),
            target: ProjectionSeries::new(direction.target()),
        }
    }

    pub fn comparison(&self) -> Vec<YearComparison> {
        self.source
            .points
            .iter()
            .zip(&self.target.points)
            .map(|(s, t)| YearComparison {
                year: s.year,
                annual_diff_pct: percent_difference(s.total, t.total),
                cumulative_diff_pct: percent_difference(s.cumulative, t.cumulative),
            })
            .collect()
    }

    /// Final cumulative difference in percent, 0 when it cannot be computed
    pub fn final_cumulative_diff_pct(&self) -> f64 {
        percent_difference(self.source.final_cumulative(), self.target.final_cumulative()).unwrap_or(0.0)
    }

    pub fn verdict(&self) -> Verdict {
        let diff = self.final_cumulative_diff_pct();
        if diff > EQUIVALENCE_BAND_PCT {
            Verdict::TargetAhead(diff)
        } else if diff < -EQUIVALENCE_BAND_PCT {
            Verdict::SourceAhead(-diff)
        } else {
            Verdict::RoughlyEquivalent
        }
    }

    /// Final cumulative totals and verdict, for display and JSON output
    pub fn summary(&self) -> ProjectionSummary {
        ProjectionSummary {
            num_years: self.num_years,
            source_locale: self.source.locale,
            target_locale: self.target.locale,
            source_cumulative: self.source.final_cumulative(),
            target_cumulative: self.target.final_cumulative(),
            final_cumulative_diff_pct: self.final_cumulative_diff_pct(),
            verdict: self.verdict(),
        }
    }
}

/// Summary statistics for a projection
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionSummary {
    pub num_years: u32,
    pub source_locale: Locale,
    pub target_locale: Locale,
    pub source_cumulative: f64,
    pub target_cumulative: f64,
    pub final_cumulative_diff_pct: f64,
    pub verdict: Verdict,
}
