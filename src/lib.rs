//! Compensation Converter - Seattle (USD) / Madrid (EUR) package comparison
//!
//! This library provides:
//! - One-year conversion of base salary, bonus, and RSUs between locales,
//!   applying exchange rate, effective tax rates, and cost-of-living adjustment
//! - Multi-year projection with compounding growth and rate drift
//! - Saved scenario bookkeeping and batch evaluation
//! - CSV-based settings loading

pub mod error;
pub mod locale;
pub mod assumptions;
pub mod conversion;
pub mod projection;
pub mod scenario;

// Re-export commonly used types
pub use error::{CompError, CompResult, YearInputs};
pub use locale::{format_currency, Currency, Direction, Locale};
pub use assumptions::{GrowthConfig, LocaleTaxRates, RateConfig, Settings};
pub use conversion::{convert, CompensationInput, ConversionResult, MonthlyBreakdown};
pub use projection::{project, ProjectionEngine, ProjectionPoint, ProjectionResult, ProjectionSeries};
pub use scenario::{Scenario, ScenarioBook, ScenarioCase, ScenarioRunner};
