//! One-period conversion of a compensation package between locales

mod input;
mod result;
mod engine;

pub use input::CompensationInput;
pub use result::{ComponentAmounts, ConversionResult, MonthlyBreakdown, MONTHS_PER_YEAR};
pub use engine::convert;
