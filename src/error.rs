//! Error type for conversion and projection
//!
//! There is a single failure mode: an input outside its domain. The error
//! names the field and the value that was rejected, and carries the working
//! values of the projection year when the failure happened mid-projection.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Working values in effect for one projection year
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YearInputs {
    pub year: u32,
    pub base_salary: f64,
    pub bonus: f64,
    pub rsus: f64,
    pub exchange_rate: f64,
    pub cost_of_living_factor: f64,
}

/// Errors raised by the conversion and projection engines
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CompError {
    /// A field was outside its valid domain
    #[error("invalid input: {field} = {value}{}", year_suffix(.year))]
    InvalidInput {
        /// Name of the offending field
        field: &'static str,
        /// The rejected value
        value: f64,
        /// Projection year context, if raised while projecting
        year: Option<Box<YearInputs>>,
    },
}

fn year_suffix(year: &Option<Box<YearInputs>>) -> String {
    match year {
        Some(y) => format!(
            " (projection year {}: base={}, bonus={}, rsus={}, exchange_rate={}, cost_of_living_factor={})",
            y.year, y.base_salary, y.bonus, y.rsus, y.exchange_rate, y.cost_of_living_factor
        ),
        None => String::new(),
    }
}

/// Result alias used throughout the crate
pub type CompResult<T> = Result<T, CompError>;

impl CompError {
    pub fn invalid(field: &'static str, value: f64) -> Self {
        CompError::InvalidInput { field, value, year: None }
    }

    /// Attach the projection year's working values
    pub fn in_year(self, inputs: YearInputs) -> Self {
        match self {
            CompError::InvalidInput { field, value, .. } => CompError::InvalidInput {
                field,
                value,
                year: Some(Box::new(inputs)),
            },
        }
    }

    pub fn field(&self) -> &'static str {
        match self {
            CompError::InvalidInput { field, .. } => field,
        }
    }

    pub fn value(&self) -> f64 {
        match self {
            CompError::InvalidInput { value, .. } => *value,
        }
    }

    /// Projection year context, if any
    pub fn year_inputs(&self) -> Option<&YearInputs> {
        match self {
            CompError::InvalidInput { year, .. } => year.as_deref(),
        }
    }
}
