//! Gross compensation components

use serde::{Deserialize, Serialize};

use crate::assumptions::check_amount;
use crate::error::CompResult;

/// Annual gross amounts in the source currency
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CompensationInput {
    pub base_salary: f64,
    pub bonus: f64,
    /// Annual value of vesting equity grants
    pub rsus: f64,
}

impl CompensationInput {
    pub fn new(base_salary: f64, bonus: f64, rsus: f64) -> Self {
        Self { base_salary, bonus, rsus }
    }

    pub fn base_plus_bonus(&self) -> f64 {
        self.base_salary + self.bonus
    }

    pub fn total(&self) -> f64 {
        self.base_salary + self.bonus + self.rsus
    }

    /// Every amount must be finite and non-negative
    pub fn validate(&self) -> CompResult<()> {
        check_amount("base_salary", self.base_salary)?;
        check_amount("bonus", self.bonus)?;
        check_amount("rsus", self.rsus)?;
        Ok(())
    }
}
