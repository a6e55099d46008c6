//! Compound interest future value.
//!
//! ```text
//! A = P × (1 + r/n)^(n × t)
//! ```
//!
//! where `n` is the number of compounding periods per year.

use calcsuite_core::error::{CalcError, CalcResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// How often interest is compounded within a year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CompoundingFrequency {
    /// Once per year.
    Annual,
    /// Twice per year.
    SemiAnnual,
    /// Four times per year.
    Quarterly,
    /// Twelve times per year.
    #[default]
    Monthly,
    /// Every day (365 periods).
    Daily,
}

impl CompoundingFrequency {
    /// Returns the number of compounding periods per year.
    #[must_use]
    pub fn periods_per_year(&self) -> u32 {
        match self {
            CompoundingFrequency::Annual => 1,
            CompoundingFrequency::SemiAnnual => 2,
            CompoundingFrequency::Quarterly => 4,
            CompoundingFrequency::Monthly => 12,
            CompoundingFrequency::Daily => 365,
        }
    }
}

impl fmt::Display for CompoundingFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CompoundingFrequency::Annual => "Annually",
            CompoundingFrequency::SemiAnnual => "Semi-Annually",
            CompoundingFrequency::Quarterly => "Quarterly",
            CompoundingFrequency::Monthly => "Monthly",
            CompoundingFrequency::Daily => "Daily",
        };
        write!(f, "{name}")
    }
}

/// Inputs for a compound interest projection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CompoundInput {
    /// Initial principal.
    pub principal: f64,
    /// Annual interest rate, in percent.
    pub annual_rate_pct: f64,
    /// Horizon in whole years.
    pub years: u32,
    /// Compounding frequency.
    pub frequency: CompoundingFrequency,
}

impl CompoundInput {
    fn validate(&self) -> CalcResult<()> {
        if !self.principal.is_finite() || self.principal <= 0.0 {
            return Err(CalcError::domain("principal must be positive"));
        }
        if !self.annual_rate_pct.is_finite() || self.annual_rate_pct < 0.0 {
            return Err(CalcError::domain("interest rate must not be negative"));
        }
        if self.years == 0 {
            return Err(CalcError::domain("time period must be at least one year"));
        }
        Ok(())
    }
}

/// Compound interest outcome, rounded to whole currency units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CompoundResult {
    /// Value of the investment at the end of the horizon.
    pub amount: f64,
    /// Interest earned: amount minus principal.
    pub interest: f64,
}

/// Computes the compounded future value of a lump sum.
pub fn future_value(input: &CompoundInput) -> CalcResult<CompoundResult> {
    input.validate()?;

    let rate = input.annual_rate_pct / 100.0;
    let n = f64::from(input.frequency.periods_per_year());
    let amount = input.principal * (1.0 + rate / n).powf(n * f64::from(input.years));

    Ok(CompoundResult {
        amount: amount.round(),
        interest: (amount - input.principal).round(),
    })
}
