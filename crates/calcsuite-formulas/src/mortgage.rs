//! Amortized mortgage payment.
//!
//! Standard fixed-rate amortization over `n = years × 12` payments at
//! monthly rate `r` on the financed principal:
//!
//! ```text
//! payment = principal × r(1 + r)^n / ((1 + r)^n − 1)
//! ```
//!
//! A zero rate degenerates to `principal / n`.

use calcsuite_core::error::{CalcError, CalcResult};
use serde::{Deserialize, Serialize};

/// Inputs for a mortgage payment calculation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MortgageInput {
    /// Purchase price of the home.
    pub home_price: f64,
    /// Up-front payment; must not exceed the home price.
    pub down_payment: f64,
    /// Annual interest rate, in percent.
    pub annual_rate_pct: f64,
    /// Loan term in whole years.
    pub years: u32,
}

impl MortgageInput {
    fn validate(&self) -> CalcResult<()> {
        if !self.home_price.is_finite() || self.home_price <= 0.0 {
            return Err(CalcError::domain("home price must be positive"));
        }
        if !self.down_payment.is_finite() || self.down_payment < 0.0 {
            return Err(CalcError::domain("down payment must not be negative"));
        }
        if self.down_payment > self.home_price {
            return Err(CalcError::domain("down payment cannot exceed home price"));
        }
        if !self.annual_rate_pct.is_finite() || self.annual_rate_pct < 0.0 {
            return Err(CalcError::domain("interest rate must not be negative"));
        }
        if self.years == 0 {
            return Err(CalcError::domain("loan term must be at least one year"));
        }
        Ok(())
    }
}

/// Amortization summary. The rounded fields are what the page displays;
/// the identities `total_payment = payment × n` and
/// `total_interest = total_payment − principal` hold before rounding.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MortgageResult {
    /// Financed amount: home price minus down payment.
    pub principal: f64,
    /// Monthly payment, rounded to whole units.
    pub monthly_payment: f64,
    /// Total paid over the life of the loan, rounded.
    pub total_payment: f64,
    /// Total interest paid, rounded.
    pub total_interest: f64,
}

/// Computes the amortized monthly payment and loan totals.
pub fn amortize(input: &MortgageInput) -> CalcResult<MortgageResult> {
    input.validate()?;

    let principal = input.home_price - input.down_payment;
    let monthly_rate = input.annual_rate_pct / 100.0 / 12.0;
    let n = f64::from(input.years * 12);

    let monthly_payment = if monthly_rate == 0.0 {
        principal / n
    } else {
        let growth = (1.0 + monthly_rate).powf(n);
        principal * (monthly_rate * growth) / (growth - 1.0)
    };

    let total_payment = monthly_payment * n;
    let total_interest = total_payment - principal;

    Ok(MortgageResult {
        principal,
        monthly_payment: monthly_payment.round(),
        total_payment: total_payment.round(),
        total_interest: total_interest.round(),
    })
}
