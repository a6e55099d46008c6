//! Systematic Investment Plan (SIP) future value.
//!
//! Future value of an annuity-due over `n = years × 12` months at a
//! constant monthly rate `r`:
//!
//! ```text
//! FV = P × ((1 + r)^n − 1) / r × (1 + r)
//! ```
//!
//! At `r = 0` the compounding term collapses and `FV = P × n`.

use calcsuite_core::error::{CalcError, CalcResult};
use serde::{Deserialize, Serialize};

/// Inputs for a SIP projection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SipInput {
    /// Fixed amount invested every month.
    pub monthly_investment: f64,
    /// Expected annual return, in percent.
    pub annual_return_pct: f64,
    /// Investment horizon in whole years.
    pub years: u32,
}

impl SipInput {
    fn validate(&self) -> CalcResult<()> {
        if !self.monthly_investment.is_finite() || self.monthly_investment <= 0.0 {
            return Err(CalcError::domain("monthly investment must be positive"));
        }
        if !self.annual_return_pct.is_finite() || self.annual_return_pct < 0.0 {
            return Err(CalcError::domain("expected return must not be negative"));
        }
        if self.years == 0 {
            return Err(CalcError::domain("time period must be at least one year"));
        }
        Ok(())
    }
}

/// Outcome of a SIP projection, rounded to whole currency units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SipResult {
    /// Total amount paid in over the horizon.
    pub invested: f64,
    /// Estimated gains: future value minus invested.
    pub returns: f64,
    /// Estimated value at the end of the horizon.
    pub future_value: f64,
}

/// Projects the future value of a monthly SIP.
pub fn project(input: &SipInput) -> CalcResult<SipResult> {
    input.validate()?;

    let monthly_rate = input.annual_return_pct / 12.0 / 100.0;
    let months = f64::from(input.years * 12);

    let future_value = if monthly_rate == 0.0 {
        input.monthly_investment * months
    } else {
        input.monthly_investment
            * (((1.0 + monthly_rate).powf(months) - 1.0) / monthly_rate)
            * (1.0 + monthly_rate)
    };

    let invested = input.monthly_investment * months;

    Ok(SipResult {
        invested: invested.round(),
        returns: (future_value - invested).round(),
        future_value: future_value.round(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_rate_has_no_compounding() {
        let result = project(&SipInput {
            monthly_investment: 5000.0,
            annual_return_pct: 0.0,
            years: 10,
        })
        .unwrap();
        assert_eq!(result.future_value, 5000.0 * 120.0);
        assert_eq!(result.returns, 0.0);
    }

    #[test]
    fn test_default_page_inputs() {
        // 5000/month at 12% for 10 years.
        let result = project(&SipInput {
            monthly_investment: 5000.0,
            annual_return_pct: 12.0,
            years: 10,
        })
        .unwrap();
        assert_eq!(result.invested, 600_000.0);
        assert_eq!(result.future_value, 1_161_695.0);
        assert_eq!(result.returns, 561_695.0);
    }

    #[test]
    fn test_invested_plus_returns_is_future_value() {
        let result = project(&SipInput {
            monthly_investment: 1234.0,
            annual_return_pct: 9.5,
            years: 7,
        })
        .unwrap();
        // Rounding happens per field, so allow one unit of slack.
        assert!((result.invested + result.returns - result.future_value).abs() <= 1.0);
    }

    #[test]
    fn test_rejects_out_of_domain() {
        assert!(project(&SipInput {
            monthly_investment: 0.0,
            annual_return_pct: 12.0,
            years: 10
        })
        .is_err());
        assert!(project(&SipInput {
            monthly_investment: 5000.0,
            annual_return_pct: -1.0,
            years: 10
        })
        .is_err());
        assert!(project(&SipInput {
            monthly_investment: 5000.0,
            annual_return_pct: 12.0,
            years: 0
        })
        .is_err());
    }
}
