//! Indian income tax and take-home pay, FY 2024-25 slabs.
//!
//! The new regime taxes gross salary directly; the old regime first
//! subtracts claimed deductions plus the mandatory standard deduction.
//! Slab tax is computed from a base-plus-marginal table, then the 4%
//! health & education cess is added on top.

use calcsuite_core::error::{CalcError, CalcResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Mandatory standard deduction under the old regime, in rupees.
pub const STANDARD_DEDUCTION: f64 = 50_000.0;

/// Health & education cess applied on the slab tax.
pub const CESS_RATE: f64 = 0.04;

/// Income tax regime choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TaxRegime {
    /// FY 2024-25 new regime: lower rates, no deductions.
    #[default]
    New,
    /// Old regime: higher rates, deductions allowed.
    Old,
}

impl fmt::Display for TaxRegime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TaxRegime::New => "New Regime",
            TaxRegime::Old => "Old Regime",
        };
        write!(f, "{name}")
    }
}

/// One progressive tax slab: `base_tax` owed at `floor`, plus
/// `marginal_rate` on income above it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TaxSlab {
    /// Lower bound of the slab (exclusive).
    pub floor: f64,
    /// Tax accumulated by the slabs below.
    pub base_tax: f64,
    /// Marginal rate applied above the floor.
    pub marginal_rate: f64,
}

/// New regime slabs, highest floor first.
pub const NEW_REGIME_SLABS: &[TaxSlab] = &[
    TaxSlab { floor: 1_500_000.0, base_tax: 140_000.0, marginal_rate: 0.30 },
    TaxSlab { floor: 1_200_000.0, base_tax: 80_000.0, marginal_rate: 0.20 },
    TaxSlab { floor: 1_000_000.0, base_tax: 50_000.0, marginal_rate: 0.15 },
    TaxSlab { floor: 700_000.0, base_tax: 20_000.0, marginal_rate: 0.10 },
    TaxSlab { floor: 300_000.0, base_tax: 0.0, marginal_rate: 0.05 },
];

/// Old regime slabs, highest floor first.
pub const OLD_REGIME_SLABS: &[TaxSlab] = &[
    TaxSlab { floor: 1_000_000.0, base_tax: 112_500.0, marginal_rate: 0.30 },
    TaxSlab { floor: 500_000.0, base_tax: 12_500.0, marginal_rate: 0.20 },
    TaxSlab { floor: 250_000.0, base_tax: 0.0, marginal_rate: 0.05 },
];

impl TaxRegime {
    /// Returns the regime's slab table, highest floor first.
    #[must_use]
    pub fn slabs(&self) -> &'static [TaxSlab] {
        match self {
            TaxRegime::New => NEW_REGIME_SLABS,
            TaxRegime::Old => OLD_REGIME_SLABS,
        }
    }

    /// Slab tax on a taxable income, before cess. Income at or below the
    /// lowest floor is tax free.
    #[must_use]
    pub fn slab_tax(&self, taxable_income: f64) -> f64 {
        self.slabs()
            .iter()
            .find(|slab| taxable_income > slab.floor)
            .map_or(0.0, |slab| {
                slab.base_tax + (taxable_income - slab.floor) * slab.marginal_rate
            })
    }
}

/// Inputs for a take-home pay calculation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PaycheckInput {
    /// Annual gross salary in rupees.
    pub gross_salary: f64,
    /// Chosen tax regime.
    pub regime: TaxRegime,
    /// Claimed deductions (80C, 80D, ...). Only the old regime uses them.
    pub deductions: f64,
}

impl PaycheckInput {
    fn validate(&self) -> CalcResult<()> {
        if !self.gross_salary.is_finite() || self.gross_salary <= 0.0 {
            return Err(CalcError::domain("gross salary must be positive"));
        }
        if !self.deductions.is_finite() || self.deductions < 0.0 {
            return Err(CalcError::domain("deductions must not be negative"));
        }
        Ok(())
    }
}

/// Take-home pay summary, tax figures rounded to whole rupees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PaycheckResult {
    /// Annual gross salary, echoed.
    pub gross_salary: f64,
    /// Income the slabs were applied to.
    pub taxable_income: f64,
    /// Total tax including cess.
    pub tax: f64,
    /// Annual salary after tax.
    pub take_home: f64,
    /// Monthly salary after tax.
    pub monthly_take_home: f64,
}

/// Computes annual and monthly take-home pay under a tax regime.
pub fn take_home(input: &PaycheckInput) -> CalcResult<PaycheckResult> {
    input.validate()?;

    let taxable_income = match input.regime {
        TaxRegime::New => input.gross_salary,
        TaxRegime::Old => (input.gross_salary - input.deductions - STANDARD_DEDUCTION).max(0.0),
    };

    let tax = input.regime.slab_tax(taxable_income) * (1.0 + CESS_RATE);
    let take_home = input.gross_salary - tax;

    Ok(PaycheckResult {
        gross_salary: input.gross_salary,
        taxable_income,
        tax: tax.round(),
        take_home: take_home.round(),
        monthly_take_home: (take_home / 12.0).round(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_regime_exempt_threshold() {
        assert_eq!(TaxRegime::New.slab_tax(300_000.0), 0.0);
        assert_eq!(TaxRegime::New.slab_tax(299_999.0), 0.0);
    }

    #[test]
    fn test_new_regime_bracket_boundary() {
        // Exactly at the 10 lakh boundary: 20,000 + 300,000 × 10%.
        assert_eq!(TaxRegime::New.slab_tax(1_000_000.0), 50_000.0);
        let result = take_home(&PaycheckInput {
            gross_salary: 1_000_000.0,
            regime: TaxRegime::New,
            deductions: 0.0,
        })
        .unwrap();
        assert_eq!(result.tax, 52_000.0); // 50,000 × 1.04
    }

    #[test]
    fn test_default_page_inputs() {
        // 12 lakh under the new regime.
        let result = take_home(&PaycheckInput {
            gross_salary: 1_200_000.0,
            regime: TaxRegime::New,
            deductions: 50_000.0,
        })
        .unwrap();
        assert_eq!(result.taxable_income, 1_200_000.0); // deductions ignored
        assert_eq!(result.tax, 83_200.0); // 80,000 × 1.04
        assert_eq!(result.take_home, 1_116_800.0);
        assert_eq!(result.monthly_take_home, 93_067.0);
    }

    #[test]
    fn test_old_regime_subtracts_deductions() {
        let result = take_home(&PaycheckInput {
            gross_salary: 1_200_000.0,
            regime: TaxRegime::Old,
            deductions: 150_000.0,
        })
        .unwrap();
        // 1,200,000 − 150,000 − 50,000 = 1,000,000 taxable.
        assert_eq!(result.taxable_income, 1_000_000.0);
        assert_eq!(result.tax, (112_500.0_f64 * 1.04).round());
    }

    #[test]
    fn test_old_regime_taxable_income_floors_at_zero() {
        let result = take_home(&PaycheckInput {
            gross_salary: 200_000.0,
            regime: TaxRegime::Old,
            deductions: 300_000.0,
        })
        .unwrap();
        assert_eq!(result.taxable_income, 0.0);
        assert_eq!(result.tax, 0.0);
        assert_eq!(result.take_home, 200_000.0);
    }

    #[test]
    fn test_top_slab() {
        // 20 lakh new regime: 140,000 + 500,000 × 30% = 290,000.
        assert_eq!(TaxRegime::New.slab_tax(2_000_000.0), 290_000.0);
    }
}
