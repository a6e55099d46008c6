//! Paycheck page controller.

use calcsuite_core::format::{self, DigitGrouping};
use calcsuite_formulas::paycheck::{self, PaycheckInput, PaycheckResult, TaxRegime};

use crate::range::ParamRange;

/// State holder for the take-home pay calculator page.
#[derive(Debug)]
pub struct PaycheckPage {
    input: PaycheckInput,
    result: Option<PaycheckResult>,
}

impl PaycheckPage {
    /// Slider range for the annual gross salary.
    pub const GROSS_SALARY: ParamRange = ParamRange::new(300_000.0, 5_000_000.0, 50_000.0);
    /// Slider range for old-regime deductions.
    pub const DEDUCTIONS: ParamRange = ParamRange::new(0.0, 200_000.0, 10_000.0);

    /// Creates the page with its defaults: 12 lakh gross under the new
    /// regime, 50,000 of (currently unused) deductions.
    #[must_use]
    pub fn new() -> Self {
        let mut page = Self {
            input: PaycheckInput {
                gross_salary: 1_200_000.0,
                regime: TaxRegime::New,
                deductions: 50_000.0,
            },
            result: None,
        };
        page.recompute();
        page
    }

    /// Current inputs.
    #[must_use]
    pub fn input(&self) -> &PaycheckInput {
        &self.input
    }

    /// Sets the gross salary and recomputes.
    pub fn set_gross_salary(&mut self, value: f64) {
        self.input.gross_salary = value;
        self.recompute();
    }

    /// Switches regime and recomputes. Deductions are remembered even
    /// while the new regime ignores them.
    pub fn set_regime(&mut self, regime: TaxRegime) {
        self.input.regime = regime;
        self.recompute();
    }

    /// Sets old-regime deductions and recomputes.
    pub fn set_deductions(&mut self, value: f64) {
        self.input.deductions = value;
        self.recompute();
    }

    /// The current take-home summary, absent while inputs are invalid.
    #[must_use]
    pub fn result(&self) -> Option<&PaycheckResult> {
        self.result.as_ref()
    }

    /// Share of gross salary kept after tax, in [0, 1], for the page's
    /// split bar.
    #[must_use]
    pub fn take_home_fraction(&self) -> Option<f64> {
        self.result
            .map(|r| (r.take_home / r.gross_salary).clamp(0.0, 1.0))
    }

    /// Formats a rupee amount with Indian grouping, whole rupees.
    #[must_use]
    pub fn format_amount(&self, value: f64) -> String {
        format::format_grouped(value, 0, DigitGrouping::Indian)
    }

    fn recompute(&mut self) {
        self.result = match paycheck::take_home(&self.input) {
            Ok(result) => Some(result),
            Err(err) => {
                log::debug!("paycheck page: no result ({err})");
                None
            }
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_produce_a_result() {
        let page = PaycheckPage::new();
        let result = page.result().unwrap();
        assert_eq!(result.tax, 83_200.0);
        assert_eq!(result.monthly_take_home, 93_067.0);
    }

    #[test]
    fn test_regime_switch_applies_deductions() {
        let mut page = PaycheckPage::new();
        page.set_regime(TaxRegime::Old);
        // 1,200,000 − 50,000 − 50,000 standard = 1,100,000 taxable.
        assert_eq!(page.result().unwrap().taxable_income, 1_100_000.0);
        page.set_regime(TaxRegime::New);
        assert_eq!(page.result().unwrap().taxable_income, 1_200_000.0);
    }

    #[test]
    fn test_take_home_fraction() {
        let page = PaycheckPage::new();
        let fraction = page.take_home_fraction().unwrap();
        assert!((fraction - 1_116_800.0 / 1_200_000.0).abs() < 1e-9);
    }

    #[test]
    fn test_formats_with_indian_grouping() {
        let page = PaycheckPage::new();
        assert_eq!(page.format_amount(1_116_800.0), "11,16,800");
    }
}
