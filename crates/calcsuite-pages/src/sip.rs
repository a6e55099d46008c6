//! SIP page controller.

use calcsuite_core::format::{self, DigitGrouping};
use calcsuite_core::registry;
use calcsuite_core::types::Currency;
use calcsuite_formulas::sip::{self, SipInput, SipResult};

use crate::range::ParamRange;

/// State holder for the SIP return calculator page.
#[derive(Debug)]
pub struct SipPage {
    currency: Currency,
    input: SipInput,
    result: Option<SipResult>,
}

impl SipPage {
    /// Slider range for the monthly investment.
    pub const MONTHLY_INVESTMENT: ParamRange = ParamRange::new(500.0, 100_000.0, 500.0);
    /// Slider range for the expected annual return.
    pub const ANNUAL_RETURN_PCT: ParamRange = ParamRange::new(1.0, 30.0, 0.5);
    /// Slider range for the time period in years.
    pub const YEARS: ParamRange = ParamRange::new(1.0, 40.0, 1.0);

    /// Creates the page with its default inputs: 5,000/month at 12%
    /// for 10 years, in the quick-pick list's lead currency.
    #[must_use]
    pub fn new() -> Self {
        let mut page = Self {
            currency: registry::sip()[0],
            input: SipInput {
                monthly_investment: 5000.0,
                annual_return_pct: 12.0,
                years: 10,
            },
            result: None,
        };
        page.recompute();
        page
    }

    /// The currencies this page offers as quick-pick buttons.
    #[must_use]
    pub fn currencies(&self) -> &'static [Currency] {
        registry::sip()
    }

    /// The selected currency.
    #[must_use]
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Selects a display currency. Only presentation changes; the
    /// projection itself is unaffected.
    pub fn set_currency(&mut self, currency: Currency) {
        self.currency = currency;
    }

    /// Current inputs.
    #[must_use]
    pub fn input(&self) -> &SipInput {
        &self.input
    }

    /// Sets the monthly investment and recomputes.
    pub fn set_monthly_investment(&mut self, value: f64) {
        self.input.monthly_investment = value;
        self.recompute();
    }

    /// Sets the expected annual return and recomputes.
    pub fn set_annual_return_pct(&mut self, value: f64) {
        self.input.annual_return_pct = value;
        self.recompute();
    }

    /// Sets the horizon in years and recomputes.
    pub fn set_years(&mut self, years: u32) {
        self.input.years = years;
        self.recompute();
    }

    /// The current projection, absent while inputs are invalid.
    #[must_use]
    pub fn result(&self) -> Option<&SipResult> {
        self.result.as_ref()
    }

    /// Formats an amount the way this page displays it: selected
    /// currency symbol with Indian digit grouping, whole units.
    #[must_use]
    pub fn format_amount(&self, value: f64) -> String {
        format::format_with_symbol(&self.currency, value, 0, DigitGrouping::Indian)
    }

    fn recompute(&mut self) {
        self.result = match sip::project(&self.input) {
            Ok(result) => Some(result),
            Err(err) => {
                log::debug!("sip page: no result ({err})");
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
        let page = SipPage::new();
        assert_eq!(page.currency().code(), "INR");
        let result = page.result().unwrap();
        assert_eq!(result.invested, 600_000.0);
        assert_eq!(result.future_value, 1_161_695.0);
    }

    #[test]
    fn test_setters_recompute_synchronously() {
        let mut page = SipPage::new();
        page.set_annual_return_pct(0.0);
        assert_eq!(page.result().unwrap().returns, 0.0);
        page.set_years(20);
        assert_eq!(page.result().unwrap().invested, 5000.0 * 240.0);
    }

    #[test]
    fn test_invalid_input_clears_result() {
        let mut page = SipPage::new();
        page.set_monthly_investment(-1.0);
        assert!(page.result().is_none());
        page.set_monthly_investment(1000.0);
        assert!(page.result().is_some());
    }

    #[test]
    fn test_formats_with_indian_grouping() {
        let page = SipPage::new();
        assert_eq!(page.format_amount(600_000.0), "₹ 6,00,000");
    }
}
