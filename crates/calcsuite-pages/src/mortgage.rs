//! Mortgage page controller.

use calcsuite_core::format::{self, DigitGrouping};
use calcsuite_core::registry;
use calcsuite_core::types::Currency;
use calcsuite_formulas::mortgage::{self, MortgageInput, MortgageResult};

use crate::range::ParamRange;

/// State holder for the mortgage calculator page.
#[derive(Debug)]
pub struct MortgagePage {
    currency: Currency,
    input: MortgageInput,
    result: Option<MortgageResult>,
}

impl MortgagePage {
    /// Slider range for the home price.
    pub const HOME_PRICE: ParamRange = ParamRange::new(50_000.0, 2_000_000.0, 10_000.0);
    /// Slider range for the annual interest rate.
    pub const ANNUAL_RATE_PCT: ParamRange = ParamRange::new(1.0, 15.0, 0.25);
    /// Slider range for the loan term in years.
    pub const YEARS: ParamRange = ParamRange::new(5.0, 30.0, 5.0);

    /// Creates the page with its defaults: a 300k home with 60k down
    /// at 6.5% over 30 years, priced in USD.
    #[must_use]
    pub fn new() -> Self {
        let mut page = Self {
            currency: registry::mortgage()[0],
            input: MortgageInput {
                home_price: 300_000.0,
                down_payment: 60_000.0,
                annual_rate_pct: 6.5,
                years: 30,
            },
            result: None,
        };
        page.recompute();
        page
    }

    /// The currencies this page offers as quick-pick buttons.
    #[must_use]
    pub fn currencies(&self) -> &'static [Currency] {
        registry::mortgage()
    }

    /// The selected currency.
    #[must_use]
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Selects a display currency.
    pub fn set_currency(&mut self, currency: Currency) {
        self.currency = currency;
    }

    /// Current inputs.
    #[must_use]
    pub fn input(&self) -> &MortgageInput {
        &self.input
    }

    /// The down-payment slider range. Its upper end tracks the current
    /// home price: the page caps the slider at half the price.
    #[must_use]
    pub fn down_payment_range(&self) -> ParamRange {
        ParamRange::new(0.0, self.input.home_price * 0.5, 5000.0)
    }

    /// Sets the home price and recomputes.
    pub fn set_home_price(&mut self, value: f64) {
        self.input.home_price = value;
        self.recompute();
    }

    /// Sets the down payment and recomputes.
    pub fn set_down_payment(&mut self, value: f64) {
        self.input.down_payment = value;
        self.recompute();
    }

    /// Sets the annual rate and recomputes.
    pub fn set_annual_rate_pct(&mut self, value: f64) {
        self.input.annual_rate_pct = value;
        self.recompute();
    }

    /// Sets the loan term and recomputes.
    pub fn set_years(&mut self, years: u32) {
        self.input.years = years;
        self.recompute();
    }

    /// The current amortization, absent while inputs are invalid.
    #[must_use]
    pub fn result(&self) -> Option<&MortgageResult> {
        self.result.as_ref()
    }

    /// Formats an amount with the selected currency symbol and Western
    /// grouping, whole units.
    #[must_use]
    pub fn format_amount(&self, value: f64) -> String {
        format::format_with_symbol(&self.currency, value, 0, DigitGrouping::Western)
    }

    fn recompute(&mut self) {
        self.result = match mortgage::amortize(&self.input) {
            Ok(result) => Some(result),
            Err(err) => {
                log::debug!("mortgage page: no result ({err})");
                None
            }
        };
    }
}
