//! Compound interest page controller.

use calcsuite_core::format::{self, DigitGrouping};
use calcsuite_core::registry;
use calcsuite_core::types::Currency;
use calcsuite_formulas::compound::{self, CompoundInput, CompoundResult, CompoundingFrequency};

use crate::range::ParamRange;

/// State holder for the compound interest calculator page.
#[derive(Debug)]
pub struct CompoundInterestPage {
    currency: Currency,
    input: CompoundInput,
    result: Option<CompoundResult>,
}

impl CompoundInterestPage {
    /// Slider range for the principal.
    pub const PRINCIPAL: ParamRange = ParamRange::new(1000.0, 1_000_000.0, 1000.0);
    /// Slider range for the annual rate.
    pub const ANNUAL_RATE_PCT: ParamRange = ParamRange::new(1.0, 20.0, 0.25);
    /// Slider range for the horizon in years.
    pub const YEARS: ParamRange = ParamRange::new(1.0, 30.0, 1.0);

    /// Creates the page with its defaults: 10,000 at 8% compounded
    /// monthly for 10 years. This page searches the full ISO table,
    /// so its initial currency is the table's first entry.
    #[must_use]
    pub fn new() -> Self {
        let mut page = Self {
            currency: registry::full()[0],
            input: CompoundInput {
                principal: 10_000.0,
                annual_rate_pct: 8.0,
                years: 10,
                frequency: CompoundingFrequency::Monthly,
            },
            result: None,
        };
        page.recompute();
        page
    }

    /// The currency list this page's search widget runs over.
    #[must_use]
    pub fn currencies(&self) -> &'static [Currency] {
        registry::full()
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
    pub fn input(&self) -> &CompoundInput {
        &self.input
    }

    /// Sets the principal and recomputes.
    pub fn set_principal(&mut self, value: f64) {
        self.input.principal = value;
        self.recompute();
    }

    /// Sets the annual rate and recomputes.
    pub fn set_annual_rate_pct(&mut self, value: f64) {
        self.input.annual_rate_pct = value;
        self.recompute();
    }

    /// Sets the horizon and recomputes.
    pub fn set_years(&mut self, years: u32) {
        self.input.years = years;
        self.recompute();
    }

    /// Sets the compounding frequency and recomputes.
    pub fn set_frequency(&mut self, frequency: CompoundingFrequency) {
        self.input.frequency = frequency;
        self.recompute();
    }

    /// The current projection, absent while inputs are invalid.
    #[must_use]
    pub fn result(&self) -> Option<&CompoundResult> {
        self.result.as_ref()
    }

    /// Formats an amount with the selected currency symbol and Western
    /// grouping, whole units.
    #[must_use]
    pub fn format_amount(&self, value: f64) -> String {
        format::format_with_symbol(&self.currency, value, 0, DigitGrouping::Western)
    }

    fn recompute(&mut self) {
        self.result = match compound::future_value(&self.input) {
            Ok(result) => Some(result),
            Err(err) => {
                log::debug!("compound page: no result ({err})");
                None
            }
        };
    }
}
