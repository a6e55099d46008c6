//! Discount page controller.

use calcsuite_core::format::{self, DigitGrouping};
use calcsuite_core::registry;
use calcsuite_core::types::Currency;
use calcsuite_formulas::discount::{self, DiscountInput, DiscountResult, DISCOUNT_PRESETS};

use crate::range::ParamRange;

/// State holder for the discount calculator page.
#[derive(Debug)]
pub struct DiscountPage {
    currency: Currency,
    input: DiscountInput,
    result: Option<DiscountResult>,
}

impl DiscountPage {
    /// Slider range for the original price.
    pub const ORIGINAL_PRICE: ParamRange = ParamRange::new(1.0, 10_000.0, 1.0);
    /// Slider range for the discount percentage.
    pub const DISCOUNT_PCT: ParamRange = ParamRange::new(1.0, 90.0, 1.0);

    /// Creates the page with its defaults: 100 at 20% off. Like the
    /// compound page, the search widget's list leads the currency.
    #[must_use]
    pub fn new() -> Self {
        let mut page = Self {
            currency: registry::full()[0],
            input: DiscountInput {
                original_price: 100.0,
                discount_pct: 20.0,
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

    /// The quick-pick discount percentages.
    #[must_use]
    pub fn presets(&self) -> &'static [f64] {
        DISCOUNT_PRESETS
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
    pub fn input(&self) -> &DiscountInput {
        &self.input
    }

    /// Sets the original price and recomputes.
    pub fn set_original_price(&mut self, value: f64) {
        self.input.original_price = value;
        self.recompute();
    }

    /// Sets the discount percentage and recomputes.
    pub fn set_discount_pct(&mut self, value: f64) {
        self.input.discount_pct = value;
        self.recompute();
    }

    /// The current discount, absent while inputs are invalid.
    #[must_use]
    pub fn result(&self) -> Option<&DiscountResult> {
        self.result.as_ref()
    }

    /// Formats an amount with the selected currency symbol, two
    /// decimals, Western grouping.
    #[must_use]
    pub fn format_amount(&self, value: f64) -> String {
        format::format_with_symbol(&self.currency, value, 2, DigitGrouping::Western)
    }

    fn recompute(&mut self) {
        self.result = match discount::apply(&self.input) {
            Ok(result) => Some(result),
            Err(err) => {
                log::debug!("discount page: no result ({err})");
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
        let page = DiscountPage::new();
        assert_eq!(page.result().unwrap().final_price, 80.0);
    }

    #[test]
    fn test_preset_selection() {
        let mut page = DiscountPage::new();
        let preset = page.presets()[7];
        page.set_discount_pct(preset);
        assert_eq!(page.result().unwrap().savings_pct, 75.0);
        assert_eq!(page.result().unwrap().final_price, 25.0);
    }

    #[test]
    fn test_formats_cents() {
        let page = DiscountPage::new();
        assert_eq!(page.format_amount(1234.5), "د.إ 1,234.50");
    }
}
