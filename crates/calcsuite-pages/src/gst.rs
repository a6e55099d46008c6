//! GST page controller.

use calcsuite_core::format::{self, DigitGrouping};
use calcsuite_formulas::gst::{self, GstInput, GstResult, GstSlab, GstTreatment, GST_SLABS};

use crate::range::ParamRange;

/// State holder for the GST calculator page.
#[derive(Debug)]
pub struct GstPage {
    input: GstInput,
    result: Option<GstResult>,
}

impl GstPage {
    /// Slider range for the amount.
    pub const AMOUNT: ParamRange = ParamRange::new(100.0, 1_000_000.0, 100.0);

    /// Creates the page with its defaults: 10,000 at the 18% slab,
    /// tax-exclusive.
    #[must_use]
    pub fn new() -> Self {
        let mut page = Self {
            input: GstInput {
                amount: 10_000.0,
                rate_pct: 18.0,
                treatment: GstTreatment::Exclusive,
            },
            result: None,
        };
        page.recompute();
        page
    }

    /// The slab presets the page offers.
    #[must_use]
    pub fn slabs(&self) -> &'static [GstSlab] {
        GST_SLABS
    }

    /// Current inputs.
    #[must_use]
    pub fn input(&self) -> &GstInput {
        &self.input
    }

    /// Sets the amount and recomputes.
    pub fn set_amount(&mut self, value: f64) {
        self.input.amount = value;
        self.recompute();
    }

    /// Sets the GST rate and recomputes.
    pub fn set_rate_pct(&mut self, value: f64) {
        self.input.rate_pct = value;
        self.recompute();
    }

    /// Switches between exclusive and inclusive treatment and
    /// recomputes.
    pub fn set_treatment(&mut self, treatment: GstTreatment) {
        self.input.treatment = treatment;
        self.recompute();
    }

    /// The current breakdown, absent while inputs are invalid.
    #[must_use]
    pub fn result(&self) -> Option<&GstResult> {
        self.result.as_ref()
    }

    /// Formats an amount with Indian grouping and two decimals, the way
    /// the page displays rupee amounts.
    #[must_use]
    pub fn format_amount(&self, value: f64) -> String {
        format::format_grouped(value, 2, DigitGrouping::Indian)
    }

    fn recompute(&mut self) {
        self.result = match gst::breakdown(&self.input) {
            Ok(result) => Some(result),
            Err(err) => {
                log::debug!("gst page: no result ({err})");
                None
            }
        };
    }
}
