//! GST (Goods & Services Tax) breakdown.
//!
//! Exclusive mode adds GST on top of a base amount; inclusive mode
//! carves the GST out of a tax-inclusive total:
//!
//! ```text
//! exclusive: gst = amount × rate / 100,        total = amount + gst
//! inclusive: net = amount × 100 / (100 + rate), gst = amount − net
//! ```
//!
//! For intra-state supplies the GST splits evenly into CGST and SGST.

use calcsuite_core::error::{CalcError, CalcResult};
use serde::{Deserialize, Serialize};

/// Whether the entered amount already includes GST.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum GstTreatment {
    /// The amount is the pre-tax base; GST is added.
    #[default]
    Exclusive,
    /// The amount is the tax-inclusive total; GST is extracted.
    Inclusive,
}

/// A GST slab with its customary description.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GstSlab {
    /// Rate in percent.
    pub rate_pct: f64,
    /// What the slab typically applies to.
    pub label: &'static str,
}

/// The Indian GST slabs offered as presets.
pub const GST_SLABS: &[GstSlab] = &[
    GstSlab { rate_pct: 0.0, label: "Essential goods" },
    GstSlab { rate_pct: 0.25, label: "Precious stones" },
    GstSlab { rate_pct: 3.0, label: "Gold, silver" },
    GstSlab { rate_pct: 5.0, label: "Household necessities" },
    GstSlab { rate_pct: 12.0, label: "Standard goods" },
    GstSlab { rate_pct: 18.0, label: "Most goods & services" },
    GstSlab { rate_pct: 28.0, label: "Luxury items" },
];

/// Inputs for a GST calculation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GstInput {
    /// The entered amount; its meaning depends on `treatment`.
    pub amount: f64,
    /// GST rate in percent.
    pub rate_pct: f64,
    /// Whether `amount` is tax-exclusive or tax-inclusive.
    pub treatment: GstTreatment,
}

impl GstInput {
    fn validate(&self) -> CalcResult<()> {
        if !self.amount.is_finite() || self.amount <= 0.0 {
            return Err(CalcError::domain("amount must be positive"));
        }
        if !self.rate_pct.is_finite() || self.rate_pct < 0.0 {
            return Err(CalcError::domain("GST rate must not be negative"));
        }
        Ok(())
    }
}

/// GST breakdown, rounded to 2 decimal places.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GstResult {
    /// Amount before tax.
    pub net_amount: f64,
    /// GST portion.
    pub gst_amount: f64,
    /// Amount including tax.
    pub total_amount: f64,
    /// Central GST: half the GST for intra-state supplies.
    pub cgst: f64,
    /// State GST: the other half.
    pub sgst: f64,
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Computes the GST breakdown for an amount.
pub fn breakdown(input: &GstInput) -> CalcResult<GstResult> {
    input.validate()?;

    let (net, gst, total) = match input.treatment {
        GstTreatment::Exclusive => {
            let gst = input.amount * input.rate_pct / 100.0;
            (input.amount, gst, input.amount + gst)
        }
        GstTreatment::Inclusive => {
            let net = input.amount * 100.0 / (100.0 + input.rate_pct);
            (net, input.amount - net, input.amount)
        }
    };

    Ok(GstResult {
        net_amount: round2(net),
        gst_amount: round2(gst),
        total_amount: round2(total),
        cgst: round2(gst / 2.0),
        sgst: round2(gst / 2.0),
    })
}
