//! # Calcsuite Pages
//!
//! One controller per calculator page. Each holds the page's current
//! input record, recomputes the result synchronously in every setter
//! (no debouncing, no async scheduling), and exposes the result as an
//! `Option`: while inputs are out of domain the page simply has no
//! result to render.
//!
//! Controllers also carry the presentation metadata the original pages
//! declare: slider ranges ([`range::ParamRange`]), default values, the
//! page's currency list, and its digit-grouping convention. Setters do
//! NOT clamp to the slider ranges; the ranges are metadata for slider
//! hosts, and programmatic out-of-range values are allowed (the result
//! just disappears if the formula rejects them).

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::new_without_default)]
#![allow(clippy::float_cmp)]
#![allow(clippy::uninlined_format_args)]

pub mod bmi;
pub mod calorie;
pub mod compound;
pub mod discount;
pub mod gst;
pub mod mortgage;
pub mod paycheck;
pub mod percentage;
pub mod pregnancy;
pub mod range;
pub mod sip;

pub use range::ParamRange;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::bmi::BmiPage;
    pub use crate::calorie::CaloriePage;
    pub use crate::compound::CompoundInterestPage;
    pub use crate::discount::DiscountPage;
    pub use crate::gst::GstPage;
    pub use crate::mortgage::MortgagePage;
    pub use crate::paycheck::PaycheckPage;
    pub use crate::percentage::PercentagePage;
    pub use crate::pregnancy::PregnancyPage;
    pub use crate::range::ParamRange;
    pub use crate::sip::SipPage;
}
