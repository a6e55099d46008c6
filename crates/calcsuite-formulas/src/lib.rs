//! # Calcsuite Formulas
//!
//! The pure calculation engine behind the Calcsuite pages: one module
//! per calculator, each a closed-form evaluation over a typed input
//! record.
//!
//! Every function here is deterministic, synchronous, and total over its
//! validated domain:
//!
//! - out-of-domain inputs return [`CalcError::Domain`](calcsuite_core::CalcError)
//!   instead of NaN,
//! - zero-denominator ratios return an explicit
//!   [`CalcError::UndefinedRatio`](calcsuite_core::CalcError) instead of
//!   Infinity,
//! - no clocks, randomness, or I/O — the pregnancy module takes "today"
//!   as an argument.
//!
//! ## Example
//!
//! ```rust
//! use calcsuite_formulas::sip::{self, SipInput};
//!
//! let result = sip::project(&SipInput {
//!     monthly_investment: 5000.0,
//!     annual_return_pct: 0.0,
//!     years: 10,
//! })
//! .unwrap();
//! assert_eq!(result.future_value, 600_000.0); // no compounding at 0%
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::suboptimal_flops)]
#![allow(clippy::float_cmp)]
#![allow(clippy::unreadable_literal)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::doc_markdown)]

pub mod bmi;
pub mod body;
pub mod calorie;
pub mod compound;
pub mod discount;
pub mod gst;
pub mod mortgage;
pub mod paycheck;
pub mod percentage;
pub mod pregnancy;
pub mod sip;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::bmi::{BmiCategory, BmiResult};
    pub use crate::body::{BodyMeasurements, Gender};
    pub use crate::calorie::{ActivityLevel, CalorieInput, CalorieResult};
    pub use crate::compound::{CompoundInput, CompoundResult, CompoundingFrequency};
    pub use crate::discount::{DiscountInput, DiscountResult};
    pub use crate::gst::{GstInput, GstResult, GstTreatment};
    pub use crate::mortgage::{MortgageInput, MortgageResult};
    pub use crate::paycheck::{PaycheckInput, PaycheckResult, TaxRegime};
    pub use crate::pregnancy::{DueDateMethod, Milestone, Trimester};
    pub use crate::sip::{SipInput, SipResult};
}
