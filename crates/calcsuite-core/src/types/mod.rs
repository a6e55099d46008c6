//! Domain types for calculator inputs and reference data.
//!
//! - [`Currency`]: ISO 4217 currency record (code, name, symbol)
//! - [`Date`]: Calendar date for due-date arithmetic
//! - [`UnitSystem`]: Metric/imperial measurement system

mod currency;
mod date;
mod unit;

pub use currency::Currency;
pub use date::Date;
pub use unit::{UnitSystem, IN_TO_CM, INCHES_PER_FOOT, LB_TO_KG};
