//! # Calcsuite Widgets
//!
//! Headless interaction logic for the calculator pages. The only
//! stateful widget in the suite is the searchable currency combobox,
//! modeled here as an explicit state machine so a host UI of any kind
//! can drive it with events and render from its state.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::uninlined_format_args)]

pub mod currency_select;

pub use currency_select::{CurrencySelect, Key, SelectState};
