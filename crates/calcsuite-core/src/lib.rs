//! # Calcsuite Core
//!
//! Core types and reference data for the Calcsuite calculator library.
//!
//! This crate provides the foundational building blocks used throughout
//! Calcsuite:
//!
//! - **Types**: Domain-specific types like [`types::Date`],
//!   [`types::Currency`], and [`types::UnitSystem`]
//! - **Registries**: Static ISO 4217 currency tables ([`registry`])
//! - **Formatting**: Locale-aware digit grouping and symbol display
//!   ([`format`])
//! - **Errors**: The shared [`error::CalcError`] taxonomy
//!
//! ## Design Philosophy
//!
//! - **Pure and synchronous**: no I/O, no hidden state, no clocks inside
//!   calculations
//! - **Explicit errors**: out-of-domain inputs are rejected, never turned
//!   into NaN or Infinity
//! - **Read-only reference data**: currency tables are static and shared
//!   freely across pages
//!
//! ## Example
//!
//! ```rust
//! use calcsuite_core::prelude::*;
//!
//! let inr = registry::lookup("inr").unwrap();
//! assert_eq!(inr.symbol(), "₹");
//! assert_eq!(format::format_with_symbol(&inr, 100000.0, 0, DigitGrouping::Indian), "₹ 1,00,000");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::float_cmp)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::doc_markdown)]

pub mod error;
pub mod format;
pub mod registry;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{CalcError, CalcResult};
    pub use crate::format::{self, DigitGrouping};
    pub use crate::registry;
    pub use crate::types::{Currency, Date, UnitSystem};
}

// Re-export commonly used types at crate root
pub use error::{CalcError, CalcResult};
pub use types::{Currency, Date, UnitSystem};
