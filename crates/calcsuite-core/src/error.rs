//! Error types for the Calcsuite library.
//!
//! Every error here is local and recoverable: a calculator page simply
//! declines to render a result until its inputs are valid again.

use thiserror::Error;

/// A specialized Result type for Calcsuite operations.
pub type CalcResult<T> = Result<T, CalcError>;

/// The main error type for Calcsuite operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalcError {
    /// An input is outside the formula's domain (negative weight,
    /// zero years, and so on).
    #[error("Out-of-domain input: {reason}")]
    Domain {
        /// Description of the violated constraint.
        reason: String,
    },

    /// A ratio with a zero denominator. Signaled explicitly instead of
    /// letting Infinity or NaN reach the caller.
    #[error("Undefined ratio: {reason}")]
    UndefinedRatio {
        /// Description of the undefined quantity.
        reason: String,
    },

    /// Error in date calculations or invalid date.
    #[error("Invalid date: {message}")]
    InvalidDate {
        /// Description of the date error.
        message: String,
    },

    /// Currency code not present in the registry.
    #[error("Unknown currency code: {code}")]
    UnknownCurrency {
        /// The code that was looked up.
        code: String,
    },
}

impl CalcError {
    /// Creates an out-of-domain input error.
    #[must_use]
    pub fn domain(reason: impl Into<String>) -> Self {
        Self::Domain {
            reason: reason.into(),
        }
    }

    /// Creates an undefined-ratio error.
    #[must_use]
    pub fn undefined_ratio(reason: impl Into<String>) -> Self {
        Self::UndefinedRatio {
            reason: reason.into(),
        }
    }

    /// Creates an invalid date error.
    #[must_use]
    pub fn invalid_date(message: impl Into<String>) -> Self {
        Self::InvalidDate {
            message: message.into(),
        }
    }

    /// Creates an unknown currency error.
    #[must_use]
    pub fn unknown_currency(code: impl Into<String>) -> Self {
        Self::UnknownCurrency { code: code.into() }
    }
}
