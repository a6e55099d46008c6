//! Currency record with ISO 4217 code, display name, and symbol.

use serde::de::{self, Deserializer, Visitor};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::registry;

/// An ISO 4217 currency.
///
/// Currencies are immutable reference data: every value originates from
/// one of the static tables in [`crate::registry`] and only carries a
/// presentation role (symbol prefixing, digit grouping). The arithmetic
/// of the formula layer is never affected by the chosen currency.
///
/// # Example
///
/// ```rust
/// use calcsuite_core::registry;
///
/// let usd = registry::lookup("USD").unwrap();
/// assert_eq!(usd.code(), "USD");
/// assert_eq!(usd.symbol(), "$");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Currency {
    code: &'static str,
    name: &'static str,
    symbol: &'static str,
}

impl Currency {
    /// Creates a registry entry. Only the registry tables construct
    /// currencies; everything else looks them up by code.
    pub(crate) const fn new(
        code: &'static str,
        name: &'static str,
        symbol: &'static str,
    ) -> Self {
        Self { code, name, symbol }
    }

    /// Returns the ISO 4217 3-letter code.
    #[must_use]
    pub fn code(&self) -> &'static str {
        self.code
    }

    /// Returns the full currency name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the display symbol.
    #[must_use]
    pub fn symbol(&self) -> &'static str {
        self.symbol
    }

    /// Case-insensitive match against code or name, used by the
    /// currency-search widget.
    #[must_use]
    pub fn matches(&self, query: &str) -> bool {
        let q = query.to_lowercase();
        self.code.to_lowercase().contains(&q) || self.name.to_lowercase().contains(&q)
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code)
    }
}

impl Serialize for Currency {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code)
    }
}

struct CurrencyVisitor;

impl Visitor<'_> for CurrencyVisitor {
    type Value = Currency;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an ISO 4217 currency code")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Currency, E> {
        registry::find(v).ok_or_else(|| E::custom(format!("unknown currency code: {v}")))
    }
}

impl<'de> Deserialize<'de> for Currency {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_str(CurrencyVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors() {
        let inr = registry::lookup("INR").unwrap();
        assert_eq!(inr.code(), "INR");
        assert_eq!(inr.name(), "Indian Rupee");
        assert_eq!(inr.symbol(), "₹");
    }

    #[test]
    fn test_display() {
        let eur = registry::lookup("EUR").unwrap();
        assert_eq!(format!("{}", eur), "EUR");
    }

    #[test]
    fn test_matches_is_case_insensitive() {
        let inr = registry::lookup("INR").unwrap();
        assert!(inr.matches("ind"));
        assert!(inr.matches("INR"));
        assert!(inr.matches("rupee"));
        assert!(!inr.matches("yen"));
    }

    #[test]
    fn test_serde_round_trip() {
        let gbp = registry::lookup("GBP").unwrap();
        let json = serde_json::to_string(&gbp).unwrap();
        assert_eq!(json, "\"GBP\"");
        let parsed: Currency = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, gbp);
    }

    #[test]
    fn test_serde_unknown_code_is_rejected() {
        let err = serde_json::from_str::<Currency>("\"ZZZ\"");
        assert!(err.is_err());
    }
}
