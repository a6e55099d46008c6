//! Locale-aware number formatting for result display.
//!
//! Two digit-grouping conventions cover the calculator pages: Western
//! thousands (1,234,567) and the Indian lakh/crore system (12,34,567).
//! Formatting is presentation only and never feeds back into the
//! arithmetic.

use serde::{Deserialize, Serialize};

use crate::types::Currency;

/// Digit-grouping convention for large amounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DigitGrouping {
    /// Groups of three: 1,234,567.
    #[default]
    Western,
    /// Lakh/crore grouping: 12,34,567.
    Indian,
}

/// Formats a value with the given number of decimal places and digit
/// grouping. The value is rounded, not truncated.
#[must_use]
pub fn format_grouped(value: f64, decimals: usize, grouping: DigitGrouping) -> String {
    let fixed = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((int, frac)) => (int, Some(frac)),
        None => (fixed.as_str(), None),
    };

    let mut out = String::new();
    let rounds_to_zero = fixed.bytes().all(|b| b == b'0' || b == b'.');
    if value.is_sign_negative() && !rounds_to_zero {
        out.push('-');
    }
    out.push_str(&group_integer(int_part, grouping));
    if let Some(frac) = frac_part {
        out.push('.');
        out.push_str(frac);
    }
    out
}

/// Formats a currency amount as `"<symbol> <grouped value>"`,
/// e.g. `"₹ 1,00,000"`.
#[must_use]
pub fn format_with_symbol(
    currency: &Currency,
    value: f64,
    decimals: usize,
    grouping: DigitGrouping,
) -> String {
    format!(
        "{} {}",
        currency.symbol(),
        format_grouped(value, decimals, grouping)
    )
}

fn group_integer(digits: &str, grouping: DigitGrouping) -> String {
    let chars: Vec<char> = digits.chars().collect();
    let mut groups: Vec<String> = Vec::new();
    let mut end = chars.len();
    // The rightmost group always takes three digits; under Indian
    // grouping every further group takes two.
    let mut size = 3;
    while end > 0 {
        let start = end.saturating_sub(size);
        groups.push(chars[start..end].iter().collect());
        end = start;
        size = match grouping {
            DigitGrouping::Western => 3,
            DigitGrouping::Indian => 2,
        };
    }
    groups.reverse();
    groups.join(",")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry;

    #[test]
    fn test_western_grouping() {
        assert_eq!(format_grouped(1_234_567.0, 0, DigitGrouping::Western), "1,234,567");
        assert_eq!(format_grouped(999.0, 0, DigitGrouping::Western), "999");
        assert_eq!(format_grouped(1_000.0, 0, DigitGrouping::Western), "1,000");
    }

    #[test]
    fn test_indian_grouping() {
        assert_eq!(format_grouped(100_000.0, 0, DigitGrouping::Indian), "1,00,000");
        assert_eq!(format_grouped(12_345_678.0, 0, DigitGrouping::Indian), "1,23,45,678");
        assert_eq!(format_grouped(999.0, 0, DigitGrouping::Indian), "999");
        assert_eq!(format_grouped(1_234.0, 0, DigitGrouping::Indian), "1,234");
    }

    #[test]
    fn test_decimals_are_rounded() {
        assert_eq!(format_grouped(1_234.567, 2, DigitGrouping::Western), "1,234.57");
        assert_eq!(format_grouped(1_234.6, 0, DigitGrouping::Western), "1,235");
    }

    #[test]
    fn test_negative_values() {
        assert_eq!(format_grouped(-100_000.0, 0, DigitGrouping::Indian), "-1,00,000");
        // A negative that rounds to zero drops the sign.
        assert_eq!(format_grouped(-0.004, 2, DigitGrouping::Western), "0.00");
    }

    #[test]
    fn test_format_with_symbol() {
        let inr = registry::lookup("INR").unwrap();
        assert_eq!(
            format_with_symbol(&inr, 100_000.0, 0, DigitGrouping::Indian),
            "₹ 1,00,000"
        );
        let usd = registry::lookup("USD").unwrap();
        assert_eq!(
            format_with_symbol(&usd, 2_499.5, 2, DigitGrouping::Western),
            "$ 2,499.50"
        );
    }
}
