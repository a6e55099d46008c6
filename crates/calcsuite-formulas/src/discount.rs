//! Discounted price.

use calcsuite_core::error::{CalcError, CalcResult};
use serde::{Deserialize, Serialize};

/// Quick-pick discount percentages offered by the page.
pub const DISCOUNT_PRESETS: &[f64] = &[10.0, 15.0, 20.0, 25.0, 30.0, 40.0, 50.0, 75.0];

/// Inputs for a discount calculation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DiscountInput {
    /// Sticker price before the discount.
    pub original_price: f64,
    /// Discount in percent.
    pub discount_pct: f64,
}

impl DiscountInput {
    fn validate(&self) -> CalcResult<()> {
        if !self.original_price.is_finite() || self.original_price <= 0.0 {
            return Err(CalcError::domain("price must be positive"));
        }
        if !self.discount_pct.is_finite() || self.discount_pct < 0.0 {
            return Err(CalcError::domain("discount must not be negative"));
        }
        Ok(())
    }
}

/// Discount outcome, amounts rounded to cents.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DiscountResult {
    /// Amount taken off the price.
    pub discount_amount: f64,
    /// Price after the discount.
    pub final_price: f64,
    /// The discount percentage, echoed for display.
    pub savings_pct: f64,
}

/// Applies a percentage discount to a price.
pub fn apply(input: &DiscountInput) -> CalcResult<DiscountResult> {
    input.validate()?;

    let discount_amount = input.original_price * input.discount_pct / 100.0;
    let final_price = input.original_price - discount_amount;

    Ok(DiscountResult {
        discount_amount: (discount_amount * 100.0).round() / 100.0,
        final_price: (final_price * 100.0).round() / 100.0,
        savings_pct: input.discount_pct,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_page_inputs() {
        let result = apply(&DiscountInput {
            original_price: 100.0,
            discount_pct: 20.0,
        })
        .unwrap();
        assert_eq!(result.discount_amount, 20.0);
        assert_eq!(result.final_price, 80.0);
        assert_eq!(result.savings_pct, 20.0);
    }

    #[test]
    fn test_rounds_to_cents() {
        let result = apply(&DiscountInput {
            original_price: 49.99,
            discount_pct: 33.0,
        })
        .unwrap();
        assert_eq!(result.discount_amount, 16.50); // 16.4967
        assert_eq!(result.final_price, 33.49); // 33.4933
    }

    #[test]
    fn test_full_discount_is_free() {
        let result = apply(&DiscountInput {
            original_price: 10.0,
            discount_pct: 100.0,
        })
        .unwrap();
        assert_eq!(result.final_price, 0.0);
    }

    #[test]
    fn test_rejects_negative_discount() {
        assert!(apply(&DiscountInput {
            original_price: 10.0,
            discount_pct: -5.0,
        })
        .is_err());
    }

    #[test]
    fn test_presets() {
        assert_eq!(DISCOUNT_PRESETS.len(), 8);
        assert!(DISCOUNT_PRESETS.contains(&75.0));
    }
}
