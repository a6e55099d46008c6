//! Elementary percentage arithmetic.
//!
//! Five independent operations. The two ratio operations
//! ([`what_percent`] and [`percent_change`]) refuse a zero denominator
//! with an explicit error instead of returning Infinity or NaN.

use calcsuite_core::error::{CalcError, CalcResult};

/// `pct` percent of `value`.
#[must_use]
pub fn percent_of(pct: f64, value: f64) -> f64 {
    pct * value / 100.0
}

/// What percent of `whole` is `part`.
///
/// # Errors
///
/// Returns `CalcError::UndefinedRatio` when `whole` is zero.
pub fn what_percent(part: f64, whole: f64) -> CalcResult<f64> {
    if whole == 0.0 {
        return Err(CalcError::undefined_ratio("percent of a zero whole"));
    }
    Ok(part / whole * 100.0)
}

/// `value` increased by `pct` percent.
#[must_use]
pub fn increase_by(value: f64, pct: f64) -> f64 {
    value + value * pct / 100.0
}

/// `value` decreased by `pct` percent.
#[must_use]
pub fn decrease_by(value: f64, pct: f64) -> f64 {
    value - value * pct / 100.0
}

/// Relative change from `old_value` to `new_value`, in percent.
///
/// # Errors
///
/// Returns `CalcError::UndefinedRatio` when `old_value` is zero.
pub fn percent_change(old_value: f64, new_value: f64) -> CalcResult<f64> {
    if old_value == 0.0 {
        return Err(CalcError::undefined_ratio("change from a zero base"));
    }
    Ok((new_value - old_value) / old_value * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_percent_of() {
        assert_relative_eq!(percent_of(25.0, 200.0), 50.0);
        assert_relative_eq!(percent_of(0.0, 200.0), 0.0);
    }

    #[test]
    fn test_what_percent() {
        assert_relative_eq!(what_percent(25.0, 200.0).unwrap(), 12.5);
        assert!(what_percent(25.0, 0.0).is_err());
    }

    #[test]
    fn test_increase_and_decrease() {
        assert_relative_eq!(increase_by(100.0, 10.0), 110.0);
        assert_relative_eq!(decrease_by(100.0, 10.0), 90.0);
        // Decreasing by more than 100% goes negative; that is the
        // caller's business.
        assert_relative_eq!(decrease_by(100.0, 150.0), -50.0);
    }

    #[test]
    fn test_percent_change() {
        assert_relative_eq!(percent_change(100.0, 150.0).unwrap(), 50.0);
        assert_relative_eq!(percent_change(100.0, 50.0).unwrap(), -50.0);
        assert!(percent_change(0.0, 50.0).is_err());
    }

    #[test]
    fn test_ratio_errors_are_undefined_ratio() {
        let err = what_percent(1.0, 0.0).unwrap_err();
        assert!(matches!(err, CalcError::UndefinedRatio { .. }));
        let err = percent_change(0.0, 1.0).unwrap_err();
        assert!(matches!(err, CalcError::UndefinedRatio { .. }));
    }
}
