//! Measurement unit system shared by the body calculators.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kilograms per pound.
pub const LB_TO_KG: f64 = 0.453592;

/// Centimetres per inch.
pub const IN_TO_CM: f64 = 2.54;

/// Inches per foot.
pub const INCHES_PER_FOOT: f64 = 12.0;

/// Measurement system for weight and height inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum UnitSystem {
    /// Kilograms and centimetres.
    #[default]
    Metric,
    /// Pounds, feet, and inches.
    Imperial,
}

impl UnitSystem {
    /// Returns true for the metric system.
    #[must_use]
    pub fn is_metric(&self) -> bool {
        matches!(self, UnitSystem::Metric)
    }

    /// Weight unit label for display.
    #[must_use]
    pub fn weight_unit(&self) -> &'static str {
        match self {
            UnitSystem::Metric => "kg",
            UnitSystem::Imperial => "lb",
        }
    }
}

impl fmt::Display for UnitSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            UnitSystem::Metric => "Metric",
            UnitSystem::Imperial => "Imperial",
        };
        write!(f, "{name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conversion_constants() {
        // 150 lb is a little over 68 kg; 5 ft 7 in is 170.18 cm.
        assert!((150.0 * LB_TO_KG - 68.0388).abs() < 1e-9);
        assert!(((5.0 * INCHES_PER_FOOT + 7.0) * IN_TO_CM - 170.18).abs() < 1e-9);
    }

    #[test]
    fn test_default_is_metric() {
        assert!(UnitSystem::default().is_metric());
    }

    #[test]
    fn test_serde_rename() {
        assert_eq!(
            serde_json::to_string(&UnitSystem::Imperial).unwrap(),
            "\"imperial\""
        );
    }
}
