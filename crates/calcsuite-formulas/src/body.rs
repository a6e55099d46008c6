//! Shared body-measurement inputs for the BMI and calorie calculators.

use calcsuite_core::error::{CalcError, CalcResult};
use calcsuite_core::types::{IN_TO_CM, INCHES_PER_FOOT, LB_TO_KG};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Biological sex used by the Mifflin-St Jeor equation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    /// Male constant term: +5.
    #[default]
    Male,
    /// Female constant term: -161.
    Female,
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
        };
        write!(f, "{name}")
    }
}

/// Weight and height in either measurement system.
///
/// Imperial height is carried as feet plus inches, the way the pages
/// collect it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "unit", rename_all = "lowercase")]
pub enum BodyMeasurements {
    /// Kilograms and centimetres.
    Metric {
        /// Body weight in kilograms.
        weight_kg: f64,
        /// Height in centimetres.
        height_cm: f64,
    },
    /// Pounds, feet, and inches.
    Imperial {
        /// Body weight in pounds.
        weight_lb: f64,
        /// Height, whole feet component.
        height_ft: f64,
        /// Height, remaining inches component.
        height_in: f64,
    },
}

impl BodyMeasurements {
    /// Validates that weight and height are positive and finite.
    pub fn validate(&self) -> CalcResult<()> {
        let (weight, height) = match self {
            BodyMeasurements::Metric {
                weight_kg,
                height_cm,
            } => (*weight_kg, *height_cm),
            BodyMeasurements::Imperial {
                weight_lb,
                height_ft,
                height_in,
            } => (*weight_lb, height_ft * INCHES_PER_FOOT + height_in),
        };
        if !weight.is_finite() || weight <= 0.0 {
            return Err(CalcError::domain("weight must be positive"));
        }
        if !height.is_finite() || height <= 0.0 {
            return Err(CalcError::domain("height must be positive"));
        }
        Ok(())
    }

    /// Converts to `(weight_kg, height_cm)`.
    #[must_use]
    pub fn to_metric(&self) -> (f64, f64) {
        match self {
            BodyMeasurements::Metric {
                weight_kg,
                height_cm,
            } => (*weight_kg, *height_cm),
            BodyMeasurements::Imperial {
                weight_lb,
                height_ft,
                height_in,
            } => {
                let total_inches = height_ft * INCHES_PER_FOOT + height_in;
                (weight_lb * LB_TO_KG, total_inches * IN_TO_CM)
            }
        }
    }
}
