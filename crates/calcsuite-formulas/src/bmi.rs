//! Body Mass Index.
//!
//! Metric: `kg / m²`. Imperial uses the CDC convention
//! `lb / in² × 703` without converting to metric first.
//!
//! WHO category boundaries are half-open on the lower bound: 18.5 is
//! Normal, 25 is Overweight, 30 is Obese.

use calcsuite_core::error::CalcResult;
use calcsuite_core::types::INCHES_PER_FOOT;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::body::BodyMeasurements;

/// Conversion factor for the imperial BMI formula.
const IMPERIAL_FACTOR: f64 = 703.0;

/// WHO weight category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BmiCategory {
    /// BMI below 18.5.
    Underweight,
    /// BMI in [18.5, 25).
    Normal,
    /// BMI in [25, 30).
    Overweight,
    /// BMI of 30 or above.
    Obese,
}

impl BmiCategory {
    /// Classifies an (unrounded) BMI value.
    #[must_use]
    pub fn from_bmi(bmi: f64) -> Self {
        if bmi < 18.5 {
            BmiCategory::Underweight
        } else if bmi < 25.0 {
            BmiCategory::Normal
        } else if bmi < 30.0 {
            BmiCategory::Overweight
        } else {
            BmiCategory::Obese
        }
    }
}

impl fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::Normal => "Normal Weight",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::Obese => "Obese",
        };
        write!(f, "{name}")
    }
}

/// BMI outcome. `bmi` is rounded to one decimal for display; the
/// category is judged on the unrounded value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BmiResult {
    /// BMI rounded to one decimal place.
    pub bmi: f64,
    /// WHO category of the unrounded BMI.
    pub category: BmiCategory,
}

/// Computes BMI and its category from body measurements.
pub fn body_mass_index(measurements: &BodyMeasurements) -> CalcResult<BmiResult> {
    measurements.validate()?;

    let bmi = match measurements {
        BodyMeasurements::Metric {
            weight_kg,
            height_cm,
        } => {
            let height_m = height_cm / 100.0;
            weight_kg / (height_m * height_m)
        }
        BodyMeasurements::Imperial {
            weight_lb,
            height_ft,
            height_in,
        } => {
            let total_inches = height_ft * INCHES_PER_FOOT + height_in;
            weight_lb / (total_inches * total_inches) * IMPERIAL_FACTOR
        }
    };

    Ok(BmiResult {
        bmi: (bmi * 10.0).round() / 10.0,
        category: BmiCategory::from_bmi(bmi),
    })
}

/// Maps a BMI value onto the page's gauge, which spans BMI 15 to 40.
/// Returns a position in percent, clamped to [0, 100].
#[must_use]
pub fn scale_position(bmi: f64) -> f64 {
    if bmi < 15.0 {
        return 0.0;
    }
    if bmi > 40.0 {
        return 100.0;
    }
    (bmi - 15.0) / 25.0 * 100.0
}
