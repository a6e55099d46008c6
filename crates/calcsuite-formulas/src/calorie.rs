//! Daily calorie needs via the Mifflin-St Jeor equation.
//!
//! ```text
//! BMR(male)   = 10·kg + 6.25·cm − 5·age + 5
//! BMR(female) = 10·kg + 6.25·cm − 5·age − 161
//! TDEE        = BMR × activity multiplier
//! ```
//!
//! The weight-loss and weight-gain targets shift TDEE by 500 kcal,
//! the conventional one-pound-per-week deficit/surplus.

use calcsuite_core::error::{CalcError, CalcResult};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::body::{BodyMeasurements, Gender};

/// Daily calorie adjustment for the loss/gain targets.
const TARGET_SHIFT_KCAL: f64 = 500.0;

/// Self-reported activity level with its TDEE multiplier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ActivityLevel {
    /// Little or no exercise.
    Sedentary,
    /// Exercise 1-3 days/week.
    LightlyActive,
    /// Exercise 3-5 days/week.
    #[default]
    ModeratelyActive,
    /// Exercise 6-7 days/week.
    VeryActive,
    /// Physical job or twice-daily training.
    ExtremelyActive,
}

impl ActivityLevel {
    /// Returns the TDEE multiplier applied to BMR.
    #[must_use]
    pub fn multiplier(&self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::LightlyActive => 1.375,
            ActivityLevel::ModeratelyActive => 1.55,
            ActivityLevel::VeryActive => 1.725,
            ActivityLevel::ExtremelyActive => 1.9,
        }
    }

    /// Short description of what qualifies for the level.
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "Little or no exercise",
            ActivityLevel::LightlyActive => "Exercise 1-3 days/week",
            ActivityLevel::ModeratelyActive => "Exercise 3-5 days/week",
            ActivityLevel::VeryActive => "Exercise 6-7 days/week",
            ActivityLevel::ExtremelyActive => "Physical job or 2x training",
        }
    }
}

impl fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ActivityLevel::Sedentary => "Sedentary",
            ActivityLevel::LightlyActive => "Lightly Active",
            ActivityLevel::ModeratelyActive => "Moderately Active",
            ActivityLevel::VeryActive => "Very Active",
            ActivityLevel::ExtremelyActive => "Extremely Active",
        };
        write!(f, "{name}")
    }
}

/// Inputs for a daily energy calculation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalorieInput {
    /// Biological sex.
    pub gender: Gender,
    /// Age in whole years.
    pub age_years: u32,
    /// Weight and height in either unit system.
    pub measurements: BodyMeasurements,
    /// Self-reported activity level.
    pub activity: ActivityLevel,
}

impl CalorieInput {
    fn validate(&self) -> CalcResult<()> {
        if self.age_years == 0 {
            return Err(CalcError::domain("age must be positive"));
        }
        self.measurements.validate()
    }
}

/// Daily energy needs, rounded to whole kilocalories.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalorieResult {
    /// Basal metabolic rate.
    pub bmr: f64,
    /// Total daily energy expenditure.
    pub tdee: f64,
    /// TDEE minus 500 kcal.
    pub weight_loss_target: f64,
    /// TDEE plus 500 kcal.
    pub weight_gain_target: f64,
}

/// Computes BMR, TDEE, and the weight-change calorie targets.
pub fn energy_needs(input: &CalorieInput) -> CalcResult<CalorieResult> {
    input.validate()?;

    let (weight_kg, height_cm) = input.measurements.to_metric();
    let base = 10.0 * weight_kg + 6.25 * height_cm - 5.0 * f64::from(input.age_years);
    let bmr = match input.gender {
        Gender::Male => base + 5.0,
        Gender::Female => base - 161.0,
    };
    let tdee = bmr * input.activity.multiplier();

    Ok(CalorieResult {
        bmr: bmr.round(),
        tdee: tdee.round(),
        weight_loss_target: (tdee - TARGET_SHIFT_KCAL).round(),
        weight_gain_target: (tdee + TARGET_SHIFT_KCAL).round(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_input() -> CalorieInput {
        CalorieInput {
            gender: Gender::Male,
            age_years: 30,
            measurements: BodyMeasurements::Metric {
                weight_kg: 70.0,
                height_cm: 170.0,
            },
            activity: ActivityLevel::ModeratelyActive,
        }
    }

    #[test]
    fn test_default_page_inputs() {
        let result = energy_needs(&default_input()).unwrap();
        assert_eq!(result.bmr, 1618.0); // 1617.5 rounds up
        assert_eq!(result.tdee, 2507.0);
        assert_eq!(result.weight_loss_target, 2007.0);
        assert_eq!(result.weight_gain_target, 3007.0);
    }

    #[test]
    fn test_female_offset_is_166_below_male() {
        let male = energy_needs(&default_input()).unwrap();
        let female = energy_needs(&CalorieInput {
            gender: Gender::Female,
            ..default_input()
        })
        .unwrap();
        assert_eq!(male.bmr - female.bmr, 166.0);
    }

    #[test]
    fn test_imperial_input_converts_before_formula() {
        // 154 lb, 5 ft 7 in is close to the metric default.
        let result = energy_needs(&CalorieInput {
            measurements: BodyMeasurements::Imperial {
                weight_lb: 154.0,
                height_ft: 5.0,
                height_in: 7.0,
            },
            ..default_input()
        })
        .unwrap();
        assert!((result.bmr - 1618.0).abs() <= 3.0);
    }

    #[test]
    fn test_activity_multipliers() {
        let sedentary = energy_needs(&CalorieInput {
            activity: ActivityLevel::Sedentary,
            ..default_input()
        })
        .unwrap();
        assert_eq!(sedentary.tdee, (1617.5_f64 * 1.2).round());
    }

    #[test]
    fn test_rejects_zero_age() {
        assert!(energy_needs(&CalorieInput {
            age_years: 0,
            ..default_input()
        })
        .is_err());
    }
}
