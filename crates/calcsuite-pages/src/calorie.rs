//! Calorie page controller.

use calcsuite_core::types::UnitSystem;
use calcsuite_formulas::body::{BodyMeasurements, Gender};
use calcsuite_formulas::calorie::{self, ActivityLevel, CalorieInput, CalorieResult};

use crate::range::ParamRange;

/// State holder for the calorie/TDEE calculator page.
///
/// The raw weight and height fields are reinterpreted when the unit
/// system toggles (70 means kilograms in metric, pounds in imperial);
/// the page keeps the numbers and only swaps the slider ranges, the
/// same way the original does.
#[derive(Debug)]
pub struct CaloriePage {
    unit_system: UnitSystem,
    gender: Gender,
    age_years: u32,
    weight: f64,
    height_cm: f64,
    height_ft: f64,
    height_in: f64,
    activity: ActivityLevel,
    result: Option<CalorieResult>,
}

impl CaloriePage {
    /// Slider range for age.
    pub const AGE_YEARS: ParamRange = ParamRange::new(15.0, 80.0, 1.0);
    /// Metric weight slider range (kg).
    pub const WEIGHT_KG: ParamRange = ParamRange::new(30.0, 200.0, 0.5);
    /// Imperial weight slider range (lb).
    pub const WEIGHT_LB: ParamRange = ParamRange::new(66.0, 440.0, 1.0);
    /// Metric height slider range (cm).
    pub const HEIGHT_CM: ParamRange = ParamRange::new(100.0, 250.0, 1.0);
    /// Imperial height slider range, feet component.
    pub const HEIGHT_FT: ParamRange = ParamRange::new(3.0, 8.0, 1.0);
    /// Imperial height slider range, inches component.
    pub const HEIGHT_IN: ParamRange = ParamRange::new(0.0, 11.0, 1.0);

    /// Creates the page with its defaults: metric, male, 30 years,
    /// 70 kg, 170 cm, moderately active.
    #[must_use]
    pub fn new() -> Self {
        let mut page = Self {
            unit_system: UnitSystem::Metric,
            gender: Gender::Male,
            age_years: 30,
            weight: 70.0,
            height_cm: 170.0,
            height_ft: 5.0,
            height_in: 7.0,
            activity: ActivityLevel::ModeratelyActive,
            result: None,
        };
        page.recompute();
        page
    }

    /// The active weight slider range for the current unit system.
    #[must_use]
    pub fn weight_range(&self) -> ParamRange {
        match self.unit_system {
            UnitSystem::Metric => Self::WEIGHT_KG,
            UnitSystem::Imperial => Self::WEIGHT_LB,
        }
    }

    /// Current unit system.
    #[must_use]
    pub fn unit_system(&self) -> UnitSystem {
        self.unit_system
    }

    /// Switches unit system and recomputes. Raw field values are kept.
    pub fn set_unit_system(&mut self, unit_system: UnitSystem) {
        self.unit_system = unit_system;
        self.recompute();
    }

    /// Sets gender and recomputes.
    pub fn set_gender(&mut self, gender: Gender) {
        self.gender = gender;
        self.recompute();
    }

    /// Sets age and recomputes.
    pub fn set_age_years(&mut self, age: u32) {
        self.age_years = age;
        self.recompute();
    }

    /// Sets weight (kg or lb per the unit system) and recomputes.
    pub fn set_weight(&mut self, weight: f64) {
        self.weight = weight;
        self.recompute();
    }

    /// Sets metric height and recomputes.
    pub fn set_height_cm(&mut self, height_cm: f64) {
        self.height_cm = height_cm;
        self.recompute();
    }

    /// Sets the imperial height feet component and recomputes.
    pub fn set_height_ft(&mut self, height_ft: f64) {
        self.height_ft = height_ft;
        self.recompute();
    }

    /// Sets the imperial height inches component and recomputes.
    pub fn set_height_in(&mut self, height_in: f64) {
        self.height_in = height_in;
        self.recompute();
    }

    /// Sets the activity level and recomputes.
    pub fn set_activity(&mut self, activity: ActivityLevel) {
        self.activity = activity;
        self.recompute();
    }

    /// The measurements as the formula layer sees them.
    #[must_use]
    pub fn measurements(&self) -> BodyMeasurements {
        match self.unit_system {
            UnitSystem::Metric => BodyMeasurements::Metric {
                weight_kg: self.weight,
                height_cm: self.height_cm,
            },
            UnitSystem::Imperial => BodyMeasurements::Imperial {
                weight_lb: self.weight,
                height_ft: self.height_ft,
                height_in: self.height_in,
            },
        }
    }

    /// The current energy needs, absent while inputs are invalid.
    #[must_use]
    pub fn result(&self) -> Option<&CalorieResult> {
        self.result.as_ref()
    }

    fn recompute(&mut self) {
        let input = CalorieInput {
            gender: self.gender,
            age_years: self.age_years,
            measurements: self.measurements(),
            activity: self.activity,
        };
        self.result = match calorie::energy_needs(&input) {
            Ok(result) => Some(result),
            Err(err) => {
                log::debug!("calorie page: no result ({err})");
                None
            }
        };
    }
}
