//! BMI page controller.

use calcsuite_core::types::UnitSystem;
use calcsuite_formulas::bmi::{self, BmiResult};
use calcsuite_formulas::body::BodyMeasurements;

use crate::range::ParamRange;

/// State holder for the BMI calculator page. Shares the calorie page's
/// convention of reinterpreting raw fields when units toggle.
#[derive(Debug)]
pub struct BmiPage {
    unit_system: UnitSystem,
    weight: f64,
    height_cm: f64,
    height_ft: f64,
    height_in: f64,
    result: Option<BmiResult>,
}

impl BmiPage {
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

    /// Creates the page with its defaults: metric, 70 kg, 170 cm.
    #[must_use]
    pub fn new() -> Self {
        let mut page = Self {
            unit_system: UnitSystem::Metric,
            weight: 70.0,
            height_cm: 170.0,
            height_ft: 5.0,
            height_in: 7.0,
            result: None,
        };
        page.recompute();
        page
    }

    /// Current unit system.
    #[must_use]
    pub fn unit_system(&self) -> UnitSystem {
        self.unit_system
    }

    /// Switches unit system and recomputes.
    pub fn set_unit_system(&mut self, unit_system: UnitSystem) {
        self.unit_system = unit_system;
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

    /// The current BMI, absent while inputs are invalid.
    #[must_use]
    pub fn result(&self) -> Option<&BmiResult> {
        self.result.as_ref()
    }

    /// Position of the current BMI on the page's 15-to-40 gauge, in
    /// percent.
    #[must_use]
    pub fn gauge_position(&self) -> Option<f64> {
        self.result.map(|r| bmi::scale_position(r.bmi))
    }

    fn recompute(&mut self) {
        self.result = match bmi::body_mass_index(&self.measurements()) {
            Ok(result) => Some(result),
            Err(err) => {
                log::debug!("bmi page: no result ({err})");
                None
            }
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use calcsuite_formulas::bmi::BmiCategory;

    #[test]
    fn test_defaults_produce_a_result() {
        let page = BmiPage::new();
        let result = page.result().unwrap();
        assert_eq!(result.bmi, 24.2);
        assert_eq!(result.category, BmiCategory::Normal);
    }

    #[test]
    fn test_imperial_mode_uses_ft_in_fields() {
        let mut page = BmiPage::new();
        page.set_unit_system(UnitSystem::Imperial);
        page.set_weight(154.0);
        assert_eq!(page.result().unwrap().bmi, 24.1);
    }

    #[test]
    fn test_gauge_position_present_with_result() {
        let mut page = BmiPage::new();
        assert!(page.gauge_position().is_some());
        page.set_height_cm(0.0);
        assert!(page.gauge_position().is_none());
    }

    #[test]
    fn test_category_tracks_weight() {
        let mut page = BmiPage::new();
        page.set_weight(95.0); // 95 / 1.7² ≈ 32.9
        assert_eq!(page.result().unwrap().category, BmiCategory::Obese);
    }
}
