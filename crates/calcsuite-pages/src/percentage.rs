//! Percentage page controller.
//!
//! The page shows several independent one-line calculations over four
//! number fields. Each section's result is recomputed on every edit;
//! the ratio sections go absent when their denominator is zero instead
//! of showing Infinity.

use calcsuite_formulas::percentage;

/// Results of the page's sections. Ratio results are `None` when
/// undefined.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PercentageResults {
    /// "What is P% of B": always defined.
    pub percent_of: f64,
    /// "A is what % of B": absent when B is zero.
    pub what_percent: Option<f64>,
    /// "A increased by C%".
    pub increased: f64,
    /// "A decreased by C%".
    pub decreased: f64,
    /// "% change from A to B": absent when A is zero.
    pub percent_change: Option<f64>,
}

/// State holder for the percentage calculator page.
#[derive(Debug)]
pub struct PercentagePage {
    value_a: f64,
    value_b: f64,
    percent: f64,
    change_pct: f64,
    results: PercentageResults,
}

impl PercentagePage {
    /// Creates the page with its defaults: A = 50, B = 200, P = 25%,
    /// C = 10%.
    #[must_use]
    pub fn new() -> Self {
        let mut page = Self {
            value_a: 50.0,
            value_b: 200.0,
            percent: 25.0,
            change_pct: 10.0,
            results: PercentageResults {
                percent_of: 0.0,
                what_percent: None,
                increased: 0.0,
                decreased: 0.0,
                percent_change: None,
            },
        };
        page.recompute();
        page
    }

    /// Sets the first value and recomputes.
    pub fn set_value_a(&mut self, value: f64) {
        self.value_a = value;
        self.recompute();
    }

    /// Sets the second value and recomputes.
    pub fn set_value_b(&mut self, value: f64) {
        self.value_b = value;
        self.recompute();
    }

    /// Sets the percentage and recomputes.
    pub fn set_percent(&mut self, value: f64) {
        self.percent = value;
        self.recompute();
    }

    /// Sets the increase/decrease percentage and recomputes.
    pub fn set_change_pct(&mut self, value: f64) {
        self.change_pct = value;
        self.recompute();
    }

    /// The current section results.
    #[must_use]
    pub fn results(&self) -> &PercentageResults {
        &self.results
    }

    fn recompute(&mut self) {
        self.results = PercentageResults {
            percent_of: percentage::percent_of(self.percent, self.value_b),
            what_percent: percentage::what_percent(self.value_a, self.value_b).ok(),
            increased: percentage::increase_by(self.value_a, self.change_pct),
            decreased: percentage::decrease_by(self.value_a, self.change_pct),
            percent_change: percentage::percent_change(self.value_a, self.value_b).ok(),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_default_sections() {
        let page = PercentagePage::new();
        let r = page.results();
        assert_relative_eq!(r.percent_of, 50.0); // 25% of 200
        assert_relative_eq!(r.what_percent.unwrap(), 25.0); // 50 of 200
        assert_relative_eq!(r.increased, 55.0); // 50 + 10%
        assert_relative_eq!(r.decreased, 45.0);
        assert_relative_eq!(r.percent_change.unwrap(), 300.0); // 50 → 200
    }

    #[test]
    fn test_zero_denominators_go_absent() {
        let mut page = PercentagePage::new();
        page.set_value_b(0.0);
        assert!(page.results().what_percent.is_none());
        assert_relative_eq!(page.results().percent_of, 0.0);
        page.set_value_a(0.0);
        assert!(page.results().percent_change.is_none());
    }
}
