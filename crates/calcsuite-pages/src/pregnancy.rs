//! Pregnancy page controller.

use calcsuite_core::types::Date;
use calcsuite_formulas::pregnancy::{DueDateMethod, Milestone, Trimester};

/// Everything the page renders for the current dating method.
#[derive(Debug, Clone, PartialEq)]
pub struct PregnancySummary {
    /// Estimated due date.
    pub due_date: Date,
    /// Completed gestational weeks as of the page's "today".
    pub current_week: i64,
    /// Trimester of the current week.
    pub trimester: Trimester,
    /// Days until the due date, clamped at zero.
    pub days_until_due: i64,
    /// Milestone schedule.
    pub milestones: Vec<Milestone>,
}

/// Which dating method the page has selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MethodChoice {
    /// Date from the last menstrual period.
    Lmp,
    /// Date from conception.
    Conception,
    /// Date from an ultrasound estimate.
    Ultrasound,
}

/// State holder for the pregnancy due-date page.
///
/// The page keeps one date per method (switching methods does not
/// forget the others) plus a fixed "today" captured at construction,
/// so a given page state always renders the same summary.
#[derive(Debug)]
pub struct PregnancyPage {
    method: MethodChoice,
    lmp_date: Date,
    conception_date: Date,
    ultrasound_date: Date,
    gestational_age_weeks: u32,
    today: Date,
    result: Option<PregnancySummary>,
}

impl PregnancyPage {
    /// Creates the page with its default dates, evaluated against the
    /// real current date.
    #[must_use]
    pub fn new() -> Self {
        Self::with_today(Date::today())
    }

    /// Creates the page evaluating against a fixed "today". Used by
    /// hosts that re-render across midnight, and by tests.
    #[must_use]
    pub fn with_today(today: Date) -> Self {
        let mut page = Self {
            method: MethodChoice::Lmp,
            // The page's seeded example dates.
            lmp_date: Date::from_ymd(2024, 3, 1).expect("valid seed date"),
            conception_date: Date::from_ymd(2024, 3, 15).expect("valid seed date"),
            ultrasound_date: Date::from_ymd(2024, 5, 1).expect("valid seed date"),
            gestational_age_weeks: 8,
            today,
            result: None,
        };
        page.recompute();
        page
    }

    /// The selected dating method.
    #[must_use]
    pub fn method(&self) -> MethodChoice {
        self.method
    }

    /// Switches dating method and recomputes.
    pub fn set_method(&mut self, method: MethodChoice) {
        self.method = method;
        self.recompute();
    }

    /// Sets the LMP date and recomputes.
    pub fn set_lmp_date(&mut self, date: Date) {
        self.lmp_date = date;
        self.recompute();
    }

    /// Sets the conception date and recomputes.
    pub fn set_conception_date(&mut self, date: Date) {
        self.conception_date = date;
        self.recompute();
    }

    /// Sets the ultrasound scan date and recomputes.
    pub fn set_ultrasound_date(&mut self, date: Date) {
        self.ultrasound_date = date;
        self.recompute();
    }

    /// Sets the gestational age measured at the scan and recomputes.
    pub fn set_gestational_age_weeks(&mut self, weeks: u32) {
        self.gestational_age_weeks = weeks;
        self.recompute();
    }

    /// The dating method as the formula layer sees it.
    #[must_use]
    pub fn due_date_method(&self) -> DueDateMethod {
        match self.method {
            MethodChoice::Lmp => DueDateMethod::Lmp {
                date: self.lmp_date,
            },
            MethodChoice::Conception => DueDateMethod::Conception {
                date: self.conception_date,
            },
            MethodChoice::Ultrasound => DueDateMethod::Ultrasound {
                scan_date: self.ultrasound_date,
                gestational_age_weeks: self.gestational_age_weeks,
            },
        }
    }

    /// The current summary, absent while inputs are invalid.
    #[must_use]
    pub fn result(&self) -> Option<&PregnancySummary> {
        self.result.as_ref()
    }

    fn recompute(&mut self) {
        let method = self.due_date_method();
        let summary = (|| {
            let due_date = method.due_date()?;
            let current_week = method.current_week(self.today)?;
            Ok::<_, calcsuite_core::CalcError>(PregnancySummary {
                due_date,
                current_week,
                trimester: Trimester::from_week(current_week),
                days_until_due: method.days_until_due(self.today)?,
                milestones: method.milestones()?,
            })
        })();
        self.result = match summary {
            Ok(summary) => Some(summary),
            Err(err) => {
                log::debug!("pregnancy page: no result ({err})");
                None
            }
        };
    }
}
