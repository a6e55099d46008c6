//! Pregnancy due date, gestational age, and milestones.
//!
//! Naegele's rule and its variants: a full gestation is 280 days from
//! the last menstrual period (LMP), 266 days from conception. An
//! ultrasound estimate dates the pregnancy from a scan plus the
//! gestational age it reported. All three methods reduce to an
//! LMP-equivalent start date from which weeks, trimesters, and
//! milestones are counted.
//!
//! Nothing here reads the clock: "today" is always an argument.

use calcsuite_core::error::{CalcError, CalcResult};
use calcsuite_core::types::Date;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Days from LMP to the due date.
pub const GESTATION_DAYS: i64 = 280;

/// Days from conception to the due date.
pub const CONCEPTION_TO_DUE_DAYS: i64 = 266;

/// Assumed days from LMP to conception.
const LUTEAL_OFFSET_DAYS: i64 = 14;

const DAYS_PER_WEEK: i64 = 7;

/// How the pregnancy is being dated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "method", rename_all = "lowercase")]
pub enum DueDateMethod {
    /// First day of the last menstrual period.
    Lmp {
        /// LMP date.
        date: Date,
    },
    /// Known or estimated conception date.
    Conception {
        /// Conception date.
        date: Date,
    },
    /// Dating ultrasound with the gestational age it measured.
    Ultrasound {
        /// Date of the scan.
        scan_date: Date,
        /// Gestational age at the scan, in whole weeks.
        gestational_age_weeks: u32,
    },
}

impl DueDateMethod {
    fn validate(&self) -> CalcResult<()> {
        if let DueDateMethod::Ultrasound {
            gestational_age_weeks,
            ..
        } = self
        {
            if *gestational_age_weeks == 0 || *gestational_age_weeks > 42 {
                return Err(CalcError::domain(
                    "gestational age must be between 1 and 42 weeks",
                ));
            }
        }
        Ok(())
    }

    /// The estimated due date.
    pub fn due_date(&self) -> CalcResult<Date> {
        self.validate()?;
        Ok(match self {
            DueDateMethod::Lmp { date } => date.add_days(GESTATION_DAYS),
            DueDateMethod::Conception { date } => date.add_days(CONCEPTION_TO_DUE_DAYS),
            DueDateMethod::Ultrasound {
                scan_date,
                gestational_age_weeks,
            } => scan_date
                .add_days(GESTATION_DAYS - i64::from(*gestational_age_weeks) * DAYS_PER_WEEK),
        })
    }

    /// The LMP-equivalent start date every week count is measured from.
    pub fn lmp_equivalent(&self) -> CalcResult<Date> {
        self.validate()?;
        Ok(match self {
            DueDateMethod::Lmp { date } => *date,
            DueDateMethod::Conception { date } => date.add_days(-LUTEAL_OFFSET_DAYS),
            DueDateMethod::Ultrasound {
                scan_date,
                gestational_age_weeks,
            } => scan_date.add_days(-(i64::from(*gestational_age_weeks) * DAYS_PER_WEEK)),
        })
    }

    /// Completed gestational weeks as of `today`. Negative if `today`
    /// precedes the start date.
    pub fn current_week(&self, today: Date) -> CalcResult<i64> {
        let start = self.lmp_equivalent()?;
        Ok(start.days_between(&today).div_euclid(DAYS_PER_WEEK))
    }

    /// Days until the due date as of `today`, clamped at zero.
    pub fn days_until_due(&self, today: Date) -> CalcResult<i64> {
        Ok(today.days_between(&self.due_date()?).max(0))
    }

    /// The milestone schedule for this pregnancy.
    pub fn milestones(&self) -> CalcResult<Vec<Milestone>> {
        let start = self.lmp_equivalent()?;
        Ok(MILESTONE_WEEKS
            .iter()
            .map(|&(week, label)| Milestone {
                week,
                label,
                date: start.add_days(i64::from(week) * DAYS_PER_WEEK),
            })
            .collect())
    }
}

/// Trimester of the pregnancy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Trimester {
    /// Weeks up to and including 13.
    First,
    /// Weeks 14 through 27.
    Second,
    /// Week 28 onwards.
    Third,
}

impl Trimester {
    /// Classifies a gestational week.
    #[must_use]
    pub fn from_week(week: i64) -> Self {
        if week <= 13 {
            Trimester::First
        } else if week <= 27 {
            Trimester::Second
        } else {
            Trimester::Third
        }
    }

    /// The trimester number, 1 through 3.
    #[must_use]
    pub fn number(&self) -> u8 {
        match self {
            Trimester::First => 1,
            Trimester::Second => 2,
            Trimester::Third => 3,
        }
    }
}

impl fmt::Display for Trimester {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Trimester::First => "First Trimester",
            Trimester::Second => "Second Trimester",
            Trimester::Third => "Third Trimester",
        };
        write!(f, "{name}")
    }
}

/// A fixed-offset milestone from the LMP-equivalent date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Milestone {
    /// Gestational week of the milestone.
    pub week: u32,
    /// Display label.
    pub label: &'static str,
    /// Calendar date of the milestone.
    pub date: Date,
}

const MILESTONE_WEEKS: &[(u32, &str)] = &[
    (12, "First Trimester Ends"),
    (20, "Halfway Point!"),
    (27, "Second Trimester Ends"),
    (37, "Full Term"),
    (40, "Due Date"),
];
