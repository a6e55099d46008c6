//! Date type for due-date calculations.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{CalcError, CalcResult};

/// A calendar date.
///
/// This is a newtype wrapper around `chrono::NaiveDate` providing the
/// day-offset arithmetic the pregnancy calculator needs.
///
/// # Example
///
/// ```rust
/// use calcsuite_core::types::Date;
///
/// let lmp = Date::from_ymd(2024, 3, 1).unwrap();
/// let due = lmp.add_days(280);
/// assert_eq!(due.to_string(), "2024-12-06");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Date(NaiveDate);

impl Date {
    /// Creates a new date from year, month, and day.
    ///
    /// # Errors
    ///
    /// Returns `CalcError::InvalidDate` if the date is invalid.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> CalcResult<Self> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Date)
            .ok_or_else(|| CalcError::invalid_date(format!("{year}-{month:02}-{day:02}")))
    }

    /// Creates a date from an ISO 8601 string (YYYY-MM-DD).
    ///
    /// # Errors
    ///
    /// Returns `CalcError::InvalidDate` if the string is not a valid date.
    pub fn parse(s: &str) -> CalcResult<Self> {
        NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map(Date)
            .map_err(|_| CalcError::invalid_date(format!("Cannot parse: {s}")))
    }

    /// Returns today's date. The formula layer never calls this itself;
    /// callers pass the result in so computations stay pure.
    #[must_use]
    pub fn today() -> Self {
        Date(chrono::Local::now().date_naive())
    }

    /// Returns the year component.
    #[must_use]
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Returns the month component (1-12).
    #[must_use]
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// Returns the day component (1-31).
    #[must_use]
    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// Adds a number of days (negative moves backwards).
    #[must_use]
    pub fn add_days(&self, days: i64) -> Self {
        Date(self.0 + chrono::Duration::days(days))
    }

    /// Calculates the number of calendar days from `self` to `other`.
    #[must_use]
    pub fn days_between(&self, other: &Date) -> i64 {
        (other.0 - self.0).num_days()
    }

    /// Returns the underlying `NaiveDate`.
    #[must_use]
    pub fn as_naive_date(&self) -> NaiveDate {
        self.0
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_ymd_valid() {
        let date = Date::from_ymd(2024, 3, 1).unwrap();
        assert_eq!(date.year(), 2024);
        assert_eq!(date.month(), 3);
        assert_eq!(date.day(), 1);
    }

    #[test]
    fn test_from_ymd_invalid() {
        assert!(Date::from_ymd(2024, 2, 30).is_err());
        assert!(Date::from_ymd(2024, 13, 1).is_err());
    }

    #[test]
    fn test_parse() {
        let date = Date::parse("2024-03-15").unwrap();
        assert_eq!(date, Date::from_ymd(2024, 3, 15).unwrap());
        assert!(Date::parse("15/03/2024").is_err());
    }

    #[test]
    fn test_add_days_across_year_boundary() {
        let date = Date::from_ymd(2024, 12, 30).unwrap();
        assert_eq!(date.add_days(3), Date::from_ymd(2025, 1, 2).unwrap());
        assert_eq!(date.add_days(-30), Date::from_ymd(2024, 11, 30).unwrap());
    }

    #[test]
    fn test_days_between() {
        let a = Date::from_ymd(2024, 3, 1).unwrap();
        let b = Date::from_ymd(2024, 3, 15).unwrap();
        assert_eq!(a.days_between(&b), 14);
        assert_eq!(b.days_between(&a), -14);
    }

    #[test]
    fn test_display_is_iso() {
        let date = Date::from_ymd(2024, 12, 6).unwrap();
        assert_eq!(date.to_string(), "2024-12-06");
    }

    #[test]
    fn test_serde_round_trip() {
        let date = Date::from_ymd(2024, 3, 1).unwrap();
        let json = serde_json::to_string(&date).unwrap();
        assert_eq!(json, "\"2024-03-01\"");
        let parsed: Date = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, date);
    }
}
