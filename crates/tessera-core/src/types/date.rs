//! Calendar date type for daily price data.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{CoreError, CoreResult};

/// A calendar day with no time component.
///
/// Newtype around `chrono::NaiveDate`. Equality is exact calendar-day
/// equality, which is what price lookups key on.
///
/// # Example
///
/// ```rust
/// use tessera_core::types::Date;
///
/// let date = Date::from_ymd(2020, 2, 29).unwrap();
/// let past = date.years_before(1);
/// assert_eq!(past.to_string(), "2019-03-01");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Date(NaiveDate);

impl Date {
    /// Creates a new date from year, month, and day.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidDate` if the date is invalid.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> CoreResult<Self> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Date)
            .ok_or_else(|| CoreError::invalid_date(format!("{year}-{month:02}-{day:02}")))
    }

    /// Creates a date from an ISO 8601 string (YYYY-MM-DD).
    ///
    /// Surrounding whitespace is ignored.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidDate` if the string is not a valid date.
    pub fn parse(s: &str) -> CoreResult<Self> {
        NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
            .map(Date)
            .map_err(|_| CoreError::invalid_date(format!("Cannot parse: {s}")))
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

    /// Adds a number of days to the date.
    #[must_use]
    pub fn add_days(&self, days: i64) -> Self {
        Date(self.0 + chrono::Duration::days(days))
    }

    /// Shifts the date back by whole calendar years.
    ///
    /// Keeps month and day. When the day does not exist in the target year
    /// (Feb 29 into a non-leap year) the date overflows into the next day,
    /// so 2020-02-29 minus one year is 2019-03-01.
    #[must_use]
    pub fn years_before(&self, years: u32) -> Self {
        let year = self.year() - i32::try_from(years).unwrap_or(i32::MAX / 2);
        match NaiveDate::from_ymd_opt(year, self.month(), self.day()) {
            Some(date) => Date(date),
            None => {
                // Only Feb 29 can fail; the first of next month is always valid.
                let first = NaiveDate::from_ymd_opt(year, self.month(), 1).unwrap_or(self.0);
                Date(first + chrono::Duration::days(i64::from(self.day()) - 1))
            }
        }
    }

    /// Calculates the signed number of calendar days from `self` to `other`.
    #[must_use]
    pub fn days_between(&self, other: &Date) -> i64 {
        (other.0 - self.0).num_days()
    }

    /// Calculates the absolute number of calendar days between two dates.
    #[must_use]
    pub fn abs_days_between(&self, other: &Date) -> u64 {
        self.days_between(other).unsigned_abs()
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

impl FromStr for Date {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<NaiveDate> for Date {
    fn from(date: NaiveDate) -> Self {
        Date(date)
    }
}

impl From<Date> for NaiveDate {
    fn from(date: Date) -> Self {
        date.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_creation() {
        let date = Date::from_ymd(2018, 2, 7).unwrap();
        assert_eq!(date.year(), 2018);
        assert_eq!(date.month(), 2);
        assert_eq!(date.day(), 7);
    }

    #[test]
    fn test_invalid_date() {
        assert!(Date::from_ymd(2019, 2, 29).is_err());
        assert!(Date::from_ymd(2020, 13, 1).is_err());
    }

    #[test]
    fn test_parse() {
        let date = Date::parse("2020-12-31").unwrap();
        assert_eq!(date, Date::from_ymd(2020, 12, 31).unwrap());

        let padded = Date::parse(" 2020-12-31 ").unwrap();
        assert_eq!(date, padded);

        assert!(Date::parse("2020/12/31").is_err());
        assert!(Date::parse("not a date").is_err());
        assert!(Date::parse("2020-02-30").is_err());
        assert!("2020-01-01".parse::<Date>().is_ok());
    }

    #[test]
    fn test_years_before() {
        let date = Date::from_ymd(2018, 2, 7).unwrap();
        assert_eq!(date.years_before(1), Date::from_ymd(2017, 2, 7).unwrap());
        assert_eq!(date.years_before(5), Date::from_ymd(2013, 2, 7).unwrap());
        assert_eq!(date.years_before(0), date);
    }

    #[test]
    fn test_years_before_leap_day_rolls_forward() {
        let leap = Date::from_ymd(2020, 2, 29).unwrap();
        assert_eq!(leap.years_before(1), Date::from_ymd(2019, 3, 1).unwrap());
        assert_eq!(leap.years_before(4), Date::from_ymd(2016, 2, 29).unwrap());
    }

    #[test]
    fn test_days_between() {
        let d1 = Date::from_ymd(2020, 1, 1).unwrap();
        let d2 = Date::from_ymd(2020, 12, 31).unwrap();
        assert_eq!(d1.days_between(&d2), 365);
        assert_eq!(d2.days_between(&d1), -365);
        assert_eq!(d2.abs_days_between(&d1), 365);
        assert_eq!(d1.add_days(365), d2);
    }

    #[test]
    fn test_ordering() {
        let d1 = Date::from_ymd(2017, 6, 1).unwrap();
        let d2 = Date::from_ymd(2018, 1, 2).unwrap();
        assert!(d1 < d2);
    }

    #[test]
    fn test_display() {
        let date = Date::from_ymd(2018, 2, 7).unwrap();
        assert_eq!(format!("{}", date), "2018-02-07");
    }

    #[test]
    fn test_serde() {
        let date = Date::from_ymd(2018, 2, 7).unwrap();
        let json = serde_json::to_string(&date).unwrap();
        assert_eq!(json, "\"2018-02-07\"");
        let parsed: Date = serde_json::from_str(&json).unwrap();
        assert_eq!(date, parsed);
    }
}
