//! Dates, business-day arithmetic and day-count conventions.
//!
//! This module provides:
//! - `Date`: Type-safe date wrapper around chrono::NaiveDate
//! - Weekend-only business-day calendar (no holiday tables)
//! - Year fraction calculations (calendar and business-day bases)
//!
//! # Examples
//!
//! ```
//! use pricer_core::types::time::{business_days_between, year_fraction, Date};
//!
//! let start = Date::from_ymd(2020, 5, 1).unwrap(); // Friday
//! let end = Date::from_ymd(2020, 5, 8).unwrap();
//!
//! assert_eq!(start.next_business_day(), Date::from_ymd(2020, 5, 4).unwrap());
//! assert_eq!(business_days_between(start, end), 5);
//! assert!((year_fraction(start, end) - 7.0 / 365.0).abs() < 1e-12);
//! ```

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use std::fmt;
use std::ops::Sub;
use std::str::FromStr;

use super::error::DateError;

/// Calendar days in a week.
pub const DAYS_IN_WEEK: u32 = 7;
/// Calendar days in a (nominal) month.
pub const DAYS_IN_MONTH: u32 = 30;
/// Calendar days in a year.
pub const DAYS_IN_YEAR: u32 = 365;
/// Business days in a week.
pub const BUSINESS_DAYS_IN_WEEK: u32 = 5;
/// Business days in a (nominal) month.
pub const BUSINESS_DAYS_IN_MONTH: u32 = 21;
/// Business days in a year; the time unit for option expiry and hedge accrual.
pub const BUSINESS_DAYS_IN_YEAR: u32 = 250;

/// Type-safe date wrapper around chrono::NaiveDate.
///
/// Provides ISO 8601 parsing/formatting and the business-day operations used
/// throughout pricing and hedging.
///
/// # Examples
///
/// ```
/// use pricer_core::types::time::Date;
///
/// let date = Date::from_ymd(2024, 6, 15).unwrap();
/// let parsed: Date = "2024-06-15".parse().unwrap();
/// assert_eq!(date, parsed);
///
/// let start = Date::from_ymd(2024, 1, 1).unwrap();
/// let end = Date::from_ymd(2024, 1, 11).unwrap();
/// assert_eq!(end - start, 10);
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Date(NaiveDate);

impl Date {
    /// Creates a Date from year, month, and day components.
    ///
    /// # Returns
    /// `Ok(Date)` if the date is valid, `Err(DateError::InvalidDate)` otherwise.
    ///
    /// # Examples
    ///
    /// ```
    /// use pricer_core::types::time::Date;
    ///
    /// assert!(Date::from_ymd(2024, 2, 29).is_ok());
    /// assert!(Date::from_ymd(2023, 2, 29).is_err());
    /// ```
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self, DateError> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Date)
            .ok_or(DateError::InvalidDate { year, month, day })
    }

    /// Parses a date from ISO 8601 format string (YYYY-MM-DD).
    pub fn parse(s: &str) -> Result<Self, DateError> {
        NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
            .map(Date)
            .map_err(|e| DateError::ParseError(format!("'{}': {}", s, e)))
    }

    /// Returns the underlying NaiveDate.
    pub fn into_inner(self) -> NaiveDate {
        self.0
    }

    /// Returns the year component.
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Returns the month component (1-12).
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// Returns the day component (1-31).
    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// Returns the day of the week.
    pub fn weekday(&self) -> Weekday {
        self.0.weekday()
    }

    /// Returns the date shifted by `days` calendar days (negative moves back).
    pub fn add_days(self, days: i64) -> Self {
        Date(self.0 + Duration::days(days))
    }

    /// Returns `false` on Saturdays and Sundays, `true` otherwise.
    ///
    /// There is no holiday calendar.
    pub fn is_business_day(&self) -> bool {
        !matches!(self.weekday(), Weekday::Sat | Weekday::Sun)
    }

    /// Returns the next business day strictly after this date.
    ///
    /// Friday rolls forward 3 days, Saturday 2 days, any other day 1 day.
    ///
    /// # Examples
    ///
    /// ```
    /// use pricer_core::types::time::Date;
    ///
    /// let fri = Date::from_ymd(2020, 5, 1).unwrap();
    /// let sat = Date::from_ymd(2020, 5, 2).unwrap();
    /// let mon = Date::from_ymd(2020, 5, 4).unwrap();
    ///
    /// assert_eq!(fri.next_business_day(), mon);
    /// assert_eq!(sat.next_business_day(), mon);
    /// assert_eq!(mon.next_business_day(), Date::from_ymd(2020, 5, 5).unwrap());
    /// ```
    pub fn next_business_day(self) -> Self {
        match self.weekday() {
            Weekday::Fri => self.add_days(3),
            Weekday::Sat => self.add_days(2),
            _ => self.add_days(1),
        }
    }

    /// Rolls a weekend date back to the preceding Friday.
    ///
    /// Business days are returned unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use pricer_core::types::time::Date;
    ///
    /// let fri = Date::from_ymd(2020, 5, 1).unwrap();
    /// let sun = Date::from_ymd(2020, 5, 3).unwrap();
    /// let tue = Date::from_ymd(2020, 5, 5).unwrap();
    ///
    /// assert_eq!(sun.prev_business_day(), fri);
    /// assert_eq!(tue.prev_business_day(), tue);
    /// ```
    pub fn prev_business_day(self) -> Self {
        match self.weekday() {
            Weekday::Sat => self.add_days(-1),
            Weekday::Sun => self.add_days(-2),
            _ => self,
        }
    }
}

impl Sub for Date {
    type Output = i64;

    /// Returns the signed number of calendar days between two dates.
    fn sub(self, other: Self) -> i64 {
        (self.0 - other.0).num_days()
    }
}

impl FromStr for Date {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, DateError> {
        Date::parse(s)
    }
}

impl fmt::Display for Date {
    /// Formats the date as ISO 8601 (YYYY-MM-DD).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl From<NaiveDate> for Date {
    fn from(date: NaiveDate) -> Self {
        Date(date)
    }
}

/// Counts business-day steps from `start` up to, but excluding, `end`.
///
/// If `start` is not itself a business day it is first rolled forward to the
/// next one. Returns 0 when `end <= start`.
///
/// # Examples
///
/// ```
/// use pricer_core::types::time::{business_days_between, Date};
///
/// let fri = Date::from_ymd(2020, 5, 1).unwrap();
/// let mon = Date::from_ymd(2020, 5, 4).unwrap();
/// assert_eq!(business_days_between(fri, mon), 1);
/// assert_eq!(business_days_between(mon, fri), 0);
/// ```
pub fn business_days_between(start: Date, end: Date) -> u32 {
    if end <= start {
        return 0;
    }

    let mut current = if start.is_business_day() {
        start
    } else {
        start.next_business_day()
    };

    let mut count = 0;
    while current < end {
        current = current.next_business_day();
        count += 1;
    }
    count
}

/// Calendar year fraction on an Act/365 basis.
///
/// Clamped to 0 when `end <= start`.
pub fn year_fraction(start: Date, end: Date) -> f64 {
    year_fraction_with_basis(start, end, DAYS_IN_YEAR as f64)
}

/// Calendar year fraction `(end - start) / days_in_year`, clamped to 0 when
/// `end <= start`.
pub fn year_fraction_with_basis(start: Date, end: Date, days_in_year: f64) -> f64 {
    if end <= start {
        return 0.0;
    }
    (end - start) as f64 / days_in_year
}

/// Year fraction in business days over the 250-day business year.
pub fn business_year_fraction(start: Date, end: Date) -> f64 {
    business_days_between(start, end) as f64 / BUSINESS_DAYS_IN_YEAR as f64
}

/// Returns `n` consecutive business days, beginning with the first business
/// day strictly after `start`.
///
/// Used to date simulated paths that start from a valuation date.
pub fn business_day_schedule(start: Date, n: usize) -> Vec<Date> {
    let mut dates = Vec::with_capacity(n);
    let mut current = start;
    for _ in 0..n {
        current = current.next_business_day();
        dates.push(current);
    }
    dates
}

/// Day Count Convention (year fraction convention).
///
/// # Variants
/// - `Act365Fixed`: Actual calendar days / 365
/// - `Business250`: Business days / 250, the option-expiry clock
///
/// # Usage
///
/// ```
/// use pricer_core::types::time::{Date, DayCountConvention};
///
/// let start = Date::from_ymd(2020, 5, 1).unwrap();
/// let end = Date::from_ymd(2020, 5, 4).unwrap();
///
/// assert!((DayCountConvention::Business250.year_fraction(start, end) - 0.004).abs() < 1e-12);
/// assert!((DayCountConvention::Act365Fixed.year_fraction(start, end) - 3.0 / 365.0).abs() < 1e-12);
/// ```
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DayCountConvention {
    /// Actual/365 Fixed: actual_days / 365.0
    #[default]
    Act365Fixed,

    /// Business/250: business_days / 250.0
    Business250,
}

impl DayCountConvention {
    /// Returns the standard convention name.
    pub fn name(&self) -> &'static str {
        match self {
            DayCountConvention::Act365Fixed => "ACT/365",
            DayCountConvention::Business250 => "BUS/250",
        }
    }

    /// Year fraction between two dates, clamped to 0 when `end <= start`.
    pub fn year_fraction(&self, start: Date, end: Date) -> f64 {
        match self {
            DayCountConvention::Act365Fixed => year_fraction(start, end),
            DayCountConvention::Business250 => business_year_fraction(start, end),
        }
    }
}

impl FromStr for DayCountConvention {
    type Err = String;

    /// Parses day count convention from string (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().replace(['/', ' '], "").as_str() {
            "ACT365" | "ACTUAL365" | "A365" => Ok(DayCountConvention::Act365Fixed),
            "BUS250" | "BUSINESS250" | "BD250" => Ok(DayCountConvention::Business250),
            _ => Err(format!("Unknown day count convention: {}", s)),
        }
    }
}

impl fmt::Display for DayCountConvention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use super::DayCountConvention;
    use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
    use std::str::FromStr;

    impl Serialize for DayCountConvention {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            serializer.serialize_str(self.name())
        }
    }

    impl<'de> Deserialize<'de> for DayCountConvention {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            let s = String::deserialize(deserializer)?;
            DayCountConvention::from_str(&s).map_err(de::Error::custom)
        }
    }
}
