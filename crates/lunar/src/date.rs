//! Lunar date result type and Gregorian month helpers.

use std::fmt;

use crate::error::LunarError;

/// Number of days in each Gregorian month of a common year (index 0
/// unused, index 1 = January, ..., index 12 = December).
pub(crate) const DAYS_PER_MONTH: [u32; 13] = [0, 31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Determines if `year` is a leap year in the Gregorian calendar.
pub fn is_gregorian_leap_year(year: i32) -> bool {
    year % 4 == 0 && year % 100 != 0 || year % 400 == 0
}

/// Returns the number of days in the given Gregorian month.
///
/// # Errors
///
/// Returns [`LunarError::InvalidMonth`] if `month` is not in 1..=12.
pub fn days_in_month(year: i32, month: u32) -> Result<u32, LunarError> {
    if !(1..=12).contains(&month) {
        return Err(LunarError::InvalidMonth { month });
    }
    let base = DAYS_PER_MONTH[month as usize];
    if month == 2 && is_gregorian_leap_year(year) {
        Ok(base + 1)
    } else {
        Ok(base)
    }
}

/// A date in the lunisolar calendar.
///
/// Produced by [`solar_to_lunar`](crate::solar_to_lunar). `day` is the
/// 1-based offset from the month's new moon (1..=30), `month` cycles
/// 1..=12 with at most one month per lunar year repeated as a leap
/// month, and `year` may differ from the Gregorian year near the lunar
/// new year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LunarDate {
    day: u32,
    month: u32,
    year: i32,
    leap: bool,
}

impl LunarDate {
    pub(crate) fn new(day: u32, month: u32, year: i32, leap: bool) -> Self {
        Self {
            day,
            month,
            year,
            leap,
        }
    }

    /// Returns the lunar day (1..=30).
    pub fn day(self) -> u32 {
        self.day
    }

    /// Returns the lunar month (1..=12).
    pub fn month(self) -> u32 {
        self.month
    }

    /// Returns the lunar year.
    pub fn year(self) -> i32 {
        self.year
    }

    /// Returns `true` if the date falls in a leap month.
    pub fn is_leap_month(self) -> bool {
        self.leap
    }

    /// Returns the short label a calendar grid shows beneath the
    /// Gregorian day number: `"day/month"` on the first day of a lunar
    /// month, the bare day otherwise.
    ///
    /// # Example
    ///
    /// ```
    /// use amlich_lunar::solar_to_lunar;
    ///
    /// let first = solar_to_lunar(10, 2, 2024, 7.0).unwrap();
    /// assert_eq!(first.label(), "1/1");
    ///
    /// let mid = solar_to_lunar(24, 2, 2024, 7.0).unwrap();
    /// assert_eq!(mid.label(), "15");
    /// ```
    pub fn label(self) -> String {
        if self.day == 1 {
            format!("{}/{}", self.day, self.month)
        } else {
            format!("{}", self.day)
        }
    }
}

impl fmt::Display for LunarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.leap {
            write!(f, "{}/{} (leap)/{}", self.day, self.month, self.year)
        } else {
            write!(f, "{}/{}/{}", self.day, self.month, self.year)
        }
    }
}
