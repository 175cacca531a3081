//! The solar-to-lunar orchestrator.

use crate::date::{days_in_month, LunarDate};
use crate::error::LunarError;
use crate::jdn::jd_from_date;
use crate::leap::leap_month_offset;
use crate::month11::lunar_month11;
use crate::new_moon::{new_moon_day, LUNATION_EPOCH_JD, SYNODIC_MONTH};

/// Converts a Gregorian calendar date to its lunisolar equivalent.
///
/// `timezone` is the UTC offset in hours applied to every astronomical
/// evaluation; the traditional Vietnamese calendar uses `7.0`. The result
/// is a pure function of the four inputs, so callers may memoize freely.
///
/// The pipeline locates the new moon starting the queried date's lunar
/// month, anchors the lunar year on its two month-11 new moons, and
/// numbers the month by whole lunations from that anchor. Years spanning
/// 13 lunations insert a leap month, which shifts every later month down
/// by one ordinal (see [`leap_month_offset`]).
///
/// # Errors
///
/// Returns [`LunarError::InvalidMonth`] if `month` is not in 1..=12, or
/// [`LunarError::InvalidDay`] if `day` does not exist in the given
/// Gregorian month (February 29 outside leap years included).
///
/// # Example
///
/// ```
/// use amlich_lunar::solar_to_lunar;
///
/// let lunar = solar_to_lunar(1, 1, 2000, 7.0).unwrap();
/// assert_eq!((lunar.day(), lunar.month(), lunar.year()), (25, 11, 1999));
/// ```
pub fn solar_to_lunar(
    day: u32,
    month: u32,
    year: i32,
    timezone: f64,
) -> Result<LunarDate, LunarError> {
    let max_day = days_in_month(year, month)?;
    if !(1..=max_day).contains(&day) {
        return Err(LunarError::InvalidDay {
            day,
            month,
            year,
            max_day,
        });
    }

    let day_number = jd_from_date(i64::from(day), i64::from(month), i64::from(year));
    let k = ((day_number as f64 - LUNATION_EPOCH_JD) / SYNODIC_MONTH).floor() as i64;

    // New moon at or just before the queried date.
    let mut month_start = new_moon_day(k + 1, timezone);
    if month_start > day_number {
        month_start = new_moon_day(k, timezone);
    }

    // a11/b11: the month-11 anchors bracketing the queried lunar year.
    let mut a11 = lunar_month11(year, timezone);
    let mut b11 = a11;
    let mut lunar_year;
    if a11 >= month_start {
        lunar_year = year;
        a11 = lunar_month11(year - 1, timezone);
    } else {
        lunar_year = year + 1;
        b11 = lunar_month11(year + 1, timezone);
    }

    let lunar_day = day_number - month_start + 1;
    let diff = (month_start - a11).div_euclid(29);

    let mut lunar_leap = false;
    let mut lunar_month = diff + 11;
    if b11 - a11 > 365 {
        // 13 lunations: one month is doubled, shifting later ordinals.
        let leap = leap_month_offset(a11, timezone);
        if diff >= leap.offset() {
            lunar_month = diff + 10;
            if diff == leap.offset() {
                lunar_leap = true;
            }
        }
    }
    if lunar_month > 12 {
        lunar_month -= 12;
    }
    if lunar_month >= 11 && diff < 4 {
        // Months 11 and 12 computed against the previous anchor belong
        // to the previous lunar year.
        lunar_year -= 1;
    }

    Ok(LunarDate::new(
        lunar_day as u32,
        lunar_month as u32,
        lunar_year,
        lunar_leap,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tet_2000() {
        let lunar = solar_to_lunar(5, 2, 2000, 7.0).unwrap();
        assert_eq!((lunar.day(), lunar.month(), lunar.year()), (1, 1, 2000));
        assert!(!lunar.is_leap_month());
    }

    #[test]
    fn rejects_invalid_month() {
        assert_eq!(
            solar_to_lunar(1, 13, 2000, 7.0).unwrap_err(),
            LunarError::InvalidMonth { month: 13 }
        );
    }

    #[test]
    fn rejects_feb_29_in_common_year() {
        assert_eq!(
            solar_to_lunar(29, 2, 2023, 7.0).unwrap_err(),
            LunarError::InvalidDay {
                day: 29,
                month: 2,
                year: 2023,
                max_day: 28,
            }
        );
    }

    #[test]
    fn accepts_feb_29_in_leap_year() {
        assert!(solar_to_lunar(29, 2, 2000, 7.0).is_ok());
    }

    #[test]
    fn rejects_day_zero() {
        assert_eq!(
            solar_to_lunar(0, 1, 2000, 7.0).unwrap_err(),
            LunarError::InvalidDay {
                day: 0,
                month: 1,
                year: 2000,
                max_day: 31,
            }
        );
    }

    #[test]
    fn deterministic() {
        let a = solar_to_lunar(1, 6, 2014, 7.0).unwrap();
        let b = solar_to_lunar(1, 6, 2014, 7.0).unwrap();
        assert_eq!(a, b);
    }
}
