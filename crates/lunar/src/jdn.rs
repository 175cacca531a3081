//! Gregorian/Julian calendar date to Julian day number.

/// Julian day number of October 15, 1582, the first day of the Gregorian
/// calendar. Dates whose JDN falls below this threshold are interpreted
/// in the proleptic Julian calendar.
pub const GREGORIAN_REFORM_JDN: i64 = 2_299_161;

/// Converts a calendar date to its Julian day number.
///
/// Uses the standard civil-calendar formula, falling back to the
/// Julian-calendar variant for dates before the Gregorian reform of
/// October 1582 (threshold [`GREGORIAN_REFORM_JDN`]).
///
/// The arithmetic is deliberately permissive: any `(day, month, year)`
/// triple produces a JDN, including calendrically invalid combinations
/// such as February 30. Validity checking is the caller's concern (see
/// [`solar_to_lunar`](crate::solar_to_lunar), which validates before
/// calling in here). Chronological order is preserved: earlier valid
/// dates always map to smaller JDNs.
///
/// # Example
///
/// ```
/// use amlich_lunar::jd_from_date;
///
/// assert_eq!(jd_from_date(1, 1, 2000), 2451545);
/// ```
pub fn jd_from_date(day: i64, month: i64, year: i64) -> i64 {
    let a = (14 - month).div_euclid(12);
    let y = year + 4800 - a;
    let m = month + 12 * a - 3;

    let jd = day + (153 * m + 2).div_euclid(5) + 365 * y + y.div_euclid(4) - y.div_euclid(100)
        + y.div_euclid(400)
        - 32045;

    if jd < GREGORIAN_REFORM_JDN {
        // Before the reform: proleptic Julian calendar.
        day + (153 * m + 2).div_euclid(5) + 365 * y + y.div_euclid(4) - 32083
    } else {
        jd
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::date::days_in_month;

    #[test]
    fn epoch_2000() {
        assert_eq!(jd_from_date(1, 1, 2000), 2451545);
    }

    #[test]
    fn unix_epoch() {
        assert_eq!(jd_from_date(1, 1, 1970), 2440588);
    }

    #[test]
    fn gregorian_reform_boundary() {
        // Oct 4, 1582 (Julian) is immediately followed by Oct 15, 1582
        // (Gregorian); the continuous day count differs by exactly 1.
        assert_eq!(jd_from_date(4, 10, 1582), 2299160);
        assert_eq!(jd_from_date(15, 10, 1582), GREGORIAN_REFORM_JDN);
        assert_eq!(
            jd_from_date(15, 10, 1582) - jd_from_date(4, 10, 1582),
            1
        );
    }

    #[test]
    fn julian_branch_before_reform() {
        // Jan 1, 1 AD in the proleptic Julian calendar.
        assert_eq!(jd_from_date(1, 1, 1), 1721424);
    }

    #[test]
    fn permissive_for_invalid_dates() {
        // Feb 30 is not rejected; the formula lands on the same JDN as
        // Mar 1 of a leap year.
        assert_eq!(jd_from_date(30, 2, 2000), jd_from_date(1, 3, 2000));
    }

    #[test]
    fn monotonic_over_consecutive_days() {
        let mut prev = jd_from_date(31, 12, 1989);
        for year in 1990..=2010 {
            for month in 1..=12u32 {
                for day in 1..=days_in_month(year, month).unwrap() {
                    let jd = jd_from_date(day as i64, month as i64, year as i64);
                    assert_eq!(
                        jd,
                        prev + 1,
                        "JDN not contiguous at {year}-{month:02}-{day:02}"
                    );
                    prev = jd;
                }
            }
        }
    }

    #[test]
    fn negative_year() {
        // Astronomical year -1000 still produces a finite, ordered JDN.
        let early = jd_from_date(1, 1, -1000);
        let later = jd_from_date(2, 1, -1000);
        assert_eq!(later - early, 1);
        assert!(early < jd_from_date(1, 1, 1));
    }
}
