//! Month-11 anchor: the new moon starting the month that contains the
//! winter solstice.

use crate::jdn::jd_from_date;
use crate::new_moon::{new_moon_day, LUNATION_EPOCH_JDN, SYNODIC_MONTH};
use crate::sun::sun_longitude_sector;

/// Returns the Julian day number of the new moon that starts lunar
/// month 11 of the given solar year.
///
/// Estimates the lunation index from December 31 of the year, then steps
/// back one lunation if the sun has already advanced to sector 9 or
/// beyond (past the December solstice) at that new moon. The returned
/// new moon therefore always precedes the winter-solstice month, which
/// is the fixed anchor the rest of the lunar year is numbered from.
///
/// # Example
///
/// ```
/// use amlich_lunar::lunar_month11;
///
/// // Month 11 of lunar year 1999 began on December 8, 1999 (UTC+7).
/// assert_eq!(lunar_month11(1999, 7.0), 2451521);
/// ```
pub fn lunar_month11(year: i32, timezone: f64) -> i64 {
    let off = jd_from_date(31, 12, i64::from(year)) - LUNATION_EPOCH_JDN;
    let k = (off as f64 / SYNODIC_MONTH).floor() as i64;
    let nm = new_moon_day(k, timezone);
    if sun_longitude_sector(nm, timezone) >= 9 {
        new_moon_day(k - 1, timezone)
    } else {
        nm
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_anchors() {
        assert_eq!(lunar_month11(1999, 7.0), 2451521); // 1999-12-08
        assert_eq!(lunar_month11(2000, 7.0), 2451875); // 2000-11-26
        assert_eq!(lunar_month11(2019, 7.0), 2458814); // 2019-11-26
        assert_eq!(lunar_month11(2020, 7.0), 2459198); // 2020-12-15
        assert_eq!(lunar_month11(2023, 7.0), 2460292); // 2023-12-13
        assert_eq!(lunar_month11(2024, 7.0), 2460646); // 2024-12-01
        assert_eq!(lunar_month11(1900, 7.0), 2415376);
    }

    #[test]
    fn anchor_falls_in_november_or_december() {
        for year in 1900..=2100 {
            let a11 = lunar_month11(year, 7.0);
            let lo = jd_from_date(1, 11, i64::from(year));
            let hi = jd_from_date(31, 12, i64::from(year));
            assert!(
                (lo..=hi).contains(&a11),
                "month 11 anchor of {year} at jdn {a11} outside Nov..Dec"
            );
        }
    }

    #[test]
    fn anchor_precedes_solstice_sector() {
        // The anchoring new moon must not already lie past the December
        // solstice.
        for year in 1950..=2050 {
            let a11 = lunar_month11(year, 7.0);
            assert!(
                sun_longitude_sector(a11, 7.0) < 9,
                "anchor of {year} already in sector >= 9"
            );
        }
    }

    #[test]
    fn consecutive_anchors_span_a_lunar_year() {
        // 12 or 13 lunations between successive month-11 anchors.
        for year in 1950..=2050 {
            let span = lunar_month11(year + 1, 7.0) - lunar_month11(year, 7.0);
            assert!(
                (353..=385).contains(&span),
                "anchor span {span} days between {year} and {}",
                year + 1
            );
        }
    }
}
