//! Leap-month offset search within a 13-lunation lunar year.

use tracing::warn;

use crate::new_moon::{new_moon_day, LUNATION_EPOCH_JD, SYNODIC_MONTH};
use crate::sun::sun_longitude_sector;

/// Iteration cap for the leap-month search. A safety bound against
/// non-convergence of the sector comparison, not an astronomical limit.
const MAX_SEARCH_STEPS: i64 = 14;

/// Result of a leap-month search.
///
/// `offset` is the ordinal of the doubled month counted from the
/// month-11 anchor. When the search exhausts its iteration cap without
/// two successive new moons sharing a sun sector, the last computed
/// offset is still returned but flagged [`ambiguous`](Self::is_ambiguous),
/// indicating a boundary case of the astronomical approximation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LeapMonth {
    offset: i64,
    ambiguous: bool,
}

impl LeapMonth {
    /// Ordinal offset (1..=13) of the leap month relative to month 11.
    pub fn offset(self) -> i64 {
        self.offset
    }

    /// Returns `true` if the search hit its iteration cap without
    /// converging.
    pub fn is_ambiguous(self) -> bool {
        self.ambiguous
    }
}

/// Locates the leap month of the lunar year anchored at `a11`.
///
/// A lunar year with 13 lunations doubles the first month whose span
/// contains no sun-sector transition (no major solar term). The search
/// walks successive new moons from the anchor, comparing the sun sector
/// at each month start with the previous one; the first repeat marks
/// the leap month.
///
/// Only meaningful when the year actually contains 13 lunations, i.e.
/// when its two month-11 anchors lie more than 365 days apart.
///
/// # Example
///
/// ```
/// use amlich_lunar::{leap_month_offset, lunar_month11};
///
/// // Lunar year 2020 doubled its 4th month: offset 6 from month 11.
/// let a11 = lunar_month11(2019, 7.0);
/// let leap = leap_month_offset(a11, 7.0);
/// assert_eq!(leap.offset(), 6);
/// assert!(!leap.is_ambiguous());
/// ```
pub fn leap_month_offset(a11: i64, timezone: f64) -> LeapMonth {
    let k = ((a11 as f64 - LUNATION_EPOCH_JD) / SYNODIC_MONTH + 0.5).floor() as i64;

    let mut i = 1;
    let mut arc = sun_longitude_sector(new_moon_day(k + i, timezone), timezone);
    let mut last;
    loop {
        last = arc;
        i += 1;
        arc = sun_longitude_sector(new_moon_day(k + i, timezone), timezone);
        if arc == last || i >= MAX_SEARCH_STEPS {
            break;
        }
    }

    let ambiguous = arc != last;
    if ambiguous {
        warn!(
            a11,
            offset = i - 1,
            "leap month search exhausted {MAX_SEARCH_STEPS} steps without matching sun sectors"
        );
    }

    LeapMonth {
        offset: i - 1,
        ambiguous,
    }
}
