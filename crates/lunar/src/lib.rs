//! # amlich-lunar
//!
//! Pure astronomical conversion from Gregorian dates to the lunisolar
//! calendar (Vietnamese/Chinese style month numbering).
//!
//! The conversion is a pipeline of deterministic, stateless functions:
//! Julian day arithmetic, a truncated new-moon ephemeris series, and the
//! apparent solar longitude quantized into twelve 30-degree sectors. The
//! month containing the winter solstice is always month 11, which anchors
//! the numbering of every other month; a year spanning 13 lunations gets
//! one of its months doubled as a leap month.
//!
//! ## Quick Start
//!
//! ```
//! use amlich_lunar::solar_to_lunar;
//!
//! // Tet 2024 (lunar new year) fell on February 10, UTC+7.
//! let lunar = solar_to_lunar(10, 2, 2024, 7.0).unwrap();
//! assert_eq!((lunar.day(), lunar.month(), lunar.year()), (1, 1, 2024));
//! assert!(!lunar.is_leap_month());
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `jdn` | Gregorian/Julian calendar date to Julian day number |
//! | `sun` | Apparent solar longitude, quantized to 12 sectors |
//! | `new_moon` | New-moon instant from a lunation index |
//! | `month11` | Month-11 anchor (new moon preceding the winter solstice) |
//! | `leap` | Leap-month offset search within a 13-lunation year |
//! | `convert` | The solar-to-lunar orchestrator |
//! | `date` | Lunar date result type and Gregorian month helpers |
//! | `error` | Error types |
//!
//! Every function is a pure function of its arguments (plus the caller's
//! UTC offset in hours), so results are safe to share across threads and
//! to memoize indefinitely.

mod convert;
mod date;
mod error;
mod jdn;
mod leap;
mod month11;
mod new_moon;
mod sun;

pub use convert::solar_to_lunar;
pub use date::{days_in_month, is_gregorian_leap_year, LunarDate};
pub use error::LunarError;
pub use jdn::{jd_from_date, GREGORIAN_REFORM_JDN};
pub use leap::{leap_month_offset, LeapMonth};
pub use month11::lunar_month11;
pub use new_moon::{new_moon_day, SYNODIC_MONTH};
pub use sun::sun_longitude_sector;
