//! Error types for the amlich-lunar crate.

/// Error type for all fallible operations in the amlich-lunar crate.
///
/// Only the input-validating entry point [`solar_to_lunar`] and the
/// Gregorian helpers can fail; the astronomical pipeline itself is total.
///
/// [`solar_to_lunar`]: crate::solar_to_lunar
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LunarError {
    /// Returned when a month number is outside the valid range 1..=12.
    #[error("invalid month: {month} (must be 1..=12)")]
    InvalidMonth {
        /// The invalid month number that was provided.
        month: u32,
    },

    /// Returned when a day number exceeds the length of the given
    /// Gregorian month.
    #[error("invalid day: {day} for month {month} of {year} (max {max_day})")]
    InvalidDay {
        /// The invalid day number that was provided.
        day: u32,
        /// The month for which the day is invalid.
        month: u32,
        /// The year, which decides the length of February.
        year: i32,
        /// The maximum valid day for the given month and year.
        max_day: u32,
    },
}
