//! Error types for the office-calendar crate.

use chrono::NaiveDate;

/// Error type for all fallible operations in the office-calendar crate.
///
/// Every failure is detected while a year's calendar is being built or
/// while a caller looks up a symbolic name; a constructed
/// [`FeastCalendar`](crate::FeastCalendar) never fails on a date lookup.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalendarError {
    /// Returned when a year's dates fall outside the range `chrono` can represent.
    #[error("invalid year: {year} (outside the representable date range)")]
    InvalidYear {
        /// The year that could not be represented.
        year: i32,
    },

    /// Returned when a symbolic name is not part of the observance vocabulary.
    #[error("unknown symbolic name: {name:?}")]
    UnknownSymbolicName {
        /// The name that was looked up.
        name: String,
    },

    /// Returned when two observances of equal rank land on the same date.
    #[error("date collision on {date}: {first} and {second} share the same rank")]
    DateCollision {
        /// The shared date.
        date: NaiveDate,
        /// Symbolic name of the observance inserted first.
        first: String,
        /// Symbolic name of the observance inserted second.
        second: String,
    },

    /// Returned when one symbolic name is produced twice for a year.
    #[error("duplicate symbolic name: {name}")]
    DuplicateSymbolicName {
        /// The repeated name.
        name: String,
    },
}
