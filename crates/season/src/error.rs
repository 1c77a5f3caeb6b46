//! Error types for the office-season crate.

use chrono::NaiveDate;
use office_calendar::CalendarError;

/// Error type for building and querying a [`SeasonTable`](crate::SeasonTable).
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SeasonError {
    /// An observance the table is anchored on is not kept this year.
    #[error("missing anchor observance: {name}")]
    MissingAnchor {
        /// Symbolic name of the missing observance.
        name: String,
    },

    /// Two consecutive boundaries are not strictly increasing.
    #[error("boundary {next} does not follow {previous}")]
    BoundaryOrder {
        /// The earlier boundary in table order.
        previous: NaiveDate,
        /// The boundary that should have been later.
        next: NaiveDate,
    },

    /// The queried date is outside the year the table was built for.
    #[error("date {date} is outside liturgical table year {year}")]
    YearMismatch {
        /// The queried date.
        date: NaiveDate,
        /// The table's year.
        year: i32,
    },

    /// The underlying feast calendar rejected a lookup.
    #[error(transparent)]
    Calendar(#[from] CalendarError),
}
