//! First kept Proper of the season after Pentecost.

use office_calendar::{FeastCalendar, names};

use crate::error::SeasonError;

/// Highest first Proper; it always falls after Trinity Sunday.
pub const DEFAULT_FIRST_PROPER: u8 = 8;

/// Number of the first Proper kept in the calendar's year.
///
/// Scans Propers 3 through 7 and returns the first available one,
/// or [`DEFAULT_FIRST_PROPER`] when none of them is kept.
pub fn first_proper(calendar: &FeastCalendar) -> Result<u8, SeasonError> {
    for n in names::FIRST_PROPER..DEFAULT_FIRST_PROPER {
        if calendar.by_name(&names::proper(n))?.is_available() {
            return Ok(n);
        }
    }
    Ok(DEFAULT_FIRST_PROPER)
}
