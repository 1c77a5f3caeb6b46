//! Error types for the office-daily crate.

use office_calendar::CalendarError;
use office_season::SeasonError;

/// Error type for resolving an instant.
///
/// Every failure originates while a year is being built; a year that
/// builds resolves every instant inside it.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum OfficeError {
    #[error("calendar: {0}")]
    Calendar(#[from] CalendarError),

    #[error("season table: {0}")]
    Season(#[from] SeasonError),
}
