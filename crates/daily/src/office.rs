//! The Daily Office entry points.

use std::sync::Arc;

use chrono::{Datelike, NaiveDateTime, TimeDelta};
use office_calendar::CalendarError;

use crate::cache::CalendarCache;
use crate::error::OfficeError;
use crate::moment::ResolvedMoment;
use crate::year::LiturgicalYear;

/// Resolves instants against memoized liturgical years.
///
/// # Example
///
/// ```ignore
/// let office = DailyOffice::new();
/// let now = office.resolve(instant)?;
/// println!("{} / {} / {}", now.season, now.week_label, now.day_label);
/// ```
#[derive(Debug, Default)]
pub struct DailyOffice {
    cache: CalendarCache,
}

impl DailyOffice {
    pub fn new() -> Self {
        Self::default()
    }

    /// The built year, from the memo when available.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn year(&self, year: i32) -> Result<Arc<LiturgicalYear>, OfficeError> {
        self.cache.get_or_build(year)
    }

    /// Resolves one instant.
    pub fn resolve(&self, instant: NaiveDateTime) -> Result<ResolvedMoment, OfficeError> {
        self.year(instant.year())?.resolve(instant)
    }

    /// Resolves the same time of day on each day from `days_before` days
    /// before `instant` to `days_after` days after it, in date order.
    ///
    /// The window may cross into neighbouring civil years.
    pub fn resolve_span(
        &self,
        instant: NaiveDateTime,
        days_before: u32,
        days_after: u32,
    ) -> Result<Vec<ResolvedMoment>, OfficeError> {
        (-i64::from(days_before)..=i64::from(days_after))
            .map(|offset| {
                let day = instant
                    .checked_add_signed(TimeDelta::days(offset))
                    .ok_or(CalendarError::InvalidYear {
                        year: instant.year(),
                    })?;
                self.resolve(day)
            })
            .collect()
    }

    /// Number of years built so far.
    pub fn cached_years(&self) -> usize {
        self.cache.len()
    }
}

/// Resolves one instant, building its year on demand.
pub fn resolve(instant: NaiveDateTime) -> Result<ResolvedMoment, OfficeError> {
    LiturgicalYear::build(instant.year())?.resolve(instant)
}
