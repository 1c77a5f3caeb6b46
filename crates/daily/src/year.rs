//! One civil year's calendar and season table.

use chrono::NaiveDateTime;
use office_calendar::FeastCalendar;
use office_season::{SeasonTable, cycle_year};

use crate::day::day_label;
use crate::error::OfficeError;
use crate::hour::nearest_hour;
use crate::moment::ResolvedMoment;

/// The feast calendar of a year together with its season table.
///
/// Read-only once built; shared between threads behind an `Arc`.
#[derive(Debug, Clone, PartialEq)]
pub struct LiturgicalYear {
    calendar: FeastCalendar,
    seasons: SeasonTable,
}

impl LiturgicalYear {
    /// Builds the calendar and season table for `year`.
    pub fn build(year: i32) -> Result<Self, OfficeError> {
        let calendar = FeastCalendar::build(year)?;
        let seasons = SeasonTable::new(&calendar)?;
        Ok(Self { calendar, seasons })
    }

    pub fn year(&self) -> i32 {
        self.calendar.year()
    }

    pub fn calendar(&self) -> &FeastCalendar {
        &self.calendar
    }

    pub fn seasons(&self) -> &SeasonTable {
        &self.seasons
    }

    /// Resolves an instant inside this year.
    ///
    /// # Errors
    ///
    /// Returns [`OfficeError::Season`] wrapping a year mismatch when
    /// `instant` belongs to another civil year.
    pub fn resolve(&self, instant: NaiveDateTime) -> Result<ResolvedMoment, OfficeError> {
        let (season, week_label) = self.seasons.season_and_week(instant)?;
        Ok(ResolvedMoment {
            instant,
            cycle_year: cycle_year(instant.date(), self.seasons.advent_sunday()),
            season,
            week_label,
            day_label: day_label(instant, &self.calendar),
            canonical_hour: nearest_hour(instant.time()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use office_season::SeasonError;

    #[test]
    fn other_year_is_rejected() {
        let year = LiturgicalYear::build(2024).unwrap();
        let instant = NaiveDate::from_ymd_opt(2025, 1, 1)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap();
        assert!(matches!(
            year.resolve(instant),
            Err(OfficeError::Season(SeasonError::YearMismatch { year: 2024, .. }))
        ));
    }

    #[test]
    fn accessors() {
        let year = LiturgicalYear::build(2024).unwrap();
        assert_eq!(year.year(), 2024);
        assert_eq!(year.calendar().year(), 2024);
        assert_eq!(year.seasons().first_proper(), 4);
    }
}
