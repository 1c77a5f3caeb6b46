//! The resolved liturgical position of an instant.

use chrono::NaiveDateTime;
use office_season::{CycleYear, Season, Week};
use serde::Serialize;

use crate::hour::CanonicalHour;

/// Everything that is liturgically true at one instant.
///
/// Built fresh for every query and never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedMoment {
    pub instant: NaiveDateTime,
    pub cycle_year: CycleYear,
    pub season: Season,
    pub week_label: Week,
    pub day_label: String,
    pub canonical_hour: CanonicalHour,
}
