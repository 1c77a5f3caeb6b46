//! Per-year season and week classification.
//!
//! A [`SeasonTable`] holds two sorted boundary lists for one civil year.
//! Each boundary opens a label that runs until the next boundary, and
//! both lists start on January 1, so every date of the year falls under
//! exactly one season and one week. A short list of evening rules is
//! consulted before the boundaries.

use chrono::{Datelike, NaiveDate, NaiveDateTime};
use office_calendar::{FeastCalendar, names, shift, ymd};
use tracing::debug;

use crate::error::SeasonError;
use crate::evening::is_evening;
use crate::proper::first_proper;
use crate::season::{Season, Week};

/// A label taking effect on `start`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Boundary<L> {
    pub start: NaiveDate,
    pub label: L,
}

/// Evening of `date` belongs to the next day's season and week.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct EveningRule {
    date: NaiveDate,
    season: Season,
    week: Week,
}

/// Season and week boundaries of one civil year.
#[derive(Debug, Clone, PartialEq)]
pub struct SeasonTable {
    year: i32,
    first_proper: u8,
    advent_sunday: NaiveDate,
    evening_rules: Vec<EveningRule>,
    seasons: Vec<Boundary<Season>>,
    weeks: Vec<Boundary<Week>>,
}

impl SeasonTable {
    /// Builds the table for the calendar's year.
    ///
    /// # Errors
    ///
    /// - [`SeasonError::MissingAnchor`] if an anchor observance is unavailable.
    /// - [`SeasonError::BoundaryOrder`] if boundaries are not strictly increasing.
    /// - [`SeasonError::Calendar`] if a date falls outside the representable range.
    #[tracing::instrument(level = "debug", skip(calendar), fields(year = calendar.year()))]
    pub fn new(calendar: &FeastCalendar) -> Result<Self, SeasonError> {
        let year = calendar.year();
        let first_proper = first_proper(calendar)?;
        let anchor = |name: &str| -> Result<NaiveDate, SeasonError> {
            calendar.date_of(name)?.ok_or_else(|| SeasonError::MissingAnchor {
                name: name.to_string(),
            })
        };

        let new_year = ymd(year, 1, 1)?;
        let epiphany = anchor(names::THE_EPIPHANY)?;
        let ash_wednesday = anchor(names::ASH_WEDNESDAY)?;
        let easter = anchor(names::EASTER_DAY)?;
        let trinity = anchor(names::TRINITY_SUNDAY)?;
        let advent_sunday = anchor(names::ADVENT_SUNDAYS[0])?;
        let christmas = anchor(names::CHRISTMAS_DAY)?;

        let evening_rules = vec![
            EveningRule {
                date: anchor(names::CHRISTMAS_EVE)?,
                season: Season::Christmas,
                week: Week::ChristmasAndFollowing,
            },
            EveningRule {
                date: anchor(names::EVE_OF_EPIPHANY)?,
                season: Season::Epiphany,
                week: Week::EpiphanyAndFollowing,
            },
        ];

        let seasons = vec![
            boundary(new_year, Season::Christmas),
            boundary(epiphany, Season::Epiphany),
            boundary(ash_wednesday, Season::Lent),
            boundary(easter, Season::Easter),
            boundary(shift(trinity, 1)?, Season::AfterPentecost),
            boundary(advent_sunday, Season::Advent),
            boundary(christmas, Season::Christmas),
        ];
        check_order(&seasons)?;

        let mut weeks = vec![
            boundary(new_year, Week::ChristmasAndFollowing),
            boundary(epiphany, Week::EpiphanyAndFollowing),
        ];
        for (k, name) in names::EPIPHANY_SUNDAYS.iter().enumerate() {
            // Unavailable Epiphany Sundays are a tail; the last kept week runs on.
            if let Some(date) = calendar.date_of(*name)? {
                weeks.push(boundary(date, Week::Epiphany(ordinal(k))));
            }
        }
        weeks.push(boundary(anchor(names::LAST_SUNDAY_AFTER_EPIPHANY)?, Week::LastEpiphany));
        for (k, name) in names::LENT_SUNDAYS.iter().enumerate() {
            weeks.push(boundary(anchor(*name)?, Week::Lent(ordinal(k))));
        }
        weeks.push(boundary(anchor(names::PALM_SUNDAY)?, Week::HolyWeek));
        weeks.push(boundary(easter, Week::EasterWeek));
        for (k, name) in names::EASTER_SUNDAYS.iter().enumerate() {
            weeks.push(boundary(anchor(*name)?, Week::Easter(ordinal(k) + 1)));
        }
        weeks.push(boundary(anchor(names::WHITSUNDAY)?, Week::Proper(first_proper - 2)));
        weeks.push(boundary(trinity, Week::Proper(first_proper - 1)));
        for n in first_proper..=names::LAST_PROPER {
            weeks.push(boundary(anchor(names::proper(n).as_str())?, Week::Proper(n)));
        }
        for (k, name) in names::ADVENT_SUNDAYS.iter().enumerate() {
            weeks.push(boundary(anchor(*name)?, Week::Advent(ordinal(k))));
        }
        weeks.push(boundary(christmas, Week::ChristmasAndFollowing));
        check_order(&weeks)?;

        debug!(first_proper, %advent_sunday, weeks = weeks.len(), "season table built");
        Ok(Self {
            year,
            first_proper,
            advent_sunday,
            evening_rules,
            seasons,
            weeks,
        })
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// Number of the first Proper kept this year.
    pub fn first_proper(&self) -> u8 {
        self.first_proper
    }

    /// First Sunday of Advent, the lectionary cycle pivot.
    pub fn advent_sunday(&self) -> NaiveDate {
        self.advent_sunday
    }

    pub fn season_boundaries(&self) -> &[Boundary<Season>] {
        &self.seasons
    }

    pub fn week_boundaries(&self) -> &[Boundary<Week>] {
        &self.weeks
    }

    /// Season and week of `instant`.
    ///
    /// # Errors
    ///
    /// Returns [`SeasonError::YearMismatch`] if `instant` is not in this table's year.
    pub fn season_and_week(&self, instant: NaiveDateTime) -> Result<(Season, Week), SeasonError> {
        let date = instant.date();
        if date.year() != self.year {
            return Err(SeasonError::YearMismatch {
                date,
                year: self.year,
            });
        }
        if is_evening(instant.time()) {
            if let Some(rule) = self.evening_rules.iter().find(|r| r.date == date) {
                return Ok((rule.season, rule.week));
            }
        }
        Ok((label_on(&self.seasons, date), label_on(&self.weeks, date)))
    }

    /// Season of a date, ignoring the evening rules.
    pub fn season_on(&self, date: NaiveDate) -> Option<Season> {
        (date.year() == self.year).then(|| label_on(&self.seasons, date))
    }

    /// Week of a date, ignoring the evening rules.
    pub fn week_on(&self, date: NaiveDate) -> Option<Week> {
        (date.year() == self.year).then(|| label_on(&self.weeks, date))
    }
}

/// Builds the calendar's table and classifies one instant.
pub fn season_and_week(
    instant: NaiveDateTime,
    calendar: &FeastCalendar,
) -> Result<(Season, Week), SeasonError> {
    SeasonTable::new(calendar)?.season_and_week(instant)
}

fn boundary<L>(start: NaiveDate, label: L) -> Boundary<L> {
    Boundary { start, label }
}

fn ordinal(index: usize) -> u8 {
    // Indices come from fixed arrays of at most eight names.
    index as u8 + 1
}

fn check_order<L>(boundaries: &[Boundary<L>]) -> Result<(), SeasonError> {
    for pair in boundaries.windows(2) {
        if pair[0].start >= pair[1].start {
            return Err(SeasonError::BoundaryOrder {
                previous: pair[0].start,
                next: pair[1].start,
            });
        }
    }
    Ok(())
}

/// Label of the last boundary at or before `date`.
///
/// Callers guarantee `date` is in the table's year, and every list
/// opens on January 1, so the partition point is at least one.
fn label_on<L: Copy>(boundaries: &[Boundary<L>], date: NaiveDate) -> L {
    let idx = boundaries.partition_point(|b| b.start <= date);
    boundaries[idx.saturating_sub(1)].label
}
