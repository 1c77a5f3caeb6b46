//! The per-year feast calendar with its date and name indices.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use tracing::debug;

use crate::easter::easter;
use crate::error::CalendarError;
use crate::fixed::fixed_feasts;
use crate::moveable::moveable_feasts;
use crate::observance::{Observance, Rank, Slot};

/// A lookup key into a [`FeastCalendar`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup<'a> {
    ByDate(NaiveDate),
    BySymbolicName(&'a str),
}

/// Every observance of one civil year, indexed by date and by name.
///
/// Both indices are built together in [`FeastCalendar::build`] and never
/// change afterwards. The name index covers the whole vocabulary,
/// including slots that are [`Slot::Unavailable`] this year. The date
/// index holds available observances only, ordered by descending
/// [`Rank`](crate::Rank); the first entry is the principal observance.
#[derive(Debug, Clone, PartialEq)]
pub struct FeastCalendar {
    year: i32,
    easter: NaiveDate,
    slots: Vec<Slot>,
    by_name: BTreeMap<String, usize>,
    by_date: BTreeMap<NaiveDate, Vec<usize>>,
}

impl FeastCalendar {
    /// Builds the calendar for `year`.
    ///
    /// # Errors
    ///
    /// - [`CalendarError::InvalidYear`] if any date of the year is unrepresentable.
    /// - [`CalendarError::DuplicateSymbolicName`] if a name is produced twice.
    /// - [`CalendarError::DateCollision`] if two observances of equal rank share a date.
    #[tracing::instrument(level = "debug")]
    pub fn build(year: i32) -> Result<Self, CalendarError> {
        let easter = easter(year)?;
        let mut slots = fixed_feasts(year)?;
        slots.extend(moveable_feasts(year, easter)?);

        let mut by_name = BTreeMap::new();
        let mut by_date: BTreeMap<NaiveDate, Vec<usize>> = BTreeMap::new();
        for (idx, slot) in slots.iter().enumerate() {
            if by_name.insert(slot.symbolic_name().to_string(), idx).is_some() {
                return Err(CalendarError::DuplicateSymbolicName {
                    name: slot.symbolic_name().to_string(),
                });
            }
            match slot {
                Slot::Available(observance) => by_date.entry(observance.date()).or_default().push(idx),
                Slot::Unavailable { symbolic_name, nominal_date } => {
                    debug!(name = %symbolic_name, %nominal_date, "slot unavailable this year");
                }
            }
        }

        for (date, indices) in &mut by_date {
            indices.sort_by_key(|&idx| std::cmp::Reverse(rank_of(&slots, idx)));
            for pair in indices.windows(2) {
                let (first, second) = (&slots[pair[0]], &slots[pair[1]]);
                if rank_of(&slots, pair[0]) == rank_of(&slots, pair[1]) {
                    return Err(CalendarError::DateCollision {
                        date: *date,
                        first: first.symbolic_name().to_string(),
                        second: second.symbolic_name().to_string(),
                    });
                }
                debug!(
                    %date,
                    principal = first.symbolic_name(),
                    superseded = second.symbolic_name(),
                    "observance superseded by rank"
                );
            }
        }

        debug!(%easter, observances = slots.len(), "calendar built");
        Ok(Self {
            year,
            easter,
            slots,
            by_name,
            by_date,
        })
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// Easter Day of this calendar's year.
    pub fn easter(&self) -> NaiveDate {
        self.easter
    }

    /// The principal observance on `date`, if any.
    pub fn by_date(&self, date: NaiveDate) -> Option<&Observance> {
        self.observances_on(date).next()
    }

    /// All observances on `date`, highest rank first.
    pub fn observances_on(&self, date: NaiveDate) -> impl Iterator<Item = &Observance> {
        self.by_date
            .get(&date)
            .into_iter()
            .flatten()
            .filter_map(|&idx| self.slots[idx].observance())
    }

    /// The highest-ranked observance on `date` that is not an eve.
    pub fn feast_on(&self, date: NaiveDate) -> Option<&Observance> {
        self.observances_on(date).find(|o| !o.is_eve())
    }

    /// The slot for a symbolic name.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::UnknownSymbolicName`] if `name` is not in the
    /// vocabulary. A known name whose observance is not kept this year is
    /// not an error; it yields [`Slot::Unavailable`].
    pub fn by_name(&self, name: &str) -> Result<&Slot, CalendarError> {
        self.by_name
            .get(name)
            .map(|&idx| &self.slots[idx])
            .ok_or_else(|| CalendarError::UnknownSymbolicName {
                name: name.to_string(),
            })
    }

    /// Date of an available observance, `None` when unavailable this year.
    pub fn date_of(&self, name: &str) -> Result<Option<NaiveDate>, CalendarError> {
        Ok(self.by_name(name)?.observance().map(Observance::date))
    }

    /// Resolves a tagged lookup to an observance.
    ///
    /// `ByDate` yields the principal observance; `BySymbolicName` yields
    /// the named observance when it is kept this year.
    pub fn lookup(&self, key: Lookup<'_>) -> Result<Option<&Observance>, CalendarError> {
        match key {
            Lookup::ByDate(date) => Ok(self.by_date(date)),
            Lookup::BySymbolicName(name) => Ok(self.by_name(name)?.observance()),
        }
    }

    /// Every slot, in symbolic-name order.
    pub fn slots(&self) -> impl Iterator<Item = &Slot> {
        self.by_name.values().map(|&idx| &self.slots[idx])
    }

    /// Every available observance, in date order and then by descending rank.
    pub fn observances(&self) -> impl Iterator<Item = &Observance> {
        self.by_date
            .values()
            .flatten()
            .filter_map(|&idx| self.slots[idx].observance())
    }

    /// Slots not kept this year, in nominal-date order.
    pub fn unavailable(&self) -> Vec<&Slot> {
        let mut slots: Vec<&Slot> = self.slots.iter().filter(|s| !s.is_available()).collect();
        slots.sort_by_key(|s| s.date());
        slots
    }
}

fn rank_of(slots: &[Slot], idx: usize) -> Option<Rank> {
    slots[idx].observance().map(Observance::rank)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn build_2024() {
        let cal = FeastCalendar::build(2024).unwrap();
        assert_eq!(cal.year(), 2024);
        assert_eq!(cal.easter(), d(2024, 3, 31));
        assert_eq!(cal.date_of("ASH_WEDNESDAY").unwrap(), Some(d(2024, 2, 14)));
        assert_eq!(cal.date_of("WHITSUNDAY").unwrap(), Some(d(2024, 5, 19)));
        assert_eq!(cal.date_of("TRINITY_SUNDAY").unwrap(), Some(d(2024, 5, 26)));
        assert_eq!(cal.date_of("FIRST_SUNDAY_OF_ADVENT").unwrap(), Some(d(2024, 12, 1)));
    }

    #[test]
    fn higher_rank_wins_the_date() {
        let cal = FeastCalendar::build(2024).unwrap();
        // Palm Sunday 2024 is also the Eve of the Annunciation.
        let principal = cal.by_date(d(2024, 3, 24)).unwrap();
        assert_eq!(principal.symbolic_name(), "PALM_SUNDAY");
        let all: Vec<_> = cal.observances_on(d(2024, 3, 24)).map(Observance::symbolic_name).collect();
        assert_eq!(all, ["PALM_SUNDAY", "EVE_OF_THE_ANNUNCIATION"]);
        // The lower-ranked observance stays reachable by name.
        assert_eq!(cal.date_of("EVE_OF_THE_ANNUNCIATION").unwrap(), Some(d(2024, 3, 24)));
    }

    #[test]
    fn feast_on_skips_eves() {
        let cal = FeastCalendar::build(2024).unwrap();
        // Christmas Eve 2023 fell on Advent 4.
        let cal23 = FeastCalendar::build(2023).unwrap();
        assert_eq!(cal23.by_date(d(2023, 12, 24)).unwrap().symbolic_name(), "CHRISTMAS_EVE");
        assert_eq!(
            cal23.feast_on(d(2023, 12, 24)).unwrap().symbolic_name(),
            "FOURTH_SUNDAY_OF_ADVENT"
        );
        // Eve only: nothing to show in daytime.
        assert!(cal.feast_on(d(2024, 5, 30)).is_none());
        assert_eq!(cal.by_date(d(2024, 5, 30)).unwrap().symbolic_name(), "EVE_OF_THE_VISITATION");
    }

    #[test]
    fn empty_date() {
        let cal = FeastCalendar::build(2024).unwrap();
        assert!(cal.by_date(d(2024, 7, 15)).is_none());
        assert_eq!(cal.observances_on(d(2024, 7, 15)).count(), 0);
    }

    #[test]
    fn unknown_name() {
        let cal = FeastCalendar::build(2024).unwrap();
        assert_eq!(
            cal.by_name("PROPER_30"),
            Err(CalendarError::UnknownSymbolicName {
                name: "PROPER_30".to_string()
            })
        );
    }

    #[test]
    fn unavailable_is_not_an_error() {
        let cal = FeastCalendar::build(2024).unwrap();
        let slot = cal.by_name("PROPER_3").unwrap();
        assert!(!slot.is_available());
        assert_eq!(cal.date_of("PROPER_3").unwrap(), None);
        assert_eq!(cal.lookup(Lookup::BySymbolicName("PROPER_3")).unwrap(), None);
    }

    #[test]
    fn lookup_variants_agree() {
        let cal = FeastCalendar::build(2024).unwrap();
        let by_name = cal.lookup(Lookup::BySymbolicName("ST_MARK")).unwrap().unwrap();
        let by_date = cal.lookup(Lookup::ByDate(by_name.date())).unwrap().unwrap();
        assert_eq!(by_name, by_date);
        assert_eq!(by_name.rank(), Rank::MajorFeast);
    }

    #[test]
    fn slots_cover_vocabulary() {
        let cal = FeastCalendar::build(2024).unwrap();
        // 44 fixed, 61 moveable.
        assert_eq!(cal.slots().count(), 105);
        let names: Vec<_> = cal.slots().map(Slot::symbolic_name).collect();
        let mut sorted = names.clone();
        sorted.sort_unstable();
        assert_eq!(names, sorted);
    }

    #[test]
    fn unavailable_2024() {
        let cal = FeastCalendar::build(2024).unwrap();
        let names: Vec<_> = cal.unavailable().into_iter().map(Slot::symbolic_name).collect();
        assert_eq!(
            names,
            [
                "SECOND_SUNDAY_AFTER_CHRISTMAS",
                "SIXTH_SUNDAY_AFTER_EPIPHANY",
                "SEVENTH_SUNDAY_AFTER_EPIPHANY",
                "EIGHTH_SUNDAY_AFTER_EPIPHANY",
                "PROPER_3",
            ]
        );
    }

    #[test]
    fn observances_in_date_order() {
        let cal = FeastCalendar::build(2024).unwrap();
        let dates: Vec<_> = cal.observances().map(Observance::date).collect();
        assert!(dates.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(cal.observances().next().unwrap().symbolic_name(), "THE_HOLY_NAME");
    }

    #[test]
    fn invalid_year() {
        assert_eq!(
            FeastCalendar::build(300_000),
            Err(CalendarError::InvalidYear { year: 300_000 })
        );
    }
}
