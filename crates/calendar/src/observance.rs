//! Observances, their precedence ranks, and name-index slots.

use std::fmt;

use chrono::NaiveDate;
use serde::Serialize;

/// Precedence tier of an observance.
///
/// Variants are declared lowest first so that the derived `Ord` sorts a
/// principal feast above everything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Rank {
    /// Apostles, evangelists, other saints, civil holidays, and their eves.
    MajorFeast,
    /// Ash Wednesday.
    PrincipalFast,
    /// Sundays of the seasons and the numbered Propers.
    Sunday,
    /// Holy Name, Presentation, Transfiguration, and their eves.
    FeastOfOurLord,
    /// Easter, Pentecost, Christmas, Epiphany, All Saints, and their eves.
    PrincipalFeast,
}

impl Rank {
    /// All ranks from highest to lowest precedence.
    pub const ALL: [Rank; 5] = [
        Rank::PrincipalFeast,
        Rank::FeastOfOurLord,
        Rank::Sunday,
        Rank::PrincipalFast,
        Rank::MajorFeast,
    ];
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Rank::MajorFeast => "Major Feast",
            Rank::PrincipalFast => "Principal Fast",
            Rank::Sunday => "Sunday",
            Rank::FeastOfOurLord => "Feast of our Lord",
            Rank::PrincipalFeast => "Principal Feast",
        };
        f.write_str(label)
    }
}

/// One named observance on a specific date of a specific year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Observance {
    symbolic_name: String,
    display_name: String,
    date: NaiveDate,
    is_eve: bool,
    rank: Rank,
}

impl Observance {
    /// Creates a daytime observance.
    pub fn new(
        symbolic_name: impl Into<String>,
        display_name: impl Into<String>,
        date: NaiveDate,
        rank: Rank,
    ) -> Self {
        Self {
            symbolic_name: symbolic_name.into(),
            display_name: display_name.into(),
            date,
            is_eve: false,
            rank,
        }
    }

    /// Marks the observance as an eve, kept from the evening before a feast.
    pub fn eve(mut self) -> Self {
        self.is_eve = true;
        self
    }

    /// Stable, year-independent identifier such as `PROPER_12`.
    pub fn symbolic_name(&self) -> &str {
        &self.symbolic_name
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn is_eve(&self) -> bool {
        self.is_eve
    }

    pub fn rank(&self) -> Rank {
        self.rank
    }
}

/// Entry of the name index: an observance, or an explicit absence.
///
/// Some Sundays exist only in some years (late Epiphany Sundays, early
/// Propers, Sundays after Christmas). Their names stay in the vocabulary
/// every year and resolve to `Unavailable` when the year has no such day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Slot {
    Available(Observance),
    Unavailable {
        symbolic_name: String,
        /// The date the observance would have had, had it been kept.
        nominal_date: NaiveDate,
    },
}

impl Slot {
    pub fn symbolic_name(&self) -> &str {
        match self {
            Slot::Available(observance) => observance.symbolic_name(),
            Slot::Unavailable { symbolic_name, .. } => symbolic_name,
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, Slot::Available(_))
    }

    /// The observance, or `None` when the slot is unavailable this year.
    pub fn observance(&self) -> Option<&Observance> {
        match self {
            Slot::Available(observance) => Some(observance),
            Slot::Unavailable { .. } => None,
        }
    }

    /// The kept date, or the nominal date of an unavailable slot.
    pub fn date(&self) -> NaiveDate {
        match self {
            Slot::Available(observance) => observance.date(),
            Slot::Unavailable { nominal_date, .. } => *nominal_date,
        }
    }
}

impl From<Observance> for Slot {
    fn from(observance: Observance) -> Self {
        Slot::Available(observance)
    }
}
