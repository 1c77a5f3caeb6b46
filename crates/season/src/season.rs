//! Season and week labels.

use std::fmt;

use serde::{Serialize, Serializer};

/// Liturgical season.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Season {
    Advent,
    Christmas,
    Epiphany,
    Lent,
    Easter,
    AfterPentecost,
}

impl Season {
    /// All seasons in liturgical-year order, Advent first.
    pub const ALL: [Season; 6] = [
        Season::Advent,
        Season::Christmas,
        Season::Epiphany,
        Season::Lent,
        Season::Easter,
        Season::AfterPentecost,
    ];
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Season::Advent => "Advent",
            Season::Christmas => "Christmas",
            Season::Epiphany => "Epiphany",
            Season::Lent => "Lent",
            Season::Easter => "Easter",
            Season::AfterPentecost => "Season after Pentecost",
        };
        f.write_str(label)
    }
}

impl Serialize for Season {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Week label within a season.
///
/// Numbered variants carry the ordinal shown in the label, so
/// `Week::Proper(10)` displays as "Week of Proper 10".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Week {
    Advent(u8),
    ChristmasAndFollowing,
    EpiphanyAndFollowing,
    Epiphany(u8),
    LastEpiphany,
    Lent(u8),
    HolyWeek,
    EasterWeek,
    Easter(u8),
    Proper(u8),
}

impl fmt::Display for Week {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Week::Advent(n) => write!(f, "Week of {n} Advent"),
            Week::ChristmasAndFollowing => f.write_str("Christmas Day and Following"),
            Week::EpiphanyAndFollowing => f.write_str("The Epiphany and Following"),
            Week::Epiphany(n) => write!(f, "Week of {n} Epiphany"),
            Week::LastEpiphany => f.write_str("Week of Last Epiphany"),
            Week::Lent(n) => write!(f, "Week of {n} Lent"),
            Week::HolyWeek => f.write_str("Holy Week"),
            Week::EasterWeek => f.write_str("Easter Week"),
            Week::Easter(n) => write!(f, "Week of {n} Easter"),
            Week::Proper(n) => write!(f, "Week of Proper {n}"),
        }
    }
}

impl Serialize for Week {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
