//! Lectionary cycle selection.

use std::fmt;

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

/// Year of the two-year Daily Office lectionary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CycleYear {
    One,
    Two,
}

impl CycleYear {
    /// Heading of the lectionary year.
    pub fn title(self) -> &'static str {
        match self {
            CycleYear::One => "Daily Office Year One",
            CycleYear::Two => "Daily Office Year Two",
        }
    }
}

impl fmt::Display for CycleYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            CycleYear::One => "ONE",
            CycleYear::Two => "TWO",
        })
    }
}

/// Lectionary year in force on `date`, given that year's First Sunday of Advent.
///
/// Year One begins at Advent before an odd civil year; Year Two at
/// Advent before an even one. Advent Sunday itself belongs to the new
/// cycle.
pub fn cycle_year(date: NaiveDate, advent_sunday: NaiveDate) -> CycleYear {
    let after_advent = date >= advent_sunday;
    match (date.year().rem_euclid(2) == 0, after_advent) {
        (true, true) | (false, false) => CycleYear::One,
        (true, false) | (false, true) => CycleYear::Two,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn even_year() {
        let advent = d(2024, 12, 1);
        assert_eq!(cycle_year(d(2024, 3, 1), advent), CycleYear::Two);
        assert_eq!(cycle_year(d(2024, 11, 30), advent), CycleYear::Two);
        assert_eq!(cycle_year(d(2024, 12, 1), advent), CycleYear::One);
        assert_eq!(cycle_year(d(2024, 12, 5), advent), CycleYear::One);
    }

    #[test]
    fn odd_year() {
        let advent = d(2025, 11, 30);
        assert_eq!(cycle_year(d(2025, 1, 1), advent), CycleYear::One);
        assert_eq!(cycle_year(d(2025, 11, 29), advent), CycleYear::One);
        assert_eq!(cycle_year(d(2025, 11, 30), advent), CycleYear::Two);
    }

    #[test]
    fn titles() {
        assert_eq!(CycleYear::One.title(), "Daily Office Year One");
        assert_eq!(CycleYear::Two.to_string(), "TWO");
    }
}
