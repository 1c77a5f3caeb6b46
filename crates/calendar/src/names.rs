//! Symbolic names of the observances other crates anchor on.
//!
//! Symbolic names are the only identifiers that are stable across years.
//! Fixed feasts that nothing anchors on are named only in their table.

pub const THE_EPIPHANY: &str = "THE_EPIPHANY";
pub const EVE_OF_EPIPHANY: &str = "EVE_OF_EPIPHANY";
pub const LAST_SUNDAY_AFTER_EPIPHANY: &str = "LAST_SUNDAY_AFTER_EPIPHANY";
pub const ASH_WEDNESDAY: &str = "ASH_WEDNESDAY";
pub const PALM_SUNDAY: &str = "PALM_SUNDAY";
pub const EASTER_DAY: &str = "EASTER_DAY";
pub const WHITSUNDAY: &str = "WHITSUNDAY";
pub const TRINITY_SUNDAY: &str = "TRINITY_SUNDAY";
pub const CHRISTMAS_EVE: &str = "CHRISTMAS_EVE";
pub const CHRISTMAS_DAY: &str = "CHRISTMAS_DAY";
pub const FIRST_SUNDAY_AFTER_CHRISTMAS: &str = "FIRST_SUNDAY_AFTER_CHRISTMAS";
pub const SECOND_SUNDAY_AFTER_CHRISTMAS: &str = "SECOND_SUNDAY_AFTER_CHRISTMAS";

/// Advent Sundays, first to fourth.
pub const ADVENT_SUNDAYS: [&str; 4] = [
    "FIRST_SUNDAY_OF_ADVENT",
    "SECOND_SUNDAY_OF_ADVENT",
    "THIRD_SUNDAY_OF_ADVENT",
    "FOURTH_SUNDAY_OF_ADVENT",
];

/// Sundays after the Epiphany, first to eighth.
pub const EPIPHANY_SUNDAYS: [&str; 8] = [
    "FIRST_SUNDAY_AFTER_EPIPHANY",
    "SECOND_SUNDAY_AFTER_EPIPHANY",
    "THIRD_SUNDAY_AFTER_EPIPHANY",
    "FOURTH_SUNDAY_AFTER_EPIPHANY",
    "FIFTH_SUNDAY_AFTER_EPIPHANY",
    "SIXTH_SUNDAY_AFTER_EPIPHANY",
    "SEVENTH_SUNDAY_AFTER_EPIPHANY",
    "EIGHTH_SUNDAY_AFTER_EPIPHANY",
];

/// Sundays in Lent, first to fifth.
pub const LENT_SUNDAYS: [&str; 5] = [
    "FIRST_SUNDAY_IN_LENT",
    "SECOND_SUNDAY_IN_LENT",
    "THIRD_SUNDAY_IN_LENT",
    "FOURTH_SUNDAY_IN_LENT",
    "FIFTH_SUNDAY_IN_LENT",
];

/// Sundays of Easter, second to seventh (Easter Day is the first).
pub const EASTER_SUNDAYS: [&str; 6] = [
    "SECOND_SUNDAY_OF_EASTER",
    "THIRD_SUNDAY_OF_EASTER",
    "FOURTH_SUNDAY_OF_EASTER",
    "FIFTH_SUNDAY_OF_EASTER",
    "SIXTH_SUNDAY_OF_EASTER",
    "SEVENTH_SUNDAY_OF_EASTER",
];

/// Lowest Proper that can fall after Trinity Sunday.
pub const FIRST_PROPER: u8 = 3;
/// The Proper immediately before Advent.
pub const LAST_PROPER: u8 = 29;

/// Symbolic name of Proper `n`, e.g. `PROPER_12`.
pub fn proper(n: u8) -> String {
    format!("PROPER_{n}")
}
