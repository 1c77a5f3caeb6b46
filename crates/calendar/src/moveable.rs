//! Observances anchored on Easter or on Christmas.
//!
//! Easter anchors Lent, Holy Week, Eastertide, Ascension, Pentecost and
//! Trinity Sunday. Christmas anchors Advent and, counting backward from
//! Advent, the Propers of the season after Pentecost. The Sundays after
//! the Epiphany run forward from January 7 until they meet the Last
//! Sunday after the Epiphany, so their count depends on Easter as well.

use chrono::{Datelike, NaiveDate};

use crate::date::{shift, shift_weeks, sunday_before, sunday_on_or_after, ymd};
use crate::error::CalendarError;
use crate::names::{
    ADVENT_SUNDAYS, ASH_WEDNESDAY, EASTER_DAY, EASTER_SUNDAYS, EPIPHANY_SUNDAYS,
    FIRST_PROPER, FIRST_SUNDAY_AFTER_CHRISTMAS, LAST_PROPER, LAST_SUNDAY_AFTER_EPIPHANY,
    LENT_SUNDAYS, PALM_SUNDAY, SECOND_SUNDAY_AFTER_CHRISTMAS, TRINITY_SUNDAY, WHITSUNDAY, proper,
};
use crate::observance::{Observance, Rank, Slot};

const ORDINALS: [&str; 8] = [
    "First", "Second", "Third", "Fourth", "Fifth", "Sixth", "Seventh", "Eighth",
];

/// Days from Easter Day to Ash Wednesday.
const ASH_WEDNESDAY_OFFSET: i64 = -46;
const ASCENSION_OFFSET: i64 = 39;
const PENTECOST_OFFSET: i64 = 49;
const TRINITY_OFFSET: i64 = 56;

/// Builds every moveable observance of `year`, including unavailable slots.
pub(crate) fn moveable_feasts(year: i32, easter: NaiveDate) -> Result<Vec<Slot>, CalendarError> {
    let mut slots = Vec::with_capacity(61);
    easter_cycle(easter, &mut slots)?;
    christmas_sundays(year, &mut slots)?;
    epiphany_sundays(year, easter, &mut slots)?;
    propers(year, easter, &mut slots)?;
    Ok(slots)
}

fn easter_cycle(easter: NaiveDate, slots: &mut Vec<Slot>) -> Result<(), CalendarError> {
    let ash_wednesday = shift(easter, ASH_WEDNESDAY_OFFSET)?;
    slots.push(Observance::new(ASH_WEDNESDAY, "Ash Wednesday", ash_wednesday, Rank::PrincipalFast).into());

    // The First Sunday in Lent follows Ash Wednesday by four days.
    let lent_one = shift(ash_wednesday, 4)?;
    for (k, name) in LENT_SUNDAYS.iter().enumerate() {
        let display = format!("{} Sunday in Lent", ORDINALS[k]);
        let date = shift_weeks(lent_one, k as i64)?;
        slots.push(Observance::new(*name, display, date, Rank::Sunday).into());
    }
    slots.push(
        Observance::new(PALM_SUNDAY, "The Sunday of the Passion: Palm Sunday", shift_weeks(easter, -1)?, Rank::Sunday)
            .into(),
    );

    slots.push(
        Observance::new(EASTER_DAY, "The Sunday of the Resurrection, or Easter Day", easter, Rank::PrincipalFeast)
            .into(),
    );
    for (k, name) in EASTER_SUNDAYS.iter().enumerate() {
        let display = format!("{} Sunday of Easter", ORDINALS[k + 1]);
        let date = shift_weeks(easter, k as i64 + 1)?;
        slots.push(Observance::new(*name, display, date, Rank::Sunday).into());
    }

    let ascension = shift(easter, ASCENSION_OFFSET)?;
    let pentecost = shift(easter, PENTECOST_OFFSET)?;
    slots.push(
        Observance::new("EVE_OF_ASCENSION_DAY", "Eve of Ascension Day", shift(ascension, -1)?, Rank::PrincipalFeast)
            .eve()
            .into(),
    );
    slots.push(Observance::new("ASCENSION_DAY", "Ascension Day", ascension, Rank::PrincipalFeast).into());
    slots.push(
        Observance::new("EVE_OF_PENTECOST", "Eve of Pentecost", shift(pentecost, -1)?, Rank::PrincipalFeast)
            .eve()
            .into(),
    );
    slots.push(Observance::new(WHITSUNDAY, "The Day of Pentecost: Whitsunday", pentecost, Rank::PrincipalFeast).into());
    slots.push(
        Observance::new(
            TRINITY_SUNDAY,
            "The First Sunday after Pentecost: Trinity Sunday",
            shift(easter, TRINITY_OFFSET)?,
            Rank::PrincipalFeast,
        )
        .into(),
    );
    Ok(())
}

/// Fourth Sunday of Advent: the Sunday strictly before Christmas Day.
pub(crate) fn fourth_advent(year: i32) -> Result<NaiveDate, CalendarError> {
    sunday_before(ymd(year, 12, 25)?)
}

fn christmas_sundays(year: i32, slots: &mut Vec<Slot>) -> Result<(), CalendarError> {
    let advent_four = fourth_advent(year)?;
    for (k, name) in ADVENT_SUNDAYS.iter().enumerate() {
        let display = format!("{} Sunday of Advent", ORDINALS[k]);
        let date = shift_weeks(advent_four, k as i64 - 3)?;
        slots.push(Observance::new(*name, display, date, Rank::Sunday).into());
    }

    // Dec 26..=Jan 1; on Jan 1 the Holy Name of the next year governs.
    let first = sunday_on_or_after(ymd(year, 12, 26)?)?;
    slots.push(slot(
        FIRST_SUNDAY_AFTER_CHRISTMAS,
        "First Sunday after Christmas Day",
        first,
        first.year() == year,
    ));

    // The second Sunday after the previous Christmas, Jan 2..=Jan 8.
    let previous_first = sunday_on_or_after(ymd(year.saturating_sub(1), 12, 26)?)?;
    let second = shift_weeks(previous_first, 1)?;
    slots.push(slot(
        SECOND_SUNDAY_AFTER_CHRISTMAS,
        "Second Sunday after Christmas Day",
        second,
        second < ymd(year, 1, 6)?,
    ));
    Ok(())
}

fn epiphany_sundays(year: i32, easter: NaiveDate, slots: &mut Vec<Slot>) -> Result<(), CalendarError> {
    let last = sunday_before(shift(easter, ASH_WEDNESDAY_OFFSET)?)?;
    let first = sunday_on_or_after(ymd(year, 1, 7)?)?;
    for (k, name) in EPIPHANY_SUNDAYS.iter().enumerate() {
        let display = if k == 0 {
            "First Sunday after the Epiphany: The Baptism of our Lord".to_string()
        } else {
            format!("{} Sunday after the Epiphany", ORDINALS[k])
        };
        let date = shift_weeks(first, k as i64)?;
        slots.push(slot(name, display, date, date < last));
    }
    slots.push(Observance::new(LAST_SUNDAY_AFTER_EPIPHANY, "Last Sunday after the Epiphany", last, Rank::Sunday).into());
    Ok(())
}

/// Propers count backward from Advent: Proper 29 is the Sunday before
/// the First Sunday of Advent. A Proper on or before Trinity Sunday is
/// not kept that year.
fn propers(year: i32, easter: NaiveDate, slots: &mut Vec<Slot>) -> Result<(), CalendarError> {
    let advent_four = fourth_advent(year)?;
    let trinity = shift(easter, TRINITY_OFFSET)?;
    let nominal_first = ymd(year, 5, 11)?;
    for n in FIRST_PROPER..=LAST_PROPER {
        let date = shift_weeks(advent_four, -i64::from(33 - n))?;
        let closest = shift_weeks(nominal_first, i64::from(n - 1))?;
        let display = format!("Proper {n}: The Sunday closest to {}", closest.format("%B %-d"));
        slots.push(slot(&proper(n), display, date, date > trinity));
    }
    Ok(())
}

fn slot(name: &str, display: impl Into<String>, date: NaiveDate, available: bool) -> Slot {
    if available {
        Observance::new(name, display, date, Rank::Sunday).into()
    } else {
        Slot::Unavailable {
            symbolic_name: name.to_string(),
            nominal_date: date,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn find<'a>(slots: &'a [Slot], name: &str) -> &'a Slot {
        slots.iter().find(|s| s.symbolic_name() == name).unwrap()
    }

    #[test]
    fn easter_anchored_2024() {
        let slots = moveable_feasts(2024, d(2024, 3, 31)).unwrap();
        assert_eq!(find(&slots, ASH_WEDNESDAY).date(), d(2024, 2, 14));
        assert_eq!(find(&slots, "FIRST_SUNDAY_IN_LENT").date(), d(2024, 2, 18));
        assert_eq!(find(&slots, PALM_SUNDAY).date(), d(2024, 3, 24));
        assert_eq!(find(&slots, "ASCENSION_DAY").date(), d(2024, 5, 9));
        assert_eq!(find(&slots, WHITSUNDAY).date(), d(2024, 5, 19));
        assert_eq!(find(&slots, TRINITY_SUNDAY).date(), d(2024, 5, 26));
        assert_eq!(find(&slots, "SEVENTH_SUNDAY_OF_EASTER").date(), d(2024, 5, 12));
    }

    #[test]
    fn advent_when_christmas_is_sunday() {
        // 2022-12-25 is a Sunday; Advent 4 is Dec 18, not Christmas itself.
        assert_eq!(fourth_advent(2022).unwrap(), d(2022, 12, 18));
        let slots = moveable_feasts(2022, d(2022, 4, 17)).unwrap();
        assert_eq!(find(&slots, "FIRST_SUNDAY_OF_ADVENT").date(), d(2022, 11, 27));
    }

    #[test]
    fn epiphany_sundays_2024() {
        let slots = moveable_feasts(2024, d(2024, 3, 31)).unwrap();
        assert_eq!(find(&slots, LAST_SUNDAY_AFTER_EPIPHANY).date(), d(2024, 2, 11));
        assert!(find(&slots, "FIFTH_SUNDAY_AFTER_EPIPHANY").is_available());
        let sixth = find(&slots, "SIXTH_SUNDAY_AFTER_EPIPHANY");
        assert!(!sixth.is_available());
        assert_eq!(sixth.date(), d(2024, 2, 11));
    }

    #[test]
    fn propers_2024() {
        let slots = moveable_feasts(2024, d(2024, 3, 31)).unwrap();
        let third = find(&slots, "PROPER_3");
        assert!(!third.is_available());
        assert_eq!(third.date(), d(2024, 5, 26));
        let fourth = find(&slots, "PROPER_4");
        assert_eq!(fourth.date(), d(2024, 6, 2));
        assert_eq!(
            fourth.observance().unwrap().display_name(),
            "Proper 4: The Sunday closest to June 1"
        );
        let last = find(&slots, "PROPER_29").observance().unwrap();
        assert_eq!(last.date(), d(2024, 11, 24));
        assert_eq!(last.display_name(), "Proper 29: The Sunday closest to November 23");
    }

    #[test]
    fn christmas_sundays() {
        let slots = moveable_feasts(2024, d(2024, 3, 31)).unwrap();
        assert_eq!(find(&slots, FIRST_SUNDAY_AFTER_CHRISTMAS).date(), d(2024, 12, 29));
        assert!(find(&slots, FIRST_SUNDAY_AFTER_CHRISTMAS).is_available());
        assert!(!find(&slots, SECOND_SUNDAY_AFTER_CHRISTMAS).is_available());

        let slots = moveable_feasts(2025, d(2025, 4, 20)).unwrap();
        assert_eq!(find(&slots, SECOND_SUNDAY_AFTER_CHRISTMAS).date(), d(2025, 1, 5));
        assert!(find(&slots, SECOND_SUNDAY_AFTER_CHRISTMAS).is_available());

        // 2012-01-01 is a Sunday: the Holy Name governs it.
        let slots = moveable_feasts(2011, d(2011, 4, 24)).unwrap();
        let first = find(&slots, FIRST_SUNDAY_AFTER_CHRISTMAS);
        assert!(!first.is_available());
        assert_eq!(first.date(), d(2012, 1, 1));
        assert_eq!(find(&slots, SECOND_SUNDAY_AFTER_CHRISTMAS).date(), d(2011, 1, 2));
    }

    #[test]
    fn eves_are_flagged() {
        let slots = moveable_feasts(2024, d(2024, 3, 31)).unwrap();
        assert!(find(&slots, "EVE_OF_PENTECOST").observance().unwrap().is_eve());
        assert!(!find(&slots, WHITSUNDAY).observance().unwrap().is_eve());
    }
}
