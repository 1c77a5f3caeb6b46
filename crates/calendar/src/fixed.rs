//! Observances on fixed civil dates.

use chrono::{NaiveDate, Weekday};

use crate::date::{shift_weeks, weekday_on_or_after, ymd};
use crate::error::CalendarError;
use crate::observance::Rank::{FeastOfOurLord, MajorFeast, PrincipalFeast};
use crate::observance::{Observance, Rank, Slot};

struct FixedFeast {
    name: &'static str,
    display: &'static str,
    month: u32,
    day: u32,
    rank: Rank,
    is_eve: bool,
}

const fn feast(name: &'static str, display: &'static str, month: u32, day: u32, rank: Rank) -> FixedFeast {
    FixedFeast { name, display, month, day, rank, is_eve: false }
}

const fn eve(name: &'static str, display: &'static str, month: u32, day: u32, rank: Rank) -> FixedFeast {
    FixedFeast { name, display, month, day, rank, is_eve: true }
}

#[rustfmt::skip]
const FIXED_FEASTS: [FixedFeast; 43] = [
    feast("CONFESSION_OF_ST_PETER", "The Confession of Saint Peter the Apostle", 1, 18, MajorFeast),
    feast("CONVERSION_OF_ST_PAUL", "The Conversion of Saint Paul the Apostle", 1, 25, MajorFeast),
    feast("ST_MATTHIAS", "Saint Matthias the Apostle", 2, 24, MajorFeast),
    feast("ST_JOSEPH", "Saint Joseph", 3, 19, MajorFeast),
    eve("EVE_OF_THE_ANNUNCIATION", "Eve of the Annunciation", 3, 24, MajorFeast),
    feast("THE_ANNUNCIATION", "The Annunciation of Our Lord Jesus Christ to the Blessed Virgin Mary", 3, 25, MajorFeast),
    feast("ST_MARK", "Saint Mark the Evangelist", 4, 25, MajorFeast),
    feast("SS_PHILIP_JAMES", "Saint Philip and Saint James, Apostles", 5, 1, MajorFeast),
    eve("EVE_OF_THE_VISITATION", "Eve of the Visitation", 5, 30, MajorFeast),
    feast("THE_VISITATION", "The Visitation of the Blessed Virgin Mary", 5, 31, MajorFeast),
    feast("ST_BARNABAS", "Saint Barnabas the Apostle", 6, 11, MajorFeast),
    eve("EVE_OF_ST_JOHN_THE_BAPTIST", "Eve of Saint John the Baptist", 6, 23, MajorFeast),
    feast("ST_JOHN_THE_BAPTIST", "The Nativity of Saint John the Baptist", 6, 24, MajorFeast),
    feast("SS_PETER_PAUL", "Saint Peter and Saint Paul, Apostles", 6, 29, MajorFeast),
    feast("INDEPENDENCE_DAY", "Independence Day", 7, 4, MajorFeast),
    feast("ST_MARY_MAGDALENE", "Saint Mary Magdalene", 7, 22, MajorFeast),
    feast("ST_JAMES", "Saint James the Apostle", 7, 25, MajorFeast),
    feast("ST_MARY_THE_VIRGIN", "Saint Mary the Virgin, Mother of Our Lord Jesus Christ", 8, 15, MajorFeast),
    feast("ST_BARTHOLOMEW", "Saint Bartholomew the Apostle", 8, 24, MajorFeast),
    eve("EVE_OF_HOLY_CROSS", "Eve of Holy Cross", 9, 13, MajorFeast),
    feast("HOLY_CROSS_DAY", "Holy Cross Day", 9, 14, MajorFeast),
    feast("ST_MATTHEW", "Saint Matthew, Apostle and Evangelist", 9, 21, MajorFeast),
    feast("ST_MICHAEL_ALL_ANGELS", "Saint Michael and All Angels", 9, 29, MajorFeast),
    feast("ST_LUKE", "Saint Luke the Evangelist", 10, 18, MajorFeast),
    feast("ST_JAMES_OF_JERUSALEM", "Saint James of Jerusalem, Brother of Our Lord Jesus Christ, and Martyr", 10, 23, MajorFeast),
    feast("SS_SIMON_JUDE", "Saint Simon and Saint Jude, Apostles", 10, 28, MajorFeast),
    feast("ST_ANDREW", "Saint Andrew the Apostle", 11, 30, MajorFeast),
    feast("ST_THOMAS", "Saint Thomas the Apostle", 12, 21, MajorFeast),
    feast("ST_STEPHEN", "Saint Stephen, Deacon and Martyr", 12, 26, MajorFeast),
    feast("ST_JOHN", "Saint John, Apostle and Evangelist", 12, 27, MajorFeast),
    feast("HOLY_INNOCENTS", "The Holy Innocents", 12, 28, MajorFeast),
    feast("THE_HOLY_NAME", "The Holy Name of Our Lord Jesus Christ", 1, 1, FeastOfOurLord),
    eve("EVE_OF_THE_PRESENTATION", "Eve of the Presentation", 2, 1, FeastOfOurLord),
    feast("THE_PRESENTATION", "The Presentation of Our Lord Jesus Christ in the Temple", 2, 2, FeastOfOurLord),
    eve("EVE_OF_THE_TRANSFIGURATION", "Eve of the Transfiguration", 8, 5, FeastOfOurLord),
    feast("THE_TRANSFIGURATION", "The Transfiguration of Our Lord Jesus Christ", 8, 6, FeastOfOurLord),
    eve("EVE_OF_EPIPHANY", "Eve of Epiphany", 1, 5, PrincipalFeast),
    feast("THE_EPIPHANY", "The Epiphany of Our Lord Jesus Christ", 1, 6, PrincipalFeast),
    eve("EVE_OF_ALL_SAINTS", "Eve of All Saints", 10, 31, PrincipalFeast),
    feast("ALL_SAINTS_DAY", "All Saints Day", 11, 1, PrincipalFeast),
    eve("CHRISTMAS_EVE", "Christmas Eve", 12, 24, PrincipalFeast),
    feast("CHRISTMAS_DAY", "The Nativity of Our Lord Jesus Christ", 12, 25, PrincipalFeast),
    // Eve of the following year's Holy Name.
    eve("EVE_OF_THE_HOLY_NAME", "Eve of Holy Name", 12, 31, PrincipalFeast),
];

/// Builds every fixed-date observance of `year`, Thanksgiving included.
pub(crate) fn fixed_feasts(year: i32) -> Result<Vec<Slot>, CalendarError> {
    let mut slots = Vec::with_capacity(FIXED_FEASTS.len() + 1);
    for entry in &FIXED_FEASTS {
        let date = ymd(year, entry.month, entry.day)?;
        let observance = Observance::new(entry.name, entry.display, date, entry.rank);
        let observance = if entry.is_eve { observance.eve() } else { observance };
        slots.push(observance.into());
    }
    slots.push(Observance::new("THANKSGIVING_DAY", "Thanksgiving Day", thanksgiving(year)?, MajorFeast).into());
    Ok(slots)
}

/// Fourth Thursday of November.
pub(crate) fn thanksgiving(year: i32) -> Result<NaiveDate, CalendarError> {
    let first_thursday = weekday_on_or_after(ymd(year, 11, 1)?, Weekday::Thu)?;
    shift_weeks(first_thursday, 3)
}
