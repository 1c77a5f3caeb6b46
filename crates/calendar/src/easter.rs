//! Gregorian computus.

use crate::date::ymd;
use crate::error::CalendarError;
use chrono::NaiveDate;

/// Returns the date of Easter Sunday in the proleptic Gregorian calendar.
///
/// Uses the anonymous Gregorian algorithm (Meeus/Jones/Butcher): the
/// golden number, century corrections for the solar and lunar
/// equations, and the epact give the Paschal full moon, and the
/// following Sunday is Easter. Divisions are Euclidean so that
/// proleptic years before 1 AD produce valid Sundays as well.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidYear`] when the year cannot be
/// represented by `chrono::NaiveDate`.
pub fn easter(year: i32) -> Result<NaiveDate, CalendarError> {
    let a = year.rem_euclid(19);
    let b = year.div_euclid(100);
    let c = year.rem_euclid(100);
    let d = b.div_euclid(4);
    let e = b.rem_euclid(4);
    let f = (b + 8).div_euclid(25);
    let g = (b - f + 1).div_euclid(3);
    let h = (19 * a + b - d - g + 15).rem_euclid(30);
    let i = c.div_euclid(4);
    let k = c.rem_euclid(4);
    let l = (32 + 2 * e + 2 * i - h - k).rem_euclid(7);
    let m = (a + 11 * h + 22 * l).div_euclid(451);
    let n = h + l - 7 * m + 114;

    // n / 31 is 3 or 4 and n % 31 is at most 30, so both casts are lossless.
    let month = n.div_euclid(31) as u32;
    let day = (n.rem_euclid(31) + 1) as u32;
    ymd(year, month, day)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Weekday};

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn known_dates() {
        assert_eq!(easter(2000).unwrap(), d(2000, 4, 23));
        assert_eq!(easter(2008).unwrap(), d(2008, 3, 23));
        assert_eq!(easter(2011).unwrap(), d(2011, 4, 24));
        assert_eq!(easter(2019).unwrap(), d(2019, 4, 21));
        assert_eq!(easter(2024).unwrap(), d(2024, 3, 31));
        assert_eq!(easter(2025).unwrap(), d(2025, 4, 20));
    }

    #[test]
    fn extreme_dates() {
        // Earliest possible date.
        assert_eq!(easter(1818).unwrap(), d(1818, 3, 22));
        assert_eq!(easter(2285).unwrap(), d(2285, 3, 22));
        // Latest possible date.
        assert_eq!(easter(1943).unwrap(), d(1943, 4, 25));
        assert_eq!(easter(2038).unwrap(), d(2038, 4, 25));
    }

    #[test]
    fn proleptic_year_is_sunday() {
        let date = easter(-44).unwrap();
        assert_eq!(date.weekday(), Weekday::Sun);
    }

    #[test]
    fn unrepresentable_year() {
        assert_eq!(
            easter(i32::MAX),
            Err(CalendarError::InvalidYear { year: i32::MAX })
        );
        assert_eq!(
            easter(i32::MIN),
            Err(CalendarError::InvalidYear { year: i32::MIN })
        );
    }
}
