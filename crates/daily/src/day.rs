//! Day labels.

use chrono::{Datelike, NaiveDateTime, Weekday};
use office_calendar::FeastCalendar;
use office_season::is_evening;

/// Display name of the day at `instant`.
///
/// In the evening the date's principal observance is shown, eves
/// included. During the day only an observance that is not an eve is
/// shown. Otherwise the label is the weekday name.
pub fn day_label(instant: NaiveDateTime, calendar: &FeastCalendar) -> String {
    let date = instant.date();
    let observance = if is_evening(instant.time()) {
        calendar.by_date(date)
    } else {
        calendar.feast_on(date)
    };
    match observance {
        Some(observance) => observance.display_name().to_string(),
        None => weekday_name(date.weekday()).to_string(),
    }
}

/// Full English weekday name.
pub fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(y: i32, m: u32, d: u32, h: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, 0, 0)
            .unwrap()
    }

    #[test]
    fn ordinary_weekday() {
        let cal = FeastCalendar::build(2024).unwrap();
        assert_eq!(day_label(at(2024, 7, 15, 10), &cal), "Monday");
        assert_eq!(day_label(at(2024, 7, 15, 20), &cal), "Monday");
    }

    #[test]
    fn eve_only_in_the_evening() {
        let cal = FeastCalendar::build(2024).unwrap();
        assert_eq!(day_label(at(2024, 5, 30, 10), &cal), "Thursday");
        assert_eq!(day_label(at(2024, 5, 30, 19), &cal), "Eve of the Visitation");
    }

    #[test]
    fn feast_all_day() {
        let cal = FeastCalendar::build(2024).unwrap();
        let name = "The Visitation of the Blessed Virgin Mary";
        assert_eq!(day_label(at(2024, 5, 31, 7), &cal), name);
        assert_eq!(day_label(at(2024, 5, 31, 22), &cal), name);
    }

    #[test]
    fn higher_ranked_sunday_keeps_the_evening() {
        let cal = FeastCalendar::build(2024).unwrap();
        // Palm Sunday 2024 coincides with the Eve of the Annunciation.
        assert_eq!(
            day_label(at(2024, 3, 24, 19), &cal),
            "The Sunday of the Passion: Palm Sunday"
        );
    }

    #[test]
    fn eve_outranking_a_sunday_waits_for_evening() {
        let cal = FeastCalendar::build(2023).unwrap();
        // 2023-12-24 is both Advent 4 and Christmas Eve.
        assert_eq!(day_label(at(2023, 12, 24, 9), &cal), "Fourth Sunday of Advent");
        assert_eq!(day_label(at(2023, 12, 24, 19), &cal), "Christmas Eve");
    }

    #[test]
    fn weekday_names() {
        assert_eq!(weekday_name(Weekday::Sun), "Sunday");
        assert_eq!(weekday_name(Weekday::Wed), "Wednesday");
    }
}
