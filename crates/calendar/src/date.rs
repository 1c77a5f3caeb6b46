//! Checked date construction and Sunday anchoring.
//!
//! All calendar arithmetic goes through these helpers so that an
//! unrepresentable date surfaces as [`CalendarError::InvalidYear`]
//! instead of a panic.

use chrono::{Datelike, NaiveDate, TimeDelta, Weekday};

use crate::error::CalendarError;

/// Builds a civil date, failing with `InvalidYear` when out of range.
pub fn ymd(year: i32, month: u32, day: u32) -> Result<NaiveDate, CalendarError> {
    NaiveDate::from_ymd_opt(year, month, day).ok_or(CalendarError::InvalidYear { year })
}

/// Moves `date` by a signed number of days.
pub fn shift(date: NaiveDate, days: i64) -> Result<NaiveDate, CalendarError> {
    date.checked_add_signed(TimeDelta::days(days))
        .ok_or(CalendarError::InvalidYear { year: date.year() })
}

/// Moves `date` by a signed number of weeks.
pub fn shift_weeks(date: NaiveDate, weeks: i64) -> Result<NaiveDate, CalendarError> {
    shift(date, weeks * 7)
}

/// First date on or after `date` that falls on `weekday`.
pub fn weekday_on_or_after(date: NaiveDate, weekday: Weekday) -> Result<NaiveDate, CalendarError> {
    let ahead = (7 + weekday.num_days_from_monday() - date.weekday().num_days_from_monday()) % 7;
    shift(date, i64::from(ahead))
}

/// First Sunday on or after `date` (the date itself when it is a Sunday).
pub fn sunday_on_or_after(date: NaiveDate) -> Result<NaiveDate, CalendarError> {
    weekday_on_or_after(date, Weekday::Sun)
}

/// Last Sunday strictly before `date`, a full week back when `date` is a Sunday.
pub fn sunday_before(date: NaiveDate) -> Result<NaiveDate, CalendarError> {
    let back = match date.weekday().num_days_from_sunday() {
        0 => 7,
        n => n,
    };
    shift(date, -i64::from(back))
}
