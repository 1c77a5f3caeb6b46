//! Civil date sequences.

use chrono::NaiveDate;

use crate::date::ymd;
use crate::error::CalendarError;

/// Every civil date of `year`, January 1 through December 31.
///
/// # Example
///
/// ```ignore
/// let days = year_days(2024)?;
/// assert_eq!(days.len(), 366);
/// ```
pub fn year_days(year: i32) -> Result<Vec<NaiveDate>, CalendarError> {
    let first = ymd(year, 1, 1)?;
    let last = ymd(year, 12, 31)?;
    Ok(first.iter_days().take_while(|d| *d <= last).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    #[test]
    fn leap_year() {
        let days = year_days(2024).unwrap();
        assert_eq!(days.len(), 366);
        assert_eq!(days[59], NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
    }

    #[test]
    fn common_year() {
        let days = year_days(2023).unwrap();
        assert_eq!(days.len(), 365);
        assert_eq!(days[0], NaiveDate::from_ymd_opt(2023, 1, 1).unwrap());
        assert_eq!(*days.last().unwrap(), NaiveDate::from_ymd_opt(2023, 12, 31).unwrap());
    }

    #[test]
    fn contiguous() {
        let days = year_days(1900).unwrap();
        assert_eq!(days.len(), 365);
        assert!(days.windows(2).all(|w| w[0].succ_opt() == Some(w[1])));
        assert!(days.iter().all(|d| d.year() == 1900));
    }

    #[test]
    fn unrepresentable() {
        assert_eq!(year_days(i32::MAX), Err(CalendarError::InvalidYear { year: i32::MAX }));
    }
}
