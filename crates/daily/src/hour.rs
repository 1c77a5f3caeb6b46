//! Canonical hours of the Daily Office.

use std::fmt;

use chrono::{NaiveTime, Timelike};
use serde::Serialize;

/// One of the four fixed daily offices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CanonicalHour {
    Morning,
    Noonday,
    Evening,
    Compline,
}

impl CanonicalHour {
    /// All hours in the order of the day, which is also the tie-break order.
    pub const ALL: [CanonicalHour; 4] = [
        CanonicalHour::Morning,
        CanonicalHour::Noonday,
        CanonicalHour::Evening,
        CanonicalHour::Compline,
    ];

    /// Anchor time as seconds from midnight.
    pub fn anchor_secs(self) -> u32 {
        match self {
            CanonicalHour::Morning => 6 * 3600,
            CanonicalHour::Noonday => 12 * 3600,
            CanonicalHour::Evening => 18 * 3600,
            CanonicalHour::Compline => 21 * 3600,
        }
    }

    /// Title of the office said at this hour.
    pub fn title(self) -> &'static str {
        match self {
            CanonicalHour::Morning => "Daily Morning Prayer",
            CanonicalHour::Noonday => "An Order of Service for Noonday",
            CanonicalHour::Evening => "Daily Evening Prayer",
            CanonicalHour::Compline => "An Order for Compline",
        }
    }
}

impl fmt::Display for CanonicalHour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            CanonicalHour::Morning => "MORNING",
            CanonicalHour::Noonday => "NOONDAY",
            CanonicalHour::Evening => "EVENING",
            CanonicalHour::Compline => "COMPLINE",
        })
    }
}

/// The canonical hour whose anchor is closest to `time` on the same day.
///
/// Distance is measured in whole seconds without wrapping past midnight;
/// on a tie the earlier hour wins.
pub fn nearest_hour(time: NaiveTime) -> CanonicalHour {
    let secs = i64::from(time.num_seconds_from_midnight());
    CanonicalHour::ALL
        .into_iter()
        .min_by_key(|hour| (secs - i64::from(hour.anchor_secs())).abs())
        .unwrap_or(CanonicalHour::Morning)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn exact_anchors() {
        assert_eq!(nearest_hour(t(6, 0)), CanonicalHour::Morning);
        assert_eq!(nearest_hour(t(12, 0)), CanonicalHour::Noonday);
        assert_eq!(nearest_hour(t(18, 0)), CanonicalHour::Evening);
        assert_eq!(nearest_hour(t(21, 0)), CanonicalHour::Compline);
    }

    #[test]
    fn ties_go_to_the_earlier_hour() {
        assert_eq!(nearest_hour(t(9, 0)), CanonicalHour::Morning);
        assert_eq!(nearest_hour(t(15, 0)), CanonicalHour::Noonday);
        assert_eq!(nearest_hour(t(19, 30)), CanonicalHour::Evening);
    }

    #[test]
    fn no_wrap_past_midnight() {
        // 23:59 is 2h59m from Compline and over 18h from Morning.
        assert_eq!(nearest_hour(t(23, 59)), CanonicalHour::Compline);
        // 01:00 is 5h from Morning, 20h from Compline.
        assert_eq!(nearest_hour(t(1, 0)), CanonicalHour::Morning);
    }

    #[test]
    fn just_past_a_tie() {
        assert_eq!(nearest_hour(NaiveTime::from_hms_opt(9, 0, 1).unwrap()), CanonicalHour::Noonday);
    }

    #[test]
    fn titles_and_labels() {
        assert_eq!(CanonicalHour::Noonday.title(), "An Order of Service for Noonday");
        assert_eq!(CanonicalHour::Compline.to_string(), "COMPLINE");
    }
}
