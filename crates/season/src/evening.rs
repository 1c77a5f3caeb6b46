//! The evening cutover.

use chrono::{NaiveTime, Timelike};

/// Seconds from midnight at which evening begins (18:00).
pub const EVENING_CUTOVER_SECS: u32 = 18 * 3600;

/// Whether `time` is strictly after 18:00.
///
/// From this point the next day's feast is kept at evening prayer:
/// eves take over the day label, and Christmas Eve and the Eve of the
/// Epiphany move into the following season. 18:00 itself is still day.
pub fn is_evening(time: NaiveTime) -> bool {
    (time.num_seconds_from_midnight(), time.nanosecond()) > (EVENING_CUTOVER_SECS, 0)
}
