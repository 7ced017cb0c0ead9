//! Time-window checks for scheduling rooms.

use chrono::{DateTime, Duration, Utc};

/// Smallest and largest 13-digit millisecond timestamps accepted on the wire.
const MIN_UNIX_MILLIS: i64 = 1_000_000_000_000;
const MAX_UNIX_MILLIS: i64 = 9_999_999_999_999;

/// Whether `value` is a 13-digit Unix timestamp in milliseconds.
pub fn is_unix_timestamp_millis(value: i64) -> bool {
    (MIN_UNIX_MILLIS..=MAX_UNIX_MILLIS).contains(&value)
}

/// Converts Unix milliseconds to a UTC timestamp, `None` when out of range.
pub fn from_unix_millis(value: i64) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp_millis(value)
}

/// Whether `begin_time` lies more than one minute before `now`.
pub fn begin_time_exceeds_redundancy_one_minute(
    begin_time: DateTime<Utc>,
    now: DateTime<Utc>,
) -> bool {
    begin_time < now - Duration::minutes(1)
}

/// Whether `begin_time` is later than `end_time`.
pub fn begin_time_after_end_time(begin_time: DateTime<Utc>, end_time: DateTime<Utc>) -> bool {
    begin_time > end_time
}

/// Whether fewer than fifteen minutes separate `begin_time` and `end_time`.
pub fn interval_less_than_fifteen_minutes(
    begin_time: DateTime<Utc>,
    end_time: DateTime<Utc>,
) -> bool {
    end_time - begin_time < Duration::minutes(15)
}
