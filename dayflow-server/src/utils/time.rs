//! Time helpers
//!
//! All timestamps are stored as epoch milliseconds. Attendance days are
//! keyed by the server's local calendar day truncated to midnight, so
//! callers cannot back-date a check-in.

use chrono::{Local, TimeZone};

const MILLIS_PER_HOUR: f64 = 3_600_000.0;

/// Current time in epoch milliseconds
pub fn now_millis() -> i64 {
    Local::now().timestamp_millis()
}

/// Midnight of the server's current local day, in epoch milliseconds
pub fn today_start_millis() -> i64 {
    let today = Local::now().date_naive();
    let midnight = today.and_hms_opt(0, 0, 0).unwrap_or_default();
    Local
        .from_local_datetime(&midnight)
        .earliest()
        .map(|dt| dt.timestamp_millis())
        .unwrap_or_default()
}

/// Work duration in hours between check-in and check-out, rounded to
/// two decimal places
pub fn work_duration_hours(check_in_millis: i64, check_out_millis: i64) -> f64 {
    let duration_ms = (check_out_millis - check_in_millis).max(0) as f64;
    round2(duration_ms / MILLIS_PER_HOUR)
}

/// Round to two decimal places
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
