//! Time utilities: epoch conversion, HH:MM parsing, display formatting.

use chrono::{DateTime, Duration, Local, NaiveDateTime, NaiveTime, Timelike};

/// Current local wall-clock time, truncated to whole seconds.
pub fn now() -> NaiveDateTime {
    truncate_seconds(Local::now().naive_local())
}

/// Drop sub-second precision; stored timestamps have seconds resolution.
pub fn truncate_seconds(dt: NaiveDateTime) -> NaiveDateTime {
    dt.with_nanosecond(0).unwrap_or(dt)
}

/// A wall-clock time that does not exist locally (DST gap) is moved
/// forward by one hour, past the gap; any other time is returned as is.
pub fn normalize_local(dt: NaiveDateTime) -> NaiveDateTime {
    if dt.and_local_timezone(Local).earliest().is_some() {
        return dt;
    }
    match dt.checked_add_signed(Duration::hours(1)) {
        Some(shifted) if shifted.and_local_timezone(Local).earliest().is_some() => shifted,
        _ => dt,
    }
}

/// Local wall-clock time → seconds since epoch.
/// Gap times are stored in their `normalize_local` form.
pub fn to_epoch(dt: NaiveDateTime) -> i64 {
    let dt = normalize_local(dt);
    match dt.and_local_timezone(Local).earliest() {
        Some(local) => local.timestamp(),
        None => dt.and_utc().timestamp(),
    }
}

/// Seconds since epoch → local wall-clock time.
pub fn from_epoch(ts: i64) -> Option<NaiveDateTime> {
    DateTime::from_timestamp(ts, 0).map(|utc| utc.with_timezone(&Local).naive_local())
}

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t.trim(), "%H:%M").ok()
}

pub fn format_datetime(dt: &NaiveDateTime) -> String {
    dt.format("%Y-%m-%d %H:%M").to_string()
}

/// Long form used in listings, e.g. "Friday 2025-December-26 19:00".
pub fn format_weekday_datetime(dt: &NaiveDateTime) -> String {
    dt.format("%A %Y-%B-%d %H:%M").to_string()
}
