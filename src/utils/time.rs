//! Time utilities: parsing HH:MM, minute offsets, normalizing, etc.

use crate::errors::{AppError, AppResult};
use chrono::{NaiveTime, Timelike};

pub const MINUTES_PER_DAY: i64 = 24 * 60;

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t.trim(), "%H:%M").ok()
}

/// Minutes since midnight for an `HH:MM` string.
pub fn to_minutes(t: &str) -> AppResult<i64> {
    let time = parse_time(t).ok_or_else(|| AppError::InvalidTimeFormat(t.to_string()))?;
    Ok(time.hour() as i64 * 60 + time.minute() as i64)
}

/// Inverse of [`to_minutes`]; offsets outside one day wrap around.
pub fn minutes_to_time(minutes: i64) -> String {
    let m = minutes.rem_euclid(MINUTES_PER_DAY);
    format!("{:02}:{:02}", m / 60, m % 60)
}

/// Normalizes `8:05` into `08:05`.
pub fn normalize_time(t: &str) -> AppResult<String> {
    Ok(minutes_to_time(to_minutes(t)?))
}
