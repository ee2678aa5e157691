//! Time-related utilities.

use chrono::{DateTime, Local, Utc};

/// Get current Unix timestamp (milliseconds)
pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

/// Convert Unix timestamp (milliseconds) to a local `HH:MM:SS` clock label
///
/// Out-of-range timestamps fall back to `--:--:--`.
pub fn timestamp_to_local_clock(timestamp_millis: i64) -> String {
    match DateTime::<Utc>::from_timestamp_millis(timestamp_millis) {
        Some(utc) => utc.with_timezone(&Local).format("%H:%M:%S").to_string(),
        None => "--:--:--".to_string(),
    }
}
