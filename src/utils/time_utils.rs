use chrono::{DateTime, Datelike, Utc};

// web_time gives us a monotonic Instant that also works in the browser.
pub type AppInstant = web_time::Instant;

pub const MS_IN_S: i64 = 1000;
pub const MS_IN_MIN: i64 = MS_IN_S * 60;
pub const MS_IN_H: i64 = MS_IN_MIN * 60;
pub const STANDARD_TIME_FORMAT: &str = "%H:%M:%S";

pub fn now_utc() -> DateTime<Utc> {
    Utc::now()
}

pub fn now_timestamp_ms() -> i64 {
    now_utc().timestamp_millis()
}

pub fn current_year() -> i32 {
    now_utc().year()
}

/// Wall-clock label for a snapshot timestamp, e.g. `14:05:09`.
pub fn epoch_ms_to_time_string(epoch_ms: i64) -> String {
    match DateTime::from_timestamp_millis(epoch_ms) {
        Some(dt) => dt.format(STANDARD_TIME_FORMAT).to_string(),
        None => "--:--:--".to_string(),
    }
}

pub fn format_duration(ms: i64) -> String {
    let secs = ms / MS_IN_S;
    if secs < 60 {
        return format!("{}s", secs);
    }
    let mins = ms / MS_IN_MIN;
    if mins < 60 {
        return format!("{}m {}s", mins, secs % 60);
    }
    let hours = ms / MS_IN_H;
    format!("{}h {}m", hours, mins % 60)
}
