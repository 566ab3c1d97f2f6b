mod maths_utils;
mod perf;
mod time_utils;

pub use time_utils::{
    AppInstant, MS_IN_H, MS_IN_MIN, MS_IN_S, current_year, epoch_ms_to_time_string,
    format_duration, now_timestamp_ms, now_utc,
};

pub use maths_utils::{min_max, normalize, round_2dp};
