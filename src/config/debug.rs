//! Debugging feature flags.

#[allow(dead_code)]
pub struct LogFlags {
    /// Log every simulated tick (seq + asset count).
    pub log_feed_ticks: bool,

    /// Mock socket lifecycle and message traffic.
    pub log_socket_events: bool,

    /// Every action dispatched to the asset store.
    pub log_store_actions: bool,

    /// Activate trace_time macro (for cool scope-level timing)
    pub log_performance: bool,

    /// Sort / filter changes coming from the table header and filter bar.
    pub log_view_changes: bool,
}

pub const DF: LogFlags = LogFlags {
    log_socket_events: true,

    log_feed_ticks: false,
    log_store_actions: false,
    log_performance: false,
    log_view_changes: false,
};
