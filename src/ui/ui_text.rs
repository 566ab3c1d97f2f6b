use std::sync::LazyLock;

// Glyphs available in egui's bundled emoji font.
pub const ICON_SORT_ASC: &str = "⏶";
pub const ICON_SORT_DESC: &str = "⏷";
pub const ICON_SEARCH: &str = "🔍";
pub const ICON_CLOSE: &str = "🗙";
pub const ICON_CHART: &str = "📈";
pub const ICON_PLUG: &str = "🔌";

pub struct UiText {
    pub icon_sort_asc: String,
    pub icon_sort_desc: String,
    pub icon_close: String,
    pub icon_search: String,
    pub icon_chart: String,
    pub icon_plug: String,

    // --- Header ---
    pub app_title: String,
    pub app_subtitle: String,

    // --- Filter bar ---
    pub filter_hint: String,
    pub min_price_hint: String,
    pub max_price_hint: String,
    pub filter_clear: String,
    pub filter_showing: String,

    // --- Table ---
    pub col_chart: String,
    pub table_empty: String,

    // --- Trend panel ---
    pub trend_heading: String,
    pub trend_none_selected: String,
    pub trend_x_axis: String,
    pub trend_y_axis: String,
    pub trend_net_change: String,
    pub trend_range: String,

    // --- Connecting screen ---
    pub cs_title: String,
    pub cs_connecting_to: String,
    pub cs_engine_failed: String,

    // --- Status bar ---
    pub sb_socket: String,
    pub sb_ticks: String,
    pub sb_snapshot: String,
    pub sb_updated: String,
    pub sb_footer: String,
}

pub static UI_TEXT: LazyLock<UiText> = LazyLock::new(|| UiText {
    icon_sort_asc: ICON_SORT_ASC.to_string(),
    icon_sort_desc: ICON_SORT_DESC.to_string(),
    icon_close: ICON_CLOSE.to_string(),
    icon_search: ICON_SEARCH.to_string(),
    icon_chart: ICON_CHART.to_string(),
    icon_plug: ICON_PLUG.to_string(),

    app_title: "Real-Time Cryptocurrency Tracker".to_string(),
    app_subtitle: "Live price updates and market data".to_string(),

    filter_hint: "Filter by name or symbol".to_string(),
    min_price_hint: "Min price".to_string(),
    max_price_hint: "Max price".to_string(),
    filter_clear: "Clear".to_string(),
    filter_showing: "Showing".to_string(),

    col_chart: "7D Chart".to_string(),
    table_empty: "No assets match the current filters.".to_string(),

    trend_heading: "7 Day Trend".to_string(),
    trend_none_selected: "Click a row to plot its trend.".to_string(),
    trend_x_axis: "Sample".to_string(),
    trend_y_axis: "Price".to_string(),
    trend_net_change: "Net".to_string(),
    trend_range: "Range".to_string(),

    cs_title: "Connecting to market feed...".to_string(),
    cs_connecting_to: "Opening".to_string(),
    cs_engine_failed: "Market engine failed to start".to_string(),

    sb_socket: "Socket".to_string(),
    sb_ticks: "Ticks".to_string(),
    sb_snapshot: "Snapshot".to_string(),
    sb_updated: "Updated".to_string(),
    sb_footer: "Cryptocurrency Tracker".to_string(),
});
