use eframe::egui::Color32;

pub struct TickerConfig {
    pub height: f32,
    pub speed_pixels_per_sec: f32,
    pub font_size: f32,
    pub item_spacing: f32,
    pub background_color: Color32,

    // Colors
    pub text_color_neutral: Color32,
    pub text_color_up: Color32,
    pub text_color_down: Color32,
    pub text_color_message: Color32,

    pub custom_messages: &'static [&'static str],
}

pub const TICKER: TickerConfig = TickerConfig {
    height: 18.0,
    speed_pixels_per_sec: 60.0, // Keep at 60 - perfect number for 60fps monitors etc.
    font_size: 10.0,
    item_spacing: 40.0,
    background_color: Color32::from_rgb(10, 10, 15), // Very dark

    text_color_neutral: Color32::LIGHT_GRAY,
    text_color_up: Color32::GREEN,
    text_color_down: Color32::RED,
    text_color_message: Color32::GOLD,

    custom_messages: &["SIMULATED PRICES - NOT FINANCIAL DATA", "Built with Rust"],
};
