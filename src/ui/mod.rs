mod asset_table;
mod screens;
mod styles;
mod ticker;
mod trend_panel;
mod ui_config;
mod ui_render;
mod ui_text;
mod utils;

pub(crate) use screens::render_connecting;

pub(crate) use styles::{UiStyleExt, get_change_color};
pub(crate) use ticker::TickerState;

pub(crate) use ui_config::{UI_CONFIG, UI_TEXT};

pub use utils::{format_number, format_percentage, format_price, format_supply, format_usd_compact};
