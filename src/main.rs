#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]
use coin_tracker::{Cli, run_app};

/// Log levels as (other crates, this crate).
fn log_levels() -> (log::LevelFilter, log::LevelFilter) {
    if cfg!(debug_assertions) {
        (log::LevelFilter::Warn, log::LevelFilter::Info)
    } else {
        (log::LevelFilter::Error, log::LevelFilter::Error)
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result {
    use clap::Parser;
    use coin_tracker::PERSISTENCE;

    let (others, ours) = log_levels();
    env_logger::Builder::new()
        .filter(None, others)
        .filter(Some("coin_tracker"), ours)
        .init();

    std::panic::set_hook(Box::new(|info| {
        log::error!(
            "Panic: {}\n{}",
            info,
            std::backtrace::Backtrace::force_capture()
        );
    }));

    let args = Cli::parse();
    let options = eframe::NativeOptions {
        persistence_path: Some(PERSISTENCE.app.state_path.into()),
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 720.0])
            .with_title("Coin Tracker - Real-Time Cryptocurrency Tracker"),
        ..Default::default()
    };

    eframe::run_native(
        "Coin Tracker",
        options,
        Box::new(move |cc| Ok(Box::new(run_app(cc, args)))),
    )
}

// The browser build starts from `start` below.
#[cfg(target_arch = "wasm32")]
fn main() {}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub async fn start() -> Result<(), wasm_bindgen::JsValue> {
    use wasm_bindgen::JsCast;

    console_error_panic_hook::set_once();

    let (others, ours) = log_levels();
    let _ = fern::Dispatch::new()
        .level(others)
        .level_for("coin_tracker", ours)
        .chain(fern::Output::call(|record| {
            let msg = wasm_bindgen::JsValue::from(record.args().to_string());
            match record.level() {
                log::Level::Error => web_sys::console::error_1(&msg),
                log::Level::Warn => web_sys::console::warn_1(&msg),
                _ => web_sys::console::log_1(&msg),
            }
        }))
        .apply();

    let canvas = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id("the_canvas_id"))
        .ok_or("missing #the_canvas_id")?
        .dyn_into::<web_sys::HtmlCanvasElement>()
        .map_err(|_| "#the_canvas_id is not a canvas")?;

    eframe::WebRunner::new()
        .start(
            canvas,
            eframe::WebOptions::default(),
            Box::new(|cc| Ok(Box::new(run_app(cc, Cli::default())))),
        )
        .await
}
