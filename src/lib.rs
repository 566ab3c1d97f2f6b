#![allow(clippy::const_is_empty)]
#![allow(clippy::collapsible_if)]

// Core modules
pub mod analysis;
pub mod app;
pub mod config;
pub mod data;
pub mod domain;
pub mod engine;
pub mod models;
pub mod ui;
pub mod utils;

// Re-export commonly used types outside of crate (for the binaries and tests)
pub use app::App;
pub use config::{FEED, PERSISTENCE};
pub use domain::{Asset, AssetId, seed_assets};
pub use engine::{EngineOptions, MarketEngine};
pub use models::{AssetStore, MarketSnapshot, SortColumn, SortDirection, ViewQuery, project};

// CLI argument parsing
use clap::Parser;

#[derive(Parser, Debug, Clone, Default)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Milliseconds between simulated market ticks
    #[arg(long)]
    pub tick_ms: Option<u64>,

    /// Seed for the random walk (reproducible sessions)
    #[arg(long)]
    pub seed: Option<u64>,
}

impl Cli {
    pub fn engine_options(&self) -> EngineOptions {
        EngineOptions {
            tick_interval_ms: self.tick_ms.unwrap_or(FEED.tick_interval_ms),
            seed: self.seed,
        }
    }
}

/// Main application entry point - creates the GUI app
/// This is the public API for the binary to call
pub fn run_app(cc: &eframe::CreationContext<'_>, args: Cli) -> App {
    App::new(cc, args)
}
