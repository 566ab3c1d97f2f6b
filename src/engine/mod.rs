mod core;
mod feed;

pub use core::{EngineOptions, MarketEngine};
pub use feed::{FeedClock, MarketFeed};
