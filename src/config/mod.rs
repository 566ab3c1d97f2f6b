//! Configuration module for the coin tracker.

// Can all be private now because we have a public re-export.
mod debug;
mod demo;
mod feed;
mod persistence;
mod ticker;

// Re-export commonly used items
pub use debug::DF;
pub use demo::{DEMO, DemoConfig, SeedAsset};
pub use feed::{FEED, FeedConfig, Magnitude, SocketConfig, WalkBounds, WalkParams};
pub use persistence::PERSISTENCE;
pub use ticker::TICKER;
