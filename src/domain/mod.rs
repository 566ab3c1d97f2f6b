// Domain types and value objects
mod asset;
mod asset_id;
mod sparkline;

// Re-export commonly used types to the world
pub use asset::{Asset, AssetPatch, seed_assets};
pub use asset_id::AssetId;
pub use sparkline::{SPARKLINE_LEN, Sparkline};
