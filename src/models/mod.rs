mod market_view;
mod snapshot;
mod store;

pub use market_view::{AssetRow, PriceBound, SortColumn, SortDirection, ViewQuery, project};
pub use snapshot::MarketSnapshot;
pub use store::{AssetStore, StoreAction};
