use {
    crate::domain::{Asset, AssetId},
    anyhow::{Result, bail},
    std::collections::HashSet,
};

/// Immutable view of the whole collection at one point in time.
/// Every tick or store action publishes a new one; readers hold an `Arc`.
#[derive(Debug, Clone, PartialEq)]
pub struct MarketSnapshot {
    /// Bumped on every publish.
    pub seq: u64,
    pub taken_at_ms: i64,
    pub assets: Vec<Asset>,
}

impl MarketSnapshot {
    pub fn new(seq: u64, taken_at_ms: i64, assets: Vec<Asset>) -> Self {
        Self {
            seq,
            taken_at_ms,
            assets,
        }
    }

    pub fn len(&self) -> usize {
        self.assets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }

    pub fn get(&self, id: &AssetId) -> Option<&Asset> {
        self.assets.iter().find(|a| &a.id == id)
    }

    pub fn position(&self, id: &AssetId) -> Option<usize> {
        self.assets.iter().position(|a| &a.id == id)
    }

    pub fn by_symbol(&self, symbol: &str) -> Option<&Asset> {
        self.assets
            .iter()
            .find(|a| a.symbol.eq_ignore_ascii_case(symbol))
    }

    /// Unique ids and finite numbers, the invariants every published
    /// snapshot must hold.
    pub fn validate(assets: &[Asset]) -> Result<()> {
        let mut seen = HashSet::with_capacity(assets.len());
        for asset in assets {
            if !seen.insert(&asset.id) {
                bail!("Duplicate asset id {} ({})", asset.id, asset.symbol);
            }
            if !asset.is_finite() {
                bail!("Asset {} ({}) has non-finite fields", asset.id, asset.symbol);
            }
        }
        Ok(())
    }
}
