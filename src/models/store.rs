use {
    super::MarketSnapshot,
    crate::{
        config::DF,
        domain::{Asset, AssetId, AssetPatch},
        utils::now_timestamp_ms,
    },
    anyhow::{Result, bail},
    std::sync::Arc,
};

/// Actions the store understands.
#[derive(Debug, Clone, PartialEq)]
pub enum StoreAction {
    /// Merge fields into the asset with this id. Unknown ids are ignored.
    UpdateAsset { id: AssetId, patch: AssetPatch },
    /// Swap the whole collection.
    ReplaceAll(Vec<Asset>),
}

/// Explicit state container for the asset collection.
///
/// Owned by whoever drives the session (the GUI `App` through its engine,
/// or the headless CLI) and handed to readers by reference. The published
/// snapshot is never mutated: each change builds and publishes a new one.
pub struct AssetStore {
    current: Arc<MarketSnapshot>,
}

impl AssetStore {
    pub fn new(assets: Vec<Asset>) -> Result<Self> {
        MarketSnapshot::validate(&assets)?;
        Ok(Self {
            current: Arc::new(MarketSnapshot::new(0, now_timestamp_ms(), assets)),
        })
    }

    pub fn snapshot(&self) -> Arc<MarketSnapshot> {
        Arc::clone(&self.current)
    }

    /// Borrow the current snapshot without bumping the refcount.
    pub fn current(&self) -> &MarketSnapshot {
        &self.current
    }

    pub fn seq(&self) -> u64 {
        self.current.seq
    }

    /// Install an externally built snapshot (the feed's next tick).
    /// Its `seq` is forced past the current one so readers always see
    /// a monotonic sequence.
    pub fn publish(&mut self, mut next: MarketSnapshot) -> Result<()> {
        MarketSnapshot::validate(&next.assets)?;
        next.seq = next.seq.max(self.current.seq + 1);
        self.current = Arc::new(next);
        Ok(())
    }

    /// Apply an action. Returns whether a new snapshot was published.
    pub fn dispatch(&mut self, action: StoreAction) -> Result<bool> {
        #[cfg(debug_assertions)]
        if DF.log_store_actions {
            log::info!("Store action: {:?}", action);
        }

        match action {
            StoreAction::UpdateAsset { id, patch } => {
                let Some(idx) = self.current.position(&id) else {
                    log::debug!("Ignoring update for unknown asset {}", id);
                    return Ok(false);
                };
                if !patch.is_finite() {
                    bail!("Rejected update for {}: non-finite fields", id);
                }
                let mut assets = self.current.assets.clone();
                if !assets[idx].apply_patch(&patch) {
                    return Ok(false);
                }
                self.publish(MarketSnapshot::new(
                    self.current.seq + 1,
                    now_timestamp_ms(),
                    assets,
                ))?;
                Ok(true)
            }
            StoreAction::ReplaceAll(assets) => {
                if assets == self.current.assets {
                    return Ok(false);
                }
                self.publish(MarketSnapshot::new(
                    self.current.seq + 1,
                    now_timestamp_ms(),
                    assets,
                ))?;
                Ok(true)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::seed_assets;

    #[test]
    fn update_publishes_new_snapshot_and_keeps_old_intact() {
        let mut store = AssetStore::new(seed_assets()).unwrap();
        let before = store.snapshot();
        let btc = before.assets[0].id.clone();

        let changed = store
            .dispatch(StoreAction::UpdateAsset {
                id: btc.clone(),
                patch: AssetPatch {
                    price: Some(70_000.0),
                    ..Default::default()
                },
            })
            .unwrap();

        assert!(changed);
        assert_eq!(before.assets[0].price, 63759.48);
        let after = store.snapshot();
        assert_eq!(after.get(&btc).map(|a| a.price), Some(70_000.0));
        assert_eq!(after.seq, before.seq + 1);
    }

    #[test]
    fn unknown_id_is_ignored() {
        let mut store = AssetStore::new(seed_assets()).unwrap();
        let changed = store
            .dispatch(StoreAction::UpdateAsset {
                id: AssetId::new("nope"),
                patch: AssetPatch {
                    price: Some(1.0),
                    ..Default::default()
                },
            })
            .unwrap();
        assert!(!changed);
        assert_eq!(store.seq(), 0);
    }

    #[test]
    fn identical_patch_does_not_publish() {
        let mut store = AssetStore::new(seed_assets()).unwrap();
        let btc = store.current().assets[0].clone();
        let changed = store
            .dispatch(StoreAction::UpdateAsset {
                id: btc.id.clone(),
                patch: AssetPatch::full(&btc),
            })
            .unwrap();
        assert!(!changed);
    }

    #[test]
    fn replace_all_rejects_duplicate_ids() {
        let mut store = AssetStore::new(seed_assets()).unwrap();
        let mut dupes = seed_assets();
        dupes[1].id = dupes[0].id.clone();
        assert!(store.dispatch(StoreAction::ReplaceAll(dupes)).is_err());
        assert_eq!(store.seq(), 0, "old snapshot stays published");
    }

    #[test]
    fn non_finite_patch_is_rejected() {
        let mut store = AssetStore::new(seed_assets()).unwrap();
        let id = store.current().assets[0].id.clone();
        let result = store.dispatch(StoreAction::UpdateAsset {
            id,
            patch: AssetPatch {
                price: Some(f64::NAN),
                ..Default::default()
            },
        });
        assert!(result.is_err());
    }

    #[test]
    fn new_store_rejects_duplicates() {
        let mut assets = seed_assets();
        assets.push(assets[0].clone());
        assert!(AssetStore::new(assets).is_err());
    }
}
