// Transport-neutral Asset records: JSON with camelCase keys.

use {
    crate::domain::{Asset, AssetId, AssetPatch},
    anyhow::{Context, Result, bail},
    serde::{Deserialize, Serialize},
};

/// A partial record as it travels over the socket: only `id` is required.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PatchRecord {
    pub id: AssetId,
    #[serde(flatten)]
    pub patch: AssetPatch,
}

pub fn encode_asset(asset: &Asset) -> Result<String> {
    serde_json::to_string(asset).context("Failed to encode asset record")
}

pub fn decode_asset(data: &str) -> Result<Asset> {
    let asset: Asset = serde_json::from_str(data).context("Malformed asset record")?;
    if !asset.is_finite() {
        bail!("Asset record {} carries non-finite numbers", asset.id);
    }
    Ok(asset)
}

pub fn encode_assets(assets: &[Asset]) -> Result<String> {
    serde_json::to_string(assets).context("Failed to encode asset records")
}

pub fn decode_assets(data: &str) -> Result<Vec<Asset>> {
    let assets: Vec<Asset> = serde_json::from_str(data).context("Malformed asset records")?;
    if let Some(bad) = assets.iter().find(|a| !a.is_finite()) {
        bail!("Asset record {} carries non-finite numbers", bad.id);
    }
    Ok(assets)
}

/// Decodes a message of full or partial records into per-id patches.
pub fn decode_patches(data: &str) -> Result<Vec<(AssetId, AssetPatch)>> {
    let records: Vec<PatchRecord> =
        serde_json::from_str(data).context("Malformed asset update message")?;
    if let Some(bad) = records.iter().find(|r| !r.patch.is_finite()) {
        bail!("Update for {} carries non-finite numbers", bad.id);
    }
    Ok(records.into_iter().map(|r| (r.id, r.patch)).collect())
}
