use {
    crate::{
        config::{DEMO, SeedAsset},
        domain::{AssetId, Sparkline},
    },
    serde::{Deserialize, Deserializer, Serialize},
    std::fmt,
};

/// One tracked cryptocurrency's market snapshot record.
///
/// Serialized with camelCase keys (`change1h`, `marketCap`, `sparkline7d`, ...)
/// which is the transport shape the socket stub exchanges.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    pub id: AssetId,
    pub name: String,
    pub symbol: String,
    pub price: f64,
    pub change_1h: f64,
    pub change_24h: f64,
    pub change_7d: f64,
    pub market_cap: f64,
    pub volume_24h: f64,
    /// None when the circulating supply is unknown.
    pub circulating_supply: Option<f64>,
    /// None when the supply is uncapped.
    pub max_supply: Option<f64>,
    pub sparkline_7d: Sparkline,
}

impl Asset {
    pub fn from_seed(seed: &SeedAsset) -> Self {
        Self {
            id: AssetId::for_symbol(seed.symbol),
            name: seed.name.to_string(),
            symbol: seed.symbol.to_string(),
            price: seed.price,
            change_1h: seed.change_1h,
            change_24h: seed.change_24h,
            change_7d: seed.change_7d,
            market_cap: seed.market_cap,
            volume_24h: seed.volume_24h,
            circulating_supply: seed.circulating_supply,
            max_supply: seed.max_supply,
            sparkline_7d: Sparkline::new(seed.sparkline_7d),
        }
    }

    pub fn is_finite(&self) -> bool {
        [
            self.price,
            self.change_1h,
            self.change_24h,
            self.change_7d,
            self.market_cap,
            self.volume_24h,
        ]
        .iter()
        .all(|v| v.is_finite())
            && self.circulating_supply.is_none_or(f64::is_finite)
            && self.max_supply.is_none_or(f64::is_finite)
            && self.sparkline_7d.is_finite()
    }

    /// Merge the present fields of `patch` into this record.
    /// Returns true if any field actually changed.
    pub fn apply_patch(&mut self, patch: &AssetPatch) -> bool {
        let before = self.clone();

        if let Some(name) = &patch.name {
            self.name.clone_from(name);
        }
        if let Some(symbol) = &patch.symbol {
            self.symbol.clone_from(symbol);
        }
        if let Some(v) = patch.price {
            self.price = v;
        }
        if let Some(v) = patch.change_1h {
            self.change_1h = v;
        }
        if let Some(v) = patch.change_24h {
            self.change_24h = v;
        }
        if let Some(v) = patch.change_7d {
            self.change_7d = v;
        }
        if let Some(v) = patch.market_cap {
            self.market_cap = v;
        }
        if let Some(v) = patch.volume_24h {
            self.volume_24h = v;
        }
        if let Some(v) = patch.circulating_supply {
            self.circulating_supply = v;
        }
        if let Some(v) = patch.max_supply {
            self.max_supply = v;
        }
        if let Some(s) = patch.sparkline_7d {
            self.sparkline_7d = s;
        }

        *self != before
    }

    /// Case-insensitive containment test on name or symbol.
    /// `needle_lower` must already be lowercased.
    pub fn matches_text(&self, needle_lower: &str) -> bool {
        needle_lower.is_empty()
            || self.name.to_lowercase().contains(needle_lower)
            || self.symbol.to_lowercase().contains(needle_lower)
    }
}

impl fmt::Display for Asset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}) @ {:.2}", self.name, self.symbol, self.price)
    }
}

/// Partial update of an [`Asset`]. Absent fields are left untouched.
///
/// For the two nullable supplies the outer Option means "present in the
/// update", the inner one is the new value (`Some(None)` clears it).
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct AssetPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub change_1h: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub change_24h: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub change_7d: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub market_cap: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume_24h: Option<f64>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        deserialize_with = "present_nullable"
    )]
    pub circulating_supply: Option<Option<f64>>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        deserialize_with = "present_nullable"
    )]
    pub max_supply: Option<Option<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sparkline_7d: Option<Sparkline>,
}

impl AssetPatch {
    /// Patch that overwrites every field with the values of `asset`.
    pub fn full(asset: &Asset) -> Self {
        Self {
            name: Some(asset.name.clone()),
            symbol: Some(asset.symbol.clone()),
            price: Some(asset.price),
            change_1h: Some(asset.change_1h),
            change_24h: Some(asset.change_24h),
            change_7d: Some(asset.change_7d),
            market_cap: Some(asset.market_cap),
            volume_24h: Some(asset.volume_24h),
            circulating_supply: Some(asset.circulating_supply),
            max_supply: Some(asset.max_supply),
            sparkline_7d: Some(asset.sparkline_7d),
        }
    }

    pub fn is_finite(&self) -> bool {
        [
            self.price,
            self.change_1h,
            self.change_24h,
            self.change_7d,
            self.market_cap,
            self.volume_24h,
        ]
        .iter()
        .flatten()
        .all(|v| v.is_finite())
            && self.circulating_supply.flatten().is_none_or(f64::is_finite)
            && self.max_supply.flatten().is_none_or(f64::is_finite)
            && self.sparkline_7d.is_none_or(|s| s.is_finite())
    }
}

// `null` must deserialize to Some(None) ("clear it"), while a missing key
// falls back to the field default None ("leave it").
fn present_nullable<'de, D>(deserializer: D) -> Result<Option<Option<f64>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<f64>::deserialize(deserializer).map(Some)
}

/// The fixed list of assets every session starts from.
pub fn seed_assets() -> Vec<Asset> {
    DEMO.seeds.iter().map(Asset::from_seed).collect()
}
