use std::cmp::Ordering;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

use crate::domain::Asset;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn toggle(&self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

/// Table columns that can drive the ordering. `Display` is the header label,
/// `FromStr` also accepts the record keys (`"price"`, `"marketCap"`, `"#"`...).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter, Display, EnumString,
)]
pub enum SortColumn {
    #[strum(to_string = "#", serialize = "rank")]
    Rank,
    #[strum(to_string = "Name", serialize = "name")]
    Name,
    #[strum(to_string = "Price", serialize = "price")]
    Price,
    #[strum(to_string = "1h %", serialize = "change1h")]
    Change1h,
    #[strum(to_string = "24h %", serialize = "change24h")]
    Change24h,
    #[strum(to_string = "7d %", serialize = "change7d")]
    Change7d,
    #[strum(to_string = "Market Cap", serialize = "marketCap")]
    MarketCap,
    #[strum(to_string = "24h Volume", serialize = "volume24h")]
    Volume24h,
    #[strum(to_string = "Circulating Supply", serialize = "circulatingSupply")]
    CirculatingSupply,
    #[strum(to_string = "Max Supply", serialize = "maxSupply")]
    MaxSupply,
}

impl SortColumn {
    /// None for a key that names no column.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::from_str(key.trim()).ok()
    }

    // Nullable columns yield None for "unknown" / "uncapped".
    fn value(&self, asset: &Asset) -> Option<f64> {
        match self {
            SortColumn::Price => Some(asset.price),
            SortColumn::Change1h => Some(asset.change_1h),
            SortColumn::Change24h => Some(asset.change_24h),
            SortColumn::Change7d => Some(asset.change_7d),
            SortColumn::MarketCap => Some(asset.market_cap),
            SortColumn::Volume24h => Some(asset.volume_24h),
            SortColumn::CirculatingSupply => asset.circulating_supply,
            SortColumn::MaxSupply => asset.max_supply,
            SortColumn::Rank | SortColumn::Name => None,
        }
    }

    /// Ascending comparison. Nulls sort first.
    fn compare(&self, a: (usize, &Asset), b: (usize, &Asset)) -> Ordering {
        match self {
            SortColumn::Rank => a.0.cmp(&b.0),
            SortColumn::Name => a.1.name.to_lowercase().cmp(&b.1.name.to_lowercase()),
            _ => match (self.value(a.1), self.value(b.1)) {
                (None, None) => Ordering::Equal,
                (None, Some(_)) => Ordering::Less,
                (Some(_), None) => Ordering::Greater,
                (Some(x), Some(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
            },
        }
    }
}

/// One side of the price window, parsed from what the user typed.
/// Blank, non-numeric or non-finite text means "no bound".
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PriceBound(Option<f64>);

impl PriceBound {
    pub fn parse(text: &str) -> Self {
        Self(text.trim().parse::<f64>().ok().filter(|v| v.is_finite()))
    }

    pub fn value(&self) -> Option<f64> {
        self.0
    }
}

/// Everything the table needs to derive its rows: filter text, price
/// bounds (kept as the raw text the user typed) and ordering.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewQuery {
    pub text: String,
    pub min_price: String,
    pub max_price: String,
    pub sort: Option<SortColumn>,
    pub direction: SortDirection,
}

impl ViewQuery {
    /// Header-click semantics: same column flips direction, a new column
    /// starts ascending.
    pub fn toggle_sort(&mut self, column: SortColumn) {
        if self.sort == Some(column) {
            self.direction = self.direction.toggle();
        } else {
            self.sort = Some(column);
            self.direction = SortDirection::Ascending;
        }
    }

    /// Same as `toggle_sort` but from a record key. An unknown key leaves
    /// the ordering unchanged and returns false.
    pub fn sort_by_key(&mut self, key: &str) -> bool {
        match SortColumn::from_key(key) {
            Some(column) => {
                self.toggle_sort(column);
                true
            }
            None => false,
        }
    }

    pub fn min_bound(&self) -> Option<f64> {
        PriceBound::parse(&self.min_price).value()
    }

    pub fn max_bound(&self) -> Option<f64> {
        PriceBound::parse(&self.max_price).value()
    }

    pub fn is_filtered(&self) -> bool {
        !self.text.trim().is_empty() || self.min_bound().is_some() || self.max_bound().is_some()
    }

    pub fn clear_filters(&mut self) {
        self.text.clear();
        self.min_price.clear();
        self.max_price.clear();
    }
}

/// One visible table row.
#[derive(Debug, Clone, Copy)]
pub struct AssetRow<'a> {
    /// 1-based position in the projected result.
    pub rank: usize,
    /// Position in the source snapshot.
    pub index: usize,
    pub asset: &'a Asset,
}

/// Filters and orders `assets` for display. Pure: recomputed from scratch
/// whenever the query or the snapshot changes.
pub fn project<'a>(assets: &'a [Asset], query: &ViewQuery) -> Vec<AssetRow<'a>> {
    let needle = query.text.trim().to_lowercase();
    let min = query.min_bound();
    let max = query.max_bound();

    let mut kept: Vec<(usize, &Asset)> = assets
        .iter()
        .enumerate()
        .filter(|(_, a)| a.matches_text(&needle))
        .filter(|(_, a)| min.is_none_or(|m| a.price >= m))
        .filter(|(_, a)| max.is_none_or(|m| a.price <= m))
        .collect();

    if let Some(column) = query.sort {
        // sort_by is stable, so ties keep snapshot order in both directions.
        kept.sort_by(|a, b| {
            let ord = column.compare(*a, *b);
            match query.direction {
                SortDirection::Ascending => ord,
                SortDirection::Descending => ord.reverse(),
            }
        });
    }

    kept.into_iter()
        .enumerate()
        .map(|(pos, (index, asset))| AssetRow {
            rank: pos + 1,
            index,
            asset,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::seed_assets;

    fn symbols(rows: &[AssetRow]) -> Vec<String> {
        rows.iter().map(|r| r.asset.symbol.clone()).collect()
    }

    fn sorted(column: SortColumn, direction: SortDirection) -> ViewQuery {
        ViewQuery {
            sort: Some(column),
            direction,
            ..Default::default()
        }
    }

    #[test]
    fn empty_query_returns_everything_in_snapshot_order() {
        let assets = seed_assets();
        let rows = project(&assets, &ViewQuery::default());
        assert_eq!(symbols(&rows), ["BTC", "ETH", "USDT", "XRP", "BNB"]);
        assert_eq!(rows[4].rank, 5);
    }

    #[test]
    fn query_with_no_match_is_empty() {
        let assets = seed_assets();
        let query = ViewQuery {
            text: "dogecoin".into(),
            ..Default::default()
        };
        assert!(project(&assets, &query).is_empty());
    }

    #[test]
    fn bit_matches_bitcoin_not_ethereum() {
        let assets = seed_assets();
        let query = ViewQuery {
            text: "BiT".into(),
            ..Default::default()
        };
        assert_eq!(symbols(&project(&assets, &query)), ["BTC"]);
    }

    #[test]
    fn query_matches_symbol_too() {
        let assets = seed_assets();
        let query = ViewQuery {
            text: "usd".into(),
            ..Default::default()
        };
        assert_eq!(symbols(&project(&assets, &query)), ["USDT"]);
    }

    #[test]
    fn two_asset_price_sort() {
        let assets: Vec<_> = seed_assets().into_iter().take(2).collect();
        let asc = project(&assets, &sorted(SortColumn::Price, SortDirection::Ascending));
        assert_eq!(symbols(&asc), ["ETH", "BTC"]);
        let desc = project(&assets, &sorted(SortColumn::Price, SortDirection::Descending));
        assert_eq!(symbols(&desc), ["BTC", "ETH"]);
    }

    #[test]
    fn descending_is_reverse_of_ascending() {
        let assets = seed_assets();
        let mut asc = symbols(&project(
            &assets,
            &sorted(SortColumn::Price, SortDirection::Ascending),
        ));
        let desc = symbols(&project(
            &assets,
            &sorted(SortColumn::Price, SortDirection::Descending),
        ));
        asc.reverse();
        assert_eq!(asc, desc);
    }

    #[test]
    fn ties_stay_in_snapshot_order() {
        let mut assets = seed_assets();
        for a in &mut assets {
            a.change_1h = 0.5;
        }
        let asc = project(&assets, &sorted(SortColumn::Change1h, SortDirection::Ascending));
        let desc = project(&assets, &sorted(SortColumn::Change1h, SortDirection::Descending));
        assert_eq!(symbols(&asc), ["BTC", "ETH", "USDT", "XRP", "BNB"]);
        assert_eq!(symbols(&desc), ["BTC", "ETH", "USDT", "XRP", "BNB"]);
    }

    #[test]
    fn price_window_is_inclusive() {
        let assets = seed_assets();
        let query = ViewQuery {
            min_price: "10".into(),
            max_price: "1000".into(),
            ..Default::default()
        };
        assert_eq!(symbols(&project(&assets, &query)), ["BNB"]);

        let wider = ViewQuery {
            min_price: "0.5".into(),
            max_price: "1000".into(),
            ..Default::default()
        };
        assert_eq!(symbols(&project(&assets, &wider)), ["USDT", "XRP", "BNB"]);

        let exact = ViewQuery {
            min_price: "360.65".into(),
            max_price: "360.65".into(),
            ..Default::default()
        };
        assert_eq!(symbols(&project(&assets, &exact)), ["BNB"]);
    }

    #[test]
    fn malformed_bounds_are_ignored() {
        let assets = seed_assets();
        let query = ViewQuery {
            min_price: "abc".into(),
            max_price: "NaN".into(),
            ..Default::default()
        };
        assert_eq!(project(&assets, &query).len(), assets.len());
        assert!(!query.is_filtered());
        assert_eq!(PriceBound::parse(" 12.5 ").value(), Some(12.5));
        assert_eq!(PriceBound::parse("inf").value(), None);
        assert_eq!(PriceBound::parse("").value(), None);
    }

    #[test]
    fn uncapped_max_supply_sorts_first_ascending_last_descending() {
        let assets = seed_assets();
        let asc = symbols(&project(
            &assets,
            &sorted(SortColumn::MaxSupply, SortDirection::Ascending),
        ));
        assert_eq!(asc, ["ETH", "USDT", "BNB", "BTC", "XRP"]);
        let desc = symbols(&project(
            &assets,
            &sorted(SortColumn::MaxSupply, SortDirection::Descending),
        ));
        assert_eq!(desc, ["XRP", "BTC", "ETH", "USDT", "BNB"]);
    }

    #[test]
    fn name_sort_ignores_case() {
        let mut assets = seed_assets();
        assets[2].name = "tether".into();
        let rows = project(&assets, &sorted(SortColumn::Name, SortDirection::Ascending));
        assert_eq!(symbols(&rows), ["BNB", "BTC", "ETH", "USDT", "XRP"]);
    }

    #[test]
    fn rank_sort_uses_snapshot_position() {
        let assets = seed_assets();
        let rows = project(&assets, &sorted(SortColumn::Rank, SortDirection::Descending));
        assert_eq!(symbols(&rows), ["BNB", "XRP", "USDT", "ETH", "BTC"]);
        assert_eq!(rows[0].index, 4);
        assert_eq!(rows[0].rank, 1);
    }

    #[test]
    fn header_clicks_toggle_direction() {
        let mut query = ViewQuery::default();
        query.toggle_sort(SortColumn::Price);
        assert_eq!(query.direction, SortDirection::Ascending);
        query.toggle_sort(SortColumn::Price);
        assert_eq!(query.direction, SortDirection::Descending);
        query.toggle_sort(SortColumn::Name);
        assert_eq!(query.sort, Some(SortColumn::Name));
        assert_eq!(query.direction, SortDirection::Ascending);
    }

    #[test]
    fn unknown_sort_key_leaves_order_unchanged() {
        let mut query = ViewQuery::default();
        assert!(!query.sort_by_key("colour"));
        assert_eq!(query.sort, None);
        assert!(query.sort_by_key("marketCap"));
        assert_eq!(query.sort, Some(SortColumn::MarketCap));
        assert_eq!(SortColumn::from_key("#"), Some(SortColumn::Rank));
        assert_eq!(SortColumn::Volume24h.to_string(), "24h Volume");
    }
}
