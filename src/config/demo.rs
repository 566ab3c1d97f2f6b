/// Static description of one asset the session starts with.
pub struct SeedAsset {
    pub name: &'static str,
    pub symbol: &'static str,
    pub price: f64,
    pub change_1h: f64,
    pub change_24h: f64,
    pub change_7d: f64,
    pub market_cap: f64,
    pub volume_24h: f64,
    pub circulating_supply: Option<f64>,
    pub max_supply: Option<f64>,
    pub sparkline_7d: [f64; 7],
}

pub struct DemoConfig {
    /// Namespace for deterministic (v5) asset ids.
    pub id_namespace: &'static str,
    pub seeds: &'static [SeedAsset],
}

pub const DEMO: DemoConfig = DemoConfig {
    id_namespace: "coin-tracker.assets",
    seeds: &[
        SeedAsset {
            name: "Bitcoin",
            symbol: "BTC",
            price: 63759.48,
            change_1h: 0.43,
            change_24h: 0.93,
            change_7d: 11.11,
            market_cap: 1_181_618_902_186.0,
            volume_24h: 43_874_350_047.0,
            circulating_supply: Some(19.65),
            max_supply: Some(21.0),
            sparkline_7d: [60000.0, 61500.0, 62000.0, 63000.0, 62500.0, 63500.0, 63700.0],
        },
        SeedAsset {
            name: "Ethereum",
            symbol: "ETH",
            price: 3180.02,
            change_1h: 0.60,
            change_24h: 3.21,
            change_7d: 13.68,
            market_cap: 381_589_279_327.0,
            volume_24h: 23_347_469_307.0,
            circulating_supply: Some(120.71),
            max_supply: None,
            sparkline_7d: [2900.0, 3000.0, 3050.0, 3100.0, 3080.0, 3150.0, 3170.0],
        },
        SeedAsset {
            name: "Tether",
            symbol: "USDT",
            price: 1.00,
            change_1h: 0.00,
            change_24h: 0.00,
            change_7d: 0.04,
            market_cap: 105_320_022_085.0,
            volume_24h: 92_288_882_007.0,
            circulating_supply: Some(105.27),
            max_supply: None,
            sparkline_7d: [0.998, 0.999, 1.001, 1.00, 1.002, 1.00, 1.00],
        },
        SeedAsset {
            name: "XRP",
            symbol: "XRP",
            price: 0.52,
            change_1h: 0.46,
            change_24h: 0.54,
            change_7d: 6.18,
            market_cap: 27_303_114_966.0,
            volume_24h: 15_731_481_491.0,
            circulating_supply: Some(54.39),
            max_supply: Some(100.0),
            sparkline_7d: [0.48, 0.50, 0.51, 0.52, 0.515, 0.525, 0.52],
        },
        SeedAsset {
            name: "Binance Coin",
            symbol: "BNB",
            price: 360.65,
            change_1h: 0.09,
            change_24h: 1.20,
            change_7d: 3.73,
            market_cap: 55_471_256_847.0,
            volume_24h: 1_874_281_784.0,
            circulating_supply: Some(153.83),
            max_supply: None,
            sparkline_7d: [340.0, 350.0, 355.0, 360.0, 358.0, 362.0, 361.0],
        },
    ],
};
