//! Simulated market feed settings.

/// Perturbation size for one field, fed to the random walk.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Magnitude {
    /// Fraction of the field's current (absolute) value.
    Relative(f64),
    /// Fixed cap, independent of the current value.
    Absolute(f64),
}

impl Magnitude {
    pub fn resolve(&self, current: f64) -> f64 {
        match *self {
            Magnitude::Relative(fraction) => current.abs() * fraction,
            Magnitude::Absolute(cap) => cap,
        }
    }
}

/// One magnitude per simulated field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WalkParams {
    pub price: Magnitude,
    pub change_1h: Magnitude,
    pub change_24h: Magnitude,
    pub change_7d: Magnitude,
    pub volume_24h: Magnitude,
    pub market_cap: Magnitude,
    pub sparkline_sample: Magnitude,
}

/// Post-step policy applied by the feed. The raw walk itself never clamps.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WalkBounds {
    /// Price, volume, market cap and sparkline samples never drop below 0.
    pub floor_non_negative: bool,
}

pub struct SocketConfig {
    pub url: &'static str,
    /// Time from `connect` until the stub reports itself open.
    pub open_delay_ms: u64,
    /// Time an echoed `send` takes to come back.
    pub echo_delay_ms: u64,
}

pub struct FeedConfig {
    pub tick_interval_ms: u64,
    pub walk: WalkParams,
    pub bounds: WalkBounds,
    pub socket: SocketConfig,
}

pub const FEED: FeedConfig = FeedConfig {
    tick_interval_ms: 1500,
    walk: WalkParams {
        price: Magnitude::Relative(0.001),
        change_1h: Magnitude::Absolute(0.02),
        change_24h: Magnitude::Absolute(0.05),
        change_7d: Magnitude::Absolute(0.1),
        volume_24h: Magnitude::Relative(0.01),
        market_cap: Magnitude::Absolute(100_000_000.0),
        sparkline_sample: Magnitude::Absolute(50.0),
    },
    bounds: WalkBounds {
        floor_non_negative: true,
    },
    socket: SocketConfig {
        url: "ws://example.com/crypto",
        open_delay_ms: 500,
        echo_delay_ms: 0,
    },
};
