use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::config::{FEED, Magnitude, WalkBounds, WalkParams};
use crate::domain::Asset;
use crate::utils::round_2dp;

/// Bounded random walk over the numeric fields of an [`Asset`].
///
/// One step: `new = old + U(-0.5, 0.5) * magnitude`, rounded to 2dp.
pub struct RandomWalk {
    rng: StdRng,
    params: WalkParams,
}

impl RandomWalk {
    /// Reproducible walk (tests, headless CLI with `--seed`).
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            params: FEED.walk,
        }
    }

    /// Walk seeded from OS entropy (the GUI default).
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
            params: FEED.walk,
        }
    }

    /// The raw contract. No clamping of any kind.
    pub fn step_value(&mut self, old: f64, magnitude: Magnitude) -> f64 {
        let jitter: f64 = self.rng.gen_range(-0.5..0.5);
        round_2dp(old + jitter * magnitude.resolve(old))
    }

    // Raw step plus the feed's policy: a non-finite result keeps the old
    // value, floored fields never go negative.
    fn step_bounded(&mut self, old: f64, magnitude: Magnitude, floor: bool) -> f64 {
        let next = self.step_value(old, magnitude);
        if !next.is_finite() {
            log::warn!("Random walk produced {} from {}; keeping previous value", next, old);
            return old;
        }
        if floor { next.max(0.0) } else { next }
    }

    /// One tick for one asset. Identity fields and supplies are untouched.
    pub fn step_asset(&mut self, asset: &Asset, bounds: WalkBounds) -> Asset {
        let p = self.params;
        let floor = bounds.floor_non_negative;

        let mut next = asset.clone();
        next.price = self.step_bounded(asset.price, p.price, floor);
        next.change_1h = self.step_bounded(asset.change_1h, p.change_1h, false);
        next.change_24h = self.step_bounded(asset.change_24h, p.change_24h, false);
        next.change_7d = self.step_bounded(asset.change_7d, p.change_7d, false);
        next.volume_24h = self.step_bounded(asset.volume_24h, p.volume_24h, floor);
        next.market_cap = self.step_bounded(asset.market_cap, p.market_cap, floor);
        next.sparkline_7d = asset
            .sparkline_7d
            .map(|v| self.step_bounded(v, p.sparkline_sample, floor));
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{SPARKLINE_LEN, seed_assets};

    const NO_FLOOR: WalkBounds = WalkBounds {
        floor_non_negative: false,
    };

    #[test]
    fn step_stays_within_half_magnitude() {
        let mut walk = RandomWalk::seeded(7);
        for _ in 0..1_000 {
            let v = walk.step_value(100.0, Magnitude::Absolute(2.0));
            // +/- 1.0, plus rounding slack
            assert!((99.0 - 0.005..=101.0 + 0.005).contains(&v), "{v}");
        }
    }

    #[test]
    fn relative_magnitude_scales_with_value() {
        let mut walk = RandomWalk::seeded(11);
        for _ in 0..1_000 {
            let v = walk.step_value(63759.48, Magnitude::Relative(0.001));
            assert!((v - 63759.48).abs() <= 63759.48 * 0.0005 + 0.005, "{v}");
        }
    }

    #[test]
    fn results_are_rounded_to_two_decimals() {
        let mut walk = RandomWalk::seeded(3);
        for _ in 0..200 {
            let v = walk.step_value(1.234_567, Magnitude::Absolute(0.1));
            assert!(((v * 100.0).round() - v * 100.0).abs() < 1e-6, "{v}");
        }
    }

    #[test]
    fn same_seed_same_walk() {
        let btc = seed_assets().remove(0);
        let a = RandomWalk::seeded(42).step_asset(&btc, FEED.bounds);
        let b = RandomWalk::seeded(42).step_asset(&btc, FEED.bounds);
        assert_eq!(a, b);
    }

    #[test]
    fn step_asset_keeps_identity_and_supply() {
        let mut walk = RandomWalk::seeded(5);
        for asset in seed_assets() {
            let next = walk.step_asset(&asset, FEED.bounds);
            assert_eq!(next.id, asset.id);
            assert_eq!(next.name, asset.name);
            assert_eq!(next.symbol, asset.symbol);
            assert_eq!(next.circulating_supply, asset.circulating_supply);
            assert_eq!(next.max_supply, asset.max_supply);
            assert_eq!(next.sparkline_7d.len(), SPARKLINE_LEN);
        }
    }

    #[test]
    fn floor_keeps_prices_non_negative() {
        // XRP's sparkline samples (~0.5) against a 50.0 absolute magnitude
        // would go negative almost immediately without the floor.
        let xrp = seed_assets().remove(3);
        let mut walk = RandomWalk::seeded(9);
        let mut cur = xrp.clone();
        for _ in 0..200 {
            cur = walk.step_asset(&cur, FEED.bounds);
            assert!(cur.price >= 0.0);
            assert!(cur.sparkline_7d.samples().iter().all(|v| *v >= 0.0));
        }

        let mut unbounded = RandomWalk::seeded(9);
        let mut cur = xrp;
        let mut went_negative = false;
        for _ in 0..200 {
            cur = unbounded.step_asset(&cur, NO_FLOOR);
            went_negative |= cur.sparkline_7d.samples().iter().any(|v| *v < 0.0);
        }
        assert!(went_negative);
    }

    #[test]
    fn non_finite_step_keeps_previous_value() {
        let mut walk = RandomWalk::seeded(1);
        let v = walk.step_bounded(1.0, Magnitude::Absolute(f64::INFINITY), false);
        assert_eq!(v, 1.0);
    }
}
