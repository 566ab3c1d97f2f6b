use std::time::Duration;

use crate::analysis::RandomWalk;
use crate::config::{DF, FEED, WalkBounds};
use crate::models::{AssetStore, MarketSnapshot};
use crate::utils::AppInstant;

/// Fixed-interval timer polled from the frame loop (or the CLI's sleep loop).
pub struct FeedClock {
    interval: Duration,
    last: AppInstant,
    running: bool,
}

impl FeedClock {
    /// First tick is due one full interval after `now`.
    pub fn new(interval_ms: u64, now: AppInstant) -> Self {
        Self {
            interval: Duration::from_millis(interval_ms.max(1)),
            last: now,
            running: true,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn is_due(&self, now: AppInstant) -> bool {
        self.running && now.saturating_duration_since(self.last) >= self.interval
    }

    pub fn mark(&mut self, now: AppInstant) {
        self.last = now;
    }

    /// Time left until the next tick. Zero when due or stopped.
    pub fn due_in(&self, now: AppInstant) -> Duration {
        if !self.running {
            return Duration::ZERO;
        }
        self.interval
            .saturating_sub(now.saturating_duration_since(self.last))
    }

    pub fn stop(&mut self) {
        self.running = false;
    }
}

/// Produces one simulated snapshot per clock tick.
pub struct MarketFeed {
    walk: RandomWalk,
    bounds: WalkBounds,
    clock: FeedClock,
    ticks: u64,
}

impl MarketFeed {
    pub fn new(walk: RandomWalk, interval_ms: u64, now: AppInstant) -> Self {
        Self {
            walk,
            bounds: FEED.bounds,
            clock: FeedClock::new(interval_ms, now),
            ticks: 0,
        }
    }

    pub fn clock(&self) -> &FeedClock {
        &self.clock
    }

    /// Ticks published so far.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Step every asset once. Membership and order are preserved.
    pub fn next_snapshot(&mut self, current: &MarketSnapshot, now_ms: i64) -> MarketSnapshot {
        crate::trace_time!("Feed next_snapshot", 2_000, {
            let assets = current
                .assets
                .iter()
                .map(|asset| self.walk.step_asset(asset, self.bounds))
                .collect();
            MarketSnapshot::new(current.seq + 1, now_ms, assets)
        })
    }

    /// Publish the next snapshot if the clock is due. Returns whether a tick
    /// happened. A snapshot that fails validation is logged and dropped; the
    /// previous one stays published.
    pub fn poll(&mut self, now: AppInstant, store: &mut AssetStore) -> bool {
        if !self.clock.is_due(now) {
            return false;
        }
        self.clock.mark(now);

        let next = self.next_snapshot(store.current(), crate::utils::now_timestamp_ms());
        if let Err(e) = store.publish(next) {
            log::error!("Dropping simulated tick: {:#}", e);
            return false;
        }
        self.ticks += 1;

        #[cfg(debug_assertions)]
        if DF.log_feed_ticks {
            log::info!(
                "Feed tick #{} -> snapshot seq {} ({} assets)",
                self.ticks,
                store.seq(),
                store.current().len()
            );
        }
        true
    }

    /// No more ticks after this.
    pub fn stop(&mut self) {
        self.clock.stop();
    }
}
