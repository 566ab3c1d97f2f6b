use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;

use crate::analysis::RandomWalk;
use crate::config::FEED;
use crate::data::{MockSocket, ReadyState, SocketEvent, decode_patches, encode_assets};
use crate::domain::seed_assets;
use crate::models::{AssetStore, MarketSnapshot, StoreAction};
use crate::utils::AppInstant;

use super::feed::MarketFeed;

/// Runtime knobs the binaries can override from the command line.
#[derive(Debug, Clone, Copy)]
pub struct EngineOptions {
    pub tick_interval_ms: u64,
    /// None seeds the walk from OS entropy.
    pub seed: Option<u64>,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            tick_interval_ms: FEED.tick_interval_ms,
            seed: None,
        }
    }
}

/// One dashboard session: the asset store, the simulated feed and the mock
/// socket, all driven by `update(now)` from the caller's loop.
pub struct MarketEngine {
    store: AssetStore,
    feed: MarketFeed,
    socket: MockSocket,
    // Store seq each queued socket payload was encoded from, in delivery order.
    in_flight: VecDeque<u64>,
    shut_down: bool,
}

impl MarketEngine {
    pub fn new(options: EngineOptions, now: AppInstant) -> Result<Self> {
        let seeds = seed_assets();
        let initial_payload = encode_assets(&seeds)?;
        let store = AssetStore::new(seeds)?;

        let walk = match options.seed {
            Some(seed) => RandomWalk::seeded(seed),
            None => RandomWalk::from_entropy(),
        };

        log::info!(
            "Market engine starting: {} assets, tick every {} ms",
            store.current().len(),
            options.tick_interval_ms
        );

        Ok(Self {
            store,
            feed: MarketFeed::new(walk, options.tick_interval_ms, now),
            socket: MockSocket::connect(FEED.socket.url, Some(initial_payload), now),
            in_flight: VecDeque::from([0]),
            shut_down: false,
        })
    }

    /// Drain socket events, then run the feed tick if one is due.
    /// Returns whether a new snapshot was published.
    pub fn update(&mut self, now: AppInstant) -> bool {
        let mut changed = false;

        for event in self.socket.poll(now) {
            match event {
                SocketEvent::Opened => self.on_socket_open(now),
                SocketEvent::Message(data) => changed |= self.on_socket_message(&data),
                SocketEvent::Closed => {
                    self.in_flight.clear();
                    log::info!("Market socket closed");
                }
            }
        }

        if !self.shut_down {
            changed |= self.feed.poll(now, &mut self.store);
        }
        changed
    }

    fn on_socket_open(&mut self, now: AppInstant) {
        let payload = match encode_assets(&self.store.current().assets) {
            Ok(p) => p,
            Err(e) => {
                log::error!("Could not encode assets for the socket: {:#}", e);
                return;
            }
        };
        match self.socket.send(payload, now) {
            Ok(()) => self.in_flight.push_back(self.store.seq()),
            Err(e) => log::warn!("Socket send failed: {:#}", e),
        }
    }

    fn on_socket_message(&mut self, data: &str) -> bool {
        // A payload encoded from an older snapshot must not undo later ticks.
        let encoded_at = self.in_flight.pop_front();
        if encoded_at.is_some_and(|seq| seq != self.store.seq()) {
            log::debug!(
                "Dropping stale socket message from seq {:?} (store at {})",
                encoded_at,
                self.store.seq()
            );
            return false;
        }

        let patches = match decode_patches(data) {
            Ok(p) => p,
            Err(e) => {
                log::warn!("Ignoring socket message: {:#}", e);
                return false;
            }
        };

        let mut changed = false;
        for (id, patch) in patches {
            match self.store.dispatch(StoreAction::UpdateAsset { id, patch }) {
                Ok(c) => changed |= c,
                Err(e) => log::warn!("Ignoring asset update: {:#}", e),
            }
        }
        changed
    }

    pub fn snapshot(&self) -> Arc<MarketSnapshot> {
        self.store.snapshot()
    }

    /// Apply a store action directly (not via the socket).
    pub fn dispatch(&mut self, action: StoreAction) -> Result<bool> {
        self.store.dispatch(action)
    }

    pub fn socket_state(&self) -> ReadyState {
        self.socket.ready_state()
    }

    pub fn socket_url(&self) -> &str {
        self.socket.url()
    }

    pub fn tick_count(&self) -> u64 {
        self.feed.ticks()
    }

    pub fn tick_interval(&self) -> Duration {
        self.feed.clock().interval()
    }

    /// How long the caller may sleep before `update` has work to do:
    /// the next feed tick, socket open or echo, whichever comes first.
    pub fn next_wakeup(&self, now: AppInstant) -> Duration {
        let tick = self.feed.clock().due_in(now);
        match self.socket.due_in(now) {
            Some(socket) => tick.min(socket),
            None => tick,
        }
    }

    pub fn is_shut_down(&self) -> bool {
        self.shut_down
    }

    /// Stop ticking and close the socket. Safe to call more than once.
    pub fn shutdown(&mut self) {
        if self.shut_down {
            return;
        }
        log::info!("Market engine shutting down after {} ticks", self.feed.ticks());
        self.shut_down = true;
        self.feed.stop();
        self.socket.close();
    }
}

impl Drop for MarketEngine {
    fn drop(&mut self) {
        self.shutdown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::AssetPatch;

    fn after(t0: AppInstant, ms: u64) -> AppInstant {
        t0 + Duration::from_millis(ms)
    }

    fn engine(t0: AppInstant) -> MarketEngine {
        MarketEngine::new(
            EngineOptions {
                tick_interval_ms: 1_000,
                seed: Some(17),
            },
            t0,
        )
        .unwrap()
    }

    #[test]
    fn socket_opens_then_feed_ticks() {
        let t0 = AppInstant::now();
        let mut engine = engine(t0);
        assert_eq!(engine.socket_state(), ReadyState::Connecting);

        // Opening delivers the seed payload, identical to the store: no change.
        assert!(!engine.update(after(t0, FEED.socket.open_delay_ms)));
        assert_eq!(engine.socket_state(), ReadyState::Open);
        assert_eq!(engine.snapshot().seq, 0);

        assert!(engine.update(after(t0, 1_000)));
        assert_eq!(engine.tick_count(), 1);
        assert_eq!(engine.snapshot().seq, 1);
    }

    #[test]
    fn echo_does_not_undo_a_newer_local_change() {
        let t0 = AppInstant::now();
        let mut engine = engine(t0);
        let btc = engine.snapshot().assets[0].id.clone();
        let open = after(t0, FEED.socket.open_delay_ms);
        engine.update(open);

        engine
            .dispatch(StoreAction::UpdateAsset {
                id: btc.clone(),
                patch: AssetPatch {
                    price: Some(1.0),
                    ..Default::default()
                },
            })
            .unwrap();
        assert_eq!(engine.snapshot().get(&btc).map(|a| a.price), Some(1.0));

        // The assets sent on open predate the change, so their echo is dropped.
        assert!(!engine.update(after(open, FEED.socket.echo_delay_ms)));
        assert_eq!(engine.snapshot().get(&btc).map(|a| a.price), Some(1.0));
    }

    #[test]
    fn ticks_before_open_survive_the_initial_payload() {
        let t0 = AppInstant::now();
        let mut engine = MarketEngine::new(
            EngineOptions {
                tick_interval_ms: 150,
                seed: Some(3),
            },
            t0,
        )
        .unwrap();
        for ms in [150, 300, 450] {
            engine.update(after(t0, ms));
        }
        assert_eq!(engine.tick_count(), 3);
        let walked = engine.snapshot();
        assert_ne!(walked.assets, seed_assets());

        let open = after(t0, FEED.socket.open_delay_ms);
        engine.update(open);
        engine.update(after(open, FEED.socket.echo_delay_ms));
        assert_eq!(engine.socket_state(), ReadyState::Open);
        assert_eq!(engine.snapshot().assets, walked.assets);
        assert_eq!(engine.snapshot().seq, walked.seq);

        assert!(engine.update(after(t0, 600)));
        assert!(engine.snapshot().seq > walked.seq);
    }

    #[test]
    fn echo_after_first_tick_keeps_the_walk() {
        let t0 = AppInstant::now();
        let mut engine = MarketEngine::new(
            EngineOptions {
                tick_interval_ms: FEED.tick_interval_ms,
                seed: Some(11),
            },
            t0,
        )
        .unwrap();

        // Socket open and first tick land in the same update.
        let first = after(t0, FEED.tick_interval_ms);
        assert!(engine.update(first));
        let tick1 = engine.snapshot();
        assert_ne!(tick1.assets, seed_assets());

        engine.update(first + Duration::from_millis(1));
        assert_eq!(engine.snapshot().assets, tick1.assets);
    }

    #[test]
    fn next_wakeup_covers_socket_open_and_echo() {
        let t0 = AppInstant::now();
        let mut engine = MarketEngine::new(
            EngineOptions {
                tick_interval_ms: FEED.tick_interval_ms,
                seed: Some(2),
            },
            t0,
        )
        .unwrap();
        assert_eq!(
            engine.next_wakeup(t0),
            Duration::from_millis(FEED.socket.open_delay_ms)
        );

        let open = after(t0, FEED.socket.open_delay_ms);
        engine.update(open);
        assert_eq!(
            engine.next_wakeup(open),
            Duration::from_millis(FEED.socket.echo_delay_ms)
        );

        engine.update(after(open, FEED.socket.echo_delay_ms));
        assert_eq!(
            engine.next_wakeup(open),
            Duration::from_millis(FEED.tick_interval_ms - FEED.socket.open_delay_ms)
        );
    }

    #[test]
    fn shutdown_stops_ticks_and_closes_socket() {
        let t0 = AppInstant::now();
        let mut engine = engine(t0);
        engine.update(after(t0, FEED.socket.open_delay_ms));
        engine.shutdown();
        engine.shutdown();
        assert!(engine.is_shut_down());

        assert!(!engine.update(after(t0, 10_000)));
        assert_eq!(engine.socket_state(), ReadyState::Closed);
        assert_eq!(engine.tick_count(), 0);
    }
}
