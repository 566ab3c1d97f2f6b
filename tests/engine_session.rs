use std::collections::HashSet;
use std::time::Duration;

use coin_tracker::data::ReadyState;
use coin_tracker::domain::SPARKLINE_LEN;
use coin_tracker::utils::AppInstant;
use coin_tracker::{
    EngineOptions, FEED, MarketEngine, SortColumn, SortDirection, ViewQuery, project, seed_assets,
};

fn at(t0: AppInstant, ms: u64) -> AppInstant {
    t0 + Duration::from_millis(ms)
}

#[test]
fn headless_session_keeps_invariants() {
    let t0 = AppInstant::now();
    let interval = 100;
    let mut engine = MarketEngine::new(
        EngineOptions {
            tick_interval_ms: interval,
            seed: Some(2024),
        },
        t0,
    )
    .unwrap();

    let seeds = seed_assets();
    for step in 1..=300 {
        engine.update(at(t0, step * interval));
    }

    assert_eq!(engine.socket_state(), ReadyState::Open);
    assert_eq!(engine.tick_count(), 300);

    let snapshot = engine.snapshot();
    assert_eq!(snapshot.len(), seeds.len());
    let ids: HashSet<_> = snapshot.assets.iter().map(|a| &a.id).collect();
    assert_eq!(ids.len(), seeds.len());
    for (asset, seed) in snapshot.assets.iter().zip(&seeds) {
        assert_eq!(asset.id, seed.id);
        assert_eq!(asset.symbol, seed.symbol);
        assert_eq!(asset.circulating_supply, seed.circulating_supply);
        assert_eq!(asset.max_supply, seed.max_supply);
        assert_eq!(asset.sparkline_7d.len(), SPARKLINE_LEN);
        assert!(asset.is_finite());
    }

    engine.shutdown();
    engine.update(at(t0, 400 * interval));
    assert_eq!(engine.socket_state(), ReadyState::Closed);
    assert_eq!(engine.tick_count(), 300);
}

#[test]
fn same_seed_replays_the_same_market() {
    let t0 = AppInstant::now();
    let options = EngineOptions {
        tick_interval_ms: FEED.tick_interval_ms,
        seed: Some(7),
    };
    let mut a = MarketEngine::new(options, t0).unwrap();
    let mut b = MarketEngine::new(options, t0).unwrap();

    for step in 1..=20 {
        let now = at(t0, step * FEED.tick_interval_ms);
        a.update(now);
        b.update(now);
    }
    assert_eq!(a.snapshot().assets, b.snapshot().assets);
}

#[test]
fn view_over_live_snapshot() {
    let t0 = AppInstant::now();
    let mut engine = MarketEngine::new(
        EngineOptions {
            tick_interval_ms: 50,
            seed: Some(1),
        },
        t0,
    )
    .unwrap();
    for step in 1..=10 {
        engine.update(at(t0, step * 50));
    }
    let snapshot = engine.snapshot();

    let mut query = ViewQuery {
        text: "e".into(),
        ..Default::default()
    };
    query.toggle_sort(SortColumn::Price);
    query.toggle_sort(SortColumn::Price);
    assert_eq!(query.direction, SortDirection::Descending);

    let rows = project(&snapshot.assets, &query);
    // Ethereum, Tether, Binance Coin
    assert_eq!(rows.len(), 3);
    assert!(rows.windows(2).all(|w| w[0].asset.price >= w[1].asset.price));
    assert!(rows.iter().all(|r| r.asset.matches_text("e")));
}

#[test]
fn walk_continues_across_socket_open() {
    let t0 = AppInstant::now();
    let interval = 100;
    let mut engine = MarketEngine::new(
        EngineOptions {
            tick_interval_ms: interval,
            seed: Some(99),
        },
        t0,
    )
    .unwrap();

    let seeds = seed_assets();
    let mut last_seq = engine.snapshot().seq;
    let mut before_open = None;
    for step in 1..=10 {
        engine.update(at(t0, step * interval));
        let snapshot = engine.snapshot();
        assert!(snapshot.seq >= last_seq);
        last_seq = snapshot.seq;

        if engine.socket_state() == ReadyState::Connecting {
            before_open = Some(snapshot);
        } else {
            assert_ne!(snapshot.assets, seeds);
        }
    }

    let before_open = before_open.unwrap();
    assert_ne!(before_open.assets, seeds);
    assert_eq!(engine.tick_count(), 10);
    assert_eq!(engine.snapshot().seq, 10);
}
