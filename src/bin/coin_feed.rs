use std::time::Duration;

use anyhow::{Context, Result, bail};
use clap::Parser;
use tabled::{Table, Tabled, settings::Style};

use coin_tracker::data::encode_assets;
use coin_tracker::models::AssetRow;
use coin_tracker::ui::{format_percentage, format_price, format_supply, format_usd_compact};
use coin_tracker::utils::{AppInstant, epoch_ms_to_time_string};
use coin_tracker::{
    EngineOptions, FEED, MarketEngine, MarketSnapshot, SortDirection, ViewQuery, project,
};

/// Runs the simulated market without a window and prints the table after each tick.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Number of ticks to print before exiting
    #[arg(long, default_value_t = 5)]
    ticks: u64,

    /// Milliseconds between ticks
    #[arg(long, default_value_t = FEED.tick_interval_ms)]
    interval_ms: u64,

    /// Seed for the random walk
    #[arg(long)]
    seed: Option<u64>,

    /// Keep assets whose name or symbol contains this text
    #[arg(long)]
    filter: Option<String>,

    #[arg(long)]
    min_price: Option<String>,

    #[arg(long)]
    max_price: Option<String>,

    /// Sort key: "#", name, price, change1h, change24h, change7d, marketCap,
    /// volume24h, circulatingSupply, maxSupply
    #[arg(long)]
    sort: Option<String>,

    /// Sort descending
    #[arg(long, default_value_t = false)]
    desc: bool,

    /// Print JSON records instead of a table
    #[arg(long, default_value_t = false)]
    json: bool,
}

impl Args {
    fn view_query(&self) -> Result<ViewQuery> {
        let mut query = ViewQuery {
            text: self.filter.clone().unwrap_or_default(),
            min_price: self.min_price.clone().unwrap_or_default(),
            max_price: self.max_price.clone().unwrap_or_default(),
            ..Default::default()
        };
        if let Some(key) = &self.sort {
            if !query.sort_by_key(key) {
                bail!("Unknown sort key '{}'", key);
            }
        }
        if self.desc {
            query.direction = SortDirection::Descending;
        }
        Ok(query)
    }
}

#[derive(Tabled)]
struct FeedRow {
    #[tabled(rename = "#")]
    rank: usize,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Symbol")]
    symbol: String,
    #[tabled(rename = "Price")]
    price: String,
    #[tabled(rename = "1h %")]
    change_1h: String,
    #[tabled(rename = "24h %")]
    change_24h: String,
    #[tabled(rename = "7d %")]
    change_7d: String,
    #[tabled(rename = "Market Cap")]
    market_cap: String,
    #[tabled(rename = "24h Volume")]
    volume_24h: String,
    #[tabled(rename = "Circulating Supply")]
    circulating_supply: String,
    #[tabled(rename = "Max Supply")]
    max_supply: String,
}

impl From<&AssetRow<'_>> for FeedRow {
    fn from(row: &AssetRow<'_>) -> Self {
        let a = row.asset;
        Self {
            rank: row.rank,
            name: a.name.clone(),
            symbol: a.symbol.clone(),
            price: format_price(a.price),
            change_1h: format_percentage(a.change_1h),
            change_24h: format_percentage(a.change_24h),
            change_7d: format_percentage(a.change_7d),
            market_cap: format_usd_compact(a.market_cap),
            volume_24h: format_usd_compact(a.volume_24h),
            circulating_supply: format_supply(a.circulating_supply, &a.symbol),
            max_supply: format_supply(a.max_supply, &a.symbol),
        }
    }
}

fn print_snapshot(snapshot: &MarketSnapshot, query: &ViewQuery, json: bool) -> Result<()> {
    let rows = project(&snapshot.assets, query);

    if json {
        let assets: Vec<_> = rows.iter().map(|r| r.asset.clone()).collect();
        println!("{}", encode_assets(&assets)?);
        return Ok(());
    }

    println!(
        "Snapshot #{} at {} ({}/{} assets)",
        snapshot.seq,
        epoch_ms_to_time_string(snapshot.taken_at_ms),
        rows.len(),
        snapshot.len()
    );
    let table = Table::new(rows.iter().map(FeedRow::from)).with(Style::modern()).to_string();
    println!("{}\n", table);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let query = args.view_query()?;
    let options = EngineOptions {
        tick_interval_ms: args.interval_ms,
        seed: args.seed,
    };

    let mut engine =
        MarketEngine::new(options, AppInstant::now()).context("Failed to start market engine")?;

    log::info!(
        "Streaming {} ticks every {} ms from {}",
        args.ticks,
        args.interval_ms,
        engine.socket_url()
    );

    let mut printed = 0;
    while printed < args.ticks {
        let now = AppInstant::now();
        let before = engine.tick_count();
        engine.update(now);

        if engine.tick_count() > before {
            print_snapshot(&engine.snapshot(), &query, args.json)?;
            printed += 1;
            continue;
        }

        let wait = engine.next_wakeup(now).max(Duration::from_millis(1));
        tokio::time::sleep(wait).await;
    }

    engine.shutdown();
    engine.update(AppInstant::now());
    log::info!("Done after {} ticks (socket {})", engine.tick_count(), engine.socket_state());
    Ok(())
}
