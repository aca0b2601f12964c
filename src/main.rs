// =============================================================================
// kline-glance — Main Entry Point
// =============================================================================
//
// One-shot snapshot: fetch the most recent hourly candles for one trading
// pair, run the indicator pipeline over the batch, and print an aligned
// table of the latest rows.
// =============================================================================

mod binance;
mod config;
mod indicators;
mod market_data;
mod pipeline;
mod table;

use anyhow::{Context, Result};
use chrono::FixedOffset;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::binance::BinanceClient;
use crate::config::SnapshotConfig;

const CONFIG_PATH: &str = "glance_config.json";

#[tokio::main]
async fn main() -> Result<()> {
    // ── 1. Environment & config ──────────────────────────────────────────
    let _ = dotenv::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut config = SnapshotConfig::load(CONFIG_PATH).unwrap_or_else(|e| {
        warn!(error = %e, "Failed to load config, using defaults");
        SnapshotConfig::default()
    });
    config.apply_env_overrides();
    config.validate()?;

    info!(
        symbol = %config.symbol,
        interval = %config.interval,
        fetch_limit = config.fetch_limit,
        display_rows = config.display_rows,
        "snapshot configured"
    );

    // ── 2. Fetch the candle batch ────────────────────────────────────────
    let client = match std::env::var("GLANCE_BASE_URL") {
        Ok(url) => BinanceClient::with_base_url(url),
        Err(_) => BinanceClient::new(),
    };

    let candles = client
        .get_klines(&config.symbol, &config.interval, config.fetch_limit)
        .await?;
    info!(count = candles.len(), "candles fetched");

    // ── 3. Compute indicators ────────────────────────────────────────────
    let indicator_table = pipeline::compute(candles)?;

    // ── 4. Render ────────────────────────────────────────────────────────
    let offset = FixedOffset::east_opt(config.utc_offset_hours * 3600)
        .context("utc_offset_hours does not form a valid offset")?;
    print!(
        "{}",
        table::render(&indicator_table, config.display_rows as usize, &offset)
    );

    Ok(())
}
