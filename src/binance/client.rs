// =============================================================================
// Binance public market-data REST client
// =============================================================================
//
// Only unauthenticated endpoints are used, so requests carry no API key and
// nothing is signed. The default base URL is the dedicated market-data host
// (data-api.binance.vision), which serves the same /api/v3 public routes as
// the main exchange API.
// =============================================================================

use anyhow::{Context, Result};
use tracing::{debug, instrument, warn};

use crate::market_data::Candle;

const DEFAULT_BASE_URL: &str = "https://data-api.binance.vision";

/// Minimum number of fields in one kline entry; shorter entries are malformed.
const KLINE_FIELDS: usize = 11;

/// Binance REST client for public market data.
#[derive(Debug, Clone)]
pub struct BinanceClient {
    base_url: String,
    client: reqwest::Client,
}

impl BinanceClient {
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Create a client against a non-default base URL (tests, mirrors).
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(10))
            .build()
            .expect("failed to build reqwest client");

        let base_url = base_url.into();
        debug!(base_url, "BinanceClient initialised");

        Self { base_url, client }
    }

    /// GET /api/v3/klines — fetch up to `limit` most recent closed candles.
    ///
    /// Returns candles oldest-first. A non-success HTTP status or an empty
    /// payload is an error: the indicator pipeline must not run on a series
    /// that never arrived.
    ///
    /// Array indices per entry:
    ///   [0] openTime, [1] open, [2] high, [3] low, [4] close, [5] volume,
    ///   [6] closeTime, [7] quoteAssetVolume, [8] numberOfTrades,
    ///   [9] takerBuyBaseVolume, [10] takerBuyQuoteVolume
    #[instrument(skip(self), name = "binance::get_klines")]
    pub async fn get_klines(
        &self,
        symbol: &str,
        interval: &str,
        limit: u32,
    ) -> Result<Vec<Candle>> {
        let url = format!(
            "{}/api/v3/klines?symbol={}&interval={}&limit={}",
            self.base_url, symbol, interval, limit
        );

        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .context("GET /api/v3/klines request failed")?;

        let status = resp.status();
        let body: serde_json::Value = resp
            .json()
            .await
            .context("failed to parse klines response")?;

        if !status.is_success() {
            anyhow::bail!("Binance GET /api/v3/klines returned {}: {}", status, body);
        }

        let candles = parse_klines(&body)?;
        if candles.is_empty() {
            anyhow::bail!("klines response for {symbol}@{interval} is empty");
        }

        debug!(symbol, interval, count = candles.len(), "klines fetched");
        Ok(candles)
    }
}

impl Default for BinanceClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse Binance's array-of-arrays kline payload into candles.
///
/// Entries shorter than the documented field count are skipped with a
/// warning; a price or volume field that parses to neither string-number nor
/// number is an error.
fn parse_klines(body: &serde_json::Value) -> Result<Vec<Candle>> {
    let raw = body.as_array().context("klines response is not an array")?;

    let mut candles = Vec::with_capacity(raw.len());

    for entry in raw {
        let arr = entry.as_array().context("kline entry is not an array")?;

        if arr.len() < KLINE_FIELDS {
            warn!("skipping malformed kline entry with {} elements", arr.len());
            continue;
        }

        let open_time = arr[0].as_i64().unwrap_or(0);
        let open = parse_str_f64(&arr[1])?;
        let high = parse_str_f64(&arr[2])?;
        let low = parse_str_f64(&arr[3])?;
        let close = parse_str_f64(&arr[4])?;
        let volume = parse_str_f64(&arr[5])?;
        let close_time = arr[6].as_i64().unwrap_or(0);
        let trades = arr[8].as_u64().unwrap_or(0);

        candles.push(Candle::new(
            open_time, open, high, low, close, volume, close_time, trades,
        ));
    }

    Ok(candles)
}

/// Parse a JSON value that may be either a string or a number into `f64`.
/// Binance serialises prices and volumes as strings.
fn parse_str_f64(val: &serde_json::Value) -> Result<f64> {
    if let Some(s) = val.as_str() {
        s.parse::<f64>()
            .with_context(|| format!("failed to parse '{s}' as f64"))
    } else if let Some(n) = val.as_f64() {
        Ok(n)
    } else {
        anyhow::bail!("expected string or number, got: {val}")
    }
}
