// =============================================================================
// Market data types
// =============================================================================

/// A single closed OHLCV candle, oldest-first when held in a series.
///
/// Timestamps are UNIX epoch milliseconds as delivered by the exchange.
/// Ordering (ascending open time, one candle per interval, no gaps or
/// duplicates) is guaranteed by the data source, not re-checked here.
#[derive(Debug, Clone)]
pub struct Candle {
    pub open_time: i64,
    pub close_time: i64,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
    pub trades: u64,
}

impl Candle {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        open_time: i64,
        open: f64,
        high: f64,
        low: f64,
        close: f64,
        volume: f64,
        close_time: i64,
        trades: u64,
    ) -> Self {
        Self {
            open_time,
            close_time,
            open,
            high,
            low,
            close,
            volume,
            trades,
        }
    }

    /// Typical price: (high + low + close) / 3. Basis for VWAP.
    pub fn typical_price(&self) -> f64 {
        (self.high + self.low + self.close) / 3.0
    }
}
