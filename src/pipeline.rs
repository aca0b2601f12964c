// =============================================================================
// Indicator Pipeline
// =============================================================================
//
// One pass from an ordered candle batch to the same batch annotated with
// indicator columns. Columns are built in dependency order (SMA/σ before the
// bands, raw %K before %D, EMA-12/26 before MACD before its signal line);
// nothing relies on incidental statement ordering.
//
// Missing history and degenerate arithmetic never abort the pass — they
// surface as `None` cells. Only an unusable input batch (fewer than two
// candles) is an error, raised before any column is computed.
// =============================================================================

use anyhow::Result;

use crate::indicators::{atr, bollinger, macd, rsi, sma, stochastic, vwap};
use crate::market_data::Candle;

pub const SMA_PERIOD: usize = 20;
pub const EMA_SPAN: usize = 20;
pub const BOLLINGER_PERIOD: usize = 20;
pub const BOLLINGER_NUM_STD: f64 = 2.0;
pub const STOCH_K_PERIOD: usize = 14;
pub const STOCH_D_PERIOD: usize = 3;
pub const ATR_PERIOD: usize = 14;
pub const RSI_PERIOD: usize = 14;
pub const MACD_FAST: usize = 12;
pub const MACD_SLOW: usize = 26;
pub const MACD_SIGNAL_SPAN: usize = 9;

/// A candle batch plus its computed indicator columns.
///
/// Every column is exactly `candles.len()` long; `None` marks a cell whose
/// indicator lacked history (or hit a zero range / zero volume / flat RSI
/// window) at that position.
#[derive(Debug, Clone)]
pub struct IndicatorTable {
    pub candles: Vec<Candle>,
    pub sma20: Vec<Option<f64>>,
    pub ema20: Vec<Option<f64>>,
    pub upper_band: Vec<Option<f64>>,
    pub lower_band: Vec<Option<f64>>,
    pub percent_k: Vec<Option<f64>>,
    pub percent_d: Vec<Option<f64>>,
    pub vwap: Vec<Option<f64>>,
    pub atr: Vec<Option<f64>>,
    pub rsi: Vec<Option<f64>>,
    pub macd: Vec<Option<f64>>,
    pub macd_signal: Vec<Option<f64>>,
}

impl IndicatorTable {
    pub fn len(&self) -> usize {
        self.candles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candles.is_empty()
    }
}

/// Run every calculator over `candles` (oldest first) and collect the
/// aligned columns.
///
/// Fails when fewer than two candles are supplied — several indicators need
/// at least one prior observation, and a batch that small would only ever
/// render an all-undefined table.
pub fn compute(candles: Vec<Candle>) -> Result<IndicatorTable> {
    if candles.len() < 2 {
        anyhow::bail!(
            "need at least 2 candles to compute indicators, got {}",
            candles.len()
        );
    }

    let closes: Vec<f64> = candles.iter().map(|c| c.close).collect();
    let highs: Vec<f64> = candles.iter().map(|c| c.high).collect();
    let lows: Vec<f64> = candles.iter().map(|c| c.low).collect();

    let sma20 = sma::calculate_sma(&closes, SMA_PERIOD);
    let ema20 = calculate_ema_column(&closes, EMA_SPAN);

    let bands = bollinger::calculate_bollinger(&closes, BOLLINGER_PERIOD, BOLLINGER_NUM_STD);
    let stoch =
        stochastic::calculate_stochastic(&highs, &lows, &closes, STOCH_K_PERIOD, STOCH_D_PERIOD);

    let vwap = vwap::calculate_vwap(&candles);
    let atr = atr::calculate_atr(&candles, ATR_PERIOD);
    let rsi = rsi::calculate_rsi(&closes, RSI_PERIOD);

    let m = macd::calculate_macd(&closes, MACD_FAST, MACD_SLOW, MACD_SIGNAL_SPAN);
    let macd = m.macd.into_iter().map(Some).collect();
    let macd_signal = m.signal.into_iter().map(Some).collect();

    Ok(IndicatorTable {
        candles,
        sma20,
        ema20,
        upper_band: bands.upper,
        lower_band: bands.lower,
        percent_k: stoch.percent_k,
        percent_d: stoch.percent_d,
        vwap,
        atr,
        rsi,
        macd,
        macd_signal,
    })
}

/// EMA wrapped into the common optional-cell column shape. The EMA family is
/// defined from position 0, so every cell is `Some`.
fn calculate_ema_column(values: &[f64], span: usize) -> Vec<Option<f64>> {
    crate::indicators::ema::calculate_ema(values, span)
        .into_iter()
        .map(Some)
        .collect()
}

// =============================================================================
// Unit Tests
// =============================================================================
#[cfg(test)]
mod tests {
    use super::*;

    /// Fixture: closes with highs = close + 1, lows = close - 1, constant
    /// volume of 1000, hourly timestamps.
    fn candles_from_closes(closes: &[f64]) -> Vec<Candle> {
        closes
            .iter()
            .enumerate()
            .map(|(i, &c)| {
                let open_time = i as i64 * 3_600_000;
                Candle::new(open_time, c, c + 1.0, c - 1.0, c, 1000.0, open_time + 3_599_999, 10)
            })
            .collect()
    }

    const CLOSES_20: [f64; 20] = [
        100.0, 101.0, 99.0, 102.0, 103.0, 101.0, 104.0, 105.0, 103.0, 106.0,
        107.0, 105.0, 108.0, 109.0, 107.0, 110.0, 111.0, 109.0, 112.0, 113.0,
    ];

    #[test]
    fn single_candle_is_an_error() {
        let candles = candles_from_closes(&[100.0]);
        assert!(compute(candles).is_err());
    }

    #[test]
    fn empty_batch_is_an_error() {
        assert!(compute(Vec::new()).is_err());
    }

    #[test]
    fn two_candles_compute() {
        let table = compute(candles_from_closes(&[100.0, 101.0])).unwrap();
        assert_eq!(table.len(), 2);
        // Too short for any windowed statistic, but the EMA family holds.
        assert!(table.sma20.iter().all(|c| c.is_none()));
        assert!(table.ema20.iter().all(|c| c.is_some()));
        assert!(table.macd.iter().all(|c| c.is_some()));
    }

    #[test]
    fn columns_match_candle_count() {
        let table = compute(candles_from_closes(&CLOSES_20)).unwrap();
        let n = table.len();
        for col in [
            &table.sma20,
            &table.ema20,
            &table.upper_band,
            &table.lower_band,
            &table.percent_k,
            &table.percent_d,
            &table.vwap,
            &table.atr,
            &table.rsi,
            &table.macd,
            &table.macd_signal,
        ] {
            assert_eq!(col.len(), n);
        }
    }

    #[test]
    fn twenty_row_fixture_sma_and_bands() {
        let table = compute(candles_from_closes(&CLOSES_20)).unwrap();

        // The 20-window completes only on the final row.
        for i in 0..19 {
            assert!(table.sma20[i].is_none(), "row {i} should be undefined");
            assert!(table.upper_band[i].is_none());
            assert!(table.lower_band[i].is_none());
        }

        let mean = CLOSES_20.iter().sum::<f64>() / 20.0;
        assert!((table.sma20[19].unwrap() - mean).abs() < 1e-9);

        // Bands derive from the same mean and the sample std of the closes.
        let var = CLOSES_20.iter().map(|c| (c - mean).powi(2)).sum::<f64>() / 19.0;
        let std = var.sqrt();
        assert!((table.upper_band[19].unwrap() - (mean + 2.0 * std)).abs() < 1e-9);
        assert!((table.lower_band[19].unwrap() - (mean - 2.0 * std)).abs() < 1e-9);
    }

    #[test]
    fn twenty_row_fixture_other_columns() {
        let table = compute(candles_from_closes(&CLOSES_20)).unwrap();

        // Constant 1000 volume: VWAP defined on every row.
        assert!(table.vwap.iter().all(|c| c.is_some()));

        // 14-window statistics: ATR and %K from row 13, RSI from row 14,
        // %D two rows after the first %K.
        assert!(table.atr[12].is_none());
        assert!(table.atr[13].is_some());
        assert!(table.percent_k[12].is_none());
        assert!(table.percent_k[13].is_some());
        assert!(table.percent_d[14].is_none());
        assert!(table.percent_d[15].is_some());
        assert!(table.rsi[13].is_none());
        assert!(table.rsi[14].is_some());

        // EMA / MACD columns are fully defined.
        assert!(table.ema20.iter().all(|c| c.is_some()));
        assert!(table.macd.iter().all(|c| c.is_some()));
        assert!(table.macd_signal.iter().all(|c| c.is_some()));
    }
}
