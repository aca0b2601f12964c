// =============================================================================
// Average True Range (ATR) — trailing-mean convention
// =============================================================================
//
// ATR measures volatility by decomposing the entire range of a bar.
//
// True Range (TR) for each bar:
//   TR_0 = H_0 - L_0                      (no previous close to compare)
//   TR_i = max(H - L, |H - prevClose|, |L - prevClose|)
//
// ATR here is the plain trailing `period`-mean of TR (defined from position
// `period - 1`), not Wilder's recursive smoothing.
// =============================================================================

use crate::market_data::Candle;

use super::sma::calculate_sma;

/// True Range per candle. Position 0 degenerates to high − low.
pub fn true_range(candles: &[Candle]) -> Vec<f64> {
    let mut tr = Vec::with_capacity(candles.len());
    for (i, c) in candles.iter().enumerate() {
        let hl = c.high - c.low;
        tr.push(if i == 0 {
            hl
        } else {
            let prev_close = candles[i - 1].close;
            let hc = (c.high - prev_close).abs();
            let lc = (c.low - prev_close).abs();
            hl.max(hc).max(lc)
        });
    }
    tr
}

/// Compute the ATR column for `candles` (oldest first) over `period`.
///
/// Returns one cell per candle; the first `period - 1` positions are `None`.
pub fn calculate_atr(candles: &[Candle], period: usize) -> Vec<Option<f64>> {
    calculate_sma(&true_range(candles), period)
}
