// =============================================================================
// Volume-Weighted Average Price (VWAP)
// =============================================================================
//
// Running (cumulative, not windowed) volume-weighted mean of typical price:
//
//   TP_i   = (high + low + close) / 3
//   VWAP_i = Σ_{k<=i} TP_k * vol_k  /  Σ_{k<=i} vol_k
//
// Defined from the first candle, except while cumulative volume is exactly
// zero — a zero denominator marks the cell undefined rather than 0 or ∞.
// =============================================================================

use crate::market_data::Candle;

/// Compute the VWAP column for `candles` (oldest first).
pub fn calculate_vwap(candles: &[Candle]) -> Vec<Option<f64>> {
    let mut out = Vec::with_capacity(candles.len());
    let mut cum_tp_vol = 0.0;
    let mut cum_vol = 0.0;

    for c in candles {
        cum_tp_vol += c.typical_price() * c.volume;
        cum_vol += c.volume;
        out.push(if cum_vol > 0.0 {
            Some(cum_tp_vol / cum_vol)
        } else {
            None
        });
    }

    out
}
