// =============================================================================
// Relative Strength Index (RSI) — trailing-mean convention
// =============================================================================
//
// RSI measures the speed and magnitude of recent price changes to evaluate
// whether an asset is overbought or oversold.
//
// Step 1 — Compute price changes (deltas) from consecutive closes; there is
//          no delta for the first close.
// Step 2 — avg_gain / avg_loss = plain trailing `period`-mean of the positive
//          / negative deltas (not Wilder's recursive smoothing).
// Step 3 — RS  = avg_gain / avg_loss
//          RSI = 100 - 100 / (1 + RS)
//
// The first defined cell sits at position `period` (one delta per close from
// position 1, plus a full window of them).
// =============================================================================

/// Compute the RSI column for `closes` over `period`.
///
/// Returns one cell per close, aligned by position.
///
/// # Edge cases
/// - Positions before a full delta window are `None`.
/// - avg_loss == 0 with avg_gain > 0 (only up-moves): RSI = 100, the
///   expression's natural limit as RS grows without bound.
/// - avg_loss == avg_gain == 0 (perfectly flat window): RS is 0/0, `None`.
pub fn calculate_rsi(closes: &[f64], period: usize) -> Vec<Option<f64>> {
    let n = closes.len();
    let mut out = vec![None; n];
    if period == 0 || n < period + 1 {
        return out;
    }

    // deltas[j] = closes[j + 1] - closes[j]
    let deltas: Vec<f64> = closes.windows(2).map(|w| w[1] - w[0]).collect();

    let gain = |d: f64| if d > 0.0 { d } else { 0.0 };
    let loss = |d: f64| if d < 0.0 { -d } else { 0.0 };

    let period_f = period as f64;
    let mut sum_gain: f64 = deltas[..period].iter().map(|&d| gain(d)).sum();
    let mut sum_loss: f64 = deltas[..period].iter().map(|&d| loss(d)).sum();

    // Close index i sees the deltas ending at deltas[i - 1].
    out[period] = rsi_from_averages(sum_gain / period_f, sum_loss / period_f);
    for i in (period + 1)..n {
        let entering = deltas[i - 1];
        let leaving = deltas[i - 1 - period];
        sum_gain += gain(entering) - gain(leaving);
        sum_loss += loss(entering) - loss(leaving);
        out[i] = rsi_from_averages(sum_gain / period_f, sum_loss / period_f);
    }

    out
}

/// Convert average gain / average loss into an RSI value in [0, 100].
fn rsi_from_averages(avg_gain: f64, avg_loss: f64) -> Option<f64> {
    if avg_loss == 0.0 && avg_gain == 0.0 {
        None // 0/0 — no movement in the window, no ratio to take.
    } else if avg_loss == 0.0 {
        Some(100.0) // All gains, no losses.
    } else {
        let rs = avg_gain / avg_loss;
        Some(100.0 - 100.0 / (1.0 + rs))
    }
}
