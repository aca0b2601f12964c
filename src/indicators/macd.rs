// =============================================================================
// Moving Average Convergence / Divergence (MACD)
// =============================================================================
//
// MACD_t   = EMA(close, fast)_t - EMA(close, slow)_t
// Signal_t = EMA(MACD, signal_span)_t
//
// Every EMA here is seeded with the first value of its own input series, so
// both columns are defined from position 0 — the signal line seeds from
// MACD_0, not from the first close.
// =============================================================================

use super::ema::calculate_ema;

/// Position-aligned MACD line and signal line.
#[derive(Debug, Clone)]
pub struct MacdColumns {
    pub macd: Vec<f64>,
    pub signal: Vec<f64>,
}

/// Compute MACD over `closes` with the given fast/slow EMA spans and the
/// signal-line span (classically 12 / 26 / 9).
///
/// Empty input or a zero span yields empty columns.
pub fn calculate_macd(
    closes: &[f64],
    fast: usize,
    slow: usize,
    signal_span: usize,
) -> MacdColumns {
    let ema_fast = calculate_ema(closes, fast);
    let ema_slow = calculate_ema(closes, slow);

    let macd: Vec<f64> = ema_fast
        .iter()
        .zip(ema_slow.iter())
        .map(|(f, s)| f - s)
        .collect();

    let signal = calculate_ema(&macd, signal_span);

    MacdColumns { macd, signal }
}

// =============================================================================
// Unit Tests
// =============================================================================
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn macd_empty_input() {
        let m = calculate_macd(&[], 12, 26, 9);
        assert!(m.macd.is_empty());
        assert!(m.signal.is_empty());
    }

    #[test]
    fn macd_constant_series_is_zero() {
        // Both EMAs sit on the constant, so their difference is zero — and so
        // is the signal line seeded from it.
        let m = calculate_macd(&[100.0; 40], 12, 26, 9);
        for (&macd, &sig) in m.macd.iter().zip(m.signal.iter()) {
            assert!(macd.abs() < 1e-12);
            assert!(sig.abs() < 1e-12);
        }
    }

    #[test]
    fn macd_defined_from_first_position() {
        let closes: Vec<f64> = (1..=30).map(|x| x as f64).collect();
        let m = calculate_macd(&closes, 12, 26, 9);
        assert_eq!(m.macd.len(), 30);
        assert_eq!(m.signal.len(), 30);
        // Both EMAs seed with closes[0], so MACD_0 == 0 and Signal_0 == MACD_0.
        assert!(m.macd[0].abs() < 1e-12);
        assert!((m.signal[0] - m.macd[0]).abs() < 1e-12);
    }

    #[test]
    fn macd_signal_follows_ema_recurrence() {
        // Signal must reproduce alpha*MACD_t + (1-alpha)*Signal_{t-1} with
        // alpha = 2/10, seeded at MACD_0, over a fixed 30-close series.
        let closes: Vec<f64> = (0..30)
            .map(|i| 100.0 + (i as f64 * 0.6).sin() * 8.0 + i as f64 * 0.3)
            .collect();
        let m = calculate_macd(&closes, 12, 26, 9);

        let alpha = 2.0 / 10.0;
        let mut expected = m.macd[0];
        assert!((m.signal[0] - expected).abs() < 1e-12);
        for i in 1..30 {
            expected = m.macd[i] * alpha + expected * (1.0 - alpha);
            assert!((m.signal[i] - expected).abs() < 1e-9);
        }
    }

    #[test]
    fn macd_rising_series_positive() {
        // In a steady uptrend the fast EMA sits above the slow one.
        let closes: Vec<f64> = (1..=60).map(|x| x as f64).collect();
        let m = calculate_macd(&closes, 12, 26, 9);
        assert!(*m.macd.last().unwrap() > 0.0);
    }
}
