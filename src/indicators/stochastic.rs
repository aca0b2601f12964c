// =============================================================================
// Stochastic Oscillator (%K / %D)
// =============================================================================
//
// %K locates the close inside the trailing high/low range:
//   %K = (close - lowest_low) / (highest_high - lowest_low) * 100
// over a `k_period` window. %D is the `d_period` simple moving average of %K.
//
// A window whose highest high equals its lowest low has no range to locate
// the close in; %K is undefined there (never an error), and any %D window
// touching an undefined %K is undefined too.
// =============================================================================

/// Position-aligned %K and %D columns.
#[derive(Debug, Clone)]
pub struct StochasticColumns {
    pub percent_k: Vec<Option<f64>>,
    pub percent_d: Vec<Option<f64>>,
}

/// Compute the stochastic oscillator over parallel high/low/close series.
///
/// The three input slices must be the same length (one entry per candle).
pub fn calculate_stochastic(
    highs: &[f64],
    lows: &[f64],
    closes: &[f64],
    k_period: usize,
    d_period: usize,
) -> StochasticColumns {
    let n = closes.len();
    debug_assert_eq!(highs.len(), n);
    debug_assert_eq!(lows.len(), n);

    let mut percent_k = vec![None; n];
    if k_period > 0 && n >= k_period {
        for i in (k_period - 1)..n {
            let window = i + 1 - k_period..=i;
            let low_min = lows[window.clone()].iter().cloned().fold(f64::INFINITY, f64::min);
            let high_max = highs[window].iter().cloned().fold(f64::NEG_INFINITY, f64::max);
            let range = high_max - low_min;
            if range > 0.0 {
                percent_k[i] = Some((closes[i] - low_min) / range * 100.0);
            }
        }
    }

    // %D: SMA of %K, undefined until the %D window holds only defined %K cells.
    let mut percent_d = vec![None; n];
    if d_period > 0 && n >= d_period {
        for i in (d_period - 1)..n {
            let window = &percent_k[i + 1 - d_period..=i];
            if window.iter().all(|c| c.is_some()) {
                let sum: f64 = window.iter().flatten().sum();
                percent_d[i] = Some(sum / d_period as f64);
            }
        }
    }

    StochasticColumns {
        percent_k,
        percent_d,
    }
}
