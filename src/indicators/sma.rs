// =============================================================================
// Simple Moving Average & Rolling Standard Deviation
// =============================================================================
//
// Both are trailing-window statistics over a value series. Output columns are
// position-aligned with the input: the first `period - 1` cells are `None`
// (not enough history to fill the window), every later cell is `Some`.
//
// The rolling mean carries a running sum instead of re-summing each window.
// =============================================================================

/// Trailing simple moving average of `values` over `period`.
///
/// Returns a column of the same length as `values`. Positions before the
/// first full window are `None`; `period == 0` yields an all-`None` column.
pub fn calculate_sma(values: &[f64], period: usize) -> Vec<Option<f64>> {
    let mut out = vec![None; values.len()];
    if period == 0 || values.len() < period {
        return out;
    }

    let period_f = period as f64;
    let mut sum: f64 = values[..period].iter().sum();
    out[period - 1] = Some(sum / period_f);

    for i in period..values.len() {
        sum += values[i] - values[i - period];
        out[i] = Some(sum / period_f);
    }

    out
}

/// Trailing sample standard deviation (N−1 denominator) of `values` over
/// `period`.
///
/// Needs `period >= 2` for the sample correction to make sense; smaller
/// periods yield an all-`None` column. Each window is re-measured in two
/// passes (mean, then squared deviations) — windows here are small.
pub fn rolling_std(values: &[f64], period: usize) -> Vec<Option<f64>> {
    let mut out = vec![None; values.len()];
    if period < 2 || values.len() < period {
        return out;
    }

    for i in (period - 1)..values.len() {
        let window = &values[i + 1 - period..=i];
        let mean = window.iter().sum::<f64>() / period as f64;
        let var = window.iter().map(|x| (x - mean).powi(2)).sum::<f64>()
            / (period as f64 - 1.0);
        out[i] = Some(var.sqrt());
    }

    out
}
