// =============================================================================
// Exponential Moving Average (EMA)
// =============================================================================
//
// EMA gives more weight to recent values, making it more responsive to new
// information than the Simple Moving Average (SMA).
//
// Formula:
//   alpha = 2 / (span + 1)
//   EMA_0 = value_0
//   EMA_t = value_t * alpha + EMA_{t-1} * (1 - alpha)
//
// The series is seeded with the first input value, so every position has a
// defined EMA — there is no warm-up gap.
// =============================================================================

/// Compute the EMA series for `values` with the given `span`.
///
/// Returns one output per input, aligned by position. Empty input or a zero
/// span yields an empty vec.
pub fn calculate_ema(values: &[f64], span: usize) -> Vec<f64> {
    if span == 0 || values.is_empty() {
        return Vec::new();
    }

    let alpha = 2.0 / (span as f64 + 1.0);

    let mut out = Vec::with_capacity(values.len());
    let mut prev = values[0];
    out.push(prev);

    for &v in &values[1..] {
        prev = v * alpha + prev * (1.0 - alpha);
        out.push(prev);
    }

    out
}
