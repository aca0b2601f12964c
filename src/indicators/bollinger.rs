// =============================================================================
// Bollinger Bands
// =============================================================================
//
// Bollinger Bands consist of a middle band (SMA), an upper band (SMA + k*σ),
// and a lower band (SMA - k*σ), with σ the rolling sample standard deviation
// over the same window. Upper − lower is therefore exactly 2k·σ wherever the
// bands are defined.

use super::sma::{calculate_sma, rolling_std};

/// Position-aligned Bollinger Band columns.
#[derive(Debug, Clone)]
pub struct BollingerColumns {
    pub middle: Vec<Option<f64>>,
    pub upper: Vec<Option<f64>>,
    pub lower: Vec<Option<f64>>,
}

/// Calculate Bollinger Bands over `closes` with the given window and band
/// multiplier.
///
/// All three columns have the same length as `closes`; the first
/// `period - 1` positions are `None` (no full window yet).
pub fn calculate_bollinger(closes: &[f64], period: usize, num_std: f64) -> BollingerColumns {
    let middle = calculate_sma(closes, period);
    let std = rolling_std(closes, period);

    let upper = middle
        .iter()
        .zip(std.iter())
        .map(|(m, s)| match (m, s) {
            (Some(m), Some(s)) => Some(m + num_std * s),
            _ => None,
        })
        .collect();

    let lower = middle
        .iter()
        .zip(std.iter())
        .map(|(m, s)| match (m, s) {
            (Some(m), Some(s)) => Some(m - num_std * s),
            _ => None,
        })
        .collect();

    BollingerColumns {
        middle,
        upper,
        lower,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bollinger_warmup_boundary() {
        let closes: Vec<f64> = (1..=25).map(|x| x as f64).collect();
        let bb = calculate_bollinger(&closes, 20, 2.0);
        for i in 0..19 {
            assert!(bb.middle[i].is_none());
            assert!(bb.upper[i].is_none());
            assert!(bb.lower[i].is_none());
        }
        for i in 19..25 {
            assert!(bb.middle[i].is_some());
            assert!(bb.upper[i].is_some());
            assert!(bb.lower[i].is_some());
        }
    }

    #[test]
    fn bollinger_width_is_four_sigma() {
        // With k = 2, upper − lower must equal 4σ at every defined position.
        let closes: Vec<f64> = (0..40)
            .map(|i| 100.0 + (i as f64 * 0.9).cos() * 7.0)
            .collect();
        let bb = calculate_bollinger(&closes, 20, 2.0);
        let std = rolling_std(&closes, 20);
        for i in 19..closes.len() {
            let width = bb.upper[i].unwrap() - bb.lower[i].unwrap();
            assert!((width - 4.0 * std[i].unwrap()).abs() < 1e-9);
        }
    }

    #[test]
    fn bollinger_flat_series_collapses() {
        let closes = vec![100.0; 30];
        let bb = calculate_bollinger(&closes, 20, 2.0);
        for i in 19..30 {
            assert!((bb.upper[i].unwrap() - 100.0).abs() < 1e-12);
            assert!((bb.middle[i].unwrap() - 100.0).abs() < 1e-12);
            assert!((bb.lower[i].unwrap() - 100.0).abs() < 1e-12);
        }
    }

    #[test]
    fn bollinger_bands_bracket_the_mean() {
        let closes: Vec<f64> = (1..=30).map(|x| x as f64).collect();
        let bb = calculate_bollinger(&closes, 20, 2.0);
        for i in 19..30 {
            assert!(bb.upper[i].unwrap() > bb.middle[i].unwrap());
            assert!(bb.lower[i].unwrap() < bb.middle[i].unwrap());
        }
    }
}
