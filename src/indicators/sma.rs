// =============================================================================
// Simple Moving Average (SMA)
// =============================================================================
//
// SMA at index i is the arithmetic mean of the `period` closes ending at i.
// It is undefined while fewer than `period` closes are available.

/// Compute the SMA series for the given `closes` and `period`.
///
/// The result has the same length as `closes`; indices before `period - 1`
/// hold `None`.
///
/// # Edge cases
/// - `period == 0` => all `None` (window of nothing has no mean)
/// - `closes.len() < period` => all `None`
pub fn calculate_sma(closes: &[f64], period: usize) -> Vec<Option<f64>> {
    let mut result = vec![None; closes.len()];
    if period == 0 || closes.len() < period {
        return result;
    }

    // Rolling sum: subtract the close leaving the window, add the one entering.
    let mut window_sum: f64 = closes[..period].iter().sum();
    result[period - 1] = Some(window_sum / period as f64);

    for i in period..closes.len() {
        window_sum += closes[i] - closes[i - period];
        result[i] = Some(window_sum / period as f64);
    }

    result
}
