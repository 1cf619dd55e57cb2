// =============================================================================
// Exponential Moving Average (EMA)
// =============================================================================
//
// EMA gives more weight to recent prices, making it more responsive to new
// information than the Simple Moving Average (SMA).
//
// Formula:
//   multiplier = 2 / (period + 1)
//   EMA_t      = close_t * multiplier + EMA_{t-1} * (1 - multiplier)
//
// The very first EMA value (at index `period - 1`) is seeded with the SMA of
// the first `period` closes; earlier indices are undefined.

/// Compute the EMA series for the given `closes` slice and look-back `period`.
///
/// The result has the same length as `closes`; indices before `period - 1`
/// hold `None`.
///
/// # Edge cases
/// - `period == 0` => all `None` (division by zero guard)
/// - `closes.len() < period` => all `None`
pub fn calculate_ema(closes: &[f64], period: usize) -> Vec<Option<f64>> {
    let mut result = vec![None; closes.len()];
    if period == 0 || closes.len() < period {
        return result;
    }

    let multiplier = 2.0 / (period + 1) as f64;

    // Seed: SMA of the first `period` values.
    let seed: f64 = closes[..period].iter().sum::<f64>() / period as f64;
    result[period - 1] = Some(seed);

    let mut prev = seed;
    for i in period..closes.len() {
        let ema = closes[i] * multiplier + prev * (1.0 - multiplier);
        result[i] = Some(ema);
        prev = ema;
    }

    result
}
