// =============================================================================
// Crossover detection — shared by the MA and MACD analyses
// =============================================================================
//
// Scans adjacent (fast, slow) pairs from the most recent bar backward and
// reports the first strict flip it finds:
//   Bullish — previous fast < slow, current fast > slow
//   Bearish — previous fast > slow, current fast < slow
// The most recent crossover always wins. Pairs with any undefined value can
// never match.

/// Direction of a detected line crossover.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrossDirection {
    Bullish,
    Bearish,
}

/// Find the most recent crossover of `fast` over `slow` within the trailing
/// `lookback` adjacent pairs.
///
/// Both slices must be aligned index-for-index (as produced by the indicator
/// primitives). At most `min(lookback, len - 1)` pairs are examined; the scan
/// short-circuits on the first match.
pub fn recent_cross(
    fast: &[Option<f64>],
    slow: &[Option<f64>],
    lookback: usize,
) -> Option<CrossDirection> {
    debug_assert_eq!(fast.len(), slow.len());

    let len = fast.len();
    if len < 2 {
        return None;
    }

    // Newest pair first: (len-2, len-1), (len-3, len-2), ...
    (1..len)
        .rev()
        .take(lookback.min(len - 1))
        .find_map(|i| cross_at(fast, slow, i))
}

/// Classify the pair ending at index `i`, if all four values are defined.
fn cross_at(fast: &[Option<f64>], slow: &[Option<f64>], i: usize) -> Option<CrossDirection> {
    let prev_fast = fast[i - 1]?;
    let prev_slow = slow[i - 1]?;
    let curr_fast = fast[i]?;
    let curr_slow = slow[i]?;

    if prev_fast < prev_slow && curr_fast > curr_slow {
        Some(CrossDirection::Bullish)
    } else if prev_fast > prev_slow && curr_fast < curr_slow {
        Some(CrossDirection::Bearish)
    } else {
        None
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
#[cfg(test)]
mod tests {
    use super::*;

    fn defined(values: &[f64]) -> Vec<Option<f64>> {
        values.iter().copied().map(Some).collect()
    }

    #[test]
    fn no_cross_on_parallel_lines() {
        let fast = defined(&[1.0, 2.0, 3.0, 4.0]);
        let slow = defined(&[0.5, 1.5, 2.5, 3.5]);
        assert_eq!(recent_cross(&fast, &slow, 10), None);
    }

    #[test]
    fn detects_bullish_flip() {
        let fast = defined(&[1.0, 3.0]);
        let slow = defined(&[2.0, 2.0]);
        assert_eq!(recent_cross(&fast, &slow, 10), Some(CrossDirection::Bullish));
    }

    #[test]
    fn detects_bearish_flip() {
        let fast = defined(&[3.0, 1.0]);
        let slow = defined(&[2.0, 2.0]);
        assert_eq!(recent_cross(&fast, &slow, 10), Some(CrossDirection::Bearish));
    }

    #[test]
    fn most_recent_cross_wins() {
        // Bullish flip at index 1, bearish flip at index 3 — the bearish one
        // is newer and must be the answer.
        let fast = defined(&[1.0, 3.0, 3.0, 1.0]);
        let slow = defined(&[2.0, 2.0, 2.0, 2.0]);
        assert_eq!(recent_cross(&fast, &slow, 10), Some(CrossDirection::Bearish));
    }

    #[test]
    fn lookback_bounds_the_scan() {
        // The only flip sits at the oldest pair; a lookback of 1 cannot see it.
        let fast = defined(&[1.0, 3.0, 3.0, 3.0]);
        let slow = defined(&[2.0, 2.0, 2.0, 2.0]);
        assert_eq!(recent_cross(&fast, &slow, 1), None);
        assert_eq!(recent_cross(&fast, &slow, 3), Some(CrossDirection::Bullish));
    }

    #[test]
    fn undefined_values_never_match() {
        let fast = vec![None, Some(3.0), Some(3.0)];
        let slow = vec![Some(2.0), Some(2.0), None];
        assert_eq!(recent_cross(&fast, &slow, 10), None);
    }

    #[test]
    fn touch_without_strict_flip_is_not_a_cross() {
        // Fast rises to meet slow exactly, then advances: prev equality means
        // the strict `<` precondition never held.
        let fast = defined(&[2.0, 3.0]);
        let slow = defined(&[2.0, 2.0]);
        assert_eq!(recent_cross(&fast, &slow, 10), None);
    }

    #[test]
    fn single_point_series_has_no_pairs() {
        assert_eq!(recent_cross(&[Some(1.0)], &[Some(2.0)], 10), None);
        assert_eq!(recent_cross(&[], &[], 10), None);
    }
}
