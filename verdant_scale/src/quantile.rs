// Copyright 2026 the Verdant Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

/// Computes `bins - 1` quantile cut points over `values`.
///
/// Non-finite values are dropped before sorting. The cut for quantile `i` is
/// the element at index `floor(len * i / bins)` of the ascending sort, the
/// convention the legend uses for tick placement. This is not the primary
/// color mapping; fills interpolate continuously.
///
/// Fewer than two bins, or an empty (post-filter) input, yields no cuts.
#[must_use]
pub fn quantiles(values: &[f64], bins: usize) -> Vec<f64> {
    let mut sorted: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
    sorted.sort_unstable_by(f64::total_cmp);
    if sorted.is_empty() || bins < 2 {
        return Vec::new();
    }

    (1..bins).map(|i| sorted[sorted.len() * i / bins]).collect()
}

#[cfg(test)]
mod tests {
    use super::quantiles;
    use alloc::vec;

    #[test]
    fn quartile_cuts_of_a_small_set() {
        let values = [4.0, 1.0, 3.0, 2.0, 8.0, 7.0, 6.0, 5.0];
        // Sorted: 1..=8; cuts at indices 2, 4, 6.
        assert_eq!(quantiles(&values, 4), vec![3.0, 5.0, 7.0]);
    }

    #[test]
    fn non_finite_values_are_dropped() {
        let values = [f64::NAN, 1.0, f64::INFINITY, 2.0, 3.0, 4.0];
        assert_eq!(quantiles(&values, 2), vec![3.0]);
    }

    #[test]
    fn degenerate_inputs_yield_no_cuts() {
        assert!(quantiles(&[], 4).is_empty());
        assert!(quantiles(&[f64::NAN], 4).is_empty());
        assert!(quantiles(&[1.0, 2.0], 1).is_empty());
    }
}
