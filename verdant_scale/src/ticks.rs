// Copyright 2026 the Verdant Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec;
use alloc::vec::Vec;

/// Computes "nice" axis labels for a `[min, max]` domain, ordered descending.
///
/// Labels are snapped to a step one decade below the magnitude of `max`, so
/// they land on human-friendly values rather than raw linear subdivisions of
/// the domain. The result is ordered top-to-bottom to match a vertically
/// stacked axis: the first label is at or above `max`, and no label falls
/// below `min` snapped down to the step.
///
/// Up to `tick_count + 1` labels are produced; candidates below the snapped
/// bottom are discarded, so the result may be shorter.
///
/// A non-positive `max` yields the degenerate single-label axis `[0.0]`.
#[must_use]
pub fn nice_ticks(min: f64, max: f64, tick_count: usize) -> Vec<f64> {
    if max <= 0.0 {
        return vec![0.0];
    }
    if tick_count == 0 {
        return Vec::new();
    }

    let exp = libm::floor(libm::log10(max));
    let step = libm::pow(10.0, exp - 1.0);
    let top = libm::ceil(max / step) * step;
    let bottom = libm::floor(min / step) * step;
    let interval = libm::ceil((top - bottom) / tick_count as f64 / step) * step;

    (0..=tick_count)
        .map(|i| top - i as f64 * interval)
        .filter(|&label| label >= bottom)
        .collect()
}

/// Rounding direction for [`nice_number`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Round {
    /// Round down to the leading decade.
    #[default]
    Down,
    /// Round up to the leading decade.
    Up,
    /// Round to the nearest leading decade.
    Nearest,
}

/// Rounds `n` to a human-friendly value at its own order of magnitude.
///
/// `nice_number(47.0, Round::Nearest)` is `50.0`; `nice_number(47.0,
/// Round::Down)` is `40.0`. Non-positive input yields `0.0`.
#[must_use]
pub fn nice_number(n: f64, round: Round) -> f64 {
    if n <= 0.0 {
        return 0.0;
    }
    let factor = libm::pow(10.0, libm::floor(libm::log10(n)));
    let scaled = n / factor;
    let snapped = match round {
        Round::Down => libm::floor(scaled),
        Round::Up => libm::ceil(scaled),
        Round::Nearest => libm::round(scaled),
    };
    snapped * factor
}

/// Rounds a data `[min, max]` pair outward to legend-friendly bounds.
///
/// Bounds snap to 100 000 steps. When snapping down would collapse a positive
/// minimum to zero, the minimum falls back to 1 000 steps instead, so the
/// legend never claims a zero floor the data does not have. Degenerate cases
/// (equal inputs, or bounds that snap onto each other) fall back to the raw
/// values.
#[must_use]
pub fn legend_bounds(min: f64, max: f64) -> (f64, f64) {
    if min == max {
        return (min, max);
    }
    const STEP: f64 = 100_000.0;
    let mut lo = libm::floor(min / STEP) * STEP;
    if lo == 0.0 && min > 0.0 {
        lo = libm::floor(min / 1_000.0) * 1_000.0;
    }
    let hi = libm::ceil(max / STEP) * STEP;
    if lo == hi { (min, max) } else { (lo, hi) }
}

#[cfg(test)]
mod tests {
    use super::{Round, legend_bounds, nice_number, nice_ticks};
    use alloc::vec;

    #[test]
    fn ticks_for_small_domain_are_descending_and_bounded() {
        let ticks = nice_ticks(0.0, 47.0, 5);
        assert_eq!(ticks, vec![47.0, 37.0, 27.0, 17.0, 7.0]);
        assert!(ticks.len() <= 6);
        assert!(ticks.first().copied().unwrap() >= 47.0);
        assert!(ticks.windows(2).all(|w| w[0] > w[1]));
        assert!(ticks.iter().all(|&t| t >= 0.0));
    }

    #[test]
    fn ticks_degenerate_domain_is_single_zero() {
        assert_eq!(nice_ticks(0.0, 0.0, 5), vec![0.0]);
        assert_eq!(nice_ticks(10.0, -3.0, 5), vec![0.0]);
    }

    #[test]
    fn ticks_zero_count_yields_no_labels() {
        assert!(nice_ticks(0.0, 47.0, 0).is_empty());
    }

    #[test]
    fn ticks_snap_to_a_decade_below_max() {
        // max = 830_000 snaps to 10_000 steps.
        let ticks = nice_ticks(0.0, 830_000.0, 5);
        assert_eq!(ticks.first(), Some(&830_000.0));
        assert!(ticks.iter().all(|t| t % 10_000.0 == 0.0));
    }

    #[test]
    fn ticks_top_covers_unaligned_max() {
        let ticks = nice_ticks(0.0, 47.3, 5);
        assert!(ticks.first().copied().unwrap() >= 47.3);
    }

    #[test]
    fn nice_number_rounds_at_leading_decade() {
        assert_eq!(nice_number(47.0, Round::Down), 40.0);
        assert_eq!(nice_number(47.0, Round::Up), 50.0);
        assert_eq!(nice_number(47.0, Round::Nearest), 50.0);
        assert_eq!(nice_number(44.0, Round::Nearest), 40.0);
        assert_eq!(nice_number(0.0, Round::Up), 0.0);
        assert_eq!(nice_number(-3.0, Round::Down), 0.0);
    }

    #[test]
    fn legend_bounds_snap_outward() {
        let (lo, hi) = legend_bounds(240_000.0, 1_730_000.0);
        assert_eq!(lo, 200_000.0);
        assert_eq!(hi, 1_800_000.0);
    }

    #[test]
    fn legend_bounds_small_positive_min_keeps_a_nonzero_floor() {
        let (lo, hi) = legend_bounds(42_500.0, 930_000.0);
        assert_eq!(lo, 42_000.0);
        assert_eq!(hi, 1_000_000.0);
    }

    #[test]
    fn legend_bounds_equal_inputs_pass_through() {
        assert_eq!(legend_bounds(5.0, 5.0), (5.0, 5.0));
    }

    #[test]
    fn legend_bounds_negative_domain_snaps_outward() {
        assert_eq!(legend_bounds(-30_000.0, -20_000.0), (-100_000.0, 0.0));
    }
}
