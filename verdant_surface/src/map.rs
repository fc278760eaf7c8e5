// Copyright 2026 the Verdant Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Structured tooltip fields for one county on the map.
///
/// Unavailable values are `None` and render as a placeholder; they are
/// never substituted with zeros. The displayed current value is
/// reconstructed from the baseline and the percent change so the tooltip
/// always agrees with the fill color, even when the raw current table and
/// the percent-change table disagree about a county.
#[derive(Clone, Debug, PartialEq)]
pub struct Tooltip {
    /// County population, preferring the current year and falling back to
    /// the baseline year.
    pub population: Option<f64>,
    /// The county's value in the baseline year.
    pub baseline_value: Option<f64>,
    /// The current value implied by the baseline and percent change.
    pub current_value: Option<f64>,
    /// Percent change from baseline; `0.0` where no baseline exists.
    pub percent_change: f64,
}
