// Copyright 2026 the Verdant Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Verdant Trend: ordinal least-squares trend fitting.
//!
//! Fits a straight line through a county's year-ordered value series using
//! the point's **position in the series** as the independent variable, not
//! the numeric year. Gaps in the year sequence (2000, 2010, 2021, …) are
//! therefore treated as equally spaced steps. This is intentional: the trend
//! line is a visual summary whose output must stay stable across datasets
//! with ragged year coverage, and chart collaborators place points at
//! ordinal positions for the same reason.
//!
//! ## Minimal example
//!
//! ```rust
//! use verdant_trend::fit;
//!
//! let line = fit(&[10.0, 20.0, 30.0]).unwrap().unwrap();
//! assert_eq!(line.slope, 10.0);
//! assert_eq!(line.intercept, 10.0);
//!
//! // A single point has no trend; no line is drawn.
//! assert!(fit(&[10.0]).unwrap().is_none());
//! ```
//!
//! This crate is `no_std`.

#![no_std]

use kurbo::Line;

/// A fitted trend line in series space: `value = slope * index + intercept`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TrendLine {
    /// Change in value per series step.
    pub slope: f64,
    /// Fitted value at the first point of the series.
    pub intercept: f64,
}

/// Coarse direction of a fitted trend, judged against a slope threshold.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TrendClass {
    /// Slope falls faster than the threshold.
    Improving,
    /// Slope stays within the threshold either way.
    Flat,
    /// Slope rises faster than the threshold.
    Worsening,
}

/// Default slope threshold for classifying total-emissions trends, in
/// emission units per series step.
///
/// Only meaningful for the total metric; per-person series move on a far
/// smaller scale and need their own threshold.
pub const DEFAULT_TOTAL_SLOPE_THRESHOLD: f64 = 10_000.0;

/// The least-squares denominator vanished; no line can be fitted.
///
/// This cannot occur for two or more distinct integer indices, but the guard
/// keeps a division by zero out of the fit.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct DegenerateFit;

impl core::fmt::Display for DegenerateFit {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("degenerate least-squares fit")
    }
}

impl core::error::Error for DegenerateFit {}

impl TrendLine {
    /// Fitted value at a series position.
    #[must_use]
    pub fn value_at(&self, index: usize) -> f64 {
        self.slope * index as f64 + self.intercept
    }

    /// The fitted segment spanning a series of `point_count` points, from
    /// the first ordinal position to the last.
    ///
    /// Returns `None` for fewer than two points, where no segment exists.
    #[must_use]
    pub fn segment(&self, point_count: usize) -> Option<Line> {
        if point_count < 2 {
            return None;
        }
        let last = point_count - 1;
        Some(Line::new(
            (0.0, self.value_at(0)),
            (last as f64, self.value_at(last)),
        ))
    }

    /// Classifies the trend direction against a slope threshold.
    #[must_use]
    pub fn classify(&self, threshold: f64) -> TrendClass {
        if self.slope > threshold {
            TrendClass::Worsening
        } else if self.slope < -threshold {
            TrendClass::Improving
        } else {
            TrendClass::Flat
        }
    }
}

/// Fits a least-squares line through `values` using ordinal indices as x.
///
/// Returns `Ok(None)` when fewer than two points exist (no line is drawn),
/// and [`DegenerateFit`] if the denominator vanishes instead of dividing by
/// zero.
pub fn fit(values: &[f64]) -> Result<Option<TrendLine>, DegenerateFit> {
    let n = values.len();
    if n < 2 {
        return Ok(None);
    }

    let mut sum_x = 0.0;
    let mut sum_y = 0.0;
    let mut sum_xy = 0.0;
    let mut sum_x2 = 0.0;
    for (i, &y) in values.iter().enumerate() {
        let x = i as f64;
        sum_x += x;
        sum_y += y;
        sum_xy += x * y;
        sum_x2 += x * x;
    }

    let n = n as f64;
    let denominator = n * sum_x2 - sum_x * sum_x;
    if denominator == 0.0 {
        return Err(DegenerateFit);
    }
    let slope = (n * sum_xy - sum_x * sum_y) / denominator;
    let intercept = (sum_y - slope * sum_x) / n;
    Ok(Some(TrendLine { slope, intercept }))
}
