// Copyright 2026 the Verdant Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Verdant Metrics: comparative metric derivation against the baseline
//! year.
//!
//! Every map fill and insight line in the atlas compares a county's current
//! value against its value in [`BASELINE_YEAR`]. This crate derives those
//! comparisons from a [`RecordStore`]: the per-county current and baseline
//! value tables for the active metric, and the percent change between them.
//!
//! Percent change is `(current - baseline) / baseline * 100`. A county with
//! no baseline record, or a zero baseline, derives a percent change of
//! `0.0`; the established policy renders "no data" and "no change"
//! identically. [`DerivedTables::baseline_gaps`] lists the counties the
//! policy applied to, so a future caller can tell them apart without the
//! numbers changing.
//!
//! Derivation is a pure function of its inputs; nothing here caches or
//! mutates.
//!
//! ## Minimal example
//!
//! ```rust
//! use verdant_metrics::{derive, percent_change, BASELINE_YEAR};
//! use verdant_records::{Metric, RecordStore};
//!
//! let table = "\
//! county,calendar_year,total_ghg_emissions,emissions_per_person,population
//! Alameda,2000,100.0,5.0,1000000
//! Alameda,2024,150.0,4.0,1100000
//! ";
//! let store = RecordStore::parse(table).unwrap();
//! let tables = derive(&store, Metric::Total, "2024");
//! assert_eq!(tables.percent_change["Alameda"], 50.0);
//! assert_eq!(percent_change(150.0, 0.0), 0.0);
//! assert_eq!(BASELINE_YEAR, "2000");
//! ```

use hashbrown::HashMap;

use verdant_records::{Metric, RecordStore};

/// The fixed reference year percent change is computed against.
///
/// Deliberately a constant rather than a parameter: every surface in the
/// atlas compares against the same year, and the hard-coding is kept
/// visible here instead of scattered as a literal.
pub const BASELINE_YEAR: &str = "2000";

/// The fixed signed domain the map uses for percent-change fills.
pub const PERCENT_CHANGE_DOMAIN: (f64, f64) = (-75.0, 75.0);

/// Per-county tables derived for one `(metric, year)` request.
#[derive(Clone, Debug, Default)]
pub struct DerivedTables {
    /// County → value for the requested year.
    pub current: HashMap<String, f64>,
    /// County → value for [`BASELINE_YEAR`].
    pub baseline: HashMap<String, f64>,
    /// County → percent change from baseline, `0.0` where the baseline is
    /// absent or zero.
    pub percent_change: HashMap<String, f64>,
    /// Counties (sorted) whose percent change fell back to `0.0` because
    /// the baseline was absent or zero.
    pub baseline_gaps: Vec<String>,
}

/// Percent change of `current` against `baseline`.
///
/// A missing baseline is passed as `0.0` by convention; both an absent and
/// a zero baseline yield `0.0` rather than a division by zero.
#[must_use]
pub fn percent_change(current: f64, baseline: f64) -> f64 {
    if baseline == 0.0 {
        return 0.0;
    }
    (current - baseline) / baseline * 100.0
}

/// Derives the comparison tables for one metric and year.
///
/// The baseline side always reads [`BASELINE_YEAR`] regardless of `year`;
/// requesting the baseline year itself simply compares it to itself (and
/// callers switch to the fixed degenerate domain, see [`display_domain`]).
#[must_use]
pub fn derive(store: &RecordStore, metric: Metric, year: &str) -> DerivedTables {
    let current: HashMap<String, f64> = store
        .records_for_year(year)
        .map(|records| {
            records
                .iter()
                .map(|(county, record)| (county.clone(), metric.value_of(record)))
                .collect()
        })
        .unwrap_or_default();
    let baseline: HashMap<String, f64> = store
        .records_for_year(BASELINE_YEAR)
        .map(|records| {
            records
                .iter()
                .map(|(county, record)| (county.clone(), metric.value_of(record)))
                .collect()
        })
        .unwrap_or_default();

    let mut percent = HashMap::with_capacity(current.len());
    let mut gaps = Vec::new();
    for (county, &value) in &current {
        let base = baseline.get(county).copied();
        match base {
            Some(base) if base != 0.0 => {
                percent.insert(county.clone(), percent_change(value, base));
            }
            _ => {
                percent.insert(county.clone(), 0.0);
                gaps.push(county.clone());
            }
        }
    }
    gaps.sort_unstable();

    DerivedTables {
        current,
        baseline,
        percent_change: percent,
        baseline_gaps: gaps,
    }
}

/// The numeric domain legends and quantile bins use for a year's values.
///
/// Requesting the baseline year would produce a degenerate self-comparison
/// domain, so that case is pinned to `[0, 100]`. Otherwise the domain spans
/// the finite positive values; non-positive and non-finite values never
/// participate. An empty domain also falls back to `[0, 100]`.
#[must_use]
pub fn display_domain<I>(year: &str, values: I) -> (f64, f64)
where
    I: IntoIterator<Item = f64>,
{
    if year.trim() == BASELINE_YEAR {
        return (0.0, 100.0);
    }

    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for value in values {
        if !value.is_finite() || value <= 0.0 {
            continue;
        }
        min = min.min(value);
        max = max.max(value);
    }
    if min > max {
        return (0.0, 100.0);
    }
    (min, max)
}

/// A value usable in formatting and arithmetic, or `None`.
///
/// `NaN` and infinities are "unavailable" everywhere downstream; they never
/// propagate into derived numbers or color math.
#[must_use]
pub fn available(value: f64) -> Option<f64> {
    value.is_finite().then_some(value)
}
