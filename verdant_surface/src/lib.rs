// Copyright 2026 the Verdant Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Verdant Surface: the query surfaces rendering collaborators talk to.
//!
//! [`Atlas`] ties the engine together. It owns the parsed datasets, the
//! derived metric tables, and the selection controller, and answers the
//! questions the two rendering collaborators ask:
//!
//! - The **map** asks for a county's fill color and tooltip, and forwards
//!   county activations.
//! - The **chart** asks for a county's year series, axis ticks, trend
//!   line, and per-county colors.
//!
//! ## Load lifecycle
//!
//! Dataset retrieval is asynchronous and external: the caller fetches raw
//! text, the atlas parses and derives. A metric or year change issues a
//! [`LoadTicket`]; the caller fetches the current and baseline datasets,
//! always as a pair (partial results are never shown), and hands both to
//! [`Atlas::complete_load`]. The parsed stores and derived tables are
//! swapped in as one immutable snapshot.
//!
//! In-flight loads are not cancelled. Instead, tickets carry a sequence
//! number and only the most recently issued ticket may apply; a slow, stale
//! response arriving after a newer request is discarded:
//!
//! ```rust
//! use verdant_records::Metric;
//! use verdant_surface::{Atlas, LoadOutcome};
//!
//! let boundary = r#"{"type": "FeatureCollection", "features": [
//!     {"type": "Feature", "properties": {"NAME": "Alameda County"}}
//! ]}"#;
//! let table = "\
//! county,calendar_year,total_ghg_emissions,emissions_per_person,population
//! Alameda,2000,100.0,5.0,1000000
//! Alameda,2024,150.0,4.0,1100000
//! ";
//!
//! let mut atlas = Atlas::new(boundary).unwrap();
//! let stale = atlas.begin_load(Metric::Total, "2010");
//! let fresh = atlas.begin_load(Metric::Total, "2024");
//!
//! // The older response loses the race and is ignored.
//! assert_eq!(atlas.complete_load(stale, table, table).unwrap(), LoadOutcome::Stale);
//! assert_eq!(atlas.complete_load(fresh, table, table).unwrap(), LoadOutcome::Applied);
//! assert_eq!(atlas.tooltip("Alameda County").unwrap().percent_change, 50.0);
//! ```
//!
//! Everything is single-threaded; selection transitions run synchronously
//! on the same thread as the load completions, so the only coordination
//! needed is the sequence check above.

mod chart;
mod load;
mod map;

pub use chart::{MIN_BAR_PX, SeriesPoint, bar_height};
pub use load::{LoadOutcome, LoadTicket};
pub use map::Tooltip;

use std::collections::BTreeSet;

use kurbo::Line;

use verdant_metrics::{BASELINE_YEAR, PERCENT_CHANGE_DOMAIN, available, derive, display_domain};
use verdant_records::{DatasetError, Metric, RecordStore, county_names, normalize_county};
use verdant_scale::{
    Rgb, UNAVAILABLE, color_for_signed, compare_color, green_yellow_red, nice_ticks, quantiles,
};
use verdant_selection::{SelectionController, ToggleOutcome};
use verdant_trend::TrendLine;

use crate::load::Snapshot;

/// The engine facade shared by the map and chart surfaces.
///
/// Construction parses the boundary collection once; emissions data arrives
/// later through the load lifecycle. Queries before the first applied load
/// answer neutrally (unavailable colors, empty series).
#[derive(Debug)]
pub struct Atlas {
    counties: Vec<String>,
    selection: SelectionController,
    next_seq: u64,
    latest: u64,
    snapshot: Option<Snapshot>,
}

impl Atlas {
    /// Creates an atlas over the boundary feature collection.
    pub fn new(boundary_geojson: &str) -> Result<Self, DatasetError> {
        let counties = county_names(boundary_geojson)?;
        let selection = SelectionController::new(counties.iter().cloned());
        Ok(Self {
            counties,
            selection,
            next_seq: 1,
            latest: 0,
            snapshot: None,
        })
    }

    /// The normalized county names, in boundary-collection order.
    #[must_use]
    pub fn counties(&self) -> &[String] {
        &self.counties
    }

    /// The active `(metric, year)` pair, once a load has applied.
    #[must_use]
    pub fn active(&self) -> Option<(Metric, &str)> {
        self.snapshot
            .as_ref()
            .map(|snap| (snap.metric, snap.year.as_str()))
    }

    /// The selection/focus state machine, for reading.
    #[must_use]
    pub fn selection(&self) -> &SelectionController {
        &self.selection
    }

    /// The selection/focus state machine, for the focus controls.
    pub fn selection_mut(&mut self) -> &mut SelectionController {
        &mut self.selection
    }

    // ---- Load lifecycle -------------------------------------------------

    /// Issues a load for a metric and year, superseding any in-flight load.
    ///
    /// The returned ticket must come back through [`Atlas::complete_load`]
    /// together with both fetched datasets.
    pub fn begin_load(&mut self, metric: Metric, year: &str) -> LoadTicket {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.latest = seq;
        log::debug!("issued load #{seq} for {metric:?} {year}");
        LoadTicket {
            seq,
            metric,
            year: year.trim().to_owned(),
        }
    }

    /// Completes a load with the fetched current and baseline datasets.
    ///
    /// The two datasets are a join: both must be present before anything is
    /// derived, and the snapshot they produce is swapped in as a unit. A
    /// ticket that is no longer the latest is discarded as
    /// [`LoadOutcome::Stale`] without touching current state.
    pub fn complete_load(
        &mut self,
        ticket: LoadTicket,
        current_csv: &str,
        baseline_csv: &str,
    ) -> Result<LoadOutcome, DatasetError> {
        if ticket.seq != self.latest {
            log::debug!(
                "discarding stale load #{} (latest is #{})",
                ticket.seq,
                self.latest
            );
            return Ok(LoadOutcome::Stale);
        }

        let store = RecordStore::parse(current_csv)?.merged(RecordStore::parse(baseline_csv)?);
        let tables = derive(&store, ticket.metric, &ticket.year);
        let domain = display_domain(&ticket.year, tables.current.values().copied());
        log::debug!(
            "applied load #{} ({} counties, domain {:?})",
            ticket.seq,
            tables.current.len(),
            domain
        );
        self.snapshot = Some(Snapshot {
            store,
            metric: ticket.metric,
            year: ticket.year,
            tables,
            domain,
        });
        Ok(LoadOutcome::Applied)
    }

    /// The legend's `[min, max]` domain for the active year.
    ///
    /// `[0, 100]` for the baseline year (and before the first load), the
    /// spread of the positive finite values otherwise.
    #[must_use]
    pub fn legend_domain(&self) -> (f64, f64) {
        self.snapshot
            .as_ref()
            .map_or((0.0, 100.0), |snap| snap.domain)
    }

    /// Quantile cut points over the active values, for legend ticks.
    #[must_use]
    pub fn legend_cuts(&self, bins: usize) -> Vec<f64> {
        let Some(snap) = &self.snapshot else {
            return Vec::new();
        };
        let values: Vec<f64> = snap.tables.current.values().copied().collect();
        quantiles(&values, bins)
    }

    // ---- Map surface ----------------------------------------------------

    /// Fill color for a county's feature.
    ///
    /// Percent change maps onto the diverging ramp over the fixed signed
    /// domain; counties without a finite percent change (and everything
    /// before the first load) fill neutrally.
    #[must_use]
    pub fn fill_color(&self, county: &str) -> Rgb {
        let Some(snap) = &self.snapshot else {
            return UNAVAILABLE;
        };
        let key = normalize_county(county);
        let pct = snap
            .tables
            .percent_change
            .get(&key)
            .copied()
            .unwrap_or(0.0);
        let Some(pct) = available(pct) else {
            return UNAVAILABLE;
        };
        let (min, max) = PERCENT_CHANGE_DOMAIN;
        color_for_signed(pct, min, max)
    }

    /// Structured tooltip fields for a county, or `None` before the first
    /// load.
    #[must_use]
    pub fn tooltip(&self, county: &str) -> Option<Tooltip> {
        let snap = self.snapshot.as_ref()?;
        let key = normalize_county(county);

        let percent_change = snap
            .tables
            .percent_change
            .get(&key)
            .copied()
            .and_then(available)
            .unwrap_or(0.0);
        let baseline_value = snap
            .tables
            .baseline
            .get(&key)
            .copied()
            .and_then(available);
        let current_value = baseline_value.map(|base| base * (1.0 + percent_change / 100.0));
        let population = snap
            .store
            .get(&key, &snap.year)
            .or_else(|| snap.store.get(&key, BASELINE_YEAR))
            .and_then(|record| available(record.population));

        Some(Tooltip {
            population,
            baseline_value,
            current_value,
            percent_change,
        })
    }

    /// The color for the percent-change figure inside a county's tooltip.
    ///
    /// This is the fill color passed through the readable-contrast
    /// adjustment, so the figure stays legible where the fill is bright
    /// (the yellow midband).
    #[must_use]
    pub fn change_color(&self, county: &str) -> Rgb {
        self.fill_color(county).readable()
    }

    /// Forwards a county activation (a click on its feature) to the
    /// selection controller.
    pub fn county_activated(&mut self, county: &str) -> ToggleOutcome {
        self.selection.toggle(&normalize_county(county))
    }

    // ---- Chart surface --------------------------------------------------

    /// A county's year-ascending series for the active metric.
    #[must_use]
    pub fn series_for(&self, county: &str) -> Vec<SeriesPoint> {
        let Some(snap) = &self.snapshot else {
            return Vec::new();
        };
        snap.store
            .series_for(&normalize_county(county), snap.metric)
            .into_iter()
            .map(|(year, value)| SeriesPoint { year, value })
            .collect()
    }

    /// Axis tick labels for a `[min, max]` domain, descending.
    #[must_use]
    pub fn axis_ticks(&self, min: f64, max: f64, count: usize) -> Vec<f64> {
        nice_ticks(min, max, count)
    }

    /// The fitted trend line over a county's series, if one can be drawn.
    ///
    /// Series with fewer than two points have no line; a degenerate fit is
    /// logged and likewise draws nothing.
    #[must_use]
    pub fn trend_line_for(&self, county: &str) -> Option<TrendLine> {
        let values: Vec<f64> = self
            .series_for(county)
            .into_iter()
            .map(|point| point.value)
            .collect();
        match verdant_trend::fit(&values) {
            Ok(line) => line,
            Err(err) => {
                log::warn!("no trend line for {county}: {err}");
                None
            }
        }
    }

    /// The trend line as a segment in (ordinal index, value) space.
    #[must_use]
    pub fn trend_segment_for(&self, county: &str) -> Option<Line> {
        let point_count = self.series_for(county).len();
        self.trend_line_for(county)?.segment(point_count)
    }

    /// The ordered county list handed to the chart surface.
    ///
    /// Order is selection order and determines color assignment: the first
    /// county gets the first categorical color.
    #[must_use]
    pub fn handoff_counties(&self) -> Vec<String> {
        self.selection.handoff()
    }

    /// Union of the years covered by the handed-off counties, ascending.
    ///
    /// This is the chart's x axis; counties missing a year simply draw
    /// nothing at that position.
    #[must_use]
    pub fn chart_years(&self) -> Vec<String> {
        let mut years = BTreeSet::new();
        for county in self.handoff_counties() {
            for point in self.series_for(&county) {
                years.insert(point.year);
            }
        }
        years.into_iter().collect()
    }

    /// The `[min, max]` spread of the handed-off counties' series values.
    ///
    /// Falls back to `[0, 1]` when nothing is selected or loaded, so axis
    /// math stays finite.
    #[must_use]
    pub fn chart_value_domain(&self) -> (f64, f64) {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for county in self.handoff_counties() {
            for point in self.series_for(&county) {
                if point.value.is_finite() {
                    min = min.min(point.value);
                    max = max.max(point.value);
                }
            }
        }
        if min > max { (0.0, 1.0) } else { (min, max) }
    }

    /// The color for one point or bar of a county's series.
    ///
    /// With a single county on the chart, values shade along the diverging
    /// ramp over the chart domain; with several, each county keeps its
    /// categorical comparison color.
    #[must_use]
    pub fn series_color(&self, county_index: usize, value: f64) -> Rgb {
        if self.handoff_counties().len() > 1 {
            return compare_color(county_index);
        }
        let Some(value) = available(value) else {
            return UNAVAILABLE;
        };
        let (min, max) = self.chart_value_domain();
        let span = max - min;
        let percent = if span == 0.0 {
            0.0
        } else {
            ((value - min) / span).clamp(0.0, 1.0)
        };
        green_yellow_red(percent)
    }
}
