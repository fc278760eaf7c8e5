// Copyright 2026 the Verdant Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use verdant_metrics::DerivedTables;
use verdant_records::{Metric, RecordStore};

/// A handle for one in-flight dataset load.
///
/// Tickets carry a monotonically increasing sequence number. Only the most
/// recently issued ticket can complete; completions for older tickets are
/// discarded, so a slow response can never overwrite state derived from a
/// newer request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoadTicket {
    pub(crate) seq: u64,
    pub(crate) metric: Metric,
    pub(crate) year: String,
}

impl LoadTicket {
    /// The ticket's position in the issue order.
    #[must_use]
    pub fn sequence(&self) -> u64 {
        self.seq
    }

    /// The metric this load was issued for.
    #[must_use]
    pub fn metric(&self) -> Metric {
        self.metric
    }

    /// The year this load was issued for.
    #[must_use]
    pub fn year(&self) -> &str {
        &self.year
    }
}

/// What happened to a completed load.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[must_use]
pub enum LoadOutcome {
    /// The snapshot was swapped in; queries now answer from this load.
    Applied,
    /// A newer load was issued in the meantime; this one was discarded.
    Stale,
}

/// The immutable result set one applied load swaps in as a unit.
#[derive(Clone, Debug)]
pub(crate) struct Snapshot {
    pub(crate) store: RecordStore,
    pub(crate) metric: Metric,
    pub(crate) year: String,
    pub(crate) tables: DerivedTables,
    pub(crate) domain: (f64, f64),
}
