// Copyright 2026 the Verdant Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Verdant Records: typed ingestion of the county emissions dataset.
//!
//! This crate is the foundation the rest of the engine reads from. It turns
//! the two externally fetched inputs into typed, immutable values:
//!
//! - The **emissions table** (CSV): one [`EmissionRecord`] per `(county,
//!   year)`, parsed by header name rather than column position. Malformed
//!   rows are dropped silently; the caller only ever sees the resulting
//!   (possibly smaller) [`RecordStore`]. Structural problems (no header
//!   row, a missing required column) are typed [`DatasetError`]s.
//! - The **boundary collection** (a GeoJSON-style feature collection): the
//!   authoritative county name list, read from each feature's `NAME` or
//!   `name` property.
//!
//! The two inputs are produced independently and disagree on name form, so
//! both sides are pushed through [`normalize_county`] before any lookup:
//! a trailing `" County"` suffix is stripped and whitespace trimmed.
//!
//! ## Minimal example
//!
//! ```rust
//! use verdant_records::{Metric, RecordStore};
//!
//! let table = "\
//! county,calendar_year,total_ghg_emissions,emissions_per_person,population
//! Alameda,2000,8030000.0,5.5,1460000
//! Alameda,2024,6810000.0,4.1,1660000
//! ";
//! let store = RecordStore::parse(table).unwrap();
//! assert_eq!(store.years(), ["2000", "2024"]);
//!
//! let record = store.get("Alameda", "2024").unwrap();
//! assert_eq!(Metric::Total.value_of(record), 6_810_000.0);
//! assert_eq!(Metric::PerPerson.value_of(record), 4.1);
//! ```

mod boundary;
mod error;
mod store;

pub use boundary::{county_names, normalize_county};
pub use error::DatasetError;
pub use store::{EmissionRecord, RecordStore};

/// The years the published dataset covers, oldest first.
///
/// The store reports the years actually present after parsing
/// ([`RecordStore::years`]); this list is the canonical default for year
/// pickers before any data has loaded.
pub const AVAILABLE_YEARS: [&str; 6] = ["2000", "2010", "2021", "2022", "2023", "2024"];

/// Which numeric field of an [`EmissionRecord`] drives downstream
/// computation.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum Metric {
    /// Total greenhouse-gas emissions, in metric tons.
    #[default]
    Total,
    /// Emissions per person, in metric tons per person.
    PerPerson,
}

impl Metric {
    /// Reads this metric's field from a record.
    #[must_use]
    pub fn value_of(self, record: &EmissionRecord) -> f64 {
        match self {
            Self::Total => record.total_emissions,
            Self::PerPerson => record.per_person_emissions,
        }
    }

    /// Fraction digits conventionally shown for this metric.
    #[must_use]
    pub fn fraction_digits(self) -> usize {
        match self {
            Self::Total => 0,
            Self::PerPerson => 2,
        }
    }

    /// Unit label for this metric.
    #[must_use]
    pub fn unit(self) -> &'static str {
        match self {
            Self::Total => "MT",
            Self::PerPerson => "MT/person",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{AVAILABLE_YEARS, Metric};

    #[test]
    fn total_is_the_default_metric() {
        assert_eq!(Metric::default(), Metric::Total);
    }

    #[test]
    fn formatting_conventions_per_metric() {
        assert_eq!(Metric::Total.fraction_digits(), 0);
        assert_eq!(Metric::Total.unit(), "MT");
        assert_eq!(Metric::PerPerson.fraction_digits(), 2);
        assert_eq!(Metric::PerPerson.unit(), "MT/person");
    }

    #[test]
    fn available_years_are_ascending() {
        let mut sorted = AVAILABLE_YEARS;
        sorted.sort_unstable();
        assert_eq!(sorted, AVAILABLE_YEARS);
    }
}
