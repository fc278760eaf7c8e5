// Copyright 2026 the Verdant Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use hashbrown::HashMap;
use serde::Deserialize;

use crate::Metric;
use crate::boundary::normalize_county;
use crate::error::DatasetError;

/// One county-year observation from the emissions table.
///
/// Records are immutable once parsed and uniquely keyed by `(county, year)`
/// within a [`RecordStore`]. Population is a first-class field here; it is
/// never mixed into the county keyspace.
#[derive(Clone, Debug, PartialEq)]
pub struct EmissionRecord {
    /// Normalized county name.
    pub county: String,
    /// Calendar year, as the dataset's string form.
    pub year: String,
    /// Total greenhouse-gas emissions in metric tons.
    pub total_emissions: f64,
    /// Emissions per person in metric tons.
    pub per_person_emissions: f64,
    /// County population for the year.
    pub population: f64,
}

/// Raw row shape, field names matching the table's header columns.
#[derive(Debug, Deserialize)]
struct RawRow {
    county: String,
    calendar_year: String,
    total_ghg_emissions: f64,
    emissions_per_person: f64,
    population: f64,
}

const REQUIRED_COLUMNS: [&str; 5] = [
    "county",
    "calendar_year",
    "total_ghg_emissions",
    "emissions_per_person",
    "population",
];

/// An immutable set of [`EmissionRecord`]s indexed by year and county.
///
/// Built once per dataset load and never mutated afterwards; a metric or
/// year change produces a fresh store that is swapped in as a unit.
#[derive(Clone, Debug, Default)]
pub struct RecordStore {
    by_year: HashMap<String, HashMap<String, EmissionRecord>>,
    years: Vec<String>,
}

impl RecordStore {
    /// Parses the emissions table.
    ///
    /// The header row is located by its leading `county` column (preamble
    /// lines above it are skipped) and fields are mapped by header name, so
    /// column order does not matter. Quoted county values are unquoted, and
    /// county names and years are normalized/trimmed.
    ///
    /// Rows with too few columns or unparseable (or non-finite) numeric
    /// fields are dropped without surfacing an error; the drop count is
    /// only logged. A header that is missing a required column is a
    /// structural [`DatasetError`] instead.
    pub fn parse(text: &str) -> Result<Self, DatasetError> {
        let Some(start) = header_offset(text) else {
            return Err(DatasetError::MissingHeader);
        };

        let mut reader = csv::Reader::from_reader(text[start..].as_bytes());
        let headers = reader.headers()?.clone();
        for name in REQUIRED_COLUMNS {
            if !headers.iter().any(|h| h == name) {
                return Err(DatasetError::MissingColumn { name });
            }
        }

        let mut by_year: HashMap<String, HashMap<String, EmissionRecord>> = HashMap::new();
        let mut kept = 0_usize;
        let mut dropped = 0_usize;
        for row in reader.deserialize::<RawRow>() {
            let Ok(raw) = row else {
                dropped += 1;
                continue;
            };
            if !raw.total_ghg_emissions.is_finite()
                || !raw.emissions_per_person.is_finite()
                || !raw.population.is_finite()
            {
                dropped += 1;
                continue;
            }

            let county = normalize_county(&raw.county);
            let year = raw.calendar_year.trim().to_owned();
            let record = EmissionRecord {
                county: county.clone(),
                year: year.clone(),
                total_emissions: raw.total_ghg_emissions,
                per_person_emissions: raw.emissions_per_person,
                population: raw.population,
            };
            by_year.entry(year).or_default().insert(county, record);
            kept += 1;
        }
        log::debug!("parsed {kept} emission records, dropped {dropped} malformed rows");

        Ok(Self::from_parts(by_year))
    }

    /// Combines two stores into a new one.
    ///
    /// Used when the current-year and baseline datasets arrive as separate
    /// loads. Records already present in `self` win on key conflicts; the
    /// usual case is both loads carrying identical rows for shared years.
    #[must_use]
    pub fn merged(mut self, other: Self) -> Self {
        for (year, counties) in other.by_year {
            let slot = self.by_year.entry(year).or_default();
            for (county, record) in counties {
                slot.entry(county).or_insert(record);
            }
        }
        Self::from_parts(self.by_year)
    }

    fn from_parts(by_year: HashMap<String, HashMap<String, EmissionRecord>>) -> Self {
        let mut years: Vec<String> = by_year.keys().cloned().collect();
        years.sort_unstable();
        Self { by_year, years }
    }

    /// The county → record mapping for one year, if any records exist.
    #[must_use]
    pub fn records_for_year(&self, year: &str) -> Option<&HashMap<String, EmissionRecord>> {
        self.by_year.get(year.trim())
    }

    /// Looks up one record by normalized county name and year.
    #[must_use]
    pub fn get(&self, county: &str, year: &str) -> Option<&EmissionRecord> {
        self.by_year.get(year.trim())?.get(county)
    }

    /// The years actually present in the store, ascending.
    #[must_use]
    pub fn years(&self) -> &[String] {
        &self.years
    }

    /// A county's year-ascending series for one metric.
    ///
    /// Years the county has no record for are simply absent; callers treat
    /// the sequence positions as ordinal steps.
    #[must_use]
    pub fn series_for(&self, county: &str, metric: Metric) -> Vec<(String, f64)> {
        self.years
            .iter()
            .filter_map(|year| {
                let record = self.by_year.get(year)?.get(county)?;
                Some((year.clone(), metric.value_of(record)))
            })
            .collect()
    }

    /// Number of records in the store.
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_year.values().map(HashMap::len).sum()
    }

    /// Returns `true` if no records survived parsing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_year.is_empty()
    }
}

/// Byte offset of the header row: the first line starting with `county,`.
fn header_offset(text: &str) -> Option<usize> {
    let mut offset = 0;
    for line in text.split_inclusive('\n') {
        if line.trim_start().starts_with("county,") {
            return Some(offset);
        }
        offset += line.len();
    }
    None
}
