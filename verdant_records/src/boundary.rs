// Copyright 2026 the Verdant Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use serde::Deserialize;
use serde_json::Value;

use crate::error::DatasetError;

/// Minimal view of a feature collection; geometry is someone else's job.
#[derive(Debug, Deserialize)]
struct FeatureCollection {
    #[serde(default)]
    features: Vec<Feature>,
}

#[derive(Debug, Deserialize)]
struct Feature {
    #[serde(default)]
    properties: serde_json::Map<String, Value>,
}

/// Normalizes a county name to the shared lookup form.
///
/// The emissions table says `Alameda` where the boundary collection says
/// `Alameda County`; a single trailing `" County"` suffix is stripped and
/// surrounding whitespace trimmed so both sides produce the same join key.
#[must_use]
pub fn normalize_county(raw: &str) -> String {
    raw.strip_suffix(" County").unwrap_or(raw).trim().to_owned()
}

/// Reads the normalized county names out of a boundary feature collection.
///
/// Each feature's `NAME` property is used, falling back to `name`. Features
/// carrying neither are skipped. Order follows the collection, which is the
/// order pickers present counties in.
pub fn county_names(geojson_text: &str) -> Result<Vec<String>, DatasetError> {
    let collection: FeatureCollection = serde_json::from_str(geojson_text)?;

    let mut names = Vec::with_capacity(collection.features.len());
    let mut skipped = 0_usize;
    for feature in &collection.features {
        let name = feature
            .properties
            .get("NAME")
            .or_else(|| feature.properties.get("name"))
            .and_then(Value::as_str);
        match name {
            Some(name) => names.push(normalize_county(name)),
            None => skipped += 1,
        }
    }
    if skipped > 0 {
        log::warn!("skipped {skipped} boundary features without a name property");
    }
    Ok(names)
}
