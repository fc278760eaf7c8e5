// Copyright 2026 the Verdant Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use thiserror::Error;

/// Structural failures while ingesting a dataset.
///
/// Row-level malformation never surfaces here; malformed rows are dropped
/// during parsing. These errors mean the input as a whole cannot be used.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum DatasetError {
    /// The emissions table has no recognizable header row.
    #[error("emissions table has no header row")]
    MissingHeader,

    /// The header row lacks one of the required columns.
    #[error("emissions table header is missing the `{name}` column")]
    MissingColumn {
        /// Name of the absent column.
        name: &'static str,
    },

    /// The emissions table could not be read at all.
    #[error("unreadable emissions table")]
    Csv(#[from] csv::Error),

    /// The boundary collection is not valid JSON of the expected shape.
    #[error("unreadable boundary collection")]
    Json(#[from] serde_json::Error),
}
