// Copyright 2026 the Spendpie Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Loading spending records from a JSON payload.
//!
//! The payload is an array of objects with at least `category` (string) and `amount`
//! (non-negative integer) fields; any other fields are ignored. Anything else fails
//! loudly, so a broken payload never shows up as an empty chart.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use spendpie_core::Record;

/// Errors returned while loading a payload.
#[derive(Debug, thiserror::Error)]
pub enum PayloadError {
    /// The payload file could not be read.
    #[error("failed to read payload {}: {source}", .path.display())]
    Io {
        /// Path that failed.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The payload is not an array of `{ category, amount }` objects.
    #[error("malformed payload: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Deserialize)]
struct PayloadRecord {
    category: String,
    amount: u64,
}

impl From<PayloadRecord> for Record {
    fn from(record: PayloadRecord) -> Self {
        Self::new(record.category, record.amount)
    }
}

/// Parses records from a JSON payload string.
pub fn parse_records(json: &str) -> Result<Vec<Record>, PayloadError> {
    let records: Vec<PayloadRecord> = serde_json::from_str(json)?;
    Ok(records.into_iter().map(Record::from).collect())
}

/// Reads and parses records from a payload file.
pub fn load_records(path: impl AsRef<Path>) -> Result<Vec<Record>, PayloadError> {
    let path = path.as_ref();
    let json = std::fs::read_to_string(path).map_err(|source| PayloadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_records(&json)
}
