//! Ingestion drivers: file to ordered record sequence.
//!
//! The layout is detected once from the header and applied uniformly; a row
//! whose shape contradicts it surfaces as a `ParseError`. The reader is
//! dropped on every exit path, so the input handle is always released.

use std::path::Path;

use csv::ReaderBuilder;
use log::debug;

use crate::error::IngestError;
use crate::ingest::coerce::{coerce_row, Columns};
use crate::ingest::mixed::MixedRecord;
use crate::ingest::record::BenchmarkRecord;
use crate::ingest::schema::detect_layout;

/// Read, validate, and coerce every data row of a benchmark CSV.
/// Records come back in file order.
pub fn load_records(path: &Path) -> Result<Vec<BenchmarkRecord>, IngestError> {
    if !path.exists() {
        return Err(IngestError::MissingFile {
            path: path.to_path_buf(),
        });
    }

    // Flexible: short rows reach coercion, which names the missing field.
    let mut reader = ReaderBuilder::new().flexible(true).from_path(path)?;
    let header = reader.headers()?.clone();
    let header_names: Vec<String> = header.iter().map(|s| s.to_string()).collect();
    let layout = detect_layout(&header_names)?;
    debug!("{}: detected {:?} layout", path.display(), layout);

    let cols = Columns::new(&header);
    let mut records = Vec::new();
    for (idx, row) in reader.records().enumerate() {
        let row = row?;
        // Header is line 1, first data row is line 2.
        records.push(coerce_row(layout, &cols, &row, idx as u64 + 2)?);
    }

    if records.is_empty() {
        return Err(IngestError::EmptyFile {
            path: path.to_path_buf(),
        });
    }
    Ok(records)
}

/// Read mixed-operations workload results. Same missing-file and empty-file
/// discipline as `load_records`; column mismatches surface through the csv
/// deserializer.
pub fn load_mixed_records(path: &Path) -> Result<Vec<MixedRecord>, IngestError> {
    if !path.exists() {
        return Err(IngestError::MissingFile {
            path: path.to_path_buf(),
        });
    }

    let mut reader = csv::Reader::from_path(path)?;
    let mut records = Vec::new();
    for row in reader.deserialize() {
        records.push(row?);
    }

    if records.is_empty() {
        return Err(IngestError::EmptyFile {
            path: path.to_path_buf(),
        });
    }
    Ok(records)
}
