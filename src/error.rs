//! Error taxonomy for CSV ingestion.
//!
//! Every variant is terminal for the run: the binaries report the message and
//! exit non-zero. There is no partial-output mode and no retry.

use std::path::PathBuf;

use thiserror::Error;

/// Failure modes of the ingestion stage.
#[derive(Debug, Error)]
pub enum IngestError {
    /// The input path does not exist.
    #[error("input file not found: {path}")]
    MissingFile { path: PathBuf },

    /// The header matches neither supported layout. Lists which required
    /// columns are missing for each candidate so the file can be diagnosed
    /// without re-reading it.
    #[error(
        "CSV missing required columns; supported layouts are:\n\
         - verbose: missing {missing_verbose:?}\n\
         - compact: missing {missing_compact:?}"
    )]
    Schema {
        missing_verbose: Vec<String>,
        missing_compact: Vec<String>,
    },

    /// A single cell failed type coercion.
    #[error("line {line}: invalid value {value:?} for field `{field}`")]
    Parse {
        line: u64,
        field: String,
        value: String,
    },

    /// Header present but zero data rows.
    #[error("{path}: no data rows after header")]
    EmptyFile { path: PathBuf },

    /// Low-level reader failure (IO, malformed CSV framing, deserialize).
    #[error("CSV read failed: {0}")]
    Csv(#[from] csv::Error),
}

impl IngestError {
    /// Shorthand used by the coercion code.
    pub(crate) fn parse(line: u64, field: &str, value: &str) -> Self {
        IngestError::Parse {
            line,
            field: field.to_string(),
            value: value.to_string(),
        }
    }
}
