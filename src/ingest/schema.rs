//! CSV layout detection.
//!
//! Two layouts are accepted. The verbose layout carries one metric column and
//! one estimation-flag column per metric; the compact layout carries three
//! differently named metric columns and a single shared `estimated` flag.
//! The layout is resolved once from the header and applied to every row, so
//! coercion never re-checks column presence.

use std::collections::HashSet;

use crate::error::IngestError;
use crate::ingest::record::Metric;

/// Which of the two supported CSV layouts a file uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// `k,n,structure` plus per-metric value and flag columns (nine total).
    Verbose,
    /// `Type,k,n,insert,search100k,sum` plus one shared `estimated` flag.
    Compact,
}

/// Required columns of the verbose layout.
pub fn verbose_columns() -> Vec<&'static str> {
    let mut cols = vec!["k", "n", "structure"];
    for metric in Metric::ALL {
        cols.push(metric.column());
        cols.push(metric.flag_column());
    }
    cols
}

/// Required columns of the compact layout.
pub fn compact_columns() -> Vec<&'static str> {
    let mut cols = vec!["Type", "k", "n"];
    for metric in Metric::ALL {
        cols.push(metric.compact_column());
    }
    cols.push("estimated");
    cols
}

/// Decide which layout a header uses, or fail with the missing columns of
/// both candidates. Pure function of the header; extra columns and column
/// order never matter.
pub fn detect_layout<S: AsRef<str>>(header: &[S]) -> Result<Layout, IngestError> {
    let present: HashSet<&str> = header.iter().map(|s| s.as_ref()).collect();

    let missing = |required: &[&str]| -> Vec<String> {
        let mut out: Vec<String> = required
            .iter()
            .filter(|col| !present.contains(*col))
            .map(|col| col.to_string())
            .collect();
        out.sort();
        out
    };

    let missing_verbose = missing(&verbose_columns());
    if missing_verbose.is_empty() {
        return Ok(Layout::Verbose);
    }
    let missing_compact = missing(&compact_columns());
    if missing_compact.is_empty() {
        return Ok(Layout::Compact);
    }
    Err(IngestError::Schema {
        missing_verbose,
        missing_compact,
    })
}
