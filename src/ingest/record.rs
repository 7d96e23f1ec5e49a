//! Typed benchmark rows.
//!
//! One `BenchmarkRecord` per CSV data row. Records are immutable once parsed
//! and have no identity beyond their field values; duplicates simply render
//! as extra plotted points.

/// One row of benchmark output, fully coerced.
#[derive(Debug, Clone, PartialEq)]
pub struct BenchmarkRecord {
    /// Experiment repetition or configuration parameter.
    pub k: u32,
    /// Input size for the benchmarked operation. Always > 0.
    pub n: u64,
    /// Name of the data-structure variant under test (e.g. "AVL", "DS1").
    pub structure: String,
    pub avg_insert_ms: f64,
    pub avg_search_ms: f64,
    pub avg_sum_ms: f64,
    pub insert_estimated: bool,
    pub search_estimated: bool,
    pub sum_estimated: bool,
}

/// The three timing metrics carried by every record, together with their
/// column names, paired estimation-flag columns, and chart labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Metric {
    Insert,
    Search,
    Sum,
}

impl Metric {
    pub const ALL: [Metric; 3] = [Metric::Insert, Metric::Search, Metric::Sum];

    /// Column name in the verbose layout.
    pub fn column(self) -> &'static str {
        match self {
            Metric::Insert => "avg_insert_ms",
            Metric::Search => "avg_search_ms",
            Metric::Sum => "avg_sum_ms",
        }
    }

    /// Estimation-flag column paired with this metric (verbose layout).
    pub fn flag_column(self) -> &'static str {
        match self {
            Metric::Insert => "insert_estimated",
            Metric::Search => "search_estimated",
            Metric::Sum => "sum_estimated",
        }
    }

    /// Column name in the compact layout.
    pub fn compact_column(self) -> &'static str {
        match self {
            Metric::Insert => "insert",
            Metric::Search => "search100k",
            Metric::Sum => "sum",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Metric::Insert => "Insert time vs N",
            Metric::Search => "Search (100k) time vs N",
            Metric::Sum => "Sum-all-scores time vs N",
        }
    }

    pub fn y_label(self) -> &'static str {
        "Time (ms)"
    }

    /// Suffix appended to the output-file prefix for this metric's figure.
    pub fn file_suffix(self) -> &'static str {
        match self {
            Metric::Insert => "insert",
            Metric::Search => "search",
            Metric::Sum => "sum",
        }
    }

    /// Measured value of this metric in a record.
    pub fn value(self, record: &BenchmarkRecord) -> f64 {
        match self {
            Metric::Insert => record.avg_insert_ms,
            Metric::Search => record.avg_search_ms,
            Metric::Sum => record.avg_sum_ms,
        }
    }

    /// Whether this metric's value was extrapolated rather than measured.
    pub fn estimated(self, record: &BenchmarkRecord) -> bool {
        match self {
            Metric::Insert => record.insert_estimated,
            Metric::Search => record.search_estimated,
            Metric::Sum => record.sum_estimated,
        }
    }
}
