//! Row coercion: raw CSV cells into typed records.
//!
//! A row either fully coerces or the whole ingestion fails; no partial
//! records are ever produced. Diagnostics carry the 1-based source line and
//! the offending field name.

use csv::StringRecord;

use crate::error::IngestError;
use crate::ingest::record::{BenchmarkRecord, Metric};
use crate::ingest::schema::Layout;

/// Header-resolved column positions, built once per file.
#[derive(Debug, Clone)]
pub struct Columns {
    names: Vec<String>,
}

impl Columns {
    pub fn new(header: &StringRecord) -> Self {
        Columns {
            names: header.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Cell for `name` in `row`, or a `ParseError` if the row is too short
    /// for the detected layout. Never a silent skip.
    fn get<'r>(&self, row: &'r StringRecord, name: &str, line: u64) -> Result<&'r str, IngestError> {
        self.names
            .iter()
            .position(|col| col == name)
            .and_then(|idx| row.get(idx))
            .ok_or_else(|| IngestError::parse(line, name, ""))
    }
}

/// Interpret boolean-ish CSV text. Pure and total: `1`/`true`/`yes`/`y`
/// (case-insensitive) are true, `0`/`false`/`no`/`n` and the empty string
/// are false, anything else is `None`.
pub fn parse_flag(text: &str) -> Option<bool> {
    match text.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "y" => Some(true),
        "0" | "false" | "no" | "n" | "" => Some(false),
        _ => None,
    }
}

fn parse_u32(cols: &Columns, row: &StringRecord, name: &str, line: u64) -> Result<u32, IngestError> {
    let text = cols.get(row, name, line)?;
    text.trim()
        .parse()
        .map_err(|_| IngestError::parse(line, name, text))
}

fn parse_n(cols: &Columns, row: &StringRecord, line: u64) -> Result<u64, IngestError> {
    let text = cols.get(row, "n", line)?;
    let n: u64 = text
        .trim()
        .parse()
        .map_err(|_| IngestError::parse(line, "n", text))?;
    if n == 0 {
        return Err(IngestError::parse(line, "n", text));
    }
    Ok(n)
}

/// Metric durations must be finite and non-negative.
fn parse_duration(
    cols: &Columns,
    row: &StringRecord,
    name: &str,
    line: u64,
) -> Result<f64, IngestError> {
    let text = cols.get(row, name, line)?;
    let value: f64 = text
        .trim()
        .parse()
        .map_err(|_| IngestError::parse(line, name, text))?;
    if !value.is_finite() || value < 0.0 {
        return Err(IngestError::parse(line, name, text));
    }
    Ok(value)
}

fn parse_bool_field(
    cols: &Columns,
    row: &StringRecord,
    name: &str,
    line: u64,
) -> Result<bool, IngestError> {
    let text = cols.get(row, name, line)?;
    parse_flag(text).ok_or_else(|| IngestError::parse(line, name, text))
}

/// Coerce one raw row under the detected layout.
pub fn coerce_row(
    layout: Layout,
    cols: &Columns,
    row: &StringRecord,
    line: u64,
) -> Result<BenchmarkRecord, IngestError> {
    match layout {
        Layout::Verbose => coerce_verbose(cols, row, line),
        Layout::Compact => coerce_compact(cols, row, line),
    }
}

fn coerce_verbose(
    cols: &Columns,
    row: &StringRecord,
    line: u64,
) -> Result<BenchmarkRecord, IngestError> {
    let k = parse_u32(cols, row, "k", line)?;
    let n = parse_n(cols, row, line)?;
    let structure = cols.get(row, "structure", line)?.to_string();

    let mut values = [0.0f64; 3];
    let mut flags = [false; 3];
    for (i, metric) in Metric::ALL.iter().enumerate() {
        values[i] = parse_duration(cols, row, metric.column(), line)?;
        flags[i] = parse_bool_field(cols, row, metric.flag_column(), line)?;
    }

    Ok(BenchmarkRecord {
        k,
        n,
        structure,
        avg_insert_ms: values[0],
        avg_search_ms: values[1],
        avg_sum_ms: values[2],
        insert_estimated: flags[0],
        search_estimated: flags[1],
        sum_estimated: flags[2],
    })
}

fn coerce_compact(
    cols: &Columns,
    row: &StringRecord,
    line: u64,
) -> Result<BenchmarkRecord, IngestError> {
    let k = parse_u32(cols, row, "k", line)?;
    let n = parse_n(cols, row, line)?;
    let structure = cols.get(row, "Type", line)?.to_string();

    let mut values = [0.0f64; 3];
    for (i, metric) in Metric::ALL.iter().enumerate() {
        values[i] = parse_duration(cols, row, metric.compact_column(), line)?;
    }
    // One shared flag covers all three metrics in this layout.
    let estimated = parse_bool_field(cols, row, "estimated", line)?;

    Ok(BenchmarkRecord {
        k,
        n,
        structure,
        avg_insert_ms: values[0],
        avg_search_ms: values[1],
        avg_sum_ms: values[2],
        insert_estimated: estimated,
        search_estimated: estimated,
        sum_estimated: estimated,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn columns(names: &[&str]) -> (Columns, StringRecord) {
        let header = StringRecord::from(names.to_vec());
        (Columns::new(&header), header)
    }

    fn verbose_cols() -> Columns {
        columns(&[
            "k",
            "n",
            "structure",
            "avg_insert_ms",
            "avg_search_ms",
            "avg_sum_ms",
            "insert_estimated",
            "search_estimated",
            "sum_estimated",
        ])
        .0
    }

    fn compact_cols() -> Columns {
        columns(&["Type", "k", "n", "insert", "search100k", "sum", "estimated"]).0
    }

    #[test]
    fn flag_vocabulary() {
        for text in ["1", "true", "TRUE", "Yes", "y", "Y", " true "] {
            assert_eq!(parse_flag(text), Some(true), "text {text:?}");
        }
        for text in ["0", "false", "False", "NO", "n", "", "  "] {
            assert_eq!(parse_flag(text), Some(false), "text {text:?}");
        }
        for text in ["2", "maybe", "truee", "-1", "on"] {
            assert_eq!(parse_flag(text), None, "text {text:?}");
        }
    }

    #[test]
    fn verbose_row_coerces() {
        let row = StringRecord::from(vec!["1", "100", "DS1", "0.5", "1.2", "0.3", "0", "1", "0"]);
        let rec = coerce_row(Layout::Verbose, &verbose_cols(), &row, 2).unwrap();
        assert_eq!(rec.k, 1);
        assert_eq!(rec.n, 100);
        assert_eq!(rec.structure, "DS1");
        assert_eq!(rec.avg_insert_ms, 0.5);
        assert_eq!(rec.avg_search_ms, 1.2);
        assert_eq!(rec.avg_sum_ms, 0.3);
        assert!(!rec.insert_estimated);
        assert!(rec.search_estimated);
        assert!(!rec.sum_estimated);
    }

    #[test]
    fn compact_row_shares_one_flag() {
        let row = StringRecord::from(vec!["AVL", "1", "500", "2.1", "5.0", "1.1", "yes"]);
        let rec = coerce_row(Layout::Compact, &compact_cols(), &row, 2).unwrap();
        assert_eq!(rec.structure, "AVL");
        assert_eq!(rec.n, 500);
        assert_eq!(rec.avg_insert_ms, 2.1);
        assert!(rec.insert_estimated);
        assert!(rec.search_estimated);
        assert!(rec.sum_estimated);
    }

    #[test]
    fn bad_integer_reports_line_and_field() {
        let row = StringRecord::from(vec!["x", "100", "DS1", "0.5", "1.2", "0.3", "0", "1", "0"]);
        let err = coerce_row(Layout::Verbose, &verbose_cols(), &row, 7).unwrap_err();
        match err {
            IngestError::Parse { line, field, value } => {
                assert_eq!(line, 7);
                assert_eq!(field, "k");
                assert_eq!(value, "x");
            }
            other => panic!("expected Parse error, got {other:?}"),
        }
    }

    #[test]
    fn zero_n_is_rejected() {
        let row = StringRecord::from(vec!["1", "0", "DS1", "0.5", "1.2", "0.3", "0", "0", "0"]);
        let err = coerce_row(Layout::Verbose, &verbose_cols(), &row, 3).unwrap_err();
        assert!(matches!(err, IngestError::Parse { ref field, .. } if field == "n"));
    }

    #[test]
    fn negative_metric_is_rejected() {
        let row = StringRecord::from(vec!["1", "10", "DS1", "-0.5", "1.2", "0.3", "0", "0", "0"]);
        let err = coerce_row(Layout::Verbose, &verbose_cols(), &row, 4).unwrap_err();
        assert!(matches!(err, IngestError::Parse { ref field, .. } if field == "avg_insert_ms"));
    }

    #[test]
    fn bad_flag_text_is_rejected() {
        let row = StringRecord::from(vec!["AVL", "1", "500", "2.1", "5.0", "1.1", "perhaps"]);
        let err = coerce_row(Layout::Compact, &compact_cols(), &row, 9).unwrap_err();
        match err {
            IngestError::Parse { line, field, value } => {
                assert_eq!(line, 9);
                assert_eq!(field, "estimated");
                assert_eq!(value, "perhaps");
            }
            other => panic!("expected Parse error, got {other:?}"),
        }
    }

    #[test]
    fn short_row_is_a_parse_error_not_a_skip() {
        let row = StringRecord::from(vec!["1", "100", "DS1", "0.5"]);
        let err = coerce_row(Layout::Verbose, &verbose_cols(), &row, 5).unwrap_err();
        assert!(matches!(err, IngestError::Parse { ref field, .. } if field == "avg_search_ms"));
    }

    #[test]
    fn round_trip_preserves_fields() {
        let original = BenchmarkRecord {
            k: 3,
            n: 4096,
            structure: "Treap".to_string(),
            avg_insert_ms: 0.125,
            avg_search_ms: 7.25,
            avg_sum_ms: 0.0,
            insert_estimated: true,
            search_estimated: false,
            sum_estimated: true,
        };
        let row = StringRecord::from(vec![
            original.k.to_string(),
            original.n.to_string(),
            original.structure.clone(),
            original.avg_insert_ms.to_string(),
            original.avg_search_ms.to_string(),
            original.avg_sum_ms.to_string(),
            original.insert_estimated.to_string(),
            original.search_estimated.to_string(),
            original.sum_estimated.to_string(),
        ]);
        let reparsed = coerce_row(Layout::Verbose, &verbose_cols(), &row, 2).unwrap();
        assert_eq!(reparsed, original);
    }
}
