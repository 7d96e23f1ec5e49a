//! Grouping of parsed records into per-structure series.

use std::collections::BTreeMap;

use crate::ingest::record::BenchmarkRecord;

/// All records for one structure, sorted by ascending `n`. The unit every
/// renderer consumes.
#[derive(Debug, Clone, PartialEq)]
pub struct StructureSeries {
    pub name: String,
    pub records: Vec<BenchmarkRecord>,
}

/// Partition records by structure name and sort each partition by `n`.
/// Series come back in lexicographic name order, so the result is identical
/// for any input ordering of the same rows.
pub fn group_by_structure(records: &[BenchmarkRecord]) -> Vec<StructureSeries> {
    let mut grouped: BTreeMap<String, Vec<BenchmarkRecord>> = BTreeMap::new();
    for record in records {
        grouped
            .entry(record.structure.clone())
            .or_default()
            .push(record.clone());
    }
    grouped
        .into_iter()
        .map(|(name, mut records)| {
            records.sort_by_key(|r| r.n);
            StructureSeries { name, records }
        })
        .collect()
}

/// Structure names of a grouped result, in series order.
pub fn structure_names(series: &[StructureSeries]) -> Vec<String> {
    series.iter().map(|s| s.name.clone()).collect()
}
