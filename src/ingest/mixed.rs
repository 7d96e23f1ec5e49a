//! Mixed-operations workload results.
//!
//! Fixed schema, deserialized directly: one row per (workload, structure)
//! pair with throughput and timing aggregates.

use serde::Deserialize;

/// One row of `mixed_ops_results.csv`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MixedRecord {
    #[serde(rename = "Workload")]
    pub workload: String,
    #[serde(rename = "Type")]
    pub structure: String,
    #[serde(rename = "Throughput_ops_per_sec")]
    pub throughput_ops_per_sec: f64,
    #[serde(rename = "AvgOpTime_us")]
    pub avg_op_time_us: f64,
    #[serde(rename = "TotalTime")]
    pub total_time_s: f64,
}

/// Metrics of the mixed-operations pipeline, with chart labels and fixed
/// output-file stems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MixedMetric {
    Throughput,
    AvgOpTime,
    TotalTime,
}

impl MixedMetric {
    pub const ALL: [MixedMetric; 3] = [
        MixedMetric::Throughput,
        MixedMetric::AvgOpTime,
        MixedMetric::TotalTime,
    ];

    pub fn title(self) -> &'static str {
        match self {
            MixedMetric::Throughput => "Throughput Comparison Across Workloads",
            MixedMetric::AvgOpTime => "Average Operation Time Across Workloads",
            MixedMetric::TotalTime => "Total Execution Time Across Workloads",
        }
    }

    pub fn y_label(self) -> &'static str {
        match self {
            MixedMetric::Throughput => "Throughput (ops/sec)",
            MixedMetric::AvgOpTime => "Average Operation Time (us)",
            MixedMetric::TotalTime => "Total Execution Time (s)",
        }
    }

    /// Stem of the grouped-bar figure files.
    pub fn bar_file_stem(self) -> &'static str {
        match self {
            MixedMetric::Throughput => "throughput_comparison",
            MixedMetric::AvgOpTime => "avg_operation_time",
            MixedMetric::TotalTime => "total_time",
        }
    }

    /// Stem of the heatmap figure files.
    pub fn heatmap_file_stem(self) -> &'static str {
        match self {
            MixedMetric::Throughput => "heatmap_throughput_ops_per_sec",
            MixedMetric::AvgOpTime => "heatmap_avgoptime_us",
            MixedMetric::TotalTime => "heatmap_totaltime",
        }
    }

    pub fn value(self, record: &MixedRecord) -> f64 {
        match self {
            MixedMetric::Throughput => record.throughput_ops_per_sec,
            MixedMetric::AvgOpTime => record.avg_op_time_us,
            MixedMetric::TotalTime => record.total_time_s,
        }
    }
}
