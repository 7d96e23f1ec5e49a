//! # Benchmark chart generation
//!
//! Reads CSV files produced by external data-structure benchmarking programs
//! (BST, AVL, Treap, Skip List variants, array stores) and renders comparison
//! charts as PNG + SVG files.
//!
//! ## Pipelines
//! - **benchplot:** per-`n` timing results in one of two CSV layouts
//!   (verbose / compact) rendered as per-metric line charts plus an optional
//!   combined overview.
//! - **mixedplot:** mixed-operations workload results rendered as grouped
//!   log-scale bar charts, per-metric heatmaps, and a 2x2 overview.
//!
//! Both pipelines share one shape: load CSV, detect and coerce, group by
//! structure, call chart renderers. Fully synchronous batch execution; every
//! error is terminal for the run.

pub mod chart;
pub mod cli;
pub mod error;
pub mod ingest;

pub use chart::{
    build_color_map, build_marker_map, group_by_structure, structure_names, ChartStyle,
    StructureSeries,
};
pub use error::IngestError;
pub use ingest::{
    detect_layout, load_mixed_records, load_records, BenchmarkRecord, Layout, Metric, MixedMetric,
    MixedRecord,
};
