//! Line-chart pipeline: benchmark timing CSV to per-metric figures.
//!
//! Reads one CSV (verbose or compact layout), groups rows by structure,
//! assigns deterministic colors/markers, and writes one PNG + SVG pair per
//! metric, plus an optional combined overview. Any failure terminates the
//! run with a non-zero exit and a descriptive message.

use std::fs::create_dir_all;

use anyhow::{Context, Result};
use log::info;

use bench_charts::chart::{
    build_color_map, build_marker_map, group_by_structure, render_metric_chart, render_overview,
    structure_names, ChartStyle,
};
use bench_charts::cli::benchplot_cli;
use bench_charts::ingest::{load_records, Metric};

fn main() -> Result<()> {
    env_logger::init();
    let args = benchplot_cli();

    let records = load_records(&args.csv_path)?;
    info!(
        "{}: loaded {} records",
        args.csv_path.display(),
        records.len()
    );

    let series = group_by_structure(&records);
    let names = structure_names(&series);
    let colors = build_color_map(&names);
    let markers = build_marker_map(&names);
    let style = ChartStyle::default();

    create_dir_all(&args.out_dir)
        .with_context(|| format!("failed to create {}", args.out_dir.display()))?;

    for metric in Metric::ALL {
        render_metric_chart(
            &series,
            metric,
            &colors,
            &markers,
            &style,
            args.overlay,
            &args.out_dir,
            &args.prefix,
        )?;
    }

    if args.overview {
        render_overview(
            &series,
            &colors,
            &markers,
            &style,
            args.overlay,
            &args.out_dir,
            &args.prefix,
        )?;
    }

    Ok(())
}
