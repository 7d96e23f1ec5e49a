//! Mixed-operations pipeline: workload results CSV to bar charts, heatmaps,
//! and a 2x2 overview.

use std::fs::create_dir_all;

use anyhow::{Context, Result};
use log::info;

use bench_charts::chart::bars::mixed_structure_order;
use bench_charts::chart::{
    build_color_map, build_marker_map, render_grouped_bars, render_heatmap,
    render_mixed_overview, ChartStyle,
};
use bench_charts::cli::mixedplot_cli;
use bench_charts::ingest::{load_mixed_records, MixedMetric};

fn main() -> Result<()> {
    env_logger::init();
    let args = mixedplot_cli();

    let records = load_mixed_records(&args.csv_path)?;
    info!(
        "{}: loaded {} records",
        args.csv_path.display(),
        records.len()
    );

    let names = mixed_structure_order(&records);
    let colors = build_color_map(&names);
    let markers = build_marker_map(&names);
    let style = ChartStyle::default();

    create_dir_all(&args.out_dir)
        .with_context(|| format!("failed to create {}", args.out_dir.display()))?;

    for metric in MixedMetric::ALL {
        render_grouped_bars(&records, metric, &colors, &style, &args.out_dir)?;
        render_heatmap(&records, metric, &style, &args.out_dir)?;
    }
    render_mixed_overview(&records, &colors, &markers, &style, &args.out_dir)?;

    Ok(())
}
