//! Renderer smoke tests: every chart call on valid records must write a
//! non-empty PNG and SVG pair.

use std::fs;
use std::path::Path;

use tempfile::TempDir;

use bench_charts::chart::{
    build_color_map, build_marker_map, group_by_structure, render_grouped_bars, render_heatmap,
    render_metric_chart, render_overview, structure_names, ChartStyle,
};
use bench_charts::chart::overview::render_mixed_overview;
use bench_charts::{BenchmarkRecord, Metric, MixedMetric, MixedRecord};

fn record(structure: &str, n: u64, estimated: bool) -> BenchmarkRecord {
    BenchmarkRecord {
        k: 1,
        n,
        structure: structure.to_string(),
        avg_insert_ms: n as f64 * 0.01,
        avg_search_ms: n as f64 * 0.02,
        avg_sum_ms: n as f64 * 0.005,
        insert_estimated: estimated,
        search_estimated: false,
        sum_estimated: estimated,
    }
}

fn sample_records() -> Vec<BenchmarkRecord> {
    let mut records = Vec::new();
    for structure in ["DS1", "DS2", "SkipList_p0.5"] {
        for n in [100u64, 1000, 10000, 100000] {
            records.push(record(structure, n, n >= 10000));
        }
    }
    records
}

fn sample_mixed() -> Vec<MixedRecord> {
    let mut records = Vec::new();
    for workload in ["ReadHeavy", "WriteHeavy", "Balanced"] {
        for (i, structure) in ["DS1", "DS2", "DS3"].iter().enumerate() {
            records.push(MixedRecord {
                workload: workload.to_string(),
                structure: structure.to_string(),
                throughput_ops_per_sec: 1e4 * (i + 1) as f64,
                avg_op_time_us: 100.0 / (i + 1) as f64,
                total_time_s: 5.0 + i as f64,
            });
        }
    }
    records
}

fn assert_pair_written(png: &Path) {
    let svg = png.with_extension("svg");
    for path in [png, svg.as_path()] {
        let meta = fs::metadata(path)
            .unwrap_or_else(|e| panic!("{} not written: {e}", path.display()));
        assert!(meta.len() > 0, "{} is empty", path.display());
    }
}

#[test]
fn metric_charts_write_png_and_svg() {
    let dir = TempDir::new().unwrap();
    let series = group_by_structure(&sample_records());
    let names = structure_names(&series);
    let colors = build_color_map(&names);
    let markers = build_marker_map(&names);
    let style = ChartStyle::default();

    for metric in Metric::ALL {
        let png = render_metric_chart(
            &series,
            metric,
            &colors,
            &markers,
            &style,
            true,
            dir.path(),
            "fig",
        )
        .unwrap();
        assert_pair_written(&png);
    }
}

#[test]
fn overview_writes_png_and_svg() {
    let dir = TempDir::new().unwrap();
    let series = group_by_structure(&sample_records());
    let names = structure_names(&series);
    let colors = build_color_map(&names);
    let markers = build_marker_map(&names);
    let style = ChartStyle::default();

    let png = render_overview(
        &series,
        &colors,
        &markers,
        &style,
        false,
        dir.path(),
        "fig",
    )
    .unwrap();
    assert_pair_written(&png);
    assert!(png.ends_with("fig_overview.png"));
}

#[test]
fn single_point_series_still_renders() {
    let dir = TempDir::new().unwrap();
    let series = group_by_structure(&[record("AVL", 128, false)]);
    let names = structure_names(&series);
    let colors = build_color_map(&names);
    let markers = build_marker_map(&names);
    let style = ChartStyle::default();

    let png = render_metric_chart(
        &series,
        Metric::Insert,
        &colors,
        &markers,
        &style,
        false,
        dir.path(),
        "solo",
    )
    .unwrap();
    assert_pair_written(&png);
}

#[test]
fn mixed_bars_and_heatmaps_write_png_and_svg() {
    let dir = TempDir::new().unwrap();
    let records = sample_mixed();
    let colors = build_color_map(&["DS1", "DS2", "DS3"]);
    let style = ChartStyle::default();

    for metric in MixedMetric::ALL {
        let bar = render_grouped_bars(&records, metric, &colors, &style, dir.path()).unwrap();
        assert_pair_written(&bar);
        let heat = render_heatmap(&records, metric, &style, dir.path()).unwrap();
        assert_pair_written(&heat);
    }
}

#[test]
fn mixed_overview_writes_png_and_svg() {
    let dir = TempDir::new().unwrap();
    let records = sample_mixed();
    let colors = build_color_map(&["DS1", "DS2", "DS3"]);
    let markers = build_marker_map(&["DS1", "DS2", "DS3"]);
    let style = ChartStyle::default();

    let png = render_mixed_overview(&records, &colors, &markers, &style, dir.path()).unwrap();
    assert_pair_written(&png);
}
