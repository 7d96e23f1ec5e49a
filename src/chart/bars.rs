//! Grouped bar charts for the mixed-operations pipeline.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::Result;
use log::info;
use plotters::coord::Shift;
use plotters::prelude::*;

use crate::chart::style::ChartStyle;
use crate::chart::{draw_err, marker_element};
use crate::chart::palette::Marker;
use crate::ingest::mixed::{MixedMetric, MixedRecord};

const FALLBACK_GREY: RGBColor = RGBColor(128, 128, 128);

/// Workload names in first-appearance order (the category axis).
pub fn workload_order(records: &[MixedRecord]) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for r in records {
        if !out.contains(&r.workload) {
            out.push(r.workload.clone());
        }
    }
    out
}

/// Structure names in first-appearance order.
pub fn mixed_structure_order(records: &[MixedRecord]) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for r in records {
        if !out.contains(&r.structure) {
            out.push(r.structure.clone());
        }
    }
    out
}

fn metric_value(records: &[MixedRecord], workload: &str, structure: &str, metric: MixedMetric) -> Option<f64> {
    records
        .iter()
        .find(|r| r.workload == workload && r.structure == structure)
        .map(|r| metric.value(r))
}

/// Log-scale y range padded for readability. Values are strictly positive in
/// practice; a degenerate range is clamped instead of crashing.
fn log_range(values: &[f64]) -> (f64, f64) {
    let mut min = f64::INFINITY;
    let mut max = 0.0f64;
    for &v in values {
        if v > 0.0 {
            min = min.min(v);
            max = max.max(v);
        }
    }
    if !min.is_finite() || max <= 0.0 {
        return (0.1, 10.0);
    }
    (min / 1.5, max * 2.0)
}

/// Draw one grouped-bar panel onto an existing drawing area.
pub fn draw_grouped_bars<DB>(
    root: &DrawingArea<DB, Shift>,
    records: &[MixedRecord],
    metric: MixedMetric,
    colors: &BTreeMap<String, RGBColor>,
    style: &ChartStyle,
) -> Result<()>
where
    DB: DrawingBackend,
{
    root.fill(&WHITE).map_err(draw_err)?;

    let workloads = workload_order(records);
    let structures = mixed_structure_order(records);
    let values: Vec<f64> = records.iter().map(|r| metric.value(r)).collect();
    let (y_min, y_max) = log_range(&values);

    let mut chart = ChartBuilder::on(root)
        .caption(metric.title(), style.title_font())
        .margin(20)
        .x_label_area_size(55)
        .y_label_area_size(80)
        .build_cartesian_2d(0f64..workloads.len() as f64, (y_min..y_max).log_scale())
        .map_err(draw_err)?;

    let labels = workloads.clone();
    chart
        .configure_mesh()
        .x_desc("Workload Type")
        .y_desc(metric.y_label())
        .axis_desc_style(style.label_font())
        .label_style(style.label_font())
        .x_labels(workloads.len())
        .x_label_formatter(&move |x| {
            let idx = x.floor() as usize;
            labels.get(idx).cloned().unwrap_or_default()
        })
        .draw()
        .map_err(draw_err)?;

    let bar_width = 0.8 / structures.len().max(1) as f64;
    for (s_idx, structure) in structures.iter().enumerate() {
        let color = colors.get(structure).copied().unwrap_or(FALLBACK_GREY);

        let mut bars = Vec::new();
        for (w_idx, workload) in workloads.iter().enumerate() {
            let Some(value) = metric_value(records, workload, structure, metric) else {
                continue;
            };
            if value <= 0.0 {
                continue;
            }
            let center = w_idx as f64 + 0.5;
            let offset = (s_idx as f64 - (structures.len() - 1) as f64 / 2.0) * bar_width;
            let x0 = center + offset - bar_width / 2.0;
            let x1 = center + offset + bar_width / 2.0;
            bars.push(Rectangle::new([(x0, y_min), (x1, value)], color.filled()));
            bars.push(Rectangle::new(
                [(x0, y_min), (x1, value)],
                BLACK.stroke_width(1),
            ));
        }

        chart
            .draw_series(bars)
            .map_err(draw_err)?
            .label(structure)
            .legend(move |(x, y)| {
                Rectangle::new([(x, y - 5), (x + 10, y + 5)], color.filled())
            });
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .border_style(&BLACK)
        .label_font(style.legend_font())
        .draw()
        .map_err(draw_err)?;

    Ok(())
}

/// Throughput-based ranking panel: rank 1 (best) at the top.
pub fn draw_ranking<DB>(
    root: &DrawingArea<DB, Shift>,
    records: &[MixedRecord],
    colors: &BTreeMap<String, RGBColor>,
    markers: &BTreeMap<String, Marker>,
    style: &ChartStyle,
) -> Result<()>
where
    DB: DrawingBackend,
{
    root.fill(&WHITE).map_err(draw_err)?;

    let workloads = workload_order(records);
    let structures = mixed_structure_order(records);
    let count = structures.len();

    let mut chart = ChartBuilder::on(root)
        .caption("Performance Ranking", style.title_font())
        .margin(20)
        .x_label_area_size(55)
        .y_label_area_size(60)
        .build_cartesian_2d(
            -0.5..workloads.len() as f64 - 0.5,
            0.5..count as f64 + 0.5,
        )
        .map_err(draw_err)?;

    // The axis stores an inverted rank so rank 1 lands at the top; the
    // formatter maps ticks back to the displayed rank.
    let labels = workloads.clone();
    chart
        .configure_mesh()
        .x_desc("Workload Type")
        .y_desc("Rank (by Throughput)")
        .axis_desc_style(style.label_font())
        .label_style(style.label_font())
        .x_labels(workloads.len())
        .x_label_formatter(&move |x| {
            let idx = (x + 0.5).floor() as usize;
            labels.get(idx).cloned().unwrap_or_default()
        })
        .y_labels(count)
        .y_label_formatter(&move |y| format!("{:.0}", count as f64 + 1.0 - y))
        .draw()
        .map_err(draw_err)?;

    for structure in &structures {
        let color = colors.get(structure).copied().unwrap_or(FALLBACK_GREY);
        let marker = markers.get(structure).copied().unwrap_or(Marker::Circle);

        let mut points: Vec<(f64, f64)> = Vec::new();
        for (w_idx, workload) in workloads.iter().enumerate() {
            let mut ranked: Vec<(&String, f64)> = structures
                .iter()
                .map(|s| {
                    let v = metric_value(records, workload, s, MixedMetric::Throughput)
                        .unwrap_or(0.0);
                    (s, v)
                })
                .collect();
            ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
            if let Some(rank) = ranked.iter().position(|(s, _)| s.as_str() == structure.as_str()) {
                let inverted = count as f64 - rank as f64;
                points.push((w_idx as f64, inverted));
            }
        }

        chart
            .draw_series(LineSeries::new(
                points.clone(),
                color.stroke_width(style.line_width),
            ))
            .map_err(draw_err)?
            .label(structure)
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2))
            });

        for &pt in &points {
            chart
                .plotting_area()
                .draw(&marker_element(marker, pt, style.marker_size, color, true, 1))
                .map_err(draw_err)?;
        }
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .border_style(&BLACK)
        .label_font(style.legend_font())
        .draw()
        .map_err(draw_err)?;

    Ok(())
}

/// Render one grouped-bar figure (PNG + SVG). Returns the PNG path.
pub fn render_grouped_bars(
    records: &[MixedRecord],
    metric: MixedMetric,
    colors: &BTreeMap<String, RGBColor>,
    style: &ChartStyle,
    out_dir: &Path,
) -> Result<PathBuf> {
    let base = out_dir.join(metric.bar_file_stem());
    let png = base.with_extension("png");
    let svg = base.with_extension("svg");

    {
        let root = BitMapBackend::new(&png, style.figure_size).into_drawing_area();
        draw_grouped_bars(&root, records, metric, colors, style)?;
        root.present().map_err(draw_err)?;
    }
    {
        let root = SVGBackend::new(&svg, style.figure_size).into_drawing_area();
        draw_grouped_bars(&root, records, metric, colors, style)?;
        root.present().map_err(draw_err)?;
    }

    info!("saved {}", png.display());
    info!("saved {}", svg.display());
    Ok(png)
}
