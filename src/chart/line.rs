//! Per-metric line charts: one metric vs `n`, one series per structure.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::Result;
use log::info;
use plotters::coord::Shift;
use plotters::prelude::*;

use crate::chart::palette::Marker;
use crate::chart::series::StructureSeries;
use crate::chart::style::ChartStyle;
use crate::chart::{draw_err, marker_element};
use crate::ingest::record::Metric;

const FALLBACK_GREY: RGBColor = RGBColor(128, 128, 128);

/// Draw one metric for all series onto an existing drawing area.
/// Returns whether any hollow estimated marker was drawn, so the caller can
/// decide on the "Estimated" legend entry.
pub fn draw_metric<DB>(
    root: &DrawingArea<DB, Shift>,
    series: &[StructureSeries],
    metric: Metric,
    colors: &BTreeMap<String, RGBColor>,
    markers: &BTreeMap<String, Marker>,
    style: &ChartStyle,
    overlay: bool,
    with_legend: bool,
) -> Result<bool>
where
    DB: DrawingBackend,
{
    root.fill(&WHITE).map_err(draw_err)?;

    let all_points: Vec<(f64, f64)> = series
        .iter()
        .flat_map(|s| s.records.iter())
        .map(|r| (r.n as f64, metric.value(r)))
        .collect();
    let x_min = all_points.iter().map(|p| p.0).fold(f64::INFINITY, f64::min);
    let x_max = all_points.iter().map(|p| p.0).fold(0.0, f64::max);
    let y_max = all_points.iter().map(|p| p.1).fold(0.0, f64::max);

    // n > 0 is guaranteed by ingestion, so the log x axis is total. Pad a
    // degenerate domain (no points, or a single n) so the range stays valid.
    let (x_min, x_max) = if x_min.is_finite() && x_min < x_max {
        (x_min, x_max)
    } else if x_min.is_finite() {
        (x_min * 0.5, x_max * 2.0)
    } else {
        (1.0, 10.0)
    };
    let y_max = if y_max > 0.0 { y_max * 1.1 } else { 1.0 };

    let mut chart = ChartBuilder::on(root)
        .caption(metric.title(), style.title_font())
        .margin(20)
        .x_label_area_size(55)
        .y_label_area_size(70)
        .build_cartesian_2d((x_min..x_max).log_scale(), 0f64..y_max)
        .map_err(draw_err)?;

    chart
        .configure_mesh()
        .x_desc("N (number of inserted records)")
        .y_desc(metric.y_label())
        .axis_desc_style(style.label_font())
        .label_style(style.label_font())
        .draw()
        .map_err(draw_err)?;

    let mut overlay_used = false;
    for s in series {
        let color = colors.get(&s.name).copied().unwrap_or(FALLBACK_GREY);
        let marker = markers.get(&s.name).copied().unwrap_or(Marker::Circle);
        let points: Vec<(f64, f64)> = s
            .records
            .iter()
            .map(|r| (r.n as f64, metric.value(r)))
            .collect();

        chart
            .draw_series(LineSeries::new(
                points.clone(),
                color.stroke_width(style.line_width),
            ))
            .map_err(draw_err)?
            .label(&s.name)
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2))
            });

        for &pt in &points {
            chart
                .plotting_area()
                .draw(&marker_element(marker, pt, style.marker_size, color, true, 1))
                .map_err(draw_err)?;
        }

        if overlay {
            let estimated: Vec<(f64, f64)> = s
                .records
                .iter()
                .filter(|r| metric.estimated(r))
                .map(|r| (r.n as f64, metric.value(r)))
                .collect();
            if !estimated.is_empty() {
                overlay_used = true;
                for &pt in &estimated {
                    chart
                        .plotting_area()
                        .draw(&marker_element(
                            marker,
                            pt,
                            style.marker_size + 4,
                            color,
                            false,
                            2,
                        ))
                        .map_err(draw_err)?;
                }
            }
        }
    }

    if with_legend {
        if overlay && overlay_used {
            chart
                .draw_series(std::iter::empty::<Circle<(f64, f64), i32>>())
                .map_err(draw_err)?
                .label("Estimated")
                .legend(|(x, y)| Circle::new((x + 10, y), 5, BLACK.stroke_width(2)));
        }
        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperLeft)
            .border_style(&BLACK)
            .label_font(style.legend_font())
            .draw()
            .map_err(draw_err)?;
    }

    Ok(overlay_used)
}

/// Render one metric figure as `{prefix}_{suffix}.png` and `.svg` in
/// `out_dir`. Returns the PNG path.
pub fn render_metric_chart(
    series: &[StructureSeries],
    metric: Metric,
    colors: &BTreeMap<String, RGBColor>,
    markers: &BTreeMap<String, Marker>,
    style: &ChartStyle,
    overlay: bool,
    out_dir: &Path,
    prefix: &str,
) -> Result<PathBuf> {
    let base = out_dir.join(format!("{prefix}_{}", metric.file_suffix()));
    let png = base.with_extension("png");
    let svg = base.with_extension("svg");

    {
        let root = BitMapBackend::new(&png, style.figure_size).into_drawing_area();
        draw_metric(&root, series, metric, colors, markers, style, overlay, true)?;
        root.present().map_err(draw_err)?;
    }
    {
        let root = SVGBackend::new(&svg, style.figure_size).into_drawing_area();
        draw_metric(&root, series, metric, colors, markers, style, overlay, true)?;
        root.present().map_err(draw_err)?;
    }

    info!("saved {}", png.display());
    info!("saved {}", svg.display());
    Ok(png)
}
