//! Heatmaps of a mixed-operations metric across structures and workloads.
//!
//! Cell color follows log10 of the value on a yellow-orange-red ramp; each
//! cell carries a numeric annotation. Axes are sorted lexicographically so
//! the grid is stable across runs.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use anyhow::Result;
use log::info;
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use crate::chart::style::ChartStyle;
use crate::chart::draw_err;
use crate::ingest::mixed::{MixedMetric, MixedRecord};

/// Three-stop ramp approximating a yellow-orange-red colormap.
const RAMP: [(f64, f64, f64); 3] = [
    (255.0, 255.0, 204.0),
    (253.0, 141.0, 60.0),
    (189.0, 0.0, 38.0),
];

fn ramp_color(t: f64) -> RGBColor {
    let t = t.clamp(0.0, 1.0);
    let (from, to, local) = if t < 0.5 {
        (RAMP[0], RAMP[1], t * 2.0)
    } else {
        (RAMP[1], RAMP[2], (t - 0.5) * 2.0)
    };
    RGBColor(
        (from.0 + (to.0 - from.0) * local).round() as u8,
        (from.1 + (to.1 - from.1) * local).round() as u8,
        (from.2 + (to.2 - from.2) * local).round() as u8,
    )
}

fn annotation(value: f64) -> String {
    if value > 1000.0 {
        format!("{value:.2e}")
    } else {
        format!("{value:.2}")
    }
}

/// Normalized position of a value between the grid's log10 extremes.
fn normalize(value: f64, log_min: f64, log_max: f64) -> f64 {
    if value <= 0.0 {
        return 0.0;
    }
    if log_max - log_min < f64::EPSILON {
        return 0.5;
    }
    (value.log10() - log_min) / (log_max - log_min)
}

/// Draw one heatmap panel onto an existing drawing area.
pub fn draw_heatmap<DB>(
    root: &DrawingArea<DB, Shift>,
    records: &[MixedRecord],
    metric: MixedMetric,
    style: &ChartStyle,
) -> Result<()>
where
    DB: DrawingBackend,
{
    root.fill(&WHITE).map_err(draw_err)?;

    let workloads: Vec<String> = records
        .iter()
        .map(|r| r.workload.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();
    let structures: Vec<String> = records
        .iter()
        .map(|r| r.structure.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();

    let positives: Vec<f64> = records
        .iter()
        .map(|r| metric.value(r))
        .filter(|v| *v > 0.0)
        .collect();
    let log_min = positives.iter().map(|v| v.log10()).fold(f64::INFINITY, f64::min);
    let log_max = positives
        .iter()
        .map(|v| v.log10())
        .fold(f64::NEG_INFINITY, f64::max);
    let (log_min, log_max) = if log_min.is_finite() && log_max.is_finite() {
        (log_min, log_max)
    } else {
        (0.0, 1.0)
    };

    // Reserve a strip on the right for the color legend.
    let (w, _) = root.dim_in_pixel();
    let (main, legend) = root.split_horizontally(w.saturating_sub(110));

    let mut chart = ChartBuilder::on(&main)
        .caption(format!("{} Heatmap (log10 scale)", metric.y_label()), style.title_font())
        .margin(20)
        .x_label_area_size(55)
        .y_label_area_size(170)
        .build_cartesian_2d(0f64..workloads.len() as f64, 0f64..structures.len() as f64)
        .map_err(draw_err)?;

    let x_labels = workloads.clone();
    let y_labels = structures.clone();
    chart
        .configure_mesh()
        .disable_mesh()
        .axis_desc_style(style.label_font())
        .label_style(style.label_font())
        .x_labels(workloads.len() + 1)
        .x_label_formatter(&move |x| {
            let idx = x.floor() as usize;
            x_labels.get(idx).cloned().unwrap_or_default()
        })
        .y_labels(structures.len() + 1)
        .y_label_formatter(&move |y| {
            let idx = y.floor() as usize;
            y_labels.get(idx).cloned().unwrap_or_default()
        })
        .draw()
        .map_err(draw_err)?;

    let annotation_font = (style.font_family.as_str(), style.label_size.saturating_sub(2).max(8))
        .into_font()
        .color(&BLACK)
        .pos(Pos::new(HPos::Center, VPos::Center));

    for (row, structure) in structures.iter().enumerate() {
        for (col, workload) in workloads.iter().enumerate() {
            let Some(record) = records
                .iter()
                .find(|r| &r.workload == workload && &r.structure == structure)
            else {
                continue;
            };
            let value = metric.value(record);
            let color = ramp_color(normalize(value, log_min, log_max));
            let (x, y) = (col as f64, row as f64);

            chart
                .draw_series([Rectangle::new([(x, y), (x + 1.0, y + 1.0)], color.filled())])
                .map_err(draw_err)?;
            chart
                .draw_series([Text::new(
                    annotation(value),
                    (x + 0.5, y + 0.5),
                    annotation_font.clone(),
                )])
                .map_err(draw_err)?;
        }
    }

    draw_color_legend(&legend, log_min, log_max, style)?;
    Ok(())
}

/// Vertical ramp strip with the log10 extremes labelled.
fn draw_color_legend<DB>(
    area: &DrawingArea<DB, Shift>,
    log_min: f64,
    log_max: f64,
    style: &ChartStyle,
) -> Result<()>
where
    DB: DrawingBackend,
{
    let (w, h) = area.dim_in_pixel();
    let strip_x0 = 10i32;
    let strip_x1 = (w as i32 / 3).max(strip_x0 + 15);
    let top = 60i32;
    let bottom = h as i32 - 60;
    if bottom <= top {
        return Ok(());
    }

    let steps = 64;
    for step in 0..steps {
        let t0 = step as f64 / steps as f64;
        let t1 = (step + 1) as f64 / steps as f64;
        let y0 = bottom - ((bottom - top) as f64 * t0) as i32;
        let y1 = bottom - ((bottom - top) as f64 * t1) as i32;
        area.draw(&Rectangle::new(
            [(strip_x0, y1), (strip_x1, y0)],
            ramp_color(t0).filled(),
        ))
        .map_err(draw_err)?;
    }

    let font = (style.font_family.as_str(), style.label_size.saturating_sub(4).max(8)).into_font();
    area.draw(&Text::new(
        format!("{log_max:.1}"),
        (strip_x1 + 5, top),
        font.clone(),
    ))
    .map_err(draw_err)?;
    area.draw(&Text::new(
        format!("{log_min:.1}"),
        (strip_x1 + 5, bottom - 10),
        font,
    ))
    .map_err(draw_err)?;
    Ok(())
}

/// Render one heatmap figure (PNG + SVG). Returns the PNG path.
pub fn render_heatmap(
    records: &[MixedRecord],
    metric: MixedMetric,
    style: &ChartStyle,
    out_dir: &Path,
) -> Result<PathBuf> {
    let base = out_dir.join(metric.heatmap_file_stem());
    let png = base.with_extension("png");
    let svg = base.with_extension("svg");

    {
        let root = BitMapBackend::new(&png, style.figure_size).into_drawing_area();
        draw_heatmap(&root, records, metric, style)?;
        root.present().map_err(draw_err)?;
    }
    {
        let root = SVGBackend::new(&svg, style.figure_size).into_drawing_area();
        draw_heatmap(&root, records, metric, style)?;
        root.present().map_err(draw_err)?;
    }

    info!("saved {}", png.display());
    info!("saved {}", svg.display());
    Ok(png)
}
