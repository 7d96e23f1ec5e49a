//! Composite multi-panel overview figures.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::Result;
use log::info;
use plotters::prelude::*;

use crate::chart::bars::{draw_grouped_bars, draw_ranking};
use crate::chart::draw_err;
use crate::chart::line::draw_metric;
use crate::chart::palette::Marker;
use crate::chart::series::StructureSeries;
use crate::chart::style::ChartStyle;
use crate::ingest::mixed::{MixedMetric, MixedRecord};
use crate::ingest::record::Metric;

/// Render the 1x3 overview of the rich pipeline: one panel per metric,
/// legend on the first panel only. Writes PNG + SVG, returns the PNG path.
pub fn render_overview(
    series: &[StructureSeries],
    colors: &BTreeMap<String, RGBColor>,
    markers: &BTreeMap<String, Marker>,
    style: &ChartStyle,
    overlay: bool,
    out_dir: &Path,
    prefix: &str,
) -> Result<PathBuf> {
    let base = out_dir.join(format!("{prefix}_overview"));
    let png = base.with_extension("png");
    let svg = base.with_extension("svg");

    {
        let root = BitMapBackend::new(&png, style.overview_size).into_drawing_area();
        root.fill(&WHITE).map_err(draw_err)?;
        for (idx, panel) in root.split_evenly((1, 3)).into_iter().enumerate() {
            draw_metric(
                &panel,
                series,
                Metric::ALL[idx],
                colors,
                markers,
                style,
                overlay,
                idx == 0,
            )?;
        }
        root.present().map_err(draw_err)?;
    }
    {
        let root = SVGBackend::new(&svg, style.overview_size).into_drawing_area();
        root.fill(&WHITE).map_err(draw_err)?;
        for (idx, panel) in root.split_evenly((1, 3)).into_iter().enumerate() {
            draw_metric(
                &panel,
                series,
                Metric::ALL[idx],
                colors,
                markers,
                style,
                overlay,
                idx == 0,
            )?;
        }
        root.present().map_err(draw_err)?;
    }

    info!("saved {}", png.display());
    info!("saved {}", svg.display());
    Ok(png)
}

/// Render the 2x2 mixed-operations overview: three grouped-bar panels plus
/// the throughput ranking panel. Writes PNG + SVG, returns the PNG path.
pub fn render_mixed_overview(
    records: &[MixedRecord],
    colors: &BTreeMap<String, RGBColor>,
    markers: &BTreeMap<String, Marker>,
    style: &ChartStyle,
    out_dir: &Path,
) -> Result<PathBuf> {
    let png = out_dir.join("overview.png");
    let svg = out_dir.join("overview.svg");
    let size = (style.overview_size.0, style.overview_size.0 * 3 / 4);

    {
        let root = BitMapBackend::new(&png, size).into_drawing_area();
        root.fill(&WHITE).map_err(draw_err)?;
        let panels = root.split_evenly((2, 2));
        for (panel, metric) in panels.iter().zip(MixedMetric::ALL) {
            draw_grouped_bars(panel, records, metric, colors, style)?;
        }
        draw_ranking(&panels[3], records, colors, markers, style)?;
        root.present().map_err(draw_err)?;
    }
    {
        let root = SVGBackend::new(&svg, size).into_drawing_area();
        root.fill(&WHITE).map_err(draw_err)?;
        let panels = root.split_evenly((2, 2));
        for (panel, metric) in panels.iter().zip(MixedMetric::ALL) {
            draw_grouped_bars(panel, records, metric, colors, style)?;
        }
        draw_ranking(&panels[3], records, colors, markers, style)?;
        root.present().map_err(draw_err)?;
    }

    info!("saved {}", png.display());
    info!("saved {}", svg.display());
    Ok(png)
}
