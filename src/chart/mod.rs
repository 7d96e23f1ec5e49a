//! Chart rendering: thin glue over plotters.
//!
//! Every renderer writes one raster (PNG) and one vector (SVG) file per
//! chart and logs each path written. Appearance comes from an explicit
//! [`style::ChartStyle`] value passed in by the caller.

pub mod bars;
pub mod heatmap;
pub mod line;
pub mod overview;
pub mod palette;
pub mod series;
pub mod style;

use anyhow::anyhow;
use plotters::drawing::DrawingAreaErrorKind;
use plotters::element::{DynElement, IntoDynElement};
use plotters::prelude::*;

use palette::Marker;

pub use bars::render_grouped_bars;
pub use heatmap::render_heatmap;
pub use line::render_metric_chart;
pub use overview::{render_mixed_overview, render_overview};
pub use palette::{build_color_map, build_marker_map};
pub use series::{group_by_structure, structure_names, StructureSeries};
pub use style::ChartStyle;

/// Flatten plotters' backend-generic error into anyhow.
pub(crate) fn draw_err<E>(err: DrawingAreaErrorKind<E>) -> anyhow::Error
where
    E: std::error::Error + Send + Sync,
{
    anyhow!("chart rendering failed: {err}")
}

/// Ten-vertex outline of a five-point star with outer radius `size`.
fn star_points(size: i32) -> Vec<(i32, i32)> {
    let outer = size as f64;
    let inner = outer * 0.45;
    (0..10)
        .map(|i| {
            let radius = if i % 2 == 0 { outer } else { inner };
            let angle = std::f64::consts::PI * (i as f64 * 36.0 - 90.0) / 180.0;
            (
                (radius * angle.cos()).round() as i32,
                (radius * angle.sin()).round() as i32,
            )
        })
        .collect()
}

/// Build a marker glyph at a data point. `filled` selects solid glyphs for
/// regular data points; hollow outlines are used for the estimated-value
/// overlay.
pub(crate) fn marker_element<'a, DB: DrawingBackend + 'a>(
    marker: Marker,
    pos: (f64, f64),
    size: i32,
    color: RGBColor,
    filled: bool,
    stroke_width: u32,
) -> DynElement<'a, DB, (f64, f64)> {
    let style = ShapeStyle {
        color: color.to_rgba(),
        filled,
        stroke_width,
    };
    let s = size;

    let polygon = |points: Vec<(i32, i32)>| -> DynElement<'a, DB, (f64, f64)> {
        if filled {
            (EmptyElement::at(pos) + Polygon::new(points, style)).into_dyn()
        } else {
            let mut closed = points;
            closed.push(closed[0]);
            (EmptyElement::at(pos) + PathElement::new(closed, style)).into_dyn()
        }
    };

    match marker {
        Marker::Circle => (EmptyElement::at(pos) + Circle::new((0, 0), s, style)).into_dyn(),
        Marker::Square => {
            (EmptyElement::at(pos) + Rectangle::new([(-s, -s), (s, s)], style)).into_dyn()
        }
        // Pixel y grows downward, so "down" means apex at +y.
        Marker::TriangleDown => polygon(vec![(-s, -s), (s, -s), (0, s)]),
        Marker::TriangleUp => polygon(vec![(-s, s), (s, s), (0, -s)]),
        Marker::Diamond => polygon(vec![(0, -s), (s, 0), (0, s), (-s, 0)]),
        Marker::Plus => (EmptyElement::at(pos)
            + PathElement::new(vec![(-s, 0), (s, 0)], style)
            + PathElement::new(vec![(0, -s), (0, s)], style))
        .into_dyn(),
        Marker::Cross => (EmptyElement::at(pos) + Cross::new((0, 0), s, style)).into_dyn(),
        Marker::Star => polygon(star_points(s)),
    }
}
