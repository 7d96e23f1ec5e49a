//! Chart appearance configuration.
//!
//! An explicit value threaded into every renderer rather than a process-wide
//! theme, so renders with different styles can coexist in one process and be
//! tested independently.

/// Fonts, stroke widths, and figure dimensions shared by all renderers.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartStyle {
    pub font_family: String,
    pub title_size: u32,
    pub label_size: u32,
    pub legend_size: u32,
    /// Line width of series strokes, in pixels.
    pub line_width: u32,
    /// Marker radius, in pixels.
    pub marker_size: i32,
    /// Dimensions of a single-panel figure.
    pub figure_size: (u32, u32),
    /// Dimensions of the multi-panel overview figures.
    pub overview_size: (u32, u32),
}

impl Default for ChartStyle {
    fn default() -> Self {
        ChartStyle {
            font_family: "sans-serif".to_string(),
            title_size: 28,
            label_size: 20,
            legend_size: 18,
            line_width: 2,
            marker_size: 5,
            figure_size: (1000, 700),
            overview_size: (1800, 600),
        }
    }
}

impl ChartStyle {
    pub fn title_font(&self) -> (&str, u32) {
        (self.font_family.as_str(), self.title_size)
    }

    pub fn label_font(&self) -> (&str, u32) {
        (self.font_family.as_str(), self.label_size)
    }

    pub fn legend_font(&self) -> (&str, u32) {
        (self.font_family.as_str(), self.legend_size)
    }
}
