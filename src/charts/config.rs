//! Serializable chart configuration.
//!
//! A [`ChartConfig`] is the full description of one chart: what kind it is,
//! the labelled values it shows and the presentation options. Backends
//! consume configs without knowing which dashboard slot they belong to, and
//! configs round-trip through JSON so a host can snapshot exactly what was
//! rendered.

use serde::{Deserialize, Serialize};

use crate::error::DashboardResult;

/// Which chart shape a config describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    Doughnut,
    Line,
}

/// An RGBA color with 8-bit channels and a fractional alpha.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    /// Opacity in the `0.0..=1.0` range
    pub a: f64,
}

impl Rgba {
    /// Fully opaque color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self { r, g, b, a }
    }
}

/// How tooltip labels are written for hovered values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueFormat {
    /// `"Protein: 34g"` style, gram quantities keyed by segment label.
    Grams,
    /// `"1999 calories"` style, label ignored.
    Calories,
}

impl ValueFormat {
    /// Format one hovered value the way the dashboard tooltips show it.
    ///
    /// Values are rounded to the nearest whole number first, so `33.6`
    /// becomes `"Protein: 34g"` and `1999.4` becomes `"1999 calories"`.
    pub fn tooltip_label(&self, label: &str, value: f64) -> String {
        let rounded = value.round();
        match self {
            ValueFormat::Grams => format!("{}: {}g", label, rounded),
            ValueFormat::Calories => format!("{} calories", rounded),
        }
    }
}

/// One series of values plus its presentation.
///
/// Doughnut charts read `segment_colors`; line charts read the line, fill
/// and point settings. Unused fields stay at their defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub label: Option<String>,
    pub values: Vec<f64>,
    /// Per-segment fill colors, cycled when shorter than `values`
    pub segment_colors: Vec<Rgba>,
    pub line_color: Option<Rgba>,
    /// Fill under the line; `None` leaves the area transparent
    pub fill: Option<Rgba>,
    pub point_color: Option<Rgba>,
    /// Segment border width for doughnuts, stroke width for lines
    pub border_width: u32,
    /// Curve tension; `0.0` draws straight segments
    pub tension: f64,
    pub point_radius: u32,
}

/// Labels plus the datasets drawn against them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

/// Axis and grid settings for cartesian charts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScaleOptions {
    pub y_begin_at_zero: bool,
    pub x_grid_visible: bool,
    pub y_grid_color: Rgba,
}

/// Chart-wide presentation options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartOptions {
    pub legend_visible: bool,
    pub tooltip_format: ValueFormat,
    /// `None` for charts without axes (doughnuts)
    pub scales: Option<ScaleOptions>,
}

/// A complete, backend-agnostic chart description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartConfig {
    pub kind: ChartKind,
    pub data: ChartData,
    pub options: ChartOptions,
}

impl ChartConfig {
    /// Serialize the config as pretty-printed JSON.
    pub fn to_json_pretty(&self) -> DashboardResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse a config back from its JSON form.
    pub fn from_json_str(json: &str) -> DashboardResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
