//! Dashboard chart palette and per-chart style defaults.

use crate::charts::config::Rgba;

/// Fill colors for the protein, carbs and fats segments, in that order.
pub const MACRO_SEGMENT_COLORS: [Rgba; 3] = [
    Rgba::rgb(0xFF, 0x63, 0x84),
    Rgba::rgb(0x36, 0xA2, 0xEB),
    Rgba::rgb(0xFF, 0xCE, 0x56),
];

/// Stroke color of the weekly calorie line.
pub const TREND_LINE_COLOR: Rgba = Rgba::rgb(0x10, 0xB9, 0x81);

/// Translucent fill under the weekly calorie line.
pub const TREND_FILL_COLOR: Rgba = Rgba::rgba(0x10, 0xB9, 0x81, 0.1);

/// Near-invisible horizontal grid lines.
pub const FAINT_GRID_COLOR: Rgba = Rgba::rgba(0, 0, 0, 0.05);

/// Doughnut chart style configuration
pub struct DoughnutStyle {
    pub segment_colors: [Rgba; 3],
    pub border_width: u32,
    /// Inner radius as a fraction of the outer radius
    pub cutout: f64,
}

impl Default for DoughnutStyle {
    fn default() -> Self {
        Self {
            segment_colors: MACRO_SEGMENT_COLORS,
            border_width: 0,
            cutout: 0.5,
        }
    }
}

/// Trend line style configuration
pub struct TrendStyle {
    pub line_color: Rgba,
    pub fill_color: Rgba,
    pub point_color: Rgba,
    pub line_width: u32,
    pub tension: f64,
    pub point_radius: u32,
}

impl Default for TrendStyle {
    fn default() -> Self {
        Self {
            line_color: TREND_LINE_COLOR,
            fill_color: TREND_FILL_COLOR,
            point_color: TREND_LINE_COLOR,
            line_width: 2,
            tension: 0.4,
            point_radius: 4,
        }
    }
}
