//! Doughnut chart config for the daily macronutrient breakdown.

use crate::charts::config::{
    ChartConfig, ChartData, ChartKind, ChartOptions, Dataset, ValueFormat,
};
use crate::charts::styles::DoughnutStyle;
use crate::types::MacroBreakdown;

/// Segment labels, in dataset order.
pub const MACRO_LABELS: [&str; 3] = ["Protein", "Carbs", "Fats"];

/// Build the doughnut config for a day's macro breakdown.
///
/// Gram values are taken verbatim in protein/carbs/fats order. The legend is
/// suppressed (the dashboard shows its own legend next to the chart) and
/// tooltips show rounded grams.
pub fn macros_chart_config(macros: &MacroBreakdown) -> ChartConfig {
    let style = DoughnutStyle::default();

    ChartConfig {
        kind: ChartKind::Doughnut,
        data: ChartData {
            labels: MACRO_LABELS.iter().map(|label| label.to_string()).collect(),
            datasets: vec![Dataset {
                values: vec![macros.protein_g, macros.carbs_g, macros.fats_g],
                segment_colors: style.segment_colors.to_vec(),
                border_width: style.border_width,
                ..Dataset::default()
            }],
        },
        options: ChartOptions {
            legend_visible: false,
            tooltip_format: ValueFormat::Grams,
            scales: None,
        },
    }
}
