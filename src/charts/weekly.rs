//! Line chart config for the weekly calorie trend.

use chrono::NaiveDate;

use crate::charts::config::{
    ChartConfig, ChartData, ChartKind, ChartOptions, Dataset, ScaleOptions, ValueFormat,
};
use crate::charts::styles::{TrendStyle, FAINT_GRID_COLOR};
use crate::types::DayCalories;

/// Short English weekday name for the x axis ("Mon", "Tue", ...).
pub fn weekday_label(date: NaiveDate) -> String {
    date.format("%a").to_string()
}

/// Build the line config for a week of calorie totals.
///
/// Days are charted in the order given, one label and one point per record.
/// An empty slice yields a config with no labels and no values, which renders
/// as an empty plot area rather than an error.
pub fn weekly_chart_config(days: &[DayCalories]) -> ChartConfig {
    let style = TrendStyle::default();

    ChartConfig {
        kind: ChartKind::Line,
        data: ChartData {
            labels: days.iter().map(|day| weekday_label(day.date)).collect(),
            datasets: vec![Dataset {
                label: Some("Daily Calories".to_string()),
                values: days.iter().map(|day| day.calories).collect(),
                line_color: Some(style.line_color),
                fill: Some(style.fill_color),
                point_color: Some(style.point_color),
                border_width: style.line_width,
                tension: style.tension,
                point_radius: style.point_radius,
                ..Dataset::default()
            }],
        },
        options: ChartOptions {
            legend_visible: false,
            tooltip_format: ValueFormat::Calories,
            scales: Some(ScaleOptions {
                y_begin_at_zero: true,
                x_grid_visible: false,
                y_grid_color: FAINT_GRID_COLOR,
            }),
        },
    }
}
