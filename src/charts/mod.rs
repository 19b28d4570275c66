//! Chart configuration building and rendering.

pub mod backend;
pub mod config;
pub mod curve;
pub mod macros;
pub mod raster;
pub mod styles;
pub mod weekly;


pub use backend::{ChartBackend, ChartHandle};
pub use config::{
    ChartConfig, ChartData, ChartKind, ChartOptions, Dataset, Rgba, ScaleOptions, ValueFormat,
};
pub use macros::{macros_chart_config, MACRO_LABELS};
pub use raster::{RasterBackend, RasterChart};
pub use weekly::{weekday_label, weekly_chart_config};
