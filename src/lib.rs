//! # Nutrition Dashboard Charts
//!
//! `nutridash` is the chart rendering and stylesheet layer of a nutrition
//! tracking dashboard. It turns daily macro breakdowns and weekly calorie
//! records into chart configs, renders them against the dashboard page's
//! chart targets, and injects the dashboard's presentational style rules.
//!
//! ## Features
//!
//! - Doughnut chart for the daily protein/carbs/fats breakdown
//! - Smoothed, filled line chart for the weekly calorie trend
//! - One live chart per page slot, destroyed before every re-render
//! - Offscreen raster backend producing PNG-encodable pixel buffers
//! - Token-parameterized dashboard stylesheet injection
//!
//! ## Example
//!
//! ```no_run
//! use chrono::NaiveDate;
//! use nutridash::charts::RasterBackend;
//! use nutridash::{
//!     inject_dashboard_styles, DashboardCharts, DashboardPage, DayCalories, MacroBreakdown,
//! };
//!
//! # fn main() -> Result<(), nutridash::DashboardError> {
//! let mut page = DashboardPage::with_default_targets();
//! inject_dashboard_styles(&mut page);
//!
//! let mut charts = DashboardCharts::new(RasterBackend::new());
//! charts.render_macros(&page, &MacroBreakdown::new(96.0, 210.0, 58.0))?;
//!
//! let monday = NaiveDate::from_ymd_opt(2024, 3, 4).unwrap();
//! let week: Vec<DayCalories> = (0..7)
//!     .map(|i| DayCalories::new(monday + chrono::Days::new(i), 2000.0 + 50.0 * i as f64))
//!     .collect();
//! charts.render_weekly(&page, &week)?;
//! # Ok(())
//! # }
//! ```

pub mod charts;
pub mod dashboard;
pub mod error;
pub mod page;
pub mod stylesheet;
pub mod telemetry;
pub mod types;

// Re-export main types for convenience
pub use dashboard::{DashboardCharts, RenderOutcome};
pub use error::{DashboardError, DashboardResult};
pub use page::{DashboardPage, RenderTarget, MACROS_CHART_ID, WEEKLY_CHART_ID};
pub use stylesheet::inject_dashboard_styles;
pub use types::{DayCalories, MacroBreakdown};
