//! Nutrition Dashboard Renderer
//!
//! Demo binary: renders a sample day and week against the default dashboard
//! page, writing `macros.png`, `weekly.png` and `dashboard.css` into the
//! output directory (first argument, defaults to the current directory).

use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use chrono::{Days, Local};

use nutridash::charts::RasterBackend;
use nutridash::{
    inject_dashboard_styles, DashboardCharts, DashboardPage, DayCalories, MacroBreakdown,
};

fn main() -> anyhow::Result<()> {
    let _ = nutridash::telemetry::init_default_tracing();

    let out_dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));
    fs::create_dir_all(&out_dir)
        .with_context(|| format!("creating output directory {}", out_dir.display()))?;

    let mut page = DashboardPage::with_default_targets();
    inject_dashboard_styles(&mut page);

    let css: String = page
        .head_styles()
        .iter()
        .map(|style| style.content.as_str())
        .collect();
    fs::write(out_dir.join("dashboard.css"), css).context("writing dashboard.css")?;

    let mut charts = DashboardCharts::new(RasterBackend::new());

    let macros = MacroBreakdown::new(96.0, 210.0, 58.0);
    let calories = [1800.0, 2100.0, 1950.0, 2200.0, 1700.0, 2400.0, 2000.0];
    let today = Local::now().date_naive();
    let week: Vec<DayCalories> = calories
        .iter()
        .enumerate()
        .map(|(i, &kcal)| DayCalories::new(today - Days::new(6 - i as u64), kcal))
        .collect();

    charts.render_macros(&page, &macros)?;
    charts.render_weekly(&page, &week)?;

    if let Some(chart) = charts.macros_chart() {
        fs::write(out_dir.join("macros.png"), chart.png_bytes()?).context("writing macros.png")?;
    }
    if let Some(chart) = charts.weekly_chart() {
        fs::write(out_dir.join("weekly.png"), chart.png_bytes()?).context("writing weekly.png")?;
    }

    println!("dashboard assets written to {}", out_dir.display());
    Ok(())
}
