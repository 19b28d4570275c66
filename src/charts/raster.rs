//! Offscreen raster rendering of chart configs.
//!
//! [`RasterBackend`] interprets a [`ChartConfig`] with plotters, drawing into
//! an in-memory RGB buffer sized by the render target. Doughnut segments are
//! built as annular-sector polygons in pixel space; line charts go through a
//! cartesian chart context with a manually drawn grid. Legend and tooltip
//! settings are left to the embedding page, only the data marks are drawn.
//! Handles keep the pixel buffer alive and can encode it as PNG.

use std::fmt;

use plotters::coord::Shift;
use plotters::prelude::*;
use plotters_backend::DrawingBackend;
use tracing::debug;

use crate::charts::backend::{ChartBackend, ChartHandle};
use crate::charts::config::{ChartConfig, ChartKind, Rgba};
use crate::charts::curve::sample_curve;
use crate::charts::styles::{DoughnutStyle, TrendStyle};
use crate::error::{DashboardError, DashboardResult};
use crate::page::RenderTarget;

/// Samples per curve span when a dataset has tension.
const CURVE_STEPS: usize = 16;

/// Horizontal grid intervals on the y axis.
const Y_GRID_LINES: u32 = 5;

fn wrap_err<E: fmt::Display>(e: E) -> DashboardError {
    DashboardError::Backend(e.to_string())
}

fn to_rgba(color: Rgba) -> RGBAColor {
    RGBAColor(color.r, color.g, color.b, color.a)
}

/// Renders chart configs offscreen with plotters' bitmap backend.
#[derive(Debug, Default)]
pub struct RasterBackend;

impl RasterBackend {
    pub fn new() -> Self {
        Self
    }
}

impl ChartBackend for RasterBackend {
    type Handle = RasterChart;

    fn create_chart(
        &mut self,
        target: &RenderTarget,
        config: &ChartConfig,
    ) -> DashboardResult<RasterChart> {
        if target.width == 0 || target.height == 0 {
            return Err(DashboardError::InvalidTargetSize {
                width: target.width,
                height: target.height,
            });
        }

        debug!(
            target_id = %target.id,
            width = target.width,
            height = target.height,
            kind = ?config.kind,
            "rendering chart"
        );

        let mut pixels = vec![0u8; target.width as usize * target.height as usize * 3];
        {
            let root = BitMapBackend::with_buffer(&mut pixels, (target.width, target.height))
                .into_drawing_area();
            root.fill(&WHITE).map_err(wrap_err)?;

            match config.kind {
                ChartKind::Doughnut => draw_doughnut(&root, config)?,
                ChartKind::Line => draw_line_chart(&root, config)?,
            }

            root.present().map_err(wrap_err)?;
        }

        Ok(RasterChart {
            width: target.width,
            height: target.height,
            pixels,
        })
    }
}

/// A chart rendered into an owned RGB pixel buffer.
pub struct RasterChart {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl RasterChart {
    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw RGB bytes, three per pixel, row major.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Encode the rendered chart as PNG bytes.
    pub fn png_bytes(&self) -> DashboardResult<Vec<u8>> {
        use image::codecs::png::PngEncoder;
        use image::{ExtendedColorType, ImageEncoder};

        let mut bytes = Vec::new();
        PngEncoder::new(&mut bytes).write_image(
            &self.pixels,
            self.width,
            self.height,
            ExtendedColorType::Rgb8,
        )?;
        Ok(bytes)
    }
}

impl fmt::Debug for RasterChart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RasterChart")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish_non_exhaustive()
    }
}

impl ChartHandle for RasterChart {
    /// Dropping the handle releases the pixel buffer.
    fn destroy(self) {}
}

/// Draw a doughnut chart onto the root area in pixel coordinates.
///
/// Segments start at twelve o'clock and sweep clockwise, sized by each
/// value's share of the positive, finite total. Non-positive and non-finite
/// values take no arc, matching how the dashboard treats "nothing logged".
fn draw_doughnut<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    config: &ChartConfig,
) -> DashboardResult<()> {
    let style = DoughnutStyle::default();
    let dataset = match config.data.datasets.first() {
        Some(dataset) => dataset,
        None => return Ok(()),
    };

    let segments: Vec<(usize, f64)> = dataset
        .values
        .iter()
        .enumerate()
        .filter(|(_, value)| value.is_finite() && **value > 0.0)
        .map(|(index, value)| (index, *value))
        .collect();
    let total: f64 = segments.iter().map(|(_, value)| value).sum();
    if total <= 0.0 {
        return Ok(());
    }

    let (width, height) = root.dim_in_pixel();
    let center = (width as i32 / 2, height as i32 / 2);
    let outer = f64::from(width.min(height)) * 0.45;
    let inner = outer * style.cutout;

    let palette: &[Rgba] = if dataset.segment_colors.is_empty() {
        &style.segment_colors
    } else {
        &dataset.segment_colors
    };

    let mut start = -std::f64::consts::FRAC_PI_2;
    for (index, value) in segments {
        let end = start + std::f64::consts::TAU * value / total;
        let vertices = annular_sector(center, inner, outer, start, end);
        let color = to_rgba(palette[index % palette.len()]);

        root.draw(&Polygon::new(vertices.clone(), color.filled()))
            .map_err(wrap_err)?;
        if dataset.border_width > 0 {
            let mut outline = vertices;
            if let Some(&first) = outline.first() {
                outline.push(first);
            }
            root.draw(&PathElement::new(
                outline,
                WHITE.stroke_width(dataset.border_width),
            ))
            .map_err(wrap_err)?;
        }

        start = end;
    }

    Ok(())
}

/// Vertices of an annular sector between `start` and `end` angles.
///
/// The outer arc runs forward and the inner arc back, closing the ring
/// segment. Arcs are sampled at roughly two-degree steps.
fn annular_sector(
    center: (i32, i32),
    inner: f64,
    outer: f64,
    start: f64,
    end: f64,
) -> Vec<(i32, i32)> {
    let span = end - start;
    let steps = ((span / (std::f64::consts::PI / 90.0)).ceil() as usize).max(2);

    let arc_point = |radius: f64, step: usize| {
        let angle = start + span * step as f64 / steps as f64;
        (
            center.0 + (radius * angle.cos()).round() as i32,
            center.1 + (radius * angle.sin()).round() as i32,
        )
    };

    let mut vertices = Vec::with_capacity((steps + 1) * 2);
    for step in 0..=steps {
        vertices.push(arc_point(outer, step));
    }
    for step in (0..=steps).rev() {
        vertices.push(arc_point(inner, step));
    }
    vertices
}

/// Draw a filled, smoothed line chart through a cartesian context.
fn draw_line_chart<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    config: &ChartConfig,
) -> DashboardResult<()> {
    let style = TrendStyle::default();
    let dataset = match config.data.datasets.first() {
        Some(dataset) => dataset,
        None => return Ok(()),
    };
    if dataset.values.is_empty() {
        return Ok(());
    }

    let points: Vec<(f64, f64)> = dataset
        .values
        .iter()
        .enumerate()
        .map(|(index, value)| (index as f64, *value))
        .collect();

    let x_max = if points.len() > 1 {
        (points.len() - 1) as f64
    } else {
        1.0
    };

    let y_peak = dataset
        .values
        .iter()
        .copied()
        .filter(|value| value.is_finite())
        .fold(f64::MIN, f64::max);
    let y_max = if y_peak > 0.0 { y_peak * 1.1 } else { 1.0 };

    let scales = config.options.scales;
    let begin_at_zero = scales.map_or(true, |s| s.y_begin_at_zero);
    let y_floor = dataset
        .values
        .iter()
        .copied()
        .filter(|value| value.is_finite())
        .fold(f64::INFINITY, f64::min);
    let mut y_min = if begin_at_zero || !y_floor.is_finite() {
        0.0
    } else {
        y_floor
    };
    if y_min >= y_max {
        y_min = y_max - 1.0;
    }

    let mut chart = ChartBuilder::on(root)
        .margin(10)
        .build_cartesian_2d(0f64..x_max, y_min..y_max)
        .map_err(wrap_err)?;

    // Grid first so the data sits on top of it.
    if let Some(scales) = scales {
        let grid_style = ShapeStyle::from(&to_rgba(scales.y_grid_color)).stroke_width(1);
        let step = (y_max - y_min) / f64::from(Y_GRID_LINES);
        for line in 1..=Y_GRID_LINES {
            let y = y_min + step * f64::from(line);
            chart
                .draw_series(std::iter::once(PathElement::new(
                    vec![(0.0, y), (x_max, y)],
                    grid_style,
                )))
                .map_err(wrap_err)?;
        }

        if scales.x_grid_visible {
            for (x, _) in &points {
                chart
                    .draw_series(std::iter::once(PathElement::new(
                        vec![(*x, y_min), (*x, y_max)],
                        grid_style,
                    )))
                    .map_err(wrap_err)?;
            }
        }
    }

    let line_color = to_rgba(dataset.line_color.unwrap_or(style.line_color));
    let point_color = to_rgba(dataset.point_color.unwrap_or(style.point_color));
    let stroke = if dataset.border_width > 0 {
        dataset.border_width
    } else {
        style.line_width
    };

    let curve = sample_curve(&points, dataset.tension, CURVE_STEPS);

    if let Some(fill) = dataset.fill {
        let baseline = 0f64.clamp(y_min, y_max);
        chart
            .draw_series(AreaSeries::new(
                curve.iter().copied(),
                baseline,
                to_rgba(fill).filled(),
            ))
            .map_err(wrap_err)?;
    }

    chart
        .draw_series(LineSeries::new(
            curve.iter().copied(),
            line_color.stroke_width(stroke),
        ))
        .map_err(wrap_err)?;

    if dataset.point_radius > 0 {
        chart
            .draw_series(points.iter().map(|&(x, y)| {
                Circle::new((x, y), dataset.point_radius as i32, point_color.filled())
            }))
            .map_err(wrap_err)?;
    }

    Ok(())
}
