//! Figure rendering.
//!
//! ## Purpose
//!
//! This module draws a fitted [`ViolinResult`] with `plotters`: filled
//! silhouettes, their outlines and whichever overlay the figure was fitted
//! with (box, quartile lines, jitter or swarm points, rug ticks, raincloud
//! rain), plus category tick labels, axis labels, title and a hue legend.
//!
//! ## Design notes
//!
//! * **Backend-generic**: One drawing routine serves the SVG and bitmap
//!   backends; the output format is picked from the file extension.
//! * **Geometry is precomputed**: Every coordinate comes from the result
//!   (silhouette outlines, point offsets, summaries); nothing is re-estimated.
//! * **Text on SVG only**: The bitmap backend is built without a font
//!   rasterizer, so PNG figures carry no caption, tick labels or legend and
//!   get a plain value grid instead of the labelled mesh.
//!
//! ## Invariants
//!
//! * Both orientations share the drawing code; only the axis mapping differs.
//! * Category `i` is centered at lateral position `i`.
//!
//! ## Non-goals
//!
//! * This module does not fit densities or lay out points.
//! * This module does not support interactive or animated output.

// External dependencies
use num_traits::Float;
use plotters::coord::cartesian::Cartesian2d;
use plotters::coord::types::RangedCoordf64;
use plotters::coord::Shift;
use plotters::prelude::*;
use std::fmt::Display;
use std::path::Path;
use tracing::{debug, info};

// Export dependencies from violin crate
use violin::internals::algorithms::silhouette::{Orientation, Side};
use violin::internals::engine::output::{Inner, ViolinResult, ViolinShape};

// Internal dependencies
use crate::errors::{PlotError, PlotResult};
use crate::style::FigureStyle;

/// Half-width of the inner box, as a fraction of the slot width.
const BOX_FRACTION: f64 = 0.04;

/// Half-length of a rug tick, as a fraction of the slot width.
const RUG_FRACTION: f64 = 0.06;

/// Padding added to the value range, as a fraction of it.
const VALUE_PADDING: f64 = 0.05;

/// Value-axis intervals of the grid on text-free figures.
const PLAIN_GRID_LINES: usize = 8;

// ============================================================================
// Public API
// ============================================================================

/// Render a figure to an SVG document.
pub fn render_svg<T: Float>(result: &ViolinResult<T>, style: &FigureStyle) -> PlotResult<String> {
    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, (style.width, style.height)).into_drawing_area();
        draw_figure(&root, result, style, true)?;
        root.present().map_err(drawing)?;
    }
    Ok(svg)
}

/// Render a figure to a file; `.svg` and `.png` are supported.
pub fn render_to_path<T: Float, P: AsRef<Path>>(
    result: &ViolinResult<T>,
    style: &FigureStyle,
    path: P,
) -> PlotResult<()> {
    let path = path.as_ref();
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();
    let size = (style.width, style.height);

    match ext.as_str() {
        "svg" => {
            let root = SVGBackend::new(path, size).into_drawing_area();
            draw_figure(&root, result, style, true)?;
            root.present().map_err(drawing)?;
        }
        "png" => {
            let root = BitMapBackend::new(path, size).into_drawing_area();
            draw_figure(&root, result, style, false)?;
            root.present().map_err(drawing)?;
        }
        _ => return Err(PlotError::UnsupportedFormat(path.display().to_string())),
    }

    info!(path = %path.display(), violins = result.violins.len(), "wrote figure");
    Ok(())
}

// ============================================================================
// Drawing
// ============================================================================

/// Draw the whole figure onto a drawing area.
fn draw_figure<DB, T>(
    root: &DrawingArea<DB, Shift>,
    result: &ViolinResult<T>,
    style: &FigureStyle,
    text: bool,
) -> PlotResult<()>
where
    DB: DrawingBackend,
    T: Float,
{
    root.fill(&style.background.to_rgb()).map_err(drawing)?;

    let extent = FigureExtent::of(result);
    let orientation = result.orientation;
    let (x_range, y_range) = match orientation {
        Orientation::Vertical => (extent.lateral, extent.value),
        Orientation::Horizontal => (extent.value, extent.lateral),
    };
    debug!(?x_range, ?y_range, "figure extent");

    let mut builder = ChartBuilder::on(root);
    builder.margin(15);
    if text {
        builder.x_label_area_size(45).y_label_area_size(70);
        if let Some(title) = &style.title {
            builder.caption(title, ("sans-serif", style.font_size + 6));
        }
    }
    let mut chart = builder
        .build_cartesian_2d(x_range.0..x_range.1, y_range.0..y_range.1)
        .map_err(drawing)?;

    // Category names at integer lateral positions
    let categories = &result.categories;
    let category_label = |v: &f64| {
        let r = v.round();
        if (v - r).abs() < 1e-6 && r >= 0.0 && (r as usize) < categories.len() {
            categories[r as usize].clone()
        } else {
            String::new()
        }
    };

    if text {
        let mut mesh = chart.configure_mesh();
        if !style.grid {
            mesh.disable_mesh();
        }
        mesh.label_style(("sans-serif", style.font_size));
        let n = categories.len().max(1);
        match orientation {
            Orientation::Vertical => {
                mesh.x_labels(n).x_label_formatter(&category_label);
                if let Some(desc) = &style.category_label {
                    mesh.x_desc(desc.as_str());
                }
                if let Some(desc) = &style.value_label {
                    mesh.y_desc(desc.as_str());
                }
            }
            Orientation::Horizontal => {
                mesh.y_labels(n).y_label_formatter(&category_label);
                if let Some(desc) = &style.category_label {
                    mesh.y_desc(desc.as_str());
                }
                if let Some(desc) = &style.value_label {
                    mesh.x_desc(desc.as_str());
                }
            }
        }
        mesh.draw().map_err(drawing)?;
    } else if style.grid {
        draw_plain_grid(&mut chart, extent, orientation)?;
    }

    let legend = text && style.legend && !result.hues.is_empty();
    let mut labelled = vec![false; result.hues.len()];
    let slot_width = f(result.width);

    for shape in &result.violins {
        let slot = shape.hue_index.unwrap_or(shape.category_index);
        let fill = style.fill(slot).to_rgb();

        // Silhouette
        let outline: Vec<(f64, f64)> = shape
            .silhouette
            .outline(orientation)
            .into_iter()
            .map(|(x, y)| (f(x), f(y)))
            .collect();
        let anno = chart
            .draw_series(std::iter::once(Polygon::new(
                outline.clone(),
                fill.mix(style.alpha()).filled(),
            )))
            .map_err(drawing)?;
        if let (true, Some(h)) = (legend, shape.hue_index) {
            if !labelled[h] {
                labelled[h] = true;
                anno.label(result.hues[h].as_str()).legend(move |(x, y)| {
                    Rectangle::new([(x, y - 5), (x + 12, y + 5)], fill.filled())
                });
            }
        }
        chart
            .draw_series(std::iter::once(PathElement::new(
                outline,
                style.outline.to_rgb().stroke_width(style.outline_width),
            )))
            .map_err(drawing)?;

        // Overlay
        draw_inner(&mut chart, shape, result.inner, orientation, slot_width, style, fill)?;
    }

    if legend {
        chart
            .configure_series_labels()
            .label_font(("sans-serif", style.font_size))
            .background_style(style.background.to_rgb().mix(0.8))
            .border_style(style.outline.to_rgb())
            .draw()
            .map_err(drawing)?;
    }

    Ok(())
}

/// Draw one shape's overlay.
fn draw_inner<DB, T>(
    chart: &mut ChartContext<'_, DB, Cartesian2d<RangedCoordf64, RangedCoordf64>>,
    shape: &ViolinShape<T>,
    inner: Inner,
    orientation: Orientation,
    slot_width: f64,
    style: &FigureStyle,
    fill: RGBColor,
) -> PlotResult<()>
where
    DB: DrawingBackend,
    T: Float,
{
    let at = |lateral: f64, value: f64| orientation.to_plot(lateral, value);
    let center = f(shape.position);
    let ink = style.inner_color.to_rgb();

    if let Some(summary) = &shape.summary {
        match inner {
            Inner::Box | Inner::Raincloud => {
                let hw = BOX_FRACTION * slot_width;
                // Split halves share a spine; each box sits inside its own half
                let center = match (inner, shape.side()) {
                    (Inner::Box, Side::Low) => center - hw,
                    (Inner::Box, Side::High) => center + hw,
                    _ => center,
                };
                chart
                    .draw_series(std::iter::once(PathElement::new(
                        vec![at(center, f(summary.whisker_low)), at(center, f(summary.whisker_high))],
                        ink.stroke_width(1),
                    )))
                    .map_err(drawing)?;
                chart
                    .draw_series(std::iter::once(Rectangle::new(
                        [at(center - hw, f(summary.q1)), at(center + hw, f(summary.q3))],
                        ink.filled(),
                    )))
                    .map_err(drawing)?;
                chart
                    .draw_series(std::iter::once(Circle::new(
                        at(center, f(summary.median)),
                        style.point_radius.max(2),
                        WHITE.filled(),
                    )))
                    .map_err(drawing)?;
            }
            Inner::Quartiles => {
                for (q, width) in [(summary.q1, 1), (summary.median, 2), (summary.q3, 1)] {
                    let (lo, hi) = shape.silhouette.lateral_bounds_at(q);
                    chart
                        .draw_series(std::iter::once(PathElement::new(
                            vec![at(f(lo), f(q)), at(f(hi), f(q))],
                            ink.stroke_width(width),
                        )))
                        .map_err(drawing)?;
                }
            }
            _ => {}
        }
    }

    if shape.points.is_some() {
        let color = style.point_color.map(|c| c.to_rgb()).unwrap_or(fill);
        let radius = style.point_radius;
        let points: Vec<(f64, f64)> = shape
            .point_coordinates(orientation)
            .into_iter()
            .map(|(x, y)| (f(x), f(y)))
            .collect();
        chart
            .draw_series(points.into_iter().map(|p| {
                EmptyElement::at(p)
                    + Circle::new((0, 0), radius, color.filled())
                    + Circle::new((0, 0), radius, ink.mix(0.6).stroke_width(1))
            }))
            .map_err(drawing)?;
    }

    if let Some(rug) = &shape.rug {
        let half = RUG_FRACTION * slot_width;
        chart
            .draw_series(rug.iter().map(|&v| {
                PathElement::new(
                    vec![at(center - half, f(v)), at(center + half, f(v))],
                    ink.stroke_width(1),
                )
            }))
            .map_err(drawing)?;
    }

    Ok(())
}

/// Light value-axis grid lines, drawn without the text-bearing mesh.
fn draw_plain_grid<DB: DrawingBackend>(
    chart: &mut ChartContext<'_, DB, Cartesian2d<RangedCoordf64, RangedCoordf64>>,
    extent: FigureExtent,
    orientation: Orientation,
) -> PlotResult<()> {
    let (lo, hi) = extent.value;
    let (left, right) = extent.lateral;
    let grey = BLACK.mix(0.1);
    chart
        .draw_series((0..=PLAIN_GRID_LINES).map(|i| {
            let v = lo + (hi - lo) * i as f64 / PLAIN_GRID_LINES as f64;
            PathElement::new(
                vec![orientation.to_plot(left, v), orientation.to_plot(right, v)],
                grey.stroke_width(1),
            )
        }))
        .map_err(drawing)?;
    Ok(())
}

// ============================================================================
// Figure Extent
// ============================================================================

/// Axis ranges covering everything drawn.
#[derive(Debug, Clone, Copy, PartialEq)]
struct FigureExtent {
    lateral: (f64, f64),
    value: (f64, f64),
}

impl FigureExtent {
    fn of<T: Float>(result: &ViolinResult<T>) -> Self {
        let mut lateral = (-0.5, result.categories.len().max(1) as f64 - 0.5);
        let mut value: Option<(f64, f64)> = None;
        let mut grow_value = |v: f64| {
            if v.is_finite() {
                value = Some(match value {
                    None => (v, v),
                    Some((lo, hi)) => (lo.min(v), hi.max(v)),
                });
            }
        };

        for shape in &result.violins {
            let center = f(shape.position);
            let hw = f(shape.silhouette.max_half_width());
            lateral = (lateral.0.min(center - hw), lateral.1.max(center + hw));
            for &v in &shape.silhouette.values {
                grow_value(f(v));
            }
            if let Some(points) = &shape.points {
                for (&v, &o) in points.values.iter().zip(points.offsets.iter()) {
                    grow_value(f(v));
                    let x = center + f(o);
                    lateral = (lateral.0.min(x), lateral.1.max(x));
                }
            }
            if let Some(rug) = &shape.rug {
                rug.iter().for_each(|&v| grow_value(f(v)));
            }
            if let Some(summary) = &shape.summary {
                grow_value(f(summary.min));
                grow_value(f(summary.max));
            }
        }

        let value = match value {
            Some((lo, hi)) if hi > lo => {
                let pad = VALUE_PADDING * (hi - lo);
                (lo - pad, hi + pad)
            }
            Some((v, _)) => (v - 1.0, v + 1.0),
            None => (0.0, 1.0),
        };

        Self { lateral, value }
    }
}

// ============================================================================
// Helpers
// ============================================================================

/// Convert a coordinate to `f64`.
#[inline]
fn f<T: Float>(v: T) -> f64 {
    v.to_f64().unwrap_or(f64::NAN)
}

/// Map a backend error to a [`PlotError`].
fn drawing<E: Display>(err: E) -> PlotError {
    PlotError::Drawing(err.to_string())
}
