//! SVG heatmaps of a sweep: a call panel and a put panel side by side.
//!
//! Each cell is filled from a [`ColorScale`] centred on the purchase price when
//! one is given, and annotated with its price. The renderer only reads a
//! [`SweepOutput`]; it never calls back into the pricing code.

pub mod colormap;

pub use colormap::*;

use std::path::Path;

use anyhow::{bail, Result};
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use tracing::debug;

use crate::sweep::{PriceGrid, SweepOutput};

/// Dark page background (14, 17, 23).
pub const BACKGROUND: RGBColor = RGBColor(14, 17, 23);

/// Layout and colouring options for [`render_svg`] / [`render_to_file`].
#[derive(Debug, Clone, Copy)]
pub struct HeatmapStyle {
    pub width: u32,
    pub height: u32,
    pub background: RGBColor,
    /// Purchase price of the call; centres the call panel's colour scale
    pub call_threshold: Option<f64>,
    /// Purchase price of the put; centres the put panel's colour scale
    pub put_threshold: Option<f64>,
    /// Print each cell's price inside it
    pub annotate: bool,
}

impl Default for HeatmapStyle {
    fn default() -> Self {
        Self {
            width: 1600,
            height: 760,
            background: BACKGROUND,
            call_threshold: None,
            put_threshold: None,
            annotate: true,
        }
    }
}

/// Currency display used for headline prices, e.g. `$12.35`.
pub fn format_price(value: f64) -> String {
    format!("${:.2}", value)
}

/// Render both panels into an SVG document held in memory.
pub fn render_svg(output: &SweepOutput, style: &HeatmapStyle) -> Result<String> {
    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, (style.width, style.height))
            .into_drawing_area();
        draw_heatmaps(&root, output, style)?;
        root.present()?;
    }
    Ok(svg)
}

/// Render both panels to an SVG file at `path`.
pub fn render_to_file(output: &SweepOutput, style: &HeatmapStyle, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let root = SVGBackend::new(path, (style.width, style.height)).into_drawing_area();
    draw_heatmaps(&root, output, style)?;
    root.present()?;
    debug!(path = %path.display(), "heatmap written");
    Ok(())
}

fn draw_heatmaps(
    root: &DrawingArea<SVGBackend<'_>, Shift>,
    output: &SweepOutput,
    style: &HeatmapStyle,
) -> Result<()> {
    if output.sample_count() == 0 {
        bail!("cannot render an empty sweep");
    }

    root.fill(&style.background)?;
    let root = root.titled(
        "Green is undervalued, red is overvalued",
        ("sans-serif", 18).into_font().color(&WHITE),
    )?;

    let panels = root.split_evenly((1, 2));
    draw_panel(&panels[0], "Call Option Price", &output.call, style.call_threshold, output, style)?;
    draw_panel(&panels[1], "Put Option Price", &output.put, style.put_threshold, output, style)?;
    Ok(())
}

fn draw_panel(
    area: &DrawingArea<SVGBackend<'_>, Shift>,
    title: &str,
    grid: &PriceGrid,
    threshold: Option<f64>,
    output: &SweepOutput,
    style: &HeatmapStyle,
) -> Result<()> {
    let n = grid.size();
    let extent = -0.5..(n as f64 - 0.5);

    let mut chart = ChartBuilder::on(area)
        .margin(20)
        .caption(title, ("sans-serif", 26).into_font().color(&WHITE))
        .x_label_area_size(50)
        .y_label_area_size(70)
        .build_cartesian_2d(extent.clone(), extent)?;

    let x_fmt = |v: &f64| tick_label(&output.x_samples, *v);
    let y_fmt = |v: &f64| tick_label(&output.y_samples, *v);

    chart
        .configure_mesh()
        .disable_mesh()
        .x_labels(n)
        .y_labels(n)
        .x_label_formatter(&x_fmt)
        .y_label_formatter(&y_fmt)
        .x_desc(output.x_axis.field.label())
        .y_desc(output.y_axis.field.label())
        .axis_style(&WHITE)
        .label_style(("sans-serif", 13).into_font().color(&WHITE))
        .axis_desc_style(("sans-serif", 16).into_font().color(&WHITE))
        .draw()?;

    let (lo, hi) = grid.range();
    let scale = ColorScale::new(lo, hi, threshold);

    let cells = || {
        grid.rows().iter().enumerate().flat_map(|(i, row)| {
            row.iter()
                .enumerate()
                .map(move |(j, &value)| (i as f64, j as f64, value))
        })
    };

    chart.draw_series(cells().map(|(x, y, value)| {
        Rectangle::new(
            [(x - 0.5, y - 0.5), (x + 0.5, y + 0.5)],
            scale.color(value).filled(),
        )
    }))?;
    chart.draw_series(cells().map(|(x, y, _)| {
        Rectangle::new(
            [(x - 0.5, y - 0.5), (x + 0.5, y + 0.5)],
            BLACK.stroke_width(1),
        )
    }))?;

    if style.annotate {
        let text_style = ("sans-serif", 12)
            .into_font()
            .color(&style.background)
            .pos(Pos::new(HPos::Center, VPos::Center));
        chart.draw_series(
            cells().map(|(x, y, value)| Text::new(format!("{:.2}", value), (x, y), text_style.clone())),
        )?;
    }

    Ok(())
}

/// Tick text for a mesh position: the sample value when the position sits on a
/// cell centre, blank otherwise.
fn tick_label(samples: &[f64], position: f64) -> String {
    let index = position.round();
    if (position - index).abs() > 1e-6 || index < 0.0 {
        return String::new();
    }
    samples
        .get(index as usize)
        .map(|v| format!("{:.2}", v))
        .unwrap_or_default()
}
