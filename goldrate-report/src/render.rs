//! PNG rendering of a chart layout.
//!
//! Dual-axis line chart on a black canvas: gold price on the left axis,
//! interest rate on the right, shared date axis.

use crate::layout::ChartLayout;
use crate::spec::ChartSpec;
use goldrate_core::domain::ResampledSeries;
use plotters::coord::ranged1d::{DefaultFormatting, KeyPointHint, Ranged};
use plotters::coord::types::RangedCoordf64;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use std::fmt;
use std::ops::Range;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const CANVAS_SIZE: (u32, u32) = (1000, 600);

const FONT: &str = "sans-serif";
const GOLD: RGBColor = RGBColor(255, 215, 0);
const GRID: RGBColor = RGBColor(128, 128, 128);
const LEGEND_BG: RGBColor = RGBColor(40, 40, 40);

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("cannot create output directory {path}: {source}")]
    OutputWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to draw {path}: {reason}")]
    Drawing { path: PathBuf, reason: String },
}

/// Something that turns a layout into a file at `path`.
pub trait ChartRenderer {
    fn render(&self, layout: &ChartLayout, path: &Path) -> Result<(), RenderError>;
}

/// `<output_dir>/<output_name>.png`
pub fn output_path(output_dir: &Path, spec: &ChartSpec) -> PathBuf {
    output_dir.join(spec.file_name())
}

/// Create `output_dir` (and parents) if it does not exist.
pub fn ensure_output_dir(output_dir: &Path) -> Result<(), RenderError> {
    std::fs::create_dir_all(output_dir).map_err(|source| RenderError::OutputWrite {
        path: output_dir.to_path_buf(),
        source,
    })
}

/// Renders with the plotters bitmap backend.
#[derive(Debug, Default, Clone, Copy)]
pub struct PngRenderer;

impl ChartRenderer for PngRenderer {
    fn render(&self, layout: &ChartLayout, path: &Path) -> Result<(), RenderError> {
        draw_png(layout, path)
    }
}

/// Date axis in fractional years whose only key points are the layout's ticks.
struct YearAxis {
    span: RangedCoordf64,
    ticks: Vec<f64>,
}

impl YearAxis {
    fn new(layout: &ChartLayout) -> Self {
        let (x0, x1) = layout.x_range;
        Self {
            span: (x0..x1).into(),
            ticks: layout.x_ticks.clone(),
        }
    }
}

impl Ranged for YearAxis {
    type FormatOption = DefaultFormatting;
    type ValueType = f64;

    fn map(&self, value: &f64, limit: (i32, i32)) -> i32 {
        self.span.map(value, limit)
    }

    fn key_points<Hint: KeyPointHint>(&self, _hint: Hint) -> Vec<f64> {
        self.ticks.clone()
    }

    fn range(&self) -> Range<f64> {
        self.span.range()
    }
}

fn drawing_failed(path: &Path, e: impl fmt::Display) -> RenderError {
    RenderError::Drawing {
        path: path.to_path_buf(),
        reason: e.to_string(),
    }
}

fn draw_png(layout: &ChartLayout, path: &Path) -> Result<(), RenderError> {
    let root = BitMapBackend::new(path, CANVAS_SIZE).into_drawing_area();
    root.fill(&BLACK).map_err(|e| drawing_failed(path, e))?;

    let (x0, x1) = layout.x_range;
    let (p0, p1) = layout.price_range;
    let (r0, r1) = layout.rate_range;

    let mut chart = ChartBuilder::on(&root)
        .caption(&layout.title, (FONT, 22).into_font().color(&WHITE))
        .margin(15)
        .x_label_area_size(45)
        .y_label_area_size(70)
        .right_y_label_area_size(70)
        .build_cartesian_2d(YearAxis::new(layout), p0..p1)
        .map_err(|e| drawing_failed(path, e))?
        .set_secondary_coord(x0..x1, r0..r1);

    // Grid and x axis in white.
    chart
        .configure_mesh()
        .disable_y_axis()
        .x_desc("Year")
        .x_label_formatter(&|x| format!("{:.0}", x))
        .x_label_style((FONT, 13).into_font().color(&WHITE))
        .axis_desc_style((FONT, 15).into_font().color(&WHITE))
        .axis_style(WHITE)
        .bold_line_style(GRID.stroke_width(1))
        .light_line_style(TRANSPARENT)
        .draw()
        .map_err(|e| drawing_failed(path, e))?;

    // Price axis tinted gold.
    chart
        .configure_mesh()
        .disable_mesh()
        .disable_x_axis()
        .y_desc("Gold Price (USD)")
        .y_label_formatter(&|y| format!("{:.0}", y))
        .y_label_style((FONT, 13).into_font().color(&GOLD))
        .axis_desc_style((FONT, 15).into_font().color(&GOLD))
        .axis_style(GOLD)
        .draw()
        .map_err(|e| drawing_failed(path, e))?;

    chart
        .configure_secondary_axes()
        .x_labels(0)
        .y_desc("Interest Rate (%)")
        .y_label_formatter(&|y| format!("{:.1}", y))
        .label_style((FONT, 13).into_font().color(&WHITE))
        .axis_desc_style((FONT, 15).into_font().color(&WHITE))
        .axis_style(WHITE)
        .draw()
        .map_err(|e| drawing_failed(path, e))?;

    chart
        .draw_series(LineSeries::new(
            layout.price_points.iter().copied(),
            GOLD.stroke_width(2),
        ))
        .map_err(|e| drawing_failed(path, e))?
        .label("Gold Price")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], GOLD.stroke_width(2)));

    chart
        .draw_secondary_series(LineSeries::new(
            layout.rate_points.iter().copied(),
            WHITE.stroke_width(2),
        ))
        .map_err(|e| drawing_failed(path, e))?
        .label("Interest Rate")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], WHITE.stroke_width(2)));

    if !layout.annotations.is_empty() {
        let above = (FONT, 11)
            .into_font()
            .color(&GOLD)
            .pos(Pos::new(HPos::Center, VPos::Bottom));
        let below = (FONT, 11)
            .into_font()
            .color(&WHITE)
            .pos(Pos::new(HPos::Center, VPos::Top));

        chart
            .draw_series(layout.annotations.iter().map(|a| {
                EmptyElement::at((a.x, a.price))
                    + Text::new(a.price_label.clone(), (0, -6), above.clone())
            }))
            .map_err(|e| drawing_failed(path, e))?;

        chart
            .draw_secondary_series(layout.annotations.iter().map(|a| {
                EmptyElement::at((a.x, a.rate))
                    + Text::new(a.rate_label.clone(), (0, 10), below.clone())
            }))
            .map_err(|e| drawing_failed(path, e))?;
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperLeft)
        .background_style(LEGEND_BG)
        .border_style(WHITE)
        .label_font((FONT, 13).into_font().color(&WHITE))
        .draw()
        .map_err(|e| drawing_failed(path, e))?;

    root.present().map_err(|e| drawing_failed(path, e))?;
    Ok(())
}

/// Lay out `spec` over `series` and write it under `output_dir`.
pub fn render_spec(
    renderer: &dyn ChartRenderer,
    series: &ResampledSeries,
    spec: &ChartSpec,
    output_dir: &Path,
) -> Result<PathBuf, RenderError> {
    let layout = ChartLayout::compute(series, spec);
    ensure_output_dir(output_dir)?;

    let path = output_path(output_dir, spec);
    renderer.render(&layout, &path)?;

    tracing::info!(
        chart = spec.output_name,
        points = layout.price_points.len(),
        annotations = layout.annotations.len(),
        path = %path.display(),
        "wrote chart"
    );
    Ok(path)
}
