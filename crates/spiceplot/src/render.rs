//! PNG rendering with plotters.

use std::error::Error;
use std::ops::Range;
use std::path::Path;

use plotters::coord::Shift;
use plotters::coord::ranged1d::{
    AsRangedCoord, DefaultFormatting, KeyPointHint, Ranged, ValueFormatter,
};
use plotters::coord::types::RangedCoordf64;
use plotters::prelude::*;

use crate::config::FigureStyle;
use crate::error::{PlotError, Result};
use crate::figure::{Figure, Panel, XAxis};

/// Resolution used to turn point sizes into pixels.
const DPI: f64 = 100.0;

type DrawResult = std::result::Result<(), Box<dyn Error>>;

type Area<'a> = DrawingArea<BitMapBackend<'a>, Shift>;

/// Linear axis whose ticks sit exactly at the given positions.
struct FixedTicks {
    range: RangedCoordf64,
    ticks: Vec<f64>,
}

impl FixedTicks {
    fn new(range: Range<f64>, ticks: Vec<f64>) -> Self {
        Self {
            range: range.into(),
            ticks,
        }
    }
}

impl Ranged for FixedTicks {
    type FormatOption = DefaultFormatting;
    type ValueType = f64;

    fn map(&self, value: &f64, limit: (i32, i32)) -> i32 {
        self.range.map(value, limit)
    }

    fn key_points<Hint: KeyPointHint>(&self, _hint: Hint) -> Vec<f64> {
        self.ticks.clone()
    }

    fn range(&self) -> Range<f64> {
        self.range.range()
    }
}

/// Draws a [`Figure`] to an image file.
pub trait Renderer {
    fn render(&self, figure: &Figure, path: &Path) -> Result<()>;
}

/// Renders figures to PNG through the plotters bitmap backend.
#[derive(Debug, Clone, Default)]
pub struct BitmapRenderer {
    style: FigureStyle,
}

impl BitmapRenderer {
    pub fn new(style: FigureStyle) -> Self {
        Self { style }
    }

    fn font_px(points: u32) -> f64 {
        f64::from(points) * DPI / 72.0
    }

    fn color(index: usize) -> RGBAColor {
        Palette99::pick(index).mix(0.9)
    }

    fn draw(&self, figure: &Figure, path: &Path) -> DrawResult {
        let root = BitMapBackend::new(path, (self.style.width, self.style.height)).into_drawing_area();
        root.fill(&WHITE)?;
        let root = root.titled(
            &figure.title,
            ("sans-serif", Self::font_px(self.style.title_font_size)),
        )?;

        let (width, _) = root.dim_in_pixel();
        let split = (f64::from(width) * self.style.plot_right) as u32;
        let (plot_area, legend_area) = root.split_horizontally(split);

        let areas = plot_area.split_evenly((figure.panels.len().max(1), 1));
        for (panel, area) in figure.panels.iter().zip(areas.iter()) {
            let y_range = panel.y_range(self.style.y_margin);
            match &panel.x_axis {
                XAxis::Linear => self.draw_panel(area, panel, panel.x_range(), y_range)?,
                XAxis::Log => self.draw_panel(area, panel, panel.x_range().log_scale(), y_range)?,
                XAxis::Ticks(ticks) => self.draw_panel(
                    area,
                    panel,
                    FixedTicks::new(panel.x_range(), ticks.positions()),
                    y_range,
                )?,
            }
        }

        self.draw_legend(&legend_area, &figure.legend)?;
        root.present()?;
        Ok(())
    }

    fn draw_panel<X>(
        &self,
        area: &Area<'_>,
        panel: &Panel,
        x_spec: X,
        y_range: Range<f64>,
    ) -> DrawResult
    where
        X: AsRangedCoord<Value = f64>,
        X::CoordDescType: ValueFormatter<f64>,
    {
        let label_px = Self::font_px(self.style.label_font_size);
        let mut chart = ChartBuilder::on(area)
            .margin(10)
            .x_label_area_size((label_px * 3.0) as u32)
            .y_label_area_size((label_px * 5.0) as u32)
            .build_cartesian_2d(x_spec, y_range)?;

        let format_x = |v: &f64| format!("{}", v);
        let mut mesh = chart.configure_mesh();
        mesh.x_desc(panel.x_label.as_str())
            .y_desc(panel.y_label.as_str())
            .axis_desc_style(("sans-serif", label_px))
            .x_label_formatter(&format_x);
        if !self.style.grid {
            mesh.disable_mesh();
        }
        mesh.draw()?;

        let positive_only = matches!(panel.x_axis, XAxis::Log);
        for (index, series) in panel.series.iter().enumerate() {
            let points = series
                .points
                .iter()
                .copied()
                .filter(|&(x, _)| !positive_only || x > 0.0);
            chart.draw_series(LineSeries::new(
                points,
                Self::color(index).stroke_width(self.style.line_width),
            ))?;
        }
        Ok(())
    }

    /// Legend box centered vertically in the strip right of the panels.
    fn draw_legend(&self, area: &Area<'_>, labels: &[String]) -> DrawResult {
        if labels.is_empty() {
            return Ok(());
        }

        let font_px = Self::font_px(self.style.label_font_size);
        let (width, height) = area.dim_in_pixel();
        let row = (font_px * 1.5) as i32;
        let pad = 8;
        let sample = 30;
        let left = pad;
        let right = width as i32 - pad;
        let box_height = row * labels.len() as i32 + 2 * pad;
        let top = (height as i32 - box_height) / 2;
        let bottom = top + box_height;

        if self.style.legend_shadow {
            let offset = 4;
            area.draw(&Rectangle::new(
                [(left + offset, top + offset), (right + offset, bottom + offset)],
                BLACK.mix(0.3).filled(),
            ))?;
        }
        area.draw(&Rectangle::new([(left, top), (right, bottom)], WHITE.filled()))?;
        area.draw(&Rectangle::new([(left, top), (right, bottom)], BLACK.mix(0.5).stroke_width(1)))?;

        for (index, label) in labels.iter().enumerate() {
            let y = top + pad + row * index as i32 + row / 2;
            area.draw(&PathElement::new(
                vec![(left + pad, y), (left + pad + sample, y)],
                Self::color(index).stroke_width(self.style.line_width),
            ))?;
            area.draw(&Text::new(
                label.as_str(),
                (left + 2 * pad + sample, y - (font_px / 2.0) as i32),
                ("sans-serif", font_px),
            ))?;
        }
        Ok(())
    }
}

impl Renderer for BitmapRenderer {
    fn render(&self, figure: &Figure, path: &Path) -> Result<()> {
        self.draw(figure, path).map_err(|e| PlotError::Render {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        log::debug!("Rendered '{}' to {}", figure.title, path.display());
        Ok(())
    }
}
