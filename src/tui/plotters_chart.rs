//! Plotters-powered line chart widget for Ratatui.
//!
//! We render Plotters output into the Ratatui buffer using `plotters-ratatui-backend`.
//! Category charts (years, months) are drawn against their index on the x axis;
//! the tick formatter maps indices back to labels.

use plotters::prelude::*;
use plotters_ratatui_backend::widget_fn;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::Widget,
};

use crate::domain::Chart;

/// A render-only line chart description.
///
/// All series and bounds are computed outside the render call (see
/// `LineSeriesData::from_chart`), which keeps `render()` focused on drawing.
pub struct SalesLineChart<'a> {
    pub series: &'a LineSeriesData,
    pub x_label: &'a str,
    pub y_label: &'a str,
}

/// Index-based points plus the labels and padded bounds for one line chart.
#[derive(Debug, Clone, PartialEq)]
pub struct LineSeriesData {
    pub points: Vec<(f64, f64)>,
    pub labels: Vec<String>,
    pub x_bounds: [f64; 2],
    pub y_bounds: [f64; 2],
}

impl LineSeriesData {
    pub fn from_chart(chart: &Chart) -> Self {
        let points: Vec<(f64, f64)> = chart
            .points
            .iter()
            .enumerate()
            .map(|(i, p)| (i as f64, p.value))
            .collect();
        let labels = chart.points.iter().map(|p| p.x.clone()).collect();

        // A single point still needs a non-degenerate range.
        let x_max = (points.len().max(2) - 1) as f64;
        let x_bounds = [-0.25, x_max + 0.25];

        let (mut y_min, mut y_max) = chart.value_range().unwrap_or((0.0, 1.0));
        if y_max <= y_min {
            y_min -= 1.0;
            y_max += 1.0;
        }
        let pad = ((y_max - y_min).abs() * 0.05).max(1e-12);
        let y_bounds = [y_min - pad, y_max + pad];

        Self {
            points,
            labels,
            x_bounds,
            y_bounds,
        }
    }

    fn label_at(&self, x: f64) -> String {
        let idx = x.round();
        if idx < 0.0 || (x - idx).abs() > 1e-6 {
            return String::new();
        }
        self.labels.get(idx as usize).cloned().unwrap_or_default()
    }
}

impl<'a> Widget for SalesLineChart<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // Plotters may fail to build a chart in a tiny area; show a hint instead.
        if area.width < 20 || area.height < 8 {
            buf.set_string(
                area.x,
                area.y,
                "Chart area too small (resize terminal).",
                Style::default().fg(Color::Yellow),
            );
            return;
        }

        let [x0, x1] = self.series.x_bounds;
        let [y0, y1] = self.series.y_bounds;
        if !(x0.is_finite() && x1.is_finite() && y0.is_finite() && y1.is_finite()) || x1 <= x0 || y1 <= y0 {
            return;
        }

        let n_labels = self.series.labels.len().clamp(1, 6);
        let widget = widget_fn(move |root| {
            let mut chart = ChartBuilder::on(&root)
                .margin(1)
                // Terminal cells are low-res, so keep label areas compact.
                .set_label_area_size(LabelAreaPosition::Left, 7)
                .set_label_area_size(LabelAreaPosition::Bottom, 2)
                .build_cartesian_2d(x0..x1, y0..y1)?;

            chart
                .configure_mesh()
                .disable_x_mesh()
                .disable_y_mesh()
                .x_desc(self.x_label)
                .y_desc(self.y_label)
                .x_labels(n_labels)
                .y_labels(4)
                .x_label_formatter(&|v| self.series.label_at(*v))
                .y_label_formatter(&|v| format!("{v:.0}"))
                .label_style(("sans-serif", 10).into_font().color(&WHITE))
                .axis_style(&WHITE)
                .bold_line_style(&WHITE)
                .draw()?;

            let line_color = RGBColor(0, 255, 255); // cyan
            chart.draw_series(LineSeries::new(self.series.points.iter().copied(), &line_color))?;

            Ok(())
        });

        widget.render(area, buf);
    }
}
