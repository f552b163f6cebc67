//! Plotters-powered PQ chart widget for Ratatui.
//!
//! Plotters output is rendered into the Ratatui buffer using
//! `plotters-ratatui-backend`.

use plotters::prelude::*;
use plotters_ratatui_backend::widget_fn;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::Widget,
};

/// A lightweight, render-only chart description.
///
/// All series and bounds are computed outside the render call, so `render()`
/// only draws.
pub struct PqPlottersChart<'a> {
    /// Curve samples, drawn as a line with a marker per sample.
    pub curve: &'a [(f64, f64)],
    /// Sample under the inspection cursor, if any.
    pub cursor: Option<(f64, f64)>,
    /// X bounds (pressure).
    pub x_bounds: [f64; 2],
    /// Y bounds (flow).
    pub y_bounds: [f64; 2],
    pub x_label: &'a str,
    pub y_label: &'a str,
    /// Formatting of tick labels.
    pub fmt_x: fn(f64) -> String,
    pub fmt_y: fn(f64) -> String,
}

impl<'a> Widget for PqPlottersChart<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // Plotters may fail to lay out a chart in a tiny area; show a hint instead.
        if area.width < 20 || area.height < 8 {
            buf.set_string(
                area.x,
                area.y,
                "Chart area too small (resize terminal).",
                Style::default().fg(Color::Yellow),
            );
            return;
        }

        let [x0, x1] = self.x_bounds;
        let [y0, y1] = self.y_bounds;

        if !(x0.is_finite() && x1.is_finite() && y0.is_finite() && y1.is_finite()) || x1 <= x0 || y1 <= y0 {
            return;
        }

        let widget = widget_fn(move |root| {
            let mut chart = ChartBuilder::on(&root)
                .margin(1)
                // Terminal cells are low-res, so keep label areas compact.
                .set_label_area_size(LabelAreaPosition::Left, 6)
                .set_label_area_size(LabelAreaPosition::Bottom, 3)
                .build_cartesian_2d(x0..x1, y0..y1)?;

            chart
                .configure_mesh()
                .disable_x_mesh()
                .disable_y_mesh()
                .x_desc(self.x_label)
                .y_desc(self.y_label)
                .x_labels(5)
                .y_labels(5)
                .x_label_formatter(&|v| (self.fmt_x)(*v))
                .y_label_formatter(&|v| (self.fmt_y)(*v))
                .label_style(("sans-serif", 10).into_font().color(&WHITE))
                .axis_style(&WHITE)
                .bold_line_style(&WHITE)
                .draw()?;

            let line_color = RGBColor(0, 128, 255); // blue
            let marker_color = WHITE;
            let cursor_color = RGBColor(255, 255, 0); // yellow

            let finite = self
                .curve
                .iter()
                .copied()
                .filter(|(x, y)| x.is_finite() && y.is_finite());

            chart.draw_series(LineSeries::new(finite.clone(), &line_color))?;

            // `Circle` radii are mapped badly by the ratatui backend, so markers
            // are single pixels.
            chart.draw_series(finite.map(|(x, y)| Pixel::new((x, y), marker_color)))?;

            if let Some((x, y)) = self.cursor.filter(|(x, y)| x.is_finite() && y.is_finite()) {
                chart.draw_series(std::iter::once(Pixel::new((x, y), cursor_color)))?;
            }

            Ok(())
        });

        widget.render(area, buf);
    }
}
