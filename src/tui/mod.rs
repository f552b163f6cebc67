//! Ratatui-based terminal UI.
//!
//! The TUI provides a settings panel with three sliders (pressure, speed, die
//! temperature) and an alloy selector. Adjusting a control updates its label
//! immediately; the chart is only rebuilt when the user triggers an update.

use std::io;
use std::path::PathBuf;
use std::time::Duration;

use chrono::Local;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::debug;
use ratatui::{
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph},
    Terminal,
};

use crate::app::pipeline::{self, RunOutput};
use crate::chart::{self, SERIES_LABEL, X_AXIS_LABEL, Y_AXIS_LABEL};
use crate::config::{SliderSpec, DIE_TEMP_SLIDER, PRESSURE_SLIDER, SPEED_SLIDER};
use crate::domain::SampleInput;
use crate::error::AppError;

mod plotters_chart;

use plotters_chart::PqPlottersChart;

/// Number of selectable settings rows (three sliders + alloy).
const FIELD_COUNT: usize = 4;

/// Start the TUI with the given initial control values.
pub fn run(initial: SampleInput) -> Result<(), AppError> {
    let _guard = TerminalGuard::new()?;

    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)
        .map_err(|e| AppError::terminal(format!("Failed to initialize terminal: {e}")))?;

    let mut app = App::new(initial);
    app.event_loop(&mut terminal)
}

/// Ensures the terminal is restored (raw mode, alternate screen) on exit.
struct TerminalGuard;

impl TerminalGuard {
    fn new() -> Result<Self, AppError> {
        enable_raw_mode().map_err(|e| AppError::terminal(format!("Failed to enable raw mode: {e}")))?;
        if let Err(e) = execute!(io::stdout(), EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(AppError::terminal(format!("Failed to enter alternate screen: {e}")));
        }
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

/// What a key press asks the event loop to do next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

struct App {
    /// Current control values; labels always show these.
    input: SampleInput,
    selected_field: usize,
    /// Index into the drawn curve for the point readout.
    cursor: usize,
    status: String,
    /// Last computed curve; replaced wholesale on every update.
    run: RunOutput,
}

impl App {
    fn new(input: SampleInput) -> Self {
        // Initial draw uses the starting controls, like an update on load.
        let run = pipeline::recompute(input);
        Self {
            input,
            selected_field: 0,
            cursor: run.chart.points.len().saturating_sub(1),
            status: "Ready.".to_string(),
            run,
        }
    }

    fn event_loop<B: ratatui::backend::Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<(), AppError> {
        let mut needs_redraw = true;
        loop {
            if needs_redraw {
                terminal
                    .draw(|f| self.draw(f))
                    .map_err(|e| AppError::terminal(format!("Terminal draw error: {e}")))?;
                needs_redraw = false;
            }

            if !event::poll(Duration::from_millis(100))
                .map_err(|e| AppError::terminal(format!("Event poll error: {e}")))?
            {
                continue;
            }

            match event::read().map_err(|e| AppError::terminal(format!("Event read error: {e}")))? {
                Event::Key(key) => {
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }
                    if self.handle_key(key.code) == Flow::Quit {
                        break;
                    }
                    needs_redraw = true;
                }
                Event::Resize(_, _) => {
                    needs_redraw = true;
                }
                _ => {}
            }
        }
        Ok(())
    }

    fn handle_key(&mut self, code: KeyCode) -> Flow {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => return Flow::Quit,
            KeyCode::Up => {
                self.selected_field = self.selected_field.saturating_sub(1);
            }
            KeyCode::Down => {
                if self.selected_field + 1 < FIELD_COUNT {
                    self.selected_field += 1;
                }
            }
            KeyCode::Left => self.adjust_field(-1),
            KeyCode::Right => self.adjust_field(1),
            KeyCode::Enter | KeyCode::Char('u') => self.update_chart(),
            KeyCode::Char('[') => self.move_cursor(-1),
            KeyCode::Char(']') => self.move_cursor(1),
            KeyCode::Char('e') => self.export(),
            _ => {}
        }
        Flow::Continue
    }

    fn adjust_field(&mut self, delta: i32) {
        let nudge = |spec: &SliderSpec, value: f64| spec.nudge(value, delta);
        match self.selected_field {
            0 => self.input.pressure = nudge(&PRESSURE_SLIDER, self.input.pressure),
            1 => self.input.speed = nudge(&SPEED_SLIDER, self.input.speed),
            2 => self.input.die_temp = nudge(&DIE_TEMP_SLIDER, self.input.die_temp),
            3 => {
                self.input.alloy = if delta >= 0 {
                    self.input.alloy.next()
                } else {
                    self.input.alloy.prev()
                };
            }
            _ => {}
        }
        if self.is_stale() {
            self.status = "Press Enter to update the chart.".to_string();
        }
    }

    /// Regenerate the curve from the current controls and replace the chart.
    fn update_chart(&mut self) {
        self.run = pipeline::recompute(self.input);
        self.cursor = self.run.chart.points.len().saturating_sub(1);
        self.status = format!("Updated: {} points.", self.run.chart.points.len());
        debug!("chart updated for {:?}", self.input);
    }

    fn move_cursor(&mut self, delta: isize) {
        let len = self.run.chart.points.len();
        if len == 0 {
            return;
        }
        self.cursor = self.cursor.saturating_add_signed(delta).min(len - 1);
        self.status = chart::tooltip(&self.run.chart.points[self.cursor]);
    }

    fn export(&mut self) {
        let ts = Local::now().format("%Y%m%d_%H%M%S");
        let path = PathBuf::from(format!("pq_curve_{ts}.json"));
        self.status = match crate::io::write_curve_json(&path, &self.run.chart) {
            Ok(()) => format!("Wrote {}", path.display()),
            Err(err) => format!("Export failed: {err}"),
        };
    }

    /// Controls changed since the chart was last built.
    fn is_stale(&self) -> bool {
        self.input != self.run.chart.input
    }

    fn draw(&mut self, frame: &mut ratatui::Frame<'_>) {
        let size = frame.area();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(4), Constraint::Min(0), Constraint::Length(3)])
            .split(size);

        self.draw_header(frame, chunks[0]);
        self.draw_body(frame, chunks[1]);
        self.draw_footer(frame, chunks[2]);
    }

    fn draw_header(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let chart = &self.run.chart;
        let applied = if self.run.applied.is_empty() {
            "none".to_string()
        } else {
            self.run.applied.join(", ")
        };

        let mut lines: Vec<Line> = Vec::new();
        lines.push(Line::from(vec![
            Span::styled("pq", Style::default().fg(Color::Cyan)),
            Span::raw(" - die-casting PQ curve"),
            if self.is_stale() {
                Span::styled("  (controls changed)", Style::default().fg(Color::Yellow))
            } else {
                Span::raw("")
            },
        ]));
        lines.push(Line::from(Span::styled(
            format!(
                "n={} | x_max={:.2} | y_max={:.2} | adjustments: {applied}",
                chart.points.len(),
                chart.bounds.x_max,
                chart.bounds.y_max,
            ),
            Style::default().fg(Color::Gray),
        )));

        let p = Paragraph::new(Text::from(lines)).block(Block::default().borders(Borders::ALL));
        frame.render_widget(p, area);
    }

    fn draw_body(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(6)])
            .split(area);

        self.draw_chart(frame, chunks[0]);
        self.draw_settings(frame, chunks[1]);
    }

    fn draw_chart(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let block = Block::default().title(SERIES_LABEL).borders(Borders::ALL);
        let inner = block.inner(area);
        frame.render_widget(block, area);
        frame.render_widget(Clear, inner);

        let chart = &self.run.chart;
        if chart.points.is_empty() {
            let msg = Paragraph::new("Empty curve: pressure must be positive.")
                .style(Style::default().fg(Color::Yellow))
                .block(Block::default());
            frame.render_widget(msg, inner);
            return;
        }

        let curve = chart.series();
        let x_bounds = chart.x_range();
        let y_bounds = chart.y_range();

        let (chart_rect, insets) = chart_layout(inner);
        let widget = PqPlottersChart {
            curve: &curve,
            cursor: curve.get(self.cursor).copied(),
            x_bounds,
            y_bounds,
            x_label: X_AXIS_LABEL,
            y_label: Y_AXIS_LABEL,
            fmt_x: fmt_axis,
            fmt_y: fmt_axis,
        };

        frame.render_widget(widget, chart_rect);
        if let Some(insets) = insets {
            draw_axis_ticks(frame, inner, chart_rect, insets, x_bounds, y_bounds);
        }
    }

    fn draw_settings(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let items = vec![
            ListItem::new(slider_line(&PRESSURE_SLIDER, self.input.pressure)),
            ListItem::new(slider_line(&SPEED_SLIDER, self.input.speed)),
            ListItem::new(slider_line(&DIE_TEMP_SLIDER, self.input.die_temp)),
            ListItem::new(format!("{:<9} {}", "Alloy", self.input.alloy.display_name())),
        ];

        let list = List::new(items)
            .block(Block::default().title("Settings").borders(Borders::ALL))
            .highlight_style(Style::default().fg(Color::Black).bg(Color::White))
            .highlight_symbol("» ");

        let mut state = ratatui::widgets::ListState::default();
        state.select(Some(self.selected_field));
        frame.render_stateful_widget(list, area, &mut state);
    }

    fn draw_footer(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let help = "↑/↓ select  ←/→ adjust  Enter update  [/] inspect  e export  q quit";
        let line = Line::from(vec![
            Span::styled(help, Style::default().fg(Color::Gray)),
            Span::raw(" | "),
            Span::styled(&self.status, Style::default().fg(Color::Yellow)),
        ]);
        let p = Paragraph::new(line).block(Block::default().borders(Borders::ALL));
        frame.render_widget(p, area);
    }
}

/// Settings row: label, current value, and a position gauge within the range.
fn slider_line(spec: &SliderSpec, value: f64) -> String {
    const GAUGE: usize = 20;
    let u = ((value - spec.min) / (spec.max - spec.min)).clamp(0.0, 1.0);
    let filled = if u.is_finite() { (u * GAUGE as f64).round() as usize } else { 0 };
    format!(
        "{:<9} {:>7.1}  [{}{}]",
        spec.label,
        value,
        "=".repeat(filled),
        " ".repeat(GAUGE - filled)
    )
}

fn fmt_axis(v: f64) -> String {
    format!("{v:.0}")
}

#[derive(Debug, Clone, Copy)]
struct AxisInsets {
    left: u16,
    right: u16,
    top: u16,
    bottom: u16,
}

fn chart_layout(inner: Rect) -> (Rect, Option<AxisInsets>) {
    let insets = AxisInsets {
        left: 8,
        right: 2,
        top: 1,
        bottom: 2,
    };

    if inner.width <= insets.left + insets.right + 10
        || inner.height <= insets.top + insets.bottom + 5
    {
        return (inner, None);
    }

    let rect = Rect {
        x: inner.x + insets.left,
        y: inner.y + insets.top,
        width: inner.width - insets.left - insets.right,
        height: inner.height - insets.top - insets.bottom,
    };

    (rect, Some(insets))
}

fn draw_axis_ticks(
    frame: &mut ratatui::Frame<'_>,
    inner: Rect,
    chart: Rect,
    insets: AxisInsets,
    x_bounds: [f64; 2],
    y_bounds: [f64; 2],
) {
    let ticks = 5usize;
    let style = Style::default().fg(Color::Gray);

    for i in 0..ticks {
        let u = i as f64 / (ticks as f64 - 1.0);
        let x_val = x_bounds[0] + u * (x_bounds[1] - x_bounds[0]);
        let x = chart.x + ((chart.width - 1) as f64 * u).round() as u16;
        let label = format!("{:.0}", x_val);
        let label_len = label.len() as u16;
        let start = x.saturating_sub((label.len() / 2) as u16);
        let y = chart.y + chart.height;
        if y >= inner.y + inner.height - 1 {
            continue;
        }
        frame.render_widget(
            Paragraph::new(label).style(style),
            Rect {
                x: start,
                y,
                width: label_len,
                height: 1,
            },
        );
    }

    for i in 0..ticks {
        let u = i as f64 / (ticks as f64 - 1.0);
        let y_val = y_bounds[0] + u * (y_bounds[1] - y_bounds[0]);
        let y = chart.y + (chart.height - 1) - ((chart.height - 1) as f64 * u).round() as u16;
        let label = format!("{:.0}", y_val);
        let label_len = label.len() as u16;
        let x = inner.x + insets.left.saturating_sub(1);
        let start = x.saturating_sub(label.len() as u16);
        if start < inner.x {
            continue;
        }
        frame.render_widget(
            Paragraph::new(label).style(style),
            Rect {
                x: start,
                y,
                width: label_len,
                height: 1,
            },
        );
    }

    let x_label = Paragraph::new(X_AXIS_LABEL)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Gray));
    let x_rect = Rect {
        x: chart.x,
        y: chart.y + chart.height + 1,
        width: chart.width,
        height: 1,
    };
    if x_rect.y < inner.y + inner.height {
        frame.render_widget(x_label, x_rect);
    }

    let y_label = Paragraph::new("Q")
        .style(Style::default().fg(Color::Gray).add_modifier(Modifier::BOLD));
    let y_rect = Rect {
        x: inner.x,
        y: inner.y,
        width: insets.left.saturating_sub(1),
        height: 1,
    };
    frame.render_widget(y_label, y_rect);
}
