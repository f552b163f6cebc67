//! ASCII plotting for terminal output.
//!
//! This is intentionally "dumb" (fixed-size grid), optimized for:
//! - quick visual sanity checks in a terminal
//! - deterministic output (helpful for golden tests)
//!
//! Plot elements:
//! - curve samples: `o`
//! - connecting line: `-`

use crate::chart::ChartData;

/// Render a PQ chart as a fixed-size character grid.
pub fn render_ascii_plot(chart: &ChartData, width: usize, height: usize) -> String {
    let width = width.max(10);
    let height = height.max(5);

    let [x_min, x_max] = chart.x_range();
    let [y_min, y_max] = chart.y_range();

    let mut grid = vec![vec![' '; width]; height];

    // Finite samples only; NaN flows have no position on the grid.
    let samples: Vec<(f64, f64)> = chart
        .series()
        .into_iter()
        .filter(|(x, y)| x.is_finite() && y.is_finite())
        .collect();

    // Line first so the sample markers overlay it.
    draw_curve(&mut grid, &samples, x_min, x_max, y_min, y_max);
    for &(x, y) in &samples {
        let col = map_x(x, x_min, x_max, width);
        let row = map_y(y, y_min, y_max, height);
        grid[row][col] = 'o';
    }

    let mut out = String::new();
    out.push_str(&format!(
        "Plot: P=[{x_min:.2}, {x_max:.2}] | Q=[{y_min:.2}, {y_max:.2}] | n={}\n",
        chart.points.len()
    ));

    for row in grid {
        out.push_str(&row.into_iter().collect::<String>());
        out.push('\n');
    }

    out
}

fn map_x(x: f64, x_min: f64, x_max: f64, width: usize) -> usize {
    let width = width.max(2);
    let u = ((x - x_min) / (x_max - x_min)).clamp(0.0, 1.0);
    (u * (width as f64 - 1.0)).round() as usize
}

fn map_y(y: f64, y_min: f64, y_max: f64, height: usize) -> usize {
    let height = height.max(2);
    let u = ((y - y_min) / (y_max - y_min)).clamp(0.0, 1.0);
    // y=top is max -> row 0
    (height as f64 - 1.0 - (u * (height as f64 - 1.0))).round() as usize
}

fn draw_curve(grid: &mut [Vec<char>], curve: &[(f64, f64)], x_min: f64, x_max: f64, y_min: f64, y_max: f64) {
    if curve.len() < 2 {
        return;
    }
    let height = grid.len();
    let width = grid[0].len();

    let mut prev = None;
    for &(x, y) in curve {
        let col = map_x(x, x_min, x_max, width);
        let row = map_y(y, y_min, y_max, height);
        if let Some((c0, r0)) = prev {
            draw_line(grid, c0, r0, col, row, '-');
        } else {
            grid[row][col] = '-';
        }
        prev = Some((col, row));
    }
}

/// Integer line drawing (Bresenham-ish).
fn draw_line(grid: &mut [Vec<char>], x0: usize, y0: usize, x1: usize, y1: usize, ch: char) {
    let mut x0 = x0 as isize;
    let mut y0 = y0 as isize;
    let x1 = x1 as isize;
    let y1 = y1 as isize;

    let dx = (x1 - x0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let dy = -(y1 - y0).abs();
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;

    loop {
        if y0 >= 0
            && (y0 as usize) < grid.len()
            && x0 >= 0
            && (x0 as usize) < grid[0].len()
            && grid[y0 as usize][x0 as usize] == ' '
        {
            grid[y0 as usize][x0 as usize] = ch;
        }

        if x0 == x1 && y0 == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x0 += sx;
        }
        if e2 <= dx {
            err += dx;
            y0 += sy;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{AlloyType, Point, SampleInput};

    #[test]
    fn plot_golden_snapshot_small() {
        let input = SampleInput::new(10.0, 1.0, 200.0, AlloyType::Other);
        let points = vec![Point::new(0.0, 0.0), Point::new(5.0, 10.0), Point::new(10.0, 10.0)];
        let chart = ChartData::from_curve(input, points);

        let txt = render_ascii_plot(&chart, 13, 5);
        let expected = concat!(
            "Plot: P=[0.00, 12.00] | Q=[0.00, 12.00] | n=3\n",
            "             \n",
            "     o----o  \n",
            "   --        \n",
            " --          \n",
            "o            \n",
        );
        assert_eq!(txt, expected);
    }

    #[test]
    fn empty_chart_renders_blank_grid() {
        let chart = ChartData::generate(SampleInput::new(0.0, 1.0, 200.0, AlloyType::Other));
        let txt = render_ascii_plot(&chart, 10, 5);
        let mut lines = txt.lines();
        assert_eq!(lines.next(), Some("Plot: P=[0.00, 1.00] | Q=[0.00, 1.00] | n=0"));
        assert!(lines.all(|l| l.trim().is_empty()));
    }
}
