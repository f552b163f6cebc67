//! Chart data handed to renderers.
//!
//! A renderer (Plotters widget in the TUI, or the ASCII plot) only needs the
//! points, the axis ranges and a few fixed labels. All of that is computed
//! here so drawing code never touches the generator.

use crate::curve;
use crate::domain::{AxisBounds, Curve, Point, SampleInput};

pub const SERIES_LABEL: &str = "PQ Curve";
pub const X_AXIS_LABEL: &str = "Injection pressure (P)";
pub const Y_AXIS_LABEL: &str = "Injection flow (Q)";

/// Headroom multiplier applied to both axis maxima.
pub const AXIS_HEADROOM: f64 = 1.2;

/// Everything a renderer needs to draw one PQ curve.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartData {
    pub input: SampleInput,
    pub points: Curve,
    pub bounds: AxisBounds,
}

impl ChartData {
    /// Generate the curve for `input` and derive its chart bounds.
    pub fn generate(input: SampleInput) -> Self {
        let points = curve::generate(&input);
        Self::from_curve(input, points)
    }

    pub fn from_curve(input: SampleInput, points: Curve) -> Self {
        let bounds = axis_bounds(input.pressure, &points);
        Self {
            input,
            points,
            bounds,
        }
    }

    pub fn series(&self) -> Vec<(f64, f64)> {
        self.points.iter().map(|p| p.as_tuple()).collect()
    }

    pub fn x_range(&self) -> [f64; 2] {
        drawable_range(0.0, self.bounds.x_max)
    }

    pub fn y_range(&self) -> [f64; 2] {
        drawable_range(0.0, self.bounds.y_max)
    }
}

/// Axis maxima: 1.2× the pressure ceiling and 1.2× the largest flow.
///
/// An empty curve (or one with no finite flow) has no maximum; the y bound then
/// falls back to zero.
pub fn axis_bounds(pressure: f64, points: &[Point]) -> AxisBounds {
    let y_peak = curve::max_flow(points).unwrap_or(0.0);
    AxisBounds {
        x_max: pressure * AXIS_HEADROOM,
        y_max: y_peak * AXIS_HEADROOM,
    }
}

/// Widen a degenerate or non-finite `[min, max]` into something drawable.
pub fn drawable_range(min: f64, max: f64) -> [f64; 2] {
    if min.is_finite() && max.is_finite() && max > min {
        [min, max]
    } else {
        [0.0, 1.0]
    }
}

/// Hover/tooltip text for one point.
pub fn tooltip(point: &Point) -> String {
    format!("{SERIES_LABEL}: P: {:.2}, Q: {:.2}", point.x, point.y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::AlloyType;

    #[test]
    fn bounds_add_twenty_percent_headroom() {
        let chart = ChartData::generate(SampleInput::new(100.0, 2.0, 200.0, AlloyType::Other));
        assert_eq!(chart.points.len(), 51);
        assert!((chart.bounds.x_max - 120.0).abs() < 1e-9);
        assert!((chart.bounds.y_max - 24.0).abs() < 1e-9);
        assert_eq!(chart.x_range(), [0.0, chart.bounds.x_max]);
    }

    #[test]
    fn empty_curve_falls_back_to_zero_flow() {
        let chart = ChartData::generate(SampleInput::new(0.0, 2.0, 200.0, AlloyType::Other));
        assert!(chart.points.is_empty());
        assert_eq!(chart.bounds.y_max, 0.0);
        assert_eq!(chart.bounds.x_max, 0.0);
        assert_eq!(chart.y_range(), [0.0, 1.0]);
        assert_eq!(chart.x_range(), [0.0, 1.0]);
    }

    #[test]
    fn zero_speed_has_drawable_y_range() {
        let chart = ChartData::generate(SampleInput::new(50.0, 0.0, 200.0, AlloyType::Zinc));
        assert_eq!(chart.bounds.y_max, 0.0);
        assert_eq!(chart.y_range(), [0.0, 1.0]);
    }

    #[test]
    fn tooltip_uses_two_decimals() {
        assert_eq!(tooltip(&Point::new(50.0, 353.5534)), "PQ Curve: P: 50.00, Q: 353.55");
    }
}
