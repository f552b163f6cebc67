//! PQ curve generation.
//!
//! The generator is a small, pure function: four scalars in, an ordered list
//! of `(pressure, flow)` samples out. Flow grows with the square root of
//! pressure, scaled by injection speed, then adjusted by [`rules::FLOW_RULES`].

use log::debug;

use crate::domain::{AlloyType, Curve, Point, SampleInput};

pub mod rules;

pub use rules::{FLOW_RULES, FlowRule};

/// Number of pressure steps between zero and the pressure ceiling.
pub const SAMPLE_COUNT: usize = 50;

/// Generate the PQ curve for `input`.
///
/// Pressure is walked from `0.0` in increments of `pressure / SAMPLE_COUNT`
/// while it stays `<= pressure`. The increment is accumulated, so the final
/// sample may land slightly below the ceiling (or the ceiling may be skipped
/// entirely) depending on rounding.
///
/// Non-positive or NaN pressure yields an empty curve. So does a pressure whose
/// step is not a positive finite number (infinite pressure, or a subnormal one
/// whose step underflows to zero), since the walk would never end.
pub fn generate(input: &SampleInput) -> Curve {
    generate_with_rules(input, &FLOW_RULES)
}

/// Convenience wrapper taking the four inputs directly.
pub fn generate_curve(pressure: f64, speed: f64, die_temp: f64, alloy: AlloyType) -> Curve {
    generate(&SampleInput::new(pressure, speed, die_temp, alloy))
}

/// Generate a curve using a caller-supplied adjustment chain.
pub fn generate_with_rules(input: &SampleInput, rules: &[FlowRule]) -> Curve {
    let pressure = input.pressure;
    let step = pressure / SAMPLE_COUNT as f64;
    if !(step.is_finite() && step > 0.0) {
        debug!("pressure {pressure} gives no usable step; returning empty curve");
        return Vec::new();
    }

    let mut curve = Vec::with_capacity(SAMPLE_COUNT + 1);
    let mut p = 0.0_f64;
    while p <= pressure {
        let q = input.speed * p.sqrt();
        curve.push(Point::new(p, rules::adjust_flow(rules, input, q)));
        p += step;
    }

    debug!(
        "generated {} points (pressure={pressure}, speed={}, die_temp={}, alloy={})",
        curve.len(),
        input.speed,
        input.die_temp,
        input.alloy
    );
    curve
}

/// Largest finite flow value on the curve.
pub fn max_flow(curve: &[Point]) -> Option<f64> {
    curve
        .iter()
        .map(|p| p.y)
        .filter(|y| y.is_finite())
        .fold(None, |acc, y| Some(acc.map_or(y, |m: f64| m.max(y))))
}
