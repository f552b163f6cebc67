//! Default inputs and slider ranges.
//!
//! Defaults can be overridden from the environment (or a `.env` file):
//!
//! | variable      | meaning               |
//! |---------------|-----------------------|
//! | `PQ_PRESSURE` | injection pressure    |
//! | `PQ_SPEED`    | injection speed       |
//! | `PQ_DIE_TEMP` | die temperature       |
//! | `PQ_ALLOY`    | alloy name            |
//!
//! CLI flags take precedence over both.

use log::debug;

use crate::domain::{AlloyType, SampleInput};
use crate::error::AppError;

pub const ENV_PRESSURE: &str = "PQ_PRESSURE";
pub const ENV_SPEED: &str = "PQ_SPEED";
pub const ENV_DIE_TEMP: &str = "PQ_DIE_TEMP";
pub const ENV_ALLOY: &str = "PQ_ALLOY";

/// Bounds and increment of one numeric slider.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderSpec {
    pub label: &'static str,
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub default: f64,
}

impl SliderSpec {
    /// Move `value` by `delta` steps, staying within `[min, max]`.
    pub fn nudge(&self, value: f64, delta: i32) -> f64 {
        (value + f64::from(delta) * self.step).clamp(self.min, self.max)
    }
}

pub const PRESSURE_SLIDER: SliderSpec = SliderSpec {
    label: "Pressure",
    min: 10.0,
    max: 200.0,
    step: 5.0,
    default: 100.0,
};

pub const SPEED_SLIDER: SliderSpec = SliderSpec {
    label: "Speed",
    min: 0.0,
    max: 10.0,
    step: 0.5,
    default: 5.0,
};

pub const DIE_TEMP_SLIDER: SliderSpec = SliderSpec {
    label: "Die temp",
    min: 100.0,
    max: 350.0,
    step: 10.0,
    default: 200.0,
};

/// Slider defaults as a sample input.
pub fn default_input() -> SampleInput {
    SampleInput::new(
        PRESSURE_SLIDER.default,
        SPEED_SLIDER.default,
        DIE_TEMP_SLIDER.default,
        AlloyType::default(),
    )
}

/// Defaults from `.env` / process environment layered over the slider defaults.
pub fn input_from_env() -> Result<SampleInput, AppError> {
    dotenvy::dotenv().ok();
    input_from_lookup(|key| std::env::var(key).ok())
}

/// Same as [`input_from_env`], with a custom variable source.
pub fn input_from_lookup<F>(lookup: F) -> Result<SampleInput, AppError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut input = default_input();

    if let Some(v) = lookup(ENV_PRESSURE) {
        input.pressure = parse_number(ENV_PRESSURE, &v)?;
    }
    if let Some(v) = lookup(ENV_SPEED) {
        input.speed = parse_number(ENV_SPEED, &v)?;
    }
    if let Some(v) = lookup(ENV_DIE_TEMP) {
        input.die_temp = parse_number(ENV_DIE_TEMP, &v)?;
    }
    if let Some(v) = lookup(ENV_ALLOY) {
        input.alloy = AlloyType::from_name(&v);
    }

    debug!("configured defaults: {input:?}");
    Ok(input)
}

fn parse_number(key: &str, raw: &str) -> Result<f64, AppError> {
    raw.trim()
        .parse::<f64>()
        .map_err(|e| AppError::config(format!("Invalid {key} value '{raw}': {e}")))
}
