use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Alloy being cast.
///
/// Only aluminum and zinc carry a flow adjustment. Any other name parses to
/// [`AlloyType::Other`], which leaves the flow untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum AlloyType {
    Aluminum,
    Zinc,
    #[default]
    Other,
}

impl AlloyType {
    /// Map a free-form name onto an alloy; unknown names become `Other`.
    pub fn from_name(name: &str) -> Self {
        let name = name.trim();
        if name.eq_ignore_ascii_case("aluminum") {
            AlloyType::Aluminum
        } else if name.eq_ignore_ascii_case("zinc") {
            AlloyType::Zinc
        } else {
            AlloyType::Other
        }
    }

    /// Lowercase option value.
    pub fn as_str(self) -> &'static str {
        match self {
            AlloyType::Aluminum => "aluminum",
            AlloyType::Zinc => "zinc",
            AlloyType::Other => "other",
        }
    }

    /// Human-readable label for terminal output.
    pub fn display_name(self) -> &'static str {
        match self {
            AlloyType::Aluminum => "Aluminum",
            AlloyType::Zinc => "Zinc",
            AlloyType::Other => "Other",
        }
    }

    pub fn next(self) -> Self {
        match self {
            AlloyType::Aluminum => AlloyType::Zinc,
            AlloyType::Zinc => AlloyType::Other,
            AlloyType::Other => AlloyType::Aluminum,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            AlloyType::Aluminum => AlloyType::Other,
            AlloyType::Zinc => AlloyType::Aluminum,
            AlloyType::Other => AlloyType::Zinc,
        }
    }
}

impl FromStr for AlloyType {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_name(s))
    }
}

impl From<String> for AlloyType {
    fn from(value: String) -> Self {
        Self::from_name(&value)
    }
}

impl From<AlloyType> for String {
    fn from(value: AlloyType) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for AlloyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The four inputs a curve is generated from.
///
/// None of the numeric fields are validated here: the generator takes them as
/// given, NaN included.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SampleInput {
    /// Injection pressure ceiling; the curve is sampled over `[0, pressure]`.
    #[serde(with = "lenient_f64")]
    pub pressure: f64,
    /// Injection speed, a linear scale factor on flow.
    #[serde(with = "lenient_f64")]
    pub speed: f64,
    /// Die surface temperature, only compared against thresholds.
    #[serde(with = "lenient_f64")]
    pub die_temp: f64,
    pub alloy: AlloyType,
}

impl SampleInput {
    pub fn new(pressure: f64, speed: f64, die_temp: f64, alloy: AlloyType) -> Self {
        Self {
            pressure,
            speed,
            die_temp,
            alloy,
        }
    }
}

/// One sample of the PQ curve: pressure on x, flow on y.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    #[serde(with = "lenient_f64")]
    pub x: f64,
    #[serde(with = "lenient_f64")]
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn as_tuple(self) -> (f64, f64) {
        (self.x, self.y)
    }
}

/// Ordered curve samples, increasing in x.
pub type Curve = Vec<Point>;

/// Axis upper bounds handed to chart renderers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisBounds {
    #[serde(with = "lenient_f64")]
    pub x_max: f64,
    #[serde(with = "lenient_f64")]
    pub y_max: f64,
}

/// A saved curve file (JSON).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurveFile {
    pub tool: String,
    pub generated_at: DateTime<Utc>,
    pub input: SampleInput,
    pub bounds: AxisBounds,
    pub points: Vec<Point>,
}

/// JSON has no NaN or infinity, so non-finite values are written as the
/// strings `"NaN"`, `"inf"` and `"-inf"` and parsed back from them.
mod lenient_f64 {
    use serde::{Deserialize, Deserializer, Serializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Repr {
        Number(f64),
        Text(String),
    }

    pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        if value.is_finite() {
            serializer.serialize_f64(*value)
        } else {
            serializer.serialize_str(&value.to_string())
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        match Repr::deserialize(deserializer)? {
            Repr::Number(v) => Ok(v),
            Repr::Text(s) => s
                .trim()
                .parse::<f64>()
                .map_err(|e| serde::de::Error::custom(format!("invalid number '{s}': {e}"))),
        }
    }
}
