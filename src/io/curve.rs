//! Read/write curve JSON files.
//!
//! Curve JSON is the "portable" representation of a generated curve:
//! - the four inputs it was generated from
//! - the chart bounds
//! - the sampled points, so plotting never has to regenerate
//!
//! The schema is defined by `domain::CurveFile`.

use std::fs::File;
use std::path::Path;

use chrono::Utc;
use log::info;

use crate::chart::ChartData;
use crate::domain::CurveFile;
use crate::error::AppError;

/// Build the serializable form of a chart.
pub fn curve_file(chart: &ChartData) -> CurveFile {
    CurveFile {
        tool: "pq".to_string(),
        generated_at: Utc::now(),
        input: chart.input,
        bounds: chart.bounds,
        points: chart.points.clone(),
    }
}

/// Write a curve JSON file.
pub fn write_curve_json(path: &Path, chart: &ChartData) -> Result<(), AppError> {
    let file = File::create(path)
        .map_err(|e| AppError::config(format!("Failed to create curve JSON '{}': {e}", path.display())))?;

    serde_json::to_writer_pretty(file, &curve_file(chart))
        .map_err(|e| AppError::config(format!("Failed to write curve JSON: {e}")))?;

    info!("wrote {} points to {}", chart.points.len(), path.display());
    Ok(())
}

/// Read a curve JSON file.
pub fn read_curve_json(path: &Path) -> Result<CurveFile, AppError> {
    let file = File::open(path)
        .map_err(|e| AppError::config(format!("Failed to open curve JSON '{}': {e}", path.display())))?;
    let curve: CurveFile =
        serde_json::from_reader(file).map_err(|e| AppError::config(format!("Invalid curve JSON: {e}")))?;
    Ok(curve)
}

impl CurveFile {
    /// Chart data for a saved curve, using the stored points and bounds as-is.
    pub fn to_chart(&self) -> ChartData {
        ChartData {
            input: self.input,
            points: self.points.clone(),
            bounds: self.bounds,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{AlloyType, SampleInput};

    #[test]
    fn curve_json_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("curve.json");
        let chart = ChartData::generate(SampleInput::new(100.0, 5.0, 280.0, AlloyType::Zinc));

        write_curve_json(&path, &chart).unwrap();
        let saved = read_curve_json(&path).unwrap();

        assert_eq!(saved.tool, "pq");
        assert_eq!(saved.to_chart(), chart);
    }

    #[test]
    fn non_finite_inputs_survive_a_json_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nan.json");
        let chart = ChartData::generate(SampleInput::new(100.0, f64::NAN, f64::INFINITY, AlloyType::Other));

        write_curve_json(&path, &chart).unwrap();
        let saved = read_curve_json(&path).unwrap().to_chart();

        assert!(saved.input.speed.is_nan());
        assert_eq!(saved.input.die_temp, f64::INFINITY);
        assert_eq!(saved.bounds, chart.bounds);
        assert_eq!(saved.points.len(), chart.points.len());
        for (s, c) in saved.points.iter().zip(&chart.points) {
            assert_eq!(s.x, c.x);
            assert!(s.y.is_nan());
        }
    }

    #[test]
    fn missing_file_is_a_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_curve_json(&dir.path().join("nope.json")).unwrap_err();
        assert_eq!(err.exit_code(), 2);
        assert!(err.message().contains("Failed to open curve JSON"));
    }
}
