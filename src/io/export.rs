//! Export curve points to CSV.
//!
//! The export is meant to be easy to consume in spreadsheets or downstream scripts.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use log::info;

use crate::domain::Point;
use crate::error::AppError;

/// Write points as `pressure,flow` CSV to any writer.
pub fn write_points_csv<W: Write>(mut out: W, points: &[Point]) -> std::io::Result<()> {
    writeln!(out, "pressure,flow")?;
    for p in points {
        writeln!(out, "{:.6},{:.6}", p.x, p.y)?;
    }
    Ok(())
}

/// Write points to a CSV file.
pub fn write_results_csv(path: &Path, points: &[Point]) -> Result<(), AppError> {
    let file = File::create(path)
        .map_err(|e| AppError::config(format!("Failed to create export CSV '{}': {e}", path.display())))?;

    write_points_csv(file, points)
        .map_err(|e| AppError::config(format!("Failed to write export CSV: {e}")))?;

    info!("exported {} points to {}", points.len(), path.display());
    Ok(())
}
