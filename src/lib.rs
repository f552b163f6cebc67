//! `pq-curves` library crate.
//!
//! The binary (`pq`) is a thin wrapper around this library so that:
//!
//! - the curve generator is testable without spawning processes
//! - the chart data boundary can be reused by other front-ends
//! - code stays easy to navigate as the project grows

pub mod app;
pub mod chart;
pub mod cli;
pub mod config;
pub mod curve;
pub mod domain;
pub mod error;
pub mod io;
pub mod plot;
pub mod report;
pub mod tui;

pub use chart::ChartData;
pub use curve::{generate, generate_curve};
pub use domain::{AlloyType, Curve, Point, SampleInput};
