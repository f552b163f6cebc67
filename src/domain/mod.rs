//! Domain types used throughout the crate.
//!
//! This module defines:
//!
//! - the generator inputs (`SampleInput`, `AlloyType`)
//! - curve samples (`Point`, `Curve`)
//! - chart bounds and the saved curve file (`AxisBounds`, `CurveFile`)

pub mod types;

pub use types::*;
