//! Input/output helpers.
//!
//! - curve JSON read/write (`curve`)
//! - point exports to CSV (`export`)

pub mod curve;
pub mod export;

pub use curve::*;
pub use export::*;
