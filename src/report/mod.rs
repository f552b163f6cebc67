//! Reporting utilities: run summaries and point tables.
//!
//! We keep formatting code in one place so the generator stays free of
//! presentation concerns and output changes are localized.

pub mod format;

pub use format::*;
