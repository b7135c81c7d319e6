//! Ranked report serialization.

pub mod writer;

pub use writer::{REPORT_HEADER, render_report, write_report};
