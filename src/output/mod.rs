//! Output writers for summary data.
//!
//! This module handles rendering aggregated data as text:
//! - The tab-separated per-block summary report (the tool's output file)
//! - A human-readable dump of the full aggregation table (diagnostic)

pub mod dump;
pub mod report;

// Re-export main functions
pub use dump::format_table;
pub use report::{format_ratio, summary_line, write_summary};
