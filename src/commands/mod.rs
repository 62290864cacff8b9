//! CLI command implementations.
//!
//! The tool has a single command, `summarize`, which orchestrates the
//! library components: load both traces, compute per-block metrics,
//! write the report.

pub mod summarize;

// Re-export main command functions
pub use summarize::{execute_summarize, validate_args, SummarizeArgs};
