//! Trace tokenization and file loading.
//!
//! This module handles:
//! - Tokenizing a single trace line into an address/count/block record
//! - Loading a whole trace file into the aggregation table
//! - Reporting malformed lines with file and line context

pub mod loader;
pub mod trace_line;

// Re-export main types
pub use loader::{load_trace, LoadStats};
pub use trace_line::{parse_trace_line, TraceKind, TraceRecord};
