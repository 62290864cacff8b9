//! Aggregation of trace records into per-block statistics.
//!
//! This module transforms loaded trace records into:
//! - The nested block/address aggregation table
//! - Per-block summaries (partial fraction and access ratio)

pub mod metrics;
pub mod table;

// Re-export main types and functions
pub use metrics::{summarize_block, summarize_table, BlockSummary};
pub use table::{AddressRecord, AggregationTable, BlockRecord};
