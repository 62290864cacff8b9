//! Mem Trace Summary
//!
//! Per-block summarization of partial and full memory-access traces.
//!
//! This crate provides the core implementation for the
//! `mem-trace` CLI tool: it loads two line-oriented trace files,
//! aggregates access counts per address grouped by block id, and
//! writes one tab-separated summary line per block.
//!
//! ## Getting Started
//!
//! Most users should install and use the CLI:
//!
//! ```bash
//! cargo install mem-trace-summary
//! mem-trace <partial_trace> <full_trace> <output>
//! ```

pub mod aggregator;
pub mod commands;
pub mod output;
pub mod parser;
pub mod utils;
