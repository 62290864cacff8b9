//! Trace file loader.
//!
//! Reads a trace file line by line, tokenizes every record, and records
//! it into the shared aggregation table. Loading fails fast on the first
//! malformed line so the summary can never be built from a partially
//! understood trace.

use crate::aggregator::AggregationTable;
use crate::parser::trace_line::{parse_trace_line, TraceKind};
use crate::utils::error::LoadError;
use log::{debug, info, warn};
use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Per-file loading statistics
///
/// **Public** - returned to the command layer for logging and `--summary`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadStats {
    /// Number of records loaded into the table
    pub records: usize,

    /// Number of records that overwrote an earlier one for the same
    /// (block, address) pair within this file
    pub duplicates: usize,
}

/// Load one trace file into the aggregation table
///
/// **Public** - main entry point for trace loading
///
/// # Arguments
/// * `path` - Path to the trace file
/// * `kind` - Which counter each record updates (partial or full)
/// * `table` - Shared aggregation table, mutated in place
///
/// # Returns
/// Statistics about the loaded file
///
/// # Errors
/// * `LoadError::Io` - file cannot be opened or read
/// * `LoadError::MalformedLine` - a line fails tokenization; carries the
///   path and 1-based line number of the offending line
pub fn load_trace(
    path: impl AsRef<Path>,
    kind: TraceKind,
    table: &mut AggregationTable,
) -> Result<LoadStats, LoadError> {
    let path = path.as_ref();

    info!("Loading {} trace: {}", kind.name(), path.display());

    let file = File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let reader = BufReader::new(file);
    let mut stats = LoadStats::default();

    // Repeated (block, address) lines overwrite; track them so the
    // overwrite is visible in the log instead of silent.
    let mut seen: HashSet<(u64, u64)> = HashSet::new();

    for (index, line) in reader.lines().enumerate() {
        let line_number = index + 1;

        let line = line.map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        // Blank lines carry no record
        if line.trim().is_empty() {
            continue;
        }

        let record = parse_trace_line(&line).map_err(|source| LoadError::MalformedLine {
            path: path.to_path_buf(),
            line: line_number,
            source,
        })?;

        if !seen.insert((record.block_id, record.address)) {
            warn!(
                "{}:{}: duplicate {} record for block {} address {:#x}, overwriting previous count",
                path.display(),
                line_number,
                kind.name(),
                record.block_id,
                record.address
            );
            stats.duplicates += 1;
        }

        table.record(kind, record.block_id, record.address, record.count);
        stats.records += 1;
    }

    debug!(
        "Loaded {} {} records ({} duplicate overwrites)",
        stats.records,
        kind.name(),
        stats.duplicates
    );

    Ok(stats)
}
