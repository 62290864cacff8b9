//! Tokenization of a single trace line.
//!
//! Each line of a trace file carries exactly three whitespace-separated
//! fields: a hexadecimal address, a decimal access count, and a decimal
//! block id.
//!
//! Example: `1a 5 100` means address 0x1a was accessed 5 times within
//! block 100.

use crate::utils::config::{ADDRESS_RADIX, TRACE_LINE_FIELDS};
use crate::utils::error::ParseError;

/// Which of the two trace files a record came from
///
/// **Public** - selects the counter a record updates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraceKind {
    /// The partial-access trace (first CLI argument)
    Partial,
    /// The full-access trace (second CLI argument)
    Full,
}

impl TraceKind {
    /// Human-readable name, used in log messages
    pub fn name(&self) -> &'static str {
        match self {
            TraceKind::Partial => "partial",
            TraceKind::Full => "full",
        }
    }
}

/// A single tokenized trace record
///
/// **Public** - produced by parse_trace_line, consumed by the loader
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraceRecord {
    /// Memory address (parsed from hexadecimal text)
    pub address: u64,

    /// Access count (parsed from decimal text)
    pub count: u64,

    /// Block id the address belongs to (parsed from decimal text)
    pub block_id: u64,
}

/// Tokenize one trace line into a record
///
/// **Public** - main entry point for line parsing
///
/// # Arguments
/// * `line` - A single line of trace text, without the trailing newline
///
/// # Returns
/// The tokenized record
///
/// # Errors
/// * `ParseError::FieldCount` - line does not split into exactly 3 fields
/// * `ParseError::InvalidAddress` - first field is not hexadecimal
/// * `ParseError::InvalidCount` - second field is not a decimal integer
/// * `ParseError::InvalidBlockId` - third field is not a decimal integer
pub fn parse_trace_line(line: &str) -> Result<TraceRecord, ParseError> {
    let fields: Vec<&str> = line.split_whitespace().collect();

    if fields.len() != TRACE_LINE_FIELDS {
        return Err(ParseError::FieldCount(fields.len()));
    }

    let address = parse_address(fields[0])?;

    let count = fields[1]
        .parse::<u64>()
        .map_err(|_| ParseError::InvalidCount(fields[1].to_string()))?;

    let block_id = fields[2]
        .parse::<u64>()
        .map_err(|_| ParseError::InvalidBlockId(fields[2].to_string()))?;

    Ok(TraceRecord {
        address,
        count,
        block_id,
    })
}

/// Parse the address field, accepting an optional `0x` prefix
///
/// **Private** - internal utility
fn parse_address(token: &str) -> Result<u64, ParseError> {
    let hex_str = token.strip_prefix("0x").unwrap_or(token);

    u64::from_str_radix(hex_str, ADDRESS_RADIX)
        .map_err(|_| ParseError::InvalidAddress(token.to_string()))
}
