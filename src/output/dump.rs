//! Human-readable dump of the aggregation table.
//!
//! Diagnostic only; printed to stdout behind the `--dump` flag. The
//! report file never contains this representation.

use crate::aggregator::AggregationTable;
use std::fmt::Write;

/// Render the full table: one stanza per block, addresses ascending
///
/// **Public** - stable format, covered by tests
///
/// # Example output
/// ```text
/// Block: 100
///     addr: 0x1a   full access: 10   partial access: 5
///     addr: 0x1b   full access: 10   partial access: 0
/// ```
pub fn format_table(table: &AggregationTable) -> String {
    let mut out = String::new();

    for (block_id, block) in table.blocks() {
        // Infallible for String targets
        let _ = writeln!(out, "Block: {}", block_id);
        for (address, record) in block.addresses() {
            let _ = writeln!(
                out,
                "    addr: {:#x}\tfull access: {}\tpartial access: {}",
                address, record.full_access, record.partial_access
            );
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::TraceKind;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_format_table() {
        let mut table = AggregationTable::new();
        table.record(TraceKind::Partial, 100, 0x1a, 5);
        table.record(TraceKind::Full, 100, 0x1a, 10);
        table.record(TraceKind::Full, 100, 0x1b, 10);

        let dump = format_table(&table);
        assert_eq!(
            dump,
            "Block: 100\n\
             \x20   addr: 0x1a\tfull access: 10\tpartial access: 5\n\
             \x20   addr: 0x1b\tfull access: 10\tpartial access: 0\n"
        );
    }

    #[test]
    fn test_format_table_multiple_blocks_sorted() {
        let mut table = AggregationTable::new();
        table.record(TraceKind::Full, 200, 0x2, 1);
        table.record(TraceKind::Full, 100, 0x1, 1);

        let dump = format_table(&table);
        let first_block = dump.find("Block: 100").unwrap();
        let second_block = dump.find("Block: 200").unwrap();
        assert!(first_block < second_block);
    }

    #[test]
    fn test_format_table_empty() {
        let table = AggregationTable::new();
        assert_eq!(format_table(&table), "");
    }
}
