//! Per-block summary metrics.
//!
//! For every block the reporter needs two numbers: the fraction of its
//! addresses that saw any partial access, and the ratio of total
//! partial-access count to total full-access count.

use crate::aggregator::table::{AggregationTable, BlockRecord};
use log::{debug, warn};

/// Summary metrics for one block
///
/// **Public** - produced here, rendered by the output module
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlockSummary {
    /// Block id the metrics belong to
    pub block_id: u64,

    /// Fraction of addresses with partial_access > 0
    pub partial_fraction: f64,

    /// Sum of partial counts over sum of full counts; NaN when the
    /// block has no full accesses at all
    pub access_ratio: f64,
}

/// Compute summary metrics for a single block
///
/// **Public** - main entry point for metrics calculation
///
/// # Arguments
/// * `block_id` - Block id, carried through to the summary
/// * `block` - Aggregated addresses for the block
///
/// # Returns
/// The block summary, or `None` for a block with no addresses. An empty
/// block cannot be produced by the loader (blocks are created only in
/// response to a record), so `None` is a defensive guard rather than an
/// expected path.
///
/// A full-access sum of zero is legitimate: a block can appear only in
/// the partial trace. The ratio is reported as NaN in that case instead
/// of aborting the run.
pub fn summarize_block(block_id: u64, block: &BlockRecord) -> Option<BlockSummary> {
    let total = block.address_count();
    if total == 0 {
        warn!("Block {} has no addresses, skipping", block_id);
        return None;
    }

    let mut taken = 0usize;
    let mut partial_sum = 0u64;
    let mut full_sum = 0u64;

    for (_, record) in block.addresses() {
        if record.partial_access > 0 {
            taken += 1;
        }
        partial_sum += record.partial_access;
        full_sum += record.full_access;
    }

    let partial_fraction = taken as f64 / total as f64;

    let access_ratio = if full_sum == 0 {
        debug!(
            "Block {} has no full accesses, reporting ratio as NaN",
            block_id
        );
        f64::NAN
    } else {
        partial_sum as f64 / full_sum as f64
    };

    Some(BlockSummary {
        block_id,
        partial_fraction,
        access_ratio,
    })
}

/// Compute summaries for every block in the table
///
/// **Public** - called by the summarize command
///
/// # Returns
/// One summary per block, in ascending block-id order
pub fn summarize_table(table: &AggregationTable) -> Vec<BlockSummary> {
    debug!("Summarizing {} blocks", table.block_count());

    table
        .blocks()
        .filter_map(|(block_id, block)| summarize_block(block_id, block))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::TraceKind;

    fn table_from(records: &[(TraceKind, u64, u64, u64)]) -> AggregationTable {
        let mut table = AggregationTable::new();
        for (kind, block, addr, count) in records {
            table.record(*kind, *block, *addr, *count);
        }
        table
    }

    #[test]
    fn test_spec_example_block() {
        // partial: 1a->5, 1b->0; full: 1a->10, 1b->10
        let table = table_from(&[
            (TraceKind::Partial, 100, 0x1a, 5),
            (TraceKind::Partial, 100, 0x1b, 0),
            (TraceKind::Full, 100, 0x1a, 10),
            (TraceKind::Full, 100, 0x1b, 10),
        ]);

        let summary = summarize_block(100, table.get(100).unwrap()).unwrap();
        assert_eq!(summary.block_id, 100);
        assert_eq!(summary.partial_fraction, 0.5);
        assert_eq!(summary.access_ratio, 0.25);
    }

    #[test]
    fn test_all_addresses_partial() {
        let table = table_from(&[
            (TraceKind::Partial, 1, 0x1, 2),
            (TraceKind::Partial, 1, 0x2, 7),
            (TraceKind::Full, 1, 0x1, 4),
            (TraceKind::Full, 1, 0x2, 5),
        ]);

        let summary = summarize_block(1, table.get(1).unwrap()).unwrap();
        assert_eq!(summary.partial_fraction, 1.0);
        assert_eq!(summary.access_ratio, 1.0);
    }

    #[test]
    fn test_no_addresses_partial() {
        let table = table_from(&[
            (TraceKind::Full, 1, 0x1, 4),
            (TraceKind::Full, 1, 0x2, 6),
        ]);

        let summary = summarize_block(1, table.get(1).unwrap()).unwrap();
        assert_eq!(summary.partial_fraction, 0.0);
        assert_eq!(summary.access_ratio, 0.0);
    }

    #[test]
    fn test_partial_only_block_reports_nan() {
        let table = table_from(&[(TraceKind::Partial, 9, 0x1, 3)]);

        let summary = summarize_block(9, table.get(9).unwrap()).unwrap();
        assert_eq!(summary.partial_fraction, 1.0);
        assert!(summary.access_ratio.is_nan());
    }

    #[test]
    fn test_empty_block_guard() {
        let block = BlockRecord::default();
        assert!(summarize_block(5, &block).is_none());
    }

    #[test]
    fn test_summarize_table_ascending_order() {
        let table = table_from(&[
            (TraceKind::Full, 200, 0x1, 1),
            (TraceKind::Full, 100, 0x1, 1),
        ]);

        let summaries = summarize_table(&table);
        let ids: Vec<u64> = summaries.iter().map(|s| s.block_id).collect();
        assert_eq!(ids, vec![100, 200]);
    }
}
