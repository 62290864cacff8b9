//! The nested block/address aggregation table.
//!
//! Both map levels use `BTreeMap` so iteration is always in ascending
//! key order: the summary report and the diagnostic dump come out
//! deterministic with no separate sorting pass.

use crate::parser::trace_line::TraceKind;
use std::collections::BTreeMap;

/// Access counters for a single memory address
///
/// Both counters default to 0 until a trace record sets them. A repeated
/// record for the same (block, address, kind) overwrites the counter;
/// the loader logs those overwrites.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AddressRecord {
    /// Count from the full-access trace
    pub full_access: u64,

    /// Count from the partial-access trace
    pub partial_access: u64,
}

/// All addresses aggregated under one block id
///
/// **Public** - owned by the AggregationTable, one per block
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlockRecord {
    addresses: BTreeMap<u64, AddressRecord>,
}

impl BlockRecord {
    /// Set the partial-access count for an address, creating it if needed
    pub fn set_partial(&mut self, address: u64, count: u64) {
        self.addresses.entry(address).or_default().partial_access = count;
    }

    /// Set the full-access count for an address, creating it if needed
    pub fn set_full(&mut self, address: u64, count: u64) {
        self.addresses.entry(address).or_default().full_access = count;
    }

    /// Look up a single address record
    pub fn get(&self, address: u64) -> Option<&AddressRecord> {
        self.addresses.get(&address)
    }

    /// Iterate addresses in ascending order
    pub fn addresses(&self) -> impl Iterator<Item = (u64, &AddressRecord)> {
        self.addresses.iter().map(|(addr, record)| (*addr, record))
    }

    /// Number of distinct addresses in the block
    pub fn address_count(&self) -> usize {
        self.addresses.len()
    }
}

/// Process-scoped mapping from block id to its aggregated addresses
///
/// **Public** - owned by the summarize command and passed by mutable
/// reference into the loader; never global state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AggregationTable {
    blocks: BTreeMap<u64, BlockRecord>,
}

impl AggregationTable {
    /// Create an empty table
    ///
    /// **Public** - constructor
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one trace line into the table
    ///
    /// **Public** - main mutation entry point, called by the loader
    ///
    /// # Arguments
    /// * `kind` - Which counter the record updates
    /// * `block_id` - Block the address belongs to
    /// * `address` - Memory address
    /// * `count` - Access count to set
    ///
    /// Blocks and addresses are created lazily on first reference.
    pub fn record(&mut self, kind: TraceKind, block_id: u64, address: u64, count: u64) {
        let block = self.blocks.entry(block_id).or_default();
        match kind {
            TraceKind::Partial => block.set_partial(address, count),
            TraceKind::Full => block.set_full(address, count),
        }
    }

    /// Look up a single block record
    pub fn get(&self, block_id: u64) -> Option<&BlockRecord> {
        self.blocks.get(&block_id)
    }

    /// Iterate blocks in ascending block-id order
    pub fn blocks(&self) -> impl Iterator<Item = (u64, &BlockRecord)> {
        self.blocks.iter().map(|(id, block)| (*id, block))
    }

    /// Number of distinct blocks
    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }

    /// Total number of distinct (block, address) pairs
    pub fn address_count(&self) -> usize {
        self.blocks.values().map(BlockRecord::address_count).sum()
    }

    /// True if no trace record has been loaded yet
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}
