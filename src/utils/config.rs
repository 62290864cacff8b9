//! Configuration and constants for the CLI.

/// Number of fields per trace line: `<hex_address> <decimal_count> <decimal_block_id>`
pub const TRACE_LINE_FIELDS: usize = 3;

/// Radix used for the address field
pub const ADDRESS_RADIX: u32 = 16;
