//! Summarize command implementation.
//!
//! The summarize command:
//! 1. Loads the partial-access trace
//! 2. Loads the full-access trace
//! 3. Computes per-block metrics
//! 4. Writes the tab-separated report
//!
//! The output file is only created after both loads complete, so a
//! malformed trace never leaves a partial report behind.

use crate::aggregator::{summarize_table, AggregationTable};
use crate::output::{format_table, write_summary};
use crate::parser::{load_trace, TraceKind};
use anyhow::{Context, Result};
use log::{debug, info};
use std::path::PathBuf;
use std::time::Instant;

/// Arguments for the summarize command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct SummarizeArgs {
    /// Path to the partial-access trace file
    pub partial_trace: PathBuf,

    /// Path to the full-access trace file
    pub full_trace: PathBuf,

    /// Path for the tab-separated summary output
    pub output: PathBuf,

    /// Print the full aggregation table to stdout
    pub dump_table: bool,

    /// Print a run summary to stdout
    pub print_summary: bool,
}

/// Execute the summarize command
///
/// **Public** - main entry point called from main.rs
///
/// # Arguments
/// * `args` - Summarize command arguments
///
/// # Returns
/// Ok if the report was written, Err with context if any step fails
///
/// # Errors
/// * Trace file read or tokenization errors
/// * Report write errors
pub fn execute_summarize(args: SummarizeArgs) -> Result<()> {
    let start_time = Instant::now();

    info!("Partial trace: {}", args.partial_trace.display());
    info!("Full trace:    {}", args.full_trace.display());

    let mut table = AggregationTable::new();

    // Step 1: Load partial trace
    info!("Step 1/3: Loading partial trace...");
    let partial_stats = load_trace(&args.partial_trace, TraceKind::Partial, &mut table)
        .context("Failed to load partial trace")?;

    // Step 2: Load full trace
    info!("Step 2/3: Loading full trace...");
    let full_stats = load_trace(&args.full_trace, TraceKind::Full, &mut table)
        .context("Failed to load full trace")?;

    debug!(
        "Aggregated {} blocks, {} addresses",
        table.block_count(),
        table.address_count()
    );

    // Diagnostic dump (if requested)
    if args.dump_table {
        print!("{}", format_table(&table));
    }

    // Step 3: Summarize and write report
    info!("Step 3/3: Writing summary report...");
    let summaries = summarize_table(&table);

    write_summary(&summaries, &args.output).context("Failed to write summary report")?;

    info!("✓ Summary written to: {}", args.output.display());

    let elapsed = start_time.elapsed();

    if args.print_summary {
        println!("\n{}", "=".repeat(80));
        println!("RUN SUMMARY");
        println!("{}", "=".repeat(80));
        println!("Partial records: {}", partial_stats.records);
        println!("Full records:    {}", full_stats.records);
        println!("Blocks:          {}", table.block_count());
        println!("Addresses:       {}", table.address_count());
        println!("Elapsed:         {:.2}s", elapsed.as_secs_f64());
        println!("{}", "=".repeat(80));
    }

    info!("Summarization completed in {:.2}s", elapsed.as_secs_f64());

    Ok(())
}

/// Validate summarize arguments
///
/// **Public** - can be called before execute_summarize for early validation
///
/// # Arguments
/// * `args` - Arguments to validate
///
/// # Returns
/// Ok if arguments are valid, Err with message if not
pub fn validate_args(args: &SummarizeArgs) -> Result<()> {
    if args.partial_trace.as_os_str().is_empty() {
        anyhow::bail!("Partial trace path cannot be empty");
    }

    if args.full_trace.as_os_str().is_empty() {
        anyhow::bail!("Full trace path cannot be empty");
    }

    if args.output.as_os_str().is_empty() {
        anyhow::bail!("Output path cannot be empty");
    }

    // Refuse to clobber an input with the report
    if args.output == args.partial_trace || args.output == args.full_trace {
        anyhow::bail!("Output path must differ from both trace paths");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_args() -> SummarizeArgs {
        SummarizeArgs {
            partial_trace: PathBuf::from("partial.trace"),
            full_trace: PathBuf::from("full.trace"),
            output: PathBuf::from("summary.tsv"),
            dump_table: false,
            print_summary: false,
        }
    }

    #[test]
    fn test_validate_args_valid() {
        assert!(validate_args(&valid_args()).is_ok());
    }

    #[test]
    fn test_validate_args_empty_partial() {
        let args = SummarizeArgs {
            partial_trace: PathBuf::new(),
            ..valid_args()
        };
        assert!(validate_args(&args).is_err());
    }

    #[test]
    fn test_validate_args_empty_full() {
        let args = SummarizeArgs {
            full_trace: PathBuf::new(),
            ..valid_args()
        };
        assert!(validate_args(&args).is_err());
    }

    #[test]
    fn test_validate_args_empty_output() {
        let args = SummarizeArgs {
            output: PathBuf::new(),
            ..valid_args()
        };
        assert!(validate_args(&args).is_err());
    }

    #[test]
    fn test_validate_args_output_clobbers_input() {
        let args = SummarizeArgs {
            output: PathBuf::from("partial.trace"),
            ..valid_args()
        };
        assert!(validate_args(&args).is_err());
    }
}
