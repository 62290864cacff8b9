//! Mem Trace Summary CLI
//!
//! A batch summarization tool for memory-access traces.
//! Aggregates a partial-access trace and a full-access trace into
//! one tab-separated summary line per block.

use anyhow::Result;
use clap::Parser;
use env_logger::Env;
use std::path::PathBuf;

use mem_trace_summary::commands::{execute_summarize, validate_args, SummarizeArgs};

/// Mem Trace Summary - per-block access statistics from trace files
#[derive(Parser, Debug)]
#[command(name = "mem-trace")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the partial-access trace file
    partial_trace: PathBuf,

    /// Path to the full-access trace file
    full_trace: PathBuf,

    /// Path for the tab-separated summary output
    output: PathBuf,

    /// Print the full aggregation table to stdout (diagnostic)
    #[arg(long)]
    dump: bool,

    /// Print a run summary to stdout
    #[arg(long)]
    summary: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    // Parse CLI arguments (clap prints usage and exits non-zero on
    // missing positionals)
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    // Build command args
    let args = SummarizeArgs {
        partial_trace: cli.partial_trace,
        full_trace: cli.full_trace,
        output: cli.output,
        dump_table: cli.dump,
        print_summary: cli.summary,
    };

    // Validate args first
    validate_args(&args)?;

    // Execute summarization
    execute_summarize(args)?;

    Ok(())
}
