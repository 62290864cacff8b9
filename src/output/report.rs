//! Tab-separated summary report writer.
//!
//! One line per block: `<block_id>\t<partial_fraction>\t<access_ratio>\n`,
//! blocks in ascending id order.

use crate::aggregator::BlockSummary;
use crate::utils::error::OutputError;
use log::{debug, info};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Write the summary report to a file
///
/// **Public** - main entry point for report output
///
/// # Arguments
/// * `summaries` - Per-block summaries, already in output order
/// * `output_path` - Path to the report file
///
/// # Returns
/// Ok if the file was written completely
///
/// # Errors
/// * `OutputError::WriteFailed` - I/O error during write
/// * `OutputError::InvalidPath` - Path is empty or names a directory
pub fn write_summary(
    summaries: &[BlockSummary],
    output_path: impl AsRef<Path>,
) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();

    info!("Writing summary to: {}", output_path.display());

    validate_output_path(output_path)?;

    let file = File::create(output_path).map_err(OutputError::WriteFailed)?;
    let mut writer = BufWriter::new(file);

    for summary in summaries {
        writer.write_all(summary_line(summary).as_bytes())?;
    }

    writer.flush()?;

    debug!("Wrote {} summary lines", summaries.len());

    Ok(())
}

/// Render one block summary as its output line, newline included
///
/// **Public** - also used directly by tests
pub fn summary_line(summary: &BlockSummary) -> String {
    format!(
        "{}\t{}\t{}\n",
        summary.block_id,
        format_ratio(summary.partial_fraction),
        format_ratio(summary.access_ratio)
    )
}

/// Render a floating-point metric as decimal text
///
/// **Public** - shared by the report and the diagnostic dump
///
/// Whole values keep a trailing `.0` (`1.0`, not `1`) so a fraction is
/// always recognizable as one; the NaN sentinel renders as `NaN`.
pub fn format_ratio(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value == value.trunc() && value.is_finite() {
        format!("{:.1}", value)
    } else {
        format!("{}", value)
    }
}

/// Validate that the output path is usable
///
/// **Private** - internal validation
fn validate_output_path(path: &Path) -> Result<(), OutputError> {
    if path.as_os_str().is_empty() {
        return Err(OutputError::InvalidPath("Path is empty".to_string()));
    }

    if path.exists() && path.is_dir() {
        return Err(OutputError::InvalidPath(format!(
            "Path is a directory: {}",
            path.display()
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn summary(block_id: u64, partial_fraction: f64, access_ratio: f64) -> BlockSummary {
        BlockSummary {
            block_id,
            partial_fraction,
            access_ratio,
        }
    }

    #[test]
    fn test_summary_line_spec_example() {
        let line = summary_line(&summary(100, 0.5, 0.25));
        assert_eq!(line, "100\t0.5\t0.25\n");
    }

    #[test]
    fn test_summary_line_whole_values() {
        let line = summary_line(&summary(7, 1.0, 0.0));
        assert_eq!(line, "7\t1.0\t0.0\n");
    }

    #[test]
    fn test_summary_line_nan_sentinel() {
        let line = summary_line(&summary(9, 1.0, f64::NAN));
        assert_eq!(line, "9\t1.0\tNaN\n");
    }

    #[test]
    fn test_format_ratio_fractional() {
        assert_eq!(format_ratio(0.3333333333333333), "0.3333333333333333");
    }

    #[test]
    fn test_validate_output_path_empty() {
        assert!(validate_output_path(Path::new("")).is_err());
    }

    #[test]
    fn test_validate_output_path_directory() {
        let temp_dir = tempfile::tempdir().unwrap();
        assert!(validate_output_path(temp_dir.path()).is_err());
    }

    #[test]
    fn test_write_and_read_back() {
        let temp_file = tempfile::NamedTempFile::new().unwrap();
        let summaries = vec![summary(100, 0.5, 0.25), summary(200, 1.0, f64::NAN)];

        write_summary(&summaries, temp_file.path()).unwrap();

        let content = std::fs::read_to_string(temp_file.path()).unwrap();
        assert_eq!(content, "100\t0.5\t0.25\n200\t1.0\tNaN\n");
    }

    #[test]
    fn test_write_empty_summaries() {
        let temp_file = tempfile::NamedTempFile::new().unwrap();
        write_summary(&[], temp_file.path()).unwrap();
        assert_eq!(std::fs::read_to_string(temp_file.path()).unwrap(), "");
    }
}
