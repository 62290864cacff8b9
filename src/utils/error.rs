//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while tokenizing a single trace line
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("expected 3 whitespace-separated fields, found {0}")]
    FieldCount(usize),

    #[error("invalid hexadecimal address: {0:?}")]
    InvalidAddress(String),

    #[error("invalid decimal count: {0:?}")]
    InvalidCount(String),

    #[error("invalid decimal block id: {0:?}")]
    InvalidBlockId(String),
}

/// Errors that can occur while loading a trace file
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("failed to read trace file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed trace line {path}:{line}: {source}")]
    MalformedLine {
        path: PathBuf,
        line: usize,
        #[source]
        source: ParseError,
    },
}

/// Errors that can occur during file output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),
}
