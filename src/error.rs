//! Error types for json2csv

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while converting a JSON document to CSV
#[derive(Error, Debug)]
pub enum Error {
    /// Input is not a non-empty array of records, or the first record has no fields
    #[error("input must be a non-empty sequence of records with at least one field")]
    InvalidInput,

    /// Input text is not valid JSON
    #[error("invalid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// Failed to read the input file
    #[error("failed to read file '{path}': {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to write the output file
    #[error("failed to write file '{path}': {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}
