//! Error types for inflammation data ingestion.

use std::path::PathBuf;

use inflammation_model::ModelError;
use thiserror::Error;

/// Errors that can occur while loading inflammation data.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Input path does not exist.
    #[error("input not found: {path}")]
    NotFound { path: PathBuf },

    /// Failed to read directory entries.
    #[error("failed to read directory {path}: {source}")]
    DirectoryRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === CSV Parsing Errors ===
    /// The CSV reader failed (I/O or malformed quoting).
    #[error("failed to read CSV {source_name}: {source}")]
    Csv {
        source_name: String,
        #[source]
        source: csv::Error,
    },

    /// A field could not be parsed as a number.
    #[error("invalid reading '{value}' in {source_name} at record {record}, column {column}")]
    InvalidNumber {
        source_name: String,
        /// 1-based record number.
        record: u64,
        /// 1-based column number.
        column: usize,
        value: String,
    },

    // === Table Errors ===
    /// The parsed rows do not form a valid table.
    #[error("invalid table in {source_name}: {source}")]
    Table {
        source_name: String,
        #[source]
        source: ModelError,
    },
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
