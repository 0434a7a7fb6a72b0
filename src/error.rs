//! Error types for the disaster-etl library.
//!
//! This module provides custom error types using `thiserror` for better error handling
//! and more specific error messages throughout the pipeline.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while running the ETL pipeline.
#[derive(Error, Debug)]
pub enum EtlError {
    /// Input file missing or not a regular file
    #[error("Input file not found: {}", .0.display())]
    NotFound(PathBuf),

    /// A required column is missing from an input table
    #[error("Schema error: {0}")]
    Schema(String),

    /// A category token could not be coerced to an integer
    #[error("Failed to parse category token {token:?} in row {row}")]
    Parse { token: String, row: usize },

    /// File I/O errors
    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV parsing errors
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// SQLite storage errors
    #[error("Storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Convenience type alias for Result with EtlError
pub type Result<T> = std::result::Result<T, EtlError>;
