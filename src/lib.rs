//! Disaster ETL - Message and Category Label Pipeline
//!
//! A Rust library for loading disaster response messages and their category
//! labels, reshaping the compound label column into per-category integer
//! columns, and persisting the result into SQLite.
//!
//! # Pipeline
//!
//! - Loader: read both CSV files and inner-join them on `id`
//! - Cleaner: expand `categories`, coerce values, remove exact duplicates
//! - Persister: full-replace write of the `disaster_messages` table

/// Cleaning stage: category expansion and deduplication
pub mod cleaner;
/// Configuration management
pub mod config;
/// Error types
pub mod error;
/// Loading stage: CSV ingest and the inner join
pub mod loader;
/// Logging setup and utilities
pub mod logging;
/// Data models and table structures
pub mod models;
/// Persisting stage: SQLite table-replace write
pub mod persister;
/// Table and column name definitions
pub mod schema;
/// Input validation
pub mod validation;

// Re-export key components for easier access
pub use cleaner::clean;
pub use error::{EtlError, Result};
pub use loader::load;
pub use models::{Table, Value};
pub use persister::save;
