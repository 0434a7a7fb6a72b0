//! Database and input schema definitions
//!
//! This module provides constants for the table and column names shared by
//! the loader, cleaner, and persister.

/// Output table schema
pub mod disaster_messages {
    /// Table name
    pub const TABLE: &str = "disaster_messages";
}

/// Columns required in the input CSV files
pub mod input {
    /// Join key column, required in both inputs
    pub const ID: &str = "id";
    /// Message text column
    pub const MESSAGE: &str = "message";
    /// Untranslated message column (optional in the messages file)
    pub const ORIGINAL: &str = "original";
    /// Message genre column
    pub const GENRE: &str = "genre";
    /// Compound category labels column
    pub const CATEGORIES: &str = "categories";
}

/// Separator between category tokens in the compound column
pub const CATEGORY_SEPARATOR: char = ';';
/// Separator between a category name and its value within a token
pub const NAME_VALUE_SEPARATOR: char = '-';
