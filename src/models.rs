//! Data models for tabular message handling
//!
//! This module contains the in-memory table representation used by the
//! pipeline stages: a dynamically-typed cell [`Value`] and a column-ordered
//! [`Table`] of rows.

use std::collections::HashSet;

use rusqlite::types::ToSqlOutput;
use rusqlite::ToSql;

/// A single cell in a table
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Value {
    /// Integer cell
    Int(i64),
    /// Text cell
    Text(String),
    /// Absent cell
    Null,
}

impl Value {
    /// Build a value from a raw CSV field; empty fields become `Null`.
    #[must_use]
    pub fn from_csv_field(field: &str) -> Self {
        if field.is_empty() {
            Self::Null
        } else {
            Self::Text(field.to_string())
        }
    }

    /// True if this cell is absent
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

impl ToSql for Value {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        match self {
            Self::Int(i) => Ok(ToSqlOutput::from(*i)),
            Self::Text(s) => Ok(ToSqlOutput::from(s.as_str())),
            Self::Null => Ok(ToSqlOutput::Owned(rusqlite::types::Value::Null)),
        }
    }
}

/// An in-memory table: ordered column names plus rows of cells.
///
/// Rows always have exactly one cell per column.
#[derive(Debug, Clone, Default)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Vec<Value>>,
}

impl Table {
    /// Create an empty table with the given column names
    #[must_use]
    pub fn new(columns: Vec<String>) -> Self {
        Self { columns, rows: Vec::new() }
    }

    /// Column names in order
    #[must_use]
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Rows in order
    #[must_use]
    pub fn rows(&self) -> &[Vec<Value>] {
        &self.rows
    }

    /// Number of rows
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True if the table has no rows
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Find the position of a column by name
    #[must_use]
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Append a row. Short rows are padded with `Null`, long rows truncated,
    /// so the one-cell-per-column invariant holds.
    pub fn push_row(&mut self, mut row: Vec<Value>) {
        row.resize(self.columns.len(), Value::Null);
        self.rows.push(row);
    }

    /// Cell at (row, column), if present
    #[must_use]
    pub fn value(&self, row: usize, column: usize) -> Option<&Value> {
        self.rows.get(row).and_then(|r| r.get(column))
    }

    /// Convert every column whose non-null cells all parse as `i64` into an
    /// integer column. Mirrors the type inference a dataframe loader does,
    /// so join keys and label values compare numerically.
    pub fn infer_integer_columns(&mut self) {
        for col in 0..self.columns.len() {
            let all_int = self.rows.iter().all(|row| match &row[col] {
                Value::Text(s) => s.trim().parse::<i64>().is_ok(),
                Value::Int(_) | Value::Null => true,
            });
            if !all_int {
                continue;
            }
            for row in &mut self.rows {
                if let Value::Text(s) = &row[col] {
                    if let Ok(i) = s.trim().parse::<i64>() {
                        row[col] = Value::Int(i);
                    }
                }
            }
        }
    }

    /// True if every cell in the column is `Int` or `Null`
    #[must_use]
    pub fn column_is_integer(&self, column: usize) -> bool {
        self.rows
            .iter()
            .all(|row| matches!(row[column], Value::Int(_) | Value::Null))
    }

    /// Remove a column and its cells, returning the removed cells in row order
    pub fn drop_column(&mut self, column: usize) -> Vec<Value> {
        self.columns.remove(column);
        self.rows.iter_mut().map(|row| row.remove(column)).collect()
    }

    /// Append a new column with one value per existing row
    pub fn append_column(&mut self, name: String, values: Vec<Value>) {
        debug_assert_eq!(values.len(), self.rows.len());
        self.columns.push(name);
        for (row, value) in self.rows.iter_mut().zip(values) {
            row.push(value);
        }
    }

    /// Remove rows that are identical across every column, keeping the first
    /// occurrence. Relative order of surviving rows is preserved.
    pub fn dedup_exact(&mut self) {
        let mut seen: HashSet<Vec<Value>> = HashSet::with_capacity(self.rows.len());
        self.rows.retain(|row| seen.insert(row.clone()));
    }
}
