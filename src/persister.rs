//! Persisting stage: full-replace write into an embedded SQLite store
//!
//! The cleaned table is written as the single `disaster_messages` relation.
//! An existing relation of that name is dropped and recreated, so the store
//! always reflects exactly the latest run. No surrogate row-index column is
//! written.

use std::fs;
use std::path::Path;
use std::time::Duration;

use rusqlite::{params_from_iter, Connection};
use tracing::{debug, info};

use crate::error::Result;
use crate::models::Table;
use crate::schema::disaster_messages;
use crate::validation::InputValidator;

/// Default SQLite busy timeout when no configuration is supplied
pub const DEFAULT_BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Handle to the destination SQLite store
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Open or create the store at the given path, creating the parent
    /// directory if it does not exist.
    pub fn open(path: &Path, busy_timeout: Duration) -> Result<Self> {
        InputValidator::validate_destination(path)?;
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let conn = Connection::open(path)?;
        conn.busy_timeout(busy_timeout)?;
        debug!(path = %path.display(), "Opened SQLite store");
        Ok(Self { conn })
    }

    /// Write a table as a named relation, dropping and recreating it if it
    /// already exists. All rows go in inside one transaction.
    pub fn replace_table(&mut self, name: &str, table: &Table) -> Result<()> {
        let column_defs: Vec<String> = table
            .columns()
            .iter()
            .enumerate()
            .map(|(i, column)| {
                let sql_type = if table.column_is_integer(i) { "INTEGER" } else { "TEXT" };
                format!("{} {sql_type}", quote_identifier(column))
            })
            .collect();

        let tx = self.conn.transaction()?;
        tx.execute_batch(&format!("DROP TABLE IF EXISTS {}", quote_identifier(name)))?;
        tx.execute_batch(&format!(
            "CREATE TABLE {} ({})",
            quote_identifier(name),
            column_defs.join(", ")
        ))?;

        {
            let placeholders = vec!["?"; table.columns().len()].join(", ");
            let mut stmt = tx.prepare(&format!(
                "INSERT INTO {} VALUES ({placeholders})",
                quote_identifier(name)
            ))?;
            for row in table.rows() {
                stmt.execute(params_from_iter(row.iter()))?;
            }
        }

        tx.commit()?;
        info!(table = name, rows = table.len(), "Replaced table in store");
        Ok(())
    }
}

/// Write the cleaned table to the `disaster_messages` relation at the given
/// destination, with the default busy timeout.
pub fn save(table: &Table, destination: &Path) -> Result<()> {
    save_with_timeout(table, destination, DEFAULT_BUSY_TIMEOUT)
}

/// Write the cleaned table with an explicit busy timeout from configuration.
pub fn save_with_timeout(table: &Table, destination: &Path, busy_timeout: Duration) -> Result<()> {
    let mut store = SqliteStore::open(destination, busy_timeout)?;
    store.replace_table(disaster_messages::TABLE, table)
}

/// Quote a SQL identifier, doubling embedded quotes
fn quote_identifier(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quote_identifier_escapes_quotes() {
        assert_eq!(quote_identifier("related"), "\"related\"");
        assert_eq!(quote_identifier("a\"b"), "\"a\"\"b\"");
    }
}
