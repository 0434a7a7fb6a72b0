//! Loading stage: CSV ingest and the inner join on `id`
//!
//! Reads the messages and categories CSV files into in-memory tables and
//! joins them. Only ids present in both inputs survive; duplicate ids on
//! either side multiply cartesian-style, with no deduplication before the
//! join.

use std::collections::HashMap;
use std::path::Path;

use tracing::{debug, info};

use crate::error::{EtlError, Result};
use crate::models::{Table, Value};
use crate::schema::input;
use crate::validation::InputValidator;

/// Read a CSV file with a header row into a [`Table`].
///
/// All cells start as text (empty cells become `Null`); columns whose every
/// non-null cell parses as an integer are then coerced to integer columns.
pub fn read_csv(path: &Path) -> Result<Table> {
    InputValidator::validate_input_file(path)?;

    let mut reader = csv::Reader::from_path(path)?;
    let headers: Vec<String> = reader.headers()?.iter().map(ToString::to_string).collect();

    let mut table = Table::new(headers);
    for record in reader.records() {
        let record = record?;
        table.push_row(record.iter().map(Value::from_csv_field).collect());
    }
    table.infer_integer_columns();

    debug!(
        path = %path.display(),
        rows = table.len(),
        columns = table.columns().len(),
        "Read CSV file"
    );
    Ok(table)
}

/// Load both input files and inner-join them on `id`.
///
/// The joined table carries the messages columns followed by the categories
/// columns minus the duplicated join key. Messages-row order is preserved;
/// each messages row expands to one output row per matching categories row.
pub fn load(messages_path: &Path, categories_path: &Path) -> Result<Table> {
    let messages = read_csv(messages_path)?;
    let categories = read_csv(categories_path)?;

    let joined = inner_join(&messages, &categories, input::ID)?;
    info!(
        messages = messages.len(),
        categories = categories.len(),
        joined = joined.len(),
        "Joined input tables"
    );
    Ok(joined)
}

/// Inner join of two tables on a shared key column.
fn inner_join(left: &Table, right: &Table, key: &str) -> Result<Table> {
    let left_key = left
        .column_index(key)
        .ok_or_else(|| EtlError::Schema(format!("Messages file is missing column {key:?}")))?;
    let right_key = right
        .column_index(key)
        .ok_or_else(|| EtlError::Schema(format!("Categories file is missing column {key:?}")))?;

    // Index right rows by key value, preserving file order within a key
    let mut right_index: HashMap<&Value, Vec<usize>> = HashMap::new();
    for (i, row) in right.rows().iter().enumerate() {
        right_index.entry(&row[right_key]).or_default().push(i);
    }

    let mut columns: Vec<String> = left.columns().to_vec();
    for (i, column) in right.columns().iter().enumerate() {
        if i != right_key {
            columns.push(column.clone());
        }
    }

    let mut joined = Table::new(columns);
    for left_row in left.rows() {
        let Some(matches) = right_index.get(&left_row[left_key]) else {
            continue;
        };
        for &right_i in matches {
            let mut row = left_row.clone();
            for (i, value) in right.rows()[right_i].iter().enumerate() {
                if i != right_key {
                    row.push(value.clone());
                }
            }
            joined.push_row(row);
        }
    }

    Ok(joined)
}
