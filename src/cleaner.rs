//! Cleaning stage: category expansion, value coercion, deduplication
//!
//! Replaces the compound `categories` column with one integer column per
//! category name. The category vocabulary (names, count, order) is derived
//! from the first data row only and applied uniformly; rows with a
//! different token count are logged and padded/truncated rather than
//! rejected. Values are the integer parse of each token's final character
//! and are deliberately not clamped to {0, 1}.

use tracing::{info, warn};

use crate::error::{EtlError, Result};
use crate::models::{Table, Value};
use crate::schema::{input, CATEGORY_SEPARATOR, NAME_VALUE_SEPARATOR};

/// Expand the `categories` column and remove exact-duplicate rows.
pub fn clean(mut table: Table) -> Result<Table> {
    let categories_idx = table.column_index(input::CATEGORIES).ok_or_else(|| {
        EtlError::Schema(format!("Joined table is missing column {:?}", input::CATEGORIES))
    })?;
    let compound = table.drop_column(categories_idx);

    if compound.is_empty() {
        // No rows means no row 0 to derive a vocabulary from
        return Ok(table);
    }

    let names = category_names(&compound[0]);
    let mut expanded: Vec<Vec<Value>> = vec![Vec::with_capacity(compound.len()); names.len()];

    for (row, cell) in compound.iter().enumerate() {
        let tokens = tokenize(cell);
        if tokens.len() != names.len() {
            warn!(
                row,
                found = tokens.len(),
                expected = names.len(),
                "Category token count differs from first row; row will misalign"
            );
        }
        for (column, values) in expanded.iter_mut().enumerate() {
            // Short rows pad with NULL, extra tokens are dropped
            match tokens.get(column) {
                Some(token) => values.push(coerce_token(token, row)?),
                None => values.push(Value::Null),
            }
        }
    }

    for (name, values) in names.into_iter().zip(expanded) {
        table.append_column(name, values);
    }

    let before = table.len();
    table.dedup_exact();
    info!(rows = table.len(), duplicates = before - table.len(), "Cleaned table");

    Ok(table)
}

/// Derive the category column names from the first row's compound cell:
/// the substring before each token's first `-`. A token without a `-`
/// contributes the whole token.
fn category_names(first_row: &Value) -> Vec<String> {
    tokenize(first_row)
        .iter()
        .map(|token| {
            token
                .split(NAME_VALUE_SEPARATOR)
                .next()
                .unwrap_or(token)
                .to_string()
        })
        .collect()
}

/// Split a compound cell into category tokens. Absent cells have no tokens.
fn tokenize(cell: &Value) -> Vec<String> {
    match cell {
        Value::Text(s) => s.split(CATEGORY_SEPARATOR).map(ToString::to_string).collect(),
        Value::Int(i) => vec![i.to_string()],
        Value::Null => Vec::new(),
    }
}

/// Coerce a category token to its integer value: the integer parse of the
/// token's last character. Not clamped, so `related-2` yields 2.
fn coerce_token(token: &str, row: usize) -> Result<Value> {
    token
        .chars()
        .last()
        .and_then(|c| c.to_digit(10))
        .map(|d| Value::Int(i64::from(d)))
        .ok_or_else(|| EtlError::Parse { token: token.to_string(), row })
}
