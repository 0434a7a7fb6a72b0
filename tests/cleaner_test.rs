use disaster_etl::cleaner;
use disaster_etl::error::EtlError;
use disaster_etl::models::{Table, Value};

fn joined_table(rows: &[(i64, &str, &str, &str)]) -> Table {
    let mut table = Table::new(vec![
        "id".to_string(),
        "message".to_string(),
        "genre".to_string(),
        "categories".to_string(),
    ]);
    for (id, message, genre, categories) in rows {
        table.push_row(vec![
            Value::Int(*id),
            Value::Text((*message).to_string()),
            Value::Text((*genre).to_string()),
            Value::Text((*categories).to_string()),
        ]);
    }
    table
}

#[test]
fn test_clean_matches_specified_example() {
    let cleaned =
        cleaner::clean(joined_table(&[(1, "help", "direct", "related-1;request-0")])).expect("Failed to clean");

    assert_eq!(cleaned.columns(), &["id", "message", "genre", "related", "request"]);
    assert_eq!(
        cleaned.rows()[0],
        vec![
            Value::Int(1),
            Value::Text("help".to_string()),
            Value::Text("direct".to_string()),
            Value::Int(1),
            Value::Int(0),
        ]
    );
}

#[test]
fn test_category_value_two_passes_through_unclamped() {
    // Documented latent behavior: the trailing character is trusted, so a
    // value outside {0, 1} is stored as-is rather than rejected or clamped
    let cleaned =
        cleaner::clean(joined_table(&[(1, "help", "direct", "related-2;request-1")])).expect("Failed to clean");

    let related = cleaned.column_index("related").expect("Missing related column");
    assert_eq!(cleaned.value(0, related), Some(&Value::Int(2)));
}

#[test]
fn test_column_set_derived_from_first_row_only() {
    let cleaned = cleaner::clean(joined_table(&[
        (1, "a", "direct", "related-1;request-0"),
        (2, "b", "news", "aid-1;related-0"),
    ]))
    .expect("Failed to clean");

    // Second row's different vocabulary does not change the columns; its
    // values land positionally under row 0's names
    assert_eq!(cleaned.columns(), &["id", "message", "genre", "related", "request"]);
    let related = cleaned.column_index("related").expect("Missing related column");
    assert_eq!(cleaned.value(1, related), Some(&Value::Int(1)));
}

#[test]
fn test_dedup_is_idempotent() {
    let rows = &[
        (1, "help", "direct", "related-1;request-0"),
        (1, "help", "direct", "related-1;request-0"),
        (2, "water", "news", "related-0;request-1"),
    ];

    let once = cleaner::clean(joined_table(rows)).expect("Failed to clean");
    assert_eq!(once.len(), 2);

    // Cleaning the already-unique equivalent changes nothing further
    let unique_rows = &[
        (1, "help", "direct", "related-1;request-0"),
        (2, "water", "news", "related-0;request-1"),
    ];
    let twice = cleaner::clean(joined_table(unique_rows)).expect("Failed to clean");
    assert_eq!(twice.len(), 2);
    assert_eq!(once.rows(), twice.rows());
}

#[test]
fn test_clean_preserves_row_count_without_duplicates() {
    let cleaned = cleaner::clean(joined_table(&[
        (1, "a", "direct", "related-1"),
        (2, "b", "news", "related-0"),
        (3, "c", "social", "related-1"),
    ]))
    .expect("Failed to clean");
    assert_eq!(cleaned.len(), 3);
}

#[test]
fn test_malformed_token_is_parse_error() {
    let result = cleaner::clean(joined_table(&[(1, "help", "direct", "related-")]));
    assert!(matches!(result, Err(EtlError::Parse { .. })));
}
