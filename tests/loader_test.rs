use std::fs;
use std::path::PathBuf;

use disaster_etl::error::EtlError;
use disaster_etl::loader;
use disaster_etl::models::Value;
use tempfile::TempDir;

fn write_fixture(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).expect("Failed to write fixture");
    path
}

#[test]
fn test_load_joins_on_id() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    let messages = write_fixture(
        &dir,
        "messages.csv",
        "id,message,original,genre\n\
         1,help us,aidez nous,direct\n\
         2,water needed,,news\n\
         3,no labels for me,,social\n",
    );
    let categories = write_fixture(
        &dir,
        "categories.csv",
        "id,categories\n\
         1,related-1;request-0\n\
         2,related-1;request-1\n\
         9,related-0;request-0\n",
    );

    let table = loader::load(&messages, &categories).expect("Failed to load");

    // Only ids present in both inputs survive, join key is not duplicated
    assert_eq!(table.len(), 2);
    assert_eq!(table.columns(), &["id", "message", "original", "genre", "categories"]);
    for row in table.rows() {
        assert!(matches!(row[0], Value::Int(1 | 2)));
    }
}

#[test]
fn test_load_duplicate_ids_multiply() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    let messages = write_fixture(&dir, "messages.csv", "id,message,genre\n1,help,direct\n");
    let categories = write_fixture(
        &dir,
        "categories.csv",
        "id,categories\n1,related-1\n1,related-0\n",
    );

    let table = loader::load(&messages, &categories).expect("Failed to load");
    assert_eq!(table.len(), 2);
}

#[test]
fn test_missing_input_file_is_not_found() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    let categories = write_fixture(&dir, "categories.csv", "id,categories\n1,related-1\n");

    let result = loader::load(&dir.path().join("missing.csv"), &categories);
    assert!(matches!(result, Err(EtlError::NotFound(_))));
}

#[test]
fn test_missing_id_column_is_schema_error() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    let messages = write_fixture(&dir, "messages.csv", "id,message,genre\n1,help,direct\n");
    let categories = write_fixture(&dir, "categories.csv", "categories\nrelated-1\n");

    let result = loader::load(&messages, &categories);
    assert!(matches!(result, Err(EtlError::Schema(_))));
}

#[test]
fn test_empty_cells_load_as_null() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    let messages = write_fixture(&dir, "messages.csv", "id,message,original,genre\n1,help,,direct\n");
    let categories = write_fixture(&dir, "categories.csv", "id,categories\n1,related-1\n");

    let table = loader::load(&messages, &categories).expect("Failed to load");
    let original = table.column_index("original").expect("Missing original column");
    assert_eq!(table.value(0, original), Some(&Value::Null));
}
