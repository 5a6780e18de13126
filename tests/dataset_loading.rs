//! 数据集加载集成测试

use wordbook::{load_records, DictionaryError, ErrorCategory, TrieIndex};

#[allow(dead_code)]
mod common {
    include!("common/mod.rs");
}

use common::{fixture_path, TestDataGenerator};

#[test]
fn test_load_fixture_dataset() {
    let records = load_records(fixture_path()).expect("Fixture should load");
    assert_eq!(records.len(), 6);
    assert_eq!(records[0].word, "apple");
    assert_eq!(records[0].example1, "She ate an apple.");

    let index = TrieIndex::from_records(records).expect("Index should build");
    assert_eq!(index.len(), 6);
    assert_eq!(index.autocomplete("ap").unwrap(), vec!["Apply", "Apple"]);
    assert_eq!(index.autocomplete("ca").unwrap(), vec!["Cat", "Cart", "Car"]);
}

#[test]
fn test_load_canonical_field_names() {
    let file = TestDataGenerator::write_temp(TestDataGenerator::canonical_dataset());
    let records = load_records(file.path()).expect("Dataset should load");

    let index = TrieIndex::from_records(records).unwrap();
    let definition = index
        .lookup_meaning("TRIE")
        .unwrap()
        .expect("Trie should be present");
    assert_eq!(definition.meaning, "A prefix tree.");
    assert_eq!(definition.usage1, "Build a trie.");
    assert_eq!(index.autocomplete("tri").unwrap(), vec!["Trip", "Trie"]);
}

#[test]
fn test_missing_field_aborts_load() {
    let file = TestDataGenerator::write_temp(TestDataGenerator::dataset_missing_meaning());
    let error = load_records(file.path()).unwrap_err();

    assert!(matches!(
        error,
        DictionaryError::MissingField { index: 1, field: "meaning" }
    ));
    assert!(error.is_fatal());
}

#[test]
fn test_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let error = load_records(dir.path().join("absent.json")).unwrap_err();
    assert_eq!(error.category(), ErrorCategory::Construction);
}

#[test]
fn test_malformed_json() {
    let file = TestDataGenerator::write_temp("{ not json");
    assert!(matches!(
        load_records(file.path()),
        Err(DictionaryError::Dataset(_))
    ));
}
