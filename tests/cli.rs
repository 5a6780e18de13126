//! 命令行工具集成测试

use assert_cmd::Command;

#[allow(dead_code)]
mod common {
    include!("common/mod.rs");
}

use common::{fixture_path, TestDataGenerator};

fn wordbook() -> Command {
    Command::cargo_bin("wordbook").expect("Binary should be built")
}

#[test]
fn test_lookup_prints_definition() {
    let output = wordbook()
        .args(["lookup", "CAT", "--dataset"])
        .arg(fixture_path())
        .output()
        .unwrap();

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["meaning"], "A small domesticated carnivorous mammal.");
    assert_eq!(value["usage1"], "The cat slept all day.");
}

#[test]
fn test_lookup_not_found() {
    let output = wordbook()
        .args(["lookup", "zebra", "--dataset"])
        .arg(fixture_path())
        .output()
        .unwrap();

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["error"], "word not found");
}

#[test]
fn test_suggest_one_per_line() {
    wordbook()
        .args(["suggest", "ca", "--dataset"])
        .arg(fixture_path())
        .assert()
        .success()
        .stdout("Cat\nCart\nCar\n");
}

#[test]
fn test_stats() {
    let output = wordbook()
        .args(["stats", "--dataset"])
        .arg(fixture_path())
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("words: 6"));
}

#[test]
fn test_empty_word_exits_with_error() {
    let output = wordbook()
        .args(["lookup", "  ", "--dataset"])
        .arg(fixture_path())
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(!output.stderr.is_empty());
}

#[test]
fn test_invalid_dataset_exits_with_error() {
    let file = TestDataGenerator::write_temp(TestDataGenerator::dataset_missing_meaning());

    wordbook()
        .args(["stats", "--dataset"])
        .arg(file.path())
        .assert()
        .code(1);
}
