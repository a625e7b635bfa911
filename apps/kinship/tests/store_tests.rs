//! Integration tests for record store loading and configuration.
//!
//! Uses tempfile-backed files so every test works on a real filesystem
//! path the way the CLI does.

// Allow unwrap and panic in tests - these are standard for test code
#![allow(clippy::unwrap_used, clippy::panic)]

use kinship::config::AppConfig;
use kinship::store;
use kinship_core::{KinshipError, PersonId, ancestors};
use std::path::PathBuf;
use tempfile::TempDir;

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

const FAMILY: &str = r#"{
    "persons": [
        { "id": 10, "name": "Gloria", "born": "1950-03-02" },
        { "id": 11, "name": "Hank", "born": "1948-11-20" },
        { "id": 20, "name": "Maria", "born": "1975-07-01" },
        { "id": 30 }
    ],
    "parent_child": [
        { "parent": 10, "child": 20 },
        { "parent": 11, "child": 20 },
        { "parent": 20, "child": 30 }
    ],
    "partnerships": [
        { "a": 10, "b": 11 }
    ]
}"#;

/// Write `content` into a fresh temp directory and return both.
fn temp_file(name: &str, content: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(name);
    std::fs::write(&path, content).unwrap();
    (dir, path)
}

// =============================================================================
// RECORD LOADING TESTS
// =============================================================================

#[test]
fn loads_a_family_file_from_disk() {
    let (_dir, path) = temp_file("family.json", FAMILY);
    let family = store::load(&path).unwrap();

    assert_eq!(family.persons.len(), 4);
    assert_eq!(family.parent_child.len(), 3);
    assert_eq!(family.partnerships.len(), 1);
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = TempDir::new().unwrap();
    let result = store::load(&dir.path().join("nope.json"));
    assert!(matches!(result, Err(KinshipError::IoError(_))));
}

#[test]
fn directory_path_is_rejected() {
    let dir = TempDir::new().unwrap();
    let result = store::load(dir.path());
    assert!(matches!(result, Err(KinshipError::IoError(_))));
}

#[test]
fn malformed_json_is_a_serialization_error() {
    let (_dir, path) = temp_file("family.json", "{ not json");
    let result = store::load(&path);
    assert!(matches!(result, Err(KinshipError::SerializationError(_))));
}

#[test]
fn dangling_reference_surfaces_when_building() {
    let (_dir, path) = temp_file(
        "family.json",
        r#"{ "persons": [{ "id": 1 }], "parent_child": [{ "parent": 1, "child": 2 }] }"#,
    );
    let family = store::load(&path).unwrap();

    assert!(matches!(
        family.build_snapshot(),
        Err(KinshipError::DanglingReference {
            missing: PersonId(2),
            ..
        })
    ));
}

#[test]
fn loaded_records_answer_engine_queries() {
    let (_dir, path) = temp_file("family.json", FAMILY);
    let family = store::load(&path).unwrap();
    let snapshot = family.build_snapshot().unwrap();

    let result = ancestors(&snapshot, PersonId(30), None);
    let expected: Vec<u64> = vec![10, 11, 20];
    assert_eq!(result.into_iter().map(|id| id.0).collect::<Vec<_>>(), expected);

    let names = family.display_names();
    assert_eq!(names.get(&PersonId(20)).map(String::as_str), Some("Maria"));
    assert!(!names.contains_key(&PersonId(30)));
}

// =============================================================================
// CONFIGURATION TESTS
// =============================================================================

#[test]
fn explicit_config_file_is_loaded() {
    let (_dir, path) = temp_file(
        "kinship.toml",
        "record_file = \"data/family.json\"\ndefault_depth = 3\n",
    );
    let config = AppConfig::load(Some(&path)).unwrap();

    assert_eq!(config.record_file, Some(PathBuf::from("data/family.json")));
    assert_eq!(config.default_depth, Some(3));
    assert!(config.tree_up.is_none());
}

#[test]
fn missing_explicit_config_is_an_error() {
    let dir = TempDir::new().unwrap();
    let result = AppConfig::load(Some(&dir.path().join("kinship.toml")));
    assert!(matches!(result, Err(KinshipError::IoError(_))));
}

#[test]
fn absent_default_config_falls_back_to_defaults() {
    // No kinship.toml in the test working directory
    let config = AppConfig::load(None).unwrap();
    assert_eq!(config, AppConfig::default());
}

#[test]
fn malformed_config_is_a_typed_error() {
    let (_dir, path) = temp_file("kinship.toml", "default_depth = \"deep\"");
    let result = AppConfig::load(Some(&path));
    assert!(matches!(result, Err(KinshipError::SerializationError(_))));
}
