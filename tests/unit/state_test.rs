//! Tests for the state store

use std::collections::HashSet;
use std::fs;

use tempfile::TempDir;

use edgar_watch::state;

fn set(ids: &[&str]) -> HashSet<String> {
    ids.iter().map(ToString::to_string).collect()
}

#[test]
fn test_load_missing_file_is_empty_set() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("seen.json");

    let seen = state::load(&path).unwrap();
    assert!(seen.is_empty());
}

#[test]
fn test_save_then_load_round_trips() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("seen.json");
    let seen = set(&["cik:Kraken:A", "rss:entry-1"]);

    state::save(&path, &seen).unwrap();
    let loaded = state::load(&path).unwrap();
    assert_eq!(loaded, seen);
}

#[test]
fn test_save_writes_sorted_json_array() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("seen.json");

    state::save(&path, &set(&["b", "a", "c"])).unwrap();

    let content = fs::read_to_string(&path).unwrap();
    let ids: Vec<String> = serde_json::from_str(&content).unwrap();
    assert_eq!(ids, vec!["a", "b", "c"]);
}

#[test]
fn test_save_leaves_no_temp_file_behind() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("seen.json");

    state::save(&path, &set(&["a"])).unwrap();

    let entries: Vec<_> = fs::read_dir(temp.path()).unwrap().collect();
    assert_eq!(entries.len(), 1);
}

#[test]
fn test_save_overwrites_existing_state() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("seen.json");

    state::save(&path, &set(&["a"])).unwrap();
    state::save(&path, &set(&["a", "b"])).unwrap();

    let loaded = state::load(&path).unwrap();
    assert_eq!(loaded, set(&["a", "b"]));
}

#[test]
fn test_save_creates_parent_directory() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("nested").join("seen.json");

    state::save(&path, &set(&["a"])).unwrap();
    assert!(path.exists());
}

#[test]
fn test_load_malformed_file_is_an_error() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("seen.json");
    fs::write(&path, "{not json").unwrap();

    assert!(state::load(&path).is_err());
}

#[test]
fn test_load_wrong_shape_is_an_error() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("seen.json");
    fs::write(&path, r#"{"seen": []}"#).unwrap();

    assert!(state::load(&path).is_err());
}
