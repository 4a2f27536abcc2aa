//! Data-file tests: missing/corrupt files, atomic overwrite, on-disk layout.

use std::fs;

use assert_fs::prelude::*;
use predicates::prelude::predicate;
use roster_core::{
    store::{self, DEFAULT_DATA_FILE},
    CourseCode, Registry, RegistryError, StudentId,
};

fn sample() -> Registry {
    let mut reg = Registry::new();
    reg.add_student("Alice", 20, "1 Main St", StudentId::from("S1")).unwrap();
    reg.add_course("Algorithms", CourseCode::from("C1"), "Dr. Lee").unwrap();
    reg.enroll(&StudentId::from("S1"), &CourseCode::from("C1")).unwrap();
    reg.record_grade(&StudentId::from("S1"), &CourseCode::from("C1"), "A").unwrap();
    reg
}

// ---------------------------------------------------------------------------
// 1. Load errors
// ---------------------------------------------------------------------------

#[test]
fn load_missing_file_reports_io_unavailable() {
    let dir = assert_fs::TempDir::new().expect("tempdir");
    let path = dir.child(DEFAULT_DATA_FILE);

    let err = store::load_at(path.path()).unwrap_err();
    assert!(matches!(err, RegistryError::IoUnavailable { .. }), "got: {err}");
    assert!(err.is_recoverable());
    assert!(err.to_string().contains("student_data.json"));
}

#[test]
fn load_from_directory_reports_io_unavailable() {
    let dir = assert_fs::TempDir::new().expect("tempdir");
    let occupied = dir.child(DEFAULT_DATA_FILE);
    occupied.create_dir_all().expect("mkdir");

    let err = store::load_at(occupied.path()).unwrap_err();
    assert!(matches!(err, RegistryError::IoUnavailable { .. }), "got: {err}");
    assert!(err.is_recoverable(), "load failures must not be terminal");
}

#[test]
fn failed_load_leaves_current_registry_alone() {
    let dir = assert_fs::TempDir::new().expect("tempdir");
    let mut current = sample();

    match store::load_at(&dir.path().join("absent.json")) {
        Ok(loaded) => current = loaded,
        Err(err) => assert!(matches!(err, RegistryError::IoUnavailable { .. })),
    }
    assert_eq!(current, sample());
}

#[test]
fn load_corrupt_json_returns_parse_error_with_path() {
    let dir = assert_fs::TempDir::new().expect("tempdir");
    let file = dir.child(DEFAULT_DATA_FILE);
    file.write_str("{ \"students\": { \"S1\": [unclosed").expect("write");

    let err = store::load_at(file.path()).unwrap_err();
    assert!(matches!(err, RegistryError::Parse { .. }), "got: {err}");
    let msg = err.to_string();
    assert!(msg.contains("student_data.json"), "must contain file path, got: {msg}");
    let source_msg = match &err {
        RegistryError::Parse { source, .. } => source.to_string(),
        _ => unreachable!(),
    };
    assert!(source_msg.contains("line"), "serde_json must provide position, got: {source_msg}");
}

#[test]
fn load_wrong_shape_returns_parse_error() {
    let dir = assert_fs::TempDir::new().expect("tempdir");
    let file = dir.child(DEFAULT_DATA_FILE);
    file.write_str(r#"{"students": {"S1": {"name": "Alice", "age": "twenty"}}}"#)
        .expect("write");

    let err = store::load_at(file.path()).unwrap_err();
    assert!(matches!(err, RegistryError::Parse { .. }), "got: {err}");
}

// ---------------------------------------------------------------------------
// 2. Save
// ---------------------------------------------------------------------------

#[test]
fn save_writes_two_section_document() {
    let dir = assert_fs::TempDir::new().expect("tempdir");
    let file = dir.child(DEFAULT_DATA_FILE);
    store::save_at(file.path(), &sample()).expect("save");

    file.assert(predicate::path::exists());
    let value: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(file.path()).unwrap()).expect("json");
    assert_eq!(value["students"]["S1"]["student_id"], "S1");
    assert_eq!(value["students"]["S1"]["address"], "1 Main St");
    assert_eq!(value["courses"]["C1"]["instructor"], "Dr. Lee");
    assert_eq!(value["courses"]["C1"]["students"][0], "S1");
}

#[test]
fn save_overwrites_previous_contents() {
    let dir = assert_fs::TempDir::new().expect("tempdir");
    let file = dir.child(DEFAULT_DATA_FILE);
    store::save_at(file.path(), &sample()).expect("first save");
    store::save_at(file.path(), &Registry::new()).expect("second save");

    let reloaded = store::load_at(file.path()).expect("load");
    assert!(reloaded.is_empty());
}

#[test]
fn save_cleans_up_tmp_file() {
    let dir = assert_fs::TempDir::new().expect("tempdir");
    let file = dir.child(DEFAULT_DATA_FILE);
    store::save_at(file.path(), &sample()).expect("save");

    dir.child("student_data.json.tmp").assert(predicate::path::missing());
}

#[test]
fn failed_rename_removes_tmp_file() {
    let dir = assert_fs::TempDir::new().expect("tempdir");
    // A non-empty directory sits where the data file should go.
    let occupied = dir.child(DEFAULT_DATA_FILE);
    occupied.child("keep.txt").write_str("x").expect("write");

    let err = store::save_at(occupied.path(), &sample()).unwrap_err();
    assert!(matches!(err, RegistryError::Io { .. }), "got: {err}");
    dir.child("student_data.json.tmp").assert(predicate::path::missing());
    occupied.child("keep.txt").assert(predicate::path::exists());
}

#[test]
fn save_creates_missing_parent_directory() {
    let dir = assert_fs::TempDir::new().expect("tempdir");
    let file = dir.child("nested/deeper/data.json");
    store::save_at(file.path(), &sample()).expect("save");
    file.assert(predicate::path::exists());
}

#[cfg(unix)]
#[test]
fn saved_file_is_owner_only() {
    use std::os::unix::fs::PermissionsExt;

    let dir = assert_fs::TempDir::new().expect("tempdir");
    let file = dir.child(DEFAULT_DATA_FILE);
    store::save_at(file.path(), &sample()).expect("save");

    let mode = fs::metadata(file.path()).expect("meta").permissions().mode() & 0o777;
    assert_eq!(mode, 0o600, "expected 0600, got {mode:o}");
}

#[test]
fn save_into_unwritable_location_is_terminal() {
    let dir = assert_fs::TempDir::new().expect("tempdir");
    // A regular file where a directory is expected.
    let blocker = dir.child("blocker");
    blocker.write_str("not a directory").expect("write");

    let err = store::save_at(&blocker.path().join("data.json"), &sample()).unwrap_err();
    assert!(matches!(err, RegistryError::Io { .. }), "got: {err}");
    assert!(!err.is_recoverable());
}

// ---------------------------------------------------------------------------
// 3. Save → load
// ---------------------------------------------------------------------------

#[test]
fn save_then_load_reproduces_registry() {
    let dir = assert_fs::TempDir::new().expect("tempdir");
    let file = dir.child(DEFAULT_DATA_FILE);
    let reg = sample();

    store::save_at(file.path(), &reg).expect("save");
    let loaded = store::load_at(file.path()).expect("load");

    assert_eq!(loaded, reg);
    let s1 = loaded.student(&StudentId::from("S1")).unwrap();
    assert_eq!(s1.grades[&CourseCode::from("C1")], "A");
}
