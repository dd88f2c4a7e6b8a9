//! End-to-end tests for the dbslim binary

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use rusqlite::Connection;
use tempfile::TempDir;

/// Create a database bloated with deleted rows.
fn create_bloated_db(dir: &Path, name: &str) -> PathBuf {
    let db_path = dir.join(name);
    let mut conn = Connection::open(&db_path).expect("Failed to create database");

    conn.execute(
        "CREATE TABLE entries (id INTEGER PRIMARY KEY, payload TEXT NOT NULL)",
        [],
    )
    .expect("Failed to create table");

    let payload = "x".repeat(256);
    let tx = conn.transaction().expect("Failed to start transaction");
    for _ in 0..2000 {
        tx.execute("INSERT INTO entries (payload) VALUES (?1)", [&payload])
            .expect("Failed to insert row");
    }
    tx.commit().expect("Failed to commit inserts");

    conn.execute("DELETE FROM entries WHERE id % 10 != 0", [])
        .expect("Failed to delete rows");

    db_path
}

fn dbslim() -> Command {
    Command::cargo_bin("dbslim").expect("Binary should build")
}

#[test]
fn test_missing_path_exits_with_status_one() {
    let temp_dir = TempDir::new().unwrap();
    let absent = temp_dir.path().join("absent.db");

    dbslim()
        .arg(&absent)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("not found"));

    assert!(!absent.exists(), "The missing file must not be created");
}

#[test]
fn test_optimize_reports_size_change() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = create_bloated_db(temp_dir.path(), "bloated.db");

    dbslim()
        .arg(&db_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Running VACUUM..."))
        .stdout(predicate::str::contains("Running ANALYZE..."))
        .stdout(predicate::str::contains("Database optimized"))
        .stdout(predicate::str::contains("Saved:"));
}

#[test]
fn test_quiet_suppresses_all_stdout() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = create_bloated_db(temp_dir.path(), "bloated.db");

    dbslim()
        .arg(&db_path)
        .arg("--quiet")
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_quiet_missing_path_still_exits_one() {
    let temp_dir = TempDir::new().unwrap();

    dbslim()
        .arg(temp_dir.path().join("absent.db"))
        .arg("-q")
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_json_output_is_consistent() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = create_bloated_db(temp_dir.path(), "bloated.db");

    let assert = dbslim().arg(&db_path).arg("--json").assert().success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&stdout).expect("stdout should be JSON");

    let original = value["original_size"].as_u64().unwrap();
    let new = value["new_size"].as_u64().unwrap();
    let reduction = value["reduction"].as_u64().unwrap();
    assert!(new < original);
    assert_eq!(reduction, original - new);
    assert!(value["freelist_pages"].as_i64().unwrap() > 0);
}

#[test]
fn test_non_database_file_exits_zero() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("notes.txt");
    fs::write(&path, "this is not a database\n").unwrap();

    dbslim().arg(&path).assert().success();

    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "this is not a database\n"
    );
}
