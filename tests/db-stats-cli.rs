use assert_cmd::Command;
use predicates::prelude::*;
use rusqlite::Connection;
use serde_json::{json, Value};

#[test]
fn prints_table_count_and_names() {
    let tempdir = tempfile::tempdir().unwrap();
    let db = tempdir.path().join("rail_data.db");
    Connection::open(&db)
        .unwrap()
        .execute_batch("CREATE TABLE readings (ts TEXT); CREATE TABLE alarms (ts TEXT);")
        .unwrap();

    let assert = Command::cargo_bin("rail-bridge")
        .unwrap()
        .arg("db-stats")
        .arg("--db")
        .arg(&db)
        .assert()
        .success();

    let stats: Value = serde_json::from_slice(&assert.get_output().stdout).unwrap();
    assert_eq!(stats["tables"], 2);
    assert_eq!(stats["table_names"], json!(["alarms", "readings"]));
    assert_eq!(stats["db_file"], db.display().to_string());
}

#[test]
fn absent_database_is_reported() {
    let tempdir = tempfile::tempdir().unwrap();

    Command::cargo_bin("rail-bridge")
        .unwrap()
        .arg("db-stats")
        .arg("--db")
        .arg(tempdir.path().join("rail_data.db"))
        .assert()
        .success()
        .stdout(predicate::str::contains("No database found"));
}
