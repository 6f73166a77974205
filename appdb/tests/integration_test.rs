use std::fs;

use appdb::AppDb;
use rusqlite::Connection;

#[test]
fn counts_and_lists_tables() -> rusqlite::Result<()> {
    let _ = env_logger::builder().is_test(true).try_init();
    let tempdir = tempfile::tempdir().unwrap();
    let path = tempdir.path().join("rail_data.db");

    let conn = Connection::open(&path)?;
    conn.execute_batch(
        "CREATE TABLE readings (id INTEGER PRIMARY KEY, value REAL);
         CREATE TABLE clients (tag TEXT PRIMARY KEY, type TEXT);
         CREATE INDEX readings_value ON readings (value);
         CREATE VIEW u_clients AS SELECT tag FROM clients WHERE type = 'U';",
    )?;
    drop(conn);

    let db = AppDb::open(&path)?;
    assert_eq!(db.table_count()?, 2);
    assert_eq!(db.table_names()?, vec!["clients", "readings"]);
    Ok(())
}

#[test]
fn non_database_file_fails_on_query() {
    let tempdir = tempfile::tempdir().unwrap();
    let path = tempdir.path().join("not_a.db");
    fs::write(&path, "this is plain text, not a SQLite database file\n".repeat(64)).unwrap();

    let res = AppDb::open(&path).and_then(|db| db.table_count());
    assert!(res.is_err());
}
