use std::path::Path;

use appdb::AppDb;

use crate::bridge::DbStats;
use crate::error::BridgeError;
use crate::helpers::now_iso;

/// Counts the tables of the RAIL Data Server database.
///
/// Returns `Ok(None)` when the database file does not exist. The connection
/// is opened read-only and closed before returning.
pub fn inspect_database(path: &Path) -> Result<Option<DbStats>, BridgeError> {
    if !path.exists() {
        log::debug!("No database at {}", path.display());
        return Ok(None);
    }
    let db_err = |source| BridgeError::Db {
        path: path.to_path_buf(),
        source,
    };
    let tables = AppDb::open(path)
        .and_then(|db| db.table_count())
        .map_err(db_err)?;

    Ok(Some(DbStats {
        db_file: path.display().to_string(),
        tables,
        last_checked: now_iso(),
    }))
}

/// Names of the tables in the RAIL Data Server database, sorted.
pub fn list_tables(path: &Path) -> Result<Vec<String>, BridgeError> {
    AppDb::open(path)
        .and_then(|db| db.table_names())
        .map_err(|source| BridgeError::Db {
            path: path.to_path_buf(),
            source,
        })
}
