use rusqlite::{Connection, OpenFlags, Result};
use std::path::Path;

const MASTER_TABLE: &str = "sqlite_master";
const TABLE_TYPE: &str = "table";

/// Read-only handle on the RAIL Data Server database.
///
/// The connection is closed when the handle is dropped; nothing is pooled or
/// reused between runs.
pub struct AppDb(Connection);

impl AppDb {
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        log::debug!("Opening {} in read-only mode", path.as_ref().display());
        let connection = Connection::open_with_flags(path, OpenFlags::SQLITE_OPEN_READ_ONLY)?;
        Ok(AppDb(connection))
    }

    pub fn table_count(&self) -> Result<i64> {
        self.0.query_row(
            &format!("SELECT COUNT(*) FROM {MASTER_TABLE} WHERE type = ?1"),
            [TABLE_TYPE],
            |r| r.get::<_, i64>(0),
        )
    }

    pub fn table_names(&self) -> Result<Vec<String>> {
        let mut stmt = self.0.prepare(&format!(
            "SELECT name FROM {MASTER_TABLE} WHERE type = ?1 ORDER BY name"
        ))?;
        let names = stmt
            .query_map([TABLE_TYPE], |r| r.get::<_, String>(0))?
            .collect::<Result<Vec<String>>>()?;
        Ok(names)
    }
}
