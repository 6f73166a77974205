use anyhow::Result;
use serde::Serialize;

use crate::bridge::DbStats;
use crate::helpers::base_path::BridgePaths;
use crate::interfaces;

#[derive(Debug, Serialize)]
struct DbReport {
    #[serde(flatten)]
    stats: DbStats,
    table_names: Vec<String>,
}

/// Prints the database stats together with the table names.
pub fn db_stats(paths: &BridgePaths) -> Result<()> {
    let Some(stats) = interfaces::inspect_database(&paths.database)? else {
        println!("No database found at {}", paths.database.display());
        return Ok(());
    };
    let report = DbReport {
        stats,
        table_names: interfaces::list_tables(&paths.database)?,
    };
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
