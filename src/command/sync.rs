use std::path::Path;

use anyhow::Result;

use crate::bridge::{self, PointConfig, SourceConfig};
use crate::helpers::base_path::BridgePaths;
use crate::interfaces;

const RULE_WIDTH: usize = 60;

/// Runs one full sync: read the source config, rebuild the pointconfig, then
/// report credentials and database stats.
///
/// Every step reports its own failure and the run carries on; only a missing
/// or empty source config ends it early. Neither case is an error for the
/// caller.
pub fn sync(paths: &BridgePaths) -> Result<()> {
    print_banner("RAIL Data Server ↔ Master Station Data Bridge");

    println!("\n[1] Reading source configuration...");
    let Some(config) = load_config(&paths.config) else {
        println!("  ✗ No config found");
        return Ok(());
    };
    println!("  ✓ Loaded config with {} locations", config.locations.len());

    println!("\n[2] Syncing pointconfig.json...");
    if sync_pointconfig(&config, &paths.output) {
        println!("  → File: {}", paths.output.display());
    }

    println!("\n[3] Extracting credentials...");
    let creds = bridge::derive_credentials(&config);
    println!("  Username: {}", creds.username);
    println!("  Password: {}", creds.masked_password());

    println!("\n[4] Database information...");
    match interfaces::inspect_database(&paths.database) {
        Ok(Some(stats)) => {
            println!("  Database: {}", stats.db_file);
            println!("  Tables: {}", stats.tables);
        }
        Ok(None) => log::info!("No database found at {}", paths.database.display()),
        Err(e) => log::error!("Error reading database stats: {e}"),
    }

    println!();
    print_banner("✓ Data Bridge Sync Complete");
    println!("\nWhat's been synced:");
    println!("  • Location list → pointconfig.json");
    println!("  • Client info → pointconfig.json");
    println!("  • Credentials → Ready for login");
    println!("\nBoth systems now share common data!");
    Ok(())
}

fn load_config(path: &Path) -> Option<SourceConfig> {
    match interfaces::read_config(path) {
        Ok(config) if config.is_empty() => {
            log::warn!("Source config {} is empty", path.display());
            None
        }
        Ok(config) => Some(config),
        Err(e) => {
            log::error!("Error reading source config ({:?}): {e}", e.kind());
            None
        }
    }
}

fn sync_pointconfig(config: &SourceConfig, output: &Path) -> bool {
    let pointconfig = bridge::build_pointconfig(config);
    match bridge::write_pointconfig(&pointconfig, output) {
        Ok(()) => {
            print_counts(&pointconfig);
            true
        }
        Err(e) => {
            log::error!("Error writing {}: {e}", output.display());
            println!("  ✗ Error syncing pointconfig: {e}");
            false
        }
    }
}

fn print_counts(pointconfig: &PointConfig) {
    println!("  ✓ Synced pointconfig.json");
    println!("  Locations: {}", pointconfig.locations.len());
    println!("  U-Type clients: {}", pointconfig.u_type_clients.len());
    println!("  S-Type clients: {}", pointconfig.s_type_clients.len());
}

fn print_banner(title: &str) {
    let rule = "=".repeat(RULE_WIDTH);
    println!("{rule}");
    println!("{title}");
    println!("{rule}");
}
