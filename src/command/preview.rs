use anyhow::Result;

use crate::bridge;
use crate::helpers::base_path::BridgePaths;
use crate::interfaces;

/// Prints the pointconfig that a sync would write, without writing it.
pub fn preview(paths: &BridgePaths) -> Result<()> {
    let config = interfaces::read_config(&paths.config)?;
    let pointconfig = bridge::build_pointconfig(&config);
    println!("{}", serde_json::to_string_pretty(&pointconfig)?);
    Ok(())
}
