use std::fs;
use std::path::Path;

use crate::error::BridgeError;

use super::models::PointConfig;

/// Writes the pointconfig as 2-space indented JSON, creating missing parent
/// directories. An existing file is overwritten in place.
///
/// Non-ASCII text (location names, client fields) is written as raw UTF-8,
/// not as `\uXXXX` escapes. Master Station decodes both forms identically.
pub fn write_pointconfig(pointconfig: &PointConfig, destination: &Path) -> Result<(), BridgeError> {
    if let Some(parent) = destination.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| BridgeError::io(parent, e))?;
    }
    let json = serde_json::to_string_pretty(pointconfig)?;
    fs::write(destination, json).map_err(|e| BridgeError::io(destination, e))?;
    log::debug!("Wrote {}", destination.display());
    Ok(())
}
