use std::fs;
use std::path::Path;

use serde_json::Value;

use crate::bridge::SourceConfig;
use crate::error::BridgeError;

/// Reads the RAIL Data Server JSON config.
///
/// The top-level value must be an object. Recognized keys of the wrong type
/// fall back to their defaults instead of failing the read.
pub fn read_config(path: &Path) -> Result<SourceConfig, BridgeError> {
    let raw = fs::read_to_string(path).map_err(|e| BridgeError::io(path, e))?;
    let parse_err = |source| BridgeError::Parse {
        path: path.to_path_buf(),
        source,
    };

    let value: Value = serde_json::from_str(&raw).map_err(parse_err)?;
    let config = SourceConfig::from_value(value).map_err(parse_err)?;
    log::debug!(
        "Read {} with {} locations",
        path.display(),
        config.locations.len()
    );
    Ok(config)
}
