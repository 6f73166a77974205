pub const LOG_LEVEL: &str = "LOGGING_LEVEL";

pub const DATA_DIR: &str = "RAIL_DATA_DIR";
pub const UHMU_DIR: &str = "UHMU_DIR";

pub const CONFIG_PATH: &str = "RAIL_CONFIG_PATH";
pub const DB_PATH: &str = "RAIL_DB_PATH";
pub const POINTCONFIG_PATH: &str = "POINTCONFIG_PATH";
