pub const LOG_LEVEL: &str = "INFO";

pub const DATA_DIR: &str = ".";
pub const UHMU_DIR: &str = "UHMU";

pub const CONFIG_FILE: &str = "config.json";
pub const DB_FILE: &str = "database/rail_data.db";
pub const POINTCONFIG_FILE: &str = "pointconfig.json";

pub const ADMIN_USERNAME: &str = "admin";
pub const ADMIN_PASSWORD: &str = "admin123";

pub const SOURCE_LABEL: &str = "RAIL Data Server (app.py)";
pub const POINTCONFIG_VERSION: &str = "1.0";
