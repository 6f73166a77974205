use std::{env, path::PathBuf};

use crate::constants::{defaults, envvars};

pub fn data_dir() -> PathBuf {
    env::var_os(envvars::DATA_DIR)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(defaults::DATA_DIR))
}

pub fn uhmu_dir() -> PathBuf {
    env::var_os(envvars::UHMU_DIR)
        .map(PathBuf::from)
        .unwrap_or_else(|| data_dir().join(defaults::UHMU_DIR))
}

/// Explicit overrides, typically from command-line flags.
#[derive(Debug, Default, Clone)]
pub struct PathOverrides {
    pub config: Option<PathBuf>,
    pub database: Option<PathBuf>,
    pub output: Option<PathBuf>,
}

/// Filesystem locations used by a sync run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BridgePaths {
    pub config: PathBuf,
    pub database: PathBuf,
    pub output: PathBuf,
}

impl BridgePaths {
    /// Resolves each path from, in order: the override, its own environment
    /// variable, then the default under the data or UHMU directory.
    pub fn resolve(overrides: PathOverrides) -> Self {
        let paths = BridgePaths {
            config: overrides
                .config
                .or_else(|| env_path(envvars::CONFIG_PATH))
                .unwrap_or_else(|| data_dir().join(defaults::CONFIG_FILE)),
            database: overrides
                .database
                .or_else(|| env_path(envvars::DB_PATH))
                .unwrap_or_else(|| data_dir().join(defaults::DB_FILE)),
            output: overrides
                .output
                .or_else(|| env_path(envvars::POINTCONFIG_PATH))
                .unwrap_or_else(|| uhmu_dir().join(defaults::POINTCONFIG_FILE)),
        };
        log::debug!("Resolved paths: {:?}", paths);
        paths
    }
}

fn env_path(var: &str) -> Option<PathBuf> {
    env::var_os(var).filter(|v| !v.is_empty()).map(PathBuf::from)
}
