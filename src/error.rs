use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Broad class of a [`BridgeError`], for callers that only need to branch on
/// the cause.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    FileNotFound,
    ParseError,
    IoError,
    DbError,
}

#[derive(Error, Debug)]
pub enum BridgeError {
    #[error("file not found: {}", path.display())]
    FileNotFound { path: PathBuf },
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("could not parse JSON in {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("could not serialize JSON: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("database error on {}: {source}", path.display())]
    Db {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },
}

impl BridgeError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            BridgeError::FileNotFound { .. } => ErrorKind::FileNotFound,
            BridgeError::Io { .. } => ErrorKind::IoError,
            BridgeError::Parse { .. } | BridgeError::Serialize(_) => ErrorKind::ParseError,
            BridgeError::Db { .. } => ErrorKind::DbError,
        }
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        let path = path.into();
        if source.kind() == io::ErrorKind::NotFound {
            BridgeError::FileNotFound { path }
        } else {
            BridgeError::Io { path, source }
        }
    }
}
