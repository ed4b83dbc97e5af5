//! State-file persistence: every command rehydrates the engine from disk,
//! applies one operation, and re-persists. Nothing lives in memory between
//! invocations.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use sleuth_core::engine::DeductionEngine;
use sleuth_core::engine::serialization::{EngineSnapshot, SnapshotError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("no game in progress at {path}; start one with `sleuth new`")]
    Missing { path: PathBuf },
    #[error("failed to read state {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to write state {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to encode state: {source}")]
    Encode {
        #[source]
        source: serde_json::Error,
    },
    #[error("state file {path} is not valid JSON: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("state file {path} cannot be restored: {source}")]
    Restore {
        path: PathBuf,
        #[source]
        source: SnapshotError,
    },
}

pub fn exists(path: &Path) -> bool {
    path.exists()
}

pub fn load(path: &Path) -> Result<DeductionEngine, SessionError> {
    if !path.exists() {
        return Err(SessionError::Missing {
            path: path.to_path_buf(),
        });
    }
    let json = fs::read_to_string(path).map_err(|source| SessionError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let snapshot = EngineSnapshot::from_json(&json).map_err(|source| SessionError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    let engine = snapshot.restore().map_err(|source| SessionError::Restore {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), "session rehydrated");
    Ok(engine)
}

pub fn save(path: &Path, engine: &DeductionEngine) -> Result<(), SessionError> {
    let json =
        EngineSnapshot::to_json(engine).map_err(|source| SessionError::Encode { source })?;
    fs::write(path, json).map_err(|source| SessionError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), "session persisted");
    Ok(())
}

/// Removes the state file. Returns whether there was one to remove.
pub fn reset(path: &Path) -> Result<bool, SessionError> {
    if !path.exists() {
        return Ok(false);
    }
    fs::remove_file(path).map_err(|source| SessionError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(true)
}
