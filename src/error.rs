//! Error types for map resolution, checkpoint I/O and search sessions

use crate::grid::Cell;
use std::path::PathBuf;
use thiserror::Error;

/// Failures raised while resolving or validating a map
#[derive(Debug, Error)]
pub enum MapError {
    /// The map identifier is not in the catalog
    #[error("unknown map '{name}' (known maps: {known})")]
    Unmapped { name: String, known: String },
    /// Entry or exit coordinate missing from the map's zone tables
    #[error("pair {entry} -> {exit} is not an entry/exit pair of map '{map}'")]
    InvalidPair { map: String, entry: Cell, exit: Cell },
    /// The layout or zone tables violate a structural invariant
    #[error("invalid layout for map '{map}': {reason}")]
    InvalidLayout { map: String, reason: String },
    /// A map file could not be read
    #[error("failed to read map file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// A map file could not be parsed
    #[error("failed to parse map file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Failures raised by the checkpoint store
#[derive(Debug, Error)]
pub enum CheckpointError {
    /// No record exists yet; callers start a fresh search
    #[error("no checkpoint at {}", path.display())]
    NotFound { path: PathBuf },
    /// A record exists but is not a well-formed (store, stack) pair
    #[error("corrupt checkpoint at {}: {reason}", path.display())]
    Corrupt { path: PathBuf, reason: String },
    /// Any other filesystem failure
    #[error("checkpoint I/O failed for {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl CheckpointError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, CheckpointError::NotFound { .. })
    }
}

/// Crate-level error
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Map(#[from] MapError),
    #[error(transparent)]
    Checkpoint(#[from] CheckpointError),
}

pub type Result<T> = std::result::Result<T, Error>;
