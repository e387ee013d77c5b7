//! File-backed persistence of per-pair checkpoints and aggregate results
//!
//! Each entry/exit pair owns one JSON file holding `[store, stack]`; the
//! aggregate answer for a map lives in `<map>.json` as
//! `[best_length, winning_paths]`. Every write goes through a temporary
//! sibling file and a rename, so readers never observe a partial record.

mod atomic;

use crate::aggregate::Aggregate;
use crate::error::{CheckpointError, Error};
use crate::grid::{Cell, GridMap};
use crate::search::config::CheckpointPolicy;
use crate::search::state::Checkpoint;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Directory-backed store of checkpoint and result files
#[derive(Debug, Clone)]
pub struct CheckpointStore {
    dir: PathBuf,
}

impl CheckpointStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the checkpoint for one pair, e.g. `Park_2-4_11-8.json`.
    pub fn pair_path(&self, map_name: &str, entry: Cell, exit: Cell) -> PathBuf {
        self.dir.join(format!(
            "{}_{}-{}_{}-{}.json",
            map_name, entry.row, entry.col, exit.row, exit.col
        ))
    }

    /// Path of the aggregate result file, e.g. `Park.json`.
    pub fn result_path(&self, map_name: &str) -> PathBuf {
        self.dir.join(format!("{map_name}.json"))
    }

    /// Restore the `(store, stack)` record for a pair.
    ///
    /// Fails with `NotFound` when no record exists and with `Corrupt` when the
    /// file does not parse or does not fit the map's dimensions.
    pub fn load(
        &self,
        map: &GridMap,
        entry: Cell,
        exit: Cell,
    ) -> Result<Checkpoint, CheckpointError> {
        let path = self.pair_path(map.name(), entry, exit);
        let checkpoint: Checkpoint = read_json(&path)?;
        checkpoint
            .validate(map)
            .map_err(|reason| CheckpointError::Corrupt {
                path: path.clone(),
                reason,
            })?;
        Ok(checkpoint)
    }

    /// Persist the `(store, stack)` record for a pair, replacing any previous one.
    pub fn save(
        &self,
        map: &GridMap,
        entry: Cell,
        exit: Cell,
        checkpoint: &Checkpoint,
    ) -> Result<(), CheckpointError> {
        let path = self.pair_path(map.name(), entry, exit);
        write_json(&path, checkpoint)
    }

    /// Load a pair's checkpoint, seeding a fresh search when none exists.
    ///
    /// Under [`CheckpointPolicy::Lenient`] a corrupt file is logged and
    /// replaced by a fresh seed; under `Strict` it is returned as an error.
    pub fn load_or_seed(
        &self,
        map: &GridMap,
        entry: Cell,
        exit: Cell,
        policy: CheckpointPolicy,
    ) -> Result<Checkpoint, Error> {
        match self.load(map, entry, exit) {
            Ok(checkpoint) => {
                log::debug!(
                    "{} -> {}: resuming with {} stored paths and {} pending states",
                    entry,
                    exit,
                    checkpoint.store.len(),
                    checkpoint.stack.len()
                );
                Ok(checkpoint)
            }
            Err(CheckpointError::NotFound { .. }) => {
                log::debug!("{} -> {}: no checkpoint, starting fresh", entry, exit);
                Ok(Checkpoint::seed(map, entry, exit)?)
            }
            Err(err @ CheckpointError::Corrupt { .. }) => match policy {
                CheckpointPolicy::Lenient => {
                    log::warn!("{err}; discarding it and starting fresh");
                    Ok(Checkpoint::seed(map, entry, exit)?)
                }
                CheckpointPolicy::Strict => Err(err.into()),
            },
            Err(err) => Err(err.into()),
        }
    }

    /// Persist the aggregate answer for a map.
    pub fn save_aggregate(&self, map_name: &str, aggregate: &Aggregate) -> Result<(), CheckpointError> {
        write_json(&self.result_path(map_name), aggregate)
    }

    /// Read back a previously written aggregate answer.
    pub fn load_aggregate(&self, map_name: &str) -> Result<Aggregate, CheckpointError> {
        read_json(&self.result_path(map_name))
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, CheckpointError> {
    let data = fs::read(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => CheckpointError::NotFound {
            path: path.to_path_buf(),
        },
        _ => CheckpointError::Io {
            path: path.to_path_buf(),
            source,
        },
    })?;
    serde_json::from_slice(&data).map_err(|e| CheckpointError::Corrupt {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}

fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<(), CheckpointError> {
    let data = serde_json::to_vec(value).map_err(|e| CheckpointError::Io {
        path: path.to_path_buf(),
        source: e.into(),
    })?;
    atomic::write_file(path, &data).map_err(|source| CheckpointError::Io {
        path: path.to_path_buf(),
        source,
    })
}
