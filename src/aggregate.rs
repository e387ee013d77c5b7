//! Cross-pair aggregation of the best paths found for a map

use crate::checkpoint::CheckpointStore;
use crate::grid::{Cell, GridMap, Overlay};
use crate::search::state::store_length;
use serde::{Deserialize, Serialize};

/// The global answer for a map: the best length across every pair and all
/// paths achieving it. Persisted as `[best_length, winning_paths]`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "(usize, Vec<Overlay>)", into = "(usize, Vec<Overlay>)")]
pub struct Aggregate {
    pub best_length: usize,
    pub winning_paths: Vec<Overlay>,
}

impl Aggregate {
    /// Fold one pair's store in: a strictly longer store replaces the
    /// winners, an equally long one is pooled, an empty one is ignored.
    pub fn absorb(&mut self, store: &[Overlay], length_offset: usize) {
        if store.is_empty() {
            return;
        }
        let length = store_length(store, length_offset);
        if length > self.best_length {
            self.best_length = length;
            self.winning_paths = store.to_vec();
        } else if length == self.best_length {
            self.winning_paths.extend_from_slice(store);
        }
    }
}

impl From<(usize, Vec<Overlay>)> for Aggregate {
    fn from((best_length, winning_paths): (usize, Vec<Overlay>)) -> Self {
        Self {
            best_length,
            winning_paths,
        }
    }
}

impl From<Aggregate> for (usize, Vec<Overlay>) {
    fn from(aggregate: Aggregate) -> Self {
        (aggregate.best_length, aggregate.winning_paths)
    }
}

/// Combine the stores of `pairs` into the global answer.
///
/// A pair whose checkpoint cannot be loaded contributes an empty store.
/// Read-only: no checkpoint is modified.
pub fn aggregate(pairs: &[(Cell, Cell)], map: &GridMap, checkpoints: &CheckpointStore) -> Aggregate {
    let mut result = Aggregate::default();
    for &(entry, exit) in pairs {
        let Ok(length_offset) = map.length_offset(entry, exit) else {
            log::warn!("skipping {} -> {}: not a pair of map '{}'", entry, exit, map.name());
            continue;
        };
        let store = match checkpoints.load(map, entry, exit) {
            Ok(checkpoint) => checkpoint.store,
            Err(err) => {
                if !err.is_not_found() {
                    log::warn!("{err}; counting the pair as empty");
                }
                Vec::new()
            }
        };
        result.absorb(&store, length_offset);
    }
    result
}
