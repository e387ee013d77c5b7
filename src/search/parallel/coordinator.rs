//! Parallel search coordinator that manages worker threads.

use crate::checkpoint::CheckpointStore;
use crate::error::Result;
use crate::grid::{Cell, GridMap};
use crate::search::config::SearchConfig;
use crate::search::engine::SearchEngine;
use crate::search::parallel::channel::{create_channels, CoordinatorChannels, WorkerMessage};
use crate::search::result::{RunOutcome, SearchStatistics};
use crossbeam_channel::Sender;
use std::sync::Arc;
use std::time::Instant;

/// Outcome of one pair's session.
#[derive(Debug, Clone)]
pub struct PairReport {
    pub pair: (Cell, Cell),
    pub statistics: SearchStatistics,
    pub finished: bool,
}

/// Result from parallel search execution.
#[derive(Debug, Default)]
pub struct ParallelResult {
    /// Statistics aggregated from all workers.
    pub total_statistics: SearchStatistics,
    /// Per-pair reports, in the order the workers reported.
    pub pair_reports: Vec<PairReport>,
    /// Pairs whose worker failed, with the error message.
    pub failures: Vec<((Cell, Cell), String)>,
}

impl ParallelResult {
    /// Whether every searched pair exhausted its stack this session.
    pub fn all_finished(&self) -> bool {
        self.failures.is_empty() && self.pair_reports.iter().all(|r| r.finished)
    }
}

/// Search every pair in `pairs` on its own thread for the configured budget.
///
/// Blocks until all workers have exited. Each worker loads (or seeds) its
/// checkpoint, runs the engine, and saves the checkpoint back.
pub fn run_parallel_search(
    map: &GridMap,
    pairs: &[(Cell, Cell)],
    search_config: &SearchConfig,
) -> ParallelResult {
    let start_time = Instant::now();
    log::info!(
        "searching {} pair(s) of map '{}' for {:.1?} each",
        pairs.len(),
        map.name(),
        search_config.time_budget
    );

    let (coordinator_channels, worker_channels) = create_channels(pairs.len());

    let map = Arc::new(map.clone());
    let search_config = Arc::new(search_config.clone());

    let worker_handles: Vec<_> = pairs
        .iter()
        .copied()
        .zip(worker_channels)
        .map(|(pair, to_coordinator)| {
            let map = Arc::clone(&map);
            let search_config = Arc::clone(&search_config);
            std::thread::spawn(move || run_worker(pair, &map, &search_config, to_coordinator))
        })
        .collect();

    let mut result = run_coordinator(coordinator_channels);

    for handle in worker_handles {
        if handle.join().is_err() {
            log::error!("a search worker panicked");
        }
    }

    result.total_statistics.elapsed_time = start_time.elapsed();
    log::info!(
        "session done: {} pair(s) searched, {} failed, best length {}",
        result.pair_reports.len(),
        result.failures.len(),
        result.total_statistics.best_length
    );
    result
}

/// Collect worker messages until every sender has been dropped.
fn run_coordinator(channels: CoordinatorChannels) -> ParallelResult {
    let mut result = ParallelResult::default();

    for message in channels.from_workers.iter() {
        match message {
            WorkerMessage::Finished {
                pair,
                statistics,
                finished,
            } => {
                result.total_statistics.merge(&statistics);
                result.pair_reports.push(PairReport {
                    pair,
                    statistics,
                    finished,
                });
            }
            WorkerMessage::Failed { pair, message } => {
                log::error!("{} -> {}: {}", pair.0, pair.1, message);
                result.failures.push((pair, message));
            }
        }
    }

    result
}

/// Worker body: run one pair and report how it went.
fn run_worker(
    pair: (Cell, Cell),
    map: &GridMap,
    config: &SearchConfig,
    to_coordinator: Sender<WorkerMessage>,
) {
    let message = match search_pair(pair, map, config) {
        Ok(outcome) => WorkerMessage::Finished {
            pair,
            statistics: outcome.statistics,
            finished: outcome.finished,
        },
        Err(err) => WorkerMessage::Failed {
            pair,
            message: err.to_string(),
        },
    };
    let _ = to_coordinator.send(message);
}

fn search_pair((entry, exit): (Cell, Cell), map: &GridMap, config: &SearchConfig) -> Result<RunOutcome> {
    let checkpoints = CheckpointStore::new(&config.checkpoint_dir);
    let mut engine = SearchEngine::new(map, entry, exit)?;
    let mut checkpoint = checkpoints.load_or_seed(map, entry, exit, config.checkpoint_policy)?;

    log::debug!("{} -> {}: worker started", entry, exit);
    let outcome = engine.run(&mut checkpoint, config.time_budget);
    checkpoints.save(map, entry, exit, &checkpoint)?;

    log::info!(
        "{} -> {}: {} states, best length {}{}",
        entry,
        exit,
        outcome.statistics.states_expanded,
        outcome.statistics.best_length,
        if outcome.finished { " (finished)" } else { "" }
    );
    Ok(outcome)
}
