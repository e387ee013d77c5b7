//! Longest-maze search for one entry/exit pair, and its parallel driver
//!
//! - `state`: the serializable search state and per-pair checkpoint
//! - `reachability`: BFS pruning oracle
//! - `engine`: resumable depth-first branch-and-bound
//! - `parallel`: one worker thread per pair with a join barrier

pub mod config;
pub mod engine;
pub mod parallel;
pub mod reachability;
pub mod result;
pub mod state;

pub use config::{CheckpointPolicy, SearchConfig};
pub use engine::SearchEngine;
pub use parallel::{run_parallel_search, ParallelConfig, ParallelResult};
pub use reachability::ReachabilityOracle;
pub use result::{RunOutcome, SearchStatistics};
pub use state::{Checkpoint, SearchState};
