//! Parallel execution of per-pair searches.
//!
//! One worker thread runs per selected entry/exit pair. Each worker owns its
//! pair's checkpoint file for the whole session, so workers share no mutable
//! state; they report back over a channel and the coordinator joins every
//! thread before returning.
//!
//! # Example
//!
//! ```ignore
//! use mazing::search::parallel::run_parallel_search;
//! use mazing::search::SearchConfig;
//!
//! let config = SearchConfig::default().with_minutes(0.5)?;
//! let result = run_parallel_search(&map, &pairs, &config);
//! println!("{}", result.total_statistics.format_summary());
//! ```

pub mod channel;
pub mod config;
pub mod coordinator;

pub use config::ParallelConfig;
pub use coordinator::{run_parallel_search, PairReport, ParallelResult};
