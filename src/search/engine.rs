//! Iterative depth-first branch-and-bound search for the longest maze
//!
//! The engine consumes a [`Checkpoint`]'s stack in LIFO order:
//! 1. Pop a state and commit its frontier to path-used
//! 2. If the frontier is the destination, score the completed path against
//!    the store (replace on strictly longer, append on ties)
//! 3. Otherwise, for each unused buildable neighbour, build a branch where
//!    the sibling neighbours are blocked for good, and stack it only if the
//!    destination is still reachable from that neighbour
//!
//! Blocking the siblings keeps completed paths induced: no path cell touches
//! a non-consecutive path cell, so a walker can never cut a corner.
//!
//! The stop condition is checked once per popped state, so a run overshoots
//! its deadline by at most one expansion.

use crate::error::MapError;
use crate::grid::{Cell, GridMap, Mark};
use crate::search::reachability::ReachabilityOracle;
use crate::search::result::{RunOutcome, SearchStatistics};
use crate::search::state::{path_length, store_length, Checkpoint, SearchState};
use std::cmp::Ordering;
use std::time::{Duration, Instant};

/// Longest-path search for one entry/exit pair of a map
pub struct SearchEngine<'a> {
    map: &'a GridMap,
    entry: Cell,
    destination: Cell,
    length_offset: usize,
    oracle: ReachabilityOracle,
}

impl<'a> SearchEngine<'a> {
    /// Fails with [`MapError::InvalidPair`] unless `entry` is in the entry
    /// zone and `exit` in the exit zone.
    pub fn new(map: &'a GridMap, entry: Cell, exit: Cell) -> Result<Self, MapError> {
        let length_offset = map.length_offset(entry, exit)?;
        Ok(Self {
            map,
            entry,
            destination: exit,
            length_offset,
            oracle: ReachabilityOracle::new(),
        })
    }

    pub fn length_offset(&self) -> usize {
        self.length_offset
    }

    /// A fresh checkpoint holding only the seed state.
    pub fn seed(&self) -> Checkpoint {
        Checkpoint::fresh(self.map, self.entry, self.destination)
    }

    /// Consume the stack until it is empty or `budget` of wall-clock time
    /// has passed.
    pub fn run(&mut self, checkpoint: &mut Checkpoint, budget: Duration) -> RunOutcome {
        match Instant::now().checked_add(budget) {
            Some(deadline) => self.drive(checkpoint, |_| Instant::now() < deadline),
            None => self.drive(checkpoint, |_| true),
        }
    }

    /// Consume at most `max_expansions` states. Deterministic counterpart of
    /// [`SearchEngine::run`].
    pub fn run_steps(&mut self, checkpoint: &mut Checkpoint, max_expansions: u64) -> RunOutcome {
        self.drive(checkpoint, |expanded| expanded < max_expansions)
    }

    /// Consume the stack until the pair is solved.
    pub fn run_to_completion(&mut self, checkpoint: &mut Checkpoint) -> RunOutcome {
        self.drive(checkpoint, |_| true)
    }

    fn drive(
        &mut self,
        checkpoint: &mut Checkpoint,
        mut keep_going: impl FnMut(u64) -> bool,
    ) -> RunOutcome {
        let start = Instant::now();
        let mut stats = SearchStatistics::default();
        let mut best = store_length(&checkpoint.store, self.length_offset);

        while keep_going(stats.states_expanded) {
            let Some(state) = checkpoint.stack.pop() else {
                break;
            };
            stats.states_expanded += 1;
            self.expand(state, checkpoint, &mut best, &mut stats);
        }

        stats.best_length = best;
        stats.elapsed_time = start.elapsed();
        RunOutcome {
            statistics: stats,
            finished: checkpoint.stack.is_empty(),
        }
    }

    fn expand(
        &mut self,
        state: SearchState,
        checkpoint: &mut Checkpoint,
        best: &mut usize,
        stats: &mut SearchStatistics,
    ) {
        let SearchState {
            mut overlay,
            frontier,
        } = state;
        overlay.set(frontier, Mark::PathUsed);

        if frontier == self.destination {
            stats.completions += 1;
            let length = path_length(&overlay, self.length_offset);
            match length.cmp(best) {
                Ordering::Greater => {
                    log::debug!(
                        "{} -> {}: new best length {} (was {})",
                        self.entry,
                        self.destination,
                        length,
                        best
                    );
                    checkpoint.store.clear();
                    checkpoint.store.push(overlay);
                    *best = length;
                    stats.improvements_found += 1;
                }
                Ordering::Equal => checkpoint.store.push(overlay),
                Ordering::Less => {}
            }
            return;
        }

        let candidates: Vec<Cell> = self
            .map
            .neighbors(frontier, true)
            .filter(|n| overlay.is_unused(*n))
            .collect();

        for &next in &candidates {
            let mut branch = overlay.clone();
            for &sibling in candidates.iter().filter(|c| **c != next) {
                branch.set(sibling, Mark::Blocked);
            }
            if self
                .oracle
                .is_reachable(self.map, &branch, next, self.destination, true)
            {
                checkpoint.stack.push(SearchState::new(branch, next));
                stats.branches_pushed += 1;
            } else {
                stats.branches_pruned += 1;
            }
        }
    }
}
