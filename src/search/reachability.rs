//! Breadth-first reachability oracle used to prune dead branches
//!
//! A candidate move is only worth stacking if the destination can still be
//! reached from it under the branch's blocking. The oracle runs on every
//! candidate, so it keeps its scratch buffers between calls: the visited set
//! is a generation-stamped array and the queue is reused, which makes a query
//! allocation-free once the buffers have grown to the grid size.

use crate::grid::{Cell, GridMap, Overlay};
use std::collections::VecDeque;

/// Reusable BFS connectivity test over a map and overlay.
#[derive(Debug, Default)]
pub struct ReachabilityOracle {
    stamps: Vec<u32>,
    generation: u32,
    queue: VecDeque<Cell>,
    queries: u64,
}

impl ReachabilityOracle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of queries answered so far.
    pub fn queries(&self) -> u64 {
        self.queries
    }

    /// Whether `to` can be reached from `from` stepping only through cells
    /// that are unmarked in `overlay` and admitted by `only_buildable`.
    ///
    /// Returns `false` immediately if either endpoint is already unusable.
    pub fn is_reachable(
        &mut self,
        map: &GridMap,
        overlay: &Overlay,
        from: Cell,
        to: Cell,
        only_buildable: bool,
    ) -> bool {
        self.queries += 1;

        let open = |cell: Cell| overlay.is_unused(cell) && map.kind(cell).admits(only_buildable);
        if !open(from) || !open(to) {
            return false;
        }
        if from == to {
            return true;
        }

        self.begin(map.rows() * map.cols());
        self.visit(map.index(from));
        self.queue.push_back(from);

        while let Some(cell) = self.queue.pop_front() {
            for next in map.neighbors(cell, only_buildable) {
                if !overlay.is_unused(next) {
                    continue;
                }
                if next == to {
                    return true;
                }
                if self.visit(map.index(next)) {
                    self.queue.push_back(next);
                }
            }
        }
        false
    }

    /// Start a new query generation, resetting stamps only on wrap-around.
    fn begin(&mut self, cells: usize) {
        if self.stamps.len() < cells {
            self.stamps.resize(cells, 0);
        }
        self.generation = self.generation.wrapping_add(1);
        if self.generation == 0 {
            self.stamps.fill(0);
            self.generation = 1;
        }
        self.queue.clear();
    }

    /// Mark an index visited; returns `false` if it already was.
    fn visit(&mut self, index: usize) -> bool {
        let stamp = &mut self.stamps[index];
        if *stamp == self.generation {
            false
        } else {
            *stamp = self.generation;
            true
        }
    }
}
