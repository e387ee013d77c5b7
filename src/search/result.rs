//! Search statistics and run outcomes

use std::time::Duration;

/// Counters gathered while the engine consumes its stack
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchStatistics {
    /// Total time spent in the search loop
    pub elapsed_time: Duration,
    /// States popped from the stack
    pub states_expanded: u64,
    /// States whose frontier reached the destination
    pub completions: u64,
    /// Branches that passed the reachability check and were stacked
    pub branches_pushed: u64,
    /// Branches discarded because the destination was unreachable
    pub branches_pruned: u64,
    /// Number of times a strictly longer path replaced the store
    pub improvements_found: u64,
    /// Best path length known when the run ended
    pub best_length: usize,
}

impl SearchStatistics {
    /// Fold another worker's counters into this one.
    pub fn merge(&mut self, other: &SearchStatistics) {
        self.elapsed_time = self.elapsed_time.max(other.elapsed_time);
        self.states_expanded += other.states_expanded;
        self.completions += other.completions;
        self.branches_pushed += other.branches_pushed;
        self.branches_pruned += other.branches_pruned;
        self.improvements_found += other.improvements_found;
        self.best_length = self.best_length.max(other.best_length);
    }

    /// Fraction of generated branches removed by the oracle (0.0 to 1.0)
    pub fn prune_rate(&self) -> f64 {
        let generated = self.branches_pushed + self.branches_pruned;
        if generated == 0 {
            0.0
        } else {
            self.branches_pruned as f64 / generated as f64
        }
    }

    /// States expanded per second
    pub fn throughput(&self) -> f64 {
        let secs = self.elapsed_time.as_secs_f64();
        if secs == 0.0 {
            0.0
        } else {
            self.states_expanded as f64 / secs
        }
    }

    /// Format statistics as a human-readable string
    pub fn format_summary(&self) -> String {
        let mut s = String::new();
        s.push_str(&format!("Time: {:.2?}\n", self.elapsed_time));
        s.push_str(&format!("States expanded: {}\n", self.states_expanded));
        s.push_str(&format!("Throughput: {:.0} states/sec\n", self.throughput()));
        s.push_str(&format!("Completed paths: {}\n", self.completions));
        s.push_str(&format!(
            "Branches pruned: {} ({:.2}%)\n",
            self.branches_pruned,
            self.prune_rate() * 100.0
        ));
        s.push_str(&format!("Improvements found: {}\n", self.improvements_found));
        s.push_str(&format!("Best length: {}\n", self.best_length));
        s
    }
}

/// What a single engine run produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOutcome {
    pub statistics: SearchStatistics,
    /// Whether the stack was exhausted, i.e. the pair is solved
    pub finished: bool,
}
