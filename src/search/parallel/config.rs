//! Configuration for parallel search execution.

/// How many pairs a session searches at once, and how they are chosen.
#[derive(Debug, Clone)]
pub struct ParallelConfig {
    /// Maximum number of pairs (and therefore worker threads) per session.
    pub num_workers: usize,
    /// Seed for the pair sampler; `None` draws one from the OS.
    pub base_seed: Option<u64>,
}

impl Default for ParallelConfig {
    fn default() -> Self {
        Self {
            num_workers: default_workers(),
            base_seed: None,
        }
    }
}

/// One core is left to the rest of the system.
fn default_workers() -> usize {
    num_cpus::get().saturating_sub(1).max(1)
}

impl ParallelConfig {
    /// Set the worker cap. At least one worker is always kept.
    pub fn with_workers(mut self, num_workers: usize) -> Self {
        self.num_workers = num_workers.max(1);
        self
    }

    /// Set the base random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.base_seed = Some(seed);
        self
    }

    /// Set the base random seed from an Option.
    pub fn with_seed_option(mut self, seed: Option<u64>) -> Self {
        self.base_seed = seed;
        self
    }

    /// Set the worker cap from an Option, keeping the default when `None`.
    pub fn with_workers_option(self, num_workers: Option<usize>) -> Self {
        match num_workers {
            Some(n) => self.with_workers(n),
            None => self,
        }
    }
}
