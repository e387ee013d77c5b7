//! Configuration types for search sessions

use std::path::PathBuf;
use std::time::Duration;

/// How a checkpoint that exists but cannot be parsed is treated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CheckpointPolicy {
    /// Log a warning and restart the pair from a fresh seed
    #[default]
    Lenient,
    /// Fail the pair's worker with the corruption error
    Strict,
}

impl std::fmt::Display for CheckpointPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CheckpointPolicy::Lenient => write!(f, "lenient"),
            CheckpointPolicy::Strict => write!(f, "strict"),
        }
    }
}

impl std::str::FromStr for CheckpointPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "lenient" => Ok(CheckpointPolicy::Lenient),
            "strict" => Ok(CheckpointPolicy::Strict),
            _ => Err(format!(
                "Unknown checkpoint policy: '{}'. Valid options: lenient, strict",
                s
            )),
        }
    }
}

/// Per-worker search configuration
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Wall-clock budget for each pair's run
    pub time_budget: Duration,
    /// Directory holding checkpoint and result files
    pub checkpoint_dir: PathBuf,
    /// Corrupt-checkpoint handling
    pub checkpoint_policy: CheckpointPolicy,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            time_budget: Duration::from_secs(60),
            checkpoint_dir: PathBuf::from("."),
            checkpoint_policy: CheckpointPolicy::default(),
        }
    }
}

impl SearchConfig {
    pub fn with_time_budget(mut self, budget: Duration) -> Self {
        self.time_budget = budget;
        self
    }

    /// Budget given in (possibly fractional) minutes. Negative, non-finite
    /// and unrepresentably large values are rejected.
    pub fn with_minutes(self, minutes: f64) -> Result<Self, String> {
        if !minutes.is_finite() || minutes < 0.0 {
            return Err(format!("time budget must be a non-negative number of minutes, got {minutes}"));
        }
        let budget = Duration::try_from_secs_f64(minutes * 60.0)
            .map_err(|e| format!("time budget of {minutes} minutes is out of range: {e}"))?;
        Ok(self.with_time_budget(budget))
    }

    pub fn with_checkpoint_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.checkpoint_dir = dir.into();
        self
    }

    pub fn with_checkpoint_policy(mut self, policy: CheckpointPolicy) -> Self {
        self.checkpoint_policy = policy;
        self
    }

    pub fn strict(self) -> Self {
        self.with_checkpoint_policy(CheckpointPolicy::Strict)
    }
}
