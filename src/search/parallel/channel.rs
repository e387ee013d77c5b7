//! Messages from pair workers to the coordinator.

use crate::grid::Cell;
use crate::search::result::SearchStatistics;
use crossbeam_channel::{unbounded, Receiver, Sender};

/// Message sent from a worker when its session ends.
#[derive(Debug, Clone)]
pub enum WorkerMessage {
    /// The worker ran its budget and saved its checkpoint.
    Finished {
        pair: (Cell, Cell),
        statistics: SearchStatistics,
        /// Whether the pair's stack is now empty
        finished: bool,
    },
    /// The worker could not load, search or save its pair.
    Failed { pair: (Cell, Cell), message: String },
}

impl WorkerMessage {
    pub fn pair(&self) -> (Cell, Cell) {
        match self {
            WorkerMessage::Finished { pair, .. } | WorkerMessage::Failed { pair, .. } => *pair,
        }
    }
}

/// Channel endpoints for the coordinator.
pub struct CoordinatorChannels {
    /// Receive messages from workers.
    pub from_workers: Receiver<WorkerMessage>,
}

/// Create one sender per worker and the coordinator's receiver.
///
/// The coordinator holds no sender, so the channel disconnects once every
/// worker has exited, even one that died without reporting.
pub fn create_channels(num_workers: usize) -> (CoordinatorChannels, Vec<Sender<WorkerMessage>>) {
    let (worker_tx, coordinator_rx) = unbounded();
    let senders = (0..num_workers).map(|_| worker_tx.clone()).collect();
    (
        CoordinatorChannels {
            from_workers: coordinator_rx,
        },
        senders,
    )
}
