//! Resumable, parallel longest-maze search over grid playing fields.
//!
//! For every entry/exit pair of a map the [`search::SearchEngine`] runs a
//! depth-first search whose whole state lives in a serializable
//! [`search::Checkpoint`], so a session can stop at any point and a later
//! session resumes exactly where it left off. Pairs are searched in parallel
//! and their best paths are folded into one [`aggregate::Aggregate`].

pub mod aggregate;
pub mod checkpoint;
pub mod error;
pub mod grid;
pub mod maps;
pub mod schedule;
pub mod search;

pub use aggregate::{aggregate, Aggregate};
pub use checkpoint::CheckpointStore;
pub use error::{CheckpointError, Error, MapError, Result};
pub use grid::{Cell, CellKind, GridMap, Mark, Overlay, Zone};
pub use schedule::unfinished_pairs;
