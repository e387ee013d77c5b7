//! Serializable traversal state: pending search states and the best-path store

use crate::error::MapError;
use crate::grid::{Cell, GridMap, Mark, Overlay};
use serde::{Deserialize, Serialize};

/// A partial path awaiting expansion: an overlay plus the frontier cell.
///
/// The frontier is tentatively unmarked while the state sits on the stack
/// and is committed to path-used when the state is popped. Serialized as
/// `[overlay, [row, col]]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "(Overlay, Cell)", into = "(Overlay, Cell)")]
pub struct SearchState {
    pub overlay: Overlay,
    pub frontier: Cell,
}

impl SearchState {
    pub fn new(overlay: Overlay, frontier: Cell) -> Self {
        Self { overlay, frontier }
    }
}

impl From<(Overlay, Cell)> for SearchState {
    fn from((overlay, frontier): (Overlay, Cell)) -> Self {
        Self { overlay, frontier }
    }
}

impl From<SearchState> for (Overlay, Cell) {
    fn from(state: SearchState) -> Self {
        (state.overlay, state.frontier)
    }
}

/// The persisted `[store, stack]` record for one entry/exit pair.
///
/// `store` holds every completed overlay tied at the best length found so
/// far; `stack` is the LIFO work list that replaces recursion.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "(Vec<Overlay>, Vec<SearchState>)", into = "(Vec<Overlay>, Vec<SearchState>)")]
pub struct Checkpoint {
    pub store: Vec<Overlay>,
    pub stack: Vec<SearchState>,
}

impl Checkpoint {
    /// Fresh search for `entry -> exit`: every other zone cell is blocked and
    /// the single seed state sits at the entry.
    pub fn seed(map: &GridMap, entry: Cell, exit: Cell) -> Result<Self, MapError> {
        map.length_offset(entry, exit)?;
        Ok(Self::fresh(map, entry, exit))
    }

    /// Seed without checking that the pair belongs to the map's zones.
    pub(crate) fn fresh(map: &GridMap, entry: Cell, exit: Cell) -> Self {
        let mut overlay = Overlay::new(map.rows(), map.cols());
        let others = map
            .entrances()
            .cells()
            .filter(|c| *c != entry)
            .chain(map.exits().cells().filter(|c| *c != exit));
        for cell in others {
            overlay.set(cell, Mark::Blocked);
        }

        Self {
            store: Vec::new(),
            stack: vec![SearchState::new(overlay, entry)],
        }
    }

    /// A pair is finished once no pending work remains.
    pub fn is_finished(&self) -> bool {
        self.stack.is_empty()
    }

    /// Check that every overlay matches the map's dimensions and every
    /// frontier lies on the grid.
    pub fn validate(&self, map: &GridMap) -> Result<(), String> {
        let fits = |o: &Overlay| o.rows() == map.rows() && o.cols() == map.cols();
        if let Some(i) = self.store.iter().position(|o| !fits(o)) {
            return Err(format!(
                "stored path {i} is {}x{}, map is {}x{}",
                self.store[i].rows(),
                self.store[i].cols(),
                map.rows(),
                map.cols()
            ));
        }
        for (i, state) in self.stack.iter().enumerate() {
            if !fits(&state.overlay) {
                return Err(format!("stack entry {i} has mismatched dimensions"));
            }
            if !state.overlay.contains(state.frontier) {
                return Err(format!(
                    "stack entry {i} has frontier {} outside the map",
                    state.frontier
                ));
            }
            if !state.overlay.is_unused(state.frontier) {
                return Err(format!(
                    "stack entry {i} has frontier {} already marked {:?}",
                    state.frontier,
                    state.overlay.mark(state.frontier)
                ));
            }
        }
        Ok(())
    }
}

impl From<(Vec<Overlay>, Vec<SearchState>)> for Checkpoint {
    fn from((store, stack): (Vec<Overlay>, Vec<SearchState>)) -> Self {
        Self { store, stack }
    }
}

impl From<Checkpoint> for (Vec<Overlay>, Vec<SearchState>) {
    fn from(checkpoint: Checkpoint) -> Self {
        (checkpoint.store, checkpoint.stack)
    }
}

/// Length of a completed path: corridor offset plus the moves inside the field.
pub fn path_length(overlay: &Overlay, length_offset: usize) -> usize {
    length_offset + overlay.path_cells().saturating_sub(1)
}

/// Best length implied by a store, or 0 when it is empty.
pub fn store_length(store: &[Overlay], length_offset: usize) -> usize {
    store
        .first()
        .map_or(0, |overlay| path_length(overlay, length_offset))
}
