//! Grid data model: cells, cell kinds, the immutable map and per-search overlays

pub mod map;
pub mod overlay;

pub use map::{GridMap, Zone};
pub use overlay::Overlay;

use serde::{Deserialize, Serialize};
use std::fmt;

/// A (row, column) coordinate on a grid.
///
/// Serializes as a two-element array so checkpoint files keep the
/// `[row, col]` tuple shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "(usize, usize)", into = "(usize, usize)")]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// The up-to-four orthogonal neighbours that lie inside a `rows` x `cols` grid.
    pub fn adjacent(self, rows: usize, cols: usize) -> impl Iterator<Item = Cell> {
        const SHIFTS: [(isize, isize); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
        SHIFTS.into_iter().filter_map(move |(dr, dc)| {
            let row = self.row.checked_add_signed(dr)?;
            let col = self.col.checked_add_signed(dc)?;
            (row < rows && col < cols).then_some(Cell { row, col })
        })
    }
}

impl From<(usize, usize)> for Cell {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

impl From<Cell> for (usize, usize) {
    fn from(cell: Cell) -> Self {
        (cell.row, cell.col)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Immutable kind of a base-layout cell.
///
/// The discriminants are the codes used by map files and the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum CellKind {
    /// Open terrain a maze may be built through
    Buildable = 0,
    /// Walkable terrain that cannot carry the maze
    Passable = 1,
    Spawn = 2,
    Core = 3,
    Impassable = 4,
}

impl CellKind {
    /// Whether a maze path may occupy this cell.
    ///
    /// Zone endpoints can be flagged `Spawn`/`Core` and still carry the path.
    pub fn is_path_bearing(self) -> bool {
        matches!(self, CellKind::Buildable | CellKind::Spawn | CellKind::Core)
    }

    /// Whether a walker can stand on this cell at all.
    pub fn is_walkable(self) -> bool {
        self < CellKind::Impassable
    }

    /// Eligibility under the `only_buildable` switch used by neighbour queries.
    pub fn admits(self, only_buildable: bool) -> bool {
        if only_buildable {
            self.is_path_bearing()
        } else {
            self.is_walkable()
        }
    }

    pub fn symbol(self) -> char {
        match self {
            CellKind::Buildable => '.',
            CellKind::Passable => ',',
            CellKind::Spawn => 'S',
            CellKind::Core => 'C',
            CellKind::Impassable => '#',
        }
    }
}

impl TryFrom<u8> for CellKind {
    type Error = u8;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(CellKind::Buildable),
            1 => Ok(CellKind::Passable),
            2 => Ok(CellKind::Spawn),
            3 => Ok(CellKind::Core),
            4 => Ok(CellKind::Impassable),
            other => Err(other),
        }
    }
}

/// Overlay marking of a single cell during one search branch.
///
/// Marks only ever move away from `Unused`; they never revert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum Mark {
    #[default]
    Unused = 0,
    PathUsed = 1,
    Blocked = 2,
}

impl TryFrom<u8> for Mark {
    type Error = u8;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Mark::Unused),
            1 => Ok(Mark::PathUsed),
            2 => Ok(Mark::Blocked),
            other => Err(other),
        }
    }
}
