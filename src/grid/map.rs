//! The immutable base layout plus its entry and exit zone tables

use super::{Cell, CellKind, Mark, Overlay};
use crate::error::MapError;
use std::collections::HashSet;
use std::fmt::Write as _;

/// An ordered table of zone cells, each carrying the length of the
/// unmodeled corridor between that cell and the true spawn or core.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Zone {
    cells: Vec<(Cell, usize)>,
}

impl Zone {
    pub fn new(cells: Vec<(Cell, usize)>) -> Self {
        Self { cells }
    }

    /// Length offset of `cell`, or `None` if the cell is not in this zone.
    pub fn offset(&self, cell: Cell) -> Option<usize> {
        self.cells
            .iter()
            .find(|(c, _)| *c == cell)
            .map(|(_, offset)| *offset)
    }

    pub fn contains(&self, cell: Cell) -> bool {
        self.offset(cell).is_some()
    }

    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells.iter().map(|(c, _)| *c)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// A fixed R x C playing field.
///
/// Constructed once from static data and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridMap {
    name: String,
    rows: usize,
    cols: usize,
    kinds: Vec<CellKind>,
    entrances: Zone,
    exits: Zone,
}

impl GridMap {
    /// Build a map from a rectangular layout and its zone tables.
    ///
    /// Fails with [`MapError::InvalidLayout`] if the layout is empty or ragged,
    /// a zone cell is out of bounds or cannot carry a path, the zones overlap,
    /// or either zone is empty.
    pub fn new(
        name: impl Into<String>,
        layout: Vec<Vec<CellKind>>,
        entrances: Zone,
        exits: Zone,
    ) -> Result<Self, MapError> {
        let name = name.into();
        let invalid = |reason: String| MapError::InvalidLayout {
            map: name.clone(),
            reason,
        };

        let rows = layout.len();
        let cols = layout.first().map_or(0, Vec::len);
        if rows == 0 || cols == 0 {
            return Err(invalid("layout is empty".to_string()));
        }
        if let Some(row) = layout.iter().position(|r| r.len() != cols) {
            return Err(invalid(format!(
                "row {row} has {} cells, expected {cols}",
                layout[row].len()
            )));
        }
        if entrances.is_empty() {
            return Err(invalid("entry zone is empty".to_string()));
        }
        if exits.is_empty() {
            return Err(invalid("exit zone is empty".to_string()));
        }

        let kinds: Vec<CellKind> = layout.into_iter().flatten().collect();
        for (label, zone) in [("entry", &entrances), ("exit", &exits)] {
            let mut seen = HashSet::new();
            for cell in zone.cells() {
                if !seen.insert(cell) {
                    return Err(invalid(format!("{label} cell {cell} is listed twice")));
                }
                if cell.row >= rows || cell.col >= cols {
                    return Err(invalid(format!("{label} cell {cell} is out of bounds")));
                }
                let kind = kinds[cell.row * cols + cell.col];
                if !kind.is_path_bearing() {
                    return Err(invalid(format!(
                        "{label} cell {cell} has kind {kind:?}, which cannot carry a path"
                    )));
                }
            }
        }
        if let Some(cell) = entrances.cells().find(|c| exits.contains(*c)) {
            return Err(invalid(format!("cell {cell} is both an entry and an exit")));
        }

        Ok(Self {
            name,
            rows,
            cols,
            kinds,
            entrances,
            exits,
        })
    }

    /// Build a map from numeric cell codes (see [`CellKind`]).
    pub fn from_codes(
        name: impl Into<String>,
        codes: &[&[u8]],
        entrances: &[((usize, usize), usize)],
        exits: &[((usize, usize), usize)],
    ) -> Result<Self, MapError> {
        let name = name.into();
        let mut layout = Vec::with_capacity(codes.len());
        for (r, row) in codes.iter().enumerate() {
            let mut kinds = Vec::with_capacity(row.len());
            for (c, &code) in row.iter().enumerate() {
                let kind = CellKind::try_from(code).map_err(|code| MapError::InvalidLayout {
                    map: name.clone(),
                    reason: format!("unknown cell code {code} at ({r}, {c})"),
                })?;
                kinds.push(kind);
            }
            layout.push(kinds);
        }
        let zone = |table: &[((usize, usize), usize)]| {
            Zone::new(table.iter().map(|&(c, o)| (Cell::from(c), o)).collect())
        };
        Self::new(name, layout, zone(entrances), zone(exits))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn entrances(&self) -> &Zone {
        &self.entrances
    }

    pub fn exits(&self) -> &Zone {
        &self.exits
    }

    /// Flat row-major index of an in-bounds cell.
    pub fn index(&self, cell: Cell) -> usize {
        cell.row * self.cols + cell.col
    }

    pub fn kind(&self, cell: Cell) -> CellKind {
        self.kinds[self.index(cell)]
    }

    /// In-bounds orthogonal neighbours of `cell` whose base kind is admitted
    /// under `only_buildable`. Pure function of the base layout.
    pub fn neighbors(&self, cell: Cell, only_buildable: bool) -> impl Iterator<Item = Cell> + '_ {
        cell.adjacent(self.rows, self.cols)
            .filter(move |n| self.kind(*n).admits(only_buildable))
    }

    /// Every (entry, exit) combination, entry-major in zone-table order.
    pub fn pairs(&self) -> Vec<(Cell, Cell)> {
        self.entrances
            .cells()
            .flat_map(|entry| self.exits.cells().map(move |exit| (entry, exit)))
            .collect()
    }

    /// Combined corridor length for a pair.
    pub fn length_offset(&self, entry: Cell, exit: Cell) -> Result<usize, MapError> {
        match (self.entrances.offset(entry), self.exits.offset(exit)) {
            (Some(a), Some(b)) => Ok(a + b),
            _ => Err(MapError::InvalidPair {
                map: self.name.clone(),
                entry,
                exit,
            }),
        }
    }

    /// Render a path overlay as text: path cells as `o`, everything else
    /// as the base-kind symbol.
    pub fn render(&self, overlay: &Overlay) -> String {
        let mut out = String::with_capacity(self.rows * (self.cols * 2 + 1));
        for row in 0..self.rows {
            for col in 0..self.cols {
                let cell = Cell::new(row, col);
                let symbol = match overlay.mark(cell) {
                    Mark::PathUsed => 'o',
                    _ => self.kind(cell).symbol(),
                };
                if col > 0 {
                    out.push(' ');
                }
                out.push(symbol);
            }
            let _ = writeln!(out);
        }
        out
    }
}
