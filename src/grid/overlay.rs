//! Per-search overlay of path/blocked markings over the base layout

use super::{Cell, Mark};
use serde::{Deserialize, Serialize};

/// A rows x cols grid of [`Mark`]s, stored flat in row-major order.
///
/// On disk an overlay is a 2-D array of small integers (`0` unused,
/// `1` path-used, `2` blocked).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "Vec<Vec<u8>>", try_from = "Vec<Vec<u8>>")]
pub struct Overlay {
    rows: usize,
    cols: usize,
    marks: Vec<Mark>,
}

impl Overlay {
    /// An all-unused overlay.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            marks: vec![Mark::Unused; rows * cols],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn contains(&self, cell: Cell) -> bool {
        cell.row < self.rows && cell.col < self.cols
    }

    pub fn mark(&self, cell: Cell) -> Mark {
        self.marks[cell.row * self.cols + cell.col]
    }

    pub fn is_unused(&self, cell: Cell) -> bool {
        self.mark(cell) == Mark::Unused
    }

    /// Mark a cell. Marks never revert: only unused cells may change.
    pub fn set(&mut self, cell: Cell, mark: Mark) {
        let slot = &mut self.marks[cell.row * self.cols + cell.col];
        debug_assert!(
            *slot == Mark::Unused || *slot == mark,
            "cell {cell} cannot go from {slot:?} to {mark:?}"
        );
        *slot = mark;
    }

    /// Number of cells marked path-used.
    pub fn path_cells(&self) -> usize {
        self.marks.iter().filter(|m| **m == Mark::PathUsed).count()
    }

    /// All path-used cells in row-major order.
    pub fn path(&self) -> impl Iterator<Item = Cell> + '_ {
        self.marks
            .iter()
            .enumerate()
            .filter(|(_, m)| **m == Mark::PathUsed)
            .map(|(i, _)| Cell::new(i / self.cols, i % self.cols))
    }
}

impl From<Overlay> for Vec<Vec<u8>> {
    fn from(overlay: Overlay) -> Self {
        overlay
            .marks
            .chunks(overlay.cols.max(1))
            .map(|row| row.iter().map(|m| *m as u8).collect())
            .collect()
    }
}

impl TryFrom<Vec<Vec<u8>>> for Overlay {
    type Error = String;

    fn try_from(rows: Vec<Vec<u8>>) -> Result<Self, Self::Error> {
        let cols = rows.first().map_or(0, Vec::len);
        if rows.is_empty() || cols == 0 {
            return Err("overlay has no cells".to_string());
        }
        let mut marks = Vec::with_capacity(rows.len() * cols);
        for (r, row) in rows.iter().enumerate() {
            if row.len() != cols {
                return Err(format!("overlay row {r} has {} cells, expected {cols}", row.len()));
            }
            for (c, &code) in row.iter().enumerate() {
                let mark = Mark::try_from(code)
                    .map_err(|code| format!("unknown overlay mark {code} at ({r}, {c})"))?;
                marks.push(mark);
            }
        }
        Ok(Self {
            rows: rows.len(),
            cols,
            marks,
        })
    }
}
