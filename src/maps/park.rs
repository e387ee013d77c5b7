//! Park: a single spawn on the west edge feeding a 2x2 core in the south-west
//!
//! Path lengths on this map count moves from the spawn to the core, so a
//! path is one shorter than its count of cells.

/// Cell codes, see [`crate::grid::CellKind`].
pub const LAYOUT: [[u8; 16]; 14] = [
    [4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 0, 0, 0, 0, 0],
    [1, 1, 1, 1, 0, 0, 0, 0, 0, 4, 4, 0, 0, 0, 0, 0],
    [2, 1, 1, 1, 0, 0, 0, 0, 0, 4, 4, 0, 0, 0, 0, 0],
    [1, 1, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
    [1, 1, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
    [4, 4, 4, 4, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
    [4, 4, 4, 4, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
    [4, 4, 4, 4, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
    [4, 4, 4, 4, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
    [4, 4, 4, 4, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 4, 0],
    [4, 4, 4, 4, 1, 1, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0],
    [4, 4, 4, 4, 1, 3, 3, 1, 0, 0, 0, 0, 0, 0, 0, 0],
    [4, 4, 4, 4, 1, 3, 3, 1, 0, 0, 0, 4, 0, 0, 0, 0],
    [4, 4, 4, 4, 1, 1, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0],
];

/// Moves from the spawn to each entry cell.
pub const ENTRANCES: [((usize, usize), usize); 4] =
    [((1, 4), 5), ((2, 4), 4), ((3, 4), 5), ((4, 4), 6)];

/// Moves from each exit cell into the core.
pub const EXITS: [((usize, usize), usize); 8] = [
    ((9, 4), 3),
    ((9, 5), 2),
    ((9, 6), 2),
    ((9, 7), 3),
    ((10, 8), 3),
    ((11, 8), 2),
    ((12, 8), 2),
    ((13, 8), 3),
];
