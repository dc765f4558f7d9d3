//! Classification of strategically significant squares.

use super::BOARD_SIZE;

pub const CORNERS: [(usize, usize); 4] = [(0, 0), (0, 7), (7, 0), (7, 7)];

/// Diagonal neighbors of the corners.
pub const X_SQUARES: [(usize, usize); 4] = [(1, 1), (1, 6), (6, 1), (6, 6)];

/// Edge neighbors of the corners.
pub const C_SQUARES: [(usize, usize); 8] = [
    (0, 1),
    (1, 0),
    (0, 6),
    (1, 7),
    (6, 0),
    (7, 1),
    (6, 7),
    (7, 6),
];

pub fn is_corner(row: usize, col: usize) -> bool {
    CORNERS.contains(&(row, col))
}

pub fn is_x_square(row: usize, col: usize) -> bool {
    X_SQUARES.contains(&(row, col))
}

pub fn is_c_square(row: usize, col: usize) -> bool {
    C_SQUARES.contains(&(row, col))
}

pub fn is_edge(row: usize, col: usize) -> bool {
    row == 0 || row == BOARD_SIZE - 1 || col == 0 || col == BOARD_SIZE - 1
}

/// The corner an X-square guards. Callers must pass an X-square.
pub fn x_square_corner(row: usize, col: usize) -> (usize, usize) {
    debug_assert!(is_x_square(row, col));
    (
        if row == 1 { 0 } else { BOARD_SIZE - 1 },
        if col == 1 { 0 } else { BOARD_SIZE - 1 },
    )
}
