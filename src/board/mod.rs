//! Othello board representation and rules enforcement.

mod board;
pub mod color;
mod display;
mod error;
pub mod squares;


pub use board::Board;
pub use color::Color;
pub use error::BoardError;

pub const BOARD_SIZE: usize = 8;

/// The 8 compass directions used for flip legality and stability ray walks.
pub const DIRECTIONS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];
