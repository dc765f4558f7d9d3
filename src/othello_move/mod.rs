//! Candidate moves and their scoring metadata.

use smallvec::SmallVec;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::board::BOARD_SIZE;

/// A candidate placement. The score is filled in after evaluation; moves are
/// value-like and carry no ownership over the board. Equality considers
/// coordinates only.
#[derive(Clone, Copy, Debug)]
pub struct Move {
    pub row: usize,
    pub col: usize,
    pub score: i32,
}

/// Legal-move collections stay on the stack; Othello positions top out
/// around 30 legal moves.
pub type MoveList = SmallVec<[Move; 32]>;

impl Move {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col, score: 0 }
    }

    pub fn with_score(row: usize, col: usize, score: i32) -> Self {
        Self { row, col, score }
    }

    pub fn coords(&self) -> (usize, usize) {
        (self.row, self.col)
    }

    /// Algebraic form: column letter then 1-based row number, e.g. `d3` for
    /// row 2, column 3.
    pub fn to_algebraic(&self) -> String {
        format!("{}{}", (b'a' + self.col as u8) as char, self.row + 1)
    }
}

impl PartialEq for Move {
    fn eq(&self, other: &Self) -> bool {
        self.row == other.row && self.col == other.col
    }
}

impl Eq for Move {}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_algebraic())
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ParseMoveError {
    #[error("move must be a column letter followed by a row number, e.g. `d3`")]
    MalformedMove,
    #[error("square `{0}` is outside the 8x8 board")]
    OutOfBounds(String),
}

impl FromStr for Move {
    type Err = ParseMoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let col_char = chars.next().ok_or(ParseMoveError::MalformedMove)?;
        let row_char = chars.next().ok_or(ParseMoveError::MalformedMove)?;
        if chars.next().is_some() {
            return Err(ParseMoveError::MalformedMove);
        }
        if !col_char.is_ascii_lowercase() {
            return Err(ParseMoveError::MalformedMove);
        }

        let col = (col_char as u8 - b'a') as usize;
        let row = row_char
            .to_digit(10)
            .ok_or(ParseMoveError::MalformedMove)? as usize;
        if row == 0 || row > BOARD_SIZE || col >= BOARD_SIZE {
            return Err(ParseMoveError::OutOfBounds(s.to_string()));
        }
        Ok(Move::new(row - 1, col))
    }
}
