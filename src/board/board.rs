//! Othello board state representation.

use std::cmp::Ordering;

use super::color::Color;
use super::error::BoardError;
use super::{BOARD_SIZE, DIRECTIONS};
use crate::othello_move::{Move, MoveList};

/// The authoritative rules engine: an 8x8 grid of cells, each empty or
/// holding a disc. The only mutator is [`Board::make_move`]; the search
/// simulates hypothetical moves on clones, never on the caller's board.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    grid: [[Option<Color>; BOARD_SIZE]; BOARD_SIZE],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// A board with the four center discs in the standard diagonal pattern:
    /// White on (3,3) and (4,4), Black on (3,4) and (4,3).
    pub fn new() -> Self {
        let mut board = Self::empty();
        let mid = BOARD_SIZE / 2;
        board.grid[mid - 1][mid - 1] = Some(Color::White);
        board.grid[mid - 1][mid] = Some(Color::Black);
        board.grid[mid][mid - 1] = Some(Color::Black);
        board.grid[mid][mid] = Some(Color::White);
        board
    }

    /// A board with no discs at all. Positions are built up with [`Board::put`].
    pub fn empty() -> Self {
        Self {
            grid: [[None; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    pub fn get(&self, row: usize, col: usize) -> Option<Color> {
        if row < BOARD_SIZE && col < BOARD_SIZE {
            self.grid[row][col]
        } else {
            None
        }
    }

    /// Places a disc without applying any game rules. Used to set up test
    /// positions; game play goes through [`Board::make_move`].
    #[must_use = "putting a disc fails on occupied or out-of-bounds squares"]
    pub fn put(&mut self, row: usize, col: usize, color: Color) -> Result<(), BoardError> {
        if row >= BOARD_SIZE || col >= BOARD_SIZE {
            return Err(BoardError::OutOfBoundsBoardPutError { row, col });
        }
        if self.grid[row][col].is_some() {
            return Err(BoardError::SquareOccupiedBoardPutError);
        }
        self.grid[row][col] = Some(color);
        Ok(())
    }

    /// True iff the square is in bounds, empty, and at least one of the 8
    /// rays from it holds a closed opponent run. Out-of-bounds coordinates
    /// are treated as illegal moves, never as an error.
    pub fn is_valid_move(&self, row: usize, col: usize, color: Color) -> bool {
        if row >= BOARD_SIZE || col >= BOARD_SIZE {
            return false;
        }
        if self.grid[row][col].is_some() {
            return false;
        }
        DIRECTIONS
            .iter()
            .any(|&(dr, dc)| self.can_flip_direction(row, col, dr, dc, color))
    }

    /// Walks from (row, col) along (dr, dc) looking for a contiguous run of
    /// one or more opponent discs capped by an own disc.
    fn can_flip_direction(&self, row: usize, col: usize, dr: i8, dc: i8, color: Color) -> bool {
        let opponent = color.opposite();
        let mut r = row as i8 + dr;
        let mut c = col as i8 + dc;
        let mut found_opponent = false;

        while (0..BOARD_SIZE as i8).contains(&r) && (0..BOARD_SIZE as i8).contains(&c) {
            match self.grid[r as usize][c as usize] {
                None => return false,
                Some(cell) if cell == opponent => found_opponent = true,
                Some(_) => return found_opponent,
            }
            r += dr;
            c += dc;
        }
        false
    }

    fn flip_direction(&mut self, row: usize, col: usize, dr: i8, dc: i8, color: Color) {
        let opponent = color.opposite();
        let mut r = row as i8 + dr;
        let mut c = col as i8 + dc;

        while (0..BOARD_SIZE as i8).contains(&r) && (0..BOARD_SIZE as i8).contains(&c) {
            match self.grid[r as usize][c as usize] {
                Some(cell) if cell == opponent => self.grid[r as usize][c as usize] = Some(color),
                _ => break,
            }
            r += dr;
            c += dc;
        }
    }

    /// All legal moves for `color`, scanned in row-major order. This is the
    /// baseline ordering before any re-ranking by the move orderer.
    pub fn get_valid_moves(&self, color: Color) -> MoveList {
        let mut moves = MoveList::new();
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                if self.is_valid_move(row, col, color) {
                    moves.push(Move::new(row, col));
                }
            }
        }
        moves
    }

    pub fn has_valid_move(&self, color: Color) -> bool {
        (0..BOARD_SIZE)
            .any(|row| (0..BOARD_SIZE).any(|col| self.is_valid_move(row, col, color)))
    }

    /// Places a disc for `color` and flips every closed opponent run around
    /// it. Returns false, leaving the board untouched, if the move is
    /// illegal or out of bounds.
    pub fn make_move(&mut self, row: usize, col: usize, color: Color) -> bool {
        if !self.is_valid_move(row, col, color) {
            return false;
        }

        self.grid[row][col] = Some(color);
        for &(dr, dc) in DIRECTIONS.iter() {
            if self.can_flip_direction(row, col, dr, dc, color) {
                self.flip_direction(row, col, dr, dc, color);
            }
        }
        true
    }

    pub fn count_discs(&self, color: Color) -> u32 {
        self.grid
            .iter()
            .flatten()
            .filter(|&&cell| cell == Some(color))
            .count() as u32
    }

    pub fn empty_count(&self) -> u32 {
        self.grid.iter().flatten().filter(|cell| cell.is_none()).count() as u32
    }

    pub fn discs_placed(&self) -> u32 {
        (BOARD_SIZE * BOARD_SIZE) as u32 - self.empty_count()
    }

    /// The game ends when neither side has a legal move, whether or not the
    /// board is full.
    pub fn is_game_over(&self) -> bool {
        !self.has_valid_move(Color::Black) && !self.has_valid_move(Color::White)
    }

    /// The majority side once the game is over. `None` while the game is
    /// still running or on a drawn final count.
    pub fn get_winner(&self) -> Option<Color> {
        if !self.is_game_over() {
            return None;
        }

        let black_count = self.count_discs(Color::Black);
        let white_count = self.count_discs(Color::White);
        match black_count.cmp(&white_count) {
            Ordering::Greater => Some(Color::Black),
            Ordering::Less => Some(Color::White),
            Ordering::Equal => None,
        }
    }
}
