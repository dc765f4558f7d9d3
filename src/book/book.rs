use rustc_hash::FxHashMap;

use crate::board::{Board, Color};
use crate::othello_move::Move;

/// Score attached to a book move, marking it as played without search.
pub const BOOK_MOVE_SCORE: i32 = 999;

/// Preferred early-game coordinates indexed by the number of discs on the
/// board. Consulted only while the disc count has a listed line.
pub struct OpeningBook {
    lines: FxHashMap<u32, Vec<(usize, usize)>>,
}

impl Default for OpeningBook {
    fn default() -> Self {
        Self::new()
    }
}

impl OpeningBook {
    /// The nine standard early lines, from the diagonal opening at 4 discs
    /// through the buffalo opening at 12.
    pub fn new() -> Self {
        let mut lines = FxHashMap::default();
        lines.insert(4, vec![(2, 3), (3, 2), (4, 5), (5, 4)]); // diagonal
        lines.insert(5, vec![(2, 4), (4, 2), (3, 5), (5, 3)]); // parallel
        lines.insert(6, vec![(2, 5), (5, 2), (2, 2), (5, 5)]); // sonata
        lines.insert(7, vec![(1, 3), (3, 1), (6, 4), (4, 6)]); // rose
        lines.insert(8, vec![(1, 4), (4, 1), (6, 3), (3, 6)]); // bergamo
        lines.insert(9, vec![(1, 5), (5, 1), (6, 2), (2, 6)]); // italian
        lines.insert(10, vec![(0, 3), (3, 0), (7, 4), (4, 7)]); // tiger
        lines.insert(11, vec![(0, 4), (4, 0), (7, 3), (3, 7)]); // cat
        lines.insert(12, vec![(0, 5), (5, 0), (7, 2), (2, 7)]); // buffalo
        Self { lines }
    }

    /// The first listed coordinate that is currently legal for `color`, if
    /// the book has a line for this many discs placed.
    pub fn lookup(&self, board: &Board, color: Color) -> Option<Move> {
        let placed = board.discs_placed();
        self.lines
            .get(&placed)?
            .iter()
            .find(|&&(row, col)| board.is_valid_move(row, col, color))
            .map(|&(row, col)| Move::with_score(row, col, BOOK_MOVE_SCORE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::othello_position;

    #[test]
    fn test_book_hit_on_initial_position() {
        let book = OpeningBook::new();
        let board = Board::new();

        let book_move = book.lookup(&board, Color::Black).unwrap();
        assert_eq!(book_move, Move::new(2, 3));
        assert_eq!(book_move.score, BOOK_MOVE_SCORE);
    }

    #[test]
    fn test_book_skips_illegal_listed_moves() {
        let mut board = Board::new();
        assert!(board.make_move(2, 3, Color::Black));
        assert!(board.make_move(4, 2, Color::White));
        assert_eq!(board.discs_placed(), 6);

        // (2,5) is not legal for black here, so the sonata line falls
        // through to (5,2).
        let book = OpeningBook::new();
        let book_move = book.lookup(&board, Color::Black).unwrap();
        assert_eq!(book_move, Move::new(5, 2));
    }

    #[test]
    fn test_book_misses_when_no_listed_move_is_legal() {
        let board = othello_position! {
            B......B
            ........
            ........
            ........
            ........
            ........
            ........
            W......W
        };
        assert_eq!(board.discs_placed(), 4);

        let book = OpeningBook::new();
        assert!(book.lookup(&board, Color::Black).is_none());
    }

    #[test]
    fn test_book_runs_out_past_twelve_discs() {
        let book = OpeningBook::new();
        let mut board = Board::empty();
        for col in 0..8 {
            board.put(0, col, Color::Black).unwrap();
            board.put(7, col, Color::White).unwrap();
        }
        assert_eq!(board.discs_placed(), 16);
        assert!(book.lookup(&board, Color::Black).is_none());
    }
}
