//! Depth-limited alpha-beta search with an opening book and an exact
//! endgame solver.

mod endgame;
mod move_ordering;

#[cfg(test)]
mod tests;

pub use endgame::{solve as solve_endgame, EXACT_SOLVE_THRESHOLD};
pub use move_ordering::sort_moves;

use log::debug;

use crate::board::{Board, Color};
use crate::book::OpeningBook;
use crate::evaluate::{Evaluator, GamePhase};
use crate::othello_move::Move;

/// Empty-square count at or below which the base depth is raised toward an
/// exact finish without paying for a full solve.
const DEEPENING_THRESHOLD: u32 = 10;
const MAX_DEEPENED_DEPTH: u8 = 8;

/// Move-selection engine. Owns its opening book and evaluator (and through
/// it the stability memo); reusing one searcher across a game keeps the
/// memo warm. The search runs synchronously on the calling thread and holds
/// no other state between calls.
pub struct Searcher {
    book: OpeningBook,
    evaluator: Evaluator,
    searched_position_count: usize,
}

impl Default for Searcher {
    fn default() -> Self {
        Self::new()
    }
}

impl Searcher {
    pub fn new() -> Self {
        Self {
            book: OpeningBook::new(),
            evaluator: Evaluator::new(),
            searched_position_count: 0,
        }
    }

    /// Positions visited by the most recent search.
    pub fn searched_position_count(&self) -> usize {
        self.searched_position_count
    }

    /// Picks the best move for `color`, or `None` when the side has to
    /// pass. The caller's board is never mutated; apply the returned
    /// coordinates with `make_move`.
    pub fn get_best_move(&mut self, board: &Board, color: Color) -> Option<Move> {
        let mut moves = board.get_valid_moves(color);
        if moves.is_empty() {
            return None;
        }

        self.searched_position_count = 0;

        let empty_count = board.empty_count();
        let phase = GamePhase::from_empty_count(empty_count);
        let mut depth = phase.search_depth();

        if empty_count <= EXACT_SOLVE_THRESHOLD {
            return endgame::solve(board, color);
        }
        if empty_count <= DEEPENING_THRESHOLD {
            depth = MAX_DEEPENED_DEPTH.min(empty_count as u8 + 2);
        }

        if let Some(book_move) = self.book.lookup(board, color) {
            debug!("opening book hit for {}: {}", color, book_move);
            return Some(book_move);
        }

        debug!(
            "{} search for {} at depth {}, {} empty squares",
            phase, color, depth, empty_count
        );

        move_ordering::sort_moves(&mut moves);

        let mut best: Option<Move> = None;
        for mut candidate in moves {
            let mut child = board.clone();
            child.make_move(candidate.row, candidate.col, color);
            candidate.score = self.minimax(&child, depth - 1, i32::MIN, i32::MAX, false, color);

            match best {
                Some(current) if candidate.score <= current.score => (),
                _ => best = Some(candidate),
            }
        }

        debug!(
            "searched {} positions, stability cache hit rate {:.1}%",
            self.searched_position_count,
            self.evaluator.stability_cache().hit_rate() * 100.0
        );
        best
    }

    fn minimax(
        &mut self,
        board: &Board,
        depth: u8,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
        perspective: Color,
    ) -> i32 {
        self.searched_position_count += 1;

        if depth == 0 || board.is_game_over() {
            return self.evaluator.score(board, perspective);
        }

        let to_move = if maximizing {
            perspective
        } else {
            perspective.opposite()
        };
        let moves = board.get_valid_moves(to_move);

        // forced pass: the turn flips and a ply of depth is still consumed
        if moves.is_empty() {
            return self.minimax(board, depth - 1, alpha, beta, !maximizing, perspective);
        }

        if maximizing {
            let mut best = i32::MIN;
            for mv in moves {
                let mut child = board.clone();
                child.make_move(mv.row, mv.col, to_move);
                let score = self.minimax(&child, depth - 1, alpha, beta, false, perspective);
                best = best.max(score);
                alpha = alpha.max(score);
                if beta <= alpha {
                    break;
                }
            }
            best
        } else {
            let mut best = i32::MAX;
            for mv in moves {
                let mut child = board.clone();
                child.make_move(mv.row, mv.col, to_move);
                let score = self.minimax(&child, depth - 1, alpha, beta, true, perspective);
                best = best.min(score);
                beta = beta.min(score);
                if beta <= alpha {
                    break;
                }
            }
            best
        }
    }
}
