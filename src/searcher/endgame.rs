//! Exact solver for the final plies: unpruned minimax to the end of the
//! game, maximizing the final disc differential.

use log::debug;

use crate::board::{Board, Color};
use crate::othello_move::Move;

/// Empty-square count at or below which the searcher switches to exact
/// solving.
pub const EXACT_SOLVE_THRESHOLD: u32 = 6;

/// Plays every legal move out to the end of the game and picks the one with
/// the best final disc differential. Ties keep the first move found in
/// generation order.
pub fn solve(board: &Board, color: Color) -> Option<Move> {
    let moves = board.get_valid_moves(color);
    if moves.is_empty() {
        return None;
    }

    debug!(
        "exact endgame solve over {} moves, {} empty squares",
        moves.len(),
        board.empty_count()
    );

    let mut best: Option<Move> = None;
    for mut candidate in moves {
        let mut child = board.clone();
        child.make_move(candidate.row, candidate.col, color);
        candidate.score = final_disc_differential(&child, color, color.opposite());

        match best {
            Some(current) if candidate.score <= current.score => (),
            _ => best = Some(candidate),
        }
    }
    best
}

/// Exhaustive minimax over the remaining plies. A side with no legal moves
/// passes; the game ends only once both sides are blocked.
fn final_disc_differential(board: &Board, perspective: Color, to_move: Color) -> i32 {
    if board.is_game_over() {
        return board.count_discs(perspective) as i32
            - board.count_discs(perspective.opposite()) as i32;
    }

    let moves = board.get_valid_moves(to_move);
    if moves.is_empty() {
        return final_disc_differential(board, perspective, to_move.opposite());
    }

    let maximizing = to_move == perspective;
    let mut best = if maximizing { i32::MIN } else { i32::MAX };
    for mv in moves {
        let mut child = board.clone();
        child.make_move(mv.row, mv.col, to_move);
        let score = final_disc_differential(&child, perspective, to_move.opposite());
        best = if maximizing {
            best.max(score)
        } else {
            best.min(score)
        };
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::othello_position;

    fn two_empty_corners() -> Board {
        othello_position! {
            .WWWWWW.
            WWWWWWWW
            WWWWWWWW
            WWWWWWWW
            WWWWWWWW
            WWWWWWWW
            WWWWWWWW
            BBBBBBBB
        }
    }

    #[test]
    fn test_solver_maximizes_the_final_disc_differential() {
        let board = two_empty_corners();
        let best = solve(&board, Color::Black).unwrap();

        let moves = board.get_valid_moves(Color::Black);
        assert!(!moves.is_empty());
        let mut best_diff = i32::MIN;
        let mut first_best = None;
        for mv in moves {
            let mut child = board.clone();
            assert!(child.make_move(mv.row, mv.col, Color::Black));
            let diff = final_disc_differential(&child, Color::Black, Color::White);
            if diff > best_diff {
                best_diff = diff;
                first_best = Some(mv);
            }
        }

        assert_eq!(best, first_best.unwrap());
        assert_eq!(best.score, best_diff);
    }

    #[test]
    fn test_solver_plays_through_a_forced_pass() {
        // After black takes a1, white has no reply and must pass; black then
        // finishes in the other corner, flipping three full lines.
        let board = two_empty_corners();
        let best = solve(&board, Color::Black).unwrap();
        assert_eq!(best, Move::new(0, 0));
        assert_eq!(best.score, 16);
    }

    #[test]
    fn test_solver_returns_none_without_moves() {
        let board = othello_position! {
            B.......
            ........
            ........
            ........
            ........
            ........
            ........
            ........
        };
        assert!(solve(&board, Color::Black).is_none());
        assert!(solve(&board, Color::White).is_none());
    }
}
