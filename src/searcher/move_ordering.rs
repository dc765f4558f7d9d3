//! Candidate ordering for better alpha-beta pruning.

use std::cmp::Reverse;

use crate::board::squares;
use crate::evaluate::POSITION_WEIGHTS;
use crate::othello_move::Move;

/// Sorts candidate moves best-first: corners, then non-corner edge squares,
/// then by static table weight, with C-squares behind those and X-squares
/// last. Changes only the search order, never the move set; ties keep
/// generation order.
pub fn sort_moves(moves: &mut [Move]) {
    moves.sort_by_key(|mv| Reverse(move_priority(mv)));
}

fn move_priority(mv: &Move) -> i32 {
    if squares::is_corner(mv.row, mv.col) {
        10_000
    } else if squares::is_x_square(mv.row, mv.col) {
        -500
    } else if squares::is_c_square(mv.row, mv.col) {
        -100
    } else if squares::is_edge(mv.row, mv.col) {
        100
    } else {
        POSITION_WEIGHTS[mv.row][mv.col]
    }
}
