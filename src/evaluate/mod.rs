//! Phase-aware positional evaluation.

mod evaluation_tables;
mod phase;
mod stability;

pub use evaluation_tables::{POSITION_WEIGHTS, WIN_SCORE};
pub use phase::GamePhase;
pub use stability::StabilityCache;

use crate::board::squares::{self, CORNERS, C_SQUARES, X_SQUARES};
use crate::board::{Board, Color, BOARD_SIZE};
use crate::othello_move::MoveList;

use self::evaluation_tables::{
    CORNER_WEIGHT, C_SQUARE_PENALTY, MOBILITY_CORNER_BONUS, MOBILITY_DEFAULT_BONUS,
    MOBILITY_EDGE_BONUS, MOBILITY_X_SQUARE_MALUS, X_SQUARE_PENALTY,
};

/// Maps (board, side) to a signed score; higher is better for that side.
/// Owns the stability memo, the only mutable state in the engine.
pub struct Evaluator {
    stability: StabilityCache,
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new()
    }
}

impl Evaluator {
    pub fn new() -> Self {
        Self {
            stability: StabilityCache::new(),
        }
    }

    pub fn stability_cache(&self) -> &StabilityCache {
        &self.stability
    }

    pub fn clear_stability_cache(&mut self) {
        self.stability.clear();
    }

    /// Scores the board for `color`. Decided games dominate every heuristic
    /// term and are checked first.
    pub fn score(&mut self, board: &Board, color: Color) -> i32 {
        if board.is_game_over() {
            return match board.get_winner() {
                Some(winner) if winner == color => WIN_SCORE,
                Some(_) => -WIN_SCORE,
                None => 0,
            };
        }

        let opponent = color.opposite();
        let phase = GamePhase::of(board);
        let empty_count = board.empty_count();
        let mut score = 0.0_f64;

        // 1. corner control
        for &(row, col) in CORNERS.iter() {
            match board.get(row, col) {
                Some(cell) if cell == color => score += CORNER_WEIGHT,
                Some(_) => score -= CORNER_WEIGHT,
                None => (),
            }
        }

        // 2. X-squares, penalized only while the guarded corner is open
        for &(row, col) in X_SQUARES.iter() {
            let (corner_row, corner_col) = squares::x_square_corner(row, col);
            if board.get(corner_row, corner_col).is_some() {
                continue;
            }
            match board.get(row, col) {
                Some(cell) if cell == color => score -= X_SQUARE_PENALTY,
                Some(_) => score += X_SQUARE_PENALTY,
                None => (),
            }
        }

        // 3. C-squares, unconditional
        for &(row, col) in C_SQUARES.iter() {
            match board.get(row, col) {
                Some(cell) if cell == color => score -= C_SQUARE_PENALTY,
                Some(_) => score += C_SQUARE_PENALTY,
                None => (),
            }
        }

        // 4. mobility, raw and square-weighted
        let my_moves = board.get_valid_moves(color);
        let opp_moves = board.get_valid_moves(opponent);
        let mobility_diff = my_moves.len() as f64 - opp_moves.len() as f64;
        let weighted_mobility = weighted_mobility(&my_moves) - weighted_mobility(&opp_moves);
        score += mobility_diff * phase.mobility_weight()
            + weighted_mobility * phase.weighted_mobility_scale();

        // 5. stability
        let my_stability = self.stability.stable_disc_count(board, color) as f64;
        let opp_stability = self.stability.stable_disc_count(board, opponent) as f64;
        score += (my_stability - opp_stability) * phase.stability_weight();

        // 6. static position table
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                match board.get(row, col) {
                    Some(cell) if cell == color => score += POSITION_WEIGHTS[row][col] as f64,
                    Some(_) => score -= POSITION_WEIGHTS[row][col] as f64,
                    None => (),
                }
            }
        }

        // 7. disc differential, multiplier driven by the transition point
        let my_count = board.count_discs(color);
        let opp_count = board.count_discs(opponent);
        let disc_diff = my_count as f64 - opp_count as f64;
        let transition = transition_point(
            board,
            color,
            empty_count,
            my_moves.len(),
            opp_moves.len(),
        );
        score += disc_diff * disc_differential_multiplier(phase, color, disc_diff, transition);

        // 8. occupation-rate shaping
        let occupation_rate = my_count as f64 / (my_count + opp_count) as f64;
        score += match phase {
            GamePhase::Opening => (occupation_rate - 0.35).abs() * -80.0,
            GamePhase::Midgame => (occupation_rate - 0.45).abs() * -40.0,
            GamePhase::Endgame => (occupation_rate - 0.5).max(0.0) * 120.0,
        };

        score.round() as i32
    }
}

fn weighted_mobility(moves: &MoveList) -> f64 {
    moves
        .iter()
        .map(|mv| {
            if squares::is_corner(mv.row, mv.col) {
                MOBILITY_CORNER_BONUS
            } else if squares::is_x_square(mv.row, mv.col) {
                -MOBILITY_X_SQUARE_MALUS
            } else if squares::is_edge(mv.row, mv.col) {
                MOBILITY_EDGE_BONUS
            } else {
                MOBILITY_DEFAULT_BONUS
            }
        })
        .sum()
}

/// Where the side sits on its lean-to-greedy strategy arc, in [0, 1]. Blends
/// game progress with opponent-mobility scarcity and corner ownership: a
/// cramped opponent or a safe corner justifies grabbing discs earlier.
fn transition_point(
    board: &Board,
    color: Color,
    empty_count: u32,
    my_move_count: usize,
    opp_move_count: usize,
) -> f64 {
    let game_progress = (BOARD_SIZE * BOARD_SIZE - empty_count as usize) as f64 / 64.0;

    let total_moves = my_move_count + opp_move_count;
    let opp_mobility_share = if total_moves > 0 {
        opp_move_count as f64 / total_moves as f64
    } else {
        0.0
    };

    let corners_owned = CORNERS
        .iter()
        .filter(|&&(row, col)| board.get(row, col) == Some(color))
        .count();
    let corner_factor = corners_owned as f64 / 4.0;

    let transition =
        game_progress * 0.6 + (1.0 - opp_mobility_share) * 0.25 + corner_factor * 0.15;
    transition.min(1.0)
}

/// The first mover plays greedily early; the second mover conserves discs
/// until its transition point, unless it has fallen behind by a wide margin.
fn disc_differential_multiplier(
    phase: GamePhase,
    color: Color,
    disc_diff: f64,
    transition: f64,
) -> f64 {
    let first_player = color.moves_first();
    match phase {
        GamePhase::Opening => {
            if first_player {
                if disc_diff < -6.0 {
                    4.0
                } else if transition < 0.3 {
                    1.0
                } else {
                    2.0
                }
            } else if disc_diff < -10.0 {
                2.0
            } else if transition < 0.4 {
                -2.0
            } else {
                0.0
            }
        }
        GamePhase::Midgame => {
            if first_player {
                if transition < 0.4 {
                    1.0
                } else {
                    4.0
                }
            } else if transition < 0.6 {
                -0.5
            } else {
                2.5
            }
        }
        GamePhase::Endgame => {
            if transition > 0.8 {
                150.0
            } else {
                100.0
            }
        }
    }
}
