//! Game phase classification by remaining empty squares.

use std::fmt;

use crate::board::Board;

/// Derived, never stored: drives search depth and evaluation weighting.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum GamePhase {
    Opening,
    Midgame,
    Endgame,
}

impl GamePhase {
    pub fn of(board: &Board) -> Self {
        Self::from_empty_count(board.empty_count())
    }

    pub fn from_empty_count(empty_count: u32) -> Self {
        if empty_count >= 50 {
            GamePhase::Opening
        } else if empty_count >= 20 {
            GamePhase::Midgame
        } else {
            GamePhase::Endgame
        }
    }

    /// Base alpha-beta depth for this phase.
    pub fn search_depth(&self) -> u8 {
        match self {
            GamePhase::Opening => 3,
            GamePhase::Midgame => 4,
            GamePhase::Endgame => 6,
        }
    }

    pub fn mobility_weight(&self) -> f64 {
        match self {
            GamePhase::Opening => 50.0,
            GamePhase::Midgame => 25.0,
            GamePhase::Endgame => 10.0,
        }
    }

    pub fn weighted_mobility_scale(&self) -> f64 {
        match self {
            GamePhase::Opening => 0.5,
            GamePhase::Midgame => 0.8,
            GamePhase::Endgame => 1.2,
        }
    }

    /// Always below the per-corner weight: a corner is never sacrificed for
    /// stability alone.
    pub fn stability_weight(&self) -> f64 {
        match self {
            GamePhase::Opening => 50.0,
            GamePhase::Midgame => 80.0,
            GamePhase::Endgame => 120.0,
        }
    }
}

impl fmt::Display for GamePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phase_str = match self {
            GamePhase::Opening => "opening",
            GamePhase::Midgame => "midgame",
            GamePhase::Endgame => "endgame",
        };
        write!(f, "{}", phase_str)
    }
}
