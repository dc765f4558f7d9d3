//! Evaluation weights. These are tunable constants; only their relative
//! ordering is load-bearing (corners above stability above the static table
//! above early-game disc count).

/// Returned for a decided game, dominating every heuristic term.
pub const WIN_SCORE: i32 = 10_000;

pub const CORNER_WEIGHT: f64 = 1000.0;

/// Applied only while the guarded corner is still empty.
pub const X_SQUARE_PENALTY: f64 = 500.0;

/// Applied unconditionally.
pub const C_SQUARE_PENALTY: f64 = 200.0;

pub const MOBILITY_CORNER_BONUS: f64 = 50.0;
pub const MOBILITY_EDGE_BONUS: f64 = 20.0;
pub const MOBILITY_X_SQUARE_MALUS: f64 = 30.0;
pub const MOBILITY_DEFAULT_BONUS: f64 = 5.0;

/// Static positional value per square: corners highest, X-squares deeply
/// negative, edges positive, interior mildly negative.
pub const POSITION_WEIGHTS: [[i32; 8]; 8] = [
    [100, -20, 10, 5, 5, 10, -20, 100],
    [-20, -50, -2, -2, -2, -2, -50, -20],
    [10, -2, -1, -1, -1, -1, -2, 10],
    [5, -2, -1, -1, -1, -1, -2, 5],
    [5, -2, -1, -1, -1, -1, -2, 5],
    [10, -2, -1, -1, -1, -1, -2, 10],
    [-20, -50, -2, -2, -2, -2, -50, -20],
    [100, -20, 10, 5, 5, 10, -20, 100],
];
