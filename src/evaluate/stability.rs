//! Stable-disc computation: which discs can never be flipped again.

use std::collections::VecDeque;

use rustc_hash::FxHashMap;

use crate::board::squares::CORNERS;
use crate::board::{Board, Color, BOARD_SIZE, DIRECTIONS};

const DEFAULT_CACHE_CAPACITY: usize = 1000;

type CacheKey = (Board, Color);

/// Bounded memo for stability counts, keyed by (board contents, side).
/// Purely a speed optimization: clearing it never changes a computed
/// result, only how fast it arrives. Once the capacity is exceeded, the
/// oldest half of the entries is dropped in bulk.
pub struct StabilityCache {
    capacity: usize,
    entries: FxHashMap<CacheKey, u32>,
    insertion_order: VecDeque<CacheKey>,
    hits: usize,
    misses: usize,
}

impl Default for StabilityCache {
    fn default() -> Self {
        Self::new()
    }
}

impl StabilityCache {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CACHE_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity,
            entries: FxHashMap::default(),
            insertion_order: VecDeque::new(),
            hits: 0,
            misses: 0,
        }
    }

    /// The number of `color`'s discs that can never be flipped again,
    /// memoized per position.
    pub fn stable_disc_count(&mut self, board: &Board, color: Color) -> u32 {
        let key = (board.clone(), color);
        if let Some(&count) = self.entries.get(&key) {
            self.hits += 1;
            return count;
        }
        self.misses += 1;

        let count = compute_stable_discs(board, color);
        self.insertion_order.push_back(key.clone());
        self.entries.insert(key, count);
        if self.entries.len() > self.capacity {
            self.evict_oldest_half();
        }
        count
    }

    fn evict_oldest_half(&mut self) {
        for _ in 0..self.capacity / 2 {
            if let Some(key) = self.insertion_order.pop_front() {
                self.entries.remove(&key);
            }
        }
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.insertion_order.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn hits(&self) -> usize {
        self.hits
    }

    pub fn misses(&self) -> usize {
        self.misses
    }

    pub fn hit_rate(&self) -> f64 {
        let lookups = self.hits + self.misses;
        if lookups == 0 {
            0.0
        } else {
            self.hits as f64 / lookups as f64
        }
    }
}

/// A disc is stable if it sits on a corner, is chained to a stable disc from
/// an owned corner, lies on an edge free of opponent discs, or is safe along
/// all four board axes. The stable set is the union of all four rules.
fn compute_stable_discs(board: &Board, color: Color) -> u32 {
    let mut stable = [[false; BOARD_SIZE]; BOARD_SIZE];

    for &(row, col) in CORNERS.iter() {
        if board.get(row, col) == Some(color) {
            expand_corner_chain(board, row, col, color, &mut stable);
        }
    }

    mark_stable_edges(board, color, &mut stable);

    for row in 0..BOARD_SIZE {
        for col in 0..BOARD_SIZE {
            if board.get(row, col) == Some(color)
                && !stable[row][col]
                && is_fully_stable(board, row, col, color)
            {
                stable[row][col] = true;
            }
        }
    }

    stable
        .iter()
        .flatten()
        .filter(|&&is_stable| is_stable)
        .count() as u32
}

/// Breadth-first expansion from an owned corner through 8-connected
/// same-side discs. A chain member must be adjacent to an already stable
/// disc or connected along its edge to a corner.
fn expand_corner_chain(
    board: &Board,
    corner_row: usize,
    corner_col: usize,
    color: Color,
    stable: &mut [[bool; BOARD_SIZE]; BOARD_SIZE],
) {
    if stable[corner_row][corner_col] {
        return;
    }

    let mut visited = [[false; BOARD_SIZE]; BOARD_SIZE];
    let mut queue = VecDeque::new();
    let mut chain = vec![(corner_row, corner_col)];
    visited[corner_row][corner_col] = true;
    queue.push_back((corner_row, corner_col));

    while let Some((row, col)) = queue.pop_front() {
        for &(dr, dc) in DIRECTIONS.iter() {
            let r = row as i8 + dr;
            let c = col as i8 + dc;
            if !(0..BOARD_SIZE as i8).contains(&r) || !(0..BOARD_SIZE as i8).contains(&c) {
                continue;
            }
            let (r, c) = (r as usize, c as usize);
            if visited[r][c] || board.get(r, c) != Some(color) {
                continue;
            }
            if is_chain_stable(board, r, c, color, stable) {
                visited[r][c] = true;
                queue.push_back((r, c));
                chain.push((r, c));
            }
        }
    }

    for (row, col) in chain {
        stable[row][col] = true;
    }
}

fn is_chain_stable(
    board: &Board,
    row: usize,
    col: usize,
    color: Color,
    stable: &[[bool; BOARD_SIZE]; BOARD_SIZE],
) -> bool {
    for &(dr, dc) in DIRECTIONS.iter() {
        let r = row as i8 + dr;
        let c = col as i8 + dc;
        if (0..BOARD_SIZE as i8).contains(&r)
            && (0..BOARD_SIZE as i8).contains(&c)
            && stable[r as usize][c as usize]
        {
            return true;
        }
    }

    if row == 0 || row == BOARD_SIZE - 1 || col == 0 || col == BOARD_SIZE - 1 {
        return edge_connected_to_corner(board, row, col, color);
    }

    false
}

/// True if every square between the disc and one end of its edge belongs to
/// the same side.
fn edge_connected_to_corner(board: &Board, row: usize, col: usize, color: Color) -> bool {
    let last = BOARD_SIZE - 1;

    if row == 0 || row == last {
        if (0..col).all(|c| board.get(row, c) == Some(color)) {
            return true;
        }
        if (col + 1..BOARD_SIZE).all(|c| board.get(row, c) == Some(color)) {
            return true;
        }
    }

    if col == 0 || col == last {
        if (0..row).all(|r| board.get(r, col) == Some(color)) {
            return true;
        }
        if (row + 1..BOARD_SIZE).all(|r| board.get(r, col) == Some(color)) {
            return true;
        }
    }

    false
}

/// An edge holding no opponent discs can never flip; everything the side
/// owns on it is stable.
fn mark_stable_edges(board: &Board, color: Color, stable: &mut [[bool; BOARD_SIZE]; BOARD_SIZE]) {
    let last = BOARD_SIZE - 1;

    for &row in [0, last].iter() {
        let opponent_free =
            (0..BOARD_SIZE).all(|col| board.get(row, col).map_or(true, |cell| cell == color));
        if opponent_free {
            for col in 0..BOARD_SIZE {
                if board.get(row, col) == Some(color) {
                    stable[row][col] = true;
                }
            }
        }
    }

    for &col in [0, last].iter() {
        let opponent_free =
            (0..BOARD_SIZE).all(|row| board.get(row, col).map_or(true, |cell| cell == color));
        if opponent_free {
            for row in 0..BOARD_SIZE {
                if board.get(row, col) == Some(color) {
                    stable[row][col] = true;
                }
            }
        }
    }
}

#[derive(PartialEq)]
enum RayEnd {
    Edge,
    Empty,
    Opponent,
}

/// Direction stability over the four board axes. A disc is threatened along
/// an axis when its same-side run is bounded by an empty square on one end
/// and an opponent disc on the other; such a run can be capped right now.
fn is_fully_stable(board: &Board, row: usize, col: usize, color: Color) -> bool {
    const AXES: [(i8, i8); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

    for &(dr, dc) in AXES.iter() {
        let forward = ray_end(board, row, col, dr, dc, color);
        let backward = ray_end(board, row, col, -dr, -dc, color);
        let threatened = matches!(
            (&forward, &backward),
            (RayEnd::Empty, RayEnd::Opponent) | (RayEnd::Opponent, RayEnd::Empty)
        );
        if threatened {
            return false;
        }
    }
    true
}

/// Walks over the contiguous same-side run and reports what bounds it.
fn ray_end(board: &Board, row: usize, col: usize, dr: i8, dc: i8, color: Color) -> RayEnd {
    let mut r = row as i8 + dr;
    let mut c = col as i8 + dc;

    loop {
        if !(0..BOARD_SIZE as i8).contains(&r) || !(0..BOARD_SIZE as i8).contains(&c) {
            return RayEnd::Edge;
        }
        match board.get(r as usize, c as usize) {
            None => return RayEnd::Empty,
            Some(cell) if cell == color => {
                r += dr;
                c += dc;
            }
            Some(_) => return RayEnd::Opponent,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::othello_position;

    #[test]
    fn test_corner_run_is_stable() {
        let board = othello_position! {
            BBB.....
            ........
            ........
            ........
            ........
            ........
            ........
            ........
        };
        let mut cache = StabilityCache::new();
        assert_eq!(cache.stable_disc_count(&board, Color::Black), 3);
        assert_eq!(cache.stable_disc_count(&board, Color::White), 0);
    }

    #[test]
    fn test_opponent_on_edge_blocks_the_edge_rule() {
        let board = othello_position! {
            BBB..W..
            ........
            ........
            ........
            ........
            ........
            ........
            ........
        };
        let mut cache = StabilityCache::new();
        // The black corner run stays stable; the lone white disc is safe on
        // every axis (no capped run exists yet), so it counts as well.
        assert_eq!(cache.stable_disc_count(&board, Color::Black), 3);
        assert_eq!(cache.stable_disc_count(&board, Color::White), 1);
    }

    #[test]
    fn test_disc_bounded_by_empty_and_opponent_is_threatened() {
        let board = othello_position! {
            BW......
            ........
            ........
            ........
            ........
            ........
            ........
            ........
        };
        let mut cache = StabilityCache::new();
        // Black at a1 can play c1 right now and flip b1.
        assert_eq!(cache.stable_disc_count(&board, Color::White), 0);
    }

    #[test]
    fn test_fully_owned_edge_is_stable_without_a_corner_chain() {
        let board = othello_position! {
            ...BB...
            ........
            ........
            ........
            ........
            ........
            ........
            ........
        };
        let mut cache = StabilityCache::new();
        assert_eq!(cache.stable_disc_count(&board, Color::Black), 2);
    }

    #[test]
    fn test_center_discs_are_not_stable_in_the_initial_position() {
        let board = Board::new();
        let mut cache = StabilityCache::new();
        assert_eq!(cache.stable_disc_count(&board, Color::Black), 0);
        assert_eq!(cache.stable_disc_count(&board, Color::White), 0);
    }

    #[test]
    fn test_cache_hits_on_repeated_lookup() {
        let board = Board::new();
        let mut cache = StabilityCache::new();
        cache.stable_disc_count(&board, Color::Black);
        cache.stable_disc_count(&board, Color::Black);
        assert_eq!(cache.misses(), 1);
        assert_eq!(cache.hits(), 1);
    }

    #[test]
    fn test_cache_stays_bounded() {
        let mut cache = StabilityCache::with_capacity(2);
        let mut board = Board::empty();
        for col in 0..5 {
            board.put(3, col, Color::Black).unwrap();
            cache.stable_disc_count(&board, Color::Black);
        }
        assert!(cache.len() <= 2);
    }

    #[test]
    fn test_clearing_the_cache_preserves_results() {
        let board = Board::new();
        let mut cache = StabilityCache::new();
        let before = cache.stable_disc_count(&board, Color::Black);
        cache.clear();
        assert!(cache.is_empty());
        assert_eq!(cache.stable_disc_count(&board, Color::Black), before);
    }
}
