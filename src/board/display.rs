use super::{Board, Color, BOARD_SIZE};
use std::fmt;

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  a b c d e f g h")?;
        for row in 0..BOARD_SIZE {
            write!(f, "{} ", row + 1)?;
            for col in 0..BOARD_SIZE {
                let cell = match self.get(row, col) {
                    None => '.',
                    Some(Color::Black) => 'B',
                    Some(Color::White) => 'W',
                };
                write!(f, "{} ", cell)?;
            }
            writeln!(f)?;
        }
        write!(
            f,
            "black: {}, white: {}",
            self.count_discs(Color::Black),
            self.count_discs(Color::White)
        )
    }
}

/// Builds a board from a literal 8x8 diagram of `B`, `W` and `.` squares,
/// top row first. Intended for tests and benches.
#[macro_export]
macro_rules! othello_position {
    ($($square:tt)*) => {{
        let mut board = $crate::board::Board::empty();
        // Convert all input tokens to a string and filter out whitespace characters.
        let squares: Vec<_> = stringify!($($square)*)
            .chars()
            .filter(|&c| !c.is_whitespace())
            .collect();
        assert_eq!(squares.len(), 64, "Invalid number of squares. Expected 64, got {}", squares.len());
        for (i, &c) in squares.iter().enumerate() {
            let row = i / 8;
            let col = i % 8;
            match c {
                'B' => board.put(row, col, $crate::board::Color::Black).unwrap(),
                'W' => board.put(row, col, $crate::board::Color::White).unwrap(),
                '.' => (),
                _ => panic!("Invalid character in othello position"),
            }
        }
        board
    }};
}
