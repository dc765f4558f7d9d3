use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum BoardError {
    #[error("square ({row}, {col}) is outside the 8x8 board")]
    OutOfBoundsBoardPutError { row: usize, col: usize },
    #[error("cannot put a disc on a square that is already occupied")]
    SquareOccupiedBoardPutError,
}
