//! Opening book data structures and operations.

mod book;

pub use book::{OpeningBook, BOOK_MOVE_SCORE};
