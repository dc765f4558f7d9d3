pub mod board;
pub mod book;
pub mod evaluate;
pub mod othello_move;
pub mod searcher;
