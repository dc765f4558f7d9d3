use super::*;
use crate::book::BOOK_MOVE_SCORE;
use crate::othello_position;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn test_opening_book_bypasses_search() {
    init_logging();
    let board = Board::new();
    let mut searcher = Searcher::new();

    let best = searcher.get_best_move(&board, Color::Black).unwrap();
    assert_eq!(best, Move::new(2, 3));
    assert_eq!(best.score, BOOK_MOVE_SCORE);
    assert_eq!(searcher.searched_position_count(), 0);
}

#[test]
fn test_no_legal_moves_returns_none() {
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
    let mut searcher = Searcher::new();
    assert!(searcher.get_best_move(&board, Color::Black).is_none());
    assert!(searcher.get_best_move(&board, Color::White).is_none());
}

#[test]
fn test_search_is_deterministic() {
    init_logging();
    // 17 discs placed: past the book, midgame depth not yet endgame.
    let board = othello_position! {
        ........
        ........
        ..BBB...
        ..BWWW..
        ..BWBW..
        ..BWWWB.
        ...B....
        ........
    };
    assert!(!board.get_valid_moves(Color::Black).is_empty());

    let mut searcher1 = Searcher::new();
    let mut searcher2 = Searcher::new();
    let move1 = searcher1.get_best_move(&board, Color::Black).unwrap();
    let move2 = searcher2.get_best_move(&board, Color::Black).unwrap();
    assert_eq!(move1, move2);
    assert_eq!(move1.score, move2.score);

    // a warm stability memo must not change the result
    let move3 = searcher1.get_best_move(&board, Color::Black).unwrap();
    assert_eq!(move1, move3);
    assert_eq!(move1.score, move3.score);
}

#[test]
fn test_search_switches_to_the_exact_solver() {
    init_logging();
    let board = othello_position! {
        .WWWWWW.
        WWWWWWWW
        WWWWWWWW
        WWWWWWWW
        WWWWWWWW
        WWWWWWWW
        WWWWWWWW
        BBBBBBBB
    };
    assert!(board.empty_count() <= EXACT_SOLVE_THRESHOLD);

    let mut searcher = Searcher::new();
    let best = searcher.get_best_move(&board, Color::Black).unwrap();
    assert_eq!(best, Move::new(0, 0));
    assert_eq!(best.score, 16);
}

#[test]
fn test_chosen_moves_are_always_legal() {
    init_logging();
    // Play a full game, searcher against itself, asserting every chosen
    // move is legal and that `None` only ever means a forced pass.
    let mut board = Board::new();
    let mut searcher = Searcher::new();
    let mut to_move = Color::Black;

    while !board.is_game_over() {
        match searcher.get_best_move(&board, to_move) {
            Some(best) => {
                assert!(board.is_valid_move(best.row, best.col, to_move));
                assert!(board.make_move(best.row, best.col, to_move));
            }
            None => assert!(board.get_valid_moves(to_move).is_empty()),
        }
        to_move = to_move.opposite();
        assert_eq!(
            board.count_discs(Color::Black) + board.count_discs(Color::White)
                + board.empty_count(),
            64
        );
    }
}
