use criterion::{criterion_group, criterion_main, Criterion};

use othello::board::{Board, Color};
use othello::othello_position;

fn criterion_benchmark(c: &mut Criterion) {
    c.bench_function("valid moves from the initial position", |b| {
        let board = Board::new();
        b.iter(|| {
            board.get_valid_moves(Color::Black);
            board.get_valid_moves(Color::White);
        })
    });

    c.bench_function("valid moves from a midgame position", |b| {
        let board = midgame_position();
        b.iter(|| {
            board.get_valid_moves(Color::Black);
            board.get_valid_moves(Color::White);
        })
    });

    c.bench_function("full move application", |b| {
        let board = Board::new();
        b.iter(|| {
            let mut child = board.clone();
            child.make_move(2, 3, Color::Black)
        })
    });
}

fn midgame_position() -> Board {
    othello_position! {
        ........
        ........
        ..BBB...
        ..BWWW..
        ..BWBW..
        ..BWWWB.
        ...B....
        ........
    }
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
