use criterion::{black_box, criterion_group, criterion_main, Criterion};

use gridfall::core::{ActivePiece, Board, GameSession, ManualScheduler, ScriptedPieces};
use gridfall::types::PieceKind;

fn bench_tick(c: &mut Criterion) {
    let mut sched = ManualScheduler::new();
    let mut session = GameSession::new(ScriptedPieces::new([PieceKind::Line]), &mut sched);

    c.bench_function("gravity_tick", |b| {
        b.iter(|| {
            if session.game_over() {
                session.new_game(&mut sched);
            }
            black_box(session.tick(&mut sched));
        })
    });
}

fn bench_clear_full_rows(c: &mut Criterion) {
    c.bench_function("clear_4_rows", |b| {
        b.iter(|| {
            let mut board = Board::new();
            for y in 16..20 {
                for x in 0..10 {
                    board.set(x, y, Some(PieceKind::Line));
                }
            }
            black_box(board.clear_full_rows());
        })
    });
}

fn bench_attempt_move(c: &mut Criterion) {
    let board = Board::new();
    let mut piece = ActivePiece::spawn(PieceKind::T);

    c.bench_function("attempt_move", |b| {
        b.iter(|| {
            // Bounce between two columns so every attempt succeeds.
            if !piece.attempt_move(&board, 1, 0) {
                piece.attempt_move(&board, -1, 0);
            }
        })
    });
}

fn bench_attempt_rotate(c: &mut Criterion) {
    let board = Board::new();
    let mut piece = ActivePiece::spawn(PieceKind::T);
    piece.attempt_move(&board, 1, 4);

    c.bench_function("attempt_rotate", |b| {
        b.iter(|| {
            black_box(piece.attempt_rotate(&board));
        })
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_clear_full_rows,
    bench_attempt_move,
    bench_attempt_rotate
);
criterion_main!(benches);
