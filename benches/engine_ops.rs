use criterion::{black_box, criterion_group, criterion_main, Criterion};

use blockfall::core::{get_shape, Board, ModeConfig, Piece, Session};
use blockfall::types::PieceKind;

fn bench_tick(c: &mut Criterion) {
    let mut session = Session::new(ModeConfig::classic(), 12345).unwrap();
    session.start();

    c.bench_function("session_tick_16ms", |b| {
        b.iter(|| {
            session.tick(black_box(16));
        })
    });
}

fn bench_collides(c: &mut Criterion) {
    let mut board = Board::new();
    for x in 0..10 {
        board.set(x, 19, Some(PieceKind::I));
    }
    let piece = Piece::spawn(PieceKind::T);

    c.bench_function("board_collides", |b| {
        b.iter(|| board.collides(black_box(&piece), 0, 17))
    });
}

fn bench_clear_full_rows(c: &mut Criterion) {
    c.bench_function("clear_4_rows", |b| {
        b.iter(|| {
            let mut board = Board::new();
            for y in 16..20 {
                for x in 0..10 {
                    board.set(x, y, Some(PieceKind::I));
                }
            }
            board.clear_full_rows();
        })
    });
}

fn bench_rotate(c: &mut Criterion) {
    let shape = get_shape(PieceKind::T);

    c.bench_function("shape_rotated", |b| b.iter(|| black_box(shape).rotated()));
}

fn bench_snapshot(c: &mut Criterion) {
    let mut session = Session::new(ModeConfig::speed(180), 777).unwrap();
    session.start();
    let mut out = session.snapshot();

    c.bench_function("snapshot_into", |b| {
        b.iter(|| {
            session.snapshot_into(&mut out);
        })
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_collides,
    bench_clear_full_rows,
    bench_rotate,
    bench_snapshot
);
criterion_main!(benches);
