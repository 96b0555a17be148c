use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use tb_core::{
    default_4v4_tokens, diff, is_correct, Board, DragController, PlacedToken, GRID_4V4,
};

fn bench_drag_sweep(c: &mut Criterion) {
    c.bench_function("drag_sweep_full_row", |b| {
        b.iter(|| {
            let mut board = Board::new(GRID_4V4, default_4v4_tokens()).unwrap();
            let mut drag = DragController::new();
            drag.press(&board, "A1", |_| true);
            for col in 0..7u8 {
                let pos = GRID_4V4.cell_center(GRID_4V4.cell_at(0, col));
                black_box(drag.drag_to(&mut board, pos));
            }
            drag.release();
            board
        })
    });
}

fn bench_diff_and_validate(c: &mut Criterion) {
    let mut board = Board::new(GRID_4V4, default_4v4_tokens()).unwrap();
    let baseline = board.snapshot();
    board.move_token("A1", 4);
    board.move_token("A3", 18);
    board.move_token("B2", 45);
    let stored = vec![
        PlacedToken::new("A1", 4),
        PlacedToken::new("A3", 18),
        PlacedToken::new("B2", 45),
    ];

    c.bench_function("diff_and_validate", |b| {
        b.iter(|| {
            let submission = diff(black_box(&baseline), black_box(&board));
            is_correct(&submission, &stored)
        })
    });
}

criterion_group!(benches, bench_drag_sweep, bench_diff_and_validate);
criterion_main!(benches);
