use criterion::{black_box, criterion_group, criterion_main, Criterion};
use blockfall::core::{GameState, Grid};
use blockfall::solver::{find_best_placement, AutoPlayer, Weights};
use blockfall::types::{PieceKind, TICK_MS};

fn bench_advance(c: &mut Criterion) {
    let mut state = GameState::new(12345);
    state.start();

    c.bench_function("game_advance_16ms", |b| {
        b.iter(|| {
            if !state.is_running() {
                state.start();
            }
            state.advance(black_box(TICK_MS));
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    let mut full = Grid::new();
    for y in 16..20 {
        for x in 0..10 {
            full.set(x, y, PieceKind::I.id());
        }
    }

    c.bench_function("clear_4_lines", |b| {
        b.iter(|| black_box(full).clear_completed_rows())
    });
}

fn bench_snapshot(c: &mut Criterion) {
    let mut state = GameState::new(12345);
    state.start();
    let mut snap = state.snapshot();

    c.bench_function("snapshot_into", |b| {
        b.iter(|| {
            state.snapshot_into(black_box(&mut snap));
        })
    });
}

fn bench_best_placement(c: &mut Criterion) {
    let mut grid = Grid::new();
    for (x, y) in [(0, 19), (1, 19), (2, 19), (2, 18), (6, 19), (7, 19), (9, 17), (9, 18), (9, 19)] {
        grid.set(x, y, PieceKind::Z.id());
    }

    c.bench_function("find_best_placement_t", |b| {
        b.iter(|| find_best_placement(black_box(&grid), PieceKind::T, &Weights::default()))
    });
}

fn bench_autoplay(c: &mut Criterion) {
    let mut game = GameState::new(12345);
    let mut bot = AutoPlayer::default();
    bot.enable(&mut game);

    c.bench_function("autoplay_tick", |b| {
        b.iter(|| {
            if !game.is_running() {
                game.start();
            }
            game.advance(TICK_MS);
            bot.advance(black_box(TICK_MS), &mut game);
        })
    });
}

criterion_group!(
    benches,
    bench_advance,
    bench_line_clear,
    bench_snapshot,
    bench_best_placement,
    bench_autoplay
);
criterion_main!(benches);
