use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_bowling::core::{render_scorecard_into, Game, GameSnapshot};

const MIXED_GAME: [i32; 17] = [10, 7, 3, 9, 0, 10, 0, 8, 8, 2, 0, 6, 10, 10, 10, 8, 1];

fn play(rolls: &[i32]) -> Game {
    let mut game = Game::new();
    for &pins in rolls {
        let _ = game.bowl(pins);
    }
    game
}

fn bench_perfect_game(c: &mut Criterion) {
    c.bench_function("perfect_game", |b| {
        b.iter(|| play(black_box(&[10; 12])).score())
    });
}

fn bench_mixed_game(c: &mut Criterion) {
    c.bench_function("mixed_game", |b| {
        b.iter(|| play(black_box(&MIXED_GAME)).score())
    });
}

fn bench_snapshot(c: &mut Criterion) {
    let game = play(&MIXED_GAME);
    let mut snap = GameSnapshot::default();

    c.bench_function("snapshot_into", |b| {
        b.iter(|| {
            game.snapshot_into(black_box(&mut snap));
        })
    });
}

fn bench_render(c: &mut Criterion) {
    let snap = play(&MIXED_GAME).snapshot();
    let mut out = String::with_capacity(128);

    c.bench_function("render_scorecard", |b| {
        b.iter(|| {
            render_scorecard_into(black_box(&snap), &mut out);
        })
    });
}

criterion_group!(
    benches,
    bench_perfect_game,
    bench_mixed_game,
    bench_snapshot,
    bench_render
);
criterion_main!(benches);
