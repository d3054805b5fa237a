use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use aadu_puli::{AaduPuli, GameState, Minimax, Move, RulesEngine, SearchConfig, Side};

fn opening(game: &AaduPuli) -> GameState {
    [Move::place(1), Move::step(3, 9), Move::place(8)]
        .into_iter()
        .try_fold(game.new_state(), |state, mv| game.play(&state, mv))
        .unwrap()
}

fn bench_generate_moves(c: &mut Criterion) {
    let game = AaduPuli::standard();
    let state = opening(&game);

    c.bench_function("generate_moves", |b| {
        b.iter(|| game.generate_moves(black_box(&state)))
    });
}

fn bench_play(c: &mut Criterion) {
    let game = AaduPuli::standard();
    let state = opening(&game);
    let mv = game.generate_moves(&state)[0];

    c.bench_function("play", |b| b.iter(|| game.play(black_box(&state), mv)));
}

fn bench_best_move(c: &mut Criterion) {
    let game = AaduPuli::standard();
    let state = opening(&game);
    let mut group = c.benchmark_group("best_move");
    group.sample_size(20);

    for depth in [2u32, 3, 4] {
        group.bench_with_input(BenchmarkId::from_parameter(depth), &depth, |b, &depth| {
            let mut search = Minimax::new(game.clone(), SearchConfig::default().with_depth(depth));
            b.iter(|| search.best_move(black_box(&state), Side::Tiger))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_generate_moves, bench_play, bench_best_move);
criterion_main!(benches);
