//! Benchmarks for move generation, annotation and move-text handling.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use chess_rules::board::Game;

const KIWIPETE: &str = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";
const MIDDLEGAME: &str = "r1bqkb1r/pppp1ppp/2n2n2/4p3/2B1P3/5N2/PPPP1PPP/RNBQK2R w KQkq - 4 4";

fn bench_perft(c: &mut Criterion) {
    let mut group = c.benchmark_group("perft");
    group.sample_size(10);

    let startpos = Game::new();
    for depth in 1..=3 {
        group.bench_with_input(BenchmarkId::new("startpos", depth), &depth, |b, &depth| {
            b.iter(|| startpos.perft(black_box(depth)))
        });
    }

    let kiwipete = Game::from_position_string(KIWIPETE).unwrap();
    for depth in 1..=2 {
        group.bench_with_input(BenchmarkId::new("kiwipete", depth), &depth, |b, &depth| {
            b.iter(|| kiwipete.perft(black_box(depth)))
        });
    }

    group.finish();
}

fn bench_movegen(c: &mut Criterion) {
    let mut group = c.benchmark_group("movegen");

    for (name, position) in [
        ("startpos", Game::new()),
        ("middlegame", Game::from_position_string(MIDDLEGAME).unwrap()),
        ("kiwipete", Game::from_position_string(KIWIPETE).unwrap()),
    ] {
        group.bench_with_input(BenchmarkId::new("annotated", name), &position, |b, game| {
            b.iter(|| black_box(game.every_move()))
        });
    }

    group.finish();
}

fn bench_move_text(c: &mut Criterion) {
    let mut group = c.benchmark_group("move_text");

    let middlegame = Game::from_position_string(MIDDLEGAME).unwrap();
    group.bench_function("parse", |b| {
        b.iter(|| black_box(middlegame.parse_move_text(black_box("Nxe5"))))
    });
    group.bench_function("position_string", |b| {
        b.iter(|| Game::from_position_string(black_box(KIWIPETE)).map(|g| g.to_position_string()))
    });

    group.finish();
}

criterion_group!(benches, bench_perft, bench_movegen, bench_move_text);
criterion_main!(benches);
