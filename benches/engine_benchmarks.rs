//! Criterion benchmarks for the engine hot paths.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use garnet::board::{find_best_move, Board, SearchOptions};
use garnet::tt::TranspositionTable;

const KIWIPETE: &str = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";

fn bench_perft(c: &mut Criterion) {
    let mut group = c.benchmark_group("perft");

    let mut board = Board::new();
    for depth in 1..=4 {
        group.bench_with_input(BenchmarkId::new("startpos", depth), &depth, |b, &depth| {
            b.iter(|| board.perft(black_box(depth)))
        });
    }

    let mut kiwipete = Board::from_fen(KIWIPETE);
    for depth in 1..=3 {
        group.bench_with_input(BenchmarkId::new("kiwipete", depth), &depth, |b, &depth| {
            b.iter(|| kiwipete.perft(black_box(depth)))
        });
    }

    group.finish();
}

fn bench_movegen(c: &mut Criterion) {
    let mut group = c.benchmark_group("movegen");

    let startpos = Board::new();
    group.bench_function("startpos", |b| {
        b.iter(|| black_box(startpos.generate_moves()))
    });

    let kiwipete = Board::from_fen(KIWIPETE);
    group.bench_function("kiwipete", |b| {
        b.iter(|| black_box(kiwipete.generate_moves()))
    });
    group.bench_function("kiwipete_captures", |b| {
        b.iter(|| black_box(kiwipete.generate_captures()))
    });

    group.finish();
}

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");
    group.sample_size(10);

    for depth in [3, 4, 5] {
        group.bench_with_input(BenchmarkId::new("startpos", depth), &depth, |b, &depth| {
            b.iter(|| {
                let mut board = Board::new();
                let mut tt = TranspositionTable::new(16);
                let options = SearchOptions {
                    depth,
                    ..SearchOptions::default()
                };
                find_best_move(&mut board, &mut tt, &options)
            })
        });
    }

    for depth in [3, 4] {
        group.bench_with_input(BenchmarkId::new("kiwipete", depth), &depth, |b, &depth| {
            b.iter(|| {
                let mut board = Board::from_fen(KIWIPETE);
                let mut tt = TranspositionTable::new(16);
                let options = SearchOptions {
                    depth,
                    ..SearchOptions::default()
                };
                find_best_move(&mut board, &mut tt, &options)
            })
        });
    }

    group.finish();
}

fn bench_eval(c: &mut Criterion) {
    let mut group = c.benchmark_group("eval");

    let positions = [
        ("startpos", Board::new().to_fen()),
        ("kiwipete", KIWIPETE.to_string()),
        ("endgame", "8/5k2/8/8/8/8/5K2/4R3 w - - 0 1".to_string()),
    ];

    for (name, fen) in positions {
        let board = Board::from_fen(&fen);
        group.bench_function(name, |b| b.iter(|| black_box(board.evaluate())));
    }

    group.finish();
}

criterion_group!(benches, bench_perft, bench_movegen, bench_search, bench_eval);
criterion_main!(benches);
