use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use minehost_core::*;
use std::hint::black_box;

const TIERS: [(&str, Coord2, CellCount); 4] = [
    ("beginner", (9, 9), 10),
    ("intermediate", (16, 16), 40),
    ("expert", (30, 16), 99),
    ("huge", (255, 255), 6500),
];

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");
    for (name, size, mines) in TIERS {
        let config = GameConfig::new_unchecked(size, mines);
        let mut board = Board::with_seed(config, 1);
        group.bench_function(BenchmarkId::from_parameter(name), |b| {
            b.iter(|| {
                board.regenerate();
                black_box(board.neighbor_count((0, 0)))
            })
        });
    }
    group.finish();
}

fn bench_first_open(c: &mut Criterion) {
    let mut group = c.benchmark_group("first_open");
    for (name, size, mines) in TIERS {
        let config = GameConfig::new_unchecked(size, mines);
        let center = (size.0 / 2, size.1 / 2);
        let mut seed = 0;
        group.bench_function(BenchmarkId::from_parameter(name), |b| {
            b.iter(|| {
                seed += 1;
                let mut game = Game::with_seed(config, seed);
                black_box(game.open(center))
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_generate, bench_first_open);
criterion_main!(benches);
