//! Walk latency benchmarks

// Benchmarks are not production code - unwrap/expect are acceptable here
#![allow(clippy::unwrap_used, clippy::expect_used)]

use common::PriceLevel;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use impact::{buy_impact, cumulative_depth, sell_impact};

fn ladder(levels: usize, top: f64, step: f64) -> Vec<PriceLevel> {
    (0..levels)
        .map(|i| PriceLevel::new(top - step * i as f64, 2.0 + i as f64 * 0.1))
        .collect()
}

fn bench_walks(c: &mut Criterion) {
    let mut group = c.benchmark_group("impact_walk");

    for depth in [10usize, 50, 100] {
        let bids = ladder(depth, 87_000.0, 50.0);
        let asks: Vec<PriceLevel> = bids
            .iter()
            .map(|l| PriceLevel::new(2.0 * 87_000.0 - l.price + 10.0, l.volume))
            .collect();

        group.bench_function(format!("sell_{depth}_levels"), |b| {
            b.iter(|| black_box(sell_impact(black_box(25.0), &bids)));
        });

        group.bench_function(format!("buy_{depth}_levels"), |b| {
            b.iter(|| black_box(buy_impact(black_box(25.0), &asks)));
        });
    }

    group.finish();
}

fn bench_depth_profile(c: &mut Criterion) {
    let bids = ladder(100, 87_000.0, 50.0);

    c.bench_function("cumulative_depth_100", |b| {
        b.iter(|| {
            let total: f64 = cumulative_depth(&bids, 100).map(|row| row.cumulative_volume).sum();
            black_box(total)
        });
    });
}

criterion_group!(benches, bench_walks, bench_depth_profile);
criterion_main!(benches);
