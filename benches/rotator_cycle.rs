// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for rotator navigation operations.
//!
//! Measures the wrap-around arithmetic and the tick fast path, which run on
//! every timer tick for every rotator instance.

use criterion::{criterion_group, criterion_main, Criterion};
use iced_campus::ui::rotator::Rotator;
use std::hint::black_box;
use std::time::{Duration, Instant};

fn bench_go_to(c: &mut Criterion) {
    let mut group = c.benchmark_group("rotator");

    group.bench_function("go_to_wrapping", |b| {
        let mut rotator = Rotator::new(7, Duration::from_secs(5));
        let mut index: isize = -1000;
        b.iter(|| {
            rotator.go_to(black_box(index));
            index = index.wrapping_add(37);
            black_box(rotator.current());
        });
    });

    group.finish();
}

fn bench_tick(c: &mut Criterion) {
    let mut group = c.benchmark_group("rotator");

    group.bench_function("tick_before_deadline", |b| {
        let mut rotator = Rotator::new(7, Duration::from_secs(3600));
        let now = Instant::now();
        b.iter(|| {
            black_box(rotator.tick(black_box(now)));
        });
    });

    group.finish();
}

criterion_group!(benches, bench_go_to, bench_tick);
criterion_main!(benches);
