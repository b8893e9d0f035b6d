use std::hint::black_box;

use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use int_interval::{IntInterval, IntRange};
use rand::prelude::*;

const SET_SIZE: i64 = 1000;

fn pack_benchmark(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);

    // 互不相接的区间，以随机顺序插入
    let mut sparse: Vec<_> = (0..SET_SIZE).map(|i| IntRange::new(i * 10, i * 10 + 5)).collect();
    sparse.shuffle(&mut rng);
    let sparse: IntInterval = sparse.into_iter().collect();

    let mut group = c.benchmark_group("Pack Performance");

    group.bench_function("IntInterval - Pack Sparse", |b| {
        b.iter_batched(
            || sparse.clone(),
            |mut interval| {
                interval.pack();
                black_box(interval)
            },
            BatchSize::SmallInput,
        )
    });

    let mut packed = sparse.clone();
    packed.pack();
    group.bench_function("IntInterval - Pack Already Packed", |b| {
        b.iter_batched(
            || packed.clone(),
            |mut interval| {
                interval.pack();
                black_box(interval)
            },
            BatchSize::SmallInput,
        )
    });

    group.finish();
}

criterion_group!(benches, pack_benchmark);
criterion_main!(benches);
