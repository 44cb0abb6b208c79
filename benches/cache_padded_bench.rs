use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use hints::prelude::*;
use std::sync::atomic::{AtomicU64, Ordering};

const ITERATIONS: u64 = 100_000;

struct Packed {
    head: AtomicU64,
    tail: AtomicU64,
}

struct Padded {
    head: CachePadded<AtomicU64>,
    tail: CachePadded<AtomicU64>,
}

fn hammer(head: &AtomicU64, tail: &AtomicU64) {
    std::thread::scope(|scope| {
        scope.spawn(|| {
            for _ in 0..ITERATIONS {
                head.fetch_add(1, Ordering::Relaxed);
            }
        });
        scope.spawn(|| {
            for _ in 0..ITERATIONS {
                tail.fetch_add(1, Ordering::Relaxed);
            }
        });
    });
}

fn bench_false_sharing(c: &mut Criterion) {
    let packed = Packed { head: AtomicU64::new(0), tail: AtomicU64::new(0) };
    let padded = Padded { head: CachePadded::new(AtomicU64::new(0)), tail: CachePadded::new(AtomicU64::new(0)) };

    let mut group = c.benchmark_group("cache_padded/counters");
    group.throughput(Throughput::Elements(2 * ITERATIONS));
    group.bench_function("packed", |b| {
        b.iter(|| hammer(&packed.head, &packed.tail));
    });
    group.bench_function("padded", |b| {
        b.iter(|| hammer(&padded.head, &padded.tail));
    });

    group.finish();
}

criterion_group!(benches, bench_false_sharing);
criterion_main!(benches);
