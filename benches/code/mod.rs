use std::{cmp::Reverse, collections::BinaryHeap};

use criterion::{BenchmarkId, Criterion, criterion_group};
use itertools::Itertools;
use leftist_heap::Heap;
use rand::prelude::*;

const SIZES: [usize; 5] = [1 << 8, 1 << 10, 1 << 12, 1 << 14, 1 << 16];

fn random_items(n: usize) -> Vec<u64> {
    StdRng::seed_from_u64(0).random_iter().take(n).collect()
}

fn bench_build_and_drain(c: &mut Criterion) {
    let mut group = c.benchmark_group("Build and drain VS BinaryHeap");
    for n in SIZES {
        let vec = random_items(n);
        group.bench_function(BenchmarkId::new("Heap", n), |b| {
            b.iter(|| vec.iter().copied().collect::<Heap<_>>().into_sorted_vec());
        });
        group.bench_function(BenchmarkId::new("BinaryHeap", n), |b| {
            b.iter(|| {
                let mut heap = vec.iter().copied().map(Reverse).collect::<BinaryHeap<_>>();
                let mut out = Vec::with_capacity(heap.len());
                while let Some(Reverse(item)) = heap.pop() {
                    out.push(item);
                }
                out
            });
        });
        group.bench_function(BenchmarkId::new("Itertools sorted", n), |b| {
            b.iter(|| vec.iter().copied().sorted().collect::<Vec<_>>());
        });
    }
    group.finish();
}

fn bench_persistent_ops(c: &mut Criterion) {
    let mut group = c.benchmark_group("Persistent operations");
    for n in SIZES {
        let heap: Heap<u64> = random_items(n).into_iter().collect();
        let other: Heap<u64> = random_items(n).into_iter().rev().collect();
        group.bench_function(BenchmarkId::new("insert", n), |b| {
            b.iter(|| heap.insert(u64::MAX / 2));
        });
        group.bench_function(BenchmarkId::new("pop_top", n), |b| {
            b.iter(|| heap.pop_top());
        });
        group.bench_function(BenchmarkId::new("merge", n), |b| {
            b.iter(|| heap.merge(&other));
        });
        group.bench_function(BenchmarkId::new("take 16", n), |b| {
            b.iter(|| heap.iter().take(16).collect::<Vec<_>>());
        });
    }
    group.finish();
}

criterion_group!(benches, bench_build_and_drain, bench_persistent_ops);
