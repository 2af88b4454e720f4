// Copyright 2025 Vivian Voss. Licensed under the Apache License, Version 2.0.
// SPDX-License-Identifier: Apache-2.0

//! Criterion benchmarks for `RobinHTable`'s grow/shrink cycle and the
//! Robin Hood displacement chain it produces under colliding hashes.
//!
//! Run with:
//!   cargo bench --bench robin_ops

use adaptive_containers::HashSet;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

fn bench_insert_distinct(c: &mut Criterion) {
    let mut group = c.benchmark_group("robin_insert_distinct");
    for &n in &[100usize, 1_000, 10_000] {
        group.bench_with_input(BenchmarkId::new("insert", n), &n, |b, &n| {
            b.iter(|| {
                let mut set = HashSet::new();
                for i in 0..n {
                    set.insert(i);
                }
                set
            });
        });
    }
    group.finish();
}

fn bench_remove_half(c: &mut Criterion) {
    let mut group = c.benchmark_group("robin_remove_half");
    for &n in &[1_000usize, 10_000] {
        group.bench_with_input(BenchmarkId::new("remove", n), &n, |b, &n| {
            b.iter(|| {
                let mut set: HashSet<usize> = (0..n).collect();
                for i in 0..n / 2 {
                    set.remove(&i);
                }
                set
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_insert_distinct, bench_remove_half);
criterion_main!(benches);
