// Copyright 2025 Vivian Voss. Licensed under the Apache License, Version 2.0.
// SPDX-License-Identifier: Apache-2.0

//! Criterion benchmarks for `BTreeSet` insert/remove and set algebra.
//!
//! Run with:
//!   cargo bench --bench btree_set_ops

use adaptive_containers::BTreeSet;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("btree_set_insert");
    for &n in &[100usize, 1_000, 10_000] {
        group.bench_with_input(BenchmarkId::new("ascending", n), &n, |b, &n| {
            b.iter(|| {
                let mut set = BTreeSet::new();
                for i in 0..n {
                    set.insert(i);
                }
                set
            });
        });
    }
    group.finish();
}

fn bench_set_algebra(c: &mut Criterion) {
    let mut group = c.benchmark_group("btree_set_algebra");
    for &n in &[1_000usize, 10_000] {
        let a: BTreeSet<usize> = (0..n).filter(|i| i % 2 == 0).collect();
        let b_set: BTreeSet<usize> = (0..n).filter(|i| i % 3 == 0).collect();
        group.bench_with_input(BenchmarkId::new("union", n), &(a.clone(), b_set.clone()), |bch, (a, b)| {
            bch.iter(|| a.union(b));
        });
        group.bench_with_input(BenchmarkId::new("intersection", n), &(a, b_set), |bch, (a, b)| {
            bch.iter(|| a.intersection(b));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_insert, bench_set_algebra);
criterion_main!(benches);
