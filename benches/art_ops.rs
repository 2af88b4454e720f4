// Copyright 2025 Vivian Voss. Licensed under the Apache License, Version 2.0.
// SPDX-License-Identifier: Apache-2.0

//! Criterion benchmarks for `ART`'s insert/get paths and node grow cycle.
//!
//! Run with:
//!   cargo bench --bench art_ops

use adaptive_containers::AdaptiveRadixTree;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

fn keys(n: usize) -> Vec<Vec<u8>> {
    (0..n as u32).map(|i| i.to_be_bytes().to_vec()).collect()
}

fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("art_insert");
    for &n in &[100usize, 1_000, 10_000] {
        let data = keys(n);
        group.bench_with_input(BenchmarkId::new("sequential", n), &data, |b, data| {
            b.iter(|| {
                let mut tree = AdaptiveRadixTree::new();
                for (i, k) in data.iter().enumerate() {
                    tree.insert(k.clone(), i);
                }
                tree
            });
        });
    }
    group.finish();
}

fn bench_get(c: &mut Criterion) {
    let mut group = c.benchmark_group("art_get");
    for &n in &[100usize, 1_000, 10_000] {
        let data = keys(n);
        let mut tree = AdaptiveRadixTree::new();
        for (i, k) in data.iter().enumerate() {
            tree.insert(k.clone(), i);
        }
        group.bench_with_input(BenchmarkId::new("hit", n), &data, |b, data| {
            b.iter(|| {
                for k in data {
                    criterion::black_box(tree.get(k));
                }
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_insert, bench_get);
criterion_main!(benches);
