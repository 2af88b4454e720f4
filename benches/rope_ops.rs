// Copyright 2025 Vivian Voss. Licensed under the Apache License, Version 2.0.
// SPDX-License-Identifier: Apache-2.0

//! Criterion benchmarks for `Rope` insert/delete and full-text rebuild.
//!
//! Run with:
//!   cargo bench --bench rope_ops

use adaptive_containers::Rope;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

fn bench_append(c: &mut Criterion) {
    let mut group = c.benchmark_group("rope_append");
    for &n in &[100usize, 1_000] {
        group.bench_with_input(BenchmarkId::new("chunks", n), &n, |b, &n| {
            b.iter(|| {
                let mut rope = Rope::new();
                for _ in 0..n {
                    rope.append("0123456789");
                }
                rope
            });
        });
    }
    group.finish();
}

fn bench_insert_at_midpoint(c: &mut Criterion) {
    let mut group = c.benchmark_group("rope_insert_midpoint");
    for &n in &[10_000usize, 100_000] {
        let base = Rope::from_text(&"x".repeat(n));
        group.bench_with_input(BenchmarkId::new("insert", n), &base, |b, base| {
            b.iter(|| {
                let mut r = base.clone();
                r.insert(n / 2, "y");
                r
            });
        });
    }
    group.finish();
}

fn bench_delete_range(c: &mut Criterion) {
    let mut group = c.benchmark_group("rope_delete_range");
    for &n in &[10_000usize, 100_000] {
        let base = Rope::from_text(&"x".repeat(n));
        group.bench_with_input(BenchmarkId::new("delete", n), &base, |b, base| {
            b.iter(|| {
                let mut r = base.clone();
                r.delete(0..n / 2);
                r
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_append, bench_insert_at_midpoint, bench_delete_range);
criterion_main!(benches);
