// Copyright 2025 Vivian Voss. Licensed under the Apache License, Version 2.0.
// SPDX-License-Identifier: Apache-2.0

//! In-memory metrics collector: a global recording buffer plus per-name
//! statistical summaries. No disk sink and no background flush thread —
//! this library has no process boundary to persist across.

use super::aggregator::{calculate_stats, MetricStats};
use super::types::Metric;
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::sync::RwLock;

static GLOBAL: Lazy<MetricsCollector> = Lazy::new(MetricsCollector::new);

/// A thread-safe, in-memory buffer of recorded [`Metric`] observations.
#[derive(Debug, Default)]
pub struct MetricsCollector {
    buffer: RwLock<Vec<Metric>>,
}

impl MetricsCollector {
    pub fn new() -> Self {
        Self { buffer: RwLock::new(Vec::new()) }
    }

    /// The process-wide collector instance.
    pub fn global() -> &'static MetricsCollector {
        &GLOBAL
    }

    pub fn record(&self, metric: Metric) {
        self.buffer.write().expect("metrics buffer lock poisoned").push(metric);
    }

    pub fn buffer_size(&self) -> usize {
        self.buffer.read().expect("metrics buffer lock poisoned").len()
    }

    pub fn clear(&self) {
        self.buffer.write().expect("metrics buffer lock poisoned").clear();
    }

    /// Every distinct metric name currently buffered.
    pub fn names(&self) -> Vec<String> {
        let buffer = self.buffer.read().expect("metrics buffer lock poisoned");
        let mut names: Vec<String> = buffer.iter().map(|m| m.name.clone()).collect();
        names.sort();
        names.dedup();
        names
    }

    /// Statistical summary across every recorded value for `name`, or
    /// `None` if nothing has been recorded under that name.
    pub fn stats_for(&self, name: &str) -> Option<MetricStats> {
        let buffer = self.buffer.read().expect("metrics buffer lock poisoned");
        let values: Vec<f64> = buffer.iter().filter(|m| m.name == name).map(|m| m.value).collect();
        calculate_stats(&values)
    }

    /// Stats for every distinct recorded metric name.
    pub fn all_stats(&self) -> HashMap<String, MetricStats> {
        self.names().into_iter().filter_map(|name| self.stats_for(&name).map(|s| (name.clone(), s))).collect()
    }
}
