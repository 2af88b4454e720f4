// Copyright 2025 Vivian Voss. Licensed under the Apache License, Version 2.0.
// SPDX-License-Identifier: Apache-2.0

//! Metric value types: what is recorded and how it is tagged.

/// The kind of quantity a metric measures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetricType {
    /// A monotonically increasing count (e.g. number of ART node splits).
    Counter,
    /// A point-in-time value that can go up or down (e.g. current RobinHTable load factor).
    Gauge,
    /// A distribution of observed values (e.g. probe lengths, chunk sizes).
    Histogram,
}

/// The unit a metric's value is expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetricUnit {
    Count,
    Bytes,
    Nanoseconds,
    Microseconds,
    Milliseconds,
    Ratio,
}

/// A single observation: a name, a value, a unit and free-form tags.
#[derive(Debug, Clone, PartialEq)]
pub struct Metric {
    pub name: String,
    pub value: f64,
    pub unit: MetricUnit,
    pub metric_type: MetricType,
    pub tags: Vec<(String, String)>,
}

impl Metric {
    pub fn new(name: impl Into<String>, value: f64, unit: MetricUnit) -> Self {
        Self { name: name.into(), value, unit, metric_type: MetricType::Gauge, tags: Vec::new() }
    }

    pub fn counter(name: impl Into<String>, value: f64) -> Self {
        Self { metric_type: MetricType::Counter, ..Self::new(name, value, MetricUnit::Count) }
    }

    pub fn histogram(name: impl Into<String>, value: f64, unit: MetricUnit) -> Self {
        Self { metric_type: MetricType::Histogram, ..Self::new(name, value, unit) }
    }

    pub fn with_tag(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.tags.push((key.into(), value.into()));
        self
    }
}
