// Copyright 2025 Vivian Voss. Licensed under the Apache License, Version 2.0.
// SPDX-License-Identifier: Apache-2.0

//! In-memory metrics and observability.
//!
//! - **types**: metric shape (name, value, unit, tags).
//! - **collector**: a global, thread-safe recording buffer.
//! - **aggregator**: percentile and statistical calculations over
//!   recorded values.
//!
//! Every engine in this crate can record its own counters through this
//! module (an ART node-kind histogram, a RobinHTable probe-length
//! distribution, a Rope chunk-size distribution, a BTreeSet tree-height
//! gauge) without any of them depending on a disk sink or a background
//! flush thread — there is no process boundary here to persist across.
//!
//! ## Quick Start
//!
//! ```rust
//! use adaptive_containers::metrics::{MetricsCollector, Metric, MetricUnit};
//!
//! let metric = Metric::new("probe_length", 3.0, MetricUnit::Count)
//!     .with_tag("engine", "robin");
//!
//! MetricsCollector::global().record(metric);
//! ```

pub mod aggregator;
pub mod collector;
pub mod types;

// Re-export commonly used types for convenience
pub use aggregator::{calculate_stats, p50, p95, p99, MetricStats};
pub use collector::MetricsCollector;
pub use types::{Metric, MetricType, MetricUnit};
