// Copyright 2025 Vivian Voss. Licensed under the Apache License, Version 2.0.
// SPDX-License-Identifier: Apache-2.0

//! Four independent in-memory container engines, each engineered for a
//! distinct performance regime:
//!
//! - [`art`]: an Adaptive Radix Tree mapping byte-string keys to values,
//!   with four node sizes that grow and shrink adaptively, path
//!   compression and copy-on-write sharing.
//! - [`robin`]: an open-addressed hash table using Robin Hood linear
//!   probing, a bitmap occupancy index, a small-mode linear scan for tiny
//!   tables, and a hysteretic scale/load-factor policy — wrapped by
//!   [`robin::set::HashSet`] and [`robin::map::HashMap`].
//! - [`rope`]: a B-tree of UTF-8 chunks supporting efficient mid-string
//!   mutation while preserving grapheme-cluster correctness.
//! - [`btree_set`]: a B-tree-backed ordered set over a comparable element
//!   type, exposing set-algebra operations built on sorted-merge.
//!
//! `btree` is an internal collaborator: the generic node shape shared by
//! [`rope`] and [`btree_set`]. `common` holds the small bit-manipulation
//! and fixed-capacity-array helpers all four engines draw on. `error`
//! defines the crate-wide [`CrateError`]/[`CrateResult`]. `metrics`
//! provides in-memory percentile/statistics helpers for engine-exposed
//! counters (ART node-kind histogram, RobinHTable probe-length
//! distribution, Rope chunk-size distribution, BTreeSet tree height).
//!
//! ## Quick start
//!
//! ```rust
//! use adaptive_containers::robin::set::HashSet;
//!
//! let mut set: HashSet<&str> = HashSet::new();
//! set.insert("a");
//! assert!(set.contains(&"a"));
//! ```

pub mod art;
pub mod btree;
pub mod btree_set;
pub mod common;
pub mod error;
pub mod metrics;
pub mod robin;
pub mod rope;

pub use art::AdaptiveRadixTree;
pub use btree_set::{BTreeSet, SetIndex};
pub use error::{CrateError, CrateResult};
pub use metrics::{Metric, MetricType, MetricUnit, MetricsCollector};
pub use robin::{HashMap, HashSet};
pub use rope::Rope;
