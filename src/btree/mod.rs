// Copyright 2025 Vivian Voss. Licensed under the Apache License, Version 2.0.
// SPDX-License-Identifier: Apache-2.0

//! The generic B-tree node shape shared by [`crate::rope`] and
//! [`crate::btree_set`].
//!
//! This module is deliberately thin: it owns the fan-out bookkeeping and the
//! summary-monoid aggregation, and nothing else. Key comparison (BTreeSet),
//! chunk ingestion and grapheme resync (Rope) are domain semantics that each
//! caller layers on top — see the module docs on [`crate::rope::tree`] and
//! [`crate::btree_set::tree`].

pub mod node;

pub use node::{Child, Node, Summary, Summarize, MAX_FANOUT, MIN_FANOUT};
