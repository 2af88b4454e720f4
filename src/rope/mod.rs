// Copyright 2025 Vivian Voss. Licensed under the Apache License, Version 2.0.
// SPDX-License-Identifier: Apache-2.0

//! A B-tree of UTF-8 chunks supporting efficient mid-string mutation while
//! tracking four index metrics (UTF-8 bytes, UTF-16 code units, Unicode
//! scalars, graphemes) and preserving grapheme-cluster correctness across
//! chunk boundaries.
//!
//! ## Modules
//!
//! - [`grapheme`]: a `Copy`, equality-comparable grapheme-boundary
//!   recognizer built on `unicode_segmentation::GraphemeCursor`.
//! - [`chunk`]: the per-leaf UTF-8 buffer, its four counters and its
//!   `prefix`/`suffix` cross-boundary bookkeeping.
//! - [`tree`]: `Rope`, the public `insert`/`delete`/`extract` API.
//! - [`iter`]: grapheme-by-grapheme iteration across chunk boundaries.

pub mod chunk;
pub mod grapheme;
pub mod iter;
pub mod tree;

pub use tree::{Rope, RopeConfig};
