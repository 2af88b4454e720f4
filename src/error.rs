// Copyright 2025 Vivian Voss. Licensed under the Apache License, Version 2.0.
// SPDX-License-Identifier: Apache-2.0

//! Crate-wide error type.
//!
//! Every engine in this crate is pure, in-memory and total: out-of-bounds
//! indices, stale cursors and oversized ART keys are programmer errors and
//! panic rather than returning `Err` (see the root module docs for the
//! fail-fast/data-error split). The only paths that return [`CrateError`] are
//! the handful of "decode"-shaped constructors that validate externally
//! assembled data, such as [`crate::btree_set::BTreeSet::from_sorted_unique`].

use thiserror::Error;

/// Standard `Result` alias for fallible, non-panicking operations.
pub type CrateResult<T> = Result<T, CrateError>;

/// Errors produced by the data-dependent (non-panicking) entry points.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CrateError {
    /// A bulk constructor was handed data that violates the invariant it
    /// promised to uphold (e.g. a "sorted, duplicate-free" slice that isn't).
    #[error("data corrupted: {context}")]
    DataCorrupted {
        /// Human-readable description of what was expected vs. found.
        context: String,
    },
}
