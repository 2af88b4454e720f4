// Copyright 2025 Vivian Voss. Licensed under the Apache License, Version 2.0.
// SPDX-License-Identifier: Apache-2.0

//! An ordered set over `Ord` elements, built on the shared
//! [`crate::btree::node`] shape.
//!
//! Unlike [`crate::art`], `BTreeSet` holds its elements directly (no
//! copy-on-write sharing is required by its contract), so children are
//! mutated via `Rc::make_mut` rather than an explicit uniqueness probe.

pub mod iter;
pub mod set;

pub use set::{BTreeSet, SetIndex};
