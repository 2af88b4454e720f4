// Copyright 2025 Vivian Voss. Licensed under the Apache License, Version 2.0.
// SPDX-License-Identifier: Apache-2.0

//! A `Copy`, equality-comparable grapheme-boundary recognizer.
//!
//! `unicode_segmentation::GraphemeCursor` is not `Copy`, which makes it
//! awkward to carry around as the state of a resync walk that needs to try,
//! compare and roll back candidate positions. `BreakState` sidesteps this by
//! tagging a byte offset and reconstructing a fresh cursor from it on every
//! query — the cursor itself is never stored, only the position it would
//! resume from.

use unicode_segmentation::GraphemeCursor;

/// A resumable grapheme-boundary query anchored at a byte offset within some
/// text. Two `BreakState`s compare equal iff they are anchored at the same
/// offset, which is what the dual-recognizer resync walk in
/// [`super::chunk`] relies on to detect convergence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BreakState {
    position: usize,
}

impl BreakState {
    pub fn new(position: usize) -> Self {
        Self { position }
    }

    pub fn position(&self) -> usize {
        self.position
    }

    /// True if `position` is a grapheme-cluster boundary in `text`.
    pub fn is_boundary(&self, text: &str) -> bool {
        if self.position == 0 || self.position == text.len() {
            return true;
        }
        let mut cursor = GraphemeCursor::new(self.position, text.len(), true);
        matches!(cursor.is_boundary(text, 0), Ok(true))
    }

    /// The next boundary at or after `position`, or `None` at end of text.
    pub fn next_boundary(&self, text: &str) -> Option<BreakState> {
        let mut cursor = GraphemeCursor::new(self.position, text.len(), true);
        match cursor.next_boundary(text, 0) {
            Ok(Some(b)) => Some(BreakState::new(b)),
            _ => None,
        }
    }

    /// Advances to the nearest boundary at or after `position`, snapping
    /// forward rather than backward so an insertion point never lands
    /// inside a grapheme cluster.
    pub fn snap_forward(position: usize, text: &str) -> usize {
        let state = BreakState::new(position);
        if state.is_boundary(text) {
            return position;
        }
        state.next_boundary(text).map(|b| b.position()).unwrap_or(text.len())
    }
}
