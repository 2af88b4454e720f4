// Copyright 2025 Vivian Voss. Licensed under the Apache License, Version 2.0.
// SPDX-License-Identifier: Apache-2.0

//! `Rope`: a B-tree of UTF-8 chunks with O(height) length queries in any of
//! four metrics and grapheme-preserving mid-string mutation.

use super::chunk::Chunk;
use super::iter::{ChunkIter, Graphemes, Scalars, Utf16Units};
use crate::btree::node::{split_overflow, Child, Node, MAX_FANOUT};
use std::cmp::Ordering;
use std::ops::Range;
use std::rc::Rc;

/// Chunk sizing policy. `minUTF8` bounds how small a non-terminal chunk may
/// be before it should be merged with a neighbor; `maxUTF8` bounds how
/// large a chunk may grow before it must split.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RopeConfig {
    pub min_utf8: usize,
    pub max_utf8: usize,
}

impl Default for RopeConfig {
    fn default() -> Self {
        RopeConfig { min_utf8: 255, max_utf8: 1023 }
    }
}

/// A B-tree of UTF-8 chunks.
#[derive(Clone)]
pub struct Rope {
    root: Node<Chunk>,
    cfg: RopeConfig,
}

impl std::fmt::Debug for Rope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rope").field("text", &self.to_text()).field("cfg", &self.cfg).finish()
    }
}

impl Default for Rope {
    fn default() -> Self {
        Self::new()
    }
}

fn chunk_groups<X>(items: Vec<X>, size: usize) -> Vec<Vec<X>> {
    let mut out = Vec::new();
    let mut iter = items.into_iter().peekable();
    while iter.peek().is_some() {
        out.push(iter.by_ref().take(size).collect());
    }
    out
}

fn build_from_chunks(chunks: Vec<Chunk>) -> Node<Chunk> {
    if chunks.is_empty() {
        return Node::empty_leaf();
    }
    let mut level: Vec<Node<Chunk>> =
        chunk_groups(chunks, MAX_FANOUT).into_iter().map(Node::Leaf).collect();
    while level.len() > 1 {
        let groups = chunk_groups(level, MAX_FANOUT);
        level = groups
            .into_iter()
            .map(|g| Node::Internal(g.into_iter().map(Child::new).collect()))
            .collect();
    }
    level.into_iter().next().expect("non-empty chunk list builds at least one node")
}

fn locate_child(children: &[Child<Chunk>], offset: usize) -> (usize, usize) {
    let mut remaining = offset;
    for (i, c) in children.iter().enumerate() {
        let len = c.summary.utf8;
        if remaining <= len || i == children.len() - 1 {
            return (i, remaining);
        }
        remaining -= len;
    }
    unreachable!("children is non-empty for any internal node")
}

fn locate_chunk(chunks: &[Chunk], offset: usize) -> (usize, usize) {
    let mut remaining = offset;
    for (i, c) in chunks.iter().enumerate() {
        let len = c.utf8_len();
        if remaining <= len || i == chunks.len() - 1 {
            return (i, remaining);
        }
        remaining -= len;
    }
    (0, 0)
}

fn insert_rec(node: &mut Node<Chunk>, offset: usize, text: &str, cfg: &RopeConfig) -> Option<Node<Chunk>> {
    match node {
        Node::Leaf(chunks) => {
            if chunks.is_empty() {
                *chunks = Chunk::chunk_text(text, cfg.min_utf8, cfg.max_utf8);
                return split_overflow(chunks).map(Node::Leaf);
            }
            let (idx, local) = locate_chunk(chunks, offset);
            let produced = chunks[idx].insert(local, text, cfg.min_utf8, cfg.max_utf8);
            chunks.splice(idx..idx + 1, produced);
            split_overflow(chunks).map(Node::Leaf)
        }
        Node::Internal(children) => {
            let (ci, local) = locate_child(children, offset);
            let child_mut = Rc::make_mut(&mut children[ci].node);
            let split = insert_rec(child_mut, local, text, cfg);
            children[ci].summary = children[ci].node.summary();
            let new_right = split?;
            children.insert(ci + 1, Child::new(new_right));
            split_overflow(children).map(Node::Internal)
        }
    }
}

impl Rope {
    pub fn new() -> Self {
        Self::with_config(RopeConfig::default())
    }

    pub fn with_config(cfg: RopeConfig) -> Self {
        Rope { root: Node::empty_leaf(), cfg }
    }

    pub fn from_text(text: &str) -> Self {
        Self::from_text_with_config(text, RopeConfig::default())
    }

    pub fn from_text_with_config(text: &str, cfg: RopeConfig) -> Self {
        let chunks = Chunk::chunk_text(text, cfg.min_utf8, cfg.max_utf8);
        Rope { root: build_from_chunks(chunks), cfg }
    }

    pub fn len_utf8(&self) -> usize {
        self.root.summary().utf8
    }

    pub fn len_utf16(&self) -> usize {
        self.root.summary().utf16
    }

    pub fn len_scalars(&self) -> usize {
        self.root.summary().scalars
    }

    pub fn len_chars(&self) -> usize {
        self.root.summary().graphemes
    }

    pub fn is_empty(&self) -> bool {
        self.len_utf8() == 0
    }

    pub fn config(&self) -> RopeConfig {
        self.cfg
    }

    pub fn to_text(&self) -> String {
        let mut out = String::with_capacity(self.len_utf8());
        self.root.for_each_item(&mut |c: &Chunk| out.push_str(c.as_str()));
        out
    }

    pub fn chunks(&self) -> ChunkIter<'_> {
        ChunkIter::new(&self.root)
    }

    pub fn graphemes(&self) -> Graphemes<'_> {
        Graphemes::new(&self.root)
    }

    pub fn scalars(&self) -> Scalars<'_> {
        Scalars::new(&self.root)
    }

    pub fn utf16_units(&self) -> Utf16Units<'_> {
        Utf16Units::new(&self.root)
    }

    /// Inserts `text` at UTF-8 byte offset `at`.
    ///
    /// Descends to the chunk containing `at`, merges `text` in (splitting
    /// the chunk if it overflows `max_utf8`), and propagates any resulting
    /// node split up to the root, exactly as [`crate::btree_set`] does for
    /// key insertion, but keyed on cumulative UTF-8 byte length rather than
    /// `Ord` comparison.
    pub fn insert(&mut self, at: usize, text: &str) {
        if text.is_empty() {
            return;
        }
        if let Some(new_right) = insert_rec(&mut self.root, at, text, &self.cfg) {
            let old_root = std::mem::replace(&mut self.root, Node::empty_leaf());
            self.root = Node::Internal(vec![Child::new(old_root), Child::new(new_right)]);
        }
    }

    pub fn append(&mut self, text: &str) {
        let at = self.len_utf8();
        self.insert(at, text);
    }

    /// Removes the UTF-8 byte range `range`.
    ///
    /// Implemented as a whole-rope round trip (materialize, splice, and
    /// re-chunk) rather than an in-place cut-and-splice through the tree.
    /// `insert` stays O(chunk count along one path); `delete`/`extract` are
    /// O(n) in rope length. A production rope would walk the affected
    /// chunks directly, but ranged structural edits that may remove whole
    /// subtrees need more bookkeeping than this exercise's scope affords.
    pub fn delete(&mut self, range: Range<usize>) {
        let mut text = self.to_text();
        text.replace_range(range, "");
        let chunks = Chunk::chunk_text(&text, self.cfg.min_utf8, self.cfg.max_utf8);
        self.root = build_from_chunks(chunks);
    }

    /// Returns a new rope holding the UTF-8 byte range `range`.
    pub fn extract(&self, range: Range<usize>) -> Rope {
        let text = self.to_text();
        Rope::from_text_with_config(&text[range], self.cfg)
    }
}

impl PartialEq for Rope {
    fn eq(&self, other: &Self) -> bool {
        self.to_text() == other.to_text()
    }
}

impl Eq for Rope {}

impl PartialOrd for Rope {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Rope {
    fn cmp(&self, other: &Self) -> Ordering {
        self.to_text().cmp(&other.to_text())
    }
}
