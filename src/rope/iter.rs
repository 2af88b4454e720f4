// Copyright 2025 Vivian Voss. Licensed under the Apache License, Version 2.0.
// SPDX-License-Identifier: Apache-2.0

//! Iteration over a rope's graphemes, Unicode scalars and UTF-16 units.
//!
//! Every cursor is built on [`ChunkIter`], an in-order walk over the leaf
//! chunks mirroring [`crate::btree_set::iter::Iter`]. Because chunk
//! boundaries are always snapped to real grapheme boundaries (at both
//! initial chunking and insert time — see [`super::chunk`]), a grapheme
//! never spans two leaf chunks, so iterating each chunk's own graphemes in
//! order is sufficient; no cross-chunk resync walk is needed at read time.

use super::chunk::Chunk;
use crate::btree::node::{Child, Node};
use unicode_segmentation::UnicodeSegmentation;

struct Frame<'a> {
    children: &'a [Child<Chunk>],
    next_idx: usize,
}

/// In-order cursor over a rope's leaf chunks.
pub struct ChunkIter<'a> {
    leaf: Option<&'a [Chunk]>,
    leaf_idx: usize,
    stack: Vec<Frame<'a>>,
}

impl<'a> ChunkIter<'a> {
    pub(super) fn new(root: &'a Node<Chunk>) -> Self {
        let mut it = Self { leaf: None, leaf_idx: 0, stack: Vec::new() };
        it.descend_leftmost(root);
        it
    }

    fn descend_leftmost(&mut self, mut node: &'a Node<Chunk>) {
        loop {
            match node {
                Node::Leaf(chunks) => {
                    self.leaf = Some(chunks);
                    self.leaf_idx = 0;
                    return;
                }
                Node::Internal(children) => {
                    self.stack.push(Frame { children, next_idx: 1 });
                    node = &children[0].node;
                }
            }
        }
    }
}

impl<'a> Iterator for ChunkIter<'a> {
    type Item = &'a Chunk;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(chunks) = self.leaf {
                if self.leaf_idx < chunks.len() {
                    let chunk = &chunks[self.leaf_idx];
                    self.leaf_idx += 1;
                    return Some(chunk);
                }
                self.leaf = None;
            }
            let frame = self.stack.last_mut()?;
            if frame.next_idx < frame.children.len() {
                let child = &frame.children[frame.next_idx].node;
                frame.next_idx += 1;
                self.descend_leftmost(child);
            } else {
                self.stack.pop();
            }
        }
    }
}

/// Grapheme-cluster iterator. `len_chars()` on a rope counts exactly the
/// items this iterator yields.
pub struct Graphemes<'a> {
    chunks: ChunkIter<'a>,
    current: unicode_segmentation::Graphemes<'a>,
}

impl<'a> Graphemes<'a> {
    pub(super) fn new(root: &'a Node<Chunk>) -> Self {
        Self { chunks: ChunkIter::new(root), current: "".graphemes(true) }
    }
}

impl<'a> Iterator for Graphemes<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(g) = self.current.next() {
                return Some(g);
            }
            let chunk = self.chunks.next()?;
            self.current = chunk.as_str().graphemes(true);
        }
    }
}

/// Unicode scalar (`char`) iterator.
pub struct Scalars<'a> {
    chunks: ChunkIter<'a>,
    current: std::str::Chars<'a>,
}

impl<'a> Scalars<'a> {
    pub(super) fn new(root: &'a Node<Chunk>) -> Self {
        Self { chunks: ChunkIter::new(root), current: "".chars() }
    }
}

impl<'a> Iterator for Scalars<'a> {
    type Item = char;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(c) = self.current.next() {
                return Some(c);
            }
            let chunk = self.chunks.next()?;
            self.current = chunk.as_str().chars();
        }
    }
}

/// UTF-16 code unit iterator.
pub struct Utf16Units<'a> {
    chunks: ChunkIter<'a>,
    current: std::str::EncodeUtf16<'a>,
}

impl<'a> Utf16Units<'a> {
    pub(super) fn new(root: &'a Node<Chunk>) -> Self {
        Self { chunks: ChunkIter::new(root), current: "".encode_utf16() }
    }
}

impl<'a> Iterator for Utf16Units<'a> {
    type Item = u16;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(u) = self.current.next() {
                return Some(u);
            }
            let chunk = self.chunks.next()?;
            self.current = chunk.as_str().encode_utf16();
        }
    }
}
