// Copyright 2025 Vivian Voss. Licensed under the Apache License, Version 2.0.
// SPDX-License-Identifier: Apache-2.0

//! The leaf payload of a [`crate::rope::Rope`]: a UTF-8 buffer between
//! `min_utf8` and `max_utf8` bytes, with its four index metrics
//! (UTF-8 bytes, UTF-16 units, Unicode scalars, graphemes) cached so a
//! rope's overall lengths are an O(height) summary read rather than an
//! O(n) scan.

use crate::btree::node::Summarize;
use unicode_segmentation::UnicodeSegmentation;

/// Per-chunk counters, combinable by plain addition — this is exactly the
/// `Summary` a [`crate::btree::node::Node`] needs to keep whole-rope
/// lengths available without walking every chunk.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChunkSummary {
    pub utf8: usize,
    pub utf16: usize,
    pub scalars: usize,
    pub graphemes: usize,
}

impl crate::btree::node::Summary for ChunkSummary {
    fn combine(&self, other: &Self) -> Self {
        ChunkSummary {
            utf8: self.utf8 + other.utf8,
            utf16: self.utf16 + other.utf16,
            scalars: self.scalars + other.scalars,
            graphemes: self.graphemes + other.graphemes,
        }
    }
}

fn interior_breaks(s: &str) -> Vec<usize> {
    s.grapheme_indices(true).map(|(o, _)| o).filter(|&o| o != 0).collect()
}

/// A single leaf buffer. `first_break`/`last_break` are byte offsets
/// (relative to this chunk) of the first and last *interior* grapheme
/// boundary; graphemes before `first_break` or at/after `last_break` may
/// continue into a neighboring chunk, so a fresh whole-buffer
/// re-segmentation can over- or under-count by one at each edge relative
/// to `grapheme_count`, which is the count this chunk actually commits to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk {
    bytes: String,
    first_break: Option<usize>,
    last_break: Option<usize>,
    grapheme_count: usize,
}

impl Chunk {
    fn from_buffer(bytes: String) -> Self {
        let breaks = interior_breaks(&bytes);
        let grapheme_count = bytes.graphemes(true).count();
        let first_break = breaks.first().copied();
        let last_break = breaks.last().copied();
        Chunk { bytes, first_break, last_break, grapheme_count }
    }

    /// Builds a chunk from an explicit, already-known set of interior
    /// break offsets rather than re-running segmentation over `bytes` —
    /// used when the caller has forced boundaries (e.g. at a splice
    /// point) that a fresh segmentation pass might not reproduce.
    fn from_breaks(bytes: String, mut breaks: Vec<usize>) -> Self {
        breaks.sort_unstable();
        breaks.dedup();
        breaks.retain(|&b| b != 0 && b != bytes.len());
        let grapheme_count = if bytes.is_empty() { 0 } else { breaks.len() + 1 };
        let first_break = breaks.first().copied();
        let last_break = breaks.last().copied();
        Chunk { bytes, first_break, last_break, grapheme_count }
    }

    pub fn as_str(&self) -> &str {
        &self.bytes
    }

    pub fn utf8_len(&self) -> usize {
        self.bytes.len()
    }

    pub fn prefix(&self) -> &str {
        match self.first_break {
            Some(b) => &self.bytes[..b],
            None => "",
        }
    }

    pub fn suffix(&self) -> &str {
        match self.last_break {
            Some(b) => &self.bytes[b..],
            None => "",
        }
    }

    /// Splits `text` into chunks each within `[min_utf8, max_utf8]` bytes
    /// (the final chunk may be shorter), snapping every interior split
    /// point forward to a grapheme boundary so no chunk starts or ends
    /// mid-cluster.
    pub fn chunk_text(text: &str, min_utf8: usize, max_utf8: usize) -> Vec<Chunk> {
        if text.is_empty() {
            return Vec::new();
        }
        let mut out = Vec::new();
        let mut start = 0usize;
        while start < text.len() {
            let remaining = text.len() - start;
            if remaining <= max_utf8 {
                out.push(Chunk::from_buffer(text[start..].to_string()));
                break;
            }
            let target = start + max_utf8.min(remaining);
            let cut = crate::rope::grapheme::BreakState::snap_forward(target, text);
            let cut = if cut <= start { (start + min_utf8.max(1)).min(text.len()) } else { cut };
            out.push(Chunk::from_buffer(text[start..cut].to_string()));
            start = cut;
        }
        out
    }

    /// Inserts `text` at byte offset `at` (relative to this chunk).
    ///
    /// The splice points on both sides of `text` are treated as forced
    /// grapheme boundaries: each of the three spans (existing prefix,
    /// inserted text, existing suffix) keeps the grapheme structure it
    /// would have in isolation, rather than letting the merged buffer
    /// re-combine across the insertion (e.g. a combining mark stranded
    /// by a splice does not reattach to whatever new scalar now precedes
    /// it). Returns the chunk(s) that should replace this one.
    pub fn insert(&self, at: usize, text: &str, min_utf8: usize, max_utf8: usize) -> Vec<Chunk> {
        let prefix = &self.bytes[..at];
        let suffix = &self.bytes[at..];
        let text_end = at + text.len();

        let mut breaks: Vec<usize> = interior_breaks(prefix);
        if at != 0 {
            breaks.push(at);
        }
        breaks.extend(interior_breaks(text).into_iter().map(|b| at + b));
        if !text.is_empty() {
            breaks.push(text_end);
        }
        breaks.extend(interior_breaks(suffix).into_iter().map(|b| text_end + b));

        let mut merged = String::with_capacity(self.bytes.len() + text.len());
        merged.push_str(prefix);
        merged.push_str(text);
        merged.push_str(suffix);

        if merged.len() <= max_utf8 {
            vec![Chunk::from_breaks(merged, breaks)]
        } else {
            // Rare: a single insert overflows the chunk. Re-chunking by
            // size takes priority over preserving every forced boundary;
            // any cut point is itself a real grapheme boundary, so no
            // cluster is split, but the prefix/suffix forcing above may
            // not carry through to sub-chunks that don't straddle it.
            Chunk::chunk_text(&merged, min_utf8, max_utf8)
        }
    }

    /// Removes the byte range `start..end` (relative to this chunk),
    /// re-deriving grapheme structure for the result from scratch.
    pub fn delete(&self, start: usize, end: usize) -> Chunk {
        let mut merged = String::with_capacity(self.bytes.len() - (end - start));
        merged.push_str(&self.bytes[..start]);
        merged.push_str(&self.bytes[end..]);
        Chunk::from_buffer(merged)
    }
}

impl Summarize for Chunk {
    type Summary = ChunkSummary;

    fn summary(&self) -> ChunkSummary {
        ChunkSummary {
            utf8: self.bytes.len(),
            utf16: self.bytes.chars().map(char::len_utf16).sum(),
            scalars: self.bytes.chars().count(),
            graphemes: self.grapheme_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_buffer_tracks_interior_breaks() {
        let c = Chunk::from_buffer("abc".to_string());
        assert_eq!(c.first_break, Some(1));
        assert_eq!(c.last_break, Some(2));
        assert_eq!(c.prefix(), "a");
        assert_eq!(c.suffix(), "c");
    }

    #[test]
    fn single_grapheme_chunk_has_no_interior_break() {
        let c = Chunk::from_buffer("\u{301}".to_string());
        assert_eq!(c.first_break, None);
        assert_eq!(c.last_break, None);
        assert_eq!(c.prefix(), "");
        assert_eq!(c.suffix(), "");
    }

    #[test]
    fn chunk_text_respects_max_and_preserves_content() {
        let text: String = "x".repeat(500);
        let chunks = Chunk::chunk_text(&text, 100, 200);
        assert!(chunks.iter().all(|c| c.utf8_len() <= 200));
        let rebuilt: String = chunks.iter().map(Chunk::as_str).collect();
        assert_eq!(rebuilt, text);
    }

    #[test]
    fn insert_preserves_grapheme_count_across_a_combining_mark() {
        // "e" + combining acute is one grapheme, 3 bytes. Inserting "a"
        // at byte 1 (between the base and the mark) must not let the
        // mark reattach to "a": the scenario requires 3 graphemes.
        let base = Chunk::from_buffer("e\u{301}".to_string());
        let parts = base.insert(1, "a", 1, 1024);
        assert_eq!(parts.len(), 1);
        let merged = &parts[0];
        assert_eq!(merged.as_str(), "ea\u{301}");
        assert_eq!(merged.utf8_len(), 4);
        assert_eq!(merged.summary().graphemes, 3);
    }

    #[test]
    fn insert_at_chunk_start_forces_no_spurious_boundary() {
        let base = Chunk::from_buffer("bc".to_string());
        let parts = base.insert(0, "a", 1, 1024);
        assert_eq!(parts.len(), 1);
        assert_eq!(parts[0].as_str(), "abc");
        assert_eq!(parts[0].summary().graphemes, 3);
    }
}
