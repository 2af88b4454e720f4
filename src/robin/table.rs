// Copyright 2025 Vivian Voss. Licensed under the Apache License, Version 2.0.
// SPDX-License-Identifier: Apache-2.0

//! Robin Hood open-addressed index.
//!
//! `RobinHTable` tracks occupancy over `2^scale` buckets and maintains the
//! Robin Hood invariant (probe length never decreases while walking a
//! chain forward) without storing any element data of its own. Callers
//! implement [`ProbeAccess`] over their own parallel element array to
//! supply hashing and relocation; see [`crate::robin::set::HashSet`] for
//! the intended wrapping.
//!
//! ## Small mode
//!
//! Tables below `maximumUnhashedCount` items skip hashing entirely:
//! `scale == 0` addresses elements by a dense linear scan over
//! `[0, count)`, avoiding the fixed cost of a real hash table for the
//! common case of tiny collections.

use crate::common::bits::Bitmap;

/// Index into a table's (or its wrapper's parallel element array's) bucket space.
pub type Bucket = usize;

/// Hard ceiling on `scale`: large-mode tables never exceed `2^56` buckets.
/// 64-bit word sizes make anything past that unreachable in practice, and
/// capping it keeps `1usize << scale` panic-free on every supported target.
pub const MAX_SCALE: u32 = 56;

/// A caller's parallel element array, as seen by `RobinHTable`'s internal
/// displacement logic. One object per table: its single `&mut self`
/// receiver lets a table operation both read an occupant's hash and move
/// occupants around without the aliasing conflict two separate closures
/// (one borrowing for reads, one for writes) would run into.
pub trait ProbeAccess {
    /// Hash of whatever currently occupies `bucket`. Only called for
    /// buckets the table believes are occupied.
    fn hash_at(&self, bucket: Bucket) -> u64;

    /// Moves the element at bucket `from` to bucket `to`, leaving `from`
    /// logically vacated.
    fn relocate(&mut self, from: Bucket, to: Bucket);
}

/// Load-factor and sizing policy. The defaults match the hysteresis band
/// described for `RobinHTable`: grow once 7/8 full, never shrink past 1/8
/// full, and never drop below small mode's own linear-scan threshold.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RobinConfig {
    pub max_load_num: u32,
    pub max_load_den: u32,
    pub min_load_num: u32,
    pub min_load_den: u32,
    pub min_scale: u32,
}

impl Default for RobinConfig {
    fn default() -> Self {
        Self {
            max_load_num: 7,
            max_load_den: 8,
            min_load_num: 1,
            min_load_den: 8,
            min_scale: 4,
        }
    }
}

impl RobinConfig {
    /// `2^(minScale-1) - 1`: the largest table small mode can hold before a
    /// real hash table becomes necessary.
    pub fn max_unhashed_count(&self) -> usize {
        (1usize << (self.min_scale - 1)) - 1
    }

    /// Smallest `scale` (0 for small mode, else `>= min_scale`) whose
    /// capacity holds `capacity` items without exceeding the max load factor.
    pub fn required_scale(&self, capacity: usize) -> u32 {
        if capacity <= self.max_unhashed_count() {
            return 0;
        }
        let target = (capacity * self.max_load_den as usize).div_ceil(self.max_load_num as usize);
        let mut scale = self.min_scale;
        while (1usize << scale) < target {
            scale += 1;
        }
        scale.min(MAX_SCALE)
    }
}

/// Robin Hood open-addressed occupancy index.
///
/// Holds no elements; every comparison, hash regeneration and relocation
/// needed to maintain the invariant is delegated to a caller-supplied
/// [`ProbeAccess`] (or, for read-only lookups, a plain predicate).
#[derive(Debug, Clone)]
pub struct RobinHTable {
    scale: u32,
    count: usize,
    occupied: Bitmap,
    total_probe_length: usize,
    max_probe_length: usize,
    scale_floor: u32,
}

impl RobinHTable {
    /// Builds a table sized to hold at least `min_capacity` items under `cfg`.
    pub fn new(min_capacity: usize, cfg: &RobinConfig) -> Self {
        Self::new_with_floor(min_capacity, 0, cfg)
    }

    /// Builds a table sized to hold at least `min_capacity` items, with its
    /// scale never dropping below `floor` regardless of later removals.
    /// The rehash-on-grow/shrink call sites use this to carry a caller's
    /// [`Self::reserve`] floor across a table replacement.
    pub fn new_with_floor(min_capacity: usize, floor: u32, cfg: &RobinConfig) -> Self {
        let scale = cfg.required_scale(min_capacity).max(floor);
        let mut table = Self::with_scale(scale);
        table.scale_floor = floor;
        table
    }

    fn with_scale(scale: u32) -> Self {
        let buckets = if scale == 0 { 0 } else { 1usize << scale };
        Self {
            scale,
            count: 0,
            occupied: Bitmap::new(buckets),
            total_probe_length: 0,
            max_probe_length: 0,
            scale_floor: 0,
        }
    }

    pub fn scale(&self) -> u32 {
        self.scale
    }

    pub fn is_small(&self) -> bool {
        self.scale == 0
    }

    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Bucket count in large mode; small mode reports its linear-scan ceiling
    /// under `cfg` since it has no fixed bucket array of its own.
    pub fn capacity(&self, cfg: &RobinConfig) -> usize {
        if self.is_small() {
            cfg.max_unhashed_count()
        } else {
            1usize << self.scale
        }
    }

    pub fn load_factor(&self, cfg: &RobinConfig) -> f64 {
        let cap = self.capacity(cfg);
        if cap == 0 {
            0.0
        } else {
            self.count as f64 / cap as f64
        }
    }

    pub fn max_probe_length(&self) -> usize {
        self.max_probe_length
    }

    pub fn total_probe_length(&self) -> usize {
        self.total_probe_length
    }

    pub fn should_grow(&self, cfg: &RobinConfig) -> bool {
        !self.is_small() && self.load_factor(cfg) > cfg.max_load_num as f64 / cfg.max_load_den as f64
    }

    pub fn should_shrink(&self, cfg: &RobinConfig) -> bool {
        !self.is_small()
            && self.scale > cfg.min_scale.max(self.scale_floor)
            && self.load_factor(cfg) < cfg.min_load_num as f64 / cfg.min_load_den as f64
    }

    /// This table's persisted scale floor: `should_shrink` never drops the
    /// scale below it, regardless of load factor. Zero unless raised by a
    /// prior [`Self::reserve`] call with `persistent = true`.
    pub fn scale_floor(&self) -> u32 {
        self.scale_floor
    }

    /// Ensures the table can hold at least `min_capacity` items, returning
    /// the scale a caller should rehash into if it exceeds the current one
    /// (the table holds no element data, so it cannot resize itself; see
    /// [`crate::robin::set::HashSet::reserve`] for the rehashing caller).
    ///
    /// When `persistent` is true, also raises this table's scale floor so
    /// a later shrink respects the reservation even after the elements
    /// that justified it are removed again.
    pub fn reserve(&mut self, min_capacity: usize, persistent: bool, cfg: &RobinConfig) -> u32 {
        let required = cfg.required_scale(min_capacity);
        if persistent {
            self.scale_floor = self.scale_floor.max(required);
        }
        self.scale.max(required)
    }

    fn mask(&self) -> usize {
        (1usize << self.scale) - 1
    }

    fn probe_length_at(&self, bucket: Bucket, access: &impl ProbeAccess) -> usize {
        let mask = self.mask();
        let ideal = (access.hash_at(bucket) as usize) & mask;
        (bucket + (1usize << self.scale) - ideal) & mask
    }

    /// Looks up the bucket holding the element `equals` matches.
    ///
    /// In small mode this is a linear scan over `[0, count)`; in large mode
    /// it walks the probe chain starting at `hash`'s ideal bucket and stops
    /// as soon as it hits an empty bucket or a probe length longer than
    /// `max_probe_length`, either of which proves the element is absent.
    pub fn find(&self, hash: u64, equals: impl Fn(Bucket) -> bool) -> Option<Bucket> {
        if self.is_small() {
            return (0..self.count).find(|&b| equals(b));
        }
        let mask = self.mask();
        let ideal = (hash as usize) & mask;
        let mut pl = 0usize;
        loop {
            if pl > self.max_probe_length {
                return None;
            }
            let b = (ideal + pl) & mask;
            if !self.occupied.get(b) {
                return None;
            }
            if equals(b) {
                return Some(b);
            }
            pl += 1;
        }
    }

    /// Reserves a bucket for a new element with the given `hash`, returning
    /// its index. In small mode the element is simply appended and `access`
    /// is untouched. In large mode, walks the probe chain and, if a steal
    /// point is found, shifts the displaced run forward by one bucket using
    /// `access.relocate`.
    ///
    /// Caller contract: after this returns, the caller must write its new
    /// element's payload into the returned bucket — the table only makes
    /// room, it never holds data itself.
    pub fn insert_new(&mut self, hash: u64, access: &mut impl ProbeAccess) -> Bucket {
        if self.is_small() {
            let b = self.count;
            self.count += 1;
            return b;
        }

        let mask = self.mask();
        let ideal = (hash as usize) & mask;
        let mut pl = 0usize;
        let insert_at = loop {
            let b = (ideal + pl) & mask;
            if !self.occupied.get(b) {
                break b;
            }
            if pl > self.probe_length_at(b, access) {
                break b;
            }
            pl += 1;
        };

        if self.occupied.get(insert_at) {
            // Displace the occupant and everyone after it in the contiguous
            // run forward by one bucket, opening a hole at `insert_at`.
            let mut end = insert_at;
            loop {
                let next = (end + 1) & mask;
                if !self.occupied.get(next) {
                    end = next;
                    break;
                }
                end = next;
            }
            let mut i = end;
            while i != insert_at {
                let prev = (i + mask) & mask;
                access.relocate(prev, i);
                self.occupied.set(i);
                i = prev;
            }
        } else {
            self.occupied.set(insert_at);
        }

        self.count += 1;
        self.total_probe_length += pl;
        self.max_probe_length = self.max_probe_length.max(pl);
        insert_at
    }

    /// Marks `at` as logically empty without restoring the Robin Hood
    /// invariant for buckets that follow it; callers must pair this with
    /// [`Self::resolve_hole`] in large mode.
    pub fn create_hole(&mut self, at: Bucket) {
        debug_assert!(!self.is_small(), "create_hole is a large-mode operation");
        self.occupied.clear_bit(at);
        self.count -= 1;
    }

    /// Backward-shifts the probe chain following a hole at `at` left by one
    /// bucket as long as doing so shortens each candidate's own probe
    /// length, restoring the Robin Hood invariant. Returns the bucket the
    /// hole ends up at.
    pub fn resolve_hole(&mut self, at: Bucket, access: &mut impl ProbeAccess) -> Bucket {
        let mask = self.mask();
        let mut hole = at;
        loop {
            let candidate = (hole + 1) & mask;
            if !self.occupied.get(candidate) {
                return hole;
            }
            let cand_ideal = (access.hash_at(candidate) as usize) & mask;
            if !Self::in_circular_range(cand_ideal, candidate, hole, 1usize << self.scale) {
                return hole;
            }
            access.relocate(candidate, hole);
            self.occupied.set(hole);
            self.occupied.clear_bit(candidate);
            hole = candidate;
        }
    }

    /// True when `hole` lies in the half-open circular range `[ideal, candidate)`,
    /// i.e. moving `candidate` back into `hole` would not push it before its
    /// own ideal bucket.
    fn in_circular_range(ideal: usize, candidate: usize, hole: usize, size: usize) -> bool {
        let span = (candidate + size - ideal) % size;
        let offset = (hole + size - ideal) % size;
        offset < span
    }

    /// Small-mode removal: drops the last logical slot and reports which
    /// bucket (if any) the caller must move into `at` to keep the scan
    /// region dense, mirroring `Vec::swap_remove`.
    pub fn remove_small(&mut self, at: Bucket) -> Option<Bucket> {
        debug_assert!(self.is_small(), "remove_small is a small-mode operation");
        self.count -= 1;
        if at == self.count {
            None
        } else {
            Some(self.count)
        }
    }

    /// Maximal ranges of consecutive occupied buckets, ascending. Works in
    /// both modes: small mode is always the single range `[0, count)`.
    pub fn iterate_occupied(&self) -> Vec<(Bucket, Bucket)> {
        if self.is_small() {
            if self.count > 0 {
                vec![(0, self.count)]
            } else {
                Vec::new()
            }
        } else {
            self.occupied.set_ranges().collect()
        }
    }

    /// Reinserts every occupied bucket of `old` into `self`, ascending.
    /// `hash_of` reads an old bucket's hash; `access` is `self`'s own
    /// element-array accessor, used the same way [`Self::insert_new`] uses
    /// it. `on_migrated(old_bucket, new_bucket)` is the caller's cue to
    /// copy the payload across, mirroring `insert_new`'s "make room, caller
    /// writes the value" contract.
    pub fn migrate_from(
        &mut self,
        old: &RobinHTable,
        mut hash_of: impl FnMut(Bucket) -> u64,
        access: &mut impl ProbeAccess,
        mut on_migrated: impl FnMut(Bucket, Bucket),
    ) {
        for (start, end) in old.iterate_occupied() {
            for old_bucket in start..end {
                let hash = hash_of(old_bucket);
                let new_bucket = self.insert_new(hash, access);
                on_migrated(old_bucket, new_bucket);
            }
        }
    }

    /// Visits every occupied bucket ascending via `consumer`, then resets
    /// the table to empty at its current scale and floor.
    pub fn consume_all(&mut self, mut consumer: impl FnMut(Bucket)) {
        for (start, end) in self.iterate_occupied() {
            for b in start..end {
                consumer(b);
            }
        }
        self.clear();
    }

    /// Resets the table to empty, keeping its current scale and scale floor.
    pub fn clear(&mut self) {
        let buckets = if self.is_small() { 0 } else { 1usize << self.scale };
        self.count = 0;
        self.occupied = Bitmap::new(buckets);
        self.total_probe_length = 0;
        self.max_probe_length = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    struct VecAccess<'a, T> {
        hash_of: fn(&T) -> u64,
        slots: &'a RefCell<Vec<Option<T>>>,
    }

    impl<'a, T: Copy> ProbeAccess for VecAccess<'a, T> {
        fn hash_at(&self, bucket: Bucket) -> u64 {
            (self.hash_of)(&self.slots.borrow()[bucket].unwrap())
        }

        fn relocate(&mut self, from: Bucket, to: Bucket) {
            let mut s = self.slots.borrow_mut();
            s[to] = s[from].take();
        }
    }

    #[test]
    fn small_mode_appends_without_hashing() {
        let cfg = RobinConfig::default();
        let mut t = RobinHTable::new(0, &cfg);
        assert!(t.is_small());
        let slots = RefCell::new(Vec::<Option<u64>>::new());
        let mut access = VecAccess { hash_of: |_| unreachable!(), slots: &slots };
        let b0 = t.insert_new(0, &mut access);
        let b1 = t.insert_new(0, &mut access);
        assert_eq!((b0, b1), (0, 1));
        assert_eq!(t.len(), 2);
    }

    #[test]
    fn identical_hashes_produce_increasing_probe_lengths() {
        let mut t = RobinHTable::with_scale(4);
        let slots = RefCell::new(vec![None::<u64>; 16]);
        let mut access = VecAccess { hash_of: |h: &u64| *h, slots: &slots };
        let mut placed = Vec::new();
        for _ in 0..5 {
            let b = t.insert_new(0, &mut access);
            slots.borrow_mut()[b] = Some(0);
            placed.push(b);
        }
        assert_eq!(placed, vec![0, 1, 2, 3, 4]);
        assert_eq!(t.max_probe_length(), 4);
        assert_eq!(t.total_probe_length(), 0 + 1 + 2 + 3 + 4);
    }

    #[test]
    fn robin_hood_steal_displaces_closer_occupant() {
        // A sits at its ideal bucket 0. B sits at its ideal bucket 1.
        // C also has ideal 0: its accumulated probe length overtakes B's
        // (which is already at its own ideal, probe length 0), so C steals
        // bucket 1 and B is displaced forward to bucket 2.
        let mut t = RobinHTable::with_scale(4);
        let slots = RefCell::new(vec![None::<u64>; 16]);
        let hash_of = |h: &u64| *h;
        let mut access = VecAccess { hash_of, slots: &slots };

        for (hash, bucket_hint) in [(0u64, "A"), (1u64, "B"), (0u64, "C")] {
            let _ = bucket_hint;
            let b = t.insert_new(hash, &mut access);
            slots.borrow_mut()[b] = Some(hash);
        }

        let s = slots.borrow();
        assert_eq!(s[0], Some(0)); // A
        assert_eq!(s[1], Some(0)); // C stole bucket 1
        assert_eq!(s[2], Some(1)); // B displaced forward
    }

    #[test]
    fn resolve_hole_backward_shifts_chain() {
        let mut t = RobinHTable::with_scale(4);
        let slots = RefCell::new(vec![None::<u64>; 16]);
        let mut access = VecAccess { hash_of: |h: &u64| *h, slots: &slots };

        for _ in 0..3 {
            let b = t.insert_new(0, &mut access);
            slots.borrow_mut()[b] = Some(0);
        }
        assert_eq!(
            slots.borrow()[0..3],
            [Some(0), Some(0), Some(0)]
        );

        t.create_hole(0);
        slots.borrow_mut()[0] = None;
        let final_hole = t.resolve_hole(0, &mut access);
        assert_eq!(final_hole, 2);
        let s = slots.borrow();
        assert_eq!(s[0], Some(0));
        assert_eq!(s[1], Some(0));
        assert_eq!(s[2], None);
        assert_eq!(t.len(), 2);
    }

    #[test]
    fn required_scale_matches_load_factor_policy() {
        let cfg = RobinConfig::default();
        assert_eq!(cfg.max_unhashed_count(), 7);
        assert_eq!(cfg.required_scale(0), 0);
        assert_eq!(cfg.required_scale(7), 0);
        assert_eq!(cfg.required_scale(8), 4);
        // 100 * 8/7 = 114.28 -> 115, smallest power of two >= 115 is 128 = 2^7.
        assert_eq!(cfg.required_scale(100), 7);
    }

    #[test]
    fn grow_and_shrink_thresholds() {
        let cfg = RobinConfig::default();
        let mut t = RobinHTable::with_scale(4);
        let slots = RefCell::new(vec![None::<u64>; 16]);
        let mut access = VecAccess { hash_of: |h: &u64| *h, slots: &slots };
        assert!(!t.should_grow(&cfg));
        for i in 0..15u64 {
            let b = t.insert_new(i, &mut access);
            slots.borrow_mut()[b] = Some(i);
        }
        assert!(t.should_grow(&cfg));
    }

    #[test]
    fn migrate_from_preserves_all_elements() {
        let cfg = RobinConfig::default();
        let mut old = RobinHTable::with_scale(4);
        let old_slots = RefCell::new(vec![None::<u64>; 16]);
        let mut old_access = VecAccess { hash_of: |h: &u64| *h, slots: &old_slots };
        for h in [1u64, 5, 9, 13] {
            let b = old.insert_new(h, &mut old_access);
            old_slots.borrow_mut()[b] = Some(h);
        }

        let mut new_t = RobinHTable::new(old.len() * 4, &cfg);
        let new_slots = RefCell::new(vec![None::<u64>; new_t.capacity(&cfg)]);
        let mut new_access = VecAccess { hash_of: |h: &u64| *h, slots: &new_slots };
        new_t.migrate_from(
            &old,
            |ob| old_access.hash_at(ob),
            &mut new_access,
            |ob, nb| new_slots.borrow_mut()[nb] = old_slots.borrow()[ob],
        );

        let mut migrated: Vec<u64> = new_slots.borrow().iter().flatten().cloned().collect();
        migrated.sort();
        assert_eq!(migrated, vec![1, 5, 9, 13]);
        assert_eq!(new_t.len(), 4);
    }

    #[test]
    fn consume_all_visits_every_bucket_then_empties_table() {
        let mut t = RobinHTable::with_scale(4);
        let slots = RefCell::new(vec![None::<u64>; 16]);
        let mut access = VecAccess { hash_of: |h: &u64| *h, slots: &slots };
        for h in [1u64, 5, 9] {
            let b = t.insert_new(h, &mut access);
            slots.borrow_mut()[b] = Some(h);
        }

        let mut visited = Vec::new();
        t.consume_all(|b| visited.push(slots.borrow()[b].unwrap()));
        visited.sort();
        assert_eq!(visited, vec![1, 5, 9]);
        assert!(t.is_empty());
        assert_eq!(t.scale(), 4);
    }

    #[test]
    fn reserve_persistent_raises_shrink_floor() {
        let cfg = RobinConfig::default();
        let mut t = RobinHTable::new(0, &cfg);
        let target_scale = t.reserve(200, true, &cfg);
        assert!(target_scale > t.scale());
        assert_eq!(t.scale_floor(), target_scale);

        // Rebuild at the reserved scale (mirrors what a wrapper's rehash
        // would do) and confirm should_shrink now refuses to go below it
        // even once the table is far under the min load factor.
        let mut grown = RobinHTable::new_with_floor(1, t.scale_floor(), &cfg);
        assert_eq!(grown.scale(), target_scale);
        assert!(!grown.should_shrink(&cfg));

        let slots = RefCell::new(vec![None::<u64>; grown.capacity(&cfg)]);
        let mut access = VecAccess { hash_of: |h: &u64| *h, slots: &slots };
        let b = grown.insert_new(1, &mut access);
        slots.borrow_mut()[b] = Some(1u64);
        assert!(!grown.should_shrink(&cfg), "load factor is tiny but the floor must hold");
    }

    #[test]
    fn reserve_without_persistent_does_not_raise_floor() {
        let cfg = RobinConfig::default();
        let mut t = RobinHTable::new(0, &cfg);
        t.reserve(200, false, &cfg);
        assert_eq!(t.scale_floor(), 0);
    }
}
