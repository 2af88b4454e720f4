// Copyright 2025 Vivian Voss. Licensed under the Apache License, Version 2.0.
// SPDX-License-Identifier: Apache-2.0

//! A hash map built on [`RobinHTable`], keyed the same way
//! [`crate::robin::set::HashSet`] stores its elements — a parallel
//! `(K, V)` array indexed in lockstep with the table's buckets.

use super::table::{Bucket, ProbeAccess, RobinConfig, RobinHTable};
use std::hash::{Hash, Hasher};

fn hash_of<K: Hash>(key: &K) -> u64 {
    let mut hasher = std::collections::hash_map::DefaultHasher::new();
    key.hash(&mut hasher);
    hasher.finish()
}

struct ElementAccess<'a, K, V> {
    entries: &'a mut [Option<(K, V)>],
}

impl<'a, K: Hash, V> ProbeAccess for ElementAccess<'a, K, V> {
    fn hash_at(&self, bucket: Bucket) -> u64 {
        hash_of(&self.entries[bucket].as_ref().expect("occupied bucket holds an entry").0)
    }

    fn relocate(&mut self, from: Bucket, to: Bucket) {
        self.entries[to] = self.entries[from].take();
    }
}

/// A `Hash + Eq`-keyed map backed by [`RobinHTable`].
#[derive(Debug, Clone)]
pub struct HashMap<K, V> {
    table: RobinHTable,
    entries: Vec<Option<(K, V)>>,
    cfg: RobinConfig,
}

impl<K, V> Default for HashMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> HashMap<K, V> {
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        let cfg = RobinConfig::default();
        let table = RobinHTable::new(capacity, &cfg);
        Self { table, entries: Vec::new(), cfg }
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.entries.iter().filter_map(|slot| slot.as_ref().map(|(k, v)| (k, v)))
    }

    pub fn clear(&mut self) {
        *self = Self::new();
    }
}

impl<K: Hash + Eq + Clone, V: Clone> HashMap<K, V> {
    fn find_bucket(&self, key: &K) -> Option<Bucket> {
        let hash = hash_of(key);
        self.table.find(hash, |b| self.entries[b].as_ref().map(|(k, _)| k) == Some(key))
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.find_bucket(key).is_some()
    }

    pub fn get(&self, key: &K) -> Option<&V> {
        let bucket = self.find_bucket(key)?;
        self.entries[bucket].as_ref().map(|(_, v)| v)
    }

    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        let bucket = self.find_bucket(key)?;
        self.entries[bucket].as_mut().map(|(_, v)| v)
    }

    /// Inserts `key -> value`, returning the previous value if `key` was
    /// already present.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        if let Some(bucket) = self.find_bucket(&key) {
            let (_, old) = self.entries[bucket].replace((key, value)).unwrap();
            return Some(old);
        }
        self.maybe_grow();
        let hash = hash_of(&key);
        if self.table.is_small() {
            let mut access = ElementAccess { entries: &mut self.entries };
            let bucket = self.table.insert_new(hash, &mut access);
            debug_assert_eq!(bucket, self.entries.len());
            self.entries.push(Some((key, value)));
        } else {
            let mut access = ElementAccess { entries: &mut self.entries };
            let bucket = self.table.insert_new(hash, &mut access);
            self.entries[bucket] = Some((key, value));
        }
        None
    }

    pub fn remove(&mut self, key: &K) -> Option<V> {
        let bucket = self.find_bucket(key)?;
        let (_, value) = self.entries[bucket].take().unwrap();
        if self.table.is_small() {
            if let Some(moved_from) = self.table.remove_small(bucket) {
                self.entries[bucket] = self.entries[moved_from].take();
            }
            self.entries.pop();
        } else {
            self.table.create_hole(bucket);
            let mut access = ElementAccess { entries: &mut self.entries };
            self.table.resolve_hole(bucket, &mut access);
        }
        self.maybe_shrink();
        Some(value)
    }

    fn maybe_grow(&mut self) {
        if self.table.is_small() {
            if self.table.len() + 1 > self.cfg.max_unhashed_count() {
                self.rehash(self.table.len() + 1);
            }
        } else if self.table.should_grow(&self.cfg) {
            let target = (self.table.capacity(&self.cfg) * 2).max(self.table.len() + 1);
            self.rehash(target);
        }
    }

    fn maybe_shrink(&mut self) {
        if self.table.should_shrink(&self.cfg) {
            self.rehash(self.table.len().max(1));
        }
    }

    /// Reserves room for at least `additional` more entries without
    /// waiting for a later insert to cross the grow threshold. When
    /// `persistent` is true, removals afterward will not shrink the table
    /// below the reserved size.
    pub fn reserve(&mut self, additional: usize, persistent: bool) {
        let min_capacity = self.table.len() + additional;
        let target_scale = self.table.reserve(min_capacity, persistent, &self.cfg);
        if target_scale > self.table.scale() {
            self.rehash(min_capacity);
        }
    }

    fn rehash(&mut self, min_capacity: usize) {
        let floor = self.table.scale_floor();
        let mut new_table = RobinHTable::new_with_floor(min_capacity, floor, &self.cfg);
        let new_capacity = new_table.capacity(&self.cfg);
        let mut new_entries: Vec<Option<(K, V)>> = vec![None; new_capacity];
        for (start, end) in self.table.iterate_occupied() {
            for old_bucket in start..end {
                let entry = self.entries[old_bucket].take().expect("occupied bucket holds an entry");
                let hash = hash_of(&entry.0);
                let mut access = ElementAccess { entries: &mut new_entries };
                let new_bucket = new_table.insert_new(hash, &mut access);
                new_entries[new_bucket] = Some(entry);
            }
        }
        if new_table.is_small() {
            new_entries.truncate(new_table.len());
        }
        self.table = new_table;
        self.entries = new_entries;
    }
}

impl<K: Hash + Eq + Clone, V: Clone> FromIterator<(K, V)> for HashMap<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (k, v) in iter {
            map.insert(k, v);
        }
        map
    }
}
