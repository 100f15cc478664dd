//! LRU (Least Recently Used) cache implementation
//!
//! Entries live in a `Vec` arena and are linked by slot index into a doubly
//! linked recency list. The front of the list is the least recently used
//! entry, the back the most recently used. The key index maps each key to
//! its slot, so both structures share one level of indirection and no node
//! is ever referenced from two owners.

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

use ahash::RandomState;
use tracing::{debug, trace};

use crate::error::{Error, Result};
use crate::stats::CacheStats;

/// Node in the recency list
struct Node<K, V> {
    key: K,
    value: V,
    prev: Option<usize>,
    next: Option<usize>,
}

impl<K, V> Node<K, V> {
    fn detached(key: K, value: V) -> Self {
        Self {
            key,
            value,
            prev: None,
            next: None,
        }
    }
}

/// What a [`LruCache::put`] did to the cache
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PutOutcome<K, V> {
    /// New key stored in free space
    Inserted,
    /// Existing key overwritten and promoted
    Updated,
    /// New key stored after evicting the least recently used entry
    Evicted(K, V),
}

/// Fixed-capacity LRU cache
///
/// Holds at most `capacity` entries. When a new key arrives and the cache is
/// full, the entry that has gone longest without a `get` or `put` is evicted.
///
/// `get` updates recency and therefore takes `&mut self`. The cache does no
/// internal locking; to share it across threads wrap it in a single
/// exclusive lock covering both `get` and `put`.
pub struct LruCache<K, V> {
    map: HashMap<K, usize, RandomState>,
    nodes: Vec<Option<Node<K, V>>>,
    front: Option<usize>,
    back: Option<usize>,
    free_list: Vec<usize>,
    capacity: usize,
    stats: CacheStats,
}

impl<K, V> LruCache<K, V>
where
    K: Hash + Eq + Clone,
{
    /// Create a new LRU cache with the given capacity
    ///
    /// # Errors
    /// Returns [`Error::InvalidCapacity`] if `capacity` is zero.
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(Error::InvalidCapacity(capacity));
        }

        debug!(capacity, "created LRU cache");

        Ok(Self {
            map: HashMap::with_capacity_and_hasher(capacity, RandomState::new()),
            nodes: Vec::with_capacity(capacity),
            front: None,
            back: None,
            free_list: Vec::new(),
            capacity,
            stats: CacheStats::new(),
        })
    }

    /// Get a value from the cache, marking it most recently used
    pub fn get(&mut self, key: &K) -> Option<&V> {
        match self.map.get(key).copied() {
            Some(idx) => {
                self.stats.record_hit();
                self.promote(idx);
                self.nodes[idx].as_ref().map(|node| &node.value)
            }
            None => {
                self.stats.record_miss();
                None
            }
        }
    }

    /// Get a mutable reference to a value, marking it most recently used
    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        match self.map.get(key).copied() {
            Some(idx) => {
                self.stats.record_hit();
                self.promote(idx);
                self.nodes[idx].as_mut().map(|node| &mut node.value)
            }
            None => {
                self.stats.record_miss();
                None
            }
        }
    }

    /// Get a value without touching its recency
    pub fn peek(&self, key: &K) -> Option<&V> {
        self.map
            .get(key)
            .and_then(|&idx| self.nodes[idx].as_ref())
            .map(|node| &node.value)
    }

    /// Check whether a key is cached, without touching its recency
    pub fn contains(&self, key: &K) -> bool {
        self.map.contains_key(key)
    }

    /// Insert a key-value pair into the cache
    ///
    /// An existing key is overwritten in place. A new key takes free space if
    /// any is left, otherwise it replaces the least recently used entry,
    /// which is handed back in [`PutOutcome::Evicted`].
    pub fn put(&mut self, key: K, value: V) -> PutOutcome<K, V> {
        // Membership first: a full cache whose front entry is `key` overwrites it.
        if let Some(&idx) = self.map.get(&key) {
            if let Some(node) = &mut self.nodes[idx] {
                node.value = value;
            }
            self.promote(idx);
            self.stats.record_update();
            return PutOutcome::Updated;
        }

        let (idx, outcome) = if self.map.len() >= self.capacity {
            match self.unlink_front() {
                Some((idx, old_key, old_value)) => {
                    self.stats.record_eviction();
                    trace!(slot = idx, "evicted least recently used entry");
                    (idx, PutOutcome::Evicted(old_key, old_value))
                }
                None => (self.alloc_slot(), PutOutcome::Inserted),
            }
        } else {
            (self.alloc_slot(), PutOutcome::Inserted)
        };

        self.nodes[idx] = Some(Node::detached(key.clone(), value));
        self.append(idx);
        self.map.insert(key, idx);
        self.stats.record_insert();

        debug_assert!(self.map.len() <= self.capacity, "cache grew past capacity");
        debug_assert_eq!(
            self.map.len() + self.free_list.len(),
            self.nodes.len(),
            "key index and arena disagree"
        );

        outcome
    }

    /// Remove a key from the cache
    pub fn remove(&mut self, key: &K) -> Option<V> {
        let idx = self.map.remove(key)?;
        self.detach(idx);
        self.free_list.push(idx);
        self.stats.record_removal();
        trace!(slot = idx, "removed entry");
        self.nodes[idx].take().map(|node| node.value)
    }

    /// Remove and return the least recently used entry
    pub fn pop_lru(&mut self) -> Option<(K, V)> {
        let (idx, key, value) = self.unlink_front()?;
        self.free_list.push(idx);
        self.stats.record_removal();
        trace!(slot = idx, "popped least recently used entry");
        Some((key, value))
    }

    /// The entry that the next eviction would discard
    pub fn peek_lru(&self) -> Option<(&K, &V)> {
        self.front
            .and_then(|idx| self.nodes[idx].as_ref())
            .map(|node| (&node.key, &node.value))
    }

    /// Get the current number of entries
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Check if the cache is empty
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Maximum number of entries
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Entries that can still be added before eviction kicks in
    pub fn free_space(&self) -> usize {
        self.capacity - self.map.len()
    }

    /// Clear the cache
    ///
    /// Capacity and statistics are kept.
    pub fn clear(&mut self) {
        debug!(dropped = self.map.len(), "cleared LRU cache");
        self.map.clear();
        self.nodes.clear();
        self.free_list.clear();
        self.front = None;
        self.back = None;
    }

    /// Snapshot of hit/miss/eviction counters
    pub fn stats(&self) -> CacheStats {
        self.stats
    }

    /// Zero all counters
    pub fn reset_stats(&mut self) {
        self.stats.reset();
    }

    /// Iterate entries from least to most recently used
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            nodes: &self.nodes,
            cursor: self.front,
            remaining: self.map.len(),
        }
    }

    /// Walk the recency list and panic on any broken link
    ///
    /// Checks that the list is acyclic and properly terminated, that every
    /// node is reachable exactly once, that each node's key points back to
    /// its slot, and that the list length equals the index size.
    #[cfg(any(test, debug_assertions))]
    pub fn check_invariants(&self) {
        assert!(self.map.len() <= self.capacity, "len exceeds capacity");
        assert_eq!(
            self.map.len() + self.free_list.len(),
            self.nodes.len(),
            "live + free slots != arena size"
        );

        let mut seen = vec![false; self.nodes.len()];
        let mut prev: Option<usize> = None;
        let mut cursor = self.front;
        let mut count = 0;

        while let Some(idx) = cursor {
            assert!(!seen[idx], "slot {idx} reached twice");
            seen[idx] = true;
            count += 1;

            let node = match &self.nodes[idx] {
                Some(node) => node,
                None => panic!("linked slot {idx} is vacant"),
            };
            assert_ne!(node.prev, Some(idx), "self-loop at slot {idx}");
            assert_ne!(node.next, Some(idx), "self-loop at slot {idx}");
            assert_eq!(node.prev, prev, "prev link mismatch at slot {idx}");
            assert_eq!(self.map.get(&node.key), Some(&idx), "index points elsewhere");

            prev = Some(idx);
            cursor = node.next;
        }

        assert_eq!(self.back, prev, "back is not the last reachable node");
        assert_eq!(count, self.map.len(), "list length != index size");
        for &idx in &self.free_list {
            assert!(self.nodes[idx].is_none(), "free slot {idx} is occupied");
        }
    }

    /// Detach the front node and vacate its slot without freeing it
    fn unlink_front(&mut self) -> Option<(usize, K, V)> {
        let idx = self.front?;
        self.detach(idx);
        let node = self.nodes[idx].take()?;
        self.map.remove(&node.key);
        Some((idx, node.key, node.value))
    }

    /// Move a linked node to the back of the list
    fn promote(&mut self, idx: usize) {
        self.detach(idx);
        self.append(idx);
        debug_assert_eq!(self.back, Some(idx), "promoted node is not at the back");
    }

    /// Unlink a node, rewiring its neighbours and the list ends
    fn detach(&mut self, idx: usize) {
        let (prev, next) = match &self.nodes[idx] {
            Some(node) => (node.prev, node.next),
            None => return,
        };
        debug_assert!(
            prev != Some(idx) && next != Some(idx),
            "self-loop at slot {idx}"
        );

        match prev {
            Some(prev_idx) => {
                if let Some(prev_node) = &mut self.nodes[prev_idx] {
                    prev_node.next = next;
                }
            }
            None => self.front = next,
        }

        match next {
            Some(next_idx) => {
                if let Some(next_node) = &mut self.nodes[next_idx] {
                    next_node.prev = prev;
                }
            }
            None => self.back = prev,
        }

        if let Some(node) = &mut self.nodes[idx] {
            node.prev = None;
            node.next = None;
        }
    }

    /// Link a detached node in as the most recently used entry
    fn append(&mut self, idx: usize) {
        let old_back = self.back;
        debug_assert_ne!(old_back, Some(idx), "appending the current back");

        if let Some(node) = &mut self.nodes[idx] {
            node.prev = old_back;
            node.next = None;
        }

        match old_back {
            Some(back_idx) => {
                if let Some(back_node) = &mut self.nodes[back_idx] {
                    back_node.next = Some(idx);
                }
            }
            None => self.front = Some(idx),
        }

        self.back = Some(idx);
    }

    fn alloc_slot(&mut self) -> usize {
        if let Some(idx) = self.free_list.pop() {
            idx
        } else {
            let idx = self.nodes.len();
            self.nodes.push(None);
            idx
        }
    }
}

impl<K, V> fmt::Debug for LruCache<K, V>
where
    K: Hash + Eq + Clone + fmt::Debug,
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LruCache")
            .field("capacity", &self.capacity)
            .field("len", &self.map.len())
            .field("entries", &DebugEntries(self))
            .finish()
    }
}

struct DebugEntries<'a, K, V>(&'a LruCache<K, V>);

impl<K, V> fmt::Debug for DebugEntries<'_, K, V>
where
    K: Hash + Eq + Clone + fmt::Debug,
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.0.iter()).finish()
    }
}

/// Iterator over cache entries, least recently used first
pub struct Iter<'a, K, V> {
    nodes: &'a [Option<Node<K, V>>],
    cursor: Option<usize>,
    remaining: usize,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.nodes[self.cursor?].as_ref()?;
        self.cursor = node.next;
        self.remaining = self.remaining.saturating_sub(1);
        Some((&node.key, &node.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}

impl<'a, K, V> IntoIterator for &'a LruCache<K, V>
where
    K: Hash + Eq + Clone,
{
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
