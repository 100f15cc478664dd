//! Cache trait for embedding programs

use std::hash::Hash;

use crate::lru::LruCache;

/// Key-value cache with bounded size
///
/// `get` may reorder internal state (for LRU it promotes the entry), so it
/// takes `&mut self`.
pub trait Cache<K, V> {
    /// Value associated with `key`, or `None` if it is not cached
    fn get(&mut self, key: &K) -> Option<&V>;

    /// Store `value` under `key`, overwriting any previous value
    fn put(&mut self, key: K, value: V);

    /// Drop `key` from the cache, returning its value
    fn remove(&mut self, key: &K) -> Option<V>;

    /// Number of cached entries
    fn len(&self) -> usize;

    /// Check if the cache is empty
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Maximum number of cached entries
    fn capacity(&self) -> usize;

    /// Drop every entry
    fn clear(&mut self);
}

impl<K, V> Cache<K, V> for LruCache<K, V>
where
    K: Hash + Eq + Clone,
{
    fn get(&mut self, key: &K) -> Option<&V> {
        LruCache::get(self, key)
    }

    fn put(&mut self, key: K, value: V) {
        LruCache::put(self, key, value);
    }

    fn remove(&mut self, key: &K) -> Option<V> {
        LruCache::remove(self, key)
    }

    fn len(&self) -> usize {
        LruCache::len(self)
    }

    fn capacity(&self) -> usize {
        LruCache::capacity(self)
    }

    fn clear(&mut self) {
        LruCache::clear(self);
    }
}
