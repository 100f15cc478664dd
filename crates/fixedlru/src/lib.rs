//! # fixedlru
//!
//! Fixed-capacity in-memory cache with least-recently-used eviction.
//!
//! ## Architecture
//! - **Key index**: AHash map from key to arena slot (O(1))
//! - **Recency list**: doubly-linked list over the arena, front = LRU,
//!   back = MRU (O(1) promote and evict)
//! - **Facade**: [`LruCache`] keeps both in sync on every `get`/`put`
//!
//! The cache is single-threaded. `get` updates recency, so callers sharing
//! a cache must hold one exclusive lock around every operation.
//!
//! ```
//! use fixedlru::LruCache;
//!
//! let mut cache = LruCache::new(2)?;
//! cache.put("a", 1);
//! cache.put("b", 2);
//! cache.get(&"a");
//! cache.put("c", 3); // evicts "b"
//!
//! assert_eq!(cache.get(&"b"), None);
//! assert_eq!(cache.get(&"a"), Some(&1));
//! # Ok::<(), fixedlru::Error>(())
//! ```

#![warn(missing_docs)]

mod cache;
mod config;
mod error;
mod lru;
mod stats;

pub use cache::Cache;
pub use config::{CacheConfig, DEFAULT_CAPACITY};
pub use error::{Error, Result};
pub use lru::{Iter, LruCache, PutOutcome};
pub use stats::CacheStats;
