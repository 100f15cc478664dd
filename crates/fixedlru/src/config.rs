//! Cache configuration
//!
//! ```
//! use fixedlru::CacheConfig;
//!
//! let config = CacheConfig::from_json(r#"{ "capacity": 128, "name": "sessions" }"#).unwrap();
//! let cache = config.build::<String, Vec<u8>>().unwrap();
//! assert_eq!(cache.capacity(), 128);
//! ```

use std::hash::Hash;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;
use crate::lru::LruCache;

/// Default cache capacity (number of entries)
pub const DEFAULT_CAPACITY: usize = 1024;

fn default_capacity() -> usize {
    DEFAULT_CAPACITY
}

/// Settings for building an [`LruCache`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Maximum number of entries
    #[serde(default = "default_capacity")]
    pub capacity: usize,

    /// Label used in log output
    #[serde(default)]
    pub name: Option<String>,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            name: None,
        }
    }
}

impl CacheConfig {
    /// Config with the given capacity and no name
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity,
            ..Self::default()
        }
    }

    /// Parse a JSON document
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Validate and build the cache
    pub fn build<K, V>(&self) -> Result<LruCache<K, V>>
    where
        K: Hash + Eq + Clone,
    {
        let cache = LruCache::new(self.capacity)?;
        debug!(
            name = self.name.as_deref().unwrap_or("unnamed"),
            capacity = self.capacity,
            "built cache from config"
        );
        Ok(cache)
    }
}
