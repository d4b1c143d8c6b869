//! Shared Cache Handle
//!
//! Thread-safe wrapper around the cache engine for use from concurrent
//! request-handling code.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::cache::{CacheStats, CacheStore, EvictionPolicy};
use crate::config::CacheConfig;

// == Bounded Cache ==
/// Cloneable, thread-safe handle to a bounded cache.
///
/// The handle wraps a [`CacheStore`] in `Arc<RwLock<...>>`; every clone
/// refers to the same underlying store. Construct one instance explicitly
/// and pass clones to the callers that need it — there is no global cache.
///
/// All operations are synchronous and total: a miss is `None`, never an
/// error.
///
/// # Example
/// ```
/// use bounded_cache::BoundedCache;
///
/// let cache = BoundedCache::new(100);
/// cache.put("berlin".to_string(), 21);
/// assert_eq!(cache.get("berlin"), Some(21));
/// cache.remove("berlin");
/// assert_eq!(cache.get("berlin"), None);
/// ```
#[derive(Debug)]
pub struct BoundedCache<V> {
    /// Shared cache engine
    inner: Arc<RwLock<CacheStore<V>>>,
}

impl<V> Clone for BoundedCache<V> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<V> BoundedCache<V> {
    // == Constructors ==
    /// Creates a cache holding at most `max_entries` entries with FIFO
    /// eviction. A zero capacity is clamped to one entry.
    pub fn new(max_entries: usize) -> Self {
        Self::from_store(CacheStore::new(max_entries))
    }

    /// Creates a cache with an explicit eviction policy.
    pub fn with_policy(max_entries: usize, policy: EvictionPolicy) -> Self {
        Self::from_store(CacheStore::with_policy(max_entries, policy))
    }

    /// Creates a cache from a validated configuration.
    pub fn from_config(config: &CacheConfig) -> Self {
        Self::from_store(CacheStore::with_policy(config.max_entries, config.policy))
    }

    fn from_store(store: CacheStore<V>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(store)),
        }
    }

    // == Put ==
    /// Inserts or overwrites the entry for `key`.
    ///
    /// Returns the evicted `(key, value)` pair when inserting a new key
    /// into a full cache forced one out.
    pub fn put(&self, key: String, value: V) -> Option<(String, V)> {
        self.inner.write().put(key, value)
    }

    // == Remove ==
    /// Deletes the entry for `key` if present; no-op when absent.
    pub fn remove(&self, key: &str) -> Option<V> {
        self.inner.write().remove(key)
    }

    // == Contains ==
    /// Checks for a key without touching stats or the eviction queue.
    pub fn contains_key(&self, key: &str) -> bool {
        self.inner.read().contains_key(key)
    }

    // == Stats ==
    /// Returns a snapshot of the activity counters.
    pub fn stats(&self) -> CacheStats {
        self.inner.read().stats()
    }

    // == Accessors ==
    /// Returns the configured maximum number of entries.
    pub fn max_entries(&self) -> usize {
        self.inner.read().max_entries()
    }

    /// Returns the configured eviction policy.
    pub fn policy(&self) -> EvictionPolicy {
        self.inner.read().policy()
    }

    /// Returns the current number of entries in the cache.
    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    /// Returns true if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }
}

impl<V: Clone> BoundedCache<V> {
    // == Get ==
    /// Returns a clone of the stored value for `key`, or None on a miss.
    ///
    /// Takes the write lock: hits update stats and, under LRU, refresh the
    /// key's eviction-queue position.
    pub fn get(&self, key: &str) -> Option<V> {
        self.inner.write().get(key)
    }

    // == Get Or Insert With ==
    /// Read-through lookup: returns the cached value for `key`, or computes
    /// one with `fill`, stores it (possibly evicting another entry) and
    /// returns it.
    ///
    /// The fill closure runs while the write lock is held, so it must not
    /// call back into this cache.
    pub fn get_or_insert_with<F>(&self, key: &str, fill: F) -> V
    where
        F: FnOnce() -> V,
    {
        let mut store = self.inner.write();
        if let Some(value) = store.get(key) {
            return value;
        }
        let value = fill();
        store.put(key.to_string(), value.clone());
        value
    }
}
