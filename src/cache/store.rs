//! Cache Store Module
//!
//! Single-threaded cache engine combining HashMap storage with an eviction
//! queue that enforces the entry-count bound.

use std::collections::HashMap;

use tracing::debug;

use crate::cache::{CacheStats, EvictionPolicy, EvictionQueue};

// == Cache Store ==
/// Bounded key/value store with a configurable eviction policy.
///
/// The store is not synchronized; wrap it in [`BoundedCache`] for shared
/// access across threads.
///
/// [`BoundedCache`]: crate::BoundedCache
#[derive(Debug)]
pub struct CacheStore<V> {
    /// Key-value storage
    entries: HashMap<String, V>,
    /// Eviction candidates, oldest first
    queue: EvictionQueue,
    /// Victim selection strategy
    policy: EvictionPolicy,
    /// Activity counters
    stats: CacheStats,
    /// Maximum number of entries allowed
    max_entries: usize,
}

impl<V> CacheStore<V> {
    // == Constructor ==
    /// Creates a new CacheStore with the given capacity and FIFO eviction.
    ///
    /// A capacity of zero is clamped to one entry; the bound cannot hold
    /// otherwise.
    ///
    /// # Arguments
    /// * `max_entries` - Maximum number of entries the cache can hold
    pub fn new(max_entries: usize) -> Self {
        Self::with_policy(max_entries, EvictionPolicy::default())
    }

    /// Creates a new CacheStore with an explicit eviction policy.
    pub fn with_policy(max_entries: usize, policy: EvictionPolicy) -> Self {
        Self {
            entries: HashMap::new(),
            queue: EvictionQueue::new(),
            policy,
            stats: CacheStats::new(),
            max_entries: max_entries.max(1),
        }
    }

    // == Put ==
    /// Stores a key-value pair, overwriting any existing value for the key.
    ///
    /// Inserting a new key into a full cache evicts exactly one existing
    /// entry first, so the just-inserted key is never the victim. Overwrites
    /// never trigger an eviction. Both the insert and the overwrite move the
    /// key to the back of the eviction queue.
    ///
    /// Returns the evicted `(key, value)` pair when an eviction occurred.
    ///
    /// # Arguments
    /// * `key` - The key to store
    /// * `value` - The value to store
    pub fn put(&mut self, key: String, value: V) -> Option<(String, V)> {
        let is_overwrite = self.entries.contains_key(&key);

        // Make room before inserting a new key into a full cache.
        let evicted = if !is_overwrite && self.entries.len() >= self.max_entries {
            self.evict_one()
        } else {
            None
        };

        self.entries.insert(key.clone(), value);
        self.queue.refresh(&key);

        self.stats.record_insertion();
        debug!(key = %key, overwrite = is_overwrite, "cache put");

        evicted
    }

    // == Get ==
    /// Returns a clone of the stored value for `key`, or None if absent.
    ///
    /// Under the LRU policy a hit also refreshes the key's queue position.
    /// A miss is a normal outcome; the caller decides whether to fall back
    /// to the backing store.
    ///
    /// # Arguments
    /// * `key` - The key to look up
    pub fn get(&mut self, key: &str) -> Option<V>
    where
        V: Clone,
    {
        match self.entries.get(key) {
            Some(value) => {
                let value = value.clone();
                if self.policy.refreshes_on_read() {
                    self.queue.refresh(key);
                }
                self.stats.record_hit();
                Some(value)
            }
            None => {
                self.stats.record_miss();
                None
            }
        }
    }

    // == Remove ==
    /// Deletes the entry for `key`, returning the removed value.
    ///
    /// A no-op returning None when the key is absent.
    ///
    /// # Arguments
    /// * `key` - The key to remove
    pub fn remove(&mut self, key: &str) -> Option<V> {
        let removed = self.entries.remove(key);
        if removed.is_some() {
            self.queue.remove(key);
            self.stats.record_removal();
            debug!(key = %key, "cache remove");
        }
        removed
    }

    // == Contains ==
    /// Checks for a key without touching stats or the eviction queue.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    // == Stats ==
    /// Returns a snapshot of the activity counters.
    ///
    /// The entry count is computed from the map here, at snapshot time;
    /// the counters themselves only track operation outcomes.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_entries(self.entries.len());
        stats
    }

    // == Accessors ==
    /// Returns the configured maximum number of entries.
    pub fn max_entries(&self) -> usize {
        self.max_entries
    }

    /// Returns the configured eviction policy.
    pub fn policy(&self) -> EvictionPolicy {
        self.policy
    }

    /// Returns the current number of entries in the cache.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    // == Evict One ==
    /// Removes the oldest eviction candidate from the store.
    fn evict_one(&mut self) -> Option<(String, V)> {
        let victim = self.queue.pop_oldest()?;
        let evicted = self.entries.remove_entry(&victim);
        if evicted.is_some() {
            self.stats.record_eviction();
            debug!(key = %victim, "cache eviction");
        }
        evicted
    }
}
