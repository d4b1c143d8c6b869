//! Cache Statistics Module
//!
//! Tracks cache activity: hits, misses, insertions, removals and evictions.

use serde::Serialize;

// == Cache Stats ==
/// Counters describing cache activity since construction.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CacheStats {
    /// Number of successful lookups
    pub hits: u64,
    /// Number of lookups for missing keys
    pub misses: u64,
    /// Number of put operations (inserts and overwrites)
    pub insertions: u64,
    /// Number of explicit removals
    pub removals: u64,
    /// Number of entries evicted to stay within capacity
    pub evictions: u64,
    /// Number of entries in the cache at snapshot time
    pub entries: usize,
}

impl CacheStats {
    // == Constructor ==
    /// Creates a new CacheStats with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    // == Hit Rate ==
    /// Calculates the cache hit rate.
    ///
    /// Returns hits / (hits + misses), or 0.0 if no lookups have been made.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }

    // == Record Hit ==
    /// Increments the hit counter.
    pub fn record_hit(&mut self) {
        self.hits += 1;
    }

    // == Record Miss ==
    /// Increments the miss counter.
    pub fn record_miss(&mut self) {
        self.misses += 1;
    }

    // == Record Insertion ==
    /// Increments the insertion counter.
    pub fn record_insertion(&mut self) {
        self.insertions += 1;
    }

    // == Record Removal ==
    /// Increments the removal counter.
    pub fn record_removal(&mut self) {
        self.removals += 1;
    }

    // == Record Eviction ==
    /// Increments the eviction counter.
    pub fn record_eviction(&mut self) {
        self.evictions += 1;
    }

    // == Update Entry Count ==
    /// Updates the current entry count.
    pub fn set_entries(&mut self, count: usize) {
        self.entries = count;
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_new() {
        let stats = CacheStats::new();
        assert_eq!(stats.hits, 0);
        assert_eq!(stats.misses, 0);
        assert_eq!(stats.insertions, 0);
        assert_eq!(stats.removals, 0);
        assert_eq!(stats.evictions, 0);
        assert_eq!(stats.entries, 0);
    }

    #[test]
    fn test_hit_rate_no_lookups() {
        let stats = CacheStats::new();
        assert_eq!(stats.hit_rate(), 0.0);
    }

    #[test]
    fn test_hit_rate_all_hits() {
        let mut stats = CacheStats::new();
        stats.record_hit();
        stats.record_hit();
        assert_eq!(stats.hit_rate(), 1.0);
    }

    #[test]
    fn test_hit_rate_mixed() {
        let mut stats = CacheStats::new();
        stats.record_hit();
        stats.record_miss();
        assert_eq!(stats.hit_rate(), 0.5);
    }

    #[test]
    fn test_counters_increment() {
        let mut stats = CacheStats::new();
        stats.record_insertion();
        stats.record_insertion();
        stats.record_removal();
        stats.record_eviction();
        assert_eq!(stats.insertions, 2);
        assert_eq!(stats.removals, 1);
        assert_eq!(stats.evictions, 1);
    }

    #[test]
    fn test_set_entries() {
        let mut stats = CacheStats::new();
        stats.set_entries(42);
        assert_eq!(stats.entries, 42);
    }

    #[test]
    fn test_stats_serialize() {
        let mut stats = CacheStats::new();
        stats.record_hit();
        stats.set_entries(1);

        let json = serde_json::to_value(&stats).unwrap();
        assert_eq!(json["hits"], 1);
        assert_eq!(json["entries"], 1);
    }
}
