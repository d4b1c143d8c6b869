//! Cache Module
//!
//! Provides bounded in-memory caching with FIFO or LRU eviction.

mod eviction;
mod stats;
mod store;


// Re-export public types
pub use eviction::{EvictionPolicy, EvictionQueue};
pub use stats::CacheStats;
pub use store::CacheStore;

// == Public Constants ==
/// Default maximum number of entries
pub const DEFAULT_MAX_ENTRIES: usize = 100;
