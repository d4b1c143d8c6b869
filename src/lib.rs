//! Bounded Cache - a thread-safe bounded in-memory key/value cache
//!
//! Holds at most a configured number of entries and evicts one entry, FIFO
//! or LRU, when inserting a new key past capacity. Intended as a best-effort
//! read-through accelerator in front of a slower backing store; on a miss
//! the caller fetches and re-inserts.

pub mod cache;
pub mod config;
pub mod error;

mod shared;

pub use cache::{CacheStats, CacheStore, EvictionPolicy, DEFAULT_MAX_ENTRIES};
pub use config::CacheConfig;
pub use error::ConfigError;
pub use shared::BoundedCache;
