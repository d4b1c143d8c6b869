//! Eviction Module
//!
//! Tracks the order in which keys become eviction candidates.

use std::collections::VecDeque;
use std::fmt;
use std::str::FromStr;

use crate::error::ConfigError;

// == Eviction Policy ==
/// Strategy used to pick a victim when the cache is full.
///
/// The policy only changes *when* a key's queue position is refreshed:
/// - `Fifo`: position is set on insert (and overwrite) only, so the victim
///   is the entry inserted longest ago.
/// - `Lru`: reads also refresh the position, so the victim is the entry
///   used longest ago.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EvictionPolicy {
    /// Evict the entry inserted longest ago.
    #[default]
    Fifo,
    /// Evict the entry accessed longest ago.
    Lru,
}

impl EvictionPolicy {
    // == Refresh On Read ==
    /// Whether a read should refresh the key's queue position.
    pub fn refreshes_on_read(&self) -> bool {
        matches!(self, EvictionPolicy::Lru)
    }
}

impl fmt::Display for EvictionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EvictionPolicy::Fifo => write!(f, "fifo"),
            EvictionPolicy::Lru => write!(f, "lru"),
        }
    }
}

impl FromStr for EvictionPolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fifo" => Ok(EvictionPolicy::Fifo),
            "lru" => Ok(EvictionPolicy::Lru),
            other => Err(ConfigError::UnknownPolicy(other.to_string())),
        }
    }
}

// == Eviction Queue ==
/// Keeps cache keys ordered from oldest eviction candidate to newest.
///
/// Keys are stored in a VecDeque where:
/// - Front = next eviction victim
/// - Back = most recently inserted/refreshed
#[derive(Debug, Default)]
pub struct EvictionQueue {
    /// Keys ordered by candidacy, oldest first
    order: VecDeque<String>,
}

impl EvictionQueue {
    // == Constructor ==
    /// Creates a new empty queue.
    pub fn new() -> Self {
        Self {
            order: VecDeque::new(),
        }
    }

    // == Refresh ==
    /// Moves a key to the back of the queue (newest candidate).
    ///
    /// If the key is already tracked it is removed first, so each key
    /// appears at most once.
    pub fn refresh(&mut self, key: &str) {
        self.remove(key);
        self.order.push_back(key.to_string());
    }

    // == Remove ==
    /// Removes a key from the queue; no-op if the key is not tracked.
    pub fn remove(&mut self, key: &str) {
        self.order.retain(|k| k != key);
    }

    // == Pop Oldest ==
    /// Returns and removes the next eviction victim.
    ///
    /// Returns None if the queue is empty.
    pub fn pop_oldest(&mut self) -> Option<String> {
        self.order.pop_front()
    }

    // == Peek Oldest ==
    /// Returns the next eviction victim without removing it.
    pub fn peek_oldest(&self) -> Option<&String> {
        self.order.front()
    }

    // == Length ==
    /// Returns the number of tracked keys.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    // == Is Empty ==
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    // == Contains ==
    /// Checks if a key is being tracked.
    #[allow(dead_code)]
    pub fn contains(&self, key: &str) -> bool {
        self.order.iter().any(|k| k == key)
    }
}
