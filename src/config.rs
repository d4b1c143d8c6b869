//! Configuration Module
//!
//! Handles loading and validating cache configuration from environment
//! variables.

use std::env;

use crate::cache::{EvictionPolicy, DEFAULT_MAX_ENTRIES};
use crate::error::{ConfigError, Result};

// == Environment Variables ==
const MAX_ENTRIES_VAR: &str = "CACHE_MAX_ENTRIES";
const POLICY_VAR: &str = "CACHE_EVICTION_POLICY";

/// Cache configuration parameters.
///
/// All values can be configured via environment variables with sensible
/// defaults. Unlike ad-hoc env parsing, malformed values are reported as
/// errors instead of being silently replaced by defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheConfig {
    /// Maximum number of entries the cache can hold
    pub max_entries: usize,
    /// Victim selection strategy when the cache is full
    pub policy: EvictionPolicy,
}

impl CacheConfig {
    // == Constructor ==
    /// Creates a config with an explicit capacity and the default policy.
    ///
    /// Returns [`ConfigError::ZeroCapacity`] for a zero capacity.
    pub fn new(max_entries: usize) -> Result<Self> {
        if max_entries == 0 {
            return Err(ConfigError::ZeroCapacity);
        }
        Ok(Self {
            max_entries,
            policy: EvictionPolicy::default(),
        })
    }

    // == Policy ==
    /// Sets the eviction policy.
    pub fn with_policy(mut self, policy: EvictionPolicy) -> Self {
        self.policy = policy;
        self
    }

    // == From Env ==
    /// Creates a config from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_MAX_ENTRIES` - Maximum cache entries (default: 100)
    /// - `CACHE_EVICTION_POLICY` - `fifo` or `lru` (default: `fifo`)
    pub fn from_env() -> Result<Self> {
        let max_entries = match env::var(MAX_ENTRIES_VAR) {
            Ok(raw) => raw
                .trim()
                .parse::<usize>()
                .map_err(|_| ConfigError::InvalidMaxEntries {
                    var: MAX_ENTRIES_VAR,
                    value: raw.clone(),
                })?,
            Err(_) => DEFAULT_MAX_ENTRIES,
        };
        if max_entries == 0 {
            return Err(ConfigError::ZeroCapacity);
        }

        let policy = match env::var(POLICY_VAR) {
            Ok(raw) => raw.parse::<EvictionPolicy>()?,
            Err(_) => EvictionPolicy::default(),
        };

        Ok(Self {
            max_entries,
            policy,
        })
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            max_entries: DEFAULT_MAX_ENTRIES,
            policy: EvictionPolicy::default(),
        }
    }
}
