//! Error types for the cache crate
//!
//! Provides unified error handling using thiserror.
//!
//! Cache operations themselves are total and never fail; the only fallible
//! surface is configuration.

use thiserror::Error;

// == Config Error Enum ==
/// Errors raised while building a [`CacheConfig`].
///
/// [`CacheConfig`]: crate::config::CacheConfig
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// An environment variable held a non-numeric entry count
    #[error("invalid value for {var}: '{value}' is not a positive integer")]
    InvalidMaxEntries { var: &'static str, value: String },

    /// The configured capacity was zero
    #[error("max_entries must be at least 1")]
    ZeroCapacity,

    /// An unrecognized eviction policy name
    #[error("unknown eviction policy: '{0}' (expected 'fifo' or 'lru')")]
    UnknownPolicy(String),
}

// == Result Type Alias ==
/// Convenience Result type for configuration handling.
pub type Result<T> = std::result::Result<T, ConfigError>;
