//! Configuration Module
//!
//! Construction settings for a cache, loadable from an embedding
//! application's own config files via serde.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Default expiration in seconds.
pub const DEFAULT_EXPIRATION_SECS: u64 = 3;

/// Cache configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Time in seconds after which a written entry is removed
    pub expiration_secs: u64,
}

impl CacheConfig {
    /// Creates a config with the given expiration in seconds.
    pub fn new(expiration_secs: u64) -> Self {
        Self { expiration_secs }
    }

    /// Returns the expiration as a `Duration`.
    pub fn expiration(&self) -> Duration {
        Duration::from_secs(self.expiration_secs)
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            expiration_secs: DEFAULT_EXPIRATION_SECS,
        }
    }
}
