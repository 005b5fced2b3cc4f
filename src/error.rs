//! Error types for the cache
//!
//! Get and Set never fail; the only failure is constructing a cache with no
//! runtime to run its expiry timers on.

use thiserror::Error;

// == Cache Error Enum ==
/// Unified error type for the cache.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CacheError {
    /// No Tokio runtime is available to schedule expirations on
    #[error("No Tokio runtime available to schedule expirations: {0}")]
    NoRuntime(String),
}

// == Result Type Alias ==
/// Convenience Result type for the cache.
pub type Result<T> = std::result::Result<T, CacheError>;
