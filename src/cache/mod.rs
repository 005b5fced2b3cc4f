//! Cache Module
//!
//! Provides an in-memory key-value cache where every write is removed a fixed
//! duration after it happened.

mod store;
mod traits;

#[cfg(test)]
mod property_tests;

use std::collections::HashMap;

use parking_lot::Mutex;

// Re-export public types
pub use store::TtlCache;
pub use traits::Cache;

/// The locked mapping shared between a cache and its pending expiry tasks.
pub type Entries<V> = Mutex<HashMap<String, V>>;
