//! Cache Interface
//!
//! Object-safe trait over key-value caches, so callers can hold a
//! `Box<dyn Cache<V>>` without naming the implementation.

/// A string-keyed cache of opaque values.
pub trait Cache<V>: Send + Sync {
    /// Returns the value stored under `key`, or `None` if it is absent.
    fn get(&self, key: &str) -> Option<V>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&self, key: String, value: V);
}
