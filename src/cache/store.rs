//! Cache Store Module
//!
//! Main cache engine: a single locked HashMap plus one expiry task per write.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::runtime::Handle;
use tracing::debug;

use crate::cache::{Cache, Entries};
use crate::config::CacheConfig;
use crate::error::{CacheError, Result};
use crate::tasks::{spawn_expiry_task, timers_enabled};

// == TTL Cache ==
/// Thread-safe key-value cache with a fixed time-to-live per write.
///
/// Every `set` arms its own one-shot removal of the key after the cache's
/// expiration has elapsed. Removals are never cancelled: if a key is written
/// twice within the expiration window, the removal armed by the first write
/// still fires at its original time and drops the newer value.
///
/// Clones share the same mapping. When the last clone is dropped the mapping
/// is freed and any removals still pending become no-ops.
pub struct TtlCache<V> {
    /// Key-value storage, guarded by one lock for the whole map
    entries: Arc<Entries<V>>,
    /// Delay between a write and its removal
    expiration: Duration,
    /// Runtime the expiry tasks are spawned on
    runtime: Handle,
}

impl<V> TtlCache<V>
where
    V: Send + 'static,
{
    // == Constructors ==
    /// Creates an empty cache whose entries expire after `expiration`.
    ///
    /// Expiry tasks run on the Tokio runtime this is called from. A zero
    /// expiration removes entries at the runtime's next opportunity.
    ///
    /// # Panics
    /// Panics when called outside a Tokio runtime. Use [`TtlCache::try_new`]
    /// or [`TtlCache::with_handle`] where that can happen.
    pub fn new(expiration: Duration) -> Self {
        Self::with_handle(expiration, Handle::current())
    }

    /// Creates an empty cache on the current Tokio runtime, failing with
    /// [`CacheError::NoRuntime`] when there is none or its timers are
    /// disabled.
    pub fn try_new(expiration: Duration) -> Result<Self> {
        let runtime =
            Handle::try_current().map_err(|err| CacheError::NoRuntime(err.to_string()))?;
        Self::try_with_handle(expiration, runtime)
    }

    /// Creates an empty cache that spawns its expiry tasks on `runtime`.
    ///
    /// `runtime` must have been built with `enable_time` (or `enable_all`).
    /// Without a time driver every expiry task panics and entries are never
    /// removed; use [`TtlCache::try_with_handle`] when that is not known.
    pub fn with_handle(expiration: Duration, runtime: Handle) -> Self {
        debug!(?expiration, "cache created");
        Self {
            entries: Arc::new(Mutex::new(HashMap::new())),
            expiration,
            runtime,
        }
    }

    /// Creates an empty cache on `runtime` after checking that its timers
    /// are enabled, failing with [`CacheError::NoRuntime`] otherwise.
    pub fn try_with_handle(expiration: Duration, runtime: Handle) -> Result<Self> {
        if !timers_enabled(&runtime) {
            return Err(CacheError::NoRuntime(
                "runtime was built without enable_time".to_string(),
            ));
        }
        Ok(Self::with_handle(expiration, runtime))
    }

    /// Creates a cache from configuration on the current Tokio runtime.
    ///
    /// # Panics
    /// Panics when called outside a Tokio runtime.
    pub fn from_config(config: &CacheConfig) -> Self {
        Self::new(config.expiration())
    }

    /// Fallible variant of [`TtlCache::from_config`].
    pub fn try_from_config(config: &CacheConfig) -> Result<Self> {
        Self::try_new(config.expiration())
    }

    // == Set ==
    /// Stores `value` under `key` and arms a removal of `key` after the
    /// expiration.
    ///
    /// Overwriting a key does not cancel removals armed by earlier writes.
    pub fn set(&self, key: impl Into<String>, value: V) {
        let key = key.into();
        // Drop any replaced value after the guard is released
        let replaced = self.entries.lock().insert(key.clone(), value);
        drop(replaced);

        debug!(key = %key, "entry stored, expiry armed");
        spawn_expiry_task(
            Arc::downgrade(&self.entries),
            key,
            self.expiration,
            &self.runtime,
        );
    }
}

impl<V> TtlCache<V> {
    // == Get ==
    /// Returns a copy of the value stored under `key`, or `None` if absent.
    ///
    /// Reads never extend an entry's lifetime. Store `Arc<T>` to share large
    /// values instead of duplicating them.
    pub fn get(&self, key: &str) -> Option<V>
    where
        V: Clone,
    {
        self.entries.lock().get(key).cloned()
    }

    /// Returns true if `key` is currently present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.lock().contains_key(key)
    }

    /// Returns the fixed expiration of this cache.
    pub fn expiration(&self) -> Duration {
        self.expiration
    }

    // == Length ==
    /// Returns the current number of entries in the cache.
    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    /// Returns true if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }
}

impl<V> Clone for TtlCache<V> {
    fn clone(&self) -> Self {
        Self {
            entries: Arc::clone(&self.entries),
            expiration: self.expiration,
            runtime: self.runtime.clone(),
        }
    }
}

impl<V> fmt::Debug for TtlCache<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TtlCache")
            .field("len", &self.len())
            .field("expiration", &self.expiration)
            .finish()
    }
}

impl<V> Cache<V> for TtlCache<V>
where
    V: Clone + Send + 'static,
{
    fn get(&self, key: &str) -> Option<V> {
        TtlCache::get(self, key)
    }

    fn set(&self, key: String, value: V) {
        TtlCache::set(self, key, value)
    }
}
