//! Expiry Task
//!
//! One-shot task that removes a single key once its delay has elapsed.

use std::panic;
use std::sync::Weak;
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tracing::{debug, trace};

use crate::cache::Entries;

/// Returns true if `runtime` was built with its time driver enabled.
///
/// Creating a `Sleep` on a runtime without `enable_time` panics, so the check
/// enters the runtime and builds one inside `catch_unwind`.
pub fn timers_enabled(runtime: &Handle) -> bool {
    let _guard = runtime.enter();
    panic::catch_unwind(|| {
        let _sleep = tokio::time::sleep(Duration::ZERO);
    })
    .is_ok()
}

/// Spawns a task that sleeps for `delay` and then removes `key` from the
/// entries it was armed for.
///
/// The removal is unconditional: whatever value sits under `key` when the
/// task wakes is dropped, even if it was written by a later Set. The task only
/// holds a weak reference, so once every handle to the cache is gone the
/// removal does nothing.
///
/// # Arguments
/// * `entries` - Weak reference to the cache's locked mapping
/// * `key` - The key to remove
/// * `delay` - How long to wait before removing
/// * `runtime` - Runtime the task is spawned on
///
/// # Returns
/// A JoinHandle for the spawned task. Dropping it detaches the task; it is not
/// cancelled.
pub fn spawn_expiry_task<V>(
    entries: Weak<Entries<V>>,
    key: String,
    delay: Duration,
    runtime: &Handle,
) -> JoinHandle<()>
where
    V: Send + 'static,
{
    runtime.spawn(async move {
        tokio::time::sleep(delay).await;

        let Some(entries) = entries.upgrade() else {
            trace!(key = %key, "expiry fired after cache was dropped");
            return;
        };

        // Drop the value after the guard is released
        let removed = { entries.lock().remove(&key) };
        if removed.is_some() {
            debug!(key = %key, "expired entry removed");
        } else {
            trace!(key = %key, "expiry fired for absent key");
        }
    })
}
