//! Background Tasks Module
//!
//! Contains the deferred tasks spawned on behalf of a cache.
//!
//! # Tasks
//! - Expiry: removes one key a fixed delay after it was written

mod expiry;

pub use expiry::{spawn_expiry_task, timers_enabled};
