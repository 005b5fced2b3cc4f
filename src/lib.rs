//! Local Cache - a minimal in-process key-value cache
//!
//! Stores opaque values under string keys and removes each write a fixed
//! duration after it happened, using one-shot Tokio timers instead of a
//! background sweeper.
//!
//! ```no_run
//! use std::time::Duration;
//! use local_cache::TtlCache;
//!
//! #[tokio::main]
//! async fn main() {
//!     let cache = TtlCache::new(Duration::from_secs(3));
//!     cache.set("stringKey", "value".to_string());
//!     assert_eq!(cache.get("stringKey"), Some("value".to_string()));
//! }
//! ```

pub mod cache;
pub mod config;
pub mod error;
pub mod tasks;

pub use cache::{Cache, TtlCache};
pub use config::CacheConfig;
pub use error::{CacheError, Result};
