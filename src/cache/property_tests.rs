//! Property-Based Tests for Cache Module
//!
//! Uses proptest to check the cache against a plain HashMap model while no
//! expiration has had a chance to fire.

use proptest::prelude::*;
use std::collections::HashMap;
use std::time::Duration;

use tokio::runtime::{Builder, Runtime};

use crate::cache::TtlCache;

// == Test Configuration ==
const TEST_EXPIRATION: Duration = Duration::from_secs(300);

/// Builds a runtime that is never driven, so armed removals stay pending for
/// the whole test case.
fn idle_runtime() -> Runtime {
    Builder::new_current_thread().enable_time().build().unwrap()
}

// == Strategies ==
/// Generates cache keys, including the empty key
fn key_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9_]{0,16}"
}

/// Generates cache values
fn value_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 ]{0,64}"
}

#[derive(Debug, Clone)]
enum CacheOp {
    Set { key: String, value: String },
    Get { key: String },
}

fn cache_op_strategy() -> impl Strategy<Value = CacheOp> {
    // Narrow key space so sets and gets overlap
    let key = "[a-d]";
    prop_oneof![
        (key, value_strategy()).prop_map(|(key, value)| CacheOp::Set { key, value }),
        key.prop_map(|key| CacheOp::Get { key }),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_fresh_cache_has_no_keys(key in key_strategy()) {
        let runtime = idle_runtime();
        let cache: TtlCache<String> = TtlCache::with_handle(TEST_EXPIRATION, runtime.handle().clone());

        prop_assert_eq!(cache.get(&key), None);
    }

    #[test]
    fn prop_roundtrip_storage(key in key_strategy(), value in value_strategy()) {
        let runtime = idle_runtime();
        let cache = TtlCache::with_handle(TEST_EXPIRATION, runtime.handle().clone());

        cache.set(key.clone(), value.clone());

        prop_assert_eq!(cache.get(&key), Some(value));
    }

    #[test]
    fn prop_overwrite_semantics(
        key in key_strategy(),
        value1 in value_strategy(),
        value2 in value_strategy()
    ) {
        let runtime = idle_runtime();
        let cache = TtlCache::with_handle(TEST_EXPIRATION, runtime.handle().clone());

        cache.set(key.clone(), value1);
        cache.set(key.clone(), value2.clone());

        prop_assert_eq!(cache.get(&key), Some(value2));
        prop_assert_eq!(cache.len(), 1, "Should have exactly one entry after overwrite");
    }

    #[test]
    fn prop_matches_hashmap_model(ops in prop::collection::vec(cache_op_strategy(), 1..50)) {
        let runtime = idle_runtime();
        let cache = TtlCache::with_handle(TEST_EXPIRATION, runtime.handle().clone());
        let mut model: HashMap<String, String> = HashMap::new();

        for op in ops {
            match op {
                CacheOp::Set { key, value } => {
                    cache.set(key.clone(), value.clone());
                    model.insert(key, value);
                }
                CacheOp::Get { key } => {
                    prop_assert_eq!(cache.get(&key), model.get(&key).cloned());
                }
            }
        }

        prop_assert_eq!(cache.len(), model.len());
    }
}
