// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! End-to-end scenarios across storage, adapters, and decorators.

use std::sync::Arc;
use std::time::Duration;

use hourglass::ClockControl;
use stash::{Cache, CacheExt, InMemoryCache, SharedCache, SharedCacheExt, WeakMemoryCache};

fn block_on<F: Future>(f: F) -> F::Output {
    futures::executor::block_on(f)
}

#[test]
fn short_lived_entry_hits_then_expires() {
    block_on(async {
        let control = ClockControl::new();
        let clock = control.to_clock();
        let cache = InMemoryCache::new(clock.clone());

        cache.put("k", 22, clock.now() + Duration::from_secs(1)).await;
        assert_eq!(cache.get("k", Duration::from_millis(1)).await, Some(22));

        control.advance(Duration::from_millis(1100));
        assert_eq!(cache.get("k", Duration::ZERO).await, None);
    });
}

#[test]
fn overwrite_extends_a_lifetime() {
    block_on(async {
        let control = ClockControl::new();
        let clock = control.to_clock();
        let cache = InMemoryCache::new(clock.clone());

        cache.put("k", 22, clock.now() + Duration::from_secs(1)).await;
        cache.put("k", 23, clock.now() + Duration::from_secs(3600)).await;

        assert_eq!(cache.get("k", Duration::from_secs(60)).await, Some(23));
        assert_eq!(cache.get("k", Duration::from_secs(7200)).await, None);
    });
}

#[test]
fn the_full_stack_behaves_like_bare_storage() {
    block_on(async {
        let control = ClockControl::new();
        let clock = control.to_clock();

        // Decorators on both sides of the adapter, strong value kept through
        // the shared handle underneath.
        let shared = WeakMemoryCache::<i32>::new(clock.clone());
        let stacked = shared.clone().traced("inner").by_value().traced("outer");

        let value = Arc::new(22);
        shared
            .put("k", Arc::clone(&value), clock.now() + Duration::from_secs(1))
            .await;

        assert_eq!(stacked.get("k", Duration::from_millis(1)).await, Some(22));

        control.advance(Duration::from_millis(1100));
        assert_eq!(stacked.get("k", Duration::ZERO).await, None);
    });
}

#[test]
fn stacked_writes_are_visible_to_the_bare_cache() {
    block_on(async {
        let control = ClockControl::new();
        let clock = control.to_clock();
        let plain = InMemoryCache::<i32>::new(clock.clone());
        let stacked = plain.clone().traced("stack");

        stacked.put("k", 1, clock.now() + Duration::from_secs(60)).await;
        assert_eq!(plain.get("k", Duration::ZERO).await, Some(1));

        plain.put("k", 2, clock.now() + Duration::from_secs(60)).await;
        assert_eq!(stacked.get("k", Duration::ZERO).await, Some(2));

        stacked.delete("k").await;
        assert_eq!(plain.get("k", Duration::ZERO).await, None);
    });
}

#[test]
fn weak_and_strong_caches_expire_identically() {
    block_on(async {
        let control = ClockControl::new();
        let clock = control.to_clock();

        let strong = InMemoryCache::new(clock.clone());
        let weak = WeakMemoryCache::new(clock.clone());

        let value = Arc::new(22);
        strong.put("k", 22, clock.now() + Duration::from_secs(1)).await;
        weak.put("k", Arc::clone(&value), clock.now() + Duration::from_secs(1)).await;

        assert_eq!(strong.get("k", Duration::from_millis(1)).await, Some(22));
        assert_eq!(weak.get("k", Duration::from_millis(1)).await.as_deref(), Some(&22));

        control.advance(Duration::from_millis(1100));

        // TTL expiry surfaces the same way whether or not the value is
        // still strongly referenced.
        assert_eq!(strong.get("k", Duration::ZERO).await, None);
        assert!(weak.get("k", Duration::ZERO).await.is_none());
    });
}
