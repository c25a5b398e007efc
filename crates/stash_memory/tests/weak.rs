// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Integration tests for `WeakMemoryCache`.

use std::sync::Arc;
use std::time::Duration;

use hourglass::{Clock, ClockControl};
use stash_core::SharedCache;
use stash_memory::WeakMemoryCache;

fn block_on<F: Future>(f: F) -> F::Output {
    futures::executor::block_on(f)
}

fn controlled_cache<V: Send + Sync>() -> (ClockControl, Clock, WeakMemoryCache<V>) {
    let control = ClockControl::new();
    let clock = control.to_clock();
    let cache = WeakMemoryCache::new(clock.clone());
    (control, clock, cache)
}

#[test]
fn get_misses_for_an_id_never_put() {
    block_on(async {
        let (_control, _clock, cache) = controlled_cache::<String>();

        assert!(cache.get("key", Duration::from_secs(60)).await.is_none());
    });
}

#[test]
fn hits_while_a_strong_reference_exists() {
    block_on(async {
        let (_control, clock, cache) = controlled_cache();

        let value = Arc::new("itemValue".to_owned());
        cache
            .put("id", Arc::clone(&value), clock.now() + Duration::from_secs(3600))
            .await;

        let cached = cache
            .get("id", Duration::from_secs(60))
            .await
            .expect("entry should exist while strongly referenced");
        assert_eq!(*cached, "itemValue");
        assert!(Arc::ptr_eq(&cached, &value));
    });
}

#[test]
fn misses_once_the_last_strong_reference_drops() {
    block_on(async {
        let (_control, clock, cache) = controlled_cache();

        let value = Arc::new("itemValue".to_owned());
        cache
            .put("id", Arc::clone(&value), clock.now() + Duration::from_secs(3600))
            .await;

        // Still referenced, still a hit.
        assert!(cache.get("id", Duration::from_secs(60)).await.is_some());

        // The expiry is an hour away, but nobody holds the value anymore.
        drop(value);
        assert!(cache.get("id", Duration::from_secs(60)).await.is_none());
    });
}

#[test]
fn a_reclaimed_value_never_resurrects() {
    block_on(async {
        let (_control, clock, cache) = controlled_cache();

        let value = Arc::new(vec![0_u8; 1024]);
        cache
            .put("id", Arc::clone(&value), clock.now() + Duration::from_secs(3600))
            .await;
        drop(value);

        assert!(cache.get("id", Duration::ZERO).await.is_none());
        assert!(cache.get("id", Duration::ZERO).await.is_none());
    });
}

#[test]
fn detecting_a_dead_entry_purges_it() {
    block_on(async {
        let (_control, clock, cache) = controlled_cache();

        let value = Arc::new(1_u64);
        cache
            .put("id", Arc::clone(&value), clock.now() + Duration::from_secs(3600))
            .await;
        drop(value);
        assert_eq!(cache.len(), 1);

        assert!(cache.get("id", Duration::ZERO).await.is_none());
        assert_eq!(cache.len(), 0);
    });
}

#[test]
fn a_returned_reference_keeps_the_value_alive() {
    block_on(async {
        let (_control, clock, cache) = controlled_cache();

        let value = Arc::new("payload".to_owned());
        cache
            .put("id", Arc::clone(&value), clock.now() + Duration::from_secs(3600))
            .await;

        let held = cache.get("id", Duration::ZERO).await.expect("entry should exist");
        drop(value);

        // The caller's reference is now the only strong one; the cache still
        // serves the value through it.
        assert!(cache.get("id", Duration::ZERO).await.is_some());

        drop(held);
        assert!(cache.get("id", Duration::ZERO).await.is_none());
    });
}

#[test]
fn ttl_expiry_applies_even_while_strongly_referenced() {
    block_on(async {
        let (control, clock, cache) = controlled_cache();

        let value = Arc::new(22);
        cache
            .put("id", Arc::clone(&value), clock.now() + Duration::from_secs(1))
            .await;

        assert!(cache.get("id", Duration::from_millis(1)).await.is_some());

        control.advance(Duration::from_millis(1100));
        assert!(cache.get("id", Duration::ZERO).await.is_none());
    });
}

#[test]
fn put_replaces_value_and_expiry() {
    block_on(async {
        let (_control, clock, cache) = controlled_cache();

        let first = Arc::new(22);
        let second = Arc::new(23);
        cache.put("key", Arc::clone(&first), clock.now() + Duration::from_secs(1)).await;
        cache
            .put("key", Arc::clone(&second), clock.now() + Duration::from_secs(3600))
            .await;

        let cached = cache
            .get("key", Duration::from_secs(60))
            .await
            .expect("entry should exist");
        assert_eq!(*cached, 23);
        assert!(cache.get("key", Duration::from_secs(7200)).await.is_none());
    });
}

#[test]
fn delete_removes_the_entry_and_is_idempotent() {
    block_on(async {
        let (_control, clock, cache) = controlled_cache();

        let value = Arc::new(42);
        cache
            .put("id", Arc::clone(&value), clock.now() + Duration::from_secs(3600))
            .await;

        cache.delete("id").await;
        assert!(cache.get("id", Duration::ZERO).await.is_none());

        cache.delete("id").await;
        assert!(cache.is_empty());
    });
}

#[test]
fn the_cache_alone_does_not_keep_values_alive() {
    block_on(async {
        let (_control, clock, cache) = controlled_cache();

        let value = Arc::new(String::from("observable"));
        let observer = Arc::downgrade(&value);

        cache.put("id", value, clock.now() + Duration::from_secs(3600)).await;

        // The caller's Arc was moved into put and dropped there; the cache
        // holds only a weak handle.
        assert!(observer.upgrade().is_none());
        assert!(cache.get("id", Duration::ZERO).await.is_none());
    });
}

#[test]
fn clone_shares_the_underlying_store() {
    block_on(async {
        let (_control, clock, cache) = controlled_cache();
        let clone = cache.clone();

        let value = Arc::new(9);
        cache
            .put("id", Arc::clone(&value), clock.now() + Duration::from_secs(3600))
            .await;

        assert!(clone.get("id", Duration::ZERO).await.is_some());
    });
}
