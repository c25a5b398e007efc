// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Bridging the reference-oriented contract back to values.

use std::sync::Arc;
use std::time::{Duration, Instant};

use stash_core::{Cache, SharedCache};

/// Presents a [`SharedCache`] through the value-oriented [`Cache`] contract.
///
/// `get` clones the value out of the returned `Arc` and `put` stores a fresh
/// allocation of the given value, so every operation pays a copy that the
/// reference-oriented contract avoids. Nothing retains the strong reference
/// once `put` returns; over weak storage the entry is therefore reclaimable
/// immediately. The adapter exists for interoperability and testing, not for
/// high-throughput paths with large values; use the [`SharedCache`] contract
/// directly there.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use std::time::Duration;
///
/// use hourglass::Clock;
/// use stash::{Cache, SharedCache, SharedValueAdapter, WeakMemoryCache};
///
/// # futures::executor::block_on(async {
/// let clock = Clock::new();
/// let shared = WeakMemoryCache::new(clock.clone());
///
/// // Keep a strong reference through the shared contract...
/// let value = Arc::new(22);
/// shared.put("id", Arc::clone(&value), clock.now() + Duration::from_secs(60)).await;
///
/// // ...and read it as a plain value through the adapter.
/// let adapter = SharedValueAdapter::new(shared);
/// assert_eq!(adapter.get("id", Duration::ZERO).await, Some(22));
/// # });
/// ```
#[derive(Debug, Clone)]
pub struct SharedValueAdapter<C> {
    inner: C,
}

impl<C> SharedValueAdapter<C> {
    /// Wraps a reference-oriented cache.
    pub fn new(inner: C) -> Self {
        Self { inner }
    }

    /// Returns a reference to the wrapped cache.
    #[must_use]
    pub fn inner(&self) -> &C {
        &self.inner
    }
}

impl<V, C> Cache<V> for SharedValueAdapter<C>
where
    V: Clone + Send + Sync,
    C: SharedCache<V>,
{
    async fn get(&self, id: &str, minimum_lifetime: Duration) -> Option<V> {
        self.inner
            .get(id, minimum_lifetime)
            .await
            .map(|value| (*value).clone())
    }

    async fn put(&self, id: &str, value: V, expires_at: Instant) {
        self.inner.put(id, Arc::new(value), expires_at).await;
    }

    async fn delete(&self, id: &str) {
        self.inner.delete(id).await;
    }
}
