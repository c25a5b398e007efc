// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Tracing instrumentation for cache operations.
//!
//! This module provides [`TracedCache`], a decorator that emits one
//! `tracing` span per cache call while forwarding the call unchanged.

use std::sync::Arc;
use std::time::{Duration, Instant};

use stash_core::{Cache, SharedCache};
use tracing::Instrument;
use tracing::field::Empty;

/// Type alias for cache names used in instrumentation.
pub type CacheName = &'static str;

/// Wraps a cache and adds tracing instrumentation to it.
///
/// Every call is forwarded unchanged to the wrapped cache and enclosed in a
/// span named after the operation (`cache.get`, `cache.put`, `cache.delete`)
/// carrying the cache name, the entry id, and, for `get`, whether the lookup
/// hit. Since the id is recorded, do not use this with sensitive ids;
/// values are never recorded.
///
/// `TracedCache` implements both [`Cache`] and [`SharedCache`] when the
/// wrapped cache does, so it composes with storage, adapters, and further
/// decorators in any order. With no subscriber installed the spans cost
/// almost nothing and go nowhere; cache behavior is identical either way.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
///
/// use hourglass::Clock;
/// use stash::{Cache, InMemoryCache, TracedCache};
///
/// # futures::executor::block_on(async {
/// let clock = Clock::new();
/// let cache = TracedCache::new(InMemoryCache::new(clock.clone()), "sessions");
///
/// cache.put("id", 42, clock.now() + Duration::from_secs(60)).await;
/// assert_eq!(cache.get("id", Duration::ZERO).await, Some(42));
/// # });
/// ```
#[derive(Debug, Clone)]
pub struct TracedCache<C> {
    inner: C,
    name: CacheName,
}

impl<C> TracedCache<C> {
    /// Wraps `inner`, labeling its spans with `name`.
    pub fn new(inner: C, name: CacheName) -> Self {
        Self { inner, name }
    }

    /// Returns the name recorded on emitted spans.
    #[must_use]
    pub fn name(&self) -> CacheName {
        self.name
    }

    /// Returns a reference to the wrapped cache.
    #[must_use]
    pub fn inner(&self) -> &C {
        &self.inner
    }
}

impl<V, C> Cache<V> for TracedCache<C>
where
    V: Send,
    C: Cache<V>,
{
    async fn get(&self, id: &str, minimum_lifetime: Duration) -> Option<V> {
        let span = tracing::debug_span!(
            "cache.get",
            cache.name = self.name,
            cache.id = id,
            cache.found = Empty,
        );
        let value = self
            .inner
            .get(id, minimum_lifetime)
            .instrument(span.clone())
            .await;
        span.record("cache.found", value.is_some());
        value
    }

    async fn put(&self, id: &str, value: V, expires_at: Instant) {
        let span = tracing::debug_span!("cache.put", cache.name = self.name, cache.id = id);
        self.inner.put(id, value, expires_at).instrument(span).await;
    }

    async fn delete(&self, id: &str) {
        let span = tracing::debug_span!("cache.delete", cache.name = self.name, cache.id = id);
        self.inner.delete(id).instrument(span).await;
    }
}

impl<V, C> SharedCache<V> for TracedCache<C>
where
    V: Send + Sync,
    C: SharedCache<V>,
{
    async fn get(&self, id: &str, minimum_lifetime: Duration) -> Option<Arc<V>> {
        let span = tracing::debug_span!(
            "cache.get",
            cache.name = self.name,
            cache.id = id,
            cache.found = Empty,
        );
        let value = self
            .inner
            .get(id, minimum_lifetime)
            .instrument(span.clone())
            .await;
        span.record("cache.found", value.is_some());
        value
    }

    async fn put(&self, id: &str, value: Arc<V>, expires_at: Instant) {
        let span = tracing::debug_span!("cache.put", cache.name = self.name, cache.id = id);
        self.inner.put(id, value, expires_at).instrument(span).await;
    }

    async fn delete(&self, id: &str) {
        let span = tracing::debug_span!("cache.delete", cache.name = self.name, cache.id = id);
        self.inner.delete(id).instrument(span).await;
    }
}
